//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. Stock defaults are
//! the base layer; a `site.toml` in the project directory overrides any subset
//! of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! lang = "en"
//! description = "Pixel & Co is a design studio for ambitious startups."
//!
//! [colors]
//! brand_yellow = "#FFD60A"  # Accent: highlights, buttons, Contact page
//! brand_gray = "#1A1A1A"    # Footer and mobile menu panels
//! background = "#000000"
//! text = "#FFFFFF"
//! text_muted = "#9CA3AF"    # Secondary copy, categories
//!
//! [motion]
//! duration_ms = 800         # Length of each entrance animation
//! distance_px = 50          # How far sliding entrances travel
//! respect_reduced_motion = true
//!
//! [serve]
//! host = "127.0.0.1"
//! port = 4000
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the project directory.
pub const CONFIG_FILENAME: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document-level metadata.
    pub site: SiteMeta,
    /// Brand palette.
    pub colors: ColorConfig,
    /// Entrance animation tuning.
    pub motion: MotionConfig,
    /// Preview server settings.
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        for (key, value) in self.colors.entries() {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "colors.{key} must be a hex color like #FFD60A, got {value:?}"
                )));
            }
        }
        if self.motion.duration_ms > 5000 {
            return Err(ConfigError::Validation(
                "motion.duration_ms must be 0-5000".into(),
            ));
        }
        if self.serve.port == 0 {
            return Err(ConfigError::Validation("serve.port must be non-zero".into()));
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// `<html lang>` attribute.
    pub lang: String,
    /// `<meta name="description">` content.
    pub description: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            description: "Pixel & Co is a design studio for ambitious startups.".to_string(),
        }
    }
}

/// Brand palette. Every value is a hex colour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Accent colour: highlights, primary buttons, Contact page background.
    pub brand_yellow: String,
    /// Panel colour for the footer and the mobile menu.
    pub brand_gray: String,
    pub background: String,
    pub text: String,
    /// Secondary copy.
    pub text_muted: String,
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("brand_yellow", &self.brand_yellow),
            ("brand_gray", &self.brand_gray),
            ("background", &self.background),
            ("text", &self.text),
            ("text_muted", &self.text_muted),
        ]
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            brand_yellow: "#FFD60A".to_string(),
            brand_gray: "#1A1A1A".to_string(),
            background: "#000000".to_string(),
            text: "#FFFFFF".to_string(),
            text_muted: "#9CA3AF".to_string(),
        }
    }
}

/// Entrance animation tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Length of each entrance animation in milliseconds.
    pub duration_ms: u32,
    /// Travel distance of sliding entrances in pixels.
    pub distance_px: u32,
    /// Skip entrances for visitors who ask for reduced motion.
    pub respect_reduced_motion: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            distance_px: 50,
            respect_reduced_motion: true,
        }
    }
}

/// Preview server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `site.toml` exists in the directory.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `site.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Pixel & Co Site Configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Document metadata
# ---------------------------------------------------------------------------
[site]
# Value of the <html lang> attribute.
lang = "en"

# Value of <meta name="description"> on every page.
description = "Pixel & Co is a design studio for ambitious startups."

# ---------------------------------------------------------------------------
# Brand palette (hex colors)
# ---------------------------------------------------------------------------
[colors]
brand_yellow = "#FFD60A"  # Highlights, primary buttons, Contact page background
brand_gray = "#1A1A1A"    # Footer and mobile menu panels
background = "#000000"
text = "#FFFFFF"
text_muted = "#9CA3AF"    # Secondary copy, work categories

# ---------------------------------------------------------------------------
# Entrance animations
# ---------------------------------------------------------------------------
[motion]
# Length of each entrance animation in milliseconds (0-5000).
duration_ms = 800

# Travel distance of sliding entrances in pixels.
distance_px = 50

# Skip entrances for visitors with prefers-reduced-motion set.
respect_reduced_motion = true

# ---------------------------------------------------------------------------
# Preview server (pixelco serve)
# ---------------------------------------------------------------------------
[serve]
host = "127.0.0.1"
port = 4000
"##
}

/// Generate CSS custom properties from the brand palette.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --brand-yellow: {yellow};
    --brand-gray: {gray};
    --color-bg: {bg};
    --color-text: {text};
    --color-text-muted: {muted};
}}"#,
        yellow = colors.brand_yellow,
        gray = colors.brand_gray,
        bg = colors.background,
        text = colors.text,
        muted = colors.text_muted,
    )
}

/// Generate CSS custom properties for entrance animations.
///
/// With `respect_reduced_motion`, a media query zeroes both the duration and
/// the travel so entrances resolve instantly.
pub fn generate_motion_css(motion: &MotionConfig) -> String {
    let mut css = format!(
        r#":root {{
    --reveal-duration: {duration}ms;
    --reveal-distance: {distance}px;
}}"#,
        duration = motion.duration_ms,
        distance = motion.distance_px,
    );
    if motion.respect_reduced_motion {
        css.push_str(
            r#"

@media (prefers-reduced-motion: reduce) {
    :root {
        --reveal-duration: 0ms;
        --reveal-distance: 0px;
    }
}"#,
        );
    }
    css
}
