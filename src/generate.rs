//! HTML site generation.
//!
//! Renders every route through a headless [`Shell`] and writes the result
//! to the output directory.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Home
//! ├── about/index.html           # About
//! ├── services/index.html        # Services
//! ├── contact/index.html         # Contact
//! ├── 404.html                   # Not found (served for unknown paths)
//! └── .build-manifest.json       # Write cache, see crate::cache
//! ```
//!
//! Each page is a single self-contained file: CSS and script are inlined,
//! images are remote references.

use crate::cache::{self, BuildManifest};
use crate::config::SiteConfig;
use crate::route::{Location, NOT_FOUND_FILE, Route};
use crate::shell::Shell;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Path used to render the not-found page. Anything outside the route table works.
const NOT_FOUND_PATH: &str = "/404";

/// A fully rendered page, ready to be written or served.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub location: Location,
    /// Output path relative to the build directory.
    pub file: &'static str,
    pub html: String,
}

impl RenderedPage {
    pub fn label(&self) -> &'static str {
        match &self.location {
            Location::Route(route) => route.label(),
            Location::Unknown(_) => "Not Found",
        }
    }
}

/// Render every route plus the not-found page, in navigation order.
pub fn render_site(config: &SiteConfig) -> Vec<RenderedPage> {
    let mut shell = Shell::headless(config, Route::Home.path());
    let mut pages: Vec<RenderedPage> = Route::ALL
        .into_iter()
        .map(|route| {
            shell.navigate(route.path());
            RenderedPage {
                location: route.into(),
                file: route.output_file(),
                html: shell.render().into_string(),
            }
        })
        .collect();

    shell.navigate(NOT_FOUND_PATH);
    pages.push(RenderedPage {
        location: shell.location().clone(),
        file: NOT_FOUND_FILE,
        html: shell.render().into_string(),
    });
    pages
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Written,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub label: &'static str,
    pub file: &'static str,
    pub bytes: usize,
    pub status: PageStatus,
}

/// What a generate run did, page by page.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
}

impl GenerateReport {
    pub fn written(&self) -> usize {
        self.count(PageStatus::Written)
    }

    pub fn unchanged(&self) -> usize {
        self.count(PageStatus::Unchanged)
    }

    fn count(&self, status: PageStatus) -> usize {
        self.pages.iter().filter(|p| p.status == status).count()
    }
}

/// Render the site into `output_dir`.
///
/// With `use_cache`, pages whose content matches the previous build are left
/// untouched on disk.
pub fn generate(
    config: &SiteConfig,
    output_dir: &Path,
    use_cache: bool,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let previous = if use_cache {
        BuildManifest::load(output_dir)
    } else {
        BuildManifest::empty()
    };
    let mut manifest = BuildManifest::empty();
    let mut report = GenerateReport::default();

    for page in render_site(config) {
        let digest = cache::content_hash(page.html.as_bytes());
        let status = if previous.is_fresh(page.file, &digest, output_dir) {
            tracing::debug!(file = page.file, "unchanged");
            PageStatus::Unchanged
        } else {
            let target = output_dir.join(page.file);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, &page.html)?;
            tracing::debug!(file = page.file, bytes = page.html.len(), "written");
            PageStatus::Written
        };
        manifest.insert(page.file.to_string(), digest);
        report.pages.push(GeneratedPage {
            label: page.label(),
            file: page.file,
            bytes: page.html.len(),
            status,
        });
    }

    manifest.save(output_dir)?;
    tracing::info!(
        written = report.written(),
        unchanged = report.unchanged(),
        output = %output_dir.display(),
        "site generated"
    );
    Ok(report)
}

// ============================================================================
// Tests
// ============================================================================
