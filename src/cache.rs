//! Write cache for incremental builds.
//!
//! Rendering every page is cheap; rewriting files that did not change is not
//! free for anything watching the output directory (rsync deploys, file
//! watchers, CDN uploaders keyed on mtime). This module lets the generate
//! stage skip writing a page whose bytes are identical to the last build.
//!
//! # Design
//!
//! The cache is **content-addressed**: each output path maps to the SHA-256
//! of the bytes last written there. A page is fresh when
//!
//! 1. an entry for its output path exists with the same digest, and
//! 2. the file is still on disk.
//!
//! Deleting a generated file therefore forces it to be rewritten even if the
//! manifest still lists it.
//!
//! ## Storage
//!
//! The manifest is a JSON file at `<output_dir>/.build-manifest.json` so it
//! travels with the output directory when cached in CI.
//!
//! ## Bypassing the cache
//!
//! Pass `--force` to `build` to start from an empty manifest. Every page is
//! rewritten and the manifest is rebuilt from scratch.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// Name of the cache manifest file within the output directory.
pub const MANIFEST_FILENAME: &str = ".build-manifest.json";

/// Version of the manifest format. Bump to invalidate existing caches.
const MANIFEST_VERSION: u32 = 1;

/// On-disk manifest mapping output paths to content digests.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct BuildManifest {
    pub version: u32,
    pub entries: BTreeMap<String, String>,
}

impl BuildManifest {
    /// Create an empty manifest (used for `--force` or first build).
    pub fn empty() -> Self {
        Self {
            version: MANIFEST_VERSION,
            entries: BTreeMap::new(),
        }
    }

    /// Load from the output directory. Returns an empty manifest if the
    /// file doesn't exist or can't be parsed (version mismatch, corruption).
    pub fn load(output_dir: &Path) -> Self {
        let path = output_dir.join(MANIFEST_FILENAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return Self::empty(),
        };
        let manifest: Self = match serde_json::from_str(&content) {
            Ok(m) => m,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring unreadable build manifest");
                return Self::empty();
            }
        };
        if manifest.version != MANIFEST_VERSION {
            return Self::empty();
        }
        manifest
    }

    /// Save to the output directory.
    pub fn save(&self, output_dir: &Path) -> io::Result<()> {
        let path = output_dir.join(MANIFEST_FILENAME);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }

    /// Whether `output_path` already holds content with `digest`.
    pub fn is_fresh(&self, output_path: &str, digest: &str, output_dir: &Path) -> bool {
        self.entries.get(output_path).is_some_and(|d| d == digest)
            && output_dir.join(output_path).exists()
    }

    pub fn insert(&mut self, output_path: String, digest: String) {
        self.entries.insert(output_path, digest);
    }
}

/// SHA-256 of `bytes` as lowercase hex.
pub fn content_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn content_hash_is_stable_hex() {
        let a = content_hash(b"<html></html>");
        assert_eq!(a.len(), 64);
        assert_eq!(a, content_hash(b"<html></html>"));
        assert_ne!(a, content_hash(b"<html> </html>"));
        // Well-known digest of the empty string.
        assert_eq!(
            content_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn save_and_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let mut manifest = BuildManifest::empty();
        manifest.insert("index.html".into(), "abc".into());
        manifest.save(tmp.path()).unwrap();

        assert_eq!(BuildManifest::load(tmp.path()), manifest);
    }

    #[test]
    fn load_missing_or_corrupt_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(BuildManifest::load(tmp.path()).entries.is_empty());

        std::fs::write(tmp.path().join(MANIFEST_FILENAME), "{ not json").unwrap();
        assert!(BuildManifest::load(tmp.path()).entries.is_empty());
    }

    #[test]
    fn load_version_mismatch_is_empty() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(MANIFEST_FILENAME),
            r#"{"version": 99, "entries": {"index.html": "abc"}}"#,
        )
        .unwrap();
        assert!(BuildManifest::load(tmp.path()).entries.is_empty());
    }

    #[test]
    fn fresh_requires_matching_digest_and_file() {
        let tmp = TempDir::new().unwrap();
        let mut manifest = BuildManifest::empty();
        manifest.insert("index.html".into(), "abc".into());

        // Listed but missing on disk
        assert!(!manifest.is_fresh("index.html", "abc", tmp.path()));

        std::fs::write(tmp.path().join("index.html"), "x").unwrap();
        assert!(manifest.is_fresh("index.html", "abc", tmp.path()));
        assert!(!manifest.is_fresh("index.html", "def", tmp.path()));
        assert!(!manifest.is_fresh("about/index.html", "abc", tmp.path()));
    }
}
