//! Build manifest for incremental output writes.
//!
//! The page is cheap to render, but rewriting an unchanged `index.html` bumps
//! its mtime and invalidates downstream caches (rsync, CDN uploads, browser
//! revalidation). The build manifest lets `generate` leave identical output
//! untouched.
//!
//! # Design
//!
//! Each written file is recorded by its output-relative path together with
//! the SHA-256 of the bytes written. A write is skipped when:
//!
//! 1. the manifest records the same hash for that path, and
//! 2. the file on disk still hashes to that value.
//!
//! The second check catches hand edits to the output between builds.
//!
//! ## Storage
//!
//! `<output_dir>/.build-manifest.json`. A missing, corrupt, or
//! version-mismatched manifest loads as empty, so the worst case is a
//! rewrite, never an error.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// Name of the build manifest file within the output directory.
pub const MANIFEST_FILENAME: &str = ".build-manifest.json";

/// Bump to invalidate existing manifests when the format changes.
const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BuildManifest {
    pub version: u32,
    /// Output-relative path → hex SHA-256 of the written bytes.
    pub entries: BTreeMap<String, String>,
}

impl BuildManifest {
    /// Create an empty manifest (used for `--no-cache` or first build).
    pub fn empty() -> Self {
        Self {
            version: MANIFEST_VERSION,
            entries: BTreeMap::new(),
        }
    }

    /// Load from the output directory, falling back to empty.
    pub fn load(output_dir: &Path) -> Self {
        let path = output_dir.join(MANIFEST_FILENAME);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::empty();
        };
        match serde_json::from_str::<Self>(&content) {
            Ok(manifest) if manifest.version == MANIFEST_VERSION => manifest,
            _ => Self::empty(),
        }
    }

    /// Save to the output directory.
    pub fn save(&self, output_dir: &Path) -> io::Result<()> {
        let path = output_dir.join(MANIFEST_FILENAME);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }

    /// True when `rel_path` is recorded with `hash` and the file on disk
    /// still has that content.
    pub fn is_fresh(&self, rel_path: &str, hash: &str, output_dir: &Path) -> bool {
        if self.entries.get(rel_path).map(String::as_str) != Some(hash) {
            return false;
        }
        hash_file(&output_dir.join(rel_path)).is_ok_and(|on_disk| on_disk == hash)
    }

    pub fn insert(&mut self, rel_path: String, hash: String) {
        self.entries.insert(rel_path, hash);
    }
}

/// SHA-256 of a byte slice, as a hex string.
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// SHA-256 of a file's contents, as a hex string.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(hash_bytes(&bytes))
}
