//! Content-addressed artifact store for generated images.
//!
//! Image payloads are large; when a caller opts out of inline base64 the
//! tool layer decodes them here and returns filesystem paths instead.
//! Files are stored by SHA-256 hash, so regenerating identical content
//! deduplicates automatically.

use crate::{McpError, McpResult};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Filesystem store rooted at the configured output directory.
///
/// Layout: `{base_path}/{hash[0:2]}/{hash}.{ext}`. Writes go through a
/// temp file and rename for atomicity.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    base_path: PathBuf,
}

impl ArtifactStore {
    /// Create a store, creating the base directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or accessed.
    pub fn new(base_path: impl Into<PathBuf>) -> McpResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            McpError::StoreError(format!(
                "Failed to create output directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(Self { base_path })
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Compute SHA-256 hash of data.
    fn compute_hash(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        format!("{:x}", hasher.finalize())
    }

    /// File extension for a payload MIME type.
    fn extension(mime: Option<&str>) -> &'static str {
        match mime {
            Some("image/jpeg") => "jpg",
            Some("image/webp") => "webp",
            // Imagen answers PNG unless asked otherwise
            _ => "png",
        }
    }

    /// Store decoded image bytes, returning the file's path.
    ///
    /// Identical content hashes to an identical path, so repeated stores
    /// are idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be written.
    #[instrument(skip(self, data), fields(bytes = data.len()))]
    pub fn store_image(&self, data: &[u8], mime: Option<&str>) -> McpResult<PathBuf> {
        let hash = Self::compute_hash(data);
        let dir = self.base_path.join(&hash[0..2]);
        let path = dir.join(format!("{}.{}", hash, Self::extension(mime)));

        if path.exists() {
            debug!(path = %path.display(), "Artifact already stored");
            return Ok(path);
        }

        std::fs::create_dir_all(&dir).map_err(|e| {
            McpError::StoreError(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        // Temp file + rename keeps partially written artifacts invisible.
        let temp = dir.join(format!(".{}.tmp", uuid::Uuid::new_v4()));
        std::fs::write(&temp, data).map_err(|e| {
            McpError::StoreError(format!("Failed to write {}: {}", temp.display(), e))
        })?;
        std::fs::rename(&temp, &path).map_err(|e| {
            let _ = std::fs::remove_file(&temp);
            McpError::StoreError(format!("Failed to finalize {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "Artifact stored");
        Ok(path)
    }

    /// Probe whether the output directory is writable.
    pub fn writable(&self) -> bool {
        let probe = self
            .base_path
            .join(format!(".probe-{}", uuid::Uuid::new_v4()));
        match std::fs::write(&probe, b"probe") {
            Ok(()) => {
                let _ = std::fs::remove_file(&probe);
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> ArtifactStore {
        let dir = std::env::temp_dir().join(format!("lautrec-store-{}", uuid::Uuid::new_v4()));
        ArtifactStore::new(dir).unwrap()
    }

    #[test]
    fn stores_and_deduplicates_by_content() {
        let store = temp_store();
        let first = store.store_image(b"payload", Some("image/png")).unwrap();
        let second = store.store_image(b"payload", Some("image/png")).unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read(&first).unwrap(), b"payload");
    }

    #[test]
    fn extension_follows_mime() {
        let store = temp_store();
        let jpg = store.store_image(b"a", Some("image/jpeg")).unwrap();
        assert!(jpg.to_string_lossy().ends_with(".jpg"));
        let png = store.store_image(b"b", None).unwrap();
        assert!(png.to_string_lossy().ends_with(".png"));
    }

    #[test]
    fn fresh_directory_is_writable() {
        assert!(temp_store().writable());
    }
}
