//! Loading and saving documents.
//!
//! The buffer owns no file format; bytes go to and from disk unchanged.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use finni_config::constants::{MAX_DOCUMENT_SIZE, MEGABYTE};

/// Read a document from disk.
///
/// A missing file is treated as a new, empty document.
pub fn load(path: &Path) -> Result<Vec<u8>> {
    match std::fs::metadata(path) {
        Ok(metadata) => {
            if metadata.is_file() && metadata.len() > MAX_DOCUMENT_SIZE {
                return Err(anyhow::anyhow!(
                    "File is too large to open ({:.1} MB). Maximum allowed size is {} MB.",
                    metadata.len() as f64 / MEGABYTE as f64,
                    MAX_DOCUMENT_SIZE / MEGABYTE
                ));
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to inspect file: {}", path.display()))
        }
    }

    std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write a document to disk, creating parent directories as needed.
pub fn save(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Extract filename from path for title display.
pub fn title(path: Option<&Path>) -> String {
    path.and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Untitled".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let content = load(&dir.path().join("new.txt")).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_save_load_cycle_keeps_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("doc.txt");
        let bytes = b"line 1\r\nline 2\n\xff\xfe";

        save(&path, bytes).unwrap();
        assert_eq!(load(&path).unwrap(), bytes);
    }

    #[test]
    fn test_load_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(load(dir.path()).is_err());
    }

    #[test]
    fn test_title() {
        assert_eq!(title(Some(Path::new("/foo/bar/notes.txt"))), "notes.txt");
        assert_eq!(title(None), "Untitled");
    }
}
