use std::path::{Path, PathBuf};

use tracing::info;
use uuid::Uuid;

use crate::core::config::UploadConfig;
use crate::core::error::AppError;
use crate::shared::constants::PRESCRIPTION_FILE_PREFIX;

/// Local-disk store for uploaded prescription files.
///
/// Stored files live in one flat directory and are referenced by filename
/// only. There is no ownership lifecycle: deleting an appointment or
/// replacing its attachment leaves the old file on disk.
pub struct LocalStorage {
    dir: PathBuf,
    max_file_size: usize,
}

impl LocalStorage {
    /// Create the store, creating the upload directory if it doesn't exist
    pub fn new(config: &UploadConfig) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.dir).map_err(|e| {
            AppError::Internal(format!(
                "Failed to create upload directory {}: {}",
                config.dir.display(),
                e
            ))
        })?;

        Ok(Self {
            dir: config.dir.clone(),
            max_file_size: config.max_file_size,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write an uploaded file under a generated unique filename and return
    /// the filename to store on the appointment record.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> Result<String, AppError> {
        if data.len() > self.max_file_size {
            return Err(AppError::BadRequest(format!(
                "File too large. Maximum size is {} bytes",
                self.max_file_size
            )));
        }

        let filename = generate_filename(original_name);
        let path = self.dir.join(&filename);

        tokio::fs::write(&path, data).await.map_err(|e| {
            tracing::error!("Failed to write upload {}: {}", path.display(), e);
            AppError::Internal(format!("Failed to store uploaded file: {}", e))
        })?;

        info!(
            "Stored upload: filename={}, size={} bytes",
            filename,
            data.len()
        );
        Ok(filename)
    }
}

/// Generated name: `prescription-<uuid>[.ext]`, keeping the original
/// extension so the static file server can infer a content type.
fn generate_filename(original_name: &str) -> String {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.len() <= 10 && e.chars().all(|c| c.is_ascii_alphanumeric()));

    match ext {
        Some(ext) => format!(
            "{}-{}.{}",
            PRESCRIPTION_FILE_PREFIX,
            Uuid::new_v4(),
            ext.to_ascii_lowercase()
        ),
        None => format!("{}-{}", PRESCRIPTION_FILE_PREFIX, Uuid::new_v4()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_filename_keeps_extension() {
        let name = generate_filename("scan.PDF");
        assert!(name.starts_with("prescription-"));
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn test_generate_filename_without_extension() {
        let name = generate_filename("scan");
        assert!(name.starts_with("prescription-"));
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_generate_filename_rejects_odd_extensions() {
        // Extension with non-alphanumeric characters is dropped
        let name = generate_filename("weird.p d!f");
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_generate_filename_unique() {
        assert_ne!(generate_filename("a.png"), generate_filename("a.png"));
    }

    #[tokio::test]
    async fn test_save_enforces_size_cap() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(&UploadConfig {
            dir: tmp.path().to_path_buf(),
            max_file_size: 4,
        })
        .unwrap();

        let err = storage.save("big.png", b"12345").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_save_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(&UploadConfig {
            dir: tmp.path().to_path_buf(),
            max_file_size: 1024,
        })
        .unwrap();

        let filename = storage.save("rx.png", b"data").await.unwrap();
        let stored = std::fs::read(tmp.path().join(&filename)).unwrap();
        assert_eq!(stored, b"data");
    }
}
