//! CV file selection and the file-type gate

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions accepted for CV uploads (compared lowercased)
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Why a selected file was not attached
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileRejection {
    #[error("Please upload a PDF or DOCX file")]
    UnsupportedType,
    #[error("Selected file could not be read")]
    Unreadable,
}

/// A CV file that passed the type gate at selection time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvFile {
    pub path: PathBuf,
    pub file_name: String,
    pub size_bytes: u64,
}

impl CvFile {
    /// Run the file-type gate on `path`.
    ///
    /// The extension is checked before the filesystem is touched, so a
    /// rejected type never reports as unreadable.
    pub fn select(path: &Path) -> Result<Self, FileRejection> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or(FileRejection::UnsupportedType)?;

        if !is_supported_file_name(&file_name) {
            return Err(FileRejection::UnsupportedType);
        }

        let metadata = fs::metadata(path).map_err(|_| FileRejection::Unreadable)?;
        if !metadata.is_file() {
            return Err(FileRejection::Unreadable);
        }

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            size_bytes: metadata.len(),
        })
    }

    /// Lowercased extension of the attached file
    pub fn extension(&self) -> String {
        extension_of(&self.file_name)
    }

    /// MIME type sent with the multipart file part
    pub fn mime_type(&self) -> &'static str {
        if self.extension() == "docx" {
            DOCX_MIME
        } else {
            PDF_MIME
        }
    }

    /// Human-readable size, e.g. "12.3 KB"
    pub fn display_size(&self) -> String {
        const KB: f64 = 1024.0;
        let bytes = self.size_bytes as f64;
        if bytes < KB {
            format!("{} B", self.size_bytes)
        } else if bytes < KB * KB {
            format!("{:.1} KB", bytes / KB)
        } else {
            format!("{:.1} MB", bytes / (KB * KB))
        }
    }
}

/// Portion of the name after the last '.', lowercased.
/// A name without any '.' is returned whole.
pub fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

pub fn is_supported_file_name(file_name: &str) -> bool {
    let extension = extension_of(file_name);
    ALLOWED_EXTENSIONS.contains(&extension.as_str())
}
