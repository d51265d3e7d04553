//! Upload handling for analyzer input documents

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Surfaced instead of content until PDF extraction lands.
pub const PDF_PLACEHOLDER: &str = "PDF uploaded (text extraction not implemented yet).";
/// Surfaced instead of content until DOCX extraction lands.
pub const DOCX_PLACEHOLDER: &str = "DOCX uploaded (text extraction not implemented yet).";

/// Accepted upload types, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadCategory {
    PlainText,
    Markdown,
    Pdf,
    Docx,
}

impl UploadCategory {
    /// Extensions accepted by the upload dialog filter.
    pub const EXTENSIONS: [&'static str; 5] = ["txt", "md", "markdown", "pdf", "docx"];

    /// Categorize a file by its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(UploadCategory::PlainText),
            "md" | "markdown" => Ok(UploadCategory::Markdown),
            "pdf" => Ok(UploadCategory::Pdf),
            "docx" => Ok(UploadCategory::Docx),
            _ => Err(UploadError::UnsupportedType { extension }),
        }
    }

    /// Canonical content type declared for this category.
    pub fn mime(&self) -> &'static str {
        match self {
            UploadCategory::PlainText => "text/plain",
            UploadCategory::Markdown => "text/markdown",
            UploadCategory::Pdf => "application/pdf",
            UploadCategory::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Short display name shown next to the captured file.
    pub fn label(&self) -> &'static str {
        match self {
            UploadCategory::PlainText => "Plain text",
            UploadCategory::Markdown => "Markdown",
            UploadCategory::Pdf => "PDF",
            UploadCategory::Docx => "DOCX",
        }
    }
}

/// Errors from capturing an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unable to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported file type: '{extension}'")]
    UnsupportedType { extension: String },
}

/// A captured upload with its extracted text.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// File name of the uploaded document
    pub name: String,
    /// Category derived from the extension
    pub category: UploadCategory,
    /// Extracted text, or a placeholder for binary formats
    pub content: String,
}

/// Extract the surfaced text for an upload.
///
/// Text categories are decoded as UTF-8 with invalid sequences replaced
/// and surfaced verbatim; PDF and DOCX return their fixed placeholders.
pub fn extract_text(category: UploadCategory, bytes: &[u8]) -> String {
    match category {
        UploadCategory::PlainText | UploadCategory::Markdown => {
            String::from_utf8_lossy(bytes).into_owned()
        }
        UploadCategory::Pdf => PDF_PLACEHOLDER.to_string(),
        UploadCategory::Docx => DOCX_PLACEHOLDER.to_string(),
    }
}

/// Load a document from a picked file path.
pub fn load(path: &Path) -> Result<UploadedDocument, UploadError> {
    let category = UploadCategory::from_path(path)?;

    let bytes = fs::read(path).map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    tracing::info!("Captured upload: {} ({})", name, category.mime());

    Ok(UploadedDocument {
        name,
        category,
        content: extract_text(category, &bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_path() {
        assert_eq!(
            UploadCategory::from_path(Path::new("notes.txt")).unwrap(),
            UploadCategory::PlainText
        );
        assert_eq!(
            UploadCategory::from_path(Path::new("draft.md")).unwrap(),
            UploadCategory::Markdown
        );
        assert_eq!(
            UploadCategory::from_path(Path::new("draft.markdown")).unwrap(),
            UploadCategory::Markdown
        );
        assert_eq!(
            UploadCategory::from_path(Path::new("REPORT.PDF")).unwrap(),
            UploadCategory::Pdf
        );
        assert_eq!(
            UploadCategory::from_path(Path::new("thesis.docx")).unwrap(),
            UploadCategory::Docx
        );
    }

    #[test]
    fn test_category_rejects_other_extensions() {
        let err = UploadCategory::from_path(Path::new("image.png")).unwrap_err();
        match err {
            UploadError::UnsupportedType { extension } => assert_eq!(extension, "png"),
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(UploadCategory::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_extract_text_decodes_lossily() {
        let bytes = b"hello \xFF world";
        let text = extract_text(UploadCategory::PlainText, bytes);
        assert_eq!(text, "hello \u{FFFD} world");

        let text = extract_text(UploadCategory::Markdown, "# Title".as_bytes());
        assert_eq!(text, "# Title");
    }

    #[test]
    fn test_extract_text_pdf_placeholder() {
        let text = extract_text(UploadCategory::Pdf, b"%PDF-1.7 garbage");
        assert_eq!(text, PDF_PLACEHOLDER);
    }

    #[test]
    fn test_extract_text_docx_placeholder() {
        let text = extract_text(UploadCategory::Docx, b"PK\x03\x04");
        assert_eq!(text, DOCX_PLACEHOLDER);
    }

    #[test]
    fn test_load_reads_text_file() {
        let path = std::env::temp_dir().join(format!("writeable_upload_{}.txt", std::process::id()));
        fs::write(&path, "pasted content").unwrap();

        let doc = load(&path).unwrap();
        assert_eq!(doc.category, UploadCategory::PlainText);
        assert_eq!(doc.content, "pasted content");
        assert!(doc.name.ends_with(".txt"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let path = std::env::temp_dir().join("writeable_missing_upload.txt");
        let _ = fs::remove_file(&path);

        match load(&path) {
            Err(UploadError::Read { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
