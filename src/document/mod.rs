// src/document/mod.rs
//! Uploaded PDFs and the text pulled out of them

pub mod extractor;
pub mod loader;

pub use extractor::{join_pages, PdfTextExtractor, TextExtractor};
pub use loader::BatchLoader;

use bytes::Bytes;
use serde::Serialize;

/// A named byte blob received from the upload form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Upload widgets only offer `.pdf` files; the check is on the name.
    pub fn has_pdf_extension(&self) -> bool {
        std::path::Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false)
    }
}

/// Text extracted from one uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedDocument {
    pub filename: String,
    pub text: String,
}

/// Join document texts with a single space, in upload order.
pub fn combine_texts(documents: &[ExtractedDocument]) -> String {
    documents
        .iter()
        .map(|doc| doc.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, text: &str) -> ExtractedDocument {
        ExtractedDocument {
            filename: name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_pdf_extension_is_case_insensitive() {
        assert!(UploadedFile::new("report.PDF", "").has_pdf_extension());
        assert!(UploadedFile::new("a.b.pdf", "").has_pdf_extension());
        assert!(!UploadedFile::new("notes.txt", "").has_pdf_extension());
        assert!(!UploadedFile::new("pdf", "").has_pdf_extension());
    }

    #[test]
    fn test_combine_single_document_has_no_padding() {
        assert_eq!(combine_texts(&[doc("a.pdf", "Hello World")]), "Hello World");
    }

    #[test]
    fn test_combine_separates_with_one_space() {
        let docs = [doc("a.pdf", "first"), doc("b.pdf", ""), doc("c.pdf", "third")];
        assert_eq!(combine_texts(&docs), "first  third");
    }

    #[test]
    fn test_combine_nothing() {
        assert_eq!(combine_texts(&[]), "");
    }
}
