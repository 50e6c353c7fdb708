use std::path::Path;

use crate::error::{PdfQaError, Result};
use crate::log_debug;

/// Turns a file on disk into plain text
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Page-by-page extraction through `pdf-extract`
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| PdfQaError::Extraction {
            file: path.display().to_string(),
            message: e.to_string(),
        })?;

        log_debug!("{} has {} pages", path.display(), pages.len());
        Ok(join_pages(pages.iter().map(|page| strip_page_break(page))))
    }
}

/// `pdf-extract` opens every page with a run of page-break newlines.
/// A page that is only that run carries no text.
pub fn strip_page_break(page: &str) -> &str {
    page.trim_start_matches(['\n', '\r'])
}

/// Concatenate page texts in page order. Pages without text add nothing
/// and no separator is inserted between pages.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        let page_text = page.as_ref();
        if !page_text.is_empty() {
            text.push_str(page_text);
        }
    }
    text
}
