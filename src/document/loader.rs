use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::{Builder, NamedTempFile};

use crate::document::{ExtractedDocument, TextExtractor, UploadedFile};
use crate::error::Result;
use crate::util::string::StringUtils;
use crate::{log_debug, log_info};

/// Extracts a batch of uploads, one temporary file at a time.
#[derive(Clone)]
pub struct BatchLoader {
    extractor: Arc<dyn TextExtractor>,
    temp_dir: Option<PathBuf>,
}

impl BatchLoader {
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            extractor,
            temp_dir: None,
        }
    }

    /// Put temporary copies in `dir` instead of the OS temp directory.
    pub fn with_temp_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.temp_dir = dir;
        self
    }

    /// Extract every upload in order.
    ///
    /// The first failure aborts the batch; uploads after it are not touched.
    /// Each temporary copy is removed when its extraction returns, whatever
    /// the outcome.
    pub fn load(&self, uploads: &[UploadedFile]) -> Result<Vec<ExtractedDocument>> {
        let mut documents = Vec::with_capacity(uploads.len());

        for upload in uploads {
            let text = self.extract_one(upload)?;
            log_debug!("Extracted {} chars from {}", text.chars().count(), upload.name);
            documents.push(ExtractedDocument {
                filename: upload.name.clone(),
                text,
            });
        }

        log_info!(
            "Extracted {}",
            StringUtils::maybe_pluralize_count(documents.len(), ("document", "documents"))
        );
        Ok(documents)
    }

    fn extract_one(&self, upload: &UploadedFile) -> Result<String> {
        let mut temp_file = self.create_temp_file()?;
        temp_file.write_all(&upload.bytes)?;
        temp_file.flush()?;

        // Dropping `temp_file` deletes it, on the error path too
        let result = self.extractor.extract_text(temp_file.path());
        temp_file.close()?;
        result
    }

    fn create_temp_file(&self) -> Result<NamedTempFile> {
        let mut builder = Builder::new();
        builder.prefix("upload-").suffix(".pdf");
        let file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        Ok(file)
    }
}

impl std::fmt::Debug for BatchLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchLoader")
            .field("temp_dir", &self.temp_dir)
            .finish_non_exhaustive()
    }
}
