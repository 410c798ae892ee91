use crate::error::{DocQaError, Result};
use crate::models::UploadedFile;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Turns a PDF on disk into its page texts, first page first.
pub trait PageParser: Send + Sync + 'static {
    fn parse_pages(&self, path: &Path) -> Result<Vec<String>>;
}

pub struct PdfExtractParser;

impl PageParser for PdfExtractParser {
    fn parse_pages(&self, path: &Path) -> Result<Vec<String>> {
        pdf_extract::extract_text_by_pages(path).map_err(|e| DocQaError::Parse {
            filename: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct DocumentProcessor {
    parser: Arc<dyn PageParser>,
    scratch_dir: Option<PathBuf>,
}

impl DocumentProcessor {
    pub fn new() -> Self {
        Self::with_parser(Arc::new(PdfExtractParser))
    }

    pub fn with_parser(parser: Arc<dyn PageParser>) -> Self {
        Self {
            parser,
            scratch_dir: None,
        }
    }

    /// Temp copies of uploads go here instead of the OS temp dir.
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    /// Extracts every PDF in upload order. A file that fails to parse is
    /// logged and skipped; only a completely empty result is an error.
    pub async fn process_documents(&self, files: Vec<UploadedFile>) -> Result<String> {
        let total = files.len();
        let mut full_text = String::new();
        let mut parsed = 0usize;

        for file in files {
            if !file.is_pdf() {
                log::warn!("Unsupported file type: {}", file.filename);
                continue;
            }

            let filename = file.filename.clone();
            match self.process_pdf(file).await {
                Ok(pages) => {
                    for page in pages {
                        full_text.push_str(&page);
                        full_text.push('\n');
                    }
                    parsed += 1;
                }
                Err(e) => log::warn!("Error processing file {}: {}", filename, e),
            }
        }

        log::info!("Extracted text from {} of {} uploaded file(s)", parsed, total);

        if full_text.is_empty() {
            return Err(DocQaError::ExtractionFailed);
        }
        Ok(full_text)
    }

    async fn process_pdf(&self, file: UploadedFile) -> Result<Vec<String>> {
        log::info!("Processing PDF: {} ({} bytes)", file.filename, file.bytes.len());

        let parser = Arc::clone(&self.parser);
        let scratch_dir = self.scratch_dir.clone();

        // The temp file lives inside the blocking task, so it is dropped
        // (and unlinked) even if the parser panics.
        let task = tokio::task::spawn_blocking(move || {
            let mut scratch = scratch_file(scratch_dir.as_deref())?;
            scratch.write_all(&file.bytes)?;
            scratch.flush()?;
            parser.parse_pages(scratch.path())
        });

        match task.await {
            Ok(result) => result,
            Err(join_err) => Err(DocQaError::Unexpected(format!(
                "PDF parser aborted: {}",
                join_err
            ))),
        }
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn scratch_file(dir: Option<&Path>) -> std::io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("docqa-").suffix(".pdf");
    match dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
}
