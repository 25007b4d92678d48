use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use export_logging::export_debug;
use jekyll_core::{ContentRecord, ExportDocument, RecordType};

use crate::error::ExportError;
use crate::filename::{page_filename, post_filename};
use crate::frontmatter::FrontMatterSerializer;
use crate::options::ExportOptions;
use crate::persist::{ensure_output_dir, write_atomic};

/// Places serialized documents under the export root.
///
/// Every write replaces the target file atomically, so re-running an export
/// simply overwrites what an earlier run (or a manual edit) left behind.
#[derive(Clone)]
pub struct ExportWriter {
    root: PathBuf,
    options: ExportOptions,
    serializer: FrontMatterSerializer,
}

impl ExportWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_options(root, ExportOptions::default(), FrontMatterSerializer::default())
    }

    pub fn with_options(
        root: impl Into<PathBuf>,
        options: ExportOptions,
        serializer: FrontMatterSerializer,
    ) -> Self {
        Self {
            root: root.into(),
            options,
            serializer,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.root.join(&self.options.posts_dir)
    }

    /// Ensures the root and the posts directory exist. Safe to call repeatedly.
    pub fn init_temp_dir(&self) -> Result<(), ExportError> {
        ensure_output_dir(&self.root)?;
        ensure_output_dir(&self.posts_dir())?;
        Ok(())
    }

    pub fn post_path(&self, date: NaiveDate, slug: &str) -> Result<PathBuf, ExportError> {
        let filename = post_filename(date, slug, &self.options.extension)
            .ok_or_else(|| ExportError::InvalidSlug(slug.to_string()))?;
        Ok(self.posts_dir().join(filename))
    }

    pub fn page_path(&self, slug: &str) -> Result<PathBuf, ExportError> {
        let filename = page_filename(slug, &self.options.extension)
            .ok_or_else(|| ExportError::InvalidSlug(slug.to_string()))?;
        Ok(self.root.join(filename))
    }

    /// Target path of a record, dispatching on its type.
    pub fn record_path(&self, record: &ContentRecord) -> Result<PathBuf, ExportError> {
        match record.record_type {
            RecordType::Post => {
                let date = record.published_date.ok_or_else(|| {
                    ExportError::invalid_record(record.id, "post has no publish date")
                })?;
                self.post_path(date, &record.slug)
            }
            RecordType::Page => self.page_path(&record.slug),
            RecordType::Other => Err(ExportError::invalid_record(
                record.id,
                "unsupported content type",
            )),
        }
    }

    /// Writes a record's document to [`Self::record_path`].
    pub fn write_record(
        &self,
        record: &ContentRecord,
        doc: &ExportDocument,
    ) -> Result<PathBuf, ExportError> {
        let path = self.record_path(record)?;
        self.write_document(doc, &path)?;
        Ok(path)
    }

    pub fn write_post(
        &self,
        doc: &ExportDocument,
        date: NaiveDate,
        slug: &str,
    ) -> Result<PathBuf, ExportError> {
        let path = self.post_path(date, slug)?;
        self.write_document(doc, &path)?;
        Ok(path)
    }

    pub fn write_page(&self, doc: &ExportDocument, slug: &str) -> Result<PathBuf, ExportError> {
        let path = self.page_path(slug)?;
        self.write_document(doc, &path)?;
        Ok(path)
    }

    /// Overwrites `path` with `content` as is. Last write wins, nothing is merged.
    pub fn write_raw(&self, content: &str, path: &Path) -> Result<(), ExportError> {
        write_atomic(path, content)?;
        export_debug!("Wrote {} bytes to {:?}", content.len(), path);
        Ok(())
    }

    fn write_document(&self, doc: &ExportDocument, path: &Path) -> Result<(), ExportError> {
        let text = if self.options.verify_round_trip {
            self.serializer.serialize_verified(doc)?
        } else {
            self.serializer.serialize(doc)?
        };
        self.write_raw(&text, path)
    }
}
