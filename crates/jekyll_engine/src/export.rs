use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use export_logging::{export_error, export_info, export_warn};
use jekyll_core::{ContentRecord, ContentSource, ExportDocument, RecordId};

use crate::codec::{Html2MdCodec, MarkdownCodec, SerdeYamlCodec, YamlCodec};
use crate::convert::ContentBodyConverter;
use crate::document::assemble_document;
use crate::error::ExportError;
use crate::frontmatter::FrontMatterSerializer;
use crate::metadata::convert_meta;
use crate::options::ExportOptions;
use crate::site_config::ConfigExporter;
use crate::taxonomy::convert_terms;
use crate::writer::ExportWriter;

/// The unit a batch entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportItem {
    Record(RecordId),
    SiteConfig,
}

impl fmt::Display for ExportItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportItem::Record(id) => write!(f, "record {id}"),
            ExportItem::SiteConfig => write!(f, "site configuration"),
        }
    }
}

#[derive(Debug)]
pub struct ItemFailure {
    pub item: ExportItem,
    pub error: ExportError,
}

/// A document built for one record, with the warning raised on the way if
/// the body had to fall back to plain text.
#[derive(Debug)]
pub struct BuiltDocument {
    pub document: ExportDocument,
    pub warning: Option<ExportError>,
}

/// Outcome of one export run.
///
/// The run is best effort: a record or the site configuration that fails is
/// recorded here and the remaining items are still exported.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub warnings: Vec<ExportError>,
    pub failures: Vec<ItemFailure>,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record_failure(&mut self, item: ExportItem, error: ExportError) {
        export_error!("Export of {} failed: {}", item, error);
        self.failures.push(ItemFailure { item, error });
    }
}

/// Drives the pipeline from a content source to a Jekyll tree.
///
/// Collaborators are injected at construction; nothing is process-global.
#[derive(Clone)]
pub struct Exporter {
    source: Arc<dyn ContentSource>,
    body: ContentBodyConverter,
    yaml: Arc<dyn YamlCodec>,
    options: ExportOptions,
}

impl Exporter {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            body: ContentBodyConverter::new(Arc::new(Html2MdCodec)),
            yaml: Arc::new(SerdeYamlCodec),
            options: ExportOptions::default(),
        }
    }

    pub fn with_markdown_codec(mut self, codec: Arc<dyn MarkdownCodec>) -> Self {
        self.body = ContentBodyConverter::new(codec);
        self
    }

    pub fn with_yaml_codec(mut self, codec: Arc<dyn YamlCodec>) -> Self {
        self.yaml = codec;
        self
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn writer(&self, target_dir: &Path) -> ExportWriter {
        ExportWriter::with_options(
            target_dir,
            self.options.clone(),
            FrontMatterSerializer::new(self.yaml.clone()),
        )
    }

    pub fn config_exporter(&self) -> ConfigExporter {
        ConfigExporter::new(self.yaml.clone(), self.options.config_filename.clone())
    }

    /// Exports every published post and page, then the site configuration.
    ///
    /// Returns `Err` only when nothing could be exported at all: the record
    /// list is unavailable or the target directory cannot be prepared.
    pub fn run(&self, target_dir: &Path) -> Result<ExportReport, ExportError> {
        let writer = self.writer(target_dir);
        writer.init_temp_dir()?;
        let ids = self.source.list_published_records()?;
        export_info!("Exporting {} records to {:?}", ids.len(), target_dir);

        let mut report = ExportReport::default();
        for id in ids {
            match self.export_record(&writer, id) {
                Ok((path, warning)) => {
                    report.written.push(path);
                    report.warnings.extend(warning);
                }
                Err(err) => report.record_failure(ExportItem::Record(id), err),
            }
        }

        match self.export_site_config(target_dir) {
            Ok(path) => report.config_path = Some(path),
            Err(err) => report.record_failure(ExportItem::SiteConfig, err),
        }

        export_info!(
            "Export finished: {} written, {} warnings, {} failures",
            report.written.len(),
            report.warnings.len(),
            report.failures.len()
        );
        Ok(report)
    }

    /// Converts and writes one record.
    pub fn export_record(
        &self,
        writer: &ExportWriter,
        id: RecordId,
    ) -> Result<(PathBuf, Option<ExportError>), ExportError> {
        let record = self.source.get_record(id)?;
        let built = self.build_document(&record)?;
        let path = writer.write_record(&record, &built.document)?;
        Ok((path, built.warning))
    }

    /// Runs the metadata, taxonomy and body converters and assembles the result.
    pub fn build_document(&self, record: &ContentRecord) -> Result<BuiltDocument, ExportError> {
        let meta = convert_meta(record)?;
        let terms = convert_terms(record);
        let body = self.body.convert(&record.body_html);
        let warning = body.fallback.map(|reason| {
            let warning = ExportError::ConversionFailure {
                id: record.id,
                reason,
            };
            export_warn!("{}", warning);
            warning
        });
        Ok(BuiltDocument {
            document: assemble_document(meta, terms, body.markdown),
            warning,
        })
    }

    pub fn export_site_config(&self, target_dir: &Path) -> Result<PathBuf, ExportError> {
        let settings = self.source.site_settings()?;
        self.config_exporter().export_config(&settings, target_dir)
    }
}
