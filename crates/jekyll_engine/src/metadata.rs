use jekyll_core::{ContentRecord, FrontMatter, RecordType};

use crate::error::ExportError;
use crate::filename::sanitize_slug;

/// Builds the metadata half of the front matter: `title`, `author`,
/// `excerpt`, `layout` and `permalink`, in that order and nothing else.
///
/// The record must be a Published post or page carrying a title and a usable
/// slug; posts additionally need a publish date. Anything else is an
/// [`ExportError::InvalidRecord`].
pub fn convert_meta(record: &ContentRecord) -> Result<FrontMatter, ExportError> {
    validate_record(record)?;
    let layout = record
        .record_type
        .layout()
        .ok_or_else(|| ExportError::invalid_record(record.id, "unsupported content type"))?;

    let mut meta = FrontMatter::new();
    meta.insert("title", record.title.as_str());
    meta.insert("author", record.author_display_name.as_str());
    meta.insert("excerpt", record.excerpt.as_deref().unwrap_or_default());
    meta.insert("layout", layout);
    meta.insert("permalink", record.permalink.as_str());
    Ok(meta)
}

fn validate_record(record: &ContentRecord) -> Result<(), ExportError> {
    let invalid = |reason: &str| -> Result<(), ExportError> {
        Err(ExportError::invalid_record(record.id, reason))
    };

    if !record.is_published() {
        return invalid("record is not published");
    }
    if !record.record_type.is_exportable() {
        return invalid("unsupported content type");
    }
    if record.title.trim().is_empty() {
        return invalid("missing title");
    }
    if sanitize_slug(&record.slug).is_none() {
        return invalid("missing or unusable slug");
    }
    if record.record_type == RecordType::Post && record.published_date.is_none() {
        return invalid("post has no publish date");
    }
    Ok(())
}
