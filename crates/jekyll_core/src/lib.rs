//! Jekyll export core: content model, front matter values and the content source seam.
mod document;
mod record;
mod settings;
mod source;

pub use document::{ExportDocument, FrontMatter, FrontMatterValue};
pub use record::{ContentRecord, RecordId, RecordStatus, RecordType};
pub use settings::SiteSettings;
pub use source::{ContentSource, InMemorySource, SourceError};
