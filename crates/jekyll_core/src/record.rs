use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type RecordId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Post,
    Page,
    /// Any other content type known to the store (attachments, revisions, ...).
    #[serde(other)]
    Other,
}

impl RecordType {
    /// Only posts and pages are exported.
    pub fn is_exportable(self) -> bool {
        matches!(self, RecordType::Post | RecordType::Page)
    }

    /// Layout selector used by the generated site.
    pub fn layout(self) -> Option<&'static str> {
        match self {
            RecordType::Post => Some("post"),
            RecordType::Page => Some("page"),
            RecordType::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[serde(alias = "publish")]
    Published,
    Draft,
    Pending,
    Private,
    Future,
    Trash,
    #[serde(other)]
    Other,
}

/// One exportable unit as handed out by the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: RecordId,
    pub slug: String,
    pub title: String,
    #[serde(alias = "content")]
    pub body_html: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(alias = "author")]
    pub author_display_name: String,
    /// Date-only precision; pages may omit it.
    #[serde(default, alias = "date")]
    pub published_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub status: RecordStatus,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub permalink: String,
}

impl ContentRecord {
    pub fn is_published(&self) -> bool {
        self.status == RecordStatus::Published
    }

    pub fn is_exportable(&self) -> bool {
        self.is_published() && self.record_type.is_exportable()
    }
}
