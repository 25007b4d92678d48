use thiserror::Error;

use crate::{ContentRecord, RecordId, SiteSettings};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("record {0} not found")]
    NotFound(RecordId),
    #[error("content store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only view of the content store.
pub trait ContentSource: Send + Sync {
    /// Ids of Published posts and pages, ordered by id.
    fn list_published_records(&self) -> Result<Vec<RecordId>, SourceError>;

    fn get_record(&self, id: RecordId) -> Result<ContentRecord, SourceError>;

    fn site_settings(&self) -> Result<SiteSettings, SourceError>;
}

/// Content source backed by records held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    settings: SiteSettings,
    records: Vec<ContentRecord>,
}

impl InMemorySource {
    pub fn new(settings: SiteSettings) -> Self {
        Self {
            settings,
            records: Vec::new(),
        }
    }

    pub fn with_records(settings: SiteSettings, records: Vec<ContentRecord>) -> Self {
        let mut source = Self::new(settings);
        for record in records {
            source.insert(record);
        }
        source
    }

    /// Adds a record, replacing any record that already has the same id.
    pub fn insert(&mut self, record: ContentRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ContentSource for InMemorySource {
    fn list_published_records(&self) -> Result<Vec<RecordId>, SourceError> {
        let mut ids: Vec<RecordId> = self
            .records
            .iter()
            .filter(|record| record.is_exportable())
            .map(|record| record.id)
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    fn get_record(&self, id: RecordId) -> Result<ContentRecord, SourceError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(SourceError::NotFound(id))
    }

    fn site_settings(&self) -> Result<SiteSettings, SourceError> {
        Ok(self.settings.clone())
    }
}
