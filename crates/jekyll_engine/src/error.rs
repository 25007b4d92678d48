use std::io;
use std::path::PathBuf;

use jekyll_core::{RecordId, SourceError};
use thiserror::Error;

use crate::codec::YamlError;
use crate::persist::PersistError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid record {id}: {reason}")]
    InvalidRecord { id: RecordId, reason: String },
    #[error("slug {0:?} does not yield a usable filename")]
    InvalidSlug(String),
    #[error("body conversion for record {id} fell back to plain text: {reason}")]
    ConversionFailure { id: RecordId, reason: String },
    #[error("malformed document: {0}")]
    MalformedDocument(String),
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("content source error: {0}")]
    Source(#[from] SourceError),
    #[error(transparent)]
    Yaml(#[from] YamlError),
}

impl ExportError {
    pub(crate) fn invalid_record(id: RecordId, reason: impl Into<String>) -> Self {
        ExportError::InvalidRecord {
            id,
            reason: reason.into(),
        }
    }
}

impl From<PersistError> for ExportError {
    fn from(err: PersistError) -> Self {
        match err {
            PersistError::OutputDir { path, source } | PersistError::Io { path, source } => {
                ExportError::Io { path, source }
            }
        }
    }
}
