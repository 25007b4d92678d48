use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jekyll_core::{ContentRecord, InMemorySource, SiteSettings};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to read content dump {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid content dump: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk snapshot of a content store: site settings plus every record.
#[derive(Debug, Deserialize)]
struct ContentDump {
    site: SiteSettings,
    #[serde(default)]
    records: Vec<ContentRecord>,
}

/// Builds a content source from a JSON dump of the store.
///
/// Records of any status or type are loaded; filtering happens when the
/// source lists publishable records.
pub fn parse_dump(json: &str) -> Result<InMemorySource, DumpError> {
    let dump: ContentDump = serde_json::from_str(json)?;
    Ok(InMemorySource::with_records(dump.site, dump.records))
}

pub fn load_dump(path: &Path) -> Result<InMemorySource, DumpError> {
    let json = fs::read_to_string(path).map_err(|source| DumpError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dump(&json)
}
