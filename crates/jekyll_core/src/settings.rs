use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Store-wide settings that end up in the site configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub name: String,
    pub description: String,
    pub url: String,
    /// Further site options exposed by the store, keyed by option name.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl SiteSettings {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            options: BTreeMap::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}
