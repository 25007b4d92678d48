use std::path::{Path, PathBuf};
use std::sync::Arc;

use export_logging::export_debug;
use jekyll_core::SiteSettings;
use serde_yaml::{Mapping, Value};

use crate::codec::{SerdeYamlCodec, YamlCodec};
use crate::error::ExportError;
use crate::persist::AtomicFileWriter;

const REQUIRED_KEYS: [&str; 3] = ["name", "description", "url"];

/// Writes the site-wide settings as a plain YAML configuration file.
#[derive(Clone)]
pub struct ConfigExporter {
    yaml: Arc<dyn YamlCodec>,
    filename: String,
}

impl Default for ConfigExporter {
    fn default() -> Self {
        Self::new(Arc::new(SerdeYamlCodec), "_config.yml")
    }
}

impl ConfigExporter {
    pub fn new(yaml: Arc<dyn YamlCodec>, filename: impl Into<String>) -> Self {
        Self {
            yaml,
            filename: filename.into(),
        }
    }

    /// Renders the configuration as YAML without front matter delimiters.
    pub fn render(&self, settings: &SiteSettings) -> Result<String, ExportError> {
        Ok(self.yaml.dump(&build_config_mapping(settings))?)
    }

    /// Writes `<target_dir>/<filename>`, replacing any existing file.
    pub fn export_config(
        &self,
        settings: &SiteSettings,
        target_dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let content = self.render(settings)?;
        let path = AtomicFileWriter::new(target_dir.to_path_buf()).write(&self.filename, &content)?;
        export_debug!("Wrote site configuration to {:?}", path);
        Ok(path)
    }
}

/// `name`, `description` and `url` first, then the public extra options in
/// key order. Private options (leading `_`) and options that would shadow the
/// three required keys are left out.
pub fn build_config_mapping(settings: &SiteSettings) -> Mapping {
    let mut mapping = Mapping::new();
    mapping.insert(Value::from("name"), Value::from(settings.name.as_str()));
    mapping.insert(
        Value::from("description"),
        Value::from(settings.description.as_str()),
    );
    mapping.insert(Value::from("url"), Value::from(settings.url.as_str()));

    for (key, value) in &settings.options {
        if key.starts_with('_') || REQUIRED_KEYS.contains(&key.as_str()) {
            continue;
        }
        mapping.insert(Value::from(key.as_str()), Value::from(value.as_str()));
    }
    mapping
}
