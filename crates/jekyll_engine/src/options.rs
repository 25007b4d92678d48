/// Layout of the generated tree and write-time checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub posts_dir: String,
    pub config_filename: String,
    pub extension: String,
    /// Re-parse every serialized document before writing it.
    pub verify_round_trip: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            posts_dir: "_posts".to_string(),
            config_filename: "_config.yml".to_string(),
            extension: "md".to_string(),
            verify_round_trip: true,
        }
    }
}
