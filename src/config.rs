use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct DbFilePath(pub String);

impl Default for DbFilePath {
    fn default() -> Self {
        Self("visatrack.sqlite".to_owned())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub db_file_path: DbFilePath,
}

impl AppConfig {
    pub fn try_read(file_path: &Path) -> anyhow::Result<AppConfig> {
        let json = &std::fs::read_to_string(file_path)
            .with_context(|| format!("Reading config file {}", file_path.display()))?;
        serde_json::from_str::<AppConfig>(json)
            .with_context(|| format!("Parsing JSON config file {}", file_path.display()))
    }
}
