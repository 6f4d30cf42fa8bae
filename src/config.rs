use crate::error::Error;
use serde_derive::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "repogen.toml";

/// Optional per-project settings read from `repogen.toml` at the project
/// root. Every key has a default, so the file may be absent entirely.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Connection string used when neither `--database-url` nor
    /// `DATABASE_URL` is set.
    pub database_url: Option<String>,
    /// Primary conventional directory for repository modules, relative to
    /// the project root.
    pub repositories_dir: String,
    /// Second location probed when resolving related repository classes.
    pub secondary_repositories_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            repositories_dir: "src/repositories".into(),
            secondary_repositories_dir: "src/api/repositories".into(),
        }
    }
}

impl Config {
    pub fn load(project_root: &Path) -> Result<Self, Error> {
        let path = project_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|err| Error::Config(err.to_string()))
    }
}
