use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Task,
    Profile,
}

impl RecordKind {
    pub fn default_file(self) -> PathBuf {
        match self {
            RecordKind::Task => PathBuf::from("data/tasks.json"),
            RecordKind::Profile => PathBuf::from("data/profiles.json"),
        }
    }
}

impl FromStr for RecordKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "task" | "tasks" => Ok(RecordKind::Task),
            "profile" | "profiles" => Ok(RecordKind::Profile),
            other => bail!("Unknown record kind '{}' (expected 'task' or 'profile')", other),
        }
    }
}

/// Settings read from the environment (after `.env` is loaded)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub kind: RecordKind,
    pub file_path: PathBuf,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let kind = match lookup("FORMBOOK_KIND") {
            Some(value) => value.parse()?,
            None => RecordKind::Task,
        };

        let file_path = lookup("FORMBOOK_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| kind.default_file());

        let log_level = match lookup("FORMBOOK_LOG") {
            Some(value) => Level::from_str(value.trim())
                .with_context(|| format!("Invalid log level '{}'", value))?,
            None => Level::INFO,
        };

        Ok(Self {
            kind,
            file_path,
            log_level,
        })
    }
}
