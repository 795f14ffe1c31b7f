use anyhow::{anyhow, Context};
use std::fs;
use std::path::PathBuf;

use crate::model::module::ModuleList;

pub const DEFAULT_DATA_PATH: &str = "data/classbook.json";

/// JSON snapshot of the whole module list at a fixed path. Durability is
/// best-effort: in-memory state stays authoritative for the session.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save(&self, modules: &ModuleList) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create directory {}", parent.to_string_lossy())
                })?;
            }
        }

        let json = serde_json::to_string_pretty(modules).context("failed to serialize data")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.to_string_lossy()))?;
        tracing::debug!(path = %self.path.to_string_lossy(), "saved data");
        Ok(())
    }

    /// Returns `Ok(None)` when no snapshot exists yet. A snapshot that parses
    /// but fails verification is an error; callers start a fresh session.
    pub fn load(&self) -> anyhow::Result<Option<ModuleList>> {
        if !self.path.is_file() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.to_string_lossy()))?;
        let modules: ModuleList = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", self.path.to_string_lossy()))?;
        if !modules.verify() {
            return Err(anyhow!(
                "{} failed verification",
                self.path.to_string_lossy()
            ));
        }
        tracing::debug!(
            path = %self.path.to_string_lossy(),
            modules = modules.size(),
            "loaded data"
        );
        Ok(Some(modules))
    }
}
