//! Small per-user state remembered between runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PrefsFile {
    #[serde(default)]
    prev_category: Option<String>,
}

pub struct Prefs {
    path: PathBuf,
    data: PrefsFile,
}

impl Prefs {
    fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eisaku")
            .join("prefs.toml")
    }

    /// Load from the platform data directory. A missing or unreadable file
    /// yields empty preferences.
    pub fn load() -> Self {
        Self::at(Self::default_path())
    }

    pub fn at(path: PathBuf) -> Self {
        let data = std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default();
        Self { path, data }
    }

    pub fn prev_category(&self) -> Option<&str> {
        self.data.prev_category.as_deref()
    }

    pub fn save_prev_category(&mut self, slug: &str) -> Result<()> {
        if self.prev_category() == Some(slug) {
            return Ok(());
        }
        self.data.prev_category = Some(slug.to_string());
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }
        let contents =
            toml::to_string_pretty(&self.data).with_context(|| "Failed to serialize prefs")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write prefs to {}", self.path.display()))?;
        Ok(())
    }
}
