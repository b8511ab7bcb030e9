//! Persistent user preferences
//!
//! A single JSON file holding the API key and the favorite set.
//! Lives under the platform config directory by default
//! (`~/.config/crowvox/prefs.json` on Linux); tests point the store at
//! a temp directory instead.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use crowvox_catalog::CrowId;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub favorites: Vec<CrowId>,
}

pub struct PrefsStore {
    path: PathBuf,
    prefs: Prefs,
}

impl PrefsStore {
    /// Open the store at the platform default location, creating the
    /// parent directory if needed. A missing or unreadable file starts
    /// from empty prefs rather than failing.
    pub fn open_default() -> Result<Self> {
        let base = dirs::config_dir().ok_or_else(|| anyhow!("no config directory available"))?;
        Self::open(base.join("crowvox").join("prefs.json"))
    }

    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let prefs = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(prefs) => prefs,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "prefs file unreadable, starting fresh");
                    Prefs::default()
                }
            },
            Err(_) => Prefs::default(),
        };
        Ok(Self { path, prefs })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn api_key(&self) -> &str {
        &self.prefs.api_key
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) -> Result<()> {
        self.prefs.api_key = key.into();
        self.save()
    }

    pub fn favorites(&self) -> &[CrowId] {
        &self.prefs.favorites
    }

    pub fn is_favorite(&self, crow: CrowId) -> bool {
        self.prefs.favorites.contains(&crow)
    }

    /// Flip the favorite flag for one item, returning whether it is a
    /// favorite after the call.
    pub fn toggle_favorite(&mut self, crow: CrowId) -> Result<bool> {
        let now_favorite = match self.prefs.favorites.iter().position(|&c| c == crow) {
            Some(index) => {
                self.prefs.favorites.remove(index);
                false
            }
            None => {
                self.prefs.favorites.push(crow);
                true
            }
        };
        self.save()?;
        Ok(now_favorite)
    }

    fn save(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.prefs)?;
        fs::write(&self.path, raw).with_context(|| format!("writing {}", self.path.display()))?;
        debug!(path = %self.path.display(), "prefs saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> PrefsStore {
        PrefsStore::open(dir.path().join("prefs.json")).unwrap()
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert_eq!(store.api_key(), "");
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn api_key_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        store(&dir).set_api_key("sk-abc").unwrap();

        let reopened = store(&dir);
        assert_eq!(reopened.api_key(), "sk-abc");
    }

    #[test]
    fn toggle_favorite_flips_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut s = store(&dir);
        assert!(s.toggle_favorite(3).unwrap());
        assert!(s.is_favorite(3));
        assert!(!s.toggle_favorite(3).unwrap());
        assert!(!s.is_favorite(3));

        s.toggle_favorite(5).unwrap();
        let reopened = store(&dir);
        assert_eq!(reopened.favorites(), &[5]);
    }

    #[test]
    fn corrupt_file_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = PrefsStore::open(&path).unwrap();
        assert_eq!(store.api_key(), "");
    }
}
