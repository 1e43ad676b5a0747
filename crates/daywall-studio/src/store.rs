//! Persistence for the last applied seed.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use daywall_gen::Seed;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct StateFile {
    last_seed: Seed,
}

/// JSON file holding `{ "last_seed": <i64> }`.
///
/// A missing file means nothing has been applied yet. An unreadable or
/// corrupt file is logged and treated the same way, so the worker simply
/// applies again.
#[derive(Debug, Clone)]
pub struct SeedStore {
    path: PathBuf,
}

impl SeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Option<Seed> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("ignoring unreadable state file {}: {e}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str::<StateFile>(&text) {
            Ok(state) => Some(state.last_seed),
            Err(e) => {
                log::warn!("ignoring corrupt state file {}: {e}", self.path.display());
                None
            }
        }
    }

    pub fn save(&self, seed: Seed) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(&StateFile { last_seed: seed })
            .context("failed to serialize state")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write state file {}", self.path.display()))?;
        log::debug!("stored seed {seed} in {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(SeedStore::new(dir.path().join("state.json")).load(), None);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SeedStore::new(dir.path().join("a/b/state.json"));
        store.save(2_024_214).unwrap();
        assert_eq!(store.load(), Some(2_024_214));
        store.save(2_024_215).unwrap();
        assert_eq!(store.load(), Some(2_024_215));
    }

    #[test]
    fn file_format_is_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        SeedStore::new(&path).save(42).unwrap();
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({ "last_seed": 42 }));
    }

    #[test]
    fn corrupt_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        for junk in ["", "not json", "{\"last_seed\": \"x\"}", "{}"] {
            fs::write(&path, junk).unwrap();
            assert_eq!(SeedStore::new(&path).load(), None, "{junk:?}");
        }
    }
}
