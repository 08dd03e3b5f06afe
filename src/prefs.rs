//! Local user preferences.
//!
//! A flat key-value map persisted as JSON in the user data directory:
//! theme, font size, contrast, motion, line spacing. This is the copy the
//! UI reads at boot; the same keys also sync through the backend settings
//! commands when it is reachable. Unknown keys round-trip untouched so an
//! older build never strips newer settings.

use color_eyre::{eyre::WrapErr, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Preference keys the client understands.
pub const KEY_THEME: &str = "theme";
pub const KEY_FONT_SIZE: &str = "fontSize";
pub const KEY_HIGH_CONTRAST: &str = "highContrast";
pub const KEY_REDUCED_MOTION: &str = "reducedMotion";
pub const KEY_LINE_SPACING: &str = "lineSpacing";

/// Get the folio data directory, creating it if needed.
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| color_eyre::eyre::eyre!("no data directory"))?;
    let dir = base.join("folio");
    if !dir.exists() {
        fs::create_dir_all(&dir).wrap_err("Failed to create data directory")?;
    }
    Ok(dir)
}

fn prefs_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("prefs.json"))
}

/// In-memory preference map with write-through persistence.
#[derive(Debug, Clone, Default)]
pub struct Prefs {
    values: BTreeMap<String, String>,
    path: Option<PathBuf>,
}

impl Prefs {
    /// Load preferences from the default location. A missing file is an
    /// empty map, not an error.
    pub fn load() -> Result<Self> {
        Self::load_from(prefs_path()?)
    }

    /// Load preferences from an explicit path.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let values = if path.exists() {
            let json = fs::read_to_string(&path)
                .wrap_err(format!("Failed to read prefs from {:?}", path))?;
            serde_json::from_str(&json).wrap_err("Failed to parse prefs file")?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            values,
            path: Some(path),
        })
    }

    /// An unpersisted map, for tests and dry runs.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a key and write the file through.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json =
            serde_json::to_string_pretty(&self.values).wrap_err("Failed to serialize prefs")?;
        fs::write(path, json).wrap_err(format!("Failed to write prefs to {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Prefs::load_from(dir.path().join("prefs.json")).unwrap();
        assert_eq!(prefs.get(KEY_THEME), None);
    }

    #[test]
    fn test_set_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut prefs = Prefs::load_from(path.clone()).unwrap();
        prefs.set(KEY_THEME, "dark").unwrap();
        prefs.set(KEY_LINE_SPACING, "relaxed").unwrap();

        let reloaded = Prefs::load_from(path).unwrap();
        assert_eq!(reloaded.get(KEY_THEME), Some("dark"));
        assert_eq!(reloaded.get(KEY_LINE_SPACING), Some("relaxed"));
    }

    #[test]
    fn test_unknown_keys_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"futureSetting":"on"}"#).unwrap();

        let mut prefs = Prefs::load_from(path.clone()).unwrap();
        prefs.set(KEY_THEME, "light").unwrap();

        let reloaded = Prefs::load_from(path).unwrap();
        assert_eq!(reloaded.get("futureSetting"), Some("on"));
        assert_eq!(reloaded.get(KEY_THEME), Some("light"));
    }
}
