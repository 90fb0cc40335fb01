use crate::error::{FolioError, Result};
use crate::state::theme::ThemePreference;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(rename = "portfolio-theme", default)]
    theme: Option<ThemePreference>,
}

#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn default_path(home: Option<&OsStr>) -> Result<PathBuf> {
        let home = home.ok_or(FolioError::NoHomeDir)?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("folio")
            .join("preferences.json"))
    }

    /// `None` when there is neither an explicit path nor a home directory.
    pub fn resolve(explicit: Option<PathBuf>, home: Option<&OsStr>) -> Option<Self> {
        if let Some(path) = explicit {
            return Some(Self::new(path));
        }
        match Self::default_path(home) {
            Ok(path) => Some(Self::new(path)),
            Err(err) => {
                tracing::warn!(error = %err, "theme preference will not be saved");
                None
            }
        }
    }

    pub fn load_or_light(store: Option<&Self>) -> ThemePreference {
        let Some(store) = store else {
            return ThemePreference::Light;
        };
        store.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, prefs = %store.path().display(), "falling back to the light theme");
            ThemePreference::Light
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<ThemePreference> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ThemePreference::default());
            }
            Err(err) => return Err(FolioError::io(&self.path, err)),
        };
        let prefs: Preferences =
            serde_json::from_str(&raw).map_err(|source| FolioError::Preferences {
                path: self.path.clone(),
                source,
            })?;
        Ok(prefs.theme.unwrap_or_default())
    }

    pub fn save(&self, theme: ThemePreference) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|err| FolioError::io(parent, err))?;
        }
        let prefs = Preferences { theme: Some(theme) };
        let body = serde_json::to_string_pretty(&prefs).map_err(|source| {
            FolioError::Preferences {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, body).map_err(|err| FolioError::io(&self.path, err))
    }
}
