use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::Theme;

pub const THEME_KEY: &str = "mapTheme";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("could not access preferences at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed preferences file: {0}")]
    Parse(#[from] serde_json::Error),
}

fn read_map(path: &Path) -> Result<Map<String, Value>, PrefsError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
        Err(source) => {
            return Err(PrefsError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };
    if text.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => {
            warn!("preferences in {} are not an object; ignoring", path.display());
            Ok(Map::new())
        }
        // Unreadable contents are replaced on the next save.
        Err(e) => {
            warn!("preferences in {} are malformed ({e}); ignoring", path.display());
            Ok(Map::new())
        }
    }
}

/// Stored map theme. Anything other than "light" reads as dark.
pub fn load_theme(path: &Path) -> Result<Theme, PrefsError> {
    let map = read_map(path)?;
    let theme = match map.get(THEME_KEY).and_then(Value::as_str) {
        Some("light") => Theme::Light,
        _ => Theme::Dark,
    };
    debug!("loaded theme {} from {}", theme.as_str(), path.display());
    Ok(theme)
}

/// Persist `theme`, leaving any other keys in the file untouched.
pub fn save_theme(path: &Path, theme: Theme) -> Result<(), PrefsError> {
    let mut map = read_map(path)?;
    map.insert(THEME_KEY.to_owned(), Value::String(theme.as_str().to_owned()));
    let text = serde_json::to_string_pretty(&Value::Object(map))?;
    fs::write(path, text).map_err(|source| PrefsError::Io {
        path: path.display().to_string(),
        source,
    })
}
