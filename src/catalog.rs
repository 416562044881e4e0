use log::{info, warn};
use thiserror::Error;

use crate::data::{builtin_events, builtin_position, load_catalog_csv};
use crate::types::EclipseEvent;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {reason}")]
    BadRow { line: u64, reason: String },

    #[error("line {line}: coordinates for undeclared event '{id}'")]
    UndeclaredEvent { line: u64, id: String },

    #[error("event '{0}' is declared twice")]
    DuplicateEvent(String),
}

/// Read-only registry of eclipse events, in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<EclipseEvent>,
    builtin: bool,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            events: builtin_events(),
            builtin: true,
        }
    }

    pub fn empty() -> Self {
        Self::from_events(Vec::new())
    }

    pub fn from_events(events: Vec<EclipseEvent>) -> Self {
        for e in &events {
            if !e.has_consistent_limits() {
                warn!(
                    "eclipse {}: only one limit line is defined, the totality band will be omitted",
                    e.id
                );
            }
        }
        Self {
            events,
            builtin: false,
        }
    }

    /// The built-in catalog, or the CSV catalog at `path` when one is given.
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => {
                let events = load_catalog_csv(p)?;
                if events.is_empty() {
                    warn!("catalog {p} declares no eclipses");
                    return Ok(Self::empty());
                }
                info!("loaded {} eclipse(s) from {p}", events.len());
                Ok(Self::from_events(events))
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn list_events(&self) -> &[EclipseEvent] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&EclipseEvent> {
        if self.builtin {
            return builtin_position(id).and_then(|i| self.events.get(i));
        }
        self.events.iter().find(|e| e.id == id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
