use std::fs;
use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed location data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Query sent to the location data service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub date: String,
}

/// Response as the service delivers it. Any field may be missing; see
/// [`crate::defaults::DefaultPolicy`] for how gaps are filled.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawObservation {
    pub name: Option<String>,
    pub duration: Option<String>,
    pub altitude: Option<f64>,
    pub azimuth: Option<f64>,
    pub timeline: Option<Vec<RawTimelinePoint>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawTimelinePoint {
    pub time: Option<String>,
    pub coverage: Option<f64>,
    pub altitude: Option<f64>,
    pub azimuth: Option<f64>,
}

impl RawObservation {
    pub fn from_json(text: &str) -> Result<Self, ServiceError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Source of local circumstances for a coordinate and eclipse date.
pub trait LocationDataService {
    fn fetch(&self, request: &LocationRequest) -> Result<RawObservation, ServiceError>;
}

/// Serves a previously recorded response from a JSON file.
pub struct RecordedLocationService {
    path: PathBuf,
}

impl RecordedLocationService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LocationDataService for RecordedLocationService {
    fn fetch(&self, request: &LocationRequest) -> Result<RawObservation, ServiceError> {
        debug!(
            "location data for [{}, {}] on {} from {}",
            request.latitude,
            request.longitude,
            request.date,
            self.path.display()
        );
        let text = fs::read_to_string(&self.path).map_err(|source| ServiceError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        RawObservation::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{approx, temp_path};

    fn request() -> LocationRequest {
        LocationRequest {
            latitude: 42.34,
            longitude: -3.70,
            date: "12. August 2026".into(),
        }
    }

    #[test]
    fn parses_full_response() {
        let raw = RawObservation::from_json(
            r#"{
                "name": "Burgos",
                "duration": "1:44 totality",
                "altitude": 10.8,
                "azimuth": 284.6,
                "timeline": [
                    {"time": "19:30", "coverage": 0.1, "altitude": 18.0, "azimuth": 276.0},
                    {"time": "20:28", "coverage": 1.0, "altitude": 10.8, "azimuth": 284.6}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(raw.name.as_deref(), Some("Burgos"));
        assert!(approx(raw.azimuth.unwrap(), 284.6, 1e-12));
        let t = raw.timeline.unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].coverage, Some(1.0));
    }

    #[test]
    fn missing_fields_parse_as_none() {
        let raw = RawObservation::from_json(r#"{"name": "Soria", "timeline": [{}]}"#).unwrap();
        assert!(raw.altitude.is_none());
        assert!(raw.duration.is_none());
        let t = raw.timeline.unwrap();
        assert_eq!(t[0], RawTimelinePoint::default());
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(
            RawObservation::from_json("<html>quota exceeded</html>"),
            Err(ServiceError::Parse(_))
        ));
    }

    #[test]
    fn recorded_service_reads_file() {
        let path = temp_path("response.json");
        fs::write(&path, r#"{"name": "Gijón", "altitude": 12.0}"#).unwrap();
        let svc = RecordedLocationService::new(&path);
        let raw = svc.fetch(&request()).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(raw.name.as_deref(), Some("Gijón"));
        assert_eq!(raw.altitude, Some(12.0));
    }

    #[test]
    fn recorded_service_reports_missing_file() {
        let svc = RecordedLocationService::new(temp_path("no-such-response.json"));
        assert!(matches!(
            svc.fetch(&request()),
            Err(ServiceError::Io { .. })
        ));
    }
}
