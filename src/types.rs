use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One eclipse occurrence with its hand-authored path geometry.
///
/// Limit lines and the center line are ordered along the direction of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct EclipseEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub region: String,
    pub description: String,
    pub center: LatLng,
    pub zoom: u8,
    pub northern_limit: Vec<LatLng>,
    pub southern_limit: Vec<LatLng>,
    pub center_line: Vec<LatLng>,
}

impl EclipseEvent {
    /// Both limit lines present, or both absent.
    pub fn has_consistent_limits(&self) -> bool {
        self.northern_limit.is_empty() == self.southern_limit.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EclipseTimelinePoint {
    pub time: String,
    /// Fraction of the solar disk covered, 0 to 1.
    pub coverage: f64,
    pub altitude: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationPoint {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub duration: String,
    pub altitude: f64,
    pub azimuth: f64,
    pub timeline: Vec<EclipseTimelinePoint>,
}

impl ObservationPoint {
    pub fn coords(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub price_level: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Dark => "theme-dark",
            Self::Light => "theme-light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Loading,
    Success,
    Error,
}

// Small helpers used by multiple modules
pub fn parse_or<T: std::str::FromStr>(s: &str, default: T) -> T {
    s.parse::<T>().unwrap_or(default)
}

pub fn sexagesimal_dms_to_degrees(d: f64, m: f64, s: f64) -> f64 {
    let sign = if d.is_sign_negative() { -1.0 } else { 1.0 };
    let ad = d.abs();
    sign * (ad + (m * 60.0 + s) / 3600.0)
}

pub fn parse_dms(s: &str) -> Option<(f64, f64, f64)> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return None;
    }
    Some((
        parse_or(parts[0], 0.0),
        parse_or(parts[1], 0.0),
        parse_or(parts[2], 0.0),
    ))
}
