use std::fmt;

use serde::Serialize;

use crate::horizon::compass_label;
use crate::path::build_center_line_markers;
use crate::types::{Accommodation, EclipseEvent, LatLng, ObservationPoint};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunPosition {
    pub altitude: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathPoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl PathPoint {
    fn untimed(c: &LatLng) -> Self {
        Self {
            lat: c.lat,
            lng: c.lng,
            time: None,
        }
    }
}

/// Everything shown about one observation point, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EclipseDetails {
    pub date: String,
    pub region: String,
    pub totality_duration: String,
    pub sun_position: SunPosition,
    pub path_of_totality: Vec<PathPoint>,
    pub northern_limit: Vec<PathPoint>,
    pub southern_limit: Vec<PathPoint>,
    pub observation_points: Vec<ObservationPoint>,
    pub accommodations: Vec<Accommodation>,
    pub summary: String,
}

/// Whether a duration text describes totality rather than a partial phase.
pub fn is_total(duration: &str) -> bool {
    // "totality" contains "total"
    duration.to_lowercase().contains("total")
}

/// Display strings for an observation point, shared by the map card and
/// the text report.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSummary {
    pub name: String,
    pub total: bool,
    pub badge: &'static str,
    pub coords: String,
    pub altitude: String,
    pub azimuth: String,
    pub duration: String,
}

impl PointSummary {
    pub fn new(point: &ObservationPoint) -> Self {
        let total = is_total(&point.duration);
        Self {
            name: point.name.clone(),
            total,
            badge: if total { "TOTALITY" } else { "PARTIAL" },
            coords: format!("{:.4}, {:.4}", point.lat, point.lng),
            altitude: format!("{:.1}°", point.altitude),
            azimuth: format!("{:.1}°", point.azimuth),
            duration: point.duration.clone(),
        }
    }
}

fn summary_sentence(event: &EclipseEvent, point: &ObservationPoint) -> String {
    let kind = if is_total(&point.duration) {
        "Total"
    } else {
        "Partial"
    };
    format!(
        "{kind} eclipse at {} on {} ({}). At maximum the sun stands {:.1}° above the horizon, azimuth {:.1}° ({}).",
        point.name,
        event.date,
        point.duration,
        point.altitude,
        point.azimuth,
        compass_label(point.azimuth)
    )
}

impl EclipseDetails {
    pub fn assemble(
        event: &EclipseEvent,
        point: &ObservationPoint,
        accommodations: Vec<Accommodation>,
        time_labels: &[&str],
    ) -> Self {
        let path_of_totality = build_center_line_markers(event, time_labels)
            .into_iter()
            .map(|m| PathPoint {
                lat: m.coord.lat,
                lng: m.coord.lng,
                time: m.label,
            })
            .collect();

        Self {
            date: event.date.clone(),
            region: event.region.clone(),
            totality_duration: point.duration.clone(),
            sun_position: SunPosition {
                altitude: point.altitude,
                azimuth: point.azimuth,
            },
            path_of_totality,
            northern_limit: event.northern_limit.iter().map(PathPoint::untimed).collect(),
            southern_limit: event.southern_limit.iter().map(PathPoint::untimed).collect(),
            observation_points: vec![point.clone()],
            accommodations,
            summary: summary_sentence(event, point),
        }
    }
}

pub fn parse_accommodations(text: &str) -> serde_json::Result<Vec<Accommodation>> {
    serde_json::from_str(text)
}

impl fmt::Display for EclipseDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} · {}", self.date, self.region)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(
            f,
            "Sun altitude  {:.1}°   azimuth  {:.1}°",
            self.sun_position.altitude, self.sun_position.azimuth
        )?;

        for p in &self.observation_points {
            let s = PointSummary::new(p);
            writeln!(f)?;
            writeln!(f, "{} [{}]", s.name, s.badge)?;
            writeln!(f, "  {}", s.coords)?;
            writeln!(f, "  duration {}", s.duration)?;
            for t in &p.timeline {
                writeln!(
                    f,
                    "  {:>5}  {:>5.1}%  alt {:>5.1}°  az {:>5.1}°",
                    t.time,
                    t.coverage * 100.0,
                    t.altitude,
                    t.azimuth
                )?;
            }
        }

        if !self.accommodations.is_empty() {
            writeln!(f)?;
            writeln!(f, "Nearby accommodation")?;
            for a in &self.accommodations {
                writeln!(f, "  {} ★ {:.1} {}", a.name, a.rating, a.price_level)?;
                if !a.address.is_empty() {
                    writeln!(f, "    {}", a.address)?;
                }
                if !a.uri.is_empty() {
                    writeln!(f, "    {}", a.uri)?;
                }
            }
        }
        Ok(())
    }
}
