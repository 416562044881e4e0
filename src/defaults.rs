use log::debug;

use crate::service::{LocationRequest, RawObservation, RawTimelinePoint};
use crate::types::{EclipseTimelinePoint, ObservationPoint};

/// Values substituted for fields the location service left out.
///
/// Sun position defaults depend on the eclipse: the 2026 event happens near
/// sunset, low in the west-northwest, the later ones somewhat higher.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultPolicy {
    pub altitude: f64,
    pub azimuth: f64,
    pub duration: &'static str,
    pub name: &'static str,
    pub sample_time: &'static str,
    pub sample_coverage: f64,
    pub sample_altitude: f64,
    pub sample_azimuth: f64,
}

impl DefaultPolicy {
    pub fn for_date(date: &str) -> Self {
        let sunset_2026 = date.contains("2026");
        Self {
            altitude: if sunset_2026 { 11.0 } else { 18.0 },
            azimuth: if sunset_2026 { 285.0 } else { 290.0 },
            duration: "1:30",
            name: "Selected location",
            sample_time: "--:--",
            sample_coverage: 0.0,
            sample_altitude: 0.0,
            sample_azimuth: 0.0,
        }
    }

    /// Fill every gap in `raw`. The coordinate is always the one that was
    /// asked for, never one reported back by the service.
    pub fn apply(&self, raw: RawObservation, request: &LocationRequest) -> ObservationPoint {
        let mut defaulted: Vec<&str> = Vec::new();

        let altitude = finite(raw.altitude).unwrap_or_else(|| {
            defaulted.push("altitude");
            self.altitude
        });
        let azimuth = finite(raw.azimuth).unwrap_or_else(|| {
            defaulted.push("azimuth");
            self.azimuth
        });
        let duration = non_empty(raw.duration).unwrap_or_else(|| {
            defaulted.push("duration");
            self.duration.to_string()
        });
        let name = non_empty(raw.name).unwrap_or_else(|| {
            defaulted.push("name");
            self.name.to_string()
        });
        let timeline: Vec<EclipseTimelinePoint> = raw
            .timeline
            .unwrap_or_else(|| {
                defaulted.push("timeline");
                Vec::new()
            })
            .into_iter()
            .map(|t| self.apply_sample(t))
            .collect();

        if !defaulted.is_empty() {
            debug!("defaulted fields: {}", defaulted.join(", "));
        }

        ObservationPoint {
            lat: request.latitude,
            lng: request.longitude,
            name,
            duration,
            altitude,
            azimuth,
            timeline,
        }
    }

    fn apply_sample(&self, raw: RawTimelinePoint) -> EclipseTimelinePoint {
        EclipseTimelinePoint {
            time: non_empty(raw.time).unwrap_or_else(|| self.sample_time.to_string()),
            coverage: finite(raw.coverage)
                .unwrap_or(self.sample_coverage)
                .clamp(0.0, 1.0),
            altitude: finite(raw.altitude).unwrap_or(self.sample_altitude),
            azimuth: finite(raw.azimuth).unwrap_or(self.sample_azimuth),
        }
    }
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}
