use std::path::PathBuf;
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::LevelFilter;

use crate::config::{HorizonConfig, MapConfig};
use crate::context::{HorizonContext, MapContext};
use crate::types::{EclipseEvent, EclipseTimelinePoint, LatLng, ObservationPoint};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Unique scratch file path under the system temp dir.
pub fn temp_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("totality-{}-{n}-{name}", std::process::id()))
}

pub fn sample_event() -> EclipseEvent {
    EclipseEvent {
        id: "test".into(),
        title: "Total Eclipse 2026".into(),
        date: "12. August 2026".into(),
        region: "Spain".into(),
        description: "Sunset eclipse over northern Spain.".into(),
        center: LatLng::new(41.5, -2.0),
        zoom: 6,
        northern_limit: vec![
            LatLng::new(44.5, -5.0),
            LatLng::new(43.3, -3.0),
            LatLng::new(42.6, -0.2),
        ],
        southern_limit: vec![
            LatLng::new(42.5, -6.3),
            LatLng::new(41.3, -4.4),
            LatLng::new(40.7, -1.5),
        ],
        center_line: vec![
            LatLng::new(43.54, -5.66),
            LatLng::new(42.34, -3.70),
            LatLng::new(41.65, -0.88),
            LatLng::new(39.57, 2.65),
        ],
    }
}

pub fn timeline_point(time: &str, coverage: f64) -> EclipseTimelinePoint {
    EclipseTimelinePoint {
        time: time.into(),
        coverage,
        altitude: 10.0,
        azimuth: 285.0,
    }
}

pub fn sample_observation() -> ObservationPoint {
    let samples = [
        ("19:30", 0.05, 18.0, 276.0),
        ("19:45", 0.30, 16.0, 278.0),
        ("20:00", 0.60, 14.5, 280.0),
        ("20:10", 0.85, 13.0, 282.0),
        ("20:20", 0.97, 12.0, 283.5),
        ("20:28", 1.00, 10.8, 284.6),
        ("20:40", 0.80, 9.0, 286.0),
    ];
    ObservationPoint {
        lat: 42.34,
        lng: -3.70,
        name: "Burgos".into(),
        duration: "1:44 totality".into(),
        altitude: 10.8,
        azimuth: 284.6,
        timeline: samples
            .iter()
            .map(|&(time, coverage, altitude, azimuth)| EclipseTimelinePoint {
                time: time.into(),
                coverage,
                altitude,
                azimuth,
            })
            .collect(),
    }
}

pub fn make_map_context(
    event: EclipseEvent,
    patch: impl FnOnce(&mut MapConfig),
) -> MapContext<'static> {
    let mut cfg = MapConfig::default();
    patch(&mut cfg);
    let event: &'static EclipseEvent = Box::leak(Box::new(event));
    MapContext::new(event, None, cfg)
}

pub fn make_horizon_context(patch: impl FnOnce(&mut HorizonConfig)) -> HorizonContext<'static> {
    let mut cfg = HorizonConfig::default();
    patch(&mut cfg);
    let event: &'static EclipseEvent = Box::leak(Box::new(sample_event()));
    let point: &'static ObservationPoint = Box::leak(Box::new(sample_observation()));
    HorizonContext::new(event, point, cfg)
}
