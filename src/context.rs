use crate::config::{HorizonConfig, MapConfig};
use crate::horizon::TimelineCursor;
use crate::layout::MapLayout;
use crate::types::{EclipseEvent, EclipseTimelinePoint, ObservationPoint, Point};

/// Drawing session for one eclipse map. Built per render and handed to
/// every layer; nothing about the map lives outside of it.
pub struct MapContext<'a> {
    pub event: &'a EclipseEvent,
    pub observation: Option<&'a ObservationPoint>,
    pub cfg: MapConfig,
    pub layout: MapLayout,
}

impl<'a> MapContext<'a> {
    pub fn new(
        event: &'a EclipseEvent,
        observation: Option<&'a ObservationPoint>,
        cfg: MapConfig,
    ) -> Self {
        let layout = MapLayout::from_config(&cfg, event);
        Self {
            event,
            observation,
            cfg,
            layout,
        }
    }

    /// Graticule spacing in degrees for the current zoom.
    pub fn graticule_step_deg(&self) -> u32 {
        match self.layout.zoom {
            0..=3 => 20,
            4 => 10,
            5 => 5,
            _ => 2,
        }
    }

    pub fn time_labels(&self) -> Vec<&str> {
        self.cfg.time_labels.iter().map(String::as_str).collect()
    }
}

/// Drawing session for the horizon view of one observation point at one
/// timeline step.
pub struct HorizonContext<'a> {
    pub event: &'a EclipseEvent,
    pub point: &'a ObservationPoint,
    pub cfg: HorizonConfig,
    pub cursor: TimelineCursor,
    pub reference_azimuth: f64,
}

impl<'a> HorizonContext<'a> {
    pub fn new(event: &'a EclipseEvent, point: &'a ObservationPoint, cfg: HorizonConfig) -> Self {
        let cursor = TimelineCursor::new(point.timeline.len(), cfg.initial_index);
        let reference_azimuth = cfg.reference_azimuth(point);
        Self {
            event,
            point,
            cfg,
            cursor,
            reference_azimuth,
        }
    }

    pub fn current_state(&self) -> EclipseTimelinePoint {
        self.cursor.current(&self.point.timeline)
    }

    /// Sun position of the current state in view coordinates.
    pub fn sun_position(&self) -> Point {
        let s = self.current_state();
        self.cfg.project(s.azimuth, s.altitude, self.reference_azimuth)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{approx, make_horizon_context, make_map_context, sample_event};

    #[test]
    fn graticule_step_shrinks_with_zoom() {
        let step = |z| make_map_context(sample_event(), |cfg| cfg.zoom = Some(z)).graticule_step_deg();
        assert_eq!(step(2), 20);
        assert_eq!(step(4), 10);
        assert_eq!(step(5), 5);
        assert_eq!(step(8), 2);

        let mut prev = u32::MAX;
        for z in 0..10 {
            let s = step(z);
            assert!(s <= prev, "step grew at zoom {z}");
            prev = s;
        }
    }

    #[test]
    fn horizon_starts_at_initial_index_clamped() {
        let context = make_horizon_context(|_| {});
        // sample timeline has 7 entries
        assert_eq!(context.cursor.index(), 5);

        let context = make_horizon_context(|cfg| cfg.initial_index = 40);
        assert_eq!(context.cursor.index(), 6);
    }

    #[test]
    fn sun_position_uses_point_azimuth_as_reference() {
        let mut context = make_horizon_context(|_| {});
        let idx = context.cursor.select(3);
        let s = &context.point.timeline[idx];
        let p = context.sun_position();
        assert!(approx(p.x, 50.0 + (s.azimuth - context.point.azimuth) * 2.0, 1e-12));
        assert!(approx(p.y, 24.0 - s.altitude * 2.0, 1e-12));
    }
}
