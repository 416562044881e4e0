use crate::config::HorizonConfig;
use crate::types::{EclipseTimelinePoint, ObservationPoint, Point};

/// Sample shown when a point has no timeline at all.
pub fn fallback_sample() -> EclipseTimelinePoint {
    EclipseTimelinePoint {
        time: "20:30".to_string(),
        coverage: 1.0,
        altitude: 10.0,
        azimuth: 286.0,
    }
}

impl HorizonConfig {
    /// Map a sun position to view coordinates, relative to the heading the
    /// view is centred on.
    ///
    /// The azimuth delta is not wrapped into [-180, 180].
    pub fn project(&self, azimuth: f64, altitude: f64, reference_azimuth: f64) -> Point {
        let delta_az = azimuth - reference_azimuth;
        Point {
            x: self.view_center_x + delta_az * self.horizontal_scale,
            y: self.horizon_y - altitude * self.vertical_scale,
        }
    }

    /// Horizontal offset of the moon disk from the sun disk. Zero at
    /// totality, `occlusion_scale` when nothing is covered.
    pub fn eclipse_disk_offset(&self, coverage: f64) -> f64 {
        (1.0 - coverage) * self.occlusion_scale
    }

    /// Heading the view is centred on: the sun's azimuth at maximum eclipse.
    pub fn reference_azimuth(&self, point: &ObservationPoint) -> f64 {
        if point.azimuth.is_finite() && point.azimuth != 0.0 {
            point.azimuth
        } else {
            self.fallback_azimuth
        }
    }

    /// Inverse of `project` on the x axis: the azimuth drawn at view x.
    pub fn azimuth_at(&self, x: f64, reference_azimuth: f64) -> f64 {
        reference_azimuth + (x - self.view_center_x) / self.horizontal_scale
    }
}

fn clamp_index(len: usize, index: isize) -> usize {
    if index <= 0 {
        0
    } else {
        (index as usize).min(len.saturating_sub(1))
    }
}

/// Timeline sample at `index`, clamped into range. Never fails: an empty
/// timeline yields [`fallback_sample`].
pub fn sample_at(timeline: &[EclipseTimelinePoint], index: isize) -> EclipseTimelinePoint {
    if timeline.is_empty() {
        return fallback_sample();
    }
    timeline[clamp_index(timeline.len(), index)].clone()
}

/// First sample with the highest coverage.
pub fn max_phase_index(timeline: &[EclipseTimelinePoint]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in timeline.iter().enumerate() {
        match best {
            Some((_, c)) if p.coverage <= c => {}
            _ => best = Some((i, p.coverage)),
        }
    }
    best.map(|(i, _)| i)
}

/// Opacity of the darkening overlay laid over the landscape.
pub fn sky_dimming(coverage: f64) -> f64 {
    (coverage * 0.95).clamp(0.0, 0.9)
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

pub fn compass_label(azimuth: f64) -> &'static str {
    let sector = (azimuth.rem_euclid(360.0) / 22.5).round() as usize % 16;
    COMPASS_POINTS[sector]
}

/// Scrubbing position within a timeline, always inside `[0, len - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineCursor {
    len: usize,
    index: usize,
}

impl TimelineCursor {
    pub fn new(len: usize, initial: isize) -> Self {
        Self {
            len,
            index: clamp_index(len, initial),
        }
    }

    pub fn select(&mut self, index: isize) -> usize {
        self.index = clamp_index(self.len, index);
        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the first sample of maximal coverage; stays put on an empty timeline.
    pub fn jump_to_max_phase(&mut self, timeline: &[EclipseTimelinePoint]) -> usize {
        if let Some(i) = max_phase_index(timeline) {
            self.select(i as isize);
        }
        self.index
    }

    pub fn current(&self, timeline: &[EclipseTimelinePoint]) -> EclipseTimelinePoint {
        sample_at(timeline, self.index as isize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{approx, sample_observation, timeline_point};

    #[test]
    fn cursor_jumps_to_first_maximum() {
        let timeline = vec![
            timeline_point("19:00", 0.2),
            timeline_point("19:30", 0.97),
            timeline_point("20:00", 0.97),
            timeline_point("20:30", 0.4),
        ];
        let mut cursor = TimelineCursor::new(timeline.len(), 0);
        assert_eq!(cursor.jump_to_max_phase(&timeline), 1);
        assert_eq!(cursor.current(&timeline).time, "19:30");

        let mut empty = TimelineCursor::new(0, 5);
        assert!(empty.is_empty());
        assert_eq!(empty.jump_to_max_phase(&[]), 0);
    }

    #[test]
    fn project_matches_reference_example() {
        let cfg = HorizonConfig::default();
        let p = cfg.project(290.0, 15.0, 286.0);
        assert!(approx(p.x, 58.0, 1e-12));
        assert!(approx(p.y, -6.0, 1e-12));
    }

    #[test]
    fn project_is_deterministic() {
        let cfg = HorizonConfig::default();
        let inputs = [
            (286.0, 10.0, 286.0),
            (270.5, -3.25, 290.0),
            (0.0, 90.0, 359.0),
            (123.456, 7.89, 100.0),
        ];
        for (az, alt, r) in inputs {
            let a = cfg.project(az, alt, r);
            let b = cfg.project(az, alt, r);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn project_centres_reference_on_horizon() {
        let cfg = HorizonConfig::default();
        let p = cfg.project(286.0, 0.0, 286.0);
        assert!(approx(p.x, 50.0, 1e-12));
        assert!(approx(p.y, 24.0, 1e-12));
    }

    #[test]
    fn project_does_not_wrap_azimuth_delta() {
        let cfg = HorizonConfig::default();
        // 1° vs 359° is a -358° delta, not +2°
        let p = cfg.project(1.0, 0.0, 359.0);
        assert!(approx(p.x, 50.0 - 716.0, 1e-9));
    }

    #[test]
    fn azimuth_at_inverts_projection() {
        let cfg = HorizonConfig::default();
        let p = cfg.project(293.5, 12.0, 286.0);
        assert!(approx(cfg.azimuth_at(p.x, 286.0), 293.5, 1e-12));
    }

    #[test]
    fn disk_offset_boundaries() {
        let cfg = HorizonConfig::default();
        assert!(approx(cfg.eclipse_disk_offset(1.0), 0.0, 1e-12));
        assert!(approx(cfg.eclipse_disk_offset(0.0), 5.2, 1e-12));
        assert!(approx(cfg.eclipse_disk_offset(0.5), 2.6, 1e-12));
    }

    #[test]
    fn reference_azimuth_falls_back_when_unset() {
        let cfg = HorizonConfig::default();
        let mut p = sample_observation();
        p.azimuth = 284.0;
        assert!(approx(cfg.reference_azimuth(&p), 284.0, 1e-12));
        p.azimuth = 0.0;
        assert!(approx(cfg.reference_azimuth(&p), 286.0, 1e-12));
        p.azimuth = f64::NAN;
        assert!(approx(cfg.reference_azimuth(&p), 286.0, 1e-12));
    }

    #[test]
    fn sample_at_clamps_both_ends() {
        let timeline: Vec<_> = (0..4)
            .map(|i| timeline_point(&format!("20:0{i}"), i as f64 / 3.0))
            .collect();

        for i in [-1, -5, isize::MIN] {
            assert_eq!(sample_at(&timeline, i), sample_at(&timeline, 0));
        }
        for i in [4, 5, 100, isize::MAX] {
            assert_eq!(sample_at(&timeline, i), sample_at(&timeline, 3));
        }
        assert_eq!(sample_at(&timeline, 2).time, "20:02");
    }

    #[test]
    fn sample_at_empty_timeline_is_fallback() {
        let s = sample_at(&[], 3);
        assert_eq!(s, fallback_sample());
        assert_eq!(s.time, "20:30");
        assert!(approx(s.coverage, 1.0, 1e-12));
        assert!(approx(s.azimuth, 286.0, 1e-12));
    }

    #[test]
    fn cursor_clamps_selection() {
        let mut c = TimelineCursor::new(10, 5);
        assert_eq!(c.index(), 5);
        assert_eq!(c.select(-3), 0);
        assert_eq!(c.select(42), 9);
        assert_eq!(c.len(), 10);

        let short = TimelineCursor::new(3, 5);
        assert_eq!(short.index(), 2);

        let empty = TimelineCursor::new(0, 5);
        assert_eq!(empty.index(), 0);
        assert_eq!(empty.current(&[]), fallback_sample());
    }

    #[test]
    fn max_phase_picks_first_peak() {
        let t = vec![
            timeline_point("19:40", 0.2),
            timeline_point("20:00", 1.0),
            timeline_point("20:01", 1.0),
            timeline_point("20:20", 0.3),
        ];
        assert_eq!(max_phase_index(&t), Some(1));
        assert_eq!(max_phase_index(&[]), None);
    }

    #[test]
    fn dimming_is_capped() {
        assert!(approx(sky_dimming(0.0), 0.0, 1e-12));
        assert!(approx(sky_dimming(0.5), 0.475, 1e-12));
        assert!(approx(sky_dimming(1.0), 0.9, 1e-12));
    }

    #[test]
    fn compass_labels_cover_all_winds() {
        assert_eq!(compass_label(0.0), "N");
        assert_eq!(compass_label(359.0), "N");
        assert_eq!(compass_label(90.0), "E");
        assert_eq!(compass_label(285.0), "WNW");
        assert_eq!(compass_label(290.0), "WNW");
        assert_eq!(compass_label(-90.0), "W");
    }
}
