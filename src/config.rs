use crate::path::DEFAULT_TIME_LABELS;
use crate::types::Theme;

#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}
impl Margin {
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            bottom: px,
            left: px,
            right: px,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MapConfig {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    /// Overrides the event's own zoom level when set.
    pub zoom: Option<u8>,
    pub theme: Theme,
    pub time_labels: Vec<String>,
}
impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 640,
            margin: Margin::uniform(40),
            zoom: None,
            theme: Theme::Dark,
            time_labels: DEFAULT_TIME_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Geometry of the horizon view. All positions live in a normalized
/// `view_width` x `view_height` space, independent of output pixels.
#[derive(Debug, Clone)]
pub struct HorizonConfig {
    pub view_width: f64,
    pub view_height: f64,
    pub view_center_x: f64,
    pub horizon_y: f64,
    pub horizontal_scale: f64,
    pub vertical_scale: f64,
    pub occlusion_scale: f64,
    pub sun_radius: f64,
    pub moon_radius: f64,
    pub initial_index: isize,
    pub fallback_azimuth: f64,
    /// Output size in pixels.
    pub width: u32,
    pub height: u32,
}
impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            view_width: 100.0,
            view_height: 60.0,
            view_center_x: 50.0,
            horizon_y: 24.0,
            horizontal_scale: 2.0,
            vertical_scale: 2.0,
            occlusion_scale: 5.2,
            sun_radius: 3.2,
            moon_radius: 3.1,
            initial_index: 5,
            fallback_azimuth: 286.0,
            width: 1200,
            height: 720,
        }
    }
}
