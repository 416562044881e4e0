use crate::config::MapConfig;
use crate::geometry::{mercator, world_size};
use crate::types::{EclipseEvent, Point};

#[derive(Debug, Clone, Copy)]
pub struct MapLayout {
    pub plot_x: f64,
    pub plot_y: f64,
    pub plot_w: f64,
    pub plot_h: f64,
    pub center_px: Point,
    pub zoom: u8,
    pub world_size: f64,
    /// Event center in world pixels.
    pub center_world: Point,
    pub split_threshold: f64,
}

impl MapLayout {
    pub fn from_config(cfg: &MapConfig, event: &EclipseEvent) -> Self {
        let plot_x = cfg.margin.left as f64;
        let plot_y = cfg.margin.top as f64;
        let plot_w = cfg.width.saturating_sub(cfg.margin.left + cfg.margin.right) as f64;
        let plot_h = cfg.height.saturating_sub(cfg.margin.top + cfg.margin.bottom) as f64;
        let center_px = Point {
            x: plot_x + plot_w / 2.0,
            y: plot_y + plot_h / 2.0,
        };

        let zoom = cfg.zoom.unwrap_or(event.zoom);
        let world_size = world_size(zoom);
        let center_world = mercator(event.center, world_size);

        // Any step wider than half the world wrapped around the antimeridian.
        let split_threshold = world_size / 2.0;

        Self {
            plot_x,
            plot_y,
            plot_w,
            plot_h,
            center_px,
            zoom,
            world_size,
            center_world,
            split_threshold,
        }
    }
}
