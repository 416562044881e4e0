use svg::node::element::{Group, Line, Rectangle};

use crate::context::HorizonContext;
use crate::horizon::{compass_label, sky_dimming};
use crate::layers::{Layer, group_with_class, text};

/// Ground, horizon line and azimuth ticks.
pub struct HorizonLineLayer {
    tick_step_deg: i32,
    label_step_deg: i32,
}
impl HorizonLineLayer {
    pub fn new() -> Self {
        Self {
            tick_step_deg: 5,
            label_step_deg: 10,
        }
    }
}

impl Layer<HorizonContext<'_>> for HorizonLineLayer {
    fn render(&self, context: &HorizonContext<'_>) -> Group {
        let mut g = group_with_class("horizon");
        let cfg = &context.cfg;
        let hy = cfg.horizon_y;
        let state = context.current_state();

        g = g.add(
            Rectangle::new()
                .set("class", "ground")
                .set("x", 0)
                .set("y", hy)
                .set("width", cfg.view_width)
                .set("height", cfg.view_height - hy),
        );
        g = g.add(
            Rectangle::new()
                .set("class", "dimming")
                .set("x", 0)
                .set("y", hy)
                .set("width", cfg.view_width)
                .set("height", cfg.view_height - hy)
                .set("fill-opacity", sky_dimming(state.coverage)),
        );
        g = g.add(
            Line::new()
                .set("class", "horizon-line")
                .set("x1", 0)
                .set("y1", hy)
                .set("x2", cfg.view_width)
                .set("y2", hy),
        );

        let reference = context.reference_azimuth;
        let az_lo = cfg.azimuth_at(0.0, reference).ceil() as i32;
        let az_hi = cfg.azimuth_at(cfg.view_width, reference).floor() as i32;
        for az in az_lo..=az_hi {
            if az.rem_euclid(self.tick_step_deg) != 0 {
                continue;
            }
            let x = cfg.project(az as f64, 0.0, reference).x;
            let major = az.rem_euclid(self.label_step_deg) == 0;
            let len = if major { 1.5 } else { 0.8 };
            g = g.add(
                Line::new()
                    .set("class", "tick")
                    .set("x1", x)
                    .set("y1", hy)
                    .set("x2", x)
                    .set("y2", hy + len),
            );
            if major {
                let shown = az.rem_euclid(360);
                g = g.add(text(
                    "tick-label",
                    x,
                    hy + 4.0,
                    "middle",
                    &format!("{shown}° {}", compass_label(shown as f64)),
                ));
            }
        }
        g
    }
}
