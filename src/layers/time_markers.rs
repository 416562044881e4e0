use svg::node::element::{Group, Rectangle};

use crate::context::MapContext;
use crate::geometry::to_pixels;
use crate::layers::{Layer, group_with_class, text};
use crate::path::build_center_line_markers;

pub struct TimeMarkersLayer {
    badge_w: f64,
    badge_h: f64,
}
impl TimeMarkersLayer {
    pub fn new() -> Self {
        Self {
            badge_w: 64.0,
            badge_h: 18.0,
        }
    }
}

impl Layer<MapContext<'_>> for TimeMarkersLayer {
    fn render(&self, context: &MapContext<'_>) -> Group {
        let mut g = group_with_class("time-markers");
        let labels = context.time_labels();

        for m in build_center_line_markers(context.event, &labels) {
            // unlabelled points stay part of the line only
            let Some(label) = m.label else {
                continue;
            };
            let p = to_pixels(m.coord, context);
            g = g.add(
                Rectangle::new()
                    .set("class", "time-badge")
                    .set("x", p.x - self.badge_w / 2.0)
                    .set("y", p.y - self.badge_h / 2.0)
                    .set("width", self.badge_w)
                    .set("height", self.badge_h)
                    .set("rx", 3),
            );
            g = g.add(text(
                "time-label",
                p.x,
                p.y + 4.0,
                "middle",
                &format!("{label} UTC"),
            ));
        }
        g
    }
}
