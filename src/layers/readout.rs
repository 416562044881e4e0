use svg::node::element::{Group, Rectangle};

use crate::context::HorizonContext;
use crate::horizon::compass_label;
use crate::layers::{Layer, group_with_class, text};

pub struct ReadoutLayer;
impl ReadoutLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer<HorizonContext<'_>> for ReadoutLayer {
    fn render(&self, context: &HorizonContext<'_>) -> Group {
        let mut g = group_with_class("readout");
        let cfg = &context.cfg;
        let state = context.current_state();
        let name = if context.point.name.is_empty() {
            "Simulation"
        } else {
            context.point.name.as_str()
        };

        g = g.add(
            Rectangle::new()
                .set("class", "panel")
                .set("x", 2)
                .set("y", 2)
                .set("width", 30)
                .set("height", 13)
                .set("rx", 1.5),
        );
        g = g
            .add(text("readout-title", 4.0, 6.0, "start", name))
            .add(text("readout-sub", 4.0, 8.5, "start", &context.event.title))
            .add(text("readout-key", 4.0, 11.0, "start", "Time"))
            .add(text("readout-time", 30.0, 11.0, "end", &state.time))
            .add(text("readout-key", 4.0, 13.5, "start", "Coverage"))
            .add(text(
                "readout-value",
                30.0,
                13.5,
                "end",
                &format!("{:.1}%", state.coverage * 100.0),
            ));

        let bottom = cfg.view_height - 2.0;
        g = g
            .add(text(
                "readout-value",
                2.0,
                bottom,
                "start",
                &format!("Altitude {:.1}°", state.altitude),
            ))
            .add(text(
                "readout-direction",
                cfg.view_center_x,
                bottom,
                "middle",
                &format!(
                    "Viewing direction {:.0}° {}",
                    state.azimuth,
                    compass_label(state.azimuth)
                ),
            ))
            .add(text(
                "readout-value",
                cfg.view_width - 2.0,
                bottom,
                "end",
                &format!(
                    "Step {}/{}",
                    context.cursor.index() + 1,
                    context.cursor.len().max(1)
                ),
            ));
        g
    }
}
