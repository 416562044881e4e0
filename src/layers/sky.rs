use svg::node::element::{Group, Rectangle};

use crate::context::HorizonContext;
use crate::horizon::sky_dimming;
use crate::layers::{Layer, group_with_class};

pub struct SkyLayer;
impl SkyLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer<HorizonContext<'_>> for SkyLayer {
    fn render(&self, context: &HorizonContext<'_>) -> Group {
        let mut g = group_with_class("sky");
        let cfg = &context.cfg;
        let state = context.current_state();

        g = g.add(
            Rectangle::new()
                .set("class", "sky-bg")
                .set("x", 0)
                .set("y", 0)
                .set("width", cfg.view_width)
                .set("height", cfg.view_height),
        );
        g.add(
            Rectangle::new()
                .set("class", "dimming")
                .set("x", 0)
                .set("y", 0)
                .set("width", cfg.view_width)
                .set("height", cfg.view_height)
                .set("fill-opacity", sky_dimming(state.coverage)),
        )
    }
}
