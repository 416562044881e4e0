use svg::node::element::{Circle, Group};

use crate::context::HorizonContext;
use crate::layers::{Layer, group_with_class};

pub struct SunLayer;
impl SunLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer<HorizonContext<'_>> for SunLayer {
    fn render(&self, context: &HorizonContext<'_>) -> Group {
        let mut g = group_with_class("sun");
        let cfg = &context.cfg;
        let state = context.current_state();
        let p = context.sun_position();

        g = g.add(
            Circle::new()
                .set("class", "sun-disk")
                .set("cx", p.x)
                .set("cy", p.y)
                .set("r", cfg.sun_radius)
                .set("fill", "url(#sunGlow)"),
        );
        // The moon approaches from the left and covers the sun at totality.
        g.add(
            Circle::new()
                .set("class", "moon-disk")
                .set("cx", p.x - cfg.eclipse_disk_offset(state.coverage))
                .set("cy", p.y)
                .set("r", cfg.moon_radius),
        )
    }
}
