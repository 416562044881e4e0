use svg::node::element::{Group, Path};

use crate::context::MapContext;
use crate::geometry::project_polyline;
use crate::layers::{Layer, group_with_class, polyline_data};

pub struct CenterLineLayer;
impl CenterLineLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer<MapContext<'_>> for CenterLineLayer {
    fn render(&self, context: &MapContext<'_>) -> Group {
        let mut g = group_with_class("center-line");
        for seg in project_polyline(context, &context.event.center_line) {
            if let Some(d) = polyline_data(&seg) {
                g = g.add(
                    Path::new()
                        .set("class", "center")
                        .set("fill", "none")
                        .set("d", d),
                );
            }
        }
        g
    }
}
