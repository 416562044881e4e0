use svg::node::element::{Group, Path};

use crate::context::MapContext;
use crate::geometry::project_polyline;
use crate::layers::{Layer, group_with_class, polyline_data};
use crate::types::LatLng;

pub struct LimitsLayer;
impl LimitsLayer {
    pub fn new() -> Self {
        Self
    }

    fn add_line(&self, mut g: Group, context: &MapContext<'_>, line: &[LatLng], class: &str) -> Group {
        for seg in project_polyline(context, line) {
            if let Some(d) = polyline_data(&seg) {
                g = g.add(
                    Path::new()
                        .set("class", class)
                        .set("fill", "none")
                        .set("d", d),
                );
            }
        }
        g
    }
}

impl Layer<MapContext<'_>> for LimitsLayer {
    fn render(&self, context: &MapContext<'_>) -> Group {
        let mut g = group_with_class("limits");
        let e = context.event;
        // Limits are only drawn together with the band they enclose.
        if e.northern_limit.is_empty() || e.southern_limit.is_empty() {
            return g;
        }
        g = self.add_line(g, context, &e.northern_limit, "limit north");
        g = self.add_line(g, context, &e.southern_limit, "limit south");
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_map_context, sample_event};

    #[test]
    fn draws_both_limits() {
        let context = make_map_context(sample_event(), |_| {});
        let svg = LimitsLayer::new().render(&context).to_string();
        assert!(svg.contains("limit north"));
        assert!(svg.contains("limit south"));
    }

    #[test]
    fn skips_limits_without_band() {
        let mut event = sample_event();
        event.northern_limit.clear();
        let context = make_map_context(event, |_| {});
        let svg = LimitsLayer::new().render(&context).to_string();
        assert!(!svg.contains("limit south"));
    }
}
