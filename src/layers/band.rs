use svg::node::element::{Group, Path};

use crate::context::MapContext;
use crate::geometry::project_ring;
use crate::layers::{Layer, group_with_class, polyline_data};
use crate::path::build_totality_band;

pub struct BandLayer;
impl BandLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer<MapContext<'_>> for BandLayer {
    fn render(&self, context: &MapContext<'_>) -> Group {
        let mut g = group_with_class("totality-band");
        let band = build_totality_band(context.event);

        let ring = project_ring(context, &band);
        if ring.len() < 3 {
            return g;
        }
        if let Some(d) = polyline_data(&ring) {
            g = g.add(Path::new().set("class", "band").set("d", d.close()));
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_map_context, sample_event};

    #[test]
    fn draws_one_closed_polygon() {
        let context = make_map_context(sample_event(), |_| {});
        let svg = BandLayer::new().render(&context).to_string();
        assert_eq!(svg.matches("class=\"band\"").count(), 1);
        assert!(svg.contains('z') || svg.contains('Z'));
    }

    #[test]
    fn omitted_when_a_limit_is_missing() {
        let mut event = sample_event();
        event.southern_limit.clear();
        let context = make_map_context(event, |_| {});
        let svg = BandLayer::new().render(&context).to_string();
        assert!(!svg.contains("class=\"band\""));
    }

    #[test]
    fn band_across_antimeridian_is_one_polygon() {
        let mut event = sample_event();
        event.center = crate::types::LatLng::new(-21.0, 179.0);
        event.zoom = 3;
        event.northern_limit = vec![
            crate::types::LatLng::new(-19.0, 170.0),
            crate::types::LatLng::new(-20.0, -170.0),
        ];
        event.southern_limit = vec![
            crate::types::LatLng::new(-22.0, 171.0),
            crate::types::LatLng::new(-23.0, -171.0),
        ];
        let context = make_map_context(event, |_| {});
        let svg = BandLayer::new().render(&context).to_string();
        assert_eq!(svg.matches("class=\"band\"").count(), 1);
    }
}
