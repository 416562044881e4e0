use svg::node::element::{Group, Path};

use crate::context::MapContext;
use crate::geometry::{sample_meridian, sample_parallel, split_segments};
use crate::layers::{Layer, group_with_class, polyline_data};

pub struct GraticuleLayer;
impl GraticuleLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer<MapContext<'_>> for GraticuleLayer {
    fn render(&self, context: &MapContext<'_>) -> Group {
        let mut g = group_with_class("lines");
        let threshold = context.layout.split_threshold;
        let step = context.graticule_step_deg() as i32;

        let mut lng = -180;
        while lng <= 180 {
            if let Some(d) = polyline_data(&sample_meridian(context, lng as f64)) {
                g = g.add(
                    Path::new()
                        .set("class", "graticule meridian")
                        .set("fill", "none")
                        .set("d", d),
                );
            }
            lng += step;
        }

        let mut lat = -80;
        while lat <= 80 {
            let pts = sample_parallel(context, lat as f64, step as u32);
            for seg in split_segments(&pts, threshold) {
                if let Some(d) = polyline_data(&seg) {
                    g = g.add(
                        Path::new()
                            .set("class", "graticule parallel")
                            .set("fill", "none")
                            .set("d", d),
                    );
                }
            }
            lat += step;
        }

        g
    }
}
