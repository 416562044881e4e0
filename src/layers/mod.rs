use svg::node::element::path::Data;
use svg::node::element::{Group, Text as TextEl};

use crate::types::Point;

pub trait Layer<C> {
    /// Produce an SVG group for this layer.
    fn render(&self, context: &C) -> Group;
}

pub fn group_with_class(class: &str) -> Group {
    let mut g = Group::new();
    g = g.set("class", class);
    g
}

pub fn text(class: &str, x: f64, y: f64, anchor: &str, content: &str) -> TextEl {
    TextEl::new(content)
        .set("class", class)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
}

/// Open path through `seg`; `None` for fewer than two points.
pub fn polyline_data(seg: &[Point]) -> Option<Data> {
    if seg.len() < 2 {
        return None;
    }
    let mut d = Data::new().move_to((seg[0].x, seg[0].y));
    for p in &seg[1..] {
        d = d.line_to((p.x, p.y));
    }
    Some(d)
}

pub mod band;
pub mod center_line;
pub mod frame;
pub mod graticule;
pub mod horizon_line;
pub mod limits;
pub mod observation;
pub mod readout;
pub mod sky;
pub mod sun;
pub mod time_markers;

pub use band::BandLayer;
pub use center_line::CenterLineLayer;
pub use frame::FrameLayer;
pub use graticule::GraticuleLayer;
pub use horizon_line::HorizonLineLayer;
pub use limits::LimitsLayer;
pub use observation::ObservationLayer;
pub use readout::ReadoutLayer;
pub use sky::SkyLayer;
pub use sun::SunLayer;
pub use time_markers::TimeMarkersLayer;
