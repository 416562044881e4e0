use svg::node::element::{Circle, Group, Rectangle};

use crate::context::MapContext;
use crate::details::PointSummary;
use crate::geometry::to_pixels;
use crate::layers::{Layer, group_with_class, text};

/// Marker for the queried point plus an info card next to it.
pub struct ObservationLayer {
    card_w: f64,
    card_h: f64,
    gap: f64,
}
impl ObservationLayer {
    pub fn new() -> Self {
        Self {
            card_w: 210.0,
            card_h: 118.0,
            gap: 12.0,
        }
    }
}

impl Layer<MapContext<'_>> for ObservationLayer {
    fn render(&self, context: &MapContext<'_>) -> Group {
        let mut g = group_with_class("observation");
        let Some(point) = context.observation else {
            return g;
        };
        let s = PointSummary::new(point);
        let kind = if s.total { "total" } else { "partial" };
        let p = to_pixels(point.coords(), context);

        g = g.add(
            Circle::new()
                .set("class", format!("marker {kind}"))
                .set("cx", p.x)
                .set("cy", p.y)
                .set("r", 6),
        );

        // Card sits to the right of the marker unless that leaves the plot.
        let l = &context.layout;
        let right_edge = l.plot_x + l.plot_w;
        let x = if p.x + self.gap + self.card_w <= right_edge {
            p.x + self.gap
        } else {
            p.x - self.gap - self.card_w
        };
        let y = (p.y - self.card_h / 2.0)
            .min(l.plot_y + l.plot_h - self.card_h)
            .max(l.plot_y);

        let mut card = group_with_class("card");
        card = card.add(
            Rectangle::new()
                .set("class", "card-bg")
                .set("x", x)
                .set("y", y)
                .set("width", self.card_w)
                .set("height", self.card_h)
                .set("rx", 10),
        );
        let tx = x + 10.0;
        card = card
            .add(text("card-title", tx, y + 20.0, "start", &s.name))
            .add(text(
                &format!("card-badge {kind}"),
                x + self.card_w - 10.0,
                y + 20.0,
                "end",
                s.badge,
            ))
            .add(text("card-coords", tx, y + 38.0, "start", &s.coords))
            .add(text(
                "card-value",
                tx,
                y + 60.0,
                "start",
                &format!("Sun altitude {}", s.altitude),
            ))
            .add(text(
                "card-value",
                tx,
                y + 78.0,
                "start",
                &format!("Azimuth {}", s.azimuth),
            ))
            .add(text(
                &format!("card-duration {kind}"),
                tx,
                y + 102.0,
                "start",
                &s.duration,
            ));
        g.add(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::test_utils::{make_map_context, sample_event, sample_observation};

    #[test]
    fn empty_without_observation() {
        let context = make_map_context(sample_event(), |_| {});
        let svg = ObservationLayer::new().render(&context).to_string();
        assert!(!svg.contains("marker"));
    }

    #[test]
    fn total_point_gets_total_marker_and_card() {
        let event = sample_event();
        let point = sample_observation();
        let context = MapContext::new(&event, Some(&point), MapConfig::default());
        let svg = ObservationLayer::new().render(&context).to_string();
        assert!(svg.contains("marker total"));
        assert!(svg.contains("TOTALITY"));
        assert!(svg.contains("42.3400, -3.7000"));
        assert!(svg.contains("Sun altitude 10.8°"));
    }

    #[test]
    fn partial_point_and_card_flips_left_at_edge() {
        let event = sample_event();
        let mut point = sample_observation();
        point.duration = "97% partial".into();
        // far east of the center, near the right edge
        point.lng = 4.6;
        let context = MapContext::new(&event, Some(&point), MapConfig::default());
        let p = to_pixels(point.coords(), &context);
        let svg = ObservationLayer::new().render(&context).to_string();
        assert!(svg.contains("marker partial"));
        assert!(svg.contains("PARTIAL"));
        let card_x = p.x - 12.0 - 210.0;
        assert!(svg.contains(&format!("x=\"{card_x}\"")));
    }
}
