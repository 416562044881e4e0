use svg::node::element::{Circle, Group, Line, Rectangle};

use crate::context::MapContext;
use crate::layers::{Layer, group_with_class, text};

#[derive(Debug, Clone, Copy)]
enum Swatch {
    Band,
    Line,
    TotalMarker,
    PartialMarker,
}

pub struct FrameLayer {
    legend: [(Swatch, &'static str); 4],
}
impl FrameLayer {
    pub fn new() -> Self {
        Self {
            legend: [
                (Swatch::Band, "Totality zone"),
                (Swatch::Line, "Center line (maximum)"),
                (Swatch::TotalMarker, "Marker: totality"),
                (Swatch::PartialMarker, "Marker: partial"),
            ],
        }
    }

    fn legend(&self, x: f64, y: f64) -> Group {
        let row_h = 18.0;
        let mut g = group_with_class("legend");
        g = g.add(
            Rectangle::new()
                .set("class", "legend-bg")
                .set("x", x)
                .set("y", y)
                .set("width", 170)
                .set("height", 26.0 + row_h * self.legend.len() as f64)
                .set("rx", 8),
        );
        g = g.add(text("legend-title", x + 10.0, y + 16.0, "start", "LEGEND"));

        for (i, (swatch, label)) in self.legend.iter().enumerate() {
            let cy = y + 32.0 + i as f64 * row_h;
            let sx = x + 16.0;
            g = match swatch {
                Swatch::Band => g.add(
                    Rectangle::new()
                        .set("class", "band")
                        .set("x", sx - 6.0)
                        .set("y", cy - 6.0)
                        .set("width", 12)
                        .set("height", 12),
                ),
                Swatch::Line => g.add(
                    Line::new()
                        .set("class", "center")
                        .set("x1", sx - 7.0)
                        .set("y1", cy)
                        .set("x2", sx + 7.0)
                        .set("y2", cy),
                ),
                Swatch::TotalMarker | Swatch::PartialMarker => {
                    let kind = if matches!(swatch, Swatch::TotalMarker) {
                        "total"
                    } else {
                        "partial"
                    };
                    g.add(
                        Circle::new()
                            .set("class", format!("marker {kind}"))
                            .set("cx", sx)
                            .set("cy", cy)
                            .set("r", 5),
                    )
                }
            };
            g = g.add(text("legend-label", sx + 14.0, cy + 4.0, "start", label));
        }
        g
    }
}

impl Layer<MapContext<'_>> for FrameLayer {
    fn render(&self, context: &MapContext<'_>) -> Group {
        let mut g = group_with_class("frame");
        let l = &context.layout;
        let e = context.event;

        g = g.add(
            Rectangle::new()
                .set("x", l.plot_x)
                .set("y", l.plot_y)
                .set("width", l.plot_w)
                .set("height", l.plot_h)
                .set("fill", "none")
                .set("class", "border"),
        );

        g = g.add(text("title", l.plot_x, l.plot_y - 14.0, "start", &e.title));
        g = g.add(text(
            "subtitle",
            l.plot_x + l.plot_w,
            l.plot_y - 14.0,
            "end",
            &format!("{} · {}", e.date, e.region),
        ));

        let legend_h = 26.0 + 18.0 * self.legend.len() as f64;
        g.add(self.legend(l.plot_x + 12.0, l.plot_y + l.plot_h - legend_h - 12.0))
    }
}
