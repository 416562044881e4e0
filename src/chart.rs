use std::fs;

use log::warn;
use svg::Document;
use svg::node::element::{ClipPath, Definitions, Group, RadialGradient, Rectangle, Stop, Style};

use crate::config::{HorizonConfig, MapConfig};
use crate::context::{HorizonContext, MapContext};
use crate::layers::{
    BandLayer, CenterLineLayer, FrameLayer, GraticuleLayer, HorizonLineLayer, Layer,
    LimitsLayer, ObservationLayer, ReadoutLayer, SkyLayer, SunLayer, TimeMarkersLayer,
};
use crate::types::{EclipseEvent, ObservationPoint};

// Load the default css for embedding
const MAP_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/styles/map.css"));
const HORIZON_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/styles/horizon.css"));

fn load_css_text(css_path: Option<&str>, embedded: &str) -> String {
    if let Some(path) = css_path {
        match fs::read_to_string(path) {
            Ok(text) => return text,
            Err(e) => warn!("could not read css {path}: {e}; using embedded styles"),
        }
    }
    // Embedded fallback
    embedded.to_owned()
}

pub struct MapChart<'a> {
    pub context: MapContext<'a>,
    css_path: Option<String>,
}

impl<'a> MapChart<'a> {
    pub fn new(
        event: &'a EclipseEvent,
        observation: Option<&'a ObservationPoint>,
        cfg: MapConfig,
        css_path: Option<String>,
    ) -> Self {
        Self {
            context: MapContext::new(event, observation, cfg),
            css_path,
        }
    }

    pub fn draw_document(&self) -> Document {
        let w = self.context.cfg.width;
        let h = self.context.cfg.height;
        let l = &self.context.layout;

        // Layer stack, back to front
        let clipped_layers: Vec<Box<dyn Layer<MapContext<'a>>>> = vec![
            Box::new(GraticuleLayer::new()),
            Box::new(BandLayer::new()),
            Box::new(LimitsLayer::new()),
            Box::new(CenterLineLayer::new()),
            Box::new(TimeMarkersLayer::new()),
            Box::new(ObservationLayer::new()),
        ];
        let unclipped_layers: Vec<Box<dyn Layer<MapContext<'a>>>> =
            vec![Box::new(FrameLayer::new())];

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", w)
            .set("height", h)
            .set(
                "class",
                format!("map {}", self.context.cfg.theme.css_class()),
            );

        let css = load_css_text(self.css_path.as_deref(), MAP_CSS);
        if !css.is_empty() {
            doc = doc.add(Style::new(css));
        }

        let clip_rect = Rectangle::new()
            .set("x", l.plot_x)
            .set("y", l.plot_y)
            .set("width", l.plot_w)
            .set("height", l.plot_h);
        let clip = ClipPath::new().set("id", "clip-map").add(clip_rect);
        doc = doc.add(Definitions::new().add(clip));

        doc = doc.add(
            Rectangle::new()
                .set("class", "background")
                .set("width", w)
                .set("height", h),
        );
        doc = doc.add(
            Rectangle::new()
                .set("class", "sea")
                .set("x", l.plot_x)
                .set("y", l.plot_y)
                .set("width", l.plot_w)
                .set("height", l.plot_h),
        );

        // Clipped layers inside the map border
        let mut clipped = Group::new().set("clip-path", "url(#clip-map)");
        for layer in clipped_layers {
            clipped = clipped.add(layer.render(&self.context));
        }
        doc = doc.add(clipped);

        for layer in unclipped_layers {
            doc = doc.add(layer.render(&self.context));
        }

        doc
    }

    pub fn to_file(&self, path: &str) -> std::io::Result<()> {
        let doc = self.draw_document();
        svg::save(path, &doc)
    }
}

pub struct HorizonChart<'a> {
    pub context: HorizonContext<'a>,
    css_path: Option<String>,
}

impl<'a> HorizonChart<'a> {
    pub fn new(
        event: &'a EclipseEvent,
        point: &'a ObservationPoint,
        cfg: HorizonConfig,
        css_path: Option<String>,
    ) -> Self {
        Self {
            context: HorizonContext::new(event, point, cfg),
            css_path,
        }
    }

    /// Move the timeline cursor; out-of-range values clamp.
    pub fn select(&mut self, index: isize) -> usize {
        self.context.cursor.select(index)
    }

    fn sun_glow() -> RadialGradient {
        RadialGradient::new()
            .set("id", "sunGlow")
            .add(Stop::new().set("offset", "0%").set("stop-color", "#fff"))
            .add(
                Stop::new()
                    .set("offset", "30%")
                    .set("stop-color", "#fbbf24")
                    .set("stop-opacity", 0.9),
            )
            .add(
                Stop::new()
                    .set("offset", "100%")
                    .set("stop-color", "#fbbf24")
                    .set("stop-opacity", 0),
            )
    }

    pub fn draw_document(&self) -> Document {
        let cfg = &self.context.cfg;

        // Layer stack, back to front
        let layers: Vec<Box<dyn Layer<HorizonContext<'a>>>> = vec![
            Box::new(SkyLayer::new()),
            Box::new(SunLayer::new()),
            Box::new(HorizonLineLayer::new()),
            Box::new(ReadoutLayer::new()),
        ];

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", cfg.width)
            .set("height", cfg.height)
            .set("viewBox", (0.0, 0.0, cfg.view_width, cfg.view_height))
            .set("preserveAspectRatio", "xMidYMid slice")
            .set("class", "horizon-view");

        let css = load_css_text(self.css_path.as_deref(), HORIZON_CSS);
        if !css.is_empty() {
            doc = doc.add(Style::new(css));
        }
        doc = doc.add(Definitions::new().add(Self::sun_glow()));

        for layer in layers {
            doc = doc.add(layer.render(&self.context));
        }
        doc
    }

    pub fn to_file(&self, path: &str) -> std::io::Result<()> {
        let doc = self.draw_document();
        svg::save(path, &doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_event, sample_observation, temp_path};
    use crate::types::Theme;

    #[test]
    fn map_document_stacks_layers_and_theme() {
        let event = sample_event();
        let point = sample_observation();
        let cfg = MapConfig {
            theme: Theme::Light,
            ..MapConfig::default()
        };
        let chart = MapChart::new(&event, Some(&point), cfg, None);
        let svg = chart.draw_document().to_string();

        assert!(svg.contains("class=\"map theme-light\""));
        assert!(svg.contains("clip-map"));
        let band = svg.find("totality-band").unwrap();
        let center = svg.find("center-line").unwrap();
        let frame = svg.find("class=\"frame\"").unwrap();
        assert!(band < center && center < frame);
        assert!(svg.contains("marker total"));
    }

    #[test]
    fn horizon_document_uses_normalized_view_box() {
        let event = sample_event();
        let point = sample_observation();
        let mut chart = HorizonChart::new(&event, &point, HorizonConfig::default(), None);
        assert_eq!(chart.select(99), 6);
        let svg = chart.draw_document().to_string();
        assert!(svg.contains("viewBox=\"0 0 100 60\""));
        assert!(svg.contains("id=\"sunGlow\""));
        assert!(svg.contains("Step 7/7"));
    }

    #[test]
    fn css_override_falls_back_when_missing() {
        let missing = temp_path("missing.css");
        let css = load_css_text(missing.to_str(), "svg { fill: red }");
        assert_eq!(css, "svg { fill: red }");

        let path = temp_path("custom.css");
        fs::write(&path, ".band { fill: blue }").unwrap();
        let css = load_css_text(path.to_str(), "embedded");
        let _ = fs::remove_file(&path);
        assert_eq!(css, ".band { fill: blue }");
    }

    #[test]
    fn map_to_file_writes_svg() {
        let event = sample_event();
        let chart = MapChart::new(&event, None, MapConfig::default(), None);
        let path = temp_path("map.svg");
        chart.to_file(path.to_str().unwrap()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert!(text.contains("<svg"));
        assert!(text.contains("Total Eclipse 2026"));
    }
}
