mod catalog;
mod chart;
mod config;
mod context;
mod data;
mod defaults;
mod details;
mod geometry;
mod horizon;
mod layers;
mod layout;
mod path;
mod prefs;
mod service;
mod session;
mod types;

use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::chart::{HorizonChart, MapChart};
use crate::config::{HorizonConfig, MapConfig};
use crate::details::{EclipseDetails, parse_accommodations};
use crate::path::DEFAULT_TIME_LABELS;
use crate::service::{LocationRequest, RecordedLocationService};
use crate::session::{ObservationSession, Resolution};
use crate::types::{EclipseEvent, ObservationPoint, Theme, parse_dms, sexagesimal_dms_to_degrees};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, debug, info};

#[derive(Parser, Debug)]
#[command(name = "totality")]
#[command(about = "Solar eclipse path maps and horizon views", version)]
struct Cli {
    /// Preferences file holding the stored map theme
    #[arg(long, global = true, default_value = ".totality.json")]
    prefs: String,

    /// Optional catalog CSV replacing the built-in eclipses
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List known eclipses in display order
    List,
    /// Draw the path of totality of one eclipse as SVG
    Map(MapArgs),
    /// Print local circumstances for a location
    Locate(LocateArgs),
    /// Draw the sky above the horizon at one step of the local timeline
    Horizon(HorizonArgs),
    /// Show or change the stored map theme
    Theme {
        /// show | toggle | dark | light
        #[arg(default_value = "show")]
        action: String,
    },
}

#[derive(Args, Debug)]
struct LocationArgs {
    /// Latitude as degree:minute:second (e.g. "42:20:24") or decimal degrees ("42.34")
    #[arg(long, allow_hyphen_values = true)]
    lat: String,

    /// Longitude as degree:minute:second (e.g. "-3:42:00") or decimal degrees ("-3.7")
    #[arg(long, allow_hyphen_values = true)]
    lng: String,

    /// Recorded location data response (JSON)
    #[arg(long)]
    response: String,
}

#[derive(Args, Debug)]
struct MapArgs {
    /// Eclipse id, see `totality list`
    #[arg(long)]
    eclipse: String,

    /// Output SVG path
    #[arg(short = 'o', long = "out")]
    out: String,

    /// Optional CSS override file path; if omitted embedded CSS is used
    #[arg(long)]
    css: Option<String>,

    /// Output image width in pixels
    #[arg(long, default_value_t = 900)]
    width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 640)]
    height: u32,

    /// Zoom level overriding the eclipse's own framing
    #[arg(long)]
    zoom: Option<u8>,

    /// dark | light; defaults to the stored preference
    #[arg(long)]
    theme: Option<String>,

    /// Observation point to mark on the map
    #[arg(long, allow_hyphen_values = true, requires_all = ["lng", "response"])]
    lat: Option<String>,

    #[arg(long, allow_hyphen_values = true, requires_all = ["lat", "response"])]
    lng: Option<String>,

    #[arg(long, requires_all = ["lat", "lng"])]
    response: Option<String>,
}

#[derive(Args, Debug)]
struct LocateArgs {
    #[arg(long)]
    eclipse: String,

    #[command(flatten)]
    location: LocationArgs,

    /// Nearby accommodation list (JSON array)
    #[arg(long)]
    accommodations: Option<String>,

    /// Print the details as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct HorizonArgs {
    #[arg(long)]
    eclipse: String,

    #[command(flatten)]
    location: LocationArgs,

    /// Output SVG path
    #[arg(short = 'o', long = "out")]
    out: String,

    /// Timeline step to show (clamped into range)
    #[arg(long, allow_hyphen_values = true, conflicts_with = "max_phase")]
    index: Option<isize>,

    /// Show the step with the greatest coverage
    #[arg(long)]
    max_phase: bool,

    #[arg(long)]
    css: Option<String>,

    #[arg(long, default_value_t = 1200)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,
}

fn parse_angle(s: &str, what: &str) -> Result<f64> {
    if s.contains(':') {
        let (d, m, sec) = parse_dms(s).ok_or_else(|| anyhow!("bad {what} DMS: {s}"))?;
        Ok(sexagesimal_dms_to_degrees(d, m, sec))
    } else {
        let deg: f64 = s
            .parse()
            .with_context(|| format!("{what} must be DMS or degrees"))?;
        Ok(deg)
    }
}

fn parse_lat(s: &str) -> Result<f64> {
    let lat = parse_angle(s, "latitude")?;
    if !(-90.0..=90.0).contains(&lat) {
        bail!("latitude out of range: {lat}");
    }
    Ok(lat)
}

fn parse_lng(s: &str) -> Result<f64> {
    let lng = parse_angle(s, "longitude")?;
    if !(-180.0..=180.0).contains(&lng) {
        bail!("longitude out of range: {lng}");
    }
    Ok(lng)
}

fn parse_theme(s: &str) -> Result<Theme> {
    Theme::from_str(&s.to_lowercase())
        .ok_or_else(|| anyhow!("invalid theme '{s}'. Use: dark | light"))
}

fn find_event<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a EclipseEvent> {
    catalog.get(id).ok_or_else(|| {
        anyhow!(
            "unknown eclipse '{id}'. Known: {}",
            catalog.ids().join(", ")
        )
    })
}

// One query through the session; a failed or superseded answer is an error here.
fn observe(
    event: &EclipseEvent,
    lat: &str,
    lng: &str,
    response: &str,
) -> Result<ObservationPoint> {
    let request = LocationRequest {
        latitude: parse_lat(lat)?,
        longitude: parse_lng(lng)?,
        date: event.date.clone(),
    };
    let service = RecordedLocationService::new(response);
    let mut session = ObservationSession::new();

    let resolution = session.query(&service, request);
    debug!("location data session: {:?}", session.status());
    match resolution {
        Resolution::Applied => {}
        Resolution::Stale => bail!("location data answer was superseded"),
        Resolution::Failed(e) => {
            return Err(anyhow::Error::new(e).context("could not load location data"));
        }
    }
    session
        .current()
        .cloned()
        .ok_or_else(|| anyhow!("no observation point available"))
}

fn run_list(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("(no eclipses)");
        return;
    }
    for e in catalog.list_events() {
        println!("{:<12} {:<20} {:<28} {}", e.id, e.date, e.title, e.region);
    }
}

fn run_map(catalog: &Catalog, args: MapArgs, prefs: &Path) -> Result<()> {
    let event = find_event(catalog, &args.eclipse)?;
    let theme = match args.theme.as_deref() {
        Some(s) => parse_theme(s)?,
        None => prefs::load_theme(prefs).context("reading preferences")?,
    };

    let observation = match (&args.lat, &args.lng, &args.response) {
        (Some(lat), Some(lng), Some(response)) => Some(observe(event, lat, lng, response)?),
        _ => None,
    };

    let cfg = MapConfig {
        width: args.width,
        height: args.height,
        zoom: args.zoom,
        theme,
        ..MapConfig::default()
    };

    let chart = MapChart::new(event, observation.as_ref(), cfg, args.css);
    chart
        .to_file(&args.out)
        .with_context(|| format!("writing {}", args.out))?;
    info!("wrote {}", args.out);
    Ok(())
}

fn run_locate(catalog: &Catalog, args: LocateArgs) -> Result<()> {
    let event = find_event(catalog, &args.eclipse)?;
    let loc = &args.location;
    let point = observe(event, &loc.lat, &loc.lng, &loc.response)?;

    let accommodations = match args.accommodations.as_deref() {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            parse_accommodations(&text).with_context(|| format!("parsing {path}"))?
        }
        None => Vec::new(),
    };

    let details = EclipseDetails::assemble(event, &point, accommodations, &DEFAULT_TIME_LABELS);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        print!("{details}");
    }
    Ok(())
}

fn run_horizon(catalog: &Catalog, args: HorizonArgs) -> Result<()> {
    let event = find_event(catalog, &args.eclipse)?;
    let loc = &args.location;
    let point = observe(event, &loc.lat, &loc.lng, &loc.response)?;

    let cfg = HorizonConfig {
        width: args.width,
        height: args.height,
        ..HorizonConfig::default()
    };
    let mut chart = HorizonChart::new(event, &point, cfg, args.css);
    if args.max_phase {
        chart.context.cursor.jump_to_max_phase(&point.timeline);
    } else if let Some(i) = args.index {
        chart.select(i);
    }

    chart
        .to_file(&args.out)
        .with_context(|| format!("writing {}", args.out))?;
    info!("wrote {}", args.out);
    Ok(())
}

fn run_theme(prefs: &Path, action: &str) -> Result<()> {
    let current = prefs::load_theme(prefs).context("reading preferences")?;
    let next = match action {
        "show" => {
            println!("{}", current.as_str());
            return Ok(());
        }
        "toggle" => current.toggled(),
        other => parse_theme(other)?,
    };
    prefs::save_theme(prefs, next).context("writing preferences")?;
    println!("{}", next.as_str());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let mut builder = Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Warn);
    }
    builder.format_timestamp(None).init();

    let cli = Cli::parse();
    let prefs = Path::new(&cli.prefs);
    let catalog = Catalog::load(cli.catalog.as_deref()).context("loading catalog")?;

    match cli.command {
        Command::List => {
            run_list(&catalog);
            Ok(())
        }
        Command::Map(args) => run_map(&catalog, args, prefs),
        Command::Locate(args) => run_locate(&catalog, args),
        Command::Horizon(args) => run_horizon(&catalog, args),
        Command::Theme { action } => run_theme(prefs, &action),
    }
}

#[cfg(test)]
mod test_utils;
