use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use log::debug;

use crate::catalog::CatalogError;
use crate::types::{EclipseEvent, LatLng};

fn reader_builder() -> ReaderBuilder {
    let mut b = ReaderBuilder::new();
    b.has_headers(false)
        .flexible(true) // variable-length rows
        .trim(Trim::All)
        .comment(Some(b'#'));
    b
}

/// Load a catalog file from disk.
pub fn load_catalog_csv(path: &str) -> Result<Vec<EclipseEvent>, CatalogError> {
    let rdr = reader_builder().from_path(path)?;
    parse_catalog_from_reader(rdr)
}

fn line_of(rec: &StringRecord) -> u64 {
    rec.position().map(|p| p.line()).unwrap_or(0)
}

fn field_f64(rec: &StringRecord, i: usize, what: &str) -> Result<f64, CatalogError> {
    let s = rec.get(i).unwrap_or("");
    s.parse::<f64>().map_err(|_| CatalogError::BadRow {
        line: line_of(rec),
        reason: format!("{what} is not a number: '{s}'"),
    })
}

fn parse_event_row(rec: &StringRecord) -> Result<EclipseEvent, CatalogError> {
    if rec.len() < 9 {
        return Err(CatalogError::BadRow {
            line: line_of(rec),
            reason: format!("event rows need 9 fields, found {}", rec.len()),
        });
    }
    let text = |i: usize| rec.get(i).unwrap_or("").to_string();
    let zoom_s = rec.get(8).unwrap_or("");
    let zoom = zoom_s.parse::<u8>().map_err(|_| CatalogError::BadRow {
        line: line_of(rec),
        reason: format!("zoom is not a small integer: '{zoom_s}'"),
    })?;

    Ok(EclipseEvent {
        id: text(1),
        title: text(2),
        date: text(3),
        region: text(4),
        description: text(5),
        center: LatLng::new(
            field_f64(rec, 6, "center latitude")?,
            field_f64(rec, 7, "center longitude")?,
        ),
        zoom,
        northern_limit: Vec::new(),
        southern_limit: Vec::new(),
        center_line: Vec::new(),
    })
}

// Remaining fields after kind and id are (lat, lng) pairs. Blank pairs and a
// dangling trailing value are skipped; anything else must be a number.
fn parse_coords(rec: &StringRecord) -> Result<Vec<LatLng>, CatalogError> {
    let mut out = Vec::new();
    let mut i = 2usize;
    while i + 1 < rec.len() {
        let lat_s = rec.get(i).unwrap_or("");
        let lng_s = rec.get(i + 1).unwrap_or("");
        if !(lat_s.is_empty() || lng_s.is_empty()) {
            out.push(LatLng::new(
                field_f64(rec, i, "latitude")?,
                field_f64(rec, i + 1, "longitude")?,
            ));
        }
        i += 2;
    }
    Ok(out)
}

// Events are declared by `event` rows; `north`, `south` and `center` rows
// append points to the named polyline of an already declared event.
fn parse_catalog_from_reader<R: std::io::Read>(
    mut rdr: Reader<R>,
) -> Result<Vec<EclipseEvent>, CatalogError> {
    let mut events: Vec<EclipseEvent> = Vec::new();

    for result in rdr.records() {
        let rec = result?;
        let kind = rec.get(0).unwrap_or("");
        if kind.is_empty() {
            continue;
        }

        if kind == "event" {
            let event = parse_event_row(&rec)?;
            if events.iter().any(|e| e.id == event.id) {
                return Err(CatalogError::DuplicateEvent(event.id));
            }
            debug!("catalog: declared event {}", event.id);
            events.push(event);
            continue;
        }

        let id = rec.get(1).unwrap_or("");
        let Some(event) = events.iter_mut().find(|e| e.id == id) else {
            return Err(CatalogError::UndeclaredEvent {
                line: line_of(&rec),
                id: id.to_string(),
            });
        };
        let line = match kind {
            "north" => &mut event.northern_limit,
            "south" => &mut event.southern_limit,
            "center" => &mut event.center_line,
            other => {
                return Err(CatalogError::BadRow {
                    line: line_of(&rec),
                    reason: format!("unknown row kind '{other}'"),
                });
            }
        };
        line.extend(parse_coords(&rec)?);
    }

    Ok(events)
}
