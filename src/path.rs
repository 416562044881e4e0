use crate::types::{EclipseEvent, LatLng};

/// UTC labels attached to the first center-line points, in order.
pub const DEFAULT_TIME_LABELS: [&str; 5] = ["18:30", "19:00", "19:30", "20:00", "20:30"];

#[derive(Debug, Clone, PartialEq)]
pub struct CenterLineMarker {
    pub coord: LatLng,
    pub label: Option<String>,
}

/// Closed boundary of the totality band: the northern limit, then the
/// southern limit walked backwards.
///
/// Returns an empty boundary when either limit is missing, so events with
/// incomplete path data simply draw no band.
pub fn build_totality_band(event: &EclipseEvent) -> Vec<LatLng> {
    if event.northern_limit.is_empty() || event.southern_limit.is_empty() {
        return Vec::new();
    }
    event
        .northern_limit
        .iter()
        .chain(event.southern_limit.iter().rev())
        .copied()
        .collect()
}

/// Pair center-line points with labels by index. Points past the end of
/// `labels` stay on the line but carry no label.
pub fn build_center_line_markers(event: &EclipseEvent, labels: &[&str]) -> Vec<CenterLineMarker> {
    event
        .center_line
        .iter()
        .enumerate()
        .map(|(i, &coord)| CenterLineMarker {
            coord,
            label: labels.get(i).map(|l| l.to_string()),
        })
        .collect()
}
