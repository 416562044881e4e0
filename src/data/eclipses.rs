use phf::phf_map;

use crate::types::{EclipseEvent, LatLng};

/// Compile-time form of an [`EclipseEvent`].
pub struct EclipseRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub region: &'static str,
    pub description: &'static str,
    pub center: LatLng,
    pub zoom: u8,
    pub northern_limit: &'static [LatLng],
    pub southern_limit: &'static [LatLng],
    pub center_line: &'static [LatLng],
}

impl From<&EclipseRecord> for EclipseEvent {
    fn from(r: &EclipseRecord) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title.to_string(),
            date: r.date.to_string(),
            region: r.region.to_string(),
            description: r.description.to_string(),
            center: r.center,
            zoom: r.zoom,
            northern_limit: r.northern_limit.to_vec(),
            southern_limit: r.southern_limit.to_vec(),
            center_line: r.center_line.to_vec(),
        }
    }
}

const fn ll(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng)
}

// Display order
pub static ECLIPSES: [EclipseRecord; 4] = [
    EclipseRecord {
        id: "2026",
        title: "Total Eclipse 2026",
        date: "12. August 2026",
        region: "Spain, Iceland, Greenland",
        description: "The first total eclipse in mainland Europe for decades, passing through northern Spain at sunset.",
        center: ll(41.5, -2.0),
        zoom: 6,
        northern_limit: &[
            ll(45.5, -10.0),
            ll(44.5, -5.0),
            ll(43.3, -3.0),
            ll(42.6, -0.2),
            ll(40.5, 3.3),
            ll(39.0, 6.0),
        ],
        southern_limit: &[
            ll(43.5, -11.0),
            ll(42.5, -6.3),
            ll(41.3, -4.4),
            ll(40.7, -1.5),
            ll(38.6, 2.0),
            ll(37.0, 4.5),
        ],
        center_line: &[
            ll(44.5, -10.5),
            ll(43.54, -5.66),
            ll(42.34, -3.70),
            ll(41.65, -0.88),
            ll(39.57, 2.65),
            ll(38.0, 5.25),
        ],
    },
    EclipseRecord {
        id: "2027",
        title: "Total Eclipse 2027",
        date: "2. August 2027",
        region: "North Africa, Spain, Gibraltar",
        description: "One of the longest eclipses of the century, passing directly over the Valley of the Kings in Egypt.",
        center: ll(30.0, 15.0),
        zoom: 4,
        northern_limit: &[
            ll(37.5, -8.0),
            ll(36.8, 0.0),
            ll(35.0, 10.0),
            ll(31.5, 25.0),
            ll(26.0, 40.0),
        ],
        southern_limit: &[
            ll(35.5, -9.0),
            ll(34.8, -1.0),
            ll(33.0, 9.0),
            ll(29.5, 24.0),
            ll(24.0, 39.0),
        ],
        center_line: &[
            ll(36.5, -8.5),
            ll(35.8, -0.5),
            ll(34.0, 9.5),
            ll(30.5, 24.5),
            ll(25.0, 39.5),
        ],
    },
    EclipseRecord {
        id: "2028",
        title: "Total Eclipse 2028",
        date: "22. July 2028",
        region: "Australia, New Zealand",
        description: "A spectacular path crossing the entire Australian continent and passing directly over Sydney Harbour.",
        center: ll(-25.0, 133.0),
        zoom: 4,
        northern_limit: &[
            ll(-12.0, 120.0),
            ll(-18.0, 130.0),
            ll(-28.0, 140.0),
            ll(-34.0, 151.0),
        ],
        southern_limit: &[
            ll(-14.0, 118.0),
            ll(-20.0, 128.0),
            ll(-30.0, 138.0),
            ll(-36.0, 149.0),
        ],
        center_line: &[
            ll(-13.0, 119.0),
            ll(-19.0, 129.0),
            ll(-29.0, 139.0),
            ll(-35.0, 150.0),
        ],
    },
    EclipseRecord {
        id: "2030",
        title: "Total Eclipse 2030",
        date: "25. November 2030",
        region: "South Africa, Australia",
        description: "Crossing the Southern Ocean from Africa to the Australian outback.",
        center: ll(-32.0, 50.0),
        zoom: 3,
        northern_limit: &[
            ll(-28.0, 15.0),
            ll(-32.0, 30.0),
            ll(-38.0, 80.0),
            ll(-33.0, 140.0),
        ],
        southern_limit: &[
            ll(-30.0, 14.0),
            ll(-34.0, 29.0),
            ll(-40.0, 79.0),
            ll(-35.0, 139.0),
        ],
        center_line: &[
            ll(-29.0, 14.5),
            ll(-33.0, 29.5),
            ll(-39.0, 79.5),
            ll(-34.0, 139.5),
        ],
    },
];

static ECLIPSE_INDEX: phf::Map<&'static str, usize> = phf_map! {
    "2026" => 0,
    "2027" => 1,
    "2028" => 2,
    "2030" => 3,
};

/// Display position of a built-in event.
pub fn builtin_position(id: &str) -> Option<usize> {
    ECLIPSE_INDEX.get(id).copied()
}

pub fn builtin_events() -> Vec<EclipseEvent> {
    ECLIPSES.iter().map(EclipseEvent::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_points_at_matching_records() {
        assert_eq!(ECLIPSE_INDEX.len(), ECLIPSES.len());
        for (i, rec) in ECLIPSES.iter().enumerate() {
            assert_eq!(builtin_position(rec.id), Some(i));
        }
        assert!(builtin_position("1999").is_none());
    }

    #[test]
    fn builtin_events_keep_display_order() {
        let ids: Vec<String> = builtin_events().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["2026", "2027", "2028", "2030"]);
    }

    #[test]
    fn builtin_paths_are_complete() {
        for e in builtin_events() {
            assert!(e.has_consistent_limits(), "{}", e.id);
            assert!(!e.northern_limit.is_empty(), "{}", e.id);
            assert!(!e.center_line.is_empty(), "{}", e.id);
        }
    }

    #[test]
    fn record_converts_field_for_field() {
        let e = EclipseEvent::from(&ECLIPSES[0]);
        assert_eq!(e.title, "Total Eclipse 2026");
        assert_eq!(e.zoom, 6);
        assert_eq!(e.center, LatLng::new(41.5, -2.0));
        assert_eq!(e.northern_limit[0], LatLng::new(45.5, -10.0));
        assert_eq!(e.southern_limit.len(), 6);
        assert_eq!(e.center_line[2], LatLng::new(42.34, -3.70));
    }
}
