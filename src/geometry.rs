use std::f64::consts::PI;

use crate::context::MapContext;
use crate::types::{LatLng, Point};

/// Latitude where the Web Mercator square ends.
pub const MAX_MERCATOR_LAT: f64 = 85.05112878;
pub const TILE_SIZE: f64 = 256.0;

/// Width (and height) of the whole world in pixels at `zoom`.
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2f64.powi(zoom as i32)
}

// Web Mercator: (0, 0) is the north-west corner at 180°W, y grows south.
pub fn mercator(coord: LatLng, world: f64) -> Point {
    let lat = coord.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    let sin = lat.sin();
    Point {
        x: (coord.lng + 180.0) / 360.0 * world,
        y: (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * world,
    }
}

#[inline]
pub fn to_pixels(coord: LatLng, context: &MapContext<'_>) -> Point {
    let l = &context.layout;
    let p = mercator(coord, l.world_size);
    Point {
        x: l.center_px.x + (p.x - l.center_world.x),
        y: l.center_px.y + (p.y - l.center_world.y),
    }
}

// Only x wraps around the world; a tall jump in y is a real segment.
pub fn split_segments(points: &[Point], threshold: f64) -> Vec<Vec<Point>> {
    if points.is_empty() {
        return vec![];
    }
    let mut segs = Vec::new();
    let mut seg = vec![points[0]];
    for w in points.windows(2) {
        let (a, b) = (w[0], w[1]);
        if (b.x - a.x).abs() > threshold {
            segs.push(seg);
            seg = vec![b];
        } else {
            seg.push(b);
        }
    }
    if !seg.is_empty() {
        segs.push(seg);
    }
    segs
}

/// Project a polyline to pixels, broken where it crosses the antimeridian.
pub fn project_polyline(context: &MapContext<'_>, coords: &[LatLng]) -> Vec<Vec<Point>> {
    let pts: Vec<Point> = coords.iter().map(|&c| to_pixels(c, context)).collect();
    split_segments(&pts, context.layout.split_threshold)
}

/// Project a closed ring without breaking it: each point is shifted by whole
/// world widths to stay next to its predecessor, so a ring crossing the
/// antimeridian stays one polygon.
pub fn project_ring(context: &MapContext<'_>, coords: &[LatLng]) -> Vec<Point> {
    let world = context.layout.world_size;
    let mut out: Vec<Point> = Vec::with_capacity(coords.len());
    for &c in coords {
        let mut p = to_pixels(c, context);
        if let Some(prev) = out.last() {
            p.x -= ((p.x - prev.x) / world).round() * world;
        }
        out.push(p);
    }
    out
}

pub fn sample_meridian(context: &MapContext<'_>, lng: f64) -> Vec<Point> {
    [-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT]
        .iter()
        .map(|&lat| to_pixels(LatLng::new(lat, lng), context))
        .collect()
}

pub fn sample_parallel(context: &MapContext<'_>, lat: f64, step_deg: u32) -> Vec<Point> {
    let step = step_deg.max(1) as i32;
    let mut out = Vec::new();
    let mut lng = -180;
    while lng <= 180 {
        out.push(to_pixels(LatLng::new(lat, lng as f64), context));
        lng += step;
    }
    out
}
