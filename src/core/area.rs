use crate::core::number_format::format_decimal;
use crate::domain::model::{Polygon, Position};

/// WGS84 equatorial radius in metres.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

const SQUARE_METRES_PER_SQUARE_KM: f64 = 1_000_000.0;

/// Area of a lon/lat polygon on a sphere, in square metres. Holes are
/// subtracted from the exterior ring.
pub fn geodesic_area(polygon: &Polygon) -> f64 {
    let Some(exterior) = polygon.exterior() else {
        return 0.0;
    };

    let mut total = ring_area(exterior).abs();
    for hole in polygon.holes() {
        total -= ring_area(hole).abs();
    }
    total
}

// Spherical excess per vertex: (lon[i+1] - lon[i-1]) * sin(lat[i]), summed
// around the ring. Sign depends on winding.
fn ring_area(coords: &[Position]) -> f64 {
    let len = coords.len();
    if len < 3 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..len {
        let (lower, middle, upper) = if i == len - 2 {
            (len - 2, len - 1, 0)
        } else if i == len - 1 {
            (len - 1, 0, 1)
        } else {
            (i, i + 1, i + 2)
        };

        let p1 = coords[lower];
        let p2 = coords[middle];
        let p3 = coords[upper];
        total += (p3[0].to_radians() - p1[0].to_radians()) * p2[1].to_radians().sin();
    }

    total * EARTH_RADIUS * EARTH_RADIUS / 2.0
}

/// Smaller footprints get more fraction digits. Each bound is exclusive, so
/// exactly 1, 10 and 20 km² fall into the coarser bucket.
pub fn area_precision(square_km: f64) -> usize {
    if square_km < 1.0 {
        3
    } else if square_km < 10.0 {
        2
    } else if square_km < 20.0 {
        1
    } else {
        0
    }
}

/// "12.3 km²" from an area in square metres.
pub fn format_area(square_metres: f64) -> String {
    let square_km = square_metres / SQUARE_METRES_PER_SQUARE_KM;
    format!("{} km²", format_decimal(square_km, area_precision(square_km)))
}
