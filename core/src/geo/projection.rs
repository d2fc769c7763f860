use super::{Geometry, LonLat, open_ring};

// Equal Earth (Šavrič, Patterson, Jenny 2018) polynomial coefficients.
const A1: f64 = 1.340264;
const A2: f64 = -0.081106;
const A3: f64 = 0.000893;
const A4: f64 = 0.003796;

/// Projects a position onto the unit Equal Earth plane.
///
/// Longitudes outside [-180, 180] are accepted and extend the plane
/// linearly, which keeps rings that were unwrapped across the antimeridian
/// contiguous.
pub fn equal_earth(p: LonLat) -> (f64, f64) {
    let m = 3f64.sqrt() / 2.0;
    let lambda = p.lon.to_radians();
    let theta = (m * p.lat.to_radians().sin()).asin();
    let t2 = theta * theta;
    let t6 = t2 * t2 * t2;

    let x = lambda * theta.cos() / (m * (A1 + 3.0 * A2 * t2 + t6 * (7.0 * A3 + 9.0 * A4 * t2)));
    let y = theta * (A1 + A2 * t2 + t6 * (A3 + A4 * t2));
    (x, y)
}

/// Unsigned planar area of one ring after projection.
fn ring_area(ring: &[LonLat]) -> f64 {
    let ring = open_ring(ring);
    if ring.len() < 3 {
        return 0.0;
    }

    let mut points = Vec::with_capacity(ring.len());
    let mut offset = 0.0;
    let mut prev_lon = ring[0].lon;
    for p in ring {
        let delta = p.lon - prev_lon;
        if delta > 180.0 {
            offset -= 360.0;
        } else if delta < -180.0 {
            offset += 360.0;
        }
        prev_lon = p.lon;
        points.push(equal_earth(LonLat::new(p.lon + offset, p.lat)));
    }

    let twice: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|((x0, y0), (x1, y1))| x0 * y1 - x1 * y0)
        .sum();
    (twice / 2.0).abs()
}

/// Relative area of a geometry on an equal-area projection.
///
/// Holes are subtracted from their exterior ring. The magnitude is only
/// meaningful when compared with other values from this function.
pub fn projected_area(geometry: &Geometry) -> f64 {
    geometry
        .polygons()
        .iter()
        .map(|polygon| {
            let mut rings = polygon.iter();
            let exterior = rings.next().map(|r| ring_area(r)).unwrap_or(0.0);
            let holes: f64 = rings.map(|r| ring_area(r)).sum();
            (exterior - holes).max(0.0)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(lon0: f64, lat0: f64, w: f64, h: f64) -> Vec<LonLat> {
        vec![
            LonLat::new(lon0, lat0),
            LonLat::new(lon0, lat0 + h),
            LonLat::new(lon0 + w, lat0 + h),
            LonLat::new(lon0 + w, lat0),
            LonLat::new(lon0, lat0),
        ]
    }

    #[test]
    fn test_origin_projects_to_origin() {
        let (x, y) = equal_earth(LonLat::new(0.0, 0.0));
        assert!(x.abs() < 1e-12 && y.abs() < 1e-12);
    }

    #[test]
    fn test_projection_is_symmetric() {
        let (x1, y1) = equal_earth(LonLat::new(30.0, 45.0));
        let (x2, y2) = equal_earth(LonLat::new(-30.0, -45.0));
        assert!((x1 + x2).abs() < 1e-12);
        assert!((y1 + y2).abs() < 1e-12);
    }

    #[test]
    fn test_equal_area_across_latitudes() {
        // Same spherical area: a 10x10 degree cell at the equator is larger
        // than one at 60N by roughly the ratio of sin-differences.
        let equator = projected_area(&Geometry::Polygon(vec![rect(0.0, 0.0, 10.0, 10.0)]));
        let north = projected_area(&Geometry::Polygon(vec![rect(0.0, 60.0, 10.0, 10.0)]));
        let expected_ratio = (10f64.to_radians().sin() - 0.0)
            / (70f64.to_radians().sin() - 60f64.to_radians().sin());
        let ratio = equator / north;
        assert!((ratio - expected_ratio).abs() / expected_ratio < 0.02, "ratio {ratio}");
    }

    #[test]
    fn test_holes_are_subtracted() {
        let solid = Geometry::Polygon(vec![rect(0.0, 0.0, 10.0, 10.0)]);
        let holed = Geometry::Polygon(vec![rect(0.0, 0.0, 10.0, 10.0), rect(2.0, 2.0, 2.0, 2.0)]);
        assert!(projected_area(&holed) < projected_area(&solid));
        assert!(projected_area(&holed) > 0.0);
    }

    #[test]
    fn test_antimeridian_ring_is_unwrapped() {
        let crossing = vec![
            LonLat::new(179.0, 0.0),
            LonLat::new(179.0, 2.0),
            LonLat::new(-179.0, 2.0),
            LonLat::new(-179.0, 0.0),
            LonLat::new(179.0, 0.0),
        ];
        let a = projected_area(&Geometry::Polygon(vec![crossing]));
        let b = projected_area(&Geometry::Polygon(vec![rect(10.0, 0.0, 2.0, 2.0)]));
        assert!((a - b).abs() / b < 1e-9, "{a} vs {b}");
    }

    #[test]
    fn test_degenerate_geometry_has_zero_area() {
        assert_eq!(projected_area(&Geometry::Empty), 0.0);
        let line = vec![LonLat::new(0.0, 0.0), LonLat::new(1.0, 1.0)];
        assert_eq!(projected_area(&Geometry::Polygon(vec![line])), 0.0);
    }
}
