pub mod centroid;
pub mod projection;
pub mod scoring;

use serde::{Deserialize, Serialize};

pub use centroid::spherical_centroid;
pub use projection::projected_area;
pub use scoring::{EARTH_RADIUS_KM, bearing_degrees, distance_km, proximity_percent};

/// A position in degrees, longitude first as in GeoJSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

/// A closed or open ring of positions. A trailing point equal to the first
/// is treated as the closing point and ignored by the geometry routines.
pub type Ring = Vec<LonLat>;

/// An exterior ring followed by zero or more holes.
pub type Polygon = Vec<Ring>;

/// Boundary geometry of a shape record.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
    #[default]
    Empty,
}

impl Geometry {
    /// All polygons of the geometry, in source order.
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Geometry::Polygon(polygon) => std::slice::from_ref(polygon),
            Geometry::MultiPolygon(polygons) => polygons,
            Geometry::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.polygons().iter().all(|p| p.iter().all(|r| r.is_empty()))
    }
}

/// The ring without its closing duplicate point.
pub(crate) fn open_ring(ring: &[LonLat]) -> &[LonLat] {
    match ring {
        [first, .., last] if first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}
