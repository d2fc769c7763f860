use crate::catalog::RawShape;
use crate::error::LoadError;
use crate::geo::{Geometry, LonLat, Polygon, Ring};
use serde_json::Value;

/// Decode a GeoJSON `FeatureCollection` into raw shapes.
pub fn parse_feature_collection(doc: &Value) -> Result<Vec<RawShape>, LoadError> {
    let features = doc
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| LoadError::UnsupportedShapes("FeatureCollection without features".to_string()))?;

    Ok(features
        .iter()
        .map(|feature| RawShape {
            name: feature_name(feature),
            geometry: feature.get("geometry").map(parse_geometry).unwrap_or_default(),
        })
        .collect())
}

/// `properties.name` when it is a string.
pub(crate) fn feature_name(feature: &Value) -> Option<String> {
    feature
        .get("properties")?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

fn parse_geometry(geometry: &Value) -> Geometry {
    let coordinates = geometry.get("coordinates");
    match geometry.get("type").and_then(Value::as_str) {
        Some("Polygon") => Geometry::Polygon(parse_polygon(coordinates)),
        Some("MultiPolygon") => Geometry::MultiPolygon(
            coordinates
                .and_then(Value::as_array)
                .map(|polygons| polygons.iter().map(|p| parse_polygon(Some(p))).collect())
                .unwrap_or_default(),
        ),
        _ => Geometry::Empty,
    }
}

fn parse_polygon(coordinates: Option<&Value>) -> Polygon {
    let Some(rings) = coordinates.and_then(Value::as_array) else {
        return Vec::new();
    };
    rings.iter().map(parse_ring).collect()
}

fn parse_ring(ring: &Value) -> Ring {
    let Some(positions) = ring.as_array() else {
        return Vec::new();
    };
    positions.iter().filter_map(parse_position).collect()
}

/// `[lon, lat, ..]`; extra dimensions are ignored.
fn parse_position(position: &Value) -> Option<LonLat> {
    match position.as_array()?.as_slice() {
        [lon, lat, ..] => Some(LonLat::new(lon.as_f64()?, lat.as_f64()?)),
        _ => None,
    }
}
