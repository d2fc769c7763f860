//! Decoders for the raw datasets the catalog is built from.

pub mod geojson;
pub mod restcountries;
pub mod topojson;

use crate::catalog::RawShape;
use crate::error::LoadError;
use serde_json::Value;
use tracing::debug;

pub use restcountries::parse_facts;

/// Parse a shape dataset, either a TopoJSON `Topology` or a GeoJSON
/// `FeatureCollection`.
pub fn parse_shapes(json: &str) -> Result<Vec<RawShape>, LoadError> {
    let doc: Value = serde_json::from_str(json)?;

    let shapes = match doc.get("type").and_then(Value::as_str) {
        Some("Topology") => topojson::parse_topology(&doc)?,
        Some("FeatureCollection") => geojson::parse_feature_collection(&doc)?,
        Some(other) => return Err(LoadError::UnsupportedShapes(other.to_string())),
        None => return Err(LoadError::UnsupportedShapes("missing type".to_string())),
    };

    debug!(shapes = shapes.len(), "Parsed shape dataset");
    Ok(shapes)
}
