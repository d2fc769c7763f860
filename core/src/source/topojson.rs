use super::geojson::feature_name;
use crate::catalog::RawShape;
use crate::error::LoadError;
use crate::geo::{Geometry, LonLat, Polygon, Ring};
use serde_json::Value;
use tracing::warn;

/// Object holding country boundaries in the world-atlas topologies.
pub const COUNTRIES_OBJECT: &str = "countries";

/// Quantization transform: `position = quantized * scale + translate`.
#[derive(Debug, Clone, Copy)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

impl Transform {
    fn from_value(value: &Value) -> Option<Self> {
        let pair = |key: &str| -> Option<[f64; 2]> {
            match value.get(key)?.as_array()?.as_slice() {
                [a, b, ..] => Some([a.as_f64()?, b.as_f64()?]),
                _ => None,
            }
        };
        Some(Self {
            scale: pair("scale")?,
            translate: pair("translate")?,
        })
    }
}

/// Decode a TopoJSON `Topology`, taking features from the `countries`
/// object or, failing that, the first object.
pub fn parse_topology(doc: &Value) -> Result<Vec<RawShape>, LoadError> {
    let objects = doc
        .get("objects")
        .and_then(Value::as_object)
        .ok_or_else(|| LoadError::UnsupportedShapes("Topology without objects".to_string()))?;

    let object = objects
        .get(COUNTRIES_OBJECT)
        .or_else(|| objects.values().next())
        .ok_or_else(|| LoadError::MissingObject(COUNTRIES_OBJECT.to_string()))?;

    let transform = doc.get("transform").and_then(Transform::from_value);
    let arcs = decode_arcs(doc.get("arcs"), transform);

    let geometries = match object.get("type").and_then(Value::as_str) {
        Some("GeometryCollection") => object
            .get("geometries")
            .and_then(Value::as_array)
            .map(|g| g.iter().collect())
            .unwrap_or_default(),
        _ => vec![object],
    };

    Ok(geometries
        .into_iter()
        .map(|geometry| {
            let name = feature_name(geometry);
            let geometry = decode_geometry(geometry, &arcs).unwrap_or_else(|e| {
                warn!(name = name.as_deref(), error = %e, "Skipping malformed geometry");
                Geometry::Empty
            });
            RawShape { name, geometry }
        })
        .collect())
}

/// Absolute positions for every arc. Quantized arcs are delta-encoded, with
/// the running sum restarting at each arc.
fn decode_arcs(arcs: Option<&Value>, transform: Option<Transform>) -> Vec<Vec<LonLat>> {
    let Some(arcs) = arcs.and_then(Value::as_array) else {
        return Vec::new();
    };

    arcs.iter()
        .map(|arc| {
            let Some(points) = arc.as_array() else {
                return Vec::new();
            };
            let (mut x, mut y) = (0.0, 0.0);
            points
                .iter()
                .filter_map(|p| match p.as_array()?.as_slice() {
                    [a, b, ..] => Some((a.as_f64()?, b.as_f64()?)),
                    _ => None,
                })
                .map(|(a, b)| match transform {
                    Some(t) => {
                        x += a;
                        y += b;
                        LonLat::new(x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1])
                    }
                    None => LonLat::new(a, b),
                })
                .collect()
        })
        .collect()
}

fn decode_geometry(geometry: &Value, arcs: &[Vec<LonLat>]) -> Result<Geometry, LoadError> {
    let refs = geometry.get("arcs").and_then(Value::as_array);
    match (geometry.get("type").and_then(Value::as_str), refs) {
        (Some("Polygon"), Some(rings)) => Ok(Geometry::Polygon(decode_polygon(rings, arcs)?)),
        (Some("MultiPolygon"), Some(polygons)) => {
            let polygons = polygons
                .iter()
                .filter_map(Value::as_array)
                .map(|rings| decode_polygon(rings, arcs))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Geometry::MultiPolygon(polygons))
        }
        _ => Ok(Geometry::Empty),
    }
}

fn decode_polygon(rings: &[Value], arcs: &[Vec<LonLat>]) -> Result<Polygon, LoadError> {
    rings
        .iter()
        .filter_map(Value::as_array)
        .map(|refs| decode_ring(refs, arcs))
        .collect()
}

/// Stitches arcs into a ring. Adjacent arcs share an endpoint that is kept
/// once; `!i` (a negative index) walks arc `i` backwards.
fn decode_ring(refs: &[Value], arcs: &[Vec<LonLat>]) -> Result<Ring, LoadError> {
    let mut points: Ring = Vec::new();

    for r in refs {
        let Some(index) = r.as_i64() else {
            continue;
        };
        let (position, reversed) = if index < 0 { (!index, true) } else { (index, false) };
        let arc = usize::try_from(position)
            .ok()
            .and_then(|i| arcs.get(i))
            .ok_or(LoadError::BadArc(index))?;

        points.pop();
        let start = points.len();
        points.extend_from_slice(arc);
        if reversed {
            points[start..].reverse();
        }
    }

    if points.len() < 4 {
        if let Some(&first) = points.first() {
            points.push(first);
        }
    }
    Ok(points)
}
