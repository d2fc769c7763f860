use crate::geo::{Geometry, LonLat, projected_area, spherical_centroid};
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A boundary feature as delivered by the shape dataset.
#[derive(Debug, Clone, Default)]
pub struct RawShape {
    pub name: Option<String>,
    pub geometry: Geometry,
}

impl RawShape {
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: Some(name.into()),
            geometry,
        }
    }
}

/// One country's geometric record, derived once from a [`RawShape`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub display_name: String,
    pub normalized_key: String,
    /// `None` when the geometry is empty or degenerate.
    pub centroid: Option<LonLat>,
    pub projected_area: f64,
    /// 1 (largest, easiest) to 5 (smallest, hardest).
    pub difficulty: u8,
}

/// Area thresholds at the 20th, 40th, 60th and 80th percentiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaQuantiles {
    pub q20: f64,
    pub q40: f64,
    pub q60: f64,
    pub q80: f64,
}

impl AreaQuantiles {
    /// Percentiles over the finite values, taken at index `floor((n-1) * p)`
    /// of the ascending sort. `None` when no value is finite.
    pub fn from_areas(areas: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted: Vec<f64> = areas.into_iter().filter(|a| a.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q = |p: f64| sorted[((sorted.len() - 1) as f64 * p).floor() as usize];
        Some(Self {
            q20: q(0.2),
            q40: q(0.4),
            q60: q(0.6),
            q80: q(0.8),
        })
    }

    /// Boundary values take the easier tier.
    pub fn tier(&self, area: f64) -> u8 {
        if area >= self.q80 {
            1
        } else if area >= self.q60 {
            2
        } else if area >= self.q40 {
            3
        } else if area >= self.q20 {
            4
        } else {
            5
        }
    }
}

/// Builds shape entries with centroid, area and difficulty tier.
///
/// Features without a usable name are dropped. Features with unusable
/// geometry are kept here (their centroid is `None`) so that tiers are
/// computed over the same population as the source.
pub fn build_shape_catalog(raw: impl IntoIterator<Item = RawShape>) -> Vec<ShapeEntry> {
    let mut dropped = 0usize;

    let mut entries: Vec<ShapeEntry> = raw
        .into_iter()
        .filter_map(|shape| {
            let Some(display_name) = shape.name.filter(|n| !n.trim().is_empty()) else {
                dropped += 1;
                return None;
            };

            let centroid = spherical_centroid(&shape.geometry).filter(LonLat::is_finite);
            let projected_area = projected_area(&shape.geometry).abs();

            Some(ShapeEntry {
                normalized_key: normalize(&display_name),
                display_name,
                centroid,
                projected_area,
                difficulty: 5,
            })
        })
        .collect();

    if let Some(quantiles) = AreaQuantiles::from_areas(entries.iter().map(|e| e.projected_area)) {
        for entry in &mut entries {
            entry.difficulty = quantiles.tier(entry.projected_area);
        }
    }

    debug!(entries = entries.len(), dropped, "Built shape catalog");
    entries
}
