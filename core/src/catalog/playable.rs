use super::facts::{FactIndex, FactsRecord};
use super::linker::{LinkReport, link};
use super::shapes::{RawShape, ShapeEntry, build_shape_catalog};
use crate::game::resolver::resolve_guess;
use crate::geo::LonLat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// A guessable country: its shape data plus the linked facts record, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayableEntry {
    pub display_name: String,
    pub normalized_key: String,
    /// Stays `None` only until the catalog filter drops the entry.
    pub centroid: Option<LonLat>,
    pub projected_area: f64,
    pub difficulty: u8,
    pub facts: Option<Arc<FactsRecord>>,
}

impl PlayableEntry {
    pub fn new(shape: ShapeEntry, facts: Option<Arc<FactsRecord>>) -> Self {
        Self {
            display_name: shape.display_name,
            normalized_key: shape.normalized_key,
            centroid: shape.centroid,
            projected_area: shape.projected_area,
            difficulty: shape.difficulty,
            facts,
        }
    }

    /// Centroid as (lat, lon), the argument order of the scoring functions.
    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        self.centroid.map(|c| (c.lat, c.lon))
    }

    pub fn capital(&self) -> Option<&str> {
        self.facts.as_ref()?.capital.as_deref()
    }
}

/// The immutable, game-facing country list together with the facts index
/// it was linked against.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<PlayableEntry>,
    facts: FactIndex,
}

impl Catalog {
    /// Builds shape entries, indexes facts, links the two, then drops
    /// entries without a usable centroid.
    pub fn build(
        shapes: impl IntoIterator<Item = RawShape>,
        facts: impl IntoIterator<Item = FactsRecord>,
    ) -> (Self, LinkReport) {
        let shapes = build_shape_catalog(shapes);
        let index = FactIndex::build(facts);
        let (linked, report) = link(shapes, &index);
        let catalog = Self::from_parts(linked, index);
        (catalog, report)
    }

    /// Wraps already-linked entries, applying the centroid filter.
    pub fn from_parts(entries: Vec<PlayableEntry>, facts: FactIndex) -> Self {
        let before = entries.len();
        let entries: Vec<PlayableEntry> = entries
            .into_iter()
            .filter(|e| !e.display_name.is_empty() && e.centroid.is_some_and(|c| c.is_finite()))
            .collect();

        if entries.len() < before {
            info!(dropped = before - entries.len(), "Dropped entries without centroid");
        }
        if entries.is_empty() {
            warn!("Playable catalog is empty");
        }

        Self { entries, facts }
    }

    pub fn entries(&self) -> &[PlayableEntry] {
        &self.entries
    }

    pub fn facts(&self) -> &FactIndex {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry with this exact display name.
    pub fn entry(&self, display_name: &str) -> Option<&PlayableEntry> {
        self.entries.iter().find(|e| e.display_name == display_name)
    }

    /// Canonical display name for free-text input, or `None` when the input
    /// is not recognized.
    pub fn resolve_guess(&self, input: &str) -> Option<&str> {
        resolve_guess(input, &self.entries, &self.facts).map(|e| e.display_name.as_str())
    }

    /// Display names in alphabetical order, for autocomplete lists.
    pub fn names_sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|e| e.display_name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Common names of the entry's bordering countries. Codes without a
    /// facts record are skipped.
    pub fn neighbors_of(&self, entry: &PlayableEntry) -> Vec<String> {
        let Some(facts) = &entry.facts else {
            return Vec::new();
        };
        facts
            .border_codes
            .iter()
            .filter_map(|code| self.facts.by_alpha3(code))
            .filter_map(|record| record.primary_name().map(str::to_string))
            .collect()
    }
}

/// Compact population label: `1.4B`, `67.8M`, `350K`, `812`; `—` if unknown.
pub fn format_population(population: Option<u64>) -> String {
    let Some(n) = population else {
        return "—".to_string();
    };
    let n = n as f64;
    if n >= 1e9 {
        format!("{}B", (n / 1e8).round() / 10.0)
    } else if n >= 1e6 {
        format!("{}M", (n / 1e5).round() / 10.0)
    } else if n >= 1e3 {
        format!("{}K", (n / 1e3).round())
    } else {
        format!("{n}")
    }
}
