use super::facts::{FactIndex, FactsRecord};
use super::playable::PlayableEntry;
use super::shapes::ShapeEntry;
use crate::normalize::normalize;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Shorter side of a substring match must be at least this long.
pub const MIN_CONTAINMENT_LEN: usize = 3;

/// Known spelling differences between the shape dataset (left) and the
/// facts dataset (right). Both sides go through `normalize` before use.
pub const ALIAS_PATCHES: &[(&str, &str)] = &[
    ("United States of America", "United States"),
    ("Russian Federation", "Russia"),
    ("Bolivia (Plurinational State of)", "Bolivia"),
    ("Venezuela (Bolivarian Republic of)", "Venezuela"),
    ("Iran (Islamic Republic of)", "Iran"),
    ("Tanzania, United Republic of", "Tanzania"),
    ("Korea, Republic of", "South Korea"),
    ("Korea, Democratic People's Republic of", "North Korea"),
    ("Syrian Arab Republic", "Syria"),
    ("Lao People's Democratic Republic", "Laos"),
    ("Moldova, Republic of", "Moldova"),
    ("Brunei Darussalam", "Brunei"),
    ("Cabo Verde", "Cape Verde"),
    ("Timor-Leste", "East Timor"),
];

/// How a name was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTier {
    Exact,
    Patched,
    Contained,
}

/// Match counts from one linking pass.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub exact: usize,
    pub patched: usize,
    pub contained: usize,
    pub unmatched: usize,
}

impl LinkReport {
    fn record(&mut self, tier: Option<LinkTier>) {
        match tier {
            Some(LinkTier::Exact) => self.exact += 1,
            Some(LinkTier::Patched) => self.patched += 1,
            Some(LinkTier::Contained) => self.contained += 1,
            None => self.unmatched += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.exact + self.patched + self.contained + self.unmatched
    }
}

/// True when either key contains the other and the shorter one is long
/// enough to be meaningful.
pub fn contains_either(a: &str, b: &str) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    short.len() >= MIN_CONTAINMENT_LEN && long.contains(short)
}

/// Alias-patch target for a normalized shape name, normalized.
pub fn patched_key(key: &str) -> Option<String> {
    ALIAS_PATCHES
        .iter()
        .find(|(from, _)| normalize(from) == key)
        .map(|(_, to)| normalize(to))
}

/// Finds the facts record for a shape-dataset display name: exact key,
/// then alias patch, then first containment hit in index order.
pub fn best_match(index: &FactIndex, display_name: &str) -> Option<(Arc<FactsRecord>, LinkTier)> {
    let key = normalize(display_name);
    if key.is_empty() {
        return None;
    }

    if let Some(record) = index.by_normalized_name(&key) {
        return Some((record.clone(), LinkTier::Exact));
    }

    if let Some(record) = patched_key(&key).and_then(|patched| index.by_normalized_name(&patched)) {
        return Some((record.clone(), LinkTier::Patched));
    }

    index
        .names()
        .find(|(name, _)| contains_either(name, &key))
        .map(|(_, record)| (record.clone(), LinkTier::Contained))
}

/// Joins every shape entry to its facts record. The output has exactly one
/// entry per input shape, in input order; unmatched shapes carry no facts.
pub fn link(shapes: Vec<ShapeEntry>, index: &FactIndex) -> (Vec<PlayableEntry>, LinkReport) {
    let mut report = LinkReport::default();

    let entries = shapes
        .into_iter()
        .map(|shape| {
            let found = best_match(index, &shape.display_name);
            report.record(found.as_ref().map(|(_, tier)| *tier));

            match &found {
                Some((record, LinkTier::Contained)) => debug!(
                    shape = shape.display_name,
                    facts = record.primary_name(),
                    "Linked by containment"
                ),
                None => debug!(shape = shape.display_name, "No facts record"),
                _ => {}
            }

            PlayableEntry::new(shape, found.map(|(record, _)| record))
        })
        .collect();

    info!(
        exact = report.exact,
        patched = report.patched,
        contained = report.contained,
        unmatched = report.unmatched,
        "Linked shape catalog to facts"
    );

    (entries, report)
}
