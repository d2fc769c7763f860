use crate::normalize::normalize_nonempty;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// One country's descriptive record from the facts dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactsRecord {
    pub alpha3_code: Option<String>,
    /// Common name, official name, alt spellings, then translations, in that
    /// order. The first entry is the common name when the source has one.
    pub name_variants: Vec<String>,
    pub common_name: Option<String>,
    pub capital: Option<String>,
    pub population: Option<u64>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    /// Flag as an emoji.
    pub flag_emoji: Option<String>,
    /// Flag image URL.
    pub flag_url: Option<String>,
    pub border_codes: Vec<String>,
}

impl FactsRecord {
    pub fn primary_name(&self) -> Option<&str> {
        self.common_name.as_deref()
    }
}

/// Lookup tables over the facts dataset.
#[derive(Debug, Clone, Default)]
pub struct FactIndex {
    records: Vec<Arc<FactsRecord>>,
    by_alpha3: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    // insertion order of `by_name`, scanned by the containment fallback
    name_order: Vec<String>,
}

impl FactIndex {
    /// Indexes every record by alpha-3 code and by each normalized name
    /// variant. A normalized name keeps the first record that produced it,
    /// across the whole input, so canonical names seen early are not
    /// displaced by later translations. Later duplicate codes overwrite.
    pub fn build(records: impl IntoIterator<Item = FactsRecord>) -> Self {
        let mut index = Self::default();

        for record in records {
            let slot = index.records.len();

            if let Some(code) = record.alpha3_code.as_deref().filter(|c| !c.is_empty()) {
                index.by_alpha3.insert(code.to_string(), slot);
            }

            for variant in &record.name_variants {
                let Some(key) = normalize_nonempty(variant) else {
                    continue;
                };
                if !index.by_name.contains_key(&key) {
                    index.by_name.insert(key.clone(), slot);
                    index.name_order.push(key);
                }
            }

            index.records.push(Arc::new(record));
        }

        debug!(
            records = index.records.len(),
            names = index.name_order.len(),
            codes = index.by_alpha3.len(),
            "Built fact index"
        );
        index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Arc<FactsRecord>] {
        &self.records
    }

    pub fn by_alpha3(&self, code: &str) -> Option<&Arc<FactsRecord>> {
        self.by_alpha3.get(code).map(|&i| &self.records[i])
    }

    /// Lookup by an already-normalized key.
    pub fn by_normalized_name(&self, key: &str) -> Option<&Arc<FactsRecord>> {
        self.by_name.get(key).map(|&i| &self.records[i])
    }

    /// Normalized names with their records, in first-insertion order.
    pub fn names(&self) -> impl Iterator<Item = (&str, &Arc<FactsRecord>)> {
        self.name_order
            .iter()
            .map(|key| (key.as_str(), &self.records[self.by_name[key]]))
    }
}
