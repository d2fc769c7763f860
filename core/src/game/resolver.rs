use crate::catalog::linker::contains_either;
use crate::catalog::{FactIndex, PlayableEntry};
use crate::normalize::normalize;

/// Maps free text to a catalog entry.
///
/// Tries, in order: the entry whose key equals the normalized input; the
/// entry named after the facts record the input is an alias of; the first
/// entry (catalog order) whose key contains the input or is contained by it.
/// Ambiguous input resolves to something rather than nothing.
pub fn resolve_guess<'a>(
    input: &str,
    entries: &'a [PlayableEntry],
    facts: &FactIndex,
) -> Option<&'a PlayableEntry> {
    let key = normalize(input);
    if key.is_empty() {
        return None;
    }

    if let Some(exact) = entries.iter().find(|e| e.normalized_key == key) {
        return Some(exact);
    }

    let alias = facts
        .by_normalized_name(&key)
        .and_then(|record| record.primary_name())
        .map(normalize)
        .and_then(|common| entries.iter().find(|e| e.normalized_key == common));
    if alias.is_some() {
        return alias;
    }

    entries.iter().find(|e| contains_either(&e.normalized_key, &key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FactsRecord;
    use crate::catalog::ShapeEntry;
    use crate::geo::LonLat;

    fn entry(name: &str) -> PlayableEntry {
        PlayableEntry::new(
            ShapeEntry {
                display_name: name.to_string(),
                normalized_key: normalize(name),
                centroid: Some(LonLat::new(0.0, 0.0)),
                projected_area: 1.0,
                difficulty: 3,
            },
            None,
        )
    }

    fn facts(names: &[&str]) -> FactsRecord {
        FactsRecord {
            common_name: names.first().map(|n| n.to_string()),
            name_variants: names.iter().map(|n| n.to_string()).collect(),
            ..Default::default()
        }
    }

    fn fixture() -> (Vec<PlayableEntry>, FactIndex) {
        let entries = vec![
            entry("United States"),
            entry("United Arab Emirates"),
            entry("Côte d'Ivoire"),
            entry("Germany"),
            entry("Niger"),
            entry("Nigeria"),
        ];
        let index = FactIndex::build(vec![
            facts(&["United States", "USA", "America"]),
            facts(&["Germany", "Deutschland", "Federal Republic of Germany"]),
            facts(&["Ivory Coast", "Republic of Côte d'Ivoire"]),
        ]);
        (entries, index)
    }

    fn resolve<'a>(input: &str, fixture: &'a (Vec<PlayableEntry>, FactIndex)) -> Option<&'a str> {
        resolve_guess(input, &fixture.0, &fixture.1).map(|e| e.display_name.as_str())
    }

    #[test]
    fn test_exact_match_ignores_case_and_accents() {
        let f = fixture();
        assert_eq!(resolve("germany", &f), Some("Germany"));
        assert_eq!(resolve("  COTE D IVOIRE ", &f), Some("Côte d'Ivoire"));
        assert_eq!(resolve("Niger", &f), Some("Niger"));
    }

    #[test]
    fn test_alias_redirect_through_facts() {
        let f = fixture();
        assert_eq!(resolve("Deutschland", &f), Some("Germany"));
        assert_eq!(resolve("usa", &f), Some("United States"));
    }

    #[test]
    fn test_alias_without_playable_common_name_falls_through() {
        let f = fixture();
        // "Ivory Coast" is the facts common name but not a shape name, and
        // nothing contains it either
        assert_eq!(resolve("Ivory Coast", &f), None);
    }

    #[test]
    fn test_containment_takes_first_in_catalog_order() {
        let f = fixture();
        assert_eq!(resolve("united", &f), Some("United States"));
        assert_eq!(resolve("arab emirates", &f), Some("United Arab Emirates"));
        assert_eq!(resolve("nige", &f), Some("Niger"));
    }

    #[test]
    fn test_input_containing_entry_name() {
        let f = fixture();
        assert_eq!(resolve("Federal Germany", &f), Some("Germany"));
    }

    #[test]
    fn test_unrecognized_input() {
        let f = fixture();
        assert_eq!(resolve("", &f), None);
        assert_eq!(resolve("!!!", &f), None);
        assert_eq!(resolve("Atlantis", &f), None);
        assert_eq!(resolve("ni", &f), None);
    }
}
