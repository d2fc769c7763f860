use crate::catalog::FactsRecord;
use crate::error::LoadError;
use serde_json::Value;
use tracing::debug;

/// Parse a REST Countries (v3.1) `all` payload into facts records.
///
/// Every field is optional. Array elements that are not objects are skipped.
pub fn parse_facts(json: &str) -> Result<Vec<FactsRecord>, LoadError> {
    let payload: Value = serde_json::from_str(json)?;
    let Some(items) = payload.as_array() else {
        return Err(LoadError::FactsNotArray);
    };

    let records: Vec<FactsRecord> = items.iter().filter_map(parse_country).collect();
    debug!(
        records = records.len(),
        skipped = items.len() - records.len(),
        "Parsed facts payload"
    );
    Ok(records)
}

fn parse_country(item: &Value) -> Option<FactsRecord> {
    let obj = item.as_object()?;

    let name = obj.get("name");
    let common_name = str_at(name, "common");
    let official_name = str_at(name, "official");

    let mut name_variants = Vec::new();
    name_variants.extend(common_name.clone());
    name_variants.extend(official_name);
    name_variants.extend(strings(obj.get("altSpellings")));

    // translations: { "fra": { "official": .., "common": .. }, .. }
    if let Some(translations) = obj.get("translations").and_then(Value::as_object) {
        for translation in translations.values() {
            name_variants.extend(str_at(Some(translation), "common"));
            name_variants.extend(str_at(Some(translation), "official"));
        }
    }

    let flags = obj.get("flags");
    let flag_url = str_at(flags, "png").or_else(|| str_at(flags, "svg"));

    Some(FactsRecord {
        alpha3_code: str_at(Some(item), "cca3"),
        name_variants,
        common_name,
        capital: strings(obj.get("capital")).into_iter().next(),
        population: obj.get("population").and_then(Value::as_u64),
        region: str_at(Some(item), "region"),
        subregion: str_at(Some(item), "subregion"),
        flag_emoji: str_at(Some(item), "flag"),
        flag_url,
        border_codes: strings(obj.get("borders")),
    })
}

/// A non-empty string field of an object.
fn str_at(value: Option<&Value>, key: &str) -> Option<String> {
    let s = value?.get(key)?.as_str()?.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// The string elements of an array field; anything else yields nothing.
fn strings(value: Option<&Value>) -> Vec<String> {
    let Some(arr) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    arr.iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
