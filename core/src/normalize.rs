use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical comparison key for a country name.
///
/// Lowercases, folds diacritics onto their base letter, turns every character
/// outside `a-z` into a separator, then collapses separator runs. Every join
/// and lookup in the crate goes through this function, so two names match
/// exactly when their keys are equal.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    let lowered = raw.to_lowercase();

    for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii_lowercase() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Returns the key when it is non-empty.
pub fn normalize_nonempty(raw: &str) -> Option<String> {
    let key = normalize(raw);
    (!key.is_empty()).then_some(key)
}
