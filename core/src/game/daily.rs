use crate::catalog::{Catalog, PlayableEntry};
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

/// Number of wrong options offered next to the target in multiple choice.
pub const DISTRACTORS: usize = 3;

/// `year * 10000 + month * 100 + day` of a calendar date.
pub fn daily_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Reproducible value in [0, 1) for a seed: `frac(sin(seed + 1) * 10000)`.
///
/// Not a quality generator; every player must draw the same value for the
/// same day, which rules out anything platform- or state-dependent.
pub fn seeded_random(seed: i64) -> f64 {
    let x = ((seed + 1) as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Selection weight: tier 1 weighs 5, tier 5 weighs 1.
pub fn difficulty_weight(difficulty: u8) -> f64 {
    f64::from(6u8.saturating_sub(difficulty.clamp(1, 5)))
}

/// Walks entries subtracting weights from `r` and returns the first entry
/// that brings it to zero or below, falling back to the first entry.
fn weighted_pick(entries: &[PlayableEntry], unit: f64) -> Option<&PlayableEntry> {
    let total: f64 = entries.iter().map(|e| difficulty_weight(e.difficulty)).sum();
    let mut r = unit * total;
    for entry in entries {
        r -= difficulty_weight(entry.difficulty);
        if r <= 0.0 {
            return Some(entry);
        }
    }
    entries.first()
}

/// Daily target for a raw seed. Same seed and catalog, same answer.
pub fn pick_daily_seeded(catalog: &Catalog, seed: i64) -> Option<&str> {
    weighted_pick(catalog.entries(), seeded_random(seed)).map(|e| e.display_name.as_str())
}

/// Daily target for a calendar date.
pub fn pick_daily(catalog: &Catalog, date: NaiveDate) -> Option<&str> {
    pick_daily_seeded(catalog, daily_seed(date))
}

/// Uniformly random target for unlimited play.
pub fn pick_random<'a, R: Rng + ?Sized>(catalog: &'a Catalog, rng: &mut R) -> Option<&'a str> {
    let entries = catalog.entries();
    if entries.is_empty() {
        return None;
    }
    Some(entries[rng.random_range(0..entries.len())].display_name.as_str())
}

/// Draws up to `n` distinct items from `pool` that are not excluded.
pub fn sample_distinct<T, R>(pool: &[T], n: usize, rng: &mut R, exclude: impl Fn(&T) -> bool) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut candidates: Vec<&T> = pool.iter().filter(|item| !exclude(*item)).collect();
    candidates.shuffle(rng);
    candidates.into_iter().take(n).cloned().collect()
}

/// The target plus up to three random other names, shuffled. Empty when the
/// target is not in the catalog.
pub fn multiple_choice<R: Rng + ?Sized>(catalog: &Catalog, target: &str, rng: &mut R) -> Vec<String> {
    if catalog.entry(target).is_none() {
        return Vec::new();
    }
    let names: Vec<String> = catalog.entries().iter().map(|e| e.display_name.clone()).collect();
    let mut options = sample_distinct(&names, DISTRACTORS, rng, |name| name == target);
    options.push(target.to_string());
    options.shuffle(rng);
    options
}
