use super::daily::{DISTRACTORS, sample_distinct};
use crate::catalog::{Catalog, PlayableEntry};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    Flag,
    Capital,
    Neighbor,
}

/// A multiple-choice question unlocked after winning a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BonusChallenge {
    /// Pick the country that flies this flag.
    Flag {
        flag_emoji: Option<String>,
        flag_url: Option<String>,
        options: Vec<String>,
        correct: String,
    },
    /// Pick the capital of `country`.
    Capital {
        country: String,
        options: Vec<String>,
        correct: String,
    },
    /// Pick the country that borders `country`.
    Neighbor {
        country: String,
        options: Vec<String>,
        correct: String,
    },
}

impl BonusChallenge {
    pub fn kind(&self) -> BonusKind {
        match self {
            BonusChallenge::Flag { .. } => BonusKind::Flag,
            BonusChallenge::Capital { .. } => BonusKind::Capital,
            BonusChallenge::Neighbor { .. } => BonusKind::Neighbor,
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            BonusChallenge::Flag { options, .. }
            | BonusChallenge::Capital { options, .. }
            | BonusChallenge::Neighbor { options, .. } => options,
        }
    }

    pub fn correct(&self) -> &str {
        match self {
            BonusChallenge::Flag { correct, .. }
            | BonusChallenge::Capital { correct, .. }
            | BonusChallenge::Neighbor { correct, .. } => correct,
        }
    }

    pub fn check(&self, answer: &str) -> bool {
        answer == self.correct()
    }
}

fn shuffled<R: Rng + ?Sized>(mut options: Vec<String>, correct: &str, rng: &mut R) -> Vec<String> {
    options.push(correct.to_string());
    options.shuffle(rng);
    options
}

/// Flag question for the target; `None` without a facts link.
pub fn flag_challenge<R: Rng + ?Sized>(
    catalog: &Catalog,
    target: &PlayableEntry,
    rng: &mut R,
) -> Option<BonusChallenge> {
    let facts = target.facts.as_ref()?;
    let others = sample_distinct(catalog.entries(), DISTRACTORS, rng, |e| {
        e.display_name == target.display_name
    });
    let wrong = others.into_iter().map(|e| e.display_name).collect();

    Some(BonusChallenge::Flag {
        flag_emoji: facts.flag_emoji.clone(),
        flag_url: facts.flag_url.clone(),
        options: shuffled(wrong, &target.display_name, rng),
        correct: target.display_name.clone(),
    })
}

/// Capital question; `None` when the target has no capital or fewer than
/// three other distinct capitals exist.
pub fn capital_challenge<R: Rng + ?Sized>(
    catalog: &Catalog,
    target: &PlayableEntry,
    rng: &mut R,
) -> Option<BonusChallenge> {
    let capital = target.capital()?;

    let mut pool: Vec<String> = Vec::new();
    for entry in catalog.entries() {
        if entry.display_name == target.display_name {
            continue;
        }
        if let Some(other) = entry.capital() {
            if other != capital && !pool.iter().any(|c| c == other) {
                pool.push(other.to_string());
            }
        }
    }
    if pool.len() < DISTRACTORS {
        return None;
    }

    let wrong = sample_distinct(&pool, DISTRACTORS, rng, |_| false);
    Some(BonusChallenge::Capital {
        country: target.display_name.clone(),
        options: shuffled(wrong, capital, rng),
        correct: capital.to_string(),
    })
}

/// Neighbor question; `None` when no border code resolves to a name.
pub fn neighbor_challenge<R: Rng + ?Sized>(
    catalog: &Catalog,
    target: &PlayableEntry,
    rng: &mut R,
) -> Option<BonusChallenge> {
    let neighbors = catalog.neighbors_of(target);
    let correct = neighbors.choose(rng)?.clone();
    let border_codes = target.facts.as_ref().map(|f| f.border_codes.as_slice()).unwrap_or_default();

    // display names and facts names can differ, so match neighbors by code too
    let is_neighbor = |e: &PlayableEntry| {
        let by_code = e
            .facts
            .as_ref()
            .and_then(|f| f.alpha3_code.as_deref())
            .is_some_and(|code| border_codes.iter().any(|b| b == code));
        let by_name = e
            .facts
            .as_ref()
            .and_then(|f| f.primary_name())
            .is_some_and(|name| neighbors.iter().any(|n| n == name));
        by_code || by_name || neighbors.contains(&e.display_name)
    };

    let others = sample_distinct(catalog.entries(), DISTRACTORS, rng, |e| {
        e.display_name == target.display_name || e.display_name == correct || is_neighbor(e)
    });
    let wrong = others.into_iter().map(|e| e.display_name).collect();

    Some(BonusChallenge::Neighbor {
        country: target.display_name.clone(),
        options: shuffled(wrong, &correct, rng),
        correct,
    })
}

/// Every challenge available for the target, in flag, capital, neighbor order.
pub fn bonus_challenges<R: Rng + ?Sized>(
    catalog: &Catalog,
    target: &PlayableEntry,
    rng: &mut R,
) -> Vec<BonusChallenge> {
    [
        flag_challenge(catalog, target, rng),
        capital_challenge(catalog, target, rng),
        neighbor_challenge(catalog, target, rng),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusAnswer {
    pub answer: String,
    pub correct: bool,
}

/// Answers given for one round. Each kind can be answered once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusAnswers {
    answers: BTreeMap<BonusKind, BonusAnswer>,
}

impl BonusAnswers {
    /// Checks and records an answer. Returns `None` if this kind was already
    /// answered, otherwise whether the answer was right.
    pub fn answer(&mut self, challenge: &BonusChallenge, answer: &str) -> Option<bool> {
        let kind = challenge.kind();
        if self.answers.contains_key(&kind) {
            return None;
        }
        let correct = challenge.check(answer);
        self.answers.insert(
            kind,
            BonusAnswer {
                answer: answer.to_string(),
                correct,
            },
        );
        Some(correct)
    }

    pub fn get(&self, kind: BonusKind) -> Option<&BonusAnswer> {
        self.answers.get(&kind)
    }

    pub fn score(&self) -> usize {
        self.answers.values().filter(|a| a.correct).count()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
