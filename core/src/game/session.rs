use super::messages::{GameStatus, Guess, GuessOutcome, SubmitResult};
use crate::catalog::{Catalog, PlayableEntry};
use crate::error::SessionError;
use crate::geo::{bearing_degrees, distance_km, proximity_percent};
use std::sync::Arc;
use tracing::{debug, info};

pub const MAX_GUESSES: usize = 6;

/// One round against a fixed target (pure logic, no I/O).
///
/// Only recognized, non-duplicate guesses count towards the limit. `Won`
/// and `Lost` are terminal.
#[derive(Debug, Clone)]
pub struct GameSession {
    catalog: Arc<Catalog>,
    target: String,
    guesses: Vec<Guess>,
    status: GameStatus,
}

impl GameSession {
    /// Starts a round. The target must be a display name in the catalog.
    pub fn new(catalog: Arc<Catalog>, target: &str) -> Result<Self, SessionError> {
        let entry = catalog
            .entry(target)
            .ok_or_else(|| SessionError::UnknownTarget(target.to_string()))?;
        if entry.lat_lon().is_none() {
            return Err(SessionError::UnknownTarget(target.to_string()));
        }

        Ok(Self {
            target: entry.display_name.clone(),
            catalog,
            guesses: Vec::new(),
            status: GameStatus::Playing,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn target_entry(&self) -> Option<&PlayableEntry> {
        self.catalog.entry(&self.target)
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    fn result(&self, outcome: GuessOutcome) -> SubmitResult {
        SubmitResult {
            outcome,
            status: self.status,
        }
    }

    /// Resolves free text and scores it against the target.
    pub fn submit_guess(&mut self, input: &str) -> SubmitResult {
        if self.status.is_over() {
            return self.result(GuessOutcome::Rejected);
        }

        let Some(guessed) = self.catalog.resolve_guess(input).and_then(|n| self.catalog.entry(n)) else {
            debug!(input, "Unrecognized guess");
            return self.result(GuessOutcome::Unrecognized);
        };

        if self.guesses.iter().any(|g| g.resolved_name == guessed.display_name) {
            return self.result(GuessOutcome::Duplicate {
                resolved_name: guessed.display_name.clone(),
            });
        }

        let (Some((glat, glon)), Some((tlat, tlon))) = (
            guessed.lat_lon(),
            self.target_entry().and_then(PlayableEntry::lat_lon),
        ) else {
            return self.result(GuessOutcome::Unrecognized);
        };

        let distance = distance_km(glat, glon, tlat, tlon);
        let guess = Guess {
            resolved_name: guessed.display_name.clone(),
            distance_km: distance,
            bearing_degrees: bearing_degrees(glat, glon, tlat, tlon),
            proximity_percent: proximity_percent(distance),
        };
        self.guesses.push(guess.clone());

        if guess.resolved_name == self.target {
            self.status = GameStatus::Won;
            info!(target = self.target, attempts = self.guesses.len(), "Round won");
        } else if self.guesses.len() >= MAX_GUESSES {
            self.status = GameStatus::Lost;
            info!(target = self.target, "Round lost");
        } else {
            debug!(guess = guess.resolved_name, distance, "Guess accepted");
        }

        self.result(GuessOutcome::Accepted { guess })
    }
}
