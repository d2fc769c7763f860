use serde::{Deserialize, Serialize};

/// One accepted guess and its feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    pub resolved_name: String,
    pub distance_km: u32,
    pub bearing_degrees: f64,
    pub proximity_percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GuessOutcome {
    Accepted { guess: Guess },
    /// Input did not resolve to any catalog entry.
    Unrecognized,
    /// Resolved to a country already in the history.
    Duplicate { resolved_name: String },
    /// The round is already over.
    Rejected,
}

/// Reply to `submit_guess`: the outcome and the status after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResult {
    #[serde(flatten)]
    pub outcome: GuessOutcome,
    pub status: GameStatus,
}

impl SubmitResult {
    pub fn guess(&self) -> Option<&Guess> {
        match &self.outcome {
            GuessOutcome::Accepted { guess } => Some(guess),
            _ => None,
        }
    }
}
