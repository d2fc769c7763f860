pub mod bonus;
pub mod daily;
pub mod messages;
pub mod resolver;
pub mod session;
pub mod share;
pub mod stats;

pub use bonus::{BonusAnswer, BonusAnswers, BonusChallenge, BonusKind, bonus_challenges};
pub use daily::{daily_seed, multiple_choice, pick_daily, pick_daily_seeded, pick_random};
pub use messages::{GameStatus, Guess, GuessOutcome, SubmitResult};
pub use resolver::resolve_guess;
pub use session::{GameSession, MAX_GUESSES};
pub use share::{compass_arrow, heat_square, share_text};
pub use stats::{MemoryStatsStore, PlayerStats, StatsStore};
