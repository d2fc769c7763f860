//! Country-guessing game engine: name matching, shape and facts catalogs,
//! distance/bearing feedback, daily puzzle selection and game sessions.

pub mod catalog;
pub mod error;
pub mod game;
pub mod geo;
pub mod normalize;
pub mod source;

pub use catalog::{Catalog, FactIndex, FactsRecord, LinkReport, PlayableEntry, RawShape};
pub use error::{LoadError, SessionError};
pub use game::{GameSession, GameStatus, Guess, GuessOutcome, SubmitResult};
pub use normalize::normalize;
pub use source::{parse_facts, parse_shapes};

/// Parses both raw datasets and builds the playable catalog.
pub fn load_catalog(shapes_json: &str, facts_json: &str) -> Result<(Catalog, LinkReport), LoadError> {
    let shapes = parse_shapes(shapes_json)?;
    let facts = parse_facts(facts_json)?;
    Ok(Catalog::build(shapes, facts))
}
