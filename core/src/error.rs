use thiserror::Error;

/// A raw dataset could not be decoded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported shape document: {0}")]
    UnsupportedShapes(String),

    #[error("topology has no object named {0:?}")]
    MissingObject(String),

    #[error("arc index {0} out of range")]
    BadArc(i64),

    #[error("facts payload is not an array")]
    FactsNotArray,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("target {0:?} is not in the playable catalog")]
    UnknownTarget(String),
}
