use thiserror::Error;

/// Internal invariant violations in the IR builder.
///
/// These are unreachable once the spec has passed validation; surfacing
/// them as a typed error keeps the builder free of aborts and gives
/// callers a defect report instead of a panic.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("array field '{0}' has no items; the spec was not validated")]
    MissingArrayItems(String),
}

/// Failures while rendering IR into a target output directory.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
