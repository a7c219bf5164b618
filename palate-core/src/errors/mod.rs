//! Error taxonomy for the Palate workspace.
//!
//! Catalog misses are recovered locally by the engine; storage failures are
//! the only class expected to reach the controller. Empty pools are signaled
//! with `Ok(None)` / empty vecs, never an error.

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum PalateError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("storage failure: {reason}")]
    Storage { reason: String },

    #[error("invalid catalog data: {reason}")]
    InvalidData { reason: String },
}

impl PalateError {
    /// True when this error is a catalog lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PalateError::NotFound { .. })
    }
}

/// Workspace-wide result alias.
pub type PalateResult<T> = Result<T, PalateError>;
