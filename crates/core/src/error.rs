use crate::types::DbId;

/// Domain-level failure shared by every crate in the workspace.
///
/// The HTTP layer maps each variant onto a status code; nothing here knows
/// about HTTP.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Input rejected before touching the store (e.g. an empty stay).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request is well-formed but clashes with current state.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
