// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The caller handed over no input at all. A programming error at the
    /// call site, never worth retrying.
    #[error("missing input: {0}")]
    MissingInput(&'static str),
    /// The input was present but left nothing usable after normalization.
    /// Carries the original text for user-facing validation messages.
    #[error("input has no slug material: {input:?}")]
    Unslugifiable { input: String },
    /// Uniqueness resolution ran out of attempts. Transient; the whole
    /// operation is safe to retry later.
    #[error("no free slug for {base:?} in scope {scope:?} after {attempts} attempts")]
    Exhausted {
        scope: String,
        base: String,
        attempts: u32,
    },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
