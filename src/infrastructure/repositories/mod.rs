// src/infrastructure/repositories/mod.rs
mod memory_slug_index;
mod postgres_slug_index;

pub use memory_slug_index::InMemorySlugIndex;
pub use postgres_slug_index::PostgresSlugIndex;

use crate::domain::errors::DomainError;

const CNT_SLUG_CLAIM: &str = "slug_claims_scope_slug_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_SLUG_CLAIM => DomainError::Conflict("slug already claimed".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                if code.as_ref() == "23505" {
                    return DomainError::Conflict("unique constraint violated".into());
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
