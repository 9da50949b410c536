// src/domain/slug/entity.rs
use chrono::{DateTime, Utc};

use crate::domain::slug::value_objects::{OwnerId, Scope, Slug};

/// A slug held by an entity within a scope, as recorded by the uniqueness
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugClaim {
    pub scope: Scope,
    pub slug: Slug,
    pub owner: OwnerId,
    pub claimed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSlugClaim {
    pub scope: Scope,
    pub slug: Slug,
    pub owner: OwnerId,
    pub claimed_at: DateTime<Utc>,
}
