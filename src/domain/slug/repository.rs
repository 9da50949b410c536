// src/domain/slug/repository.rs
use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::slug::entity::{NewSlugClaim, SlugClaim};
use crate::domain::slug::value_objects::{Scope, Slug};

/// Storage boundary mapping scope+slug pairs to their owning entities.
///
/// Implementations must make `claim` atomic: a pair that is already taken
/// surfaces as `DomainError::Conflict`, never as a silent overwrite, even
/// under concurrent inserts.
#[async_trait]
pub trait SlugUniquenessIndex: Send + Sync {
    async fn claim(&self, claim: NewSlugClaim) -> DomainResult<SlugClaim>;

    async fn find(&self, scope: &Scope, slug: &Slug) -> DomainResult<Option<SlugClaim>>;

    /// Remove a claim, returning whether one existed.
    async fn release(&self, scope: &Scope, slug: &Slug) -> DomainResult<bool>;
}
