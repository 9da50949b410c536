// src/infrastructure/repositories/memory_slug_index.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::entity::{NewSlugClaim, SlugClaim};
use crate::domain::slug::repository::SlugUniquenessIndex;
use crate::domain::slug::value_objects::{Scope, Slug};

/// In-process uniqueness index for embedding and tests. The whole map sits
/// behind one mutex, so check-and-insert is atomic.
#[derive(Default)]
pub struct InMemorySlugIndex {
    claims: Mutex<HashMap<(String, String), SlugClaim>>,
}

impl InMemorySlugIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

fn key(scope: &Scope, slug: &Slug) -> (String, String) {
    (scope.as_str().to_owned(), slug.as_str().to_owned())
}

#[async_trait]
impl SlugUniquenessIndex for InMemorySlugIndex {
    async fn claim(&self, claim: NewSlugClaim) -> DomainResult<SlugClaim> {
        let mut map = self
            .claims
            .lock()
            .map_err(|_| DomainError::Persistence("slug index mutex poisoned".into()))?;

        let key = key(&claim.scope, &claim.slug);
        if map.contains_key(&key) {
            return Err(DomainError::Conflict("slug already claimed".into()));
        }

        let stored = SlugClaim {
            scope: claim.scope,
            slug: claim.slug,
            owner: claim.owner,
            claimed_at: claim.claimed_at,
        };
        map.insert(key, stored.clone());
        Ok(stored)
    }

    async fn find(&self, scope: &Scope, slug: &Slug) -> DomainResult<Option<SlugClaim>> {
        let map = self
            .claims
            .lock()
            .map_err(|_| DomainError::Persistence("slug index mutex poisoned".into()))?;

        Ok(map.get(&key(scope, slug)).cloned())
    }

    async fn release(&self, scope: &Scope, slug: &Slug) -> DomainResult<bool> {
        let mut map = self
            .claims
            .lock()
            .map_err(|_| DomainError::Persistence("slug index mutex poisoned".into()))?;

        Ok(map.remove(&key(scope, slug)).is_some())
    }
}
