// src/domain/slug/services/mod.rs
use std::sync::Arc;

use tracing::debug;

use crate::application::ports::time::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::entity::{NewSlugClaim, SlugClaim};
use crate::domain::slug::repository::SlugUniquenessIndex;
use crate::domain::slug::value_objects::{OwnerId, Scope, Slug};

/// Bounds for uniqueness resolution. Each candidate probed or claimed
/// counts as one attempt.
#[derive(Debug, Clone, Copy)]
pub struct ReservationPolicy {
    pub max_attempts: u32,
}

impl Default for ReservationPolicy {
    fn default() -> Self {
        Self { max_attempts: 20 }
    }
}

/// Domain service producing scope-unique slugs backed by the uniqueness
/// index.
pub struct SlugReservationService {
    index: Arc<dyn SlugUniquenessIndex>,
    clock: Arc<dyn Clock>,
    policy: ReservationPolicy,
}

impl SlugReservationService {
    pub fn new(index: Arc<dyn SlugUniquenessIndex>, clock: Arc<dyn Clock>) -> Self {
        Self {
            index,
            clock,
            policy: ReservationPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ReservationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reserve a unique slug for `owner` in `scope`, starting from `base`.
    ///
    /// Candidates are tried as `base`, `base-2`, `base-3`, … (smallest
    /// unused suffix ≥ 2) and claimed optimistically: losing a race for a
    /// candidate comes back from the index as a conflict and counts as
    /// taken, moving on to the next suffix. A candidate already held by
    /// `owner` is returned as-is, which makes re-reservation and renames to
    /// the same text no-ops.
    pub async fn reserve(
        &self,
        scope: &Scope,
        base: &Slug,
        owner: OwnerId,
    ) -> DomainResult<SlugClaim> {
        let mut suffix: u32 = 1;
        let mut attempts: u32 = 0;

        while attempts < self.policy.max_attempts {
            let candidate = if suffix == 1 {
                base.clone()
            } else {
                Slug::new(format!("{}-{suffix}", base.as_str()))?
            };

            match self.index.find(scope, &candidate).await? {
                Some(existing) if existing.owner == owner => return Ok(existing),
                Some(_) => {
                    suffix += 1;
                    attempts += 1;
                    continue;
                }
                None => {}
            }

            let new_claim = NewSlugClaim {
                scope: scope.clone(),
                slug: candidate.clone(),
                owner,
                claimed_at: self.clock.now(),
            };

            match self.index.claim(new_claim).await {
                Ok(claim) => return Ok(claim),
                Err(DomainError::Conflict(_)) => {
                    debug!(scope = %scope, candidate = %candidate, "lost slug race, trying next suffix");
                    suffix += 1;
                    attempts += 1;
                }
                Err(err) => return Err(err),
            }
        }

        Err(DomainError::Exhausted {
            scope: scope.to_string(),
            base: base.to_string(),
            attempts: self.policy.max_attempts,
        })
    }
}
