// src/application/dto/mod.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::slug::entity::SlugClaim;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugClaimDto {
    pub scope: String,
    pub slug: String,
    pub owner_id: i64,
    pub claimed_at: DateTime<Utc>,
}

impl From<SlugClaim> for SlugClaimDto {
    fn from(claim: SlugClaim) -> Self {
        Self {
            scope: claim.scope.into_inner(),
            slug: claim.slug.into_inner(),
            owner_id: claim.owner.into(),
            claimed_at: claim.claimed_at,
        }
    }
}
