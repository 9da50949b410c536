// src/infrastructure/repositories/postgres_slug_index.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::entity::{NewSlugClaim, SlugClaim};
use crate::domain::slug::repository::SlugUniquenessIndex;
use crate::domain::slug::value_objects::{OwnerId, Scope, Slug};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// Uniqueness index on the `slug_claims` table. Claim atomicity comes from
/// the `slug_claims_scope_slug_key` unique constraint; a racing insert
/// loses with a conflict rather than overwriting.
#[derive(Clone)]
pub struct PostgresSlugIndex {
    pool: PgPool,
}

impl PostgresSlugIndex {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SlugClaimRow {
    scope: String,
    slug: String,
    owner_id: i64,
    claimed_at: DateTime<Utc>,
}

impl TryFrom<SlugClaimRow> for SlugClaim {
    type Error = DomainError;

    fn try_from(row: SlugClaimRow) -> Result<Self, Self::Error> {
        Ok(SlugClaim {
            scope: Scope::new(row.scope)?,
            slug: Slug::new(row.slug)?,
            owner: OwnerId::new(row.owner_id)?,
            claimed_at: row.claimed_at,
        })
    }
}

#[async_trait]
impl SlugUniquenessIndex for PostgresSlugIndex {
    async fn claim(&self, claim: NewSlugClaim) -> DomainResult<SlugClaim> {
        let NewSlugClaim {
            scope,
            slug,
            owner,
            claimed_at,
        } = claim;

        let row = sqlx::query_as::<_, SlugClaimRow>(
            "INSERT INTO slug_claims (scope, slug, owner_id, claimed_at)
             VALUES ($1, $2, $3, $4)
             RETURNING scope, slug, owner_id, claimed_at",
        )
        .bind(scope.as_str())
        .bind(slug.as_str())
        .bind(i64::from(owner))
        .bind(claimed_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        SlugClaim::try_from(row)
    }

    async fn find(&self, scope: &Scope, slug: &Slug) -> DomainResult<Option<SlugClaim>> {
        let row = sqlx::query_as::<_, SlugClaimRow>(
            "SELECT scope, slug, owner_id, claimed_at
             FROM slug_claims
             WHERE scope = $1 AND slug = $2",
        )
        .bind(scope.as_str())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(SlugClaim::try_from).transpose()
    }

    async fn release(&self, scope: &Scope, slug: &Slug) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM slug_claims WHERE scope = $1 AND slug = $2")
            .bind(scope.as_str())
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
