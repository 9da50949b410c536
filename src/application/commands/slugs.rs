// src/application/commands/slugs.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::SlugClaimDto,
        error::{ApplicationError, ApplicationResult},
        ports::SlugIndexPort,
    },
    domain::slug::{
        normalize::normalize,
        services::SlugReservationService,
        value_objects::{OwnerId, Scope, Slug, SlugSource},
    },
};

pub struct ReserveSlugCommand {
    pub scope: String,
    /// Free-form text the slug is derived from; `None` is rejected as a
    /// caller bug.
    pub source: Option<String>,
    pub owner_id: i64,
}

pub struct RenameSlugCommand {
    pub scope: String,
    pub current_slug: String,
    pub source: Option<String>,
    pub owner_id: i64,
}

pub struct ReleaseSlugCommand {
    pub scope: String,
    pub slug: String,
}

pub struct SlugCommandService {
    reservations: Arc<SlugReservationService>,
    index: Arc<SlugIndexPort>,
}

impl SlugCommandService {
    pub fn new(reservations: Arc<SlugReservationService>, index: Arc<SlugIndexPort>) -> Self {
        Self {
            reservations,
            index,
        }
    }

    /// Derive a slug from the command's source text and claim a unique
    /// variant of it for the owner.
    pub async fn reserve_slug(
        &self,
        command: ReserveSlugCommand,
    ) -> ApplicationResult<SlugClaimDto> {
        let scope = Scope::new(command.scope)?;
        let owner = OwnerId::new(command.owner_id)?;
        let source = SlugSource::new(command.source)?;
        let base = normalize(&source)?;

        let claim = self.reservations.reserve(&scope, &base, owner).await?;
        Ok(claim.into())
    }

    /// Re-derive an entity's slug from new text. The new slug is claimed
    /// before the old one is released, so the entity never goes without a
    /// claim; a rename to text that normalizes to the current slug is a
    /// no-op.
    pub async fn rename_slug(&self, command: RenameSlugCommand) -> ApplicationResult<SlugClaimDto> {
        let scope = Scope::new(command.scope)?;
        let owner = OwnerId::new(command.owner_id)?;
        let current = Slug::new(command.current_slug)?;
        let source = SlugSource::new(command.source)?;
        let base = normalize(&source)?;

        if let Some(existing) = self.index.find(&scope, &current).await? {
            if existing.owner != owner {
                return Err(ApplicationError::conflict(
                    "current slug is owned by another entity",
                ));
            }
        }

        let claim = self.reservations.reserve(&scope, &base, owner).await?;
        if claim.slug != current {
            self.index.release(&scope, &current).await?;
        }
        Ok(claim.into())
    }

    /// Free a claim, e.g. when the owning entity is deleted. Returns
    /// whether a claim existed.
    pub async fn release_slug(&self, command: ReleaseSlugCommand) -> ApplicationResult<bool> {
        let scope = Scope::new(command.scope)?;
        let slug = Slug::new(command.slug)?;
        Ok(self.index.release(&scope, &slug).await?)
    }
}
