// src/application/queries/slugs.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::SlugClaimDto,
        error::{ApplicationError, ApplicationResult},
        ports::SlugIndexPort,
    },
    domain::slug::value_objects::{Scope, Slug},
};

pub struct ResolveSlugQuery {
    pub scope: String,
    pub slug: String,
}

/// Lookup half of the uniqueness index: resolve a scope+slug pair to the
/// claim that owns it.
pub struct SlugQueryService {
    index: Arc<SlugIndexPort>,
}

impl SlugQueryService {
    pub fn new(index: Arc<SlugIndexPort>) -> Self {
        Self { index }
    }

    pub async fn resolve(&self, query: ResolveSlugQuery) -> ApplicationResult<SlugClaimDto> {
        let scope = Scope::new(query.scope)?;
        let slug = Slug::new(query.slug)?;

        self.index
            .find(&scope, &slug)
            .await?
            .map(SlugClaimDto::from)
            .ok_or_else(|| {
                ApplicationError::not_found(format!("no claim for {slug:?} in scope {scope:?}"))
            })
    }
}
