use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Grammar shared by slugs and scope names: lowercase ASCII alphanumerics
/// separated by single hyphens, no hyphen at either edge.
fn is_slug_shaped(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_slug_shaped(&value) {
            return Err(DomainError::Validation(format!(
                "not a valid slug: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Namespace within which slug uniqueness is enforced, e.g. `articles` or
/// `community-profiles`. Scope names follow the slug grammar themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope(String);

impl Scope {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_slug_shaped(&value) {
            return Err(DomainError::Validation(format!(
                "not a valid scope: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Scope> for String {
    fn from(value: Scope) -> Self {
        value.0
    }
}

/// Free-form text a slug is derived from. Wraps the optional field handed
/// over at the DTO boundary; an absent value is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugSource(String);

impl SlugSource {
    pub fn new(value: Option<String>) -> DomainResult<Self> {
        match value {
            Some(text) => Ok(Self(text)),
            None => Err(DomainError::MissingInput("slug source")),
        }
    }

    pub fn from_text(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(pub i64);

impl OwnerId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("owner id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<OwnerId> for i64 {
    fn from(value: OwnerId) -> Self {
        value.0
    }
}
