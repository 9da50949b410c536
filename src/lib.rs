//! Deterministic slug derivation and scope-unique reservation.
//!
//! [`normalize`] turns free-form titles into URL-safe slugs; the domain
//! reservation service hands out collision-free variants of them within a
//! named scope, backed by a pluggable uniqueness index (in-memory or
//! Postgres).

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use domain::slug::normalize::normalize;
pub use domain::slug::value_objects::{OwnerId, Scope, Slug, SlugSource};
