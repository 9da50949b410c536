pub mod entity;
pub mod normalize;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewSlugClaim, SlugClaim};
pub use normalize::normalize;
pub use repository::SlugUniquenessIndex;
pub use services::{ReservationPolicy, SlugReservationService};
pub use value_objects::{OwnerId, Scope, Slug, SlugSource};
