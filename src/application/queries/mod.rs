pub mod slugs;

pub use slugs::SlugQueryService;
