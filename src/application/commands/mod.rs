pub mod slugs;

pub use slugs::{
    ReleaseSlugCommand, RenameSlugCommand, ReserveSlugCommand, SlugCommandService,
};
