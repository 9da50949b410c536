// src/application/ports/mod.rs
pub mod time;

use crate::domain::slug::repository::SlugUniquenessIndex;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type SlugIndexPort = dyn SlugUniquenessIndex;
