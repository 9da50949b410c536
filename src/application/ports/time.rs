// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Time source injected into reservation so claims carry a testable
/// timestamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
