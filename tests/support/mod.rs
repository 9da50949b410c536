use chrono::{DateTime, TimeZone, Utc};
use slugkit::application::ports::time::Clock;

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn default_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    pub fn new() -> Self {
        Self(Self::default_instant())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
