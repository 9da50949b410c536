// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::slugs::SlugCommandService,
        ports::{ClockPort, SlugIndexPort},
        queries::slugs::SlugQueryService,
    },
    domain::slug::services::{ReservationPolicy, SlugReservationService},
};

/// Wires the slug services against a uniqueness index and a clock.
pub struct ApplicationServices {
    pub slug_commands: Arc<SlugCommandService>,
    pub slug_queries: Arc<SlugQueryService>,
}

impl ApplicationServices {
    pub fn new(index: Arc<SlugIndexPort>, clock: Arc<ClockPort>) -> Self {
        Self::with_policy(index, clock, ReservationPolicy::default())
    }

    pub fn with_policy(
        index: Arc<SlugIndexPort>,
        clock: Arc<ClockPort>,
        policy: ReservationPolicy,
    ) -> Self {
        let reservations = Arc::new(
            SlugReservationService::new(Arc::clone(&index), clock).with_policy(policy),
        );

        let slug_commands = Arc::new(SlugCommandService::new(
            reservations,
            Arc::clone(&index),
        ));
        let slug_queries = Arc::new(SlugQueryService::new(index));

        Self {
            slug_commands,
            slug_queries,
        }
    }
}
