use chrono::{Local, NaiveDateTime};

use crate::application::ports::clock::Clock;

/// The host's local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
