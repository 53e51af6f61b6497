//! System clock adapter

use chrono::{DateTime, Utc};
use worktrack_core::reminders::ports::Clock;

/// Production `Clock` backed by the system time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
