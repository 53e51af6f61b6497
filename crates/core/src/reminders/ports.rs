//! Port interface for wall-clock time
//!
//! Date-proximity predicates are calendar-day exact, so tests need a
//! pinned clock to exercise them deterministically.

use chrono::{DateTime, NaiveDate, Utc};

/// Trait providing the current instant
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Current UTC calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
