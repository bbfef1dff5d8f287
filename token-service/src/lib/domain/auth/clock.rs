use chrono::DateTime;
use chrono::Utc;

/// Source of the current time.
///
/// Rotation and expiry decisions read the clock through this trait so
/// they stay deterministic under test.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
