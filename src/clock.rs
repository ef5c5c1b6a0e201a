//! Clock sources for ID generation
//!
//! The generator reads time through [`Clock`] so tests can script it.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of wall-clock time in milliseconds since the Unix epoch.
///
/// Any `Fn() -> i64` closure is a clock:
///
/// ```
/// use dcflake::{IdGenerator, GeneratorConfig, layout::EPOCH_MILLIS};
///
/// let generator = IdGenerator::with_clock(GeneratorConfig::default(), || EPOCH_MILLIS + 42).unwrap();
/// let id = generator.next_id().unwrap();
/// assert_eq!(dcflake::parse_timestamp_offset(id), 42);
/// ```
pub trait Clock {
    fn current_millis(&self) -> i64;
}

/// Reads [`SystemTime::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as i64,
            // Clock set before 1970
            Err(e) => -(e.duration().as_millis() as i64),
        }
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64,
{
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        self()
    }
}
