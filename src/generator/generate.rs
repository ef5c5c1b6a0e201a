//! ID generation logic

use std::cmp::Ordering;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::clock::Clock;
use crate::error::ClockError;

use super::IdGenerator;

impl<C: Clock> IdGenerator<C> {
    /// Generate the next ID.
    ///
    /// Reading the clock, choosing the sequence and updating state all
    /// happen under one lock. If the 4096 sequence values of the current
    /// millisecond are used up, spins (still holding the lock) until the
    /// clock moves on.
    ///
    /// # Errors
    /// Returns [`ClockError::MovedBackwards`] if the clock reads earlier than
    /// the last issued millisecond. Nothing is retried; generation resumes
    /// once the clock catches up.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> Result<i64, ClockError> {
        let mut state = self.state.lock();

        let mut now = self.now_ms();
        let last = state.last_timestamp();

        match now.cmp(&last) {
            Ordering::Less => return Err(Self::cold_clock_behind(last, now)),
            Ordering::Equal => {
                if !state.increment_sequence() {
                    now = self.cold_sequence_exhausted(last);
                }
            }
            Ordering::Greater => state.reset_sequence(),
        }

        state.set_last_timestamp(now);
        Ok(self.assemble_id(now, state.sequence()))
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(last_timestamp: i64, now: i64) -> ClockError {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            last_timestamp,
            now,
            behind_ms = last_timestamp - now,
            "clock moved backwards, refusing to generate id"
        );
        ClockError::MovedBackwards {
            last_timestamp,
            now,
        }
    }

    #[cold]
    #[inline(never)]
    fn cold_sequence_exhausted(&self, last_timestamp: i64) -> i64 {
        #[cfg(feature = "tracing")]
        tracing::debug!(last_timestamp, "sequence exhausted, waiting for next millisecond");
        self.wait_next_millis(last_timestamp)
    }
}
