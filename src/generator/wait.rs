//! Wait strategy for sequence exhaustion
//!
//! Busy-waits on the clock until the next millisecond. The caller keeps the
//! generator lock for the whole wait, so no other caller can observe the
//! exhausted millisecond in the meantime.

use std::thread;

/// Read `get_time` until it returns a value strictly greater than
/// `from_timestamp`, and return that value.
///
/// Yields the thread every `yield_every` reads; 0 never yields. There is no
/// timeout: a clock that never advances spins forever.
#[inline]
pub fn spin_until_after<F>(from_timestamp: i64, yield_every: u32, get_time: F) -> i64
where
    F: Fn() -> i64,
{
    let mut reads: u32 = 0;
    loop {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return new_ts;
        }

        reads = reads.wrapping_add(1);
        if yield_every != 0 && reads % yield_every == 0 {
            thread::yield_now();
        } else {
            std::hint::spin_loop();
        }
    }
}
