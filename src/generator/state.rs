//! Mutable generation state, only touched under the generator's lock

use crate::layout::MAX_SEQUENCE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State {
    last_timestamp: i64,
    sequence: i64,
}

impl State {
    /// `last_timestamp` before the first ID is issued
    pub(crate) const UNSET: i64 = -1;

    pub(crate) const fn new() -> Self {
        Self {
            last_timestamp: Self::UNSET,
            sequence: 0,
        }
    }

    #[inline(always)]
    pub(crate) const fn last_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    #[inline(always)]
    pub(crate) const fn sequence(&self) -> i64 {
        self.sequence
    }

    /// Bump the sequence within the current millisecond.
    ///
    /// Returns `false` when it wrapped to 0, i.e. the millisecond is used up.
    #[inline(always)]
    pub(crate) fn increment_sequence(&mut self) -> bool {
        self.sequence = (self.sequence + 1) & MAX_SEQUENCE;
        self.sequence != 0
    }

    #[inline(always)]
    pub(crate) fn reset_sequence(&mut self) {
        self.sequence = 0;
    }

    #[inline(always)]
    pub(crate) fn set_last_timestamp(&mut self, timestamp: i64) {
        self.last_timestamp = timestamp;
    }
}
