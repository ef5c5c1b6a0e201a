//! Decoding IDs back into their fields
//!
//! These are pure bit operations over [`crate::layout`]. They never validate
//! the input: a value that was not produced by an [`IdGenerator`](crate::IdGenerator)
//! decodes to whatever its bits say.

use chrono::{DateTime, Utc};

use crate::layout::{
    DATA_CENTER_SHIFT, EPOCH_MILLIS, MACHINE_SHIFT, MAX_DATA_CENTER_ID, MAX_MACHINE_ID,
    MAX_SEQUENCE, MAX_TIMESTAMP_OFFSET, TIMESTAMP_SHIFT,
};

/// Extract the data center ID
#[inline(always)]
pub const fn parse_data_center(id: i64) -> i64 {
    (id >> DATA_CENTER_SHIFT) & MAX_DATA_CENTER_ID
}

/// Extract the machine ID
#[inline(always)]
pub const fn parse_machine_id(id: i64) -> i64 {
    (id >> MACHINE_SHIFT) & MAX_MACHINE_ID
}

/// Extract the milliseconds since [`EPOCH_MILLIS`]. Add the epoch to get
/// Unix milliseconds, or use [`IdParts::timestamp_millis`].
#[inline(always)]
pub const fn parse_timestamp_offset(id: i64) -> i64 {
    (id >> TIMESTAMP_SHIFT) & MAX_TIMESTAMP_OFFSET
}

/// Extract the per-millisecond sequence
#[inline(always)]
pub const fn parse_sequence(id: i64) -> i64 {
    id & MAX_SEQUENCE
}

/// All fields of a decoded ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdParts {
    pub timestamp_offset: i64,
    pub data_center_id: i64,
    pub machine_id: i64,
    pub sequence: i64,
}

impl IdParts {
    /// Unix milliseconds at which the ID was generated
    #[inline]
    pub const fn timestamp_millis(&self) -> i64 {
        self.timestamp_offset + EPOCH_MILLIS
    }

    /// Generation time as a UTC datetime
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp_millis())
    }
}

/// Decompose an ID into its components in a single pass
#[inline]
pub const fn decompose(id: i64) -> IdParts {
    IdParts {
        timestamp_offset: parse_timestamp_offset(id),
        data_center_id: parse_data_center(id),
        machine_id: parse_machine_id(id),
        sequence: parse_sequence(id),
    }
}
