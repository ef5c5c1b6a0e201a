//! Bit layout shared by encoding and decoding
//!
//! From most to least significant bit:
//!
//! ```text
//! | sign (1) | timestamp offset (41) | data center (5) | machine (5) | sequence (12) |
//! ```
//!
//! Any service that decodes these IDs must agree on every constant here.

/// Reserved sign bit, always 0
pub const SIGN_BITS: u32 = 1;
/// Milliseconds since [`EPOCH_MILLIS`]; about 69 years of range
pub const TIMESTAMP_BITS: u32 = 41;
pub const DATA_CENTER_BITS: u32 = 5;
pub const MACHINE_BITS: u32 = 5;
/// IDs per millisecond per instance: 2^12 = 4096
pub const SEQUENCE_BITS: u32 = 12;

const _: () = assert!(
    SIGN_BITS + TIMESTAMP_BITS + DATA_CENTER_BITS + MACHINE_BITS + SEQUENCE_BITS == 64,
    "bit widths must add up to 64"
);

/// Custom epoch, 2016-11-26T13:21:05.631Z, in Unix milliseconds
pub const EPOCH_MILLIS: i64 = 1_480_166_465_631;

pub const MAX_SEQUENCE: i64 = mask(SEQUENCE_BITS);
pub const MAX_MACHINE_ID: i64 = mask(MACHINE_BITS);
pub const MAX_DATA_CENTER_ID: i64 = mask(DATA_CENTER_BITS);
pub const MAX_TIMESTAMP_OFFSET: i64 = mask(TIMESTAMP_BITS);

pub const MACHINE_SHIFT: u32 = SEQUENCE_BITS;
pub const DATA_CENTER_SHIFT: u32 = MACHINE_SHIFT + MACHINE_BITS;
pub const TIMESTAMP_SHIFT: u32 = DATA_CENTER_SHIFT + DATA_CENTER_BITS;

/// Calculate mask for given number of bits
#[inline(always)]
const fn mask(bits: u32) -> i64 {
    (1i64 << bits) - 1
}

/// Pack the four fields into an ID.
///
/// Each field is masked to its width first, so the result is never negative.
#[inline(always)]
pub const fn compose(timestamp_offset: i64, data_center_id: i64, machine_id: i64, sequence: i64) -> i64 {
    ((timestamp_offset & MAX_TIMESTAMP_OFFSET) << TIMESTAMP_SHIFT)
        | ((data_center_id & MAX_DATA_CENTER_ID) << DATA_CENTER_SHIFT)
        | ((machine_id & MAX_MACHINE_ID) << MACHINE_SHIFT)
        | (sequence & MAX_SEQUENCE)
}
