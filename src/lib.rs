//! # dcflake
//!
//! Snowflake-style 64-bit ID generator keyed by data center and machine.
//!
//! ```text
//! | 0 | 41-bit ms since epoch | 5-bit data center | 5-bit machine | 12-bit sequence |
//! ```
//!
//! Generate 64-bit unique identifiers that are:
//! - 📈 Roughly time-sorted
//! - 🔒 Thread-safe (one lock per generator)
//! - 🌐 Coordinator-free across up to 1024 instances
//! - 🛑 Never issued when the clock runs backwards
//!
//! ```
//! use dcflake::{IdGenerator, decompose};
//!
//! let generator = IdGenerator::new(2, 3).unwrap();
//! let id = generator.next_id().unwrap();
//!
//! let parts = decompose(id);
//! assert_eq!(parts.data_center_id, 2);
//! assert_eq!(parts.machine_id, 3);
//! ```

#![forbid(unsafe_code)]

pub mod clock;
mod config;
mod error;
mod extractor;
mod generator;
pub mod layout;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use clock::{Clock, SystemClock};
pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use error::{ClockError, ConfigError, Error};
pub use extractor::{
    decompose, parse_data_center, parse_machine_id, parse_sequence, parse_timestamp_offset,
    IdParts,
};
pub use generator::IdGenerator;
