//! Configuration for IdGenerator

mod builder;

pub use builder::GeneratorConfigBuilder;
use builder::{DEFAULT_DATA_CENTER_ID, DEFAULT_MACHINE_ID, DEFAULT_SPIN_YIELD_EVERY};

use crate::error::ConfigError;
use crate::layout::{MAX_DATA_CENTER_ID, MAX_MACHINE_ID};

/// Configuration for IdGenerator
///
/// Holds the instance identity and the wait strategy used when a
/// millisecond's sequence space runs out. Bit widths and the epoch are
/// fixed in [`crate::layout`] and cannot be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    data_center_id: i64,
    machine_id: i64,
    spin_yield_every: u32,
}

impl GeneratorConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: GeneratorConfigBuilder) -> Self {
        Self {
            data_center_id: b.data_center_id,
            machine_id: b.machine_id,
            spin_yield_every: b.spin_yield_every,
        }
    }

    /// Create a new builder for GeneratorConfig
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Check the identity fields against their bit widths
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=MAX_DATA_CENTER_ID).contains(&self.data_center_id) {
            return Err(ConfigError::InvalidDataCenterId {
                data_center_id: self.data_center_id,
                max: MAX_DATA_CENTER_ID,
            });
        }
        if !(0..=MAX_MACHINE_ID).contains(&self.machine_id) {
            return Err(ConfigError::InvalidMachineId {
                machine_id: self.machine_id,
                max: MAX_MACHINE_ID,
            });
        }
        Ok(())
    }

    #[inline(always)]
    pub const fn data_center_id(&self) -> i64 {
        self.data_center_id
    }

    #[inline(always)]
    pub const fn machine_id(&self) -> i64 {
        self.machine_id
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            data_center_id: DEFAULT_DATA_CENTER_ID,
            machine_id: DEFAULT_MACHINE_ID,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }
}
