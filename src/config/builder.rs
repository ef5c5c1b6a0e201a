//! GeneratorConfig builder for constructing configuration

use super::GeneratorConfig;

/// Default configuration values
pub(super) const DEFAULT_DATA_CENTER_ID: i64 = 0;
pub(super) const DEFAULT_MACHINE_ID: i64 = 0;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 0;

/// Builder for GeneratorConfig
///
/// Setters never fail; out-of-range identities are rejected when the
/// generator is constructed.
#[derive(Debug)]
pub struct GeneratorConfigBuilder {
    pub(super) data_center_id: i64,
    pub(super) machine_id: i64,
    pub(super) spin_yield_every: u32,
}

impl GeneratorConfigBuilder {
    /// Create a new GeneratorConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            data_center_id: DEFAULT_DATA_CENTER_ID,
            machine_id: DEFAULT_MACHINE_ID,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set the data center ID (0-31)
    pub const fn data_center_id(mut self, id: i64) -> Self {
        self.data_center_id = id;
        self
    }

    /// Set the machine ID (0-31)
    pub const fn machine_id(mut self, id: i64) -> Self {
        self.machine_id = id;
        self
    }

    /// Set spin yield cadence while waiting for the next millisecond.
    /// Yield every N clock reads; 0 spins without yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final GeneratorConfig
    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig::from_builder(self)
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
