//! Core IdGenerator implementation
//!
//! Split into modules for testability:
//! - `state` - Lock-guarded timestamp + sequence
//! - `wait` - Spin strategy for sequence exhaustion
//! - `generate` - ID generation logic

mod generate;
mod state;
mod wait;

use std::fmt;

use parking_lot::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::layout::{self, EPOCH_MILLIS};

use state::State;
use wait::spin_until_after;

/// Snowflake-style ID generator for one `(data center, machine)` identity.
///
/// All generation state sits behind a single mutex, so a generator can be
/// shared across threads (e.g. in an `Arc`) and [`next_id`](Self::next_id)
/// never hands out the same value twice. Each instance owns its own state;
/// there is no process-wide generator.
pub struct IdGenerator<C = SystemClock> {
    state: Mutex<State>,
    identity_prefix: i64,
    clock: C,
    config: GeneratorConfig,
}

impl IdGenerator<SystemClock> {
    /// Create a generator reading the system clock.
    ///
    /// Fails if either ID is negative or wider than its 5-bit field.
    pub fn new(data_center_id: i64, machine_id: i64) -> Result<Self, ConfigError> {
        Self::with_config(
            GeneratorConfig::builder()
                .data_center_id(data_center_id)
                .machine_id(machine_id)
                .build(),
        )
    }

    /// Create with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> IdGenerator<C> {
    /// Create with custom configuration and clock source
    pub fn with_clock(config: GeneratorConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            data_center_id = config.data_center_id(),
            machine_id = config.machine_id(),
            "created id generator"
        );

        Ok(Self {
            state: Mutex::new(State::new()),
            identity_prefix: layout::compose(0, config.data_center_id(), config.machine_id(), 0),
            clock,
            config,
        })
    }

    #[inline(always)]
    pub const fn data_center_id(&self) -> i64 {
        self.config.data_center_id()
    }

    #[inline(always)]
    pub const fn machine_id(&self) -> i64 {
        self.config.machine_id()
    }

    #[inline(always)]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[inline(always)]
    pub(crate) fn now_ms(&self) -> i64 {
        self.clock.current_millis()
    }

    /// Spin until the clock reads past `from_ts`. Called with the lock held.
    pub(crate) fn wait_next_millis(&self, from_ts: i64) -> i64 {
        spin_until_after(from_ts, self.config.spin_yield_every(), || self.now_ms())
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: i64, sequence: i64) -> i64 {
        layout::compose(timestamp - EPOCH_MILLIS, 0, 0, sequence) | self.identity_prefix
    }
}

impl<C> fmt::Debug for IdGenerator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
