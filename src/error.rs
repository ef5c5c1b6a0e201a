use thiserror::Error;

/// Errors raised when constructing an [`IdGenerator`](crate::IdGenerator)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Data center ID is negative or does not fit its bit width
    #[error("Data center ID {data_center_id} is invalid. Allowed range is 0..={max}")]
    InvalidDataCenterId { data_center_id: i64, max: i64 },
    /// Machine ID is negative or does not fit its bit width
    #[error("Machine ID {machine_id} is invalid. Allowed range is 0..={max}")]
    InvalidMachineId { machine_id: i64, max: i64 },
}

/// Errors raised by [`IdGenerator::next_id`](crate::IdGenerator::next_id)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The clock reads earlier than the last millisecond an ID was issued for
    #[error("Clock moved backwards. Refusing to generate id for {} milliseconds", .last_timestamp - .now)]
    MovedBackwards { last_timestamp: i64, now: i64 },
}

/// Any error this crate can return
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Clock(#[from] ClockError),
}
