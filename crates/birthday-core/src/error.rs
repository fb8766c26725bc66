//! Error types for birthday-core operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BirthdayError {
    #[error("Invalid group size: {0} (must be 1..=100)")]
    InvalidGroupSize(u32),

    #[error("Invalid day-of-year ordinal: {0} (must be 1..=365)")]
    InvalidDayOfYear(u16),
}

pub type Result<T> = std::result::Result<T, BirthdayError>;
