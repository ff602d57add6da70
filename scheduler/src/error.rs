use thiserror::Error;

/// Precondition violations. Expected terminal conditions (no further
/// round possible) are plain return values, not errors.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
