use thiserror::Error;

/// Domain-specific errors for the optimizer.
///
/// `InfeasibleCalendar` and `UnderProctored` are not represented here: per the error taxonomy,
/// both are recovered locally (the day/slot assigner's fallback pass, the proctor assigner's
/// short-by warning) and only ever surface as counters in the run summary or validator output.
#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("database unavailable: {0}")]
    DataUnavailable(#[source] mysql::Error),

    #[error("{entity} '{id}' references unknown {reference}")]
    IntegrityViolation {
        entity: &'static str,
        id: String,
        reference: &'static str,
    },

    #[error("failed to persist schedule: {0}")]
    PersistenceFailure(#[source] mysql::Error),

    #[error("config file '{path}' is not valid TOML: {message}")]
    InvalidConfig { path: String, message: String },
}

/// Use anyhow::Result at application boundaries
pub type Result<T> = anyhow::Result<T>;
