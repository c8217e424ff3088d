use std::error::Error;
use std::fmt;

use fleet_core::error::FleetError;

/// Result type for reconciler service operations.
pub type ReconcilerResult<T> = Result<T, ReconcilerError>;

/// Error type for the reconciler service.
///
/// Wraps [`FleetError`] for pipeline errors and provides variants for
/// infrastructure failures around it.
#[derive(Debug)]
pub enum ReconcilerError {
    /// Pipeline or reconciliation error.
    Fleet(FleetError),
    /// Configuration error.
    Config(Box<dyn Error + Send + Sync>),
    /// Invalid command-line argument.
    InvalidArgument(String),
    /// I/O error.
    Io(std::io::Error),
}

impl ReconcilerError {
    /// Returns a short category label for this error.
    pub fn category(&self) -> &'static str {
        match self {
            ReconcilerError::Fleet(_) => "reconciler error",
            ReconcilerError::Config(_) => "configuration error",
            ReconcilerError::InvalidArgument(_) => "invalid argument",
            ReconcilerError::Io(_) => "i/o error",
        }
    }

    /// Creates a configuration error from any boxed source.
    pub fn config<E: Error + Send + Sync + 'static>(err: E) -> Self {
        ReconcilerError::Config(Box::new(err))
    }
}

impl fmt::Display for ReconcilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcilerError::Fleet(err) => write!(f, "{err}"),
            ReconcilerError::Config(source) => write!(f, "configuration error: {source}"),
            ReconcilerError::InvalidArgument(detail) => write!(f, "invalid argument: {detail}"),
            ReconcilerError::Io(source) => write!(f, "i/o error: {source}"),
        }
    }
}

impl Error for ReconcilerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReconcilerError::Fleet(err) => err.source(),
            ReconcilerError::Config(source) => Some(source.as_ref()),
            ReconcilerError::InvalidArgument(_) => None,
            ReconcilerError::Io(source) => Some(source),
        }
    }
}

impl From<FleetError> for ReconcilerError {
    fn from(err: FleetError) -> Self {
        ReconcilerError::Fleet(err)
    }
}

impl From<std::io::Error> for ReconcilerError {
    fn from(err: std::io::Error) -> Self {
        ReconcilerError::Io(err)
    }
}
