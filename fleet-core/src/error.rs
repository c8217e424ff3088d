//! Error types and result definitions for reconciliation operations.
//!
//! Provides an error system with classification and captured diagnostic
//! metadata for pipeline operations. [`FleetError`] carries an [`ErrorKind`],
//! a static description, optional dynamic detail, and the callsite location
//! plus backtrace of where it was created.

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::error;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Convenient result type for reconciliation operations using [`FleetError`].
pub type FleetResult<T> = Result<T, FleetError>;

/// Detailed payload stored for [`FleetError`] instances.
#[derive(Debug, Clone)]
struct ErrorPayload {
    kind: ErrorKind,
    description: Cow<'static, str>,
    detail: Option<Cow<'static, str>>,
    source: Option<Arc<dyn error::Error + Send + Sync>>,
    location: &'static Location<'static>,
    backtrace: Arc<Backtrace>,
}

/// Main error type for reconciliation operations.
#[derive(Debug, Clone)]
pub struct FleetError {
    payload: ErrorPayload,
}

/// Specific categories of errors that can occur during a reconciliation run.
///
/// Error kinds are organized by functional area and failure mode so callers
/// can choose an appropriate handling strategy.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // Collaborator Errors
    SourceError,
    SnapshotStoreIo,
    DestinationIo,

    // Data & Transformation Errors
    InvalidData,
    ConversionError,

    // IO & Serialization Errors
    IoError,
    SerializationError,

    // Configuration Errors
    ConfigError,

    // Unknown / Uncategorized
    Unknown,
}

impl FleetError {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        self.payload.kind
    }

    /// Returns the detailed error information if available.
    pub fn detail(&self) -> Option<&str> {
        self.payload.detail.as_deref()
    }

    /// Returns the captured backtrace for this error.
    pub fn backtrace(&self) -> &Backtrace {
        self.payload.backtrace.as_ref()
    }

    /// Returns the captured callsite location for this error.
    pub fn location(&self) -> &'static Location<'static> {
        self.payload.location
    }

    /// Attaches an originating [`error::Error`] to this error and returns the
    /// modified instance.
    ///
    /// The stored source is preserved across clones and exposed via
    /// [`error::Error::source`].
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        self.payload.source = Some(Arc::new(source));
        self
    }

    /// Creates a [`FleetError`] from its components.
    #[track_caller]
    fn from_components(
        kind: ErrorKind,
        description: Cow<'static, str>,
        detail: Option<Cow<'static, str>>,
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    ) -> Self {
        FleetError {
            payload: ErrorPayload {
                kind,
                description,
                detail,
                source,
                location: Location::caller(),
                backtrace: Arc::new(Backtrace::capture()),
            },
        }
    }
}

impl PartialEq for FleetError {
    fn eq(&self, other: &FleetError) -> bool {
        self.payload.kind == other.payload.kind
    }
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let location = self.payload.location;
        write!(
            f,
            "[{:?}] {} @ {}:{}:{}",
            self.payload.kind,
            self.payload.description,
            location.file(),
            location.line(),
            location.column()
        )?;

        if let Some(detail) = self.payload.detail.as_deref() {
            write!(f, "\n  Detail: {detail}")?;
        }

        Ok(())
    }
}

impl error::Error for FleetError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.payload
            .source
            .as_ref()
            .map(|source| source as &(dyn error::Error + 'static))
    }
}

/// Creates a [`FleetError`] from an error kind and static description.
impl From<(ErrorKind, &'static str)> for FleetError {
    #[track_caller]
    fn from((kind, desc): (ErrorKind, &'static str)) -> FleetError {
        FleetError::from_components(kind, Cow::Borrowed(desc), None, None)
    }
}

/// Creates a [`FleetError`] from an error kind, static description, and dynamic detail.
impl<D> From<(ErrorKind, &'static str, D)> for FleetError
where
    D: Into<Cow<'static, str>>,
{
    #[track_caller]
    fn from((kind, desc, detail): (ErrorKind, &'static str, D)) -> FleetError {
        FleetError::from_components(kind, Cow::Borrowed(desc), Some(detail.into()), None)
    }
}

/// Converts [`std::io::Error`] to [`FleetError`] with [`ErrorKind::IoError`].
impl From<std::io::Error> for FleetError {
    #[track_caller]
    fn from(err: std::io::Error) -> FleetError {
        let detail = err.to_string();
        let source = Arc::new(err);
        FleetError::from_components(
            ErrorKind::IoError,
            Cow::Borrowed("I/O operation failed"),
            Some(Cow::Owned(detail)),
            Some(source),
        )
    }
}

/// Converts [`serde_json::Error`] to [`FleetError`] with the appropriate error kind.
///
/// Maps to [`ErrorKind::IoError`] for I/O failures and
/// [`ErrorKind::SerializationError`] otherwise.
impl From<serde_json::Error> for FleetError {
    #[track_caller]
    fn from(err: serde_json::Error) -> FleetError {
        let (kind, description) = match err.classify() {
            serde_json::error::Category::Io => (ErrorKind::IoError, "JSON I/O operation failed"),
            _ => (ErrorKind::SerializationError, "JSON serialization failed"),
        };

        let detail = err.to_string();
        let source = Arc::new(err);
        FleetError::from_components(
            kind,
            Cow::Borrowed(description),
            Some(Cow::Owned(detail)),
            Some(source),
        )
    }
}

/// Converts [`std::num::ParseIntError`] to [`FleetError`] with [`ErrorKind::ConversionError`].
impl From<std::num::ParseIntError> for FleetError {
    #[track_caller]
    fn from(err: std::num::ParseIntError) -> FleetError {
        let detail = err.to_string();
        let source = Arc::new(err);
        FleetError::from_components(
            ErrorKind::ConversionError,
            Cow::Borrowed("Integer parsing failed"),
            Some(Cow::Owned(detail)),
            Some(source),
        )
    }
}

/// Converts [`chrono::ParseError`] to [`FleetError`] with [`ErrorKind::ConversionError`].
impl From<chrono::ParseError> for FleetError {
    #[track_caller]
    fn from(err: chrono::ParseError) -> FleetError {
        let detail = err.to_string();
        let source = Arc::new(err);
        FleetError::from_components(
            ErrorKind::ConversionError,
            Cow::Borrowed("Date parsing failed"),
            Some(Cow::Owned(detail)),
            Some(source),
        )
    }
}
