// FirmLens - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal chain
// for diagnostic logging. Filtering and pagination are total functions and
// have no error path.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all FirmLens operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum FirmLensError {
    /// Directory fetch failed.
    Fetch(FetchError),

    /// Filter operation failed.
    Filter(FilterError),

    /// Export operation failed.
    Export(ExportError),
}

impl fmt::Display for FirmLensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "Fetch error: {e}"),
            Self::Filter(e) => write!(f, "Filter error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for FirmLensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Filter(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Fetch errors
// ---------------------------------------------------------------------------

/// Errors produced by the directory fetch.
///
/// Each variant's Display text is shown verbatim to the user in the
/// session Error state, so the messages name the endpoint and the cause.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure (connection refused, DNS, timeout, TLS).
    Transport {
        url: String,
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success HTTP status.
    Status { url: String, status: u16 },

    /// The response body is not a valid company list.
    Decode { source: serde_json::Error },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { url, source } => {
                write!(f, "Request to '{url}' failed: {source}")
            }
            Self::Status { url, status } => {
                write!(f, "'{url}' returned HTTP status {status}")
            }
            Self::Decode { source } => {
                write!(f, "Response is not a valid company list: {source}")
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport { source, .. } => Some(source),
            Self::Decode { source } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

impl From<FetchError> for FirmLensError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors related to filter operations.
#[derive(Debug)]
pub enum FilterError {
    /// User-provided regex is invalid.
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },

    /// User-provided regex exceeds the maximum allowed length.
    RegexTooLong { length: usize, max_length: usize },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegex { pattern, source } => {
                write!(f, "Invalid name regex '{pattern}': {source}")
            }
            Self::RegexTooLong { length, max_length } => {
                write!(
                    f,
                    "Name regex is {length} chars, exceeds maximum of {max_length}"
                )
            }
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRegex { source, .. } => Some(source),
            Self::RegexTooLong { .. } => None,
        }
    }
}

impl From<FilterError> for FirmLensError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Export would exceed maximum record count.
    TooManyRecords { count: usize, max: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
            Self::TooManyRecords { count, max } => write!(
                f,
                "Export of {count} records exceeds maximum of {max}. \
                 Apply filters to reduce the result set."
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::TooManyRecords { .. } => None,
        }
    }
}

impl From<ExportError> for FirmLensError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for FirmLens results.
pub type Result<T> = std::result::Result<T, FirmLensError>;
