//! Error taxonomy for the backend adapter.
//!
//! Provider responses carry a code (`42P01`, `PGRST205`, ...) and an HTTP
//! status. They are classified here, once, into a closed enum; downstream
//! logic branches on variants only.

use thiserror::Error;

/// Errors produced by the backend adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BackendError {
    /// Startup configuration is absent or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The queried table does not exist. Treated as optional-feature
    /// absence, never fatal.
    #[error("table {table} does not exist")]
    MissingTable { table: String },

    /// The query referenced a column the table does not have.
    #[error("unknown column in query against {table}")]
    UnknownColumn { table: String },

    /// The request was rejected by an access policy or failed server-side.
    #[error("access denied for {table} (HTTP {status})")]
    AccessDenied { table: String, status: u16 },

    /// The operation did not settle within its deadline.
    #[error("{operation} timed out after {seconds} seconds")]
    Timeout { operation: String, seconds: u64 },

    /// The endpoint could not be reached at all.
    #[error("network error: {0}")]
    Network(String),

    /// The identity service rejected the credentials or the request.
    #[error("{0}")]
    Auth(String),

    /// Any other provider-reported failure, message passed through verbatim.
    #[error("{message}")]
    Provider { code: String, message: String },
}

/// Provider code for an undefined table (Postgres).
const CODE_UNDEFINED_TABLE: &str = "42P01";
/// Provider code for a table absent from the API schema cache (PostgREST).
const CODE_SCHEMA_CACHE_MISS: &str = "PGRST205";
/// Provider code for an undefined column (Postgres).
const CODE_UNDEFINED_COLUMN: &str = "42703";

impl BackendError {
    /// Classify a provider error body against its HTTP status.
    ///
    /// This is the only place that looks at raw provider fields.
    #[must_use]
    pub fn classify_table_error(table: &str, status: u16, code: &str, message: &str) -> Self {
        if status == 404 || code == CODE_UNDEFINED_TABLE || code == CODE_SCHEMA_CACHE_MISS {
            return Self::MissingTable {
                table: table.to_string(),
            };
        }
        if code == CODE_UNDEFINED_COLUMN {
            return Self::UnknownColumn {
                table: table.to_string(),
            };
        }
        if matches!(status, 401 | 403 | 500) {
            return Self::AccessDenied {
                table: table.to_string(),
                status,
            };
        }
        Self::Provider {
            code: code.to_string(),
            message: if message.is_empty() {
                format!("request against {table} failed with HTTP {status}")
            } else {
                message.to_string()
            },
        }
    }

    /// Whether the table should be treated as absent rather than broken.
    #[must_use]
    pub fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTable { .. })
    }

    /// HTTP status recorded for an access-policy rejection, if any.
    #[must_use]
    pub fn denied_status(&self) -> Option<u16> {
        match self {
            Self::AccessDenied { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;
