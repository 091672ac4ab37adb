use serde::{Deserialize, Serialize};

/// Unified error type for all student backend operations.
///
/// Each variant includes a `backend` field identifying which dialect produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// None of these errors is fatal: every failure path returns control to the
/// caller for another attempt. There is no automatic retry; a transport
/// failure is surfaced and the user retries manually.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum BackendError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, response body could not be read, etc.).
    NetworkError {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The requested student record was not found (HTTP 404).
    NotFound {
        /// Backend that produced the error.
        backend: String,
        /// ID of the record that was not found.
        id: i64,
        /// Original error message from the backend, if available.
        raw_message: Option<String>,
    },

    /// The backend rejected the request (non-2xx status other than 404).
    ///
    /// When the response body carried a structured `{ "error": "..." }`
    /// payload, `message` holds it and is surfaced to the user verbatim.
    /// `None` means the body was not parseable and a generic fallback is
    /// shown instead.
    Rejected {
        /// Backend that produced the error.
        backend: String,
        /// Parsed server-side error message, if the body was structured.
        message: Option<String>,
    },

    /// Failed to parse a successful response body.
    ParseError {
        /// Backend that produced the error.
        backend: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl BackendError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Rejected { .. })
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { backend, detail } => {
                write!(f, "[{backend}] Network error: {detail}")
            }
            Self::NotFound {
                backend,
                id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{backend}] Student '{id}' not found: {msg}")
                } else {
                    write!(f, "[{backend}] Student '{id}' not found")
                }
            }
            Self::Rejected { message, .. } => match message {
                Some(msg) => write!(f, "{msg}"),
                None => write!(f, "Please check the data."),
            },
            Self::ParseError { backend, detail } => {
                write!(f, "[{backend}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for BackendError {}

/// Convenience type alias for `Result<T, BackendError>`.
pub type Result<T> = std::result::Result<T, BackendError>;
