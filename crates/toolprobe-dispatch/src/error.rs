use http::StatusCode;
use thiserror::Error;

/// Errors that can occur during a dispatch
///
/// Nothing is retried or translated beyond this taxonomy; a failure on one
/// target has no effect on dispatches to other targets.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A credential or account identifier needed for this target is missing
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced a usable response (connection failure,
    /// unparseable body)
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("backend returned {status}: {body}")]
    Remote {
        /// HTTP status code from the backend
        status: u16,
        /// Raw error body from the backend
        body: String,
    },
}

impl DispatchError {
    /// HTTP status code the triggering layer should answer with
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Transport(_) | Self::Remote { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// Machine-readable error type (e.g. `configuration_error`)
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration_error",
            Self::Transport(_) => "transport_error",
            Self::Remote { .. } => "remote_error",
        }
    }
}
