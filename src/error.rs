use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    /// Any failed call against the support API: non-2xx status, transport
    /// failure, or an undecodable response body.
    #[error("{0}")]
    RequestFailed(String),

    #[error("invalid filter '{0}', expected one of: all, urgent, pending, resolved")]
    InvalidFilter(String),

    #[error("invalid status '{0}', expected one of: Pending, Resolved")]
    InvalidStatus(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl DashError {
    /// True for errors produced by the data-access layer.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, DashError::RequestFailed(_))
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
