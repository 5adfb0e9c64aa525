use thiserror::Error;

/// Local input problems. These never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("name must be at most {max} characters (got {len})")]
    NameTooLong { max: usize, len: usize },
}

/// Failures of a single generate attempt. All three variants are terminal
/// for the submission; callers surface them and do not retry.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to reach sticker service: {0}")]
    Transport(String),
    #[error("sticker service returned status {status}")]
    Status { status: u16 },
    #[error("malformed combinations payload: {0}")]
    MalformedResponse(String),
}
