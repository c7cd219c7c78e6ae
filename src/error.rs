use std::fmt;

/// Failures reported by the CertCenter API layer.
///
/// Transport and JSON errors are passed through unchanged; these cover everything the API
/// signals through its HTTP response. All of them surface inside an [`eyre::Report`] and can be
/// recovered with [`eyre::Report::downcast_ref`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The response body exceeded the size limit.
    ResponseTooLarge { limit: usize },

    /// A 200 response had an empty body where a JSON document was expected.
    EmptyResponse,

    /// HTTP 401: the bearer token is invalid or lacks the proper rights.
    Unauthorized,

    /// Any other unexpected HTTP status.
    Status(u16),
}

impl ApiError {
    /// HTTP status code behind the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ResponseTooLarge { limit } => {
                write!(f, "CertCenter API: response body exceeds {limit} bytes")
            }
            ApiError::EmptyResponse => write!(f, "CertCenter API: response body is empty"),
            ApiError::Unauthorized => write!(
                f,
                "CertCenter API: authorization failed, the bearer token is invalid or does not have the proper rights"
            ),
            ApiError::Status(status) => write!(f, "CertCenter API: returned with status {status}"),
        }
    }
}

impl std::error::Error for ApiError {}
