use dashboard_core::DashboardError;

/// Failure of a call against the patient API.
///
/// Every variant is routed to the same fallback path by [`crate::Dashboard`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] DashboardError),
}

impl FetchError {
    /// Message suitable for showing to the person using the dashboard.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Transport(err) if err.is_timeout() => "Request timeout. Please try again.",
            FetchError::Transport(err) if err.is_connect() => {
                "Network error. Please check your connection."
            }
            FetchError::Status { status, .. } => match status {
                400 => "Invalid data provided.",
                401 => "Unauthorized. Please login again.",
                403 => "You do not have permission to access this resource.",
                404 => "Resource not found.",
                408 => "Request timeout. Please try again.",
                429 => "Too many requests. Please try again later.",
                500 | 503 => "Server error. Please try again later.",
                _ => "An unexpected error occurred. Please try again.",
            },
            _ => "An unexpected error occurred. Please try again.",
        }
    }

    /// Whether another attempt may succeed.
    pub fn is_retryable(&self, retryable_statuses: &[u16]) -> bool {
        match self {
            FetchError::Transport(err) => err.is_timeout() || err.is_connect(),
            FetchError::Status { status, .. } => retryable_statuses.contains(status),
            FetchError::Decode(_) | FetchError::Config(_) => false,
        }
    }
}
