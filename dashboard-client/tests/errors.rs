use dashboard_client::{FetchError, HttpPatientSource};
use dashboard_core::{DashboardConfig, DashboardError};

fn status(code: u16) -> FetchError {
    FetchError::Status {
        status: code,
        reason: String::new(),
    }
}

#[test]
fn status_codes_map_to_user_messages() {
    assert_eq!(status(401).user_message(), "Unauthorized. Please login again.");
    assert_eq!(status(404).user_message(), "Resource not found.");
    assert_eq!(
        status(429).user_message(),
        "Too many requests. Please try again later."
    );
    assert_eq!(status(503).user_message(), "Server error. Please try again later.");
    assert_eq!(
        status(418).user_message(),
        "An unexpected error occurred. Please try again."
    );
}

#[test]
fn retry_follows_configured_statuses() {
    let retryable = DashboardConfig::default().retryable_statuses;
    assert!(status(503).is_retryable(&retryable));
    assert!(status(429).is_retryable(&retryable));
    assert!(!status(404).is_retryable(&retryable));
    assert!(!status(401).is_retryable(&retryable));
    assert!(!FetchError::Config(DashboardError::MissingData).is_retryable(&retryable));
}

#[test]
fn decode_errors_are_final() {
    let err: FetchError = serde_json::from_str::<serde_json::Value>("{oops")
        .unwrap_err()
        .into();
    assert!(!err.is_retryable(&[500]));
    assert_eq!(
        err.user_message(),
        "An unexpected error occurred. Please try again."
    );
}

#[test]
fn source_rejects_invalid_base_url() {
    let config = DashboardConfig {
        api_base_url: "ftp://example.com".to_string(),
        ..DashboardConfig::default()
    };
    assert!(matches!(
        HttpPatientSource::new(config),
        Err(FetchError::Config(DashboardError::Config(_)))
    ));
}

#[test]
fn zero_timeout_is_a_config_error() {
    let config = DashboardConfig {
        request_timeout_secs: 0,
        ..DashboardConfig::default()
    };
    match HttpPatientSource::new(config) {
        Err(FetchError::Config(DashboardError::Config(message))) => {
            assert!(message.contains("request_timeout_secs"));
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn source_accepts_default_config() {
    let source = HttpPatientSource::new(DashboardConfig::default()).unwrap();
    assert!(source.config().patients_url().ends_with("/patients"));
}
