//! Conversions from external infrastructure errors into domain errors.

use ballkeeper_domain::BallkeeperError;
use reqwest::Error as HttpError;
use reqwest::StatusCode;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub BallkeeperError);

impl From<InfraError> for BallkeeperError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<BallkeeperError> for InfraError {
    fn from(value: BallkeeperError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoBallkeeperError {
    fn into_ballkeeper(self) -> BallkeeperError;
}

/// Classify a non-success HTTP status. `detail` is appended when non-empty,
/// typically the (truncated) response body.
pub fn status_error(status: StatusCode, detail: &str) -> BallkeeperError {
    let code = status.as_u16();
    let mut message =
        format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
    let detail = detail.trim();
    if !detail.is_empty() {
        let truncated: String = detail.chars().take(200).collect();
        message.push_str(": ");
        message.push_str(&truncated);
    }

    match code {
        401 | 403 => BallkeeperError::Auth(message),
        404 => BallkeeperError::NotFound(message),
        408 => BallkeeperError::Timeout(message),
        429 => BallkeeperError::Network(message),
        400..=499 => BallkeeperError::InvalidInput(message),
        _ => BallkeeperError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → BallkeeperError */
/* -------------------------------------------------------------------------- */

impl IntoBallkeeperError for HttpError {
    fn into_ballkeeper(self) -> BallkeeperError {
        if self.is_timeout() {
            return BallkeeperError::Timeout("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return BallkeeperError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return status_error(status, "");
        }

        if self.is_decode() {
            return BallkeeperError::Decode(format!("HTTP response body: {self}"));
        }

        if self.is_builder() {
            return BallkeeperError::Config(format!("invalid HTTP request: {self}"));
        }

        BallkeeperError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_ballkeeper())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → BallkeeperError */
/* -------------------------------------------------------------------------- */

impl IntoBallkeeperError for JsonError {
    fn into_ballkeeper(self) -> BallkeeperError {
        BallkeeperError::Decode(format!(
            "invalid JSON at line {} column {}: {}",
            self.line(),
            self.column(),
            self
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_ballkeeper())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → BallkeeperError */
/* -------------------------------------------------------------------------- */

impl From<url::ParseError> for InfraError {
    fn from(value: url::ParseError) -> Self {
        InfraError(BallkeeperError::Config(format!("invalid URL: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::Client;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn status_classification() {
        assert!(matches!(status_error(StatusCode::FORBIDDEN, ""), BallkeeperError::Auth(_)));
        assert!(matches!(status_error(StatusCode::NOT_FOUND, ""), BallkeeperError::NotFound(_)));
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, "itemId missing"),
            BallkeeperError::InvalidInput(msg) if msg.ends_with("itemId missing")
        ));
        assert!(status_error(StatusCode::TOO_MANY_REQUESTS, "").is_transient());
        assert!(status_error(StatusCode::BAD_GATEWAY, "").is_transient());
        assert!(status_error(StatusCode::REQUEST_TIMEOUT, "").is_transient());
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(1_000);
        let BallkeeperError::Network(msg) = status_error(StatusCode::INTERNAL_SERVER_ERROR, &body)
        else {
            panic!("expected network error");
        };
        assert!(msg.len() < 300);
    }

    #[test]
    fn json_errors_map_to_decode() {
        let err = serde_json::from_str::<Vec<i64>>("[1, 2").unwrap_err();
        let mapped: BallkeeperError = InfraError::from(err).into();
        assert!(matches!(mapped, BallkeeperError::Decode(_)));
    }

    #[tokio::test]
    async fn http_status_401_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: BallkeeperError = InfraError::from(error).into();
        match mapped {
            BallkeeperError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {:?}", other),
        }
    }
}
