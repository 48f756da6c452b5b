//! Conversions from external infrastructure errors into domain errors.

use petmatch_domain::PetMatchError;
use reqwest::{Error as HttpError, StatusCode};

/// Error newtype that keeps conversions on the infrastructure side and
/// converts into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PetMatchError);

impl From<InfraError> for PetMatchError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPetMatchError {
    fn into_petmatch(self) -> PetMatchError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PetMatchError */
/* -------------------------------------------------------------------------- */

impl IntoPetMatchError for HttpError {
    fn into_petmatch(self) -> PetMatchError {
        if self.is_timeout() {
            return PetMatchError::Upstream("HTTP request timed out".into());
        }

        if self.is_connect() {
            return PetMatchError::Upstream(format!("HTTP connection failure: {self}"));
        }

        if let Some(status) = self.status() {
            return status_error(status);
        }

        if self.is_decode() {
            return PetMatchError::Upstream(format!("invalid response body: {self}"));
        }

        PetMatchError::Upstream(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_petmatch())
    }
}

/// Map a non-success status to the domain error.
///
/// Only 404 is distinguished; every other failure is an upstream error.
pub fn status_error(status: StatusCode) -> PetMatchError {
    let reason = status.canonical_reason().unwrap_or("unknown status");
    let message = format!("HTTP {} {reason}", status.as_u16());

    match status {
        StatusCode::NOT_FOUND => PetMatchError::NotFound(message),
        _ => PetMatchError::Upstream(message),
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use reqwest::Client;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn not_found_status_maps_to_not_found() {
        match status_error(StatusCode::NOT_FOUND) {
            PetMatchError::NotFound(msg) => assert!(msg.contains("404")),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn other_statuses_map_to_upstream() {
        for status in
            [StatusCode::UNAUTHORIZED, StatusCode::TOO_MANY_REQUESTS, StatusCode::BAD_GATEWAY]
        {
            assert!(matches!(status_error(status), PetMatchError::Upstream(_)));
        }
    }

    #[tokio::test]
    async fn http_status_error_maps_through_newtype() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::INTERNAL_SERVER_ERROR))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: PetMatchError = InfraError::from(error).into();
        match mapped {
            PetMatchError::Upstream(msg) => assert!(msg.contains("500")),
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_refused_maps_to_upstream() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: PetMatchError = InfraError::from(error).into();
        assert!(matches!(mapped, PetMatchError::Upstream(msg) if msg.contains("connection")));
    }
}
