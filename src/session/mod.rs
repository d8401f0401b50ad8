//! # Session
//!
//! Owns the single "last response" slot and strings the pipeline together:
//! build, dispatch, interpret, record, assert.
//!
//! The desktop app drives the steps one at a time because dispatch runs as a
//! background task; [`Session::send`] runs them back to back for headless use.

use tracing::{info, warn};

use crate::error::{NetworkError, PipelineError};
use crate::form::RequestForm;
use crate::http::client::Dispatcher;
use crate::http::request::build_request;
use crate::http::response::RawResponse;
use crate::interpret::{self, Interpretation, ResponseBody};
use crate::testing::{self, AssertionSpec, NoResponseAvailable, RunReport};

/// Status code recorded when the transport failed.
pub const NETWORK_FAILURE_STATUS: u16 = 0;

/// Outcome of the most recent dispatch attempt.
///
/// Starts out empty and is only ever replaced whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LastResponse {
    pub status: Option<u16>,
    pub body: Option<ResponseBody>,
}

impl LastResponse {
    pub fn network_failure() -> Self {
        Self {
            status: Some(NETWORK_FAILURE_STATUS),
            body: None,
        }
    }
}

/// One completed round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub response: RawResponse,
    pub interpretation: Interpretation,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    dispatcher: Dispatcher,
    last: LastResponse,
}

impl Session {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            last: LastResponse::default(),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn last_response(&self) -> &LastResponse {
        &self.last
    }

    /// Records the outcome of a dispatch and returns the interpreted
    /// response for display.
    pub fn record(&mut self, outcome: Result<RawResponse, NetworkError>) -> Result<Exchange, NetworkError> {
        match outcome {
            Ok(response) => {
                let interpretation = interpret::interpret(&response.body);
                self.last = LastResponse {
                    status: Some(response.status),
                    body: Some(interpretation.body.clone()),
                };
                Ok(Exchange {
                    response,
                    interpretation,
                })
            }
            Err(err) => {
                warn!(error = %err.message, "resetting last response after network failure");
                self.last = LastResponse::network_failure();
                Err(err)
            }
        }
    }

    pub fn run_assertions(&self, specs: &[AssertionSpec]) -> Result<RunReport, NoResponseAvailable> {
        testing::evaluate(&self.last, specs)
    }

    /// Builds, dispatches and records one request. A form that fails
    /// validation leaves the last response untouched.
    pub async fn send(&mut self, form: &RequestForm) -> Result<Exchange, PipelineError> {
        let request = build_request(form)?;
        info!(method = %request.method, url = %request.url, "sending request");
        let outcome = self.dispatcher.dispatch(&request).await;
        Ok(self.record(outcome)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::error::ValidationError;
    use crate::http::method::HttpMethod;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            status_text: String::new(),
            body: body.to_string(),
            elapsed: Duration::from_millis(3),
        }
    }

    #[test]
    fn starts_empty() {
        let session = Session::default();
        assert_eq!(session.last_response(), &LastResponse::default());
        assert_eq!(session.run_assertions(&[]), Err(NoResponseAvailable));
    }

    #[test]
    fn success_replaces_the_slot() {
        let mut session = Session::default();
        let exchange = session.record(Ok(raw(200, "[1,2,3]"))).unwrap();
        assert_eq!(exchange.interpretation.body, ResponseBody::Json(json!([1, 2, 3])));
        assert_eq!(
            session.last_response(),
            &LastResponse {
                status: Some(200),
                body: Some(ResponseBody::Json(json!([1, 2, 3]))),
            }
        );

        session.record(Ok(raw(500, "boom"))).unwrap();
        assert_eq!(session.last_response().status, Some(500));
        assert_eq!(
            session.last_response().body,
            Some(ResponseBody::Text("boom".to_string()))
        );
    }

    #[test]
    fn network_failure_resets_to_sentinel() {
        let mut session = Session::default();
        session.record(Ok(raw(200, "{}"))).unwrap();

        let err = session.record(Err(NetworkError::new("connection refused"))).unwrap_err();
        assert_eq!(err.message, "connection refused");
        assert_eq!(session.last_response(), &LastResponse::network_failure());
        assert_eq!(
            session.run_assertions(&[AssertionSpec::StatusEquals("0".into())]),
            Err(NoResponseAvailable)
        );
    }

    #[tokio::test]
    async fn invalid_body_never_reaches_the_slot() {
        let mut session = Session::default();
        session.record(Ok(raw(201, "{\"id\":1}"))).unwrap();
        let before = session.last_response().clone();

        let form = RequestForm::new(HttpMethod::Post, "http://127.0.0.1:9/items").with_body("{invalid");
        let err = session.send(&form).await.unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Validation(ValidationError::InvalidRequestBody(_))
        ));
        assert_eq!(session.last_response(), &before);
    }

    #[tokio::test]
    async fn missing_url_never_reaches_the_slot() {
        let mut session = Session::default();
        let err = session.send(&RequestForm::new(HttpMethod::Get, "")).await.unwrap_err();
        assert!(matches!(err, PipelineError::Validation(ValidationError::MissingUrl)));
        assert_eq!(session.last_response(), &LastResponse::default());
    }
}
