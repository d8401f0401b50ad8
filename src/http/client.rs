use std::error::Error as _;
use std::time::Instant;

use reqwest::header::{HeaderName, HeaderValue};
use tracing::{info, warn};

use crate::error::NetworkError;

use super::request::RequestDescriptor;
use super::response::RawResponse;

/// Sends [`RequestDescriptor`]s over a shared connection pool.
///
/// Cloning is cheap; clones share the underlying `reqwest::Client`. No
/// timeout is configured and nothing is retried.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    client: reqwest::Client,
}

impl Dispatcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn dispatch(&self, request: &RequestDescriptor) -> Result<RawResponse, NetworkError> {
        let method: reqwest::Method = request.method.into();
        let url = reqwest::Url::parse(&request.url)
            .map_err(|e| failure(&request.url, format!("Invalid URL: {e}")))?;

        let mut req_builder = self.client.request(method, url);
        for (key, value) in &request.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| failure(&request.url, format!("Invalid header name `{key}`: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| failure(&request.url, format!("Invalid header value for `{key}`: {e}")))?;
            req_builder = req_builder.header(header_name, header_value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let started = Instant::now();
        let response = req_builder
            .send()
            .await
            .map_err(|e| failure(&request.url, describe(&e)))?;
        let elapsed = started.elapsed();

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| failure(&request.url, format!("Failed to read response: {}", describe(&e))))?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        info!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            size_bytes = bytes.len(),
            "response received"
        );

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
            elapsed,
        })
    }
}

/// Owned-argument form of [`Dispatcher::dispatch`] for spawning as a task.
pub async fn send_request(
    dispatcher: Dispatcher,
    request: RequestDescriptor,
) -> Result<RawResponse, NetworkError> {
    dispatcher.dispatch(&request).await
}

fn failure(url: &str, message: String) -> NetworkError {
    warn!(url, error = %message, "request failed");
    NetworkError::new(message)
}

/// reqwest's top-level message rarely names the cause; append the source
/// chain so "connection refused" and friends reach the user.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::method::HttpMethod;

    fn request(url: &str, headers: Vec<(String, String)>) -> RequestDescriptor {
        RequestDescriptor {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers,
            body: None,
            parsed_body: None,
        }
    }

    #[tokio::test]
    async fn unparsable_url_is_a_network_error() {
        let err = Dispatcher::default()
            .dispatch(&request("not a url", Vec::new()))
            .await
            .unwrap_err();
        assert!(err.message.starts_with("Invalid URL"), "{}", err.message);
    }

    #[tokio::test]
    async fn invalid_header_name_is_a_network_error() {
        let headers = vec![("Bad Header".to_string(), "x".to_string())];
        let err = Dispatcher::default()
            .dispatch(&request("http://127.0.0.1:9/", headers))
            .await
            .unwrap_err();
        assert!(err.message.contains("Invalid header name"), "{}", err.message);
    }
}
