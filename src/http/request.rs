use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{self, AUTHORIZATION};
use crate::error::ValidationError;
use crate::form::RequestForm;

use super::method::HttpMethod;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// A fully resolved request, ready for the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub parsed_body: Option<Value>,
}

impl RequestDescriptor {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Turns form state into a [`RequestDescriptor`].
///
/// Header insertion order is `Authorization`, then the dynamic rows, then
/// `Content-Type`; inserting a name that is already present overwrites its
/// value in place.
pub fn build_request(form: &RequestForm) -> Result<RequestDescriptor, ValidationError> {
    let url = form.url.trim();
    if url.is_empty() {
        warn!("refusing to send: url is empty");
        return Err(ValidationError::MissingUrl);
    }

    let mut headers = Vec::new();
    if let Some(authorization) = auth::bearer_authorization(&form.token) {
        insert_header(&mut headers, AUTHORIZATION, &authorization);
    }
    for (_, row) in form.headers.iter() {
        if let Some((key, value)) = row.complete() {
            insert_header(&mut headers, key, value);
        }
    }

    let mut body = None;
    let mut parsed_body = None;
    if form.method.carries_body() {
        let raw = form.body.trim();
        if !raw.is_empty() {
            let value: Value = serde_json::from_str(raw).map_err(|err| {
                warn!(error = %err, "refusing to send: request body is not valid JSON");
                ValidationError::InvalidRequestBody(err)
            })?;
            body = Some(value.to_string());
            parsed_body = Some(value);
            insert_header(&mut headers, CONTENT_TYPE, APPLICATION_JSON);
        }
    }

    debug!(
        method = %form.method,
        url,
        headers = headers.len(),
        has_body = body.is_some(),
        "request assembled"
    );

    Ok(RequestDescriptor {
        method: form.method,
        url: url.to_string(),
        headers,
        body,
        parsed_body,
    })
}

fn insert_header(headers: &mut Vec<(String, String)>, key: &str, value: &str) {
    match headers.iter_mut().find(|(existing, _)| existing == key) {
        Some((_, existing)) => *existing = value.to_string(),
        None => headers.push((key.to_string(), value.to_string())),
    }
}
