//! # Testing & Assertions
//!
//! Three fixed, independently toggled checks against the last response:
//! status code, exact body match and top-level array length.
//!
//! Body equality compares compact serialisations, so two objects holding the
//! same members in a different order do not match. Integral floats on either
//! side serialise as integers.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::interpret::{ResponseBody, canonical_json};
use crate::session::LastResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssertionKind {
    StatusEquals,
    BodyEquals,
    ArrayLengthEquals,
}

impl AssertionKind {
    pub const ALL: [AssertionKind; 3] = [
        AssertionKind::StatusEquals,
        AssertionKind::BodyEquals,
        AssertionKind::ArrayLengthEquals,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AssertionKind::StatusEquals => "Status Code Test",
            AssertionKind::BodyEquals => "Expected Output Test",
            AssertionKind::ArrayLengthEquals => "Array Size Test",
        }
    }
}

/// A single enabled check carrying the expected value as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionSpec {
    StatusEquals(String),
    BodyEquals(String),
    ArrayLengthEquals(String),
}

impl AssertionSpec {
    pub fn kind(&self) -> AssertionKind {
        match self {
            AssertionSpec::StatusEquals(_) => AssertionKind::StatusEquals,
            AssertionSpec::BodyEquals(_) => AssertionKind::BodyEquals,
            AssertionSpec::ArrayLengthEquals(_) => AssertionKind::ArrayLengthEquals,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toggle {
    pub enabled: bool,
    pub expected: String,
}

impl Toggle {
    pub fn enabled(expected: impl Into<String>) -> Self {
        Self {
            enabled: true,
            expected: expected.into(),
        }
    }
}

/// Checkbox and input state for the three checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionToggles {
    pub status: Toggle,
    pub body: Toggle,
    pub array_length: Toggle,
}

impl Default for AssertionToggles {
    fn default() -> Self {
        Self {
            status: Toggle {
                enabled: false,
                expected: "200".to_string(),
            },
            body: Toggle::default(),
            array_length: Toggle::default(),
        }
    }
}

impl AssertionToggles {
    pub fn toggle(&self, kind: AssertionKind) -> &Toggle {
        match kind {
            AssertionKind::StatusEquals => &self.status,
            AssertionKind::BodyEquals => &self.body,
            AssertionKind::ArrayLengthEquals => &self.array_length,
        }
    }

    pub fn toggle_mut(&mut self, kind: AssertionKind) -> &mut Toggle {
        match kind {
            AssertionKind::StatusEquals => &mut self.status,
            AssertionKind::BodyEquals => &mut self.body,
            AssertionKind::ArrayLengthEquals => &mut self.array_length,
        }
    }

    pub fn any_enabled(&self) -> bool {
        AssertionKind::ALL.into_iter().any(|kind| self.toggle(kind).enabled)
    }

    pub fn specs(&self) -> Vec<AssertionSpec> {
        AssertionKind::ALL
            .into_iter()
            .filter(|kind| self.toggle(*kind).enabled)
            .map(|kind| {
                let expected = self.toggle(kind).expected.clone();
                match kind {
                    AssertionKind::StatusEquals => AssertionSpec::StatusEquals(expected),
                    AssertionKind::BodyEquals => AssertionSpec::BodyEquals(expected),
                    AssertionKind::ArrayLengthEquals => AssertionSpec::ArrayLengthEquals(expected),
                }
            })
            .collect()
    }
}

/// Why a single check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionFailure {
    #[error("Expected {expected}, but got {actual}")]
    StatusMismatch { expected: String, actual: u16 },

    #[error("Response body does not match expected output.")]
    BodyMismatch,

    #[error("Invalid JSON in Expected Output field.")]
    InvalidExpectedJson,

    #[error("Response body is not a top-level array.")]
    NotAnArray,

    #[error("Expected array size of {expected}, but got {actual}")]
    ArraySizeMismatch { expected: String, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No API response to test. Please send a request first.")]
pub struct NoResponseAvailable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionResult {
    pub kind: AssertionKind,
    pub name: String,
    pub passed: bool,
    pub failure: Option<AssertionFailure>,
}

impl AssertionResult {
    fn new(kind: AssertionKind, failure: Option<AssertionFailure>) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            passed: failure.is_none(),
            failure,
        }
    }

    pub fn detail(&self) -> Option<String> {
        self.failure.as_ref().map(ToString::to_string)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub results: Vec<AssertionResult>,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|result| result.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|result| result.passed)
    }
}

/// Evaluates `specs` against `last`.
///
/// Results always come back in kind order (status, body, array length)
/// whatever order the specs were given in.
pub fn evaluate(last: &LastResponse, specs: &[AssertionSpec]) -> Result<RunReport, NoResponseAvailable> {
    // A JSON `null` body counts as no response at all.
    let body = match last.body.as_ref() {
        None | Some(ResponseBody::Json(Value::Null)) => {
            warn!("assertions requested without a usable response body");
            return Err(NoResponseAvailable);
        }
        Some(body) => body,
    };
    let status = last.status.unwrap_or_default();

    let mut ordered: Vec<&AssertionSpec> = specs.iter().collect();
    ordered.sort_by_key(|spec| spec.kind());

    let results: Vec<AssertionResult> = ordered
        .into_iter()
        .map(|spec| {
            let failure = match spec {
                AssertionSpec::StatusEquals(expected) => check_status(status, expected),
                AssertionSpec::BodyEquals(expected) => check_body(body, expected),
                AssertionSpec::ArrayLengthEquals(expected) => check_array_length(body, expected),
            };
            AssertionResult::new(spec.kind(), failure)
        })
        .collect();

    let report = RunReport { results };
    debug!(passed = report.passed(), total = report.total(), "assertions evaluated");
    Ok(report)
}

fn check_status(actual: u16, expected: &str) -> Option<AssertionFailure> {
    match parse_int(expected) {
        Some(code) if code == i64::from(actual) => None,
        parsed => Some(AssertionFailure::StatusMismatch {
            expected: expected_label(parsed, expected),
            actual,
        }),
    }
}

fn check_body(body: &ResponseBody, expected: &str) -> Option<AssertionFailure> {
    let Ok(expected) = serde_json::from_str::<Value>(expected) else {
        return Some(AssertionFailure::InvalidExpectedJson);
    };
    if body.canonical() == canonical_json(&expected) {
        None
    } else {
        Some(AssertionFailure::BodyMismatch)
    }
}

fn check_array_length(body: &ResponseBody, expected: &str) -> Option<AssertionFailure> {
    let Some(items) = body.as_array() else {
        return Some(AssertionFailure::NotAnArray);
    };
    let parsed = parse_int(expected);
    match parsed {
        Some(size) if usize::try_from(size).is_ok_and(|size| size == items.len()) => None,
        _ => Some(AssertionFailure::ArraySizeMismatch {
            expected: expected_label(parsed, expected),
            actual: items.len(),
        }),
    }
}

fn expected_label(parsed: Option<i64>, raw: &str) -> String {
    match parsed {
        Some(value) => value.to_string(),
        None => raw.trim().to_string(),
    }
}

/// Reads an integer the way `parseInt(s, 10)` does: leading whitespace, an
/// optional sign, then as many decimal digits as follow. Trailing text is
/// ignored; no digits at all is `None`.
pub fn parse_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn last(status: u16, body: ResponseBody) -> LastResponse {
        LastResponse {
            status: Some(status),
            body: Some(body),
        }
    }

    fn json_body(value: Value) -> ResponseBody {
        ResponseBody::Json(value)
    }

    fn single(last: &LastResponse, spec: AssertionSpec) -> AssertionResult {
        let report = evaluate(last, &[spec]).unwrap();
        assert_eq!(report.total(), 1);
        report.results.into_iter().next().unwrap()
    }

    #[test]
    fn no_response_refuses_to_run() {
        let specs = [AssertionSpec::StatusEquals("200".into())];
        assert_eq!(evaluate(&LastResponse::default(), &specs), Err(NoResponseAvailable));
    }

    #[test]
    fn network_failure_state_refuses_to_run() {
        let failed = LastResponse {
            status: Some(0),
            body: None,
        };
        let specs = [AssertionSpec::StatusEquals("0".into())];
        assert_eq!(evaluate(&failed, &specs), Err(NoResponseAvailable));
    }

    #[test]
    fn json_null_body_refuses_to_run() {
        let null_body = last(200, crate::interpret::interpret("null").body);
        let specs = [AssertionSpec::StatusEquals("200".into())];
        assert_eq!(evaluate(&null_body, &specs), Err(NoResponseAvailable));
    }

    #[test]
    fn status_match_passes() {
        let result = single(&last(201, json_body(json!({}))), AssertionSpec::StatusEquals("201".into()));
        assert!(result.passed);
        assert_eq!(result.name, "Status Code Test");
        assert_eq!(result.detail(), None);
    }

    #[test]
    fn status_mismatch_reports_both_codes() {
        let result = single(&last(201, json_body(json!({}))), AssertionSpec::StatusEquals("200".into()));
        assert!(!result.passed);
        assert_eq!(result.detail().as_deref(), Some("Expected 200, but got 201"));
    }

    #[test]
    fn non_numeric_status_never_passes() {
        let result = single(&last(200, json_body(json!({}))), AssertionSpec::StatusEquals(" abc ".into()));
        assert!(!result.passed);
        assert_eq!(result.detail().as_deref(), Some("Expected abc, but got 200"));
    }

    #[test]
    fn status_reads_leading_digits() {
        let result = single(&last(204, ResponseBody::Text(String::new())), AssertionSpec::StatusEquals(" 204 No Content".into()));
        assert!(result.passed);
    }

    #[test]
    fn body_equal_serialisation_passes() {
        let result = single(
            &last(200, json_body(json!({"a": 1, "b": [true, null]}))),
            AssertionSpec::BodyEquals("{ \"a\": 1, \"b\": [true, null] }".into()),
        );
        assert!(result.passed);
    }

    // Key order matters: the comparison is on serialised text, not on a
    // structural equality of the two values.
    #[test]
    fn body_comparison_is_key_order_sensitive() {
        let body: Value = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
        let result = single(&last(200, json_body(body)), AssertionSpec::BodyEquals(r#"{"b":2,"a":1}"#.into()));
        assert!(!result.passed);
        assert_eq!(
            result.detail().as_deref(),
            Some("Response body does not match expected output.")
        );
    }

    #[test]
    fn integral_floats_compare_as_integers() {
        let body: Value = serde_json::from_str(r#"{"amount":10.0}"#).unwrap();
        let result = single(&last(200, json_body(body)), AssertionSpec::BodyEquals(r#"{"amount":10}"#.into()));
        assert!(result.passed);

        let body: Value = serde_json::from_str("[1e2]").unwrap();
        let result = single(&last(200, json_body(body)), AssertionSpec::BodyEquals("[100.0]".into()));
        assert!(result.passed);
    }

    #[test]
    fn invalid_expected_json_is_scoped_to_its_check() {
        let report = evaluate(
            &last(200, json_body(json!([1, 2, 3]))),
            &[
                AssertionSpec::StatusEquals("200".into()),
                AssertionSpec::BodyEquals("{nope".into()),
                AssertionSpec::ArrayLengthEquals("3".into()),
            ],
        )
        .unwrap();

        let summary: Vec<_> = report.results.iter().map(|r| (r.name.as_str(), r.passed)).collect();
        assert_eq!(
            summary,
            vec![
                ("Status Code Test", true),
                ("Expected Output Test", false),
                ("Array Size Test", true),
            ]
        );
        assert_eq!(report.results[1].failure, Some(AssertionFailure::InvalidExpectedJson));
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn text_body_matches_expected_json_string() {
        let result = single(
            &last(200, ResponseBody::Text("pong".into())),
            AssertionSpec::BodyEquals("\"pong\"".into()),
        );
        assert!(result.passed);
    }

    #[test]
    fn array_length_match_passes() {
        let result = single(&last(200, json_body(json!([1, 2, 3]))), AssertionSpec::ArrayLengthEquals("3".into()));
        assert!(result.passed);
    }

    #[test]
    fn array_length_mismatch_reports_sizes() {
        let result = single(&last(200, json_body(json!([1, 2, 3]))), AssertionSpec::ArrayLengthEquals("5".into()));
        assert_eq!(result.detail().as_deref(), Some("Expected array size of 5, but got 3"));
    }

    #[test]
    fn array_length_on_object_is_not_an_array() {
        let result = single(&last(200, json_body(json!({"x": 1}))), AssertionSpec::ArrayLengthEquals("1".into()));
        assert_eq!(result.failure, Some(AssertionFailure::NotAnArray));
        assert_eq!(result.detail().as_deref(), Some("Response body is not a top-level array."));
    }

    #[test]
    fn array_length_on_text_is_not_an_array() {
        let result = single(&last(200, ResponseBody::Text("[1,2".into())), AssertionSpec::ArrayLengthEquals("2".into()));
        assert_eq!(result.failure, Some(AssertionFailure::NotAnArray));
    }

    #[test]
    fn signed_array_lengths() {
        let result = single(&last(200, json_body(json!([]))), AssertionSpec::ArrayLengthEquals("-0".into()));
        assert!(result.passed, "-0 parses as zero");
        let result = single(&last(200, json_body(json!([]))), AssertionSpec::ArrayLengthEquals("-1".into()));
        assert!(!result.passed);
    }

    #[test]
    fn results_follow_kind_order() {
        let report = evaluate(
            &last(200, json_body(json!([]))),
            &[
                AssertionSpec::ArrayLengthEquals("0".into()),
                AssertionSpec::StatusEquals("200".into()),
            ],
        )
        .unwrap();
        let kinds: Vec<_> = report.results.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![AssertionKind::StatusEquals, AssertionKind::ArrayLengthEquals]);
        assert!(report.all_passed());
    }

    #[test]
    fn toggles_yield_only_enabled_specs_in_order() {
        let mut toggles = AssertionToggles::default();
        assert!(!toggles.any_enabled());
        assert!(toggles.specs().is_empty());

        toggles.array_length = Toggle::enabled("2");
        toggles.toggle_mut(AssertionKind::StatusEquals).enabled = true;

        assert!(toggles.any_enabled());
        assert_eq!(
            toggles.specs(),
            vec![
                AssertionSpec::StatusEquals("200".into()),
                AssertionSpec::ArrayLengthEquals("2".into()),
            ]
        );
    }

    #[test]
    fn parse_int_mirrors_browser_parsing() {
        assert_eq!(parse_int("200"), Some(200));
        assert_eq!(parse_int("  42abc"), Some(42));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("3.9"), Some(3));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("99999999999999999999"), None);
    }
}
