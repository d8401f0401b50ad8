//! # Response interpretation
//!
//! Decides whether a response body is JSON, builds what the response panel
//! renders, and classifies status codes for display.

pub mod highlight;

use serde_json::{Map, Number, Value};

pub use highlight::{Token, TokenClass};

/// A response body as the assertion engine sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    /// The body did not parse as JSON and is kept verbatim.
    Text(String),
}

impl ResponseBody {
    /// Compact JSON serialisation; a text body serialises as a JSON string.
    /// Object keys keep the order they arrived in and integral floats are
    /// written as integers.
    pub fn canonical(&self) -> String {
        match self {
            ResponseBody::Json(value) => canonical_json(value),
            ResponseBody::Text(text) => Value::from(text.as_str()).to_string(),
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            ResponseBody::Json(value) => value.as_array(),
            ResponseBody::Text(_) => None,
        }
    }
}

/// Compact serialisation with every number passed through [`normalize_number`].
pub fn canonical_json(value: &Value) -> String {
    normalize(value).to_string()
}

fn normalize(value: &Value) -> Value {
    match value {
        Value::Number(number) => Value::Number(normalize_number(number)),
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), normalize(field)))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}

/// Floats holding an exact integer become integers, so `10.0` and `1e2`
/// read as `10` and `100`. `-0.0` becomes `0`.
pub fn normalize_number(number: &Number) -> Number {
    match number.as_f64() {
        Some(float)
            if number.is_f64()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float < i64::MAX as f64 =>
        {
            Number::from(float as i64)
        }
        _ => number.clone(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rendering {
    Highlighted(Vec<Token>),
    Plain(String),
}

impl Rendering {
    pub fn text(&self) -> String {
        match self {
            Rendering::Highlighted(tokens) => highlight::plain_text(tokens),
            Rendering::Plain(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    pub body: ResponseBody,
    pub rendering: Rendering,
}

pub fn interpret(raw: &str) -> Interpretation {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Interpretation {
            rendering: Rendering::Highlighted(highlight::highlight(&value)),
            body: ResponseBody::Json(value),
        },
        Err(_) => Interpretation {
            body: ResponseBody::Text(raw.to_string()),
            rendering: Rendering::Plain(raw.to_string()),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    ClientError,
    ServerError,
    /// 1xx, 3xx and anything outside the registered ranges.
    Neutral,
}

impl StatusClass {
    pub fn of(status: u16) -> Self {
        match status {
            200..=299 => StatusClass::Success,
            400..=499 => StatusClass::ClientError,
            500.. => StatusClass::ServerError,
            _ => StatusClass::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_body_is_parsed_and_highlighted() {
        let interpretation = interpret(r#"{"id":1,"tags":["x"]}"#);
        assert_eq!(interpretation.body, ResponseBody::Json(json!({"id": 1, "tags": ["x"]})));
        assert!(matches!(interpretation.rendering, Rendering::Highlighted(_)));
        assert_eq!(
            interpretation.rendering.text(),
            "{\n  \"id\": 1,\n  \"tags\": [\n    \"x\"\n  ]\n}"
        );
    }

    #[test]
    fn non_json_body_is_kept_verbatim() {
        let raw = "<html>\n  <body>oops</body>\n</html>";
        let interpretation = interpret(raw);
        assert_eq!(interpretation.body, ResponseBody::Text(raw.to_string()));
        assert_eq!(interpretation.rendering, Rendering::Plain(raw.to_string()));
    }

    #[test]
    fn empty_body_is_text() {
        assert_eq!(interpret("").body, ResponseBody::Text(String::new()));
    }

    #[test]
    fn scalar_json_is_json() {
        assert_eq!(interpret(" 42 ").body, ResponseBody::Json(json!(42)));
        assert_eq!(interpret("\"hi\"").body, ResponseBody::Json(json!("hi")));
    }

    #[test]
    fn canonical_form_preserves_key_order() {
        let body = interpret(r#"{ "b": 2, "a": 1 }"#).body;
        assert_eq!(body.canonical(), r#"{"b":2,"a":1}"#);
    }

    #[test]
    fn integral_floats_canonicalise_as_integers() {
        assert_eq!(interpret(r#"{"amount":10.0}"#).body.canonical(), r#"{"amount":10}"#);
        assert_eq!(interpret("[1e2, -0.0, 2.5]").body.canonical(), "[100,0,2.5]");
        assert_eq!(interpret("[1e300]").body.canonical(), "[1e300]");
    }

    #[test]
    fn text_body_canonicalises_as_json_string() {
        let body = ResponseBody::Text("plain \"text\"".to_string());
        assert_eq!(body.canonical(), r#""plain \"text\"""#);
    }

    #[test]
    fn status_classes() {
        assert_eq!(StatusClass::of(200), StatusClass::Success);
        assert_eq!(StatusClass::of(299), StatusClass::Success);
        assert_eq!(StatusClass::of(404), StatusClass::ClientError);
        assert_eq!(StatusClass::of(503), StatusClass::ServerError);
        assert_eq!(StatusClass::of(600), StatusClass::ServerError);
        assert_eq!(StatusClass::of(101), StatusClass::Neutral);
        assert_eq!(StatusClass::of(304), StatusClass::Neutral);
        assert_eq!(StatusClass::of(0), StatusClass::Neutral);
    }
}
