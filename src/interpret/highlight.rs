//! Pretty-printer that tags every token with a display class while it
//! writes, instead of re-scanning already serialised text.
//!
//! Output text is byte-for-byte what `serde_json::to_string_pretty` produces,
//! except that integral floats are written as integers.

use serde_json::Value;

use super::normalize_number;

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Key,
    String,
    Boolean,
    Null,
    Number,
    /// Braces, brackets, commas, colons and whitespace.
    Punctuation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub class: TokenClass,
    pub text: String,
}

pub fn highlight(value: &Value) -> Vec<Token> {
    let mut highlighter = Highlighter::default();
    highlighter.value(value, 0);
    highlighter.tokens
}

/// Concatenated token text, i.e. the plain pretty-printed document.
pub fn plain_text(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text.as_str()).collect()
}

#[derive(Default)]
struct Highlighter {
    tokens: Vec<Token>,
}

impl Highlighter {
    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.push(TokenClass::Null, "null"),
            Value::Bool(_) => self.push(TokenClass::Boolean, &value.to_string()),
            Value::Number(number) => self.push(TokenClass::Number, &normalize_number(number).to_string()),
            Value::String(_) => self.push(TokenClass::String, &value.to_string()),
            Value::Array(items) if items.is_empty() => self.push(TokenClass::Punctuation, "[]"),
            Value::Object(fields) if fields.is_empty() => self.push(TokenClass::Punctuation, "{}"),
            Value::Array(items) => {
                self.push(TokenClass::Punctuation, "[\n");
                for (index, item) in items.iter().enumerate() {
                    self.indent(depth + 1);
                    self.value(item, depth + 1);
                    self.separator(index + 1 == items.len());
                }
                self.indent(depth);
                self.push(TokenClass::Punctuation, "]");
            }
            Value::Object(fields) => {
                self.push(TokenClass::Punctuation, "{\n");
                for (index, (key, field)) in fields.iter().enumerate() {
                    self.indent(depth + 1);
                    self.push(TokenClass::Key, &Value::from(key.as_str()).to_string());
                    self.push(TokenClass::Punctuation, ": ");
                    self.value(field, depth + 1);
                    self.separator(index + 1 == fields.len());
                }
                self.indent(depth);
                self.push(TokenClass::Punctuation, "}");
            }
        }
    }

    fn separator(&mut self, last: bool) {
        self.push(TokenClass::Punctuation, if last { "\n" } else { ",\n" });
    }

    fn indent(&mut self, depth: usize) {
        if depth > 0 {
            self.push(TokenClass::Punctuation, &INDENT.repeat(depth));
        }
    }

    /// Adjacent punctuation collapses into one token.
    fn push(&mut self, class: TokenClass, text: &str) {
        if class == TokenClass::Punctuation {
            if let Some(last) = self.tokens.last_mut() {
                if last.class == TokenClass::Punctuation {
                    last.text.push_str(text);
                    return;
                }
            }
        }
        self.tokens.push(Token {
            class,
            text: text.to_string(),
        });
    }
}
