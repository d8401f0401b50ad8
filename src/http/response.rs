use std::time::Duration;

/// What came back over the wire, before interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
    pub elapsed: Duration,
}

impl RawResponse {
    /// `"200 OK"`, or just the code when the server sent no reason phrase.
    pub fn status_line(&self) -> String {
        if self.status_text.is_empty() {
            self.status.to_string()
        } else {
            format!("{} {}", self.status, self.status_text)
        }
    }

    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

/// Milliseconds with two decimal places, e.g. `12.34ms`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}ms", elapsed.as_secs_f64() * 1000.0)
}
