//! # Request form state
//!
//! Raw, unvalidated strings exactly as the user typed them. Header rows are
//! addressed by a stable [`RowId`] so the view can remove or edit a row
//! without holding on to its position.

use crate::http::method::HttpMethod;

pub type RowId = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRow {
    pub key: String,
    pub value: String,
}

impl HeaderRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Trimmed key/value pair, or `None` when either side is blank.
    pub fn complete(&self) -> Option<(&str, &str)> {
        let key = self.key.trim();
        let value = self.value.trim();
        if key.is_empty() || value.is_empty() {
            None
        } else {
            Some((key, value))
        }
    }
}

/// Ordered list of header rows with stable identifiers.
#[derive(Debug, Clone, Default)]
pub struct HeaderRows {
    rows: Vec<(RowId, HeaderRow)>,
    next_id: RowId,
}

impl HeaderRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty row and returns its id.
    pub fn add(&mut self) -> RowId {
        self.push(HeaderRow::default())
    }

    pub fn push(&mut self, row: HeaderRow) -> RowId {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push((id, row));
        id
    }

    /// Removes the row with `id`. Returns `false` if no such row exists.
    pub fn remove(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|(row_id, _)| *row_id != id);
        self.rows.len() != before
    }

    pub fn set_key(&mut self, id: RowId, key: String) {
        if let Some(row) = self.get_mut(id) {
            row.key = key;
        }
    }

    pub fn set_value(&mut self, id: RowId, value: String) {
        if let Some(row) = self.get_mut(id) {
            row.value = value;
        }
    }

    pub fn get(&self, id: RowId) -> Option<&HeaderRow> {
        self.rows.iter().find(|(row_id, _)| *row_id == id).map(|(_, row)| row)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RowId, &HeaderRow)> {
        self.rows.iter().map(|(id, row)| (*id, row))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn get_mut(&mut self, id: RowId) -> Option<&mut HeaderRow> {
        self.rows
            .iter_mut()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, row)| row)
    }
}

/// Everything the request builder reads.
#[derive(Debug, Clone, Default)]
pub struct RequestForm {
    pub method: HttpMethod,
    pub url: String,
    pub token: String,
    pub body: String,
    pub headers: HeaderRows,
}

impl RequestForm {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(HeaderRow::new(key, value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_stay_stable_after_removal() {
        let mut rows = HeaderRows::new();
        let first = rows.add();
        let second = rows.add();
        let third = rows.add();

        assert!(rows.remove(second));
        rows.set_key(third, "X-Trace".to_string());

        let ids: Vec<_> = rows.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![first, third]);
        assert_eq!(rows.get(third).map(|row| row.key.as_str()), Some("X-Trace"));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut rows = HeaderRows::new();
        let first = rows.add();
        rows.remove(first);
        let next = rows.add();
        assert_ne!(first, next);
    }

    #[test]
    fn removing_unknown_row_is_a_no_op() {
        let mut rows = HeaderRows::new();
        rows.add();
        assert!(!rows.remove(42));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn blank_rows_are_kept_but_incomplete() {
        let mut rows = HeaderRows::new();
        let id = rows.add();
        rows.set_value(id, "value".to_string());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows.get(id).and_then(HeaderRow::complete), None);
    }

    #[test]
    fn complete_trims_both_sides() {
        let row = HeaderRow::new("  Accept ", " application/json ");
        assert_eq!(row.complete(), Some(("Accept", "application/json")));
    }
}
