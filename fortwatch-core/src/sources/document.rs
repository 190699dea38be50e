//! `FortRow` over JSON documents, as produced by document stores and by
//! rows fetched as JSON objects.

use serde_json::{Map, Value};

use crate::{FortRow, RowError};

impl FortRow for Map<String, Value> {
    fn text(&self, column: &str) -> Result<Option<String>, RowError> {
        match self.get(column) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(unexpected(column, "text")),
        }
    }

    fn float(&self, column: &str) -> Result<Option<f64>, RowError> {
        match self.get(column) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(number)) => number
                .as_f64()
                .map(Some)
                .ok_or_else(|| unexpected(column, "float")),
            Some(_) => Err(unexpected(column, "float")),
        }
    }
}

fn unexpected(column: &str, expected: &'static str) -> RowError {
    RowError::UnexpectedType {
        column: column.to_owned(),
        expected,
    }
}
