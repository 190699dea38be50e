//! `FortRow` over `rusqlite` result rows.

use rusqlite::{Row, types::FromSql};

use crate::{FortRow, RowError};

impl FortRow for Row<'_> {
    fn text(&self, column: &str) -> Result<Option<String>, RowError> {
        read(self, column)
    }

    fn float(&self, column: &str) -> Result<Option<f64>, RowError> {
        read(self, column)
    }
}

fn read<T: FromSql>(row: &Row<'_>, column: &str) -> Result<Option<T>, RowError> {
    match row.get::<_, Option<T>>(column) {
        Ok(value) => Ok(value),
        Err(rusqlite::Error::InvalidColumnName(_)) => Ok(None),
        Err(source) => Err(RowError::Sqlite {
            column: column.to_owned(),
            source,
        }),
    }
}
