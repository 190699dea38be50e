//! Error types raised while constructing forts.

use thiserror::Error;

use crate::CellIndexError;

/// Errors raised while reading a value out of a persisted row.
#[derive(Debug, Error)]
pub enum RowError {
    /// The column exists but holds a value of the wrong type.
    #[error("column {column} does not hold a {expected} value")]
    UnexpectedType {
        /// Name of the offending column.
        column: String,
        /// Type the caller asked for.
        expected: &'static str,
    },
    /// `SQLite` rejected the read.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to read column {column}")]
    Sqlite {
        /// Name of the offending column.
        column: String,
        /// Source error from `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
}

/// Errors returned by the [`Fort`](crate::Fort) constructors.
#[derive(Debug, Error)]
pub enum FortError {
    /// The cell index failed while deriving the region.
    #[error("failed to derive region for fort {id}")]
    Region {
        /// Identifier of the fort under construction.
        id: String,
        /// Failure reported by the cell index.
        #[source]
        source: CellIndexError,
    },
    /// A row lacked one of the identifying columns.
    #[error("row is missing required column {column}")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },
    /// Reading a row value failed.
    #[error(transparent)]
    Row(#[from] RowError),
}
