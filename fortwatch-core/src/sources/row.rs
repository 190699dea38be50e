//! Persisted rows.
//!
//! Rows are addressed by column name through [`FortColumns`], so one
//! constructor serves every fort table whatever its naming.

use geo::Coord;

use crate::{CellIndex, Fort, FortDraft, FortError, FortType, RowError};

/// Column names of a persisted fort table.
///
/// Every fort table shares the same logical columns, but storage backends may
/// name them differently.
///
/// # Examples
/// ```
/// use fortwatch_core::FortColumns;
///
/// let columns = FortColumns {
///     cover_image: "image_url".to_owned(),
///     ..FortColumns::default()
/// };
/// assert_eq!(columns.id, "id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FortColumns {
    /// Identifier column. Required.
    pub id: String,
    /// Latitude column. Required.
    pub lat: String,
    /// Longitude column. Required.
    pub lon: String,
    /// Name column. Optional.
    pub name: String,
    /// Description column. Optional.
    pub description: String,
    /// Cover image column. Optional.
    pub cover_image: String,
}

impl Default for FortColumns {
    fn default() -> Self {
        Self {
            id: "id".to_owned(),
            lat: "lat".to_owned(),
            lon: "lon".to_owned(),
            name: "name".to_owned(),
            description: "description".to_owned(),
            cover_image: "cover_image".to_owned(),
        }
    }
}

/// Read access to a persisted fort row.
///
/// Implementations return `Ok(None)` both when the column is absent from the
/// row and when it holds a null value. Errors are reserved for values that
/// exist but cannot be read as the requested type.
pub trait FortRow {
    /// Read a text column.
    ///
    /// # Errors
    ///
    /// Returns a [`RowError`] when the value is not text.
    fn text(&self, column: &str) -> Result<Option<String>, RowError>;

    /// Read a floating-point column.
    ///
    /// # Errors
    ///
    /// Returns a [`RowError`] when the value is not a number.
    fn float(&self, column: &str) -> Result<Option<f64>, RowError>;
}

impl Fort {
    /// Build a fort from a persisted row.
    ///
    /// The type comes from the caller, typically from the table the row was
    /// read from. Optional columns that are missing or null become `None`.
    /// The region is derived from `cells`.
    ///
    /// # Errors
    ///
    /// Returns [`FortError::MissingColumn`] when an identifying column is
    /// absent, [`FortError::Row`] when a value has the wrong type, and
    /// [`FortError::Region`] when the cell index fails.
    pub fn from_row<R, C>(
        row: &R,
        columns: &FortColumns,
        fort_type: FortType,
        cells: &C,
    ) -> Result<Self, FortError>
    where
        R: FortRow + ?Sized,
        C: CellIndex + ?Sized,
    {
        let id = required(row.text(&columns.id)?, &columns.id)?;
        let lat = required(row.float(&columns.lat)?, &columns.lat)?;
        let lon = required(row.float(&columns.lon)?, &columns.lon)?;
        FortDraft {
            id,
            location: Coord { x: lon, y: lat },
            fort_type,
            name: row.text(&columns.name)?,
            description: row.text(&columns.description)?,
            cover_image: row.text(&columns.cover_image)?,
        }
        .locate(cells)
    }
}

fn required<T>(value: Option<T>, column: &str) -> Result<T, FortError> {
    value.ok_or_else(|| FortError::MissingColumn {
        column: column.to_owned(),
    })
}
