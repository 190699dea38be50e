//! Deterministic `CellIndex` doubles used by unit and behaviour tests.
//!
//! Compiled for this crate's unit tests and behind the `test-support` feature.

use std::cell::Cell;

use geo::Coord;

use crate::{CellIndex, CellIndexError, RegionCell};

/// One-degree grid index.
///
/// Cells are numbered row-major from the south-west corner of the globe, so
/// every point inside the same whole-degree square shares an identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct GridCellIndex;

impl CellIndex for GridCellIndex {
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "coordinates are checked to be finite and shifted to non-negative degrees"
    )]
    fn cell_for(&self, location: Coord<f64>) -> Result<RegionCell, CellIndexError> {
        if !location.x.is_finite() || !location.y.is_finite() {
            return Err(CellIndexError::InvalidLocation {
                lat: location.y,
                lon: location.x,
            });
        }
        let row = (location.y + 90.0).floor().max(0.0) as u64;
        let column = (location.x + 180.0).floor().max(0.0) as u64;
        Ok(RegionCell::new(row * 360 + column))
    }
}

/// Grid index that records how often it was consulted.
#[derive(Debug, Default)]
pub struct CountingCellIndex {
    calls: Cell<usize>,
}

impl CountingCellIndex {
    /// Number of lookups served so far.
    #[must_use]
    pub const fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl CellIndex for CountingCellIndex {
    fn cell_for(&self, location: Coord<f64>) -> Result<RegionCell, CellIndexError> {
        self.calls.set(self.calls.get() + 1);
        GridCellIndex.cell_for(location)
    }
}

/// Index that is always unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingCellIndex;

impl CellIndex for FailingCellIndex {
    fn cell_for(&self, _location: Coord<f64>) -> Result<RegionCell, CellIndexError> {
        Err(CellIndexError::Unavailable {
            reason: "cell index offline".to_owned(),
        })
    }
}
