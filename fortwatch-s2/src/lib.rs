//! S2 geometry backed [`CellIndex`] for Fortwatch.
//!
//! Regions are S2 cells at a fixed level. Level 13 cells are a few square
//! kilometres, which keeps nearby forts in one partition.
//!
//! # Examples
//! ```
//! use fortwatch_core::{CellIndex, FortDraft, FortType};
//! use fortwatch_s2::S2CellIndex;
//! use geo::Coord;
//!
//! # fn main() -> Result<(), fortwatch_core::FortError> {
//! let cells = S2CellIndex::default();
//! let fort = FortDraft::new("gym-1", Coord { x: -75.0, y: 40.0 })
//!     .with_type(FortType::Gym)
//!     .locate(&cells)?;
//! assert!(fort.region_id().is_some());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use fortwatch_core::{CellIndex, CellIndexError, RegionCell};
use geo::Coord;
use log::debug;
use s2::{cellid::CellID, latlng::LatLng};

/// Level used when none is configured.
pub const DEFAULT_REGION_LEVEL: u8 = 13;

/// Deepest level of the S2 hierarchy.
pub const MAX_REGION_LEVEL: u8 = 30;

/// Maps locations onto S2 cells of a single level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct S2CellIndex {
    level: u8,
}

impl S2CellIndex {
    /// Create an index producing cells at `level`.
    ///
    /// # Errors
    ///
    /// Returns [`CellIndexError::InvalidLevel`] when `level` exceeds
    /// [`MAX_REGION_LEVEL`].
    pub const fn with_level(level: u8) -> Result<Self, CellIndexError> {
        if level > MAX_REGION_LEVEL {
            return Err(CellIndexError::InvalidLevel {
                level,
                max: MAX_REGION_LEVEL,
            });
        }
        Ok(Self { level })
    }

    /// Level of the produced cells.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }
}

impl Default for S2CellIndex {
    fn default() -> Self {
        Self {
            level: DEFAULT_REGION_LEVEL,
        }
    }
}

impl CellIndex for S2CellIndex {
    fn cell_for(&self, location: Coord<f64>) -> Result<RegionCell, CellIndexError> {
        let Coord { x: lon, y: lat } = location;
        if !lat.is_finite() || !lon.is_finite() {
            debug!("rejecting non-finite location (lat {lat}, lon {lon})");
            return Err(CellIndexError::InvalidLocation { lat, lon });
        }
        let leaf = CellID::from(LatLng::from_degrees(lat, lon));
        let cell = leaf.parent(u64::from(self.level));
        Ok(RegionCell::new(cell.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PHILADELPHIA: Coord<f64> = Coord { x: -75.0, y: 40.0 };

    fn cell(index: &S2CellIndex, location: Coord<f64>) -> u64 {
        index
            .cell_for(location)
            .map(RegionCell::id)
            .unwrap_or_else(|err| panic!("cell lookup failed: {err}"))
    }

    #[rstest]
    fn is_deterministic() {
        let index = S2CellIndex::default();
        assert_eq!(cell(&index, PHILADELPHIA), cell(&index, PHILADELPHIA));
    }

    #[rstest]
    #[case(0)]
    #[case(DEFAULT_REGION_LEVEL)]
    #[case(MAX_REGION_LEVEL)]
    fn produces_cells_at_configured_level(#[case] level: u8) {
        let index = S2CellIndex::with_level(level)
            .unwrap_or_else(|err| panic!("level {level} should be valid: {err}"));
        let id = cell(&index, PHILADELPHIA);
        assert_eq!(CellID(id).level(), u64::from(level));
    }

    #[rstest]
    fn nearby_points_share_a_cell() {
        let index = S2CellIndex::default();
        let nearby = Coord {
            x: -75.000_01,
            y: 40.000_01,
        };
        assert_eq!(cell(&index, PHILADELPHIA), cell(&index, nearby));
    }

    #[rstest]
    fn distant_points_differ() {
        let index = S2CellIndex::default();
        let london = Coord { x: -0.1276, y: 51.5072 };
        assert_ne!(cell(&index, PHILADELPHIA), cell(&index, london));
    }

    #[rstest]
    #[case(Coord { x: f64::NAN, y: 0.0 })]
    #[case(Coord { x: 0.0, y: f64::INFINITY })]
    fn rejects_non_finite_locations(#[case] location: Coord<f64>) {
        let result = S2CellIndex::default().cell_for(location);
        assert!(matches!(result, Err(CellIndexError::InvalidLocation { .. })));
    }

    #[rstest]
    fn rejects_levels_beyond_the_hierarchy() {
        assert_eq!(
            S2CellIndex::with_level(31),
            Err(CellIndexError::InvalidLevel { level: 31, max: 30 })
        );
    }
}
