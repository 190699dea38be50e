//! Region assignment for forts.
//!
//! Forts from ecosystems that partition the map into geodesic cells carry a
//! coarse region identifier. The cell maths lives behind the [`CellIndex`]
//! trait so callers can plug in any indexing library.

use geo::Coord;
use thiserror::Error;

use crate::Ecosystem;

/// A geodesic cell returned by a [`CellIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionCell(u64);

impl RegionCell {
    /// Wrap a raw cell identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Numeric identifier of the cell.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Errors raised by a [`CellIndex`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellIndexError {
    /// The coordinate cannot be placed on the sphere.
    #[error("location (lat {lat}, lon {lon}) cannot be mapped to a cell")]
    InvalidLocation {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
    /// The index was configured with a level it does not support.
    #[error("cell level {level} exceeds the maximum level {max}")]
    InvalidLevel {
        /// Requested level.
        level: u8,
        /// Deepest supported level.
        max: u8,
    },
    /// The index could not answer, e.g. because a remote backend is down.
    #[error("cell index unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
}

/// Maps locations onto geodesic cells.
///
/// Implementations must be deterministic: the same coordinate always yields
/// the same cell. Coordinates are WGS84 with `x = longitude` and
/// `y = latitude`.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use fortwatch_core::{CellIndex, CellIndexError, RegionCell};
///
/// struct Quadrants;
///
/// impl CellIndex for Quadrants {
///     fn cell_for(&self, location: Coord<f64>) -> Result<RegionCell, CellIndexError> {
///         let id = u64::from(location.x >= 0.0) * 2 + u64::from(location.y >= 0.0);
///         Ok(RegionCell::new(id))
///     }
/// }
///
/// let cell = Quadrants.cell_for(Coord { x: 1.0, y: -1.0 }).unwrap();
/// assert_eq!(cell.id(), 2);
/// ```
pub trait CellIndex {
    /// Return the cell containing `location`.
    ///
    /// # Errors
    ///
    /// Returns a [`CellIndexError`] when the location cannot be placed or the
    /// index cannot answer.
    fn cell_for(&self, location: Coord<f64>) -> Result<RegionCell, CellIndexError>;
}

impl<T: CellIndex + ?Sized> CellIndex for &T {
    fn cell_for(&self, location: Coord<f64>) -> Result<RegionCell, CellIndexError> {
        (**self).cell_for(location)
    }
}

/// Derive the region identifier for a fort at `location`.
///
/// Only ecosystems that [support regions](Ecosystem::supports_regions)
/// consult `cells`; every other ecosystem yields `Ok(None)` without calling
/// the index.
///
/// # Errors
///
/// Index failures propagate unchanged.
pub fn derive_region_id<C>(
    ecosystem: Ecosystem,
    location: Coord<f64>,
    cells: &C,
) -> Result<Option<u64>, CellIndexError>
where
    C: CellIndex + ?Sized,
{
    if !ecosystem.supports_regions() {
        return Ok(None);
    }
    cells.cell_for(location).map(|cell| Some(cell.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingCellIndex, FailingCellIndex, GridCellIndex};
    use rstest::rstest;

    const LOCATION: Coord<f64> = Coord { x: -75.0, y: 40.0 };

    #[rstest]
    fn derives_cell_for_pokemon_go() {
        let cells = GridCellIndex;
        let expected = cells.cell_for(LOCATION).map(RegionCell::id);
        let derived = derive_region_id(Ecosystem::PokemonGo, LOCATION, &cells);
        assert_eq!(derived, expected.map(Some));
    }

    #[rstest]
    #[case(Ecosystem::Unknown)]
    #[case(Ecosystem::Ingress)]
    #[case(Ecosystem::Lightship)]
    fn skips_index_for_other_ecosystems(#[case] ecosystem: Ecosystem) {
        let cells = CountingCellIndex::default();
        assert_eq!(derive_region_id(ecosystem, LOCATION, &cells), Ok(None));
        assert_eq!(cells.calls(), 0);
    }

    #[rstest]
    fn propagates_index_failure() {
        let result = derive_region_id(Ecosystem::PokemonGo, LOCATION, &FailingCellIndex);
        assert!(matches!(result, Err(CellIndexError::Unavailable { .. })));
    }

    #[rstest]
    fn accepts_trait_objects() {
        let cells: &dyn CellIndex = &GridCellIndex;
        assert!(matches!(
            derive_region_id(Ecosystem::PokemonGo, LOCATION, cells),
            Ok(Some(_))
        ));
    }
}
