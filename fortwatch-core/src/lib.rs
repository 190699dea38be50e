//! Core domain types for Fortwatch.
//!
//! Location games each report their own view of the same physical points of
//! interest. This crate normalises those reports into one [`Fort`] record:
//!
//! - [`FortType`] and [`Ecosystem`] form the shared taxonomy;
//! - the `Fort::from_*` constructors adapt each inbound channel;
//! - [`CellIndex`] is the seam to a geodesic cell library used for regions;
//! - [`Fort::merge_from`] backfills fields from a second observation.
//!
//! Deciding which observations describe the same place, persistence and I/O
//! are left to callers.

#![forbid(unsafe_code)]

mod error;
mod fort;
mod region;
mod sources;
mod taxonomy;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{FortError, RowError};
pub use fort::{Fort, FortDraft};
pub use region::{CellIndex, CellIndexError, RegionCell, derive_region_id};
pub use sources::{FortColumns, FortDetails, FortRequest, FortRow, FortSummary};
pub use taxonomy::{Ecosystem, FortType, ParseFortTypeError, RemoteFortType};
