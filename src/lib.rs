//! Facade crate for Fortwatch.
//!
//! This crate re-exports the core fort types and exposes the S2 cell index
//! behind the `s2` feature flag.

#![forbid(unsafe_code)]

pub use fortwatch_core::{
    CellIndex, CellIndexError, Ecosystem, Fort, FortColumns, FortDetails, FortDraft, FortError,
    FortRequest, FortRow, FortSummary, FortType, ParseFortTypeError, RegionCell, RemoteFortType,
    RowError, derive_region_id,
};

#[cfg(feature = "s2")]
pub use fortwatch_s2::{DEFAULT_REGION_LEVEL, MAX_REGION_LEVEL, S2CellIndex};
