//! Input adapters turning each inbound channel into a [`Fort`](crate::Fort).
//!
//! Each source has its own shape:
//! - [`FortRequest`]: a live player-submitted request;
//! - [`FortRow`]: a persisted row, addressed through [`FortColumns`];
//! - [`FortSummary`]: the compact remote wire message;
//! - [`FortDetails`]: the detailed remote wire message.
//!
//! The matching `Fort::from_*` constructors live alongside each shape.

mod request;
mod row;
mod wire;

#[cfg(feature = "serde")]
mod document;
#[cfg(feature = "store-sqlite")]
mod sqlite;

pub use request::FortRequest;
pub use row::{FortColumns, FortRow};
pub use wire::{FortDetails, FortSummary};
