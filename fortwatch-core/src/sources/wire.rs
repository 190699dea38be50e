//! Remote wire messages.
//!
//! Decoding the wire format is the caller's job; these structs carry the
//! decoded fields.

use geo::Coord;
use log::debug;

use crate::{CellIndex, Fort, FortDraft, FortError, FortType};

/// Compact fort message as listed in map cell responses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FortSummary {
    /// Identifier of the fort.
    pub fort_id: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Raw wire type code; see [`crate::RemoteFortType`].
    pub fort_type: i32,
}

/// Detailed fort message.
///
/// Empty strings and lists stand for "not supplied".
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FortDetails {
    /// Identifier of the fort.
    pub id: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Raw wire type code; see [`crate::RemoteFortType`].
    pub fort_type: i32,
    /// Display name; may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Description; may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Image URLs in wire order; may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: Vec<String>,
}

impl Fort {
    /// Build a fort from a compact wire message.
    ///
    /// `region_id` is the cell the message was listed under. It is stored as
    /// given, so no cell lookup happens here. Descriptive fields stay empty.
    #[must_use]
    pub fn from_summary(summary: FortSummary, region_id: u64) -> Self {
        FortDraft::new(
            summary.fort_id,
            Coord {
                x: summary.longitude,
                y: summary.latitude,
            },
        )
        .with_type(FortType::from_remote_code(summary.fort_type))
        .with_region_id(region_id)
    }

    /// Build a fort from a detailed wire message.
    ///
    /// Empty names and descriptions become `None`. Only the first image URL
    /// is kept as the cover image. The region is derived from `cells`.
    ///
    /// # Errors
    ///
    /// Returns [`FortError::Region`] when the cell index fails.
    pub fn from_details<C>(details: FortDetails, cells: &C) -> Result<Self, FortError>
    where
        C: CellIndex + ?Sized,
    {
        let FortDetails {
            id,
            latitude,
            longitude,
            fort_type,
            name,
            description,
            image_url,
        } = details;
        if image_url.len() > 1 {
            debug!(
                "fort {id} lists {} image URLs; keeping the first",
                image_url.len()
            );
        }
        FortDraft {
            id,
            location: Coord {
                x: longitude,
                y: latitude,
            },
            fort_type: FortType::from_remote_code(fort_type),
            name: non_empty(name),
            description: non_empty(description),
            cover_image: image_url.into_iter().next(),
        }
        .locate(cells)
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
