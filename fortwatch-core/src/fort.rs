//! The canonical fort record.
//!
//! A [`Fort`] is built once per observation, either through one of the
//! source adapters in [`crate::sources`] or directly from a [`FortDraft`].
//! Afterwards the only permitted change is [`Fort::merge_from`], which fills
//! descriptive fields that are still unknown.

use std::fmt;

use geo::Coord;
use log::debug;

use crate::{CellIndex, Ecosystem, FortError, FortType, derive_region_id};

/// Unvalidated fort fields awaiting region assignment.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fortwatch_core::{Ecosystem, FortDraft, FortType};
///
/// let fort = FortDraft::new("portal-1", Coord { x: -75.0, y: 40.0 })
///     .with_type(FortType::Portal)
///     .with_name("Fountain")
///     .with_region_id(7);
///
/// assert_eq!(fort.ecosystem(), Ecosystem::Ingress);
/// assert_eq!(fort.region_id(), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FortDraft {
    /// Identifier within the source ecosystem.
    pub id: String,
    /// WGS84 position with `x = longitude` and `y = latitude`.
    pub location: Coord<f64>,
    /// Normalised type.
    pub fort_type: FortType,
    /// Display name, if known.
    pub name: Option<String>,
    /// Free-text description, if known.
    pub description: Option<String>,
    /// Cover image URL, if known.
    pub cover_image: Option<String>,
}

impl FortDraft {
    /// Start a draft with an unknown type and no descriptive fields.
    pub fn new(id: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            location,
            fort_type: FortType::Unknown,
            name: None,
            description: None,
            cover_image: None,
        }
    }

    /// Set the fort type.
    #[must_use]
    pub const fn with_type(mut self, fort_type: FortType) -> Self {
        self.fort_type = fort_type;
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the cover image URL.
    #[must_use]
    pub fn with_cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    /// Finish the draft, deriving the region from `cells`.
    ///
    /// # Errors
    ///
    /// Returns [`FortError::Region`] when the cell index fails.
    pub fn locate<C>(self, cells: &C) -> Result<Fort, FortError>
    where
        C: CellIndex + ?Sized,
    {
        self.build(None, cells)
    }

    /// Finish the draft with a region computed upstream.
    ///
    /// The region is stored as given, whatever the fort's ecosystem.
    #[must_use]
    pub fn with_region_id(self, region_id: u64) -> Fort {
        self.into_fort(Some(region_id))
    }

    /// Finish the draft.
    ///
    /// An explicit `region_id` always wins. Without one the region is derived
    /// from `cells` when the fort's ecosystem is partitioned into cells, and
    /// left empty otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FortError::Region`] when the cell index fails. No fort is
    /// produced in that case.
    pub fn build<C>(self, region_id: Option<u64>, cells: &C) -> Result<Fort, FortError>
    where
        C: CellIndex + ?Sized,
    {
        let resolved = match region_id {
            Some(explicit) => Some(explicit),
            None => derive_region_id(self.fort_type.ecosystem(), self.location, cells)
                .map_err(|source| FortError::Region {
                    id: self.id.clone(),
                    source,
                })?,
        };
        Ok(self.into_fort(resolved))
    }

    fn into_fort(self, region_id: Option<u64>) -> Fort {
        Fort {
            ecosystem: self.fort_type.ecosystem(),
            id: self.id,
            location: self.location,
            fort_type: self.fort_type,
            name: self.name,
            description: self.description,
            cover_image: self.cover_image,
            region_id,
        }
    }
}

/// A single physical point of interest, normalised across games.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fort {
    id: String,
    location: Coord<f64>,
    fort_type: FortType,
    ecosystem: Ecosystem,
    name: Option<String>,
    description: Option<String>,
    cover_image: Option<String>,
    region_id: Option<u64>,
}

impl Fort {
    /// Identifier within the source ecosystem.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// WGS84 position with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    /// Normalised type.
    #[must_use]
    pub const fn fort_type(&self) -> FortType {
        self.fort_type
    }

    /// Ecosystem owning [`Fort::fort_type`].
    #[must_use]
    pub const fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    /// Display name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Free-text description, if known.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Cover image URL, if known.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }

    /// Coarse region cell, if the fort has one.
    #[must_use]
    pub const fn region_id(&self) -> Option<u64> {
        self.region_id
    }

    /// Backfill descriptive fields from another observation of this place.
    ///
    /// Each of name, description and cover image is copied from `other` only
    /// when this fort has no value for it. Present values are never replaced
    /// or cleared, so repeating the merge changes nothing. Identity, location,
    /// type and region are left alone.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use fortwatch_core::FortDraft;
    ///
    /// let origin = Coord { x: 0.0, y: 0.0 };
    /// let mut fort = FortDraft::new("a", origin).with_name("Alpha").with_region_id(1);
    /// let other = FortDraft::new("a", origin)
    ///     .with_name("Beta")
    ///     .with_description("desc")
    ///     .with_region_id(1);
    ///
    /// fort.merge_from(&other);
    /// assert_eq!(fort.name(), Some("Alpha"));
    /// assert_eq!(fort.description(), Some("desc"));
    /// ```
    pub fn merge_from(&mut self, other: &Self) {
        let Self {
            id,
            name,
            description,
            cover_image,
            ..
        } = self;
        let slots = [
            ("name", name, other.name.as_ref()),
            ("description", description, other.description.as_ref()),
            ("cover_image", cover_image, other.cover_image.as_ref()),
        ];
        for (field, slot, donor) in slots {
            if slot.is_none()
                && let Some(value) = donor
            {
                debug!("backfilled {field} of fort {id} from {}", other.id);
                *slot = Some(value.clone());
            }
        }
    }
}

impl fmt::Display for Fort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.fort_type.label())?;
        if let Some(name) = &self.name {
            write!(f, "name='{name}', ")?;
        }
        write!(f, "id={})", self.id)
    }
}
