use geo::Coord;

use crate::{CellIndex, Fort, FortDraft, FortError, FortType};

/// A fort submitted live by a player.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FortRequest {
    /// Identifier within the source ecosystem.
    pub id: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Display name, if supplied.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Description, if supplied.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// Cover image URL, if supplied.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cover_image: Option<String>,
}

impl Fort {
    /// Build a fort from a live request.
    ///
    /// The type is decided by the caller. Descriptive fields are copied
    /// verbatim and the region is derived from `cells`.
    ///
    /// # Errors
    ///
    /// Returns [`FortError::Region`] when the cell index fails.
    pub fn from_request<C>(
        request: FortRequest,
        fort_type: FortType,
        cells: &C,
    ) -> Result<Self, FortError>
    where
        C: CellIndex + ?Sized,
    {
        FortDraft {
            id: request.id,
            location: Coord {
                x: request.lon,
                y: request.lat,
            },
            fort_type,
            name: request.name,
            description: request.description,
            cover_image: request.cover_image,
        }
        .locate(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::GridCellIndex;
    use rstest::{fixture, rstest};

    #[fixture]
    fn request() -> FortRequest {
        FortRequest {
            id: "req-1".to_owned(),
            lat: 40.0,
            lon: -75.0,
            name: Some("Clock Tower".to_owned()),
            description: None,
            cover_image: Some(String::new()),
        }
    }

    #[rstest]
    fn copies_fields_verbatim(request: FortRequest) -> Result<(), FortError> {
        let fort = Fort::from_request(request, FortType::Pokestop, &GridCellIndex)?;
        assert_eq!(fort.id(), "req-1");
        assert_eq!(fort.location(), Coord { x: -75.0, y: 40.0 });
        assert_eq!(fort.name(), Some("Clock Tower"));
        assert_eq!(fort.description(), None);
        assert_eq!(fort.cover_image(), Some(""));
        assert!(fort.region_id().is_some());
        Ok(())
    }

    #[rstest]
    fn portal_requests_have_no_region(request: FortRequest) -> Result<(), FortError> {
        let fort = Fort::from_request(request, FortType::Portal, &GridCellIndex)?;
        assert_eq!(fort.region_id(), None);
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_without_optional_fields() -> Result<(), serde_json::Error> {
        let request: FortRequest =
            serde_json::from_str(r#"{"id":"r","lat":1.5,"lon":2.5}"#)?;
        assert_eq!(request.name, None);
        assert_eq!(request.cover_image, None);
        Ok(())
    }
}
