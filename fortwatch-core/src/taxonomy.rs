//! Ecosystems and the normalised fort type taxonomy.
//!
//! Every game reports its own flavour of point of interest. [`FortType`]
//! collapses them into one closed set and [`Ecosystem`] names the game that
//! owns each type. Both enums carry a numeric rank; a type's ecosystem is the
//! rank band it falls into.
//!
//! # Examples
//! ```
//! use fortwatch_core::{Ecosystem, FortType};
//!
//! assert_eq!(FortType::Portal.ecosystem(), Ecosystem::Ingress);
//! assert_eq!(FortType::from_remote_code(0), FortType::Gym);
//! assert_eq!(FortType::from_remote_code(7), FortType::Pokestop);
//! ```

use std::{fmt, str::FromStr};

use log::debug;
use thiserror::Error;

/// Rank at which Lightship types begin.
const LIGHTSHIP_RANK: u8 = 30;
/// Rank at which Ingress types begin.
const INGRESS_RANK: u8 = 20;
/// Rank at which Pokémon GO types begin.
const POKEMON_GO_RANK: u8 = 10;

/// The game or platform that originated a fort observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Ecosystem {
    /// The originating game could not be determined.
    Unknown = 0,
    /// Pokémon GO. The only ecosystem partitioned into geodesic cells.
    PokemonGo = POKEMON_GO_RANK,
    /// Ingress.
    Ingress = INGRESS_RANK,
    /// Niantic Lightship.
    Lightship = LIGHTSHIP_RANK,
}

impl Ecosystem {
    /// Every ecosystem in rank order.
    pub const ALL: [Self; 4] = [Self::Unknown, Self::PokemonGo, Self::Ingress, Self::Lightship];

    /// Numeric rank used for "at least as advanced as" comparisons.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Map a raw fort type rank onto its owning ecosystem.
    ///
    /// Ranks outside every band (including ranks that are not a known
    /// [`FortType`]) fall back to [`Ecosystem::Unknown`] below the first band.
    ///
    /// # Examples
    /// ```
    /// use fortwatch_core::Ecosystem;
    ///
    /// assert_eq!(Ecosystem::from_type_rank(15), Ecosystem::PokemonGo);
    /// assert_eq!(Ecosystem::from_type_rank(99), Ecosystem::Lightship);
    /// assert_eq!(Ecosystem::from_type_rank(3), Ecosystem::Unknown);
    /// ```
    #[must_use]
    pub const fn from_type_rank(rank: u8) -> Self {
        if rank >= LIGHTSHIP_RANK {
            Self::Lightship
        } else if rank >= INGRESS_RANK {
            Self::Ingress
        } else if rank >= POKEMON_GO_RANK {
            Self::PokemonGo
        } else {
            Self::Unknown
        }
    }

    /// Report whether forts from this ecosystem are assigned a region cell.
    #[must_use]
    pub const fn supports_regions(self) -> bool {
        match self {
            Self::PokemonGo => true,
            Self::Unknown | Self::Ingress | Self::Lightship => false,
        }
    }

    /// Return the ecosystem as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::PokemonGo => "pokemon_go",
            Self::Ingress => "ingress",
            Self::Lightship => "lightship",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fort type code as carried by remote wire messages.
///
/// The wire format only distinguishes gyms from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum RemoteFortType {
    /// A gym.
    Gym = 0,
    /// A checkpoint, which is what the wire format calls a Pokéstop.
    Checkpoint = 1,
}

impl RemoteFortType {
    /// Decode a raw wire code, returning `None` for values outside the enum.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Gym),
            1 => Some(Self::Checkpoint),
            _ => None,
        }
    }

    /// Raw wire code for this value.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Ecosystem-agnostic classification of a fort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum FortType {
    /// Type not reported.
    #[default]
    Unknown = 0,
    /// Pokémon GO gym.
    Gym = 10,
    /// Pokémon GO Pokéstop.
    Pokestop = 15,
    /// Ingress portal.
    Portal = 20,
    /// Generic Lightship point of interest.
    LightshipPoi = 30,
}

impl FortType {
    /// Every fort type in rank order.
    pub const ALL: [Self; 5] = [
        Self::Unknown,
        Self::Gym,
        Self::Pokestop,
        Self::Portal,
        Self::LightshipPoi,
    ];

    /// Numeric rank of this type.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Look up the type with the given rank.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Unknown),
            10 => Some(Self::Gym),
            15 => Some(Self::Pokestop),
            20 => Some(Self::Portal),
            30 => Some(Self::LightshipPoi),
            _ => None,
        }
    }

    /// The ecosystem this type belongs to.
    ///
    /// Agrees with [`Ecosystem::from_type_rank`] for every variant.
    #[must_use]
    pub const fn ecosystem(self) -> Ecosystem {
        match self {
            Self::Unknown => Ecosystem::Unknown,
            Self::Gym | Self::Pokestop => Ecosystem::PokemonGo,
            Self::Portal => Ecosystem::Ingress,
            Self::LightshipPoi => Ecosystem::Lightship,
        }
    }

    /// Classify a remote wire type.
    #[must_use]
    pub const fn from_remote(remote: RemoteFortType) -> Self {
        match remote {
            RemoteFortType::Gym => Self::Gym,
            RemoteFortType::Checkpoint => Self::Pokestop,
        }
    }

    /// Classify a raw remote wire code.
    ///
    /// Only the gym code maps to [`FortType::Gym`]; every other value,
    /// including codes outside the wire enum, maps to [`FortType::Pokestop`].
    #[must_use]
    pub fn from_remote_code(code: i32) -> Self {
        RemoteFortType::from_code(code).map_or_else(
            || {
                debug!("unrecognised remote fort type code {code}; treating as pokestop");
                Self::Pokestop
            },
            Self::from_remote,
        )
    }

    /// Return the type as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use fortwatch_core::FortType;
    ///
    /// assert_eq!(FortType::LightshipPoi.as_str(), "lightship_poi");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Gym => "gym",
            Self::Pokestop => "pokestop",
            Self::Portal => "portal",
            Self::LightshipPoi => "lightship_poi",
        }
    }

    /// Title-case label used in diagnostic output.
    ///
    /// Each underscore-separated word of [`FortType::as_str`] is capitalised.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Gym => "Gym",
            Self::Pokestop => "Pokestop",
            Self::Portal => "Portal",
            Self::LightshipPoi => "Lightship_Poi",
        }
    }
}

impl fmt::Display for FortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type tag does not name a [`FortType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fort type '{tag}'")]
pub struct ParseFortTypeError {
    /// The rejected tag.
    pub tag: String,
}

impl FromStr for FortType {
    type Err = ParseFortTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "gym" => Ok(Self::Gym),
            "pokestop" => Ok(Self::Pokestop),
            "portal" => Ok(Self::Portal),
            "lightship_poi" => Ok(Self::LightshipPoi),
            _ => Err(ParseFortTypeError { tag: s.to_owned() }),
        }
    }
}
