//! Wire identifiers and typed message records

use std::collections::BTreeMap;
use std::fmt;

use super::{Result, codec};

/// Production source identifier as it appears on the wire (1 byte)
///
/// Packers accept either raw integers or the symbolic [`Source`] values;
/// both normalize to this newtype before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceId(u8);

impl SourceId {
    /// Create from a raw wire value
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw wire value
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<u8> for SourceId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Source> for SourceId {
    fn from(source: Source) -> Self {
        Self(source.as_u8())
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Building type identifier as it appears on the wire (1 byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingId(u8);

impl BuildingId {
    /// Create from a raw wire value
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw wire value
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<u8> for BuildingId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Building> for BuildingId {
    fn from(building: Building) -> Self {
        Self(building.as_u8())
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Symbolic production source types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Source {
    /// Coal plant (dispatchable baseload)
    Coal = 0,
    /// Run-of-river hydro
    Hydro = 1,
    /// Pumped hydro storage (may charge, producing negative power)
    HydroStorage = 2,
    /// Gas peaker plant
    Gas = 3,
    /// Nuclear plant
    Nuclear = 4,
    /// Wind turbine
    Wind = 5,
    /// Photovoltaic panel
    Photovoltaic = 6,
    /// Battery storage (may charge, producing negative power)
    Battery = 7,
}

impl Source {
    /// Convert from a wire byte
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Coal),
            1 => Some(Self::Hydro),
            2 => Some(Self::HydroStorage),
            3 => Some(Self::Gas),
            4 => Some(Self::Nuclear),
            5 => Some(Self::Wind),
            6 => Some(Self::Photovoltaic),
            7 => Some(Self::Battery),
            _ => None,
        }
    }

    /// Convert to a wire byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Coal => "coal",
            Self::Hydro => "hydro",
            Self::HydroStorage => "hydro_storage",
            Self::Gas => "gas",
            Self::Nuclear => "nuclear",
            Self::Wind => "wind",
            Self::Photovoltaic => "photovoltaic",
            Self::Battery => "battery",
        };
        write!(f, "{name}")
    }
}

/// Symbolic building types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Building {
    /// City center block A
    CityCenterA = 0,
    /// City center block B
    CityCenterB = 1,
    /// City center block C
    CityCenterC = 2,
    /// City center block D
    CityCenterD = 3,
    /// City center block E
    CityCenterE = 4,
    /// City center block F
    CityCenterF = 5,
    /// Factory
    Factory = 6,
    /// Stadium
    Stadium = 7,
    /// Hospital
    Hospital = 8,
    /// University
    University = 9,
    /// Airport
    Airport = 10,
    /// Shopping mall
    ShoppingMall = 11,
    /// Technology center
    TechnologyCenter = 12,
    /// Farm
    Farm = 13,
    /// Small living quarter
    LivingQuarterSmall = 14,
    /// Large living quarter
    LivingQuarterLarge = 15,
    /// School
    School = 16,
}

impl Building {
    /// Convert from a wire byte
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::CityCenterA),
            1 => Some(Self::CityCenterB),
            2 => Some(Self::CityCenterC),
            3 => Some(Self::CityCenterD),
            4 => Some(Self::CityCenterE),
            5 => Some(Self::CityCenterF),
            6 => Some(Self::Factory),
            7 => Some(Self::Stadium),
            8 => Some(Self::Hospital),
            9 => Some(Self::University),
            10 => Some(Self::Airport),
            11 => Some(Self::ShoppingMall),
            12 => Some(Self::TechnologyCenter),
            13 => Some(Self::Farm),
            14 => Some(Self::LivingQuarterSmall),
            15 => Some(Self::LivingQuarterLarge),
            16 => Some(Self::School),
            _ => None,
        }
    }

    /// Convert to a wire byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CityCenterA => "city_center_a",
            Self::CityCenterB => "city_center_b",
            Self::CityCenterC => "city_center_c",
            Self::CityCenterD => "city_center_d",
            Self::CityCenterE => "city_center_e",
            Self::CityCenterF => "city_center_f",
            Self::Factory => "factory",
            Self::Stadium => "stadium",
            Self::Hospital => "hospital",
            Self::University => "university",
            Self::Airport => "airport",
            Self::ShoppingMall => "shopping_mall",
            Self::TechnologyCenter => "technology_center",
            Self::Farm => "farm",
            Self::LivingQuarterSmall => "living_quarter_small",
            Self::LivingQuarterLarge => "living_quarter_large",
            Self::School => "school",
        };
        write!(f, "{name}")
    }
}

/// Production coefficients keyed by source identifier (watts)
///
/// `BTreeMap` keeps entry order deterministic on the wire.
pub type ProductionCoefficients = BTreeMap<SourceId, f64>;

/// Consumption coefficients keyed by building identifier (watts)
pub type ConsumptionCoefficients = BTreeMap<BuildingId, f64>;

/// Operating envelopes (min, max) for dispatchable sources (watts)
pub type ProductionRanges = BTreeMap<SourceId, (f64, f64)>;

/// Board registration request: id(4) + name(32) + type(16)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistrationRequest {
    /// Board identifier, assigned by the client
    pub board_id: u32,
    /// Human-readable board name (up to 32 bytes)
    pub name: String,
    /// Board hardware type (up to 16 bytes)
    pub board_type: String,
}

impl RegistrationRequest {
    /// Encode to the 52-byte wire form
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        codec::pack_registration_request(self.board_id, &self.name, &self.board_type)
    }

    /// Decode from the wire form
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        codec::unpack_registration_request(bytes)
    }
}

/// Board registration response: success(1) + msg_len(1) + message
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistrationResponse {
    /// Whether the registration was accepted
    pub success: bool,
    /// Status message (truncated to 255 bytes on the wire)
    pub message: String,
}

impl RegistrationResponse {
    /// Encode to the wire form
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        codec::pack_registration_response(self.success, &self.message)
    }

    /// Decode from the wire form
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        codec::unpack_registration_response(bytes)
    }
}

/// Power telemetry snapshot: production(4) + consumption(4), fixed-point
///
/// The 8-byte layout is bidirectional: server-to-board expected values and
/// board-to-server reports share it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerValues {
    /// Produced power in watts
    pub production: f64,
    /// Consumed power in watts
    pub consumption: f64,
}

impl PowerValues {
    /// Encode to the 8-byte wire form
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        codec::pack_power_data(self.production, self.consumption)
    }

    /// Decode from the wire form
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        codec::unpack_power_values(bytes)
    }
}

/// Versioned building consumption table
///
/// Consumption values are raw watts, deliberately not fixed-point scaled
/// (unlike coefficient tables). The version is a monotonically-assigned tag;
/// the codec does not enforce that it increases.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingTable {
    /// Table version tag
    pub version: u32,
    /// Baseline consumption per building type (unscaled watts)
    pub entries: BTreeMap<BuildingId, i32>,
}

impl BuildingTable {
    /// Encode to the wire form
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        codec::pack_building_table(&self.entries, self.version)
    }

    /// Decode from the wire form
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        codec::unpack_building_table(bytes)
    }
}

/// Game status poll response
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStatus {
    /// Current round number (1-based; 0 before the game starts)
    pub current_round: u16,
    /// Total rounds in the scenario
    pub total_rounds: u16,
    /// Round type label, e.g. "day" or "night"
    pub round_type: String,
    /// Whether the server still expects telemetry for this round
    pub expecting_data: bool,
}

impl GameStatus {
    /// Encode to the wire form
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        codec::pack_game_status(
            self.current_round,
            self.total_rounds,
            &self.round_type,
            self.expecting_data,
        )
    }

    /// Decode from the wire form
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        codec::unpack_game_status(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_roundtrip() {
        for value in 0..=7u8 {
            let source = Source::from_u8(value).unwrap();
            assert_eq!(source.as_u8(), value);
        }
        assert!(Source::from_u8(8).is_none());
    }

    #[test]
    fn test_building_roundtrip() {
        for value in 0..=16u8 {
            let building = Building::from_u8(value).unwrap();
            assert_eq!(building.as_u8(), value);
        }
        assert!(Building::from_u8(17).is_none());
    }

    #[test]
    fn test_id_accepts_raw_and_symbolic() {
        let raw: SourceId = 7u8.into();
        let symbolic: SourceId = Source::Battery.into();
        assert_eq!(raw, symbolic);

        let raw: BuildingId = 7u8.into();
        let symbolic: BuildingId = Building::Stadium.into();
        assert_eq!(raw, symbolic);
    }
}
