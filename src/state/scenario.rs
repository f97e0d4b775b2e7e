//! Scenario and round model
//!
//! A [`Scenario`] is the long-lived script a game runs against: the round
//! sequence with its reward matrices, the operating envelopes of the
//! production sources, and the day/night consumption profile of the
//! buildings. [`GameState`](super::GameState) holds a shared reference to
//! it; the scenario itself is immutable once built.

use std::collections::BTreeMap;
use std::fmt;

use crate::protocol::{
    Building, BuildingId, BuildingTable, ConsumptionCoefficients, ProductionRanges, Source,
    SourceId,
};

/// Default number of rounds in an alternating scenario
pub const DEFAULT_TOTAL_ROUNDS: u16 = 10;

/// Round type, determining expected generation and the reward matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundType {
    /// Solar generation expected
    Day,
    /// Minimal generation expected
    Night,
}

impl RoundType {
    /// Label used on the wire in game status messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for RoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points awarded per efficiency band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardMatrix {
    /// Production within 5% of consumption
    pub perfect: u32,
    /// Over-production (ratio above 1.05)
    pub over: u32,
    /// 5-10% under-production
    pub under_slight: u32,
    /// More than 10% under-production
    pub under_severe: u32,
}

impl RewardMatrix {
    /// Day rewards: slight under-production still earns a point
    pub const DAY: Self = Self {
        perfect: 10,
        over: 4,
        under_slight: 1,
        under_severe: 0,
    };

    /// Night rewards: any under-production is penalized
    pub const NIGHT: Self = Self {
        perfect: 10,
        over: 4,
        under_slight: 0,
        under_severe: 0,
    };

    /// The matrix a round type defaults to
    #[must_use]
    pub const fn for_round_type(round_type: RoundType) -> Self {
        match round_type {
            RoundType::Day => Self::DAY,
            RoundType::Night => Self::NIGHT,
        }
    }
}

/// Configuration of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundConfig {
    /// Day or night
    pub round_type: RoundType,
    /// Operator-facing description
    pub description: String,
    /// Points awarded per efficiency band this round
    pub rewards: RewardMatrix,
}

impl RoundConfig {
    /// Round with the default description and rewards for its type
    #[must_use]
    pub fn of_type(round_type: RoundType) -> Self {
        let description = match round_type {
            RoundType::Day => "Day round - solar generation expected",
            RoundType::Night => "Night round - minimal generation expected",
        };
        Self {
            round_type,
            description: description.to_string(),
            rewards: RewardMatrix::for_round_type(round_type),
        }
    }
}

/// The active game script: rounds, source envelopes, building profile
#[derive(Debug, Clone)]
pub struct Scenario {
    rounds: Vec<RoundConfig>,
    production_ranges: ProductionRanges,
    /// (day, night) consumption per building, watts
    building_consumptions: BTreeMap<BuildingId, (f64, f64)>,
    building_table_version: u32,
}

impl Scenario {
    /// Scenario of `total_rounds` rounds alternating day/night, starting
    /// with day, with no sources or buildings configured
    #[must_use]
    pub fn alternating(total_rounds: u16) -> Self {
        let rounds = (0..total_rounds)
            .map(|i| {
                if i % 2 == 0 {
                    RoundConfig::of_type(RoundType::Day)
                } else {
                    RoundConfig::of_type(RoundType::Night)
                }
            })
            .collect();

        Self {
            rounds,
            production_ranges: ProductionRanges::new(),
            building_consumptions: BTreeMap::new(),
            building_table_version: 1,
        }
    }

    /// The stock demo scenario: ten alternating rounds, every source
    /// unlocked, and the default city consumption profile
    #[must_use]
    pub fn demo() -> Self {
        let mut scenario = Self::alternating(DEFAULT_TOTAL_ROUNDS)
            .with_production_range(Source::Coal, 250.0, 500.0)
            .with_production_range(Source::Hydro, 0.0, 100.0)
            .with_production_range(Source::HydroStorage, -200.0, 200.0)
            .with_production_range(Source::Gas, 0.0, 500.0)
            .with_production_range(Source::Nuclear, 900.0, 1000.0)
            .with_production_range(Source::Wind, 0.0, 100.0)
            .with_production_range(Source::Photovoltaic, 0.0, 100.0)
            .with_production_range(Source::Battery, -200.0, 200.0);

        let consumptions: [(Building, f64, f64); 17] = [
            (Building::CityCenterA, 575.0, 200.0),
            (Building::CityCenterB, 600.0, 200.0),
            (Building::CityCenterC, 620.0, 200.0),
            (Building::CityCenterD, 550.0, 200.0),
            (Building::CityCenterE, 625.0, 200.0),
            (Building::CityCenterF, 550.0, 200.0),
            (Building::Factory, 400.0, 400.0),
            (Building::Stadium, 250.0, 400.0),
            (Building::Hospital, 350.0, 250.0),
            (Building::University, 400.0, 200.0),
            (Building::Airport, 500.0, 400.0),
            (Building::ShoppingMall, 350.0, 200.0),
            (Building::TechnologyCenter, 300.0, 250.0),
            (Building::Farm, 80.0, 40.0),
            (Building::LivingQuarterSmall, 70.0, 40.0),
            (Building::LivingQuarterLarge, 100.0, 60.0),
            (Building::School, 80.0, 30.0),
        ];
        for (building, day, night) in consumptions {
            scenario = scenario.with_building_consumption(building, day, night);
        }

        scenario
    }

    /// Add or replace a source's operating envelope
    #[must_use]
    pub fn with_production_range(
        mut self,
        source: impl Into<SourceId>,
        min_power: f64,
        max_power: f64,
    ) -> Self {
        self.production_ranges
            .insert(source.into(), (min_power, max_power));
        self
    }

    /// Add or replace a building's (day, night) consumption
    #[must_use]
    pub fn with_building_consumption(
        mut self,
        building: impl Into<BuildingId>,
        day: f64,
        night: f64,
    ) -> Self {
        self.building_consumptions
            .insert(building.into(), (day, night));
        self
    }

    /// Tag the building table with a version
    #[must_use]
    pub fn with_table_version(mut self, version: u32) -> Self {
        self.building_table_version = version;
        self
    }

    /// Number of rounds in the script
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn total_rounds(&self) -> u16 {
        self.rounds.len() as u16
    }

    /// Configuration of a round (1-based); `None` out of range
    #[must_use]
    pub fn round(&self, round: u16) -> Option<&RoundConfig> {
        if round == 0 {
            return None;
        }
        self.rounds.get(usize::from(round) - 1)
    }

    /// Round type of a round (1-based); day before the game starts or out
    /// of range
    #[must_use]
    pub fn round_type(&self, round: u16) -> RoundType {
        self.round(round)
            .map_or(RoundType::Day, |config| config.round_type)
    }

    /// Reward matrix of a round (1-based), falling back to the matrix of
    /// the round's type
    #[must_use]
    pub fn rewards(&self, round: u16) -> RewardMatrix {
        self.round(round)
            .map_or(RewardMatrix::DAY, |config| config.rewards)
    }

    /// Source operating envelopes, codec-ready
    #[must_use]
    pub fn production_ranges(&self) -> &ProductionRanges {
        &self.production_ranges
    }

    /// Building consumption coefficients for a round type, codec-ready
    #[must_use]
    pub fn consumption_coefficients(&self, round_type: RoundType) -> ConsumptionCoefficients {
        self.building_consumptions
            .iter()
            .map(|(building, (day, night))| {
                let value = match round_type {
                    RoundType::Day => *day,
                    RoundType::Night => *night,
                };
                (*building, value)
            })
            .collect()
    }

    /// Versioned building table carrying baseline (day) consumption in
    /// unscaled watts
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn building_table(&self) -> BuildingTable {
        let entries = self
            .building_consumptions
            .iter()
            .map(|(building, (day, _))| (*building, day.round() as i32))
            .collect();

        BuildingTable {
            version: self.building_table_version,
            entries,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::alternating(DEFAULT_TOTAL_ROUNDS)
    }
}
