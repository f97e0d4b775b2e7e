//! gridlink wire protocol implementation
//!
//! This module provides the fixed-layout message formats exchanged with
//! embedded boards: registration, power telemetry, coefficient/range tables,
//! building tables, and status polling. Everything is big-endian and
//! self-describing length-wise; there is no outer framing layer.

mod codec;
mod error;
mod strings;
mod types;
mod wire;

pub use codec::{
    pack_building_table, pack_coefficients_response, pack_consumption_values, pack_game_status,
    pack_power_data, pack_production_ranges, pack_production_values, pack_registration_request,
    pack_registration_response, unpack_building_table, unpack_game_status, unpack_power_values,
    unpack_registration_request, unpack_registration_response,
};
pub use error::{Error, Result};
pub use strings::{pack_string, unpack_string, unpack_string_strict};
pub use types::{
    Building, BuildingId, BuildingTable, ConsumptionCoefficients, GameStatus, PowerValues,
    ProductionCoefficients, ProductionRanges, RegistrationRequest, RegistrationResponse, Source,
    SourceId,
};
pub use wire::{
    from_milli, pack_f32, pack_i32, pack_u32, to_milli, unpack_f32, unpack_i32, unpack_u32,
};

/// Maximum board name length in a registration request (null-padded)
pub const BOARD_NAME_LEN: usize = 32;

/// Maximum board type length in a registration request (null-padded)
pub const BOARD_TYPE_LEN: usize = 16;

/// Registration request size: id(4) + name(32) + type(16)
pub const REGISTRATION_REQUEST_LEN: usize = 52;

/// Power telemetry size: production(4) + consumption(4)
pub const POWER_DATA_LEN: usize = 8;

/// Maximum byte length of any length-prefixed text field
pub const MAX_MESSAGE_LEN: usize = 255;

/// Coefficient table entry size: id(1) + value(4)
pub const COEFFICIENT_ENTRY_LEN: usize = 5;

/// Production range entry size: id(1) + min(4) + max(4)
pub const RANGE_ENTRY_LEN: usize = 9;

/// Building table header size: version(4) + count(1)
pub const BUILDING_TABLE_HEADER_LEN: usize = 5;

/// Building table entry size: type(1) + consumption(4)
pub const BUILDING_ENTRY_LEN: usize = 5;

/// Game status minimum size: round(2) + total(2) + type_len(1) + flag(1)
pub const GAME_STATUS_MIN_LEN: usize = 6;
