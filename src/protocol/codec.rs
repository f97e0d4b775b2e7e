//! Message codec (pack/unpack)
//!
//! Per-message encode/decode for every frame the server exchanges with
//! boards. Packers write big-endian through [`bytes::BufMut`]; unpackers
//! validate buffer lengths up front and then slice with the primitive codec.

use bytes::BufMut;

use super::{
    BOARD_NAME_LEN, BOARD_TYPE_LEN, BUILDING_ENTRY_LEN, BUILDING_TABLE_HEADER_LEN,
    COEFFICIENT_ENTRY_LEN, Error, GAME_STATUS_MIN_LEN, MAX_MESSAGE_LEN, POWER_DATA_LEN,
    RANGE_ENTRY_LEN, REGISTRATION_REQUEST_LEN, Result, strings, wire,
};
use super::{
    BuildingId, BuildingTable, ConsumptionCoefficients, GameStatus, PowerValues,
    ProductionCoefficients, ProductionRanges, RegistrationRequest, RegistrationResponse,
};
use std::collections::BTreeMap;

/// Pack a board registration request
///
/// Format: `board_id(4) + board_name(32) + board_type(16)` = 52 bytes, fixed.
#[must_use]
pub fn pack_registration_request(board_id: u32, name: &str, board_type: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(REGISTRATION_REQUEST_LEN);
    buf.put_u32(board_id);
    buf.put_slice(&strings::pack_string(name, BOARD_NAME_LEN));
    buf.put_slice(&strings::pack_string(board_type, BOARD_TYPE_LEN));
    buf
}

/// Unpack a board registration request
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if fewer than 52 bytes are supplied.
pub fn unpack_registration_request(bytes: &[u8]) -> Result<RegistrationRequest> {
    if bytes.len() < REGISTRATION_REQUEST_LEN {
        return Err(Error::BufferTooSmall {
            needed: REGISTRATION_REQUEST_LEN,
            got: bytes.len(),
        });
    }

    let board_id = wire::unpack_u32(&bytes[0..4]);
    let name = strings::unpack_string(&bytes[4..4 + BOARD_NAME_LEN]);
    let board_type = strings::unpack_string(&bytes[4 + BOARD_NAME_LEN..REGISTRATION_REQUEST_LEN]);

    Ok(RegistrationRequest {
        board_id,
        name,
        board_type,
    })
}

/// Pack a registration response
///
/// Format: `success(1) + message_len(1) + message`. The message is silently
/// truncated to 255 bytes before the length byte is computed.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn pack_registration_response(success: bool, message: &str) -> Vec<u8> {
    let message_bytes = &message.as_bytes()[..message.len().min(MAX_MESSAGE_LEN)];

    let mut buf = Vec::with_capacity(2 + message_bytes.len());
    buf.put_u8(u8::from(success));
    buf.put_u8(message_bytes.len() as u8);
    buf.put_slice(message_bytes);
    buf
}

/// Unpack a registration response
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] for fewer than 2 bytes, or
/// [`Error::LengthOverrun`] if the declared message length exceeds the
/// remaining buffer.
pub fn unpack_registration_response(bytes: &[u8]) -> Result<RegistrationResponse> {
    if bytes.len() < 2 {
        return Err(Error::BufferTooSmall {
            needed: 2,
            got: bytes.len(),
        });
    }

    let success = bytes[0] != 0;
    let message_len = bytes[1] as usize;

    if bytes.len() < 2 + message_len {
        return Err(Error::LengthOverrun {
            declared: message_len,
            available: bytes.len() - 2,
        });
    }

    let message = strings::unpack_string(&bytes[2..2 + message_len]);
    Ok(RegistrationResponse { success, message })
}

/// Pack a power telemetry frame
///
/// Format: `production(4) + consumption(4)` = 8 bytes, both signed and
/// fixed-point scaled. The layout is bidirectional: server-to-board expected
/// values and board-to-server reports share it.
#[must_use]
pub fn pack_power_data(production: f64, consumption: f64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(POWER_DATA_LEN);
    buf.put_i32(wire::to_milli(production));
    buf.put_i32(wire::to_milli(consumption));
    buf
}

/// Unpack a power telemetry frame
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if fewer than 8 bytes are present.
pub fn unpack_power_values(bytes: &[u8]) -> Result<PowerValues> {
    if bytes.len() < POWER_DATA_LEN {
        return Err(Error::BufferTooSmall {
            needed: POWER_DATA_LEN,
            got: bytes.len(),
        });
    }

    Ok(PowerValues {
        production: wire::from_milli(wire::unpack_i32(&bytes[0..4])),
        consumption: wire::from_milli(wire::unpack_i32(&bytes[4..8])),
    })
}

/// Pack production and consumption coefficients
///
/// Format: `prod_count(1) + [source_id(1) + coeff(4)]* + cons_count(1) +
/// [building_id(1) + consumption(4)]*`. Coefficients are signed fixed-point,
/// so negative values (battery charging) survive the wire.
///
/// Known limit: the 1-byte count fields cap each section at 255 entries;
/// larger maps lose the entries beyond that bound.
#[must_use]
pub fn pack_coefficients_response(
    production: &ProductionCoefficients,
    consumption: &ConsumptionCoefficients,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(
        2 + (production.len() + consumption.len()).min(2 * MAX_MESSAGE_LEN) * COEFFICIENT_ENTRY_LEN,
    );
    put_production_section(&mut buf, production);
    put_consumption_section(&mut buf, consumption);
    buf
}

/// Pack production coefficient values only
///
/// Format: `count(1) + [source_id(1) + coeff(4)]*`, signed fixed-point.
/// Capped at 255 entries by the count byte.
#[must_use]
pub fn pack_production_values(production: &ProductionCoefficients) -> Vec<u8> {
    let mut buf =
        Vec::with_capacity(1 + production.len().min(MAX_MESSAGE_LEN) * COEFFICIENT_ENTRY_LEN);
    put_production_section(&mut buf, production);
    buf
}

/// Pack consumption coefficient values only
///
/// Format: `count(1) + [building_id(1) + consumption(4)]*`, signed
/// fixed-point. Capped at 255 entries by the count byte.
#[must_use]
pub fn pack_consumption_values(consumption: &ConsumptionCoefficients) -> Vec<u8> {
    let mut buf =
        Vec::with_capacity(1 + consumption.len().min(MAX_MESSAGE_LEN) * COEFFICIENT_ENTRY_LEN);
    put_consumption_section(&mut buf, consumption);
    buf
}

#[allow(clippy::cast_possible_truncation)]
fn put_production_section(buf: &mut Vec<u8>, production: &ProductionCoefficients) {
    let count = production.len().min(MAX_MESSAGE_LEN);
    buf.put_u8(count as u8);
    for (source, coeff) in production.iter().take(count) {
        buf.put_u8(source.as_u8());
        buf.put_i32(wire::to_milli(*coeff));
    }
}

#[allow(clippy::cast_possible_truncation)]
fn put_consumption_section(buf: &mut Vec<u8>, consumption: &ConsumptionCoefficients) {
    let count = consumption.len().min(MAX_MESSAGE_LEN);
    buf.put_u8(count as u8);
    for (building, value) in consumption.iter().take(count) {
        buf.put_u8(building.as_u8());
        buf.put_i32(wire::to_milli(*value));
    }
}

/// Pack production operating envelopes for dispatchable sources
///
/// Format: `count(1) + [source_id(1) + min_power(4) + max_power(4)]*`,
/// signed fixed-point. Capped at 255 entries by the count byte.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn pack_production_ranges(ranges: &ProductionRanges) -> Vec<u8> {
    let count = ranges.len().min(MAX_MESSAGE_LEN);
    let mut buf = Vec::with_capacity(1 + count * RANGE_ENTRY_LEN);
    buf.put_u8(count as u8);
    for (source, (min_power, max_power)) in ranges.iter().take(count) {
        buf.put_u8(source.as_u8());
        buf.put_i32(wire::to_milli(*min_power));
        buf.put_i32(wire::to_milli(*max_power));
    }
    buf
}

/// Pack a building consumption table
///
/// Format: `version(4) + count(1) + [building_type(1) + consumption(4)]*`.
/// Consumption values are raw watts, deliberately not fixed-point scaled
/// (unlike coefficient tables). Capped at 255 entries by the count byte.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn pack_building_table(entries: &BTreeMap<BuildingId, i32>, version: u32) -> Vec<u8> {
    let count = entries.len().min(MAX_MESSAGE_LEN);
    let mut buf = Vec::with_capacity(BUILDING_TABLE_HEADER_LEN + count * BUILDING_ENTRY_LEN);
    buf.put_u32(version);
    buf.put_u8(count as u8);
    for (building, consumption) in entries.iter().take(count) {
        buf.put_u8(building.as_u8());
        buf.put_i32(*consumption);
    }
    buf
}

/// Unpack a building consumption table
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if fewer than 5 bytes are supplied or
/// the declared entry count does not have its full 5 bytes per entry.
pub fn unpack_building_table(bytes: &[u8]) -> Result<BuildingTable> {
    if bytes.len() < BUILDING_TABLE_HEADER_LEN {
        return Err(Error::BufferTooSmall {
            needed: BUILDING_TABLE_HEADER_LEN,
            got: bytes.len(),
        });
    }

    let version = wire::unpack_u32(&bytes[0..4]);
    let count = bytes[4] as usize;

    let needed = BUILDING_TABLE_HEADER_LEN + count * BUILDING_ENTRY_LEN;
    if bytes.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            got: bytes.len(),
        });
    }

    let mut entries = BTreeMap::new();
    let mut offset = BUILDING_TABLE_HEADER_LEN;
    for _ in 0..count {
        let building = BuildingId::from(bytes[offset]);
        let consumption = wire::unpack_i32(&bytes[offset + 1..offset + BUILDING_ENTRY_LEN]);
        entries.insert(building, consumption);
        offset += BUILDING_ENTRY_LEN;
    }

    Ok(BuildingTable { version, entries })
}

/// Pack a game status poll response
///
/// Format: `current_round(2) + total_rounds(2) + round_type_len(1) +
/// round_type + expecting_data(1)`. The round type is truncated to 255 bytes.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn pack_game_status(
    current_round: u16,
    total_rounds: u16,
    round_type: &str,
    expecting_data: bool,
) -> Vec<u8> {
    let type_bytes = &round_type.as_bytes()[..round_type.len().min(MAX_MESSAGE_LEN)];

    let mut buf = Vec::with_capacity(GAME_STATUS_MIN_LEN + type_bytes.len());
    buf.put_u16(current_round);
    buf.put_u16(total_rounds);
    buf.put_u8(type_bytes.len() as u8);
    buf.put_slice(type_bytes);
    buf.put_u8(u8::from(expecting_data));
    buf
}

/// Unpack a game status poll response
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] for fewer than 6 bytes, or
/// [`Error::LengthOverrun`] if the declared round-type length leaves no room
/// for the trailing flag byte.
pub fn unpack_game_status(bytes: &[u8]) -> Result<GameStatus> {
    if bytes.len() < GAME_STATUS_MIN_LEN {
        return Err(Error::BufferTooSmall {
            needed: GAME_STATUS_MIN_LEN,
            got: bytes.len(),
        });
    }

    let current_round = u16::from_be_bytes(bytes[0..2].try_into().unwrap());
    let total_rounds = u16::from_be_bytes(bytes[2..4].try_into().unwrap());
    let type_len = bytes[4] as usize;

    if bytes.len() < GAME_STATUS_MIN_LEN + type_len {
        return Err(Error::LengthOverrun {
            declared: type_len,
            available: bytes.len() - GAME_STATUS_MIN_LEN,
        });
    }

    let round_type = strings::unpack_string(&bytes[5..5 + type_len]);
    let expecting_data = bytes[5 + type_len] != 0;

    Ok(GameStatus {
        current_round,
        total_rounds,
        round_type,
        expecting_data,
    })
}
