//! Compact binary form of a position, for handing a game between engine
//! instances.
//!
//! Layout (little endian):
//!
//! | offset | size | field                               |
//! |--------|------|-------------------------------------|
//! | 0      | 4    | magic `OTHP`                        |
//! | 4      | 4    | version (1)                         |
//! | 8      | 4    | CRC32 of the payload                |
//! | 12     | 4    | reserved, zero                      |
//! | 16     | 64   | cells, row-major: 0 empty, 1 B, 2 W |
//! | 80     | 1    | side to move: 1 B, 2 W              |

use crate::board::Board;
use crate::error::CodecError;
use crate::types::{Cell, NUM_SQUARES, Player};

const MAGIC: &[u8; 4] = b"OTHP";
const VERSION: u32 = 1;
const HEADER_SIZE: usize = 16;
const PAYLOAD_SIZE: usize = NUM_SQUARES + 1;

pub fn encode_position(board: &Board, player: Player) -> Vec<u8> {
    let mut payload = Vec::with_capacity(PAYLOAD_SIZE);
    for idx in 0..NUM_SQUARES {
        payload.push(cell_code(board.cell_at_index(idx)));
    }
    payload.push(cell_code(player.cell()));

    let crc = crc32fast::hash(&payload);
    let mut out = Vec::with_capacity(HEADER_SIZE + PAYLOAD_SIZE);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&crc.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&payload);
    out
}

pub fn decode_position(data: &[u8]) -> Result<(Board, Player), CodecError> {
    let expected = HEADER_SIZE + PAYLOAD_SIZE;
    if data.len() < expected {
        return Err(CodecError::Truncated {
            expected,
            actual: data.len(),
        });
    }

    if &data[0..4] != MAGIC {
        return Err(CodecError::BadMagic);
    }

    let version = read_u32_le(data, 4);
    if version != VERSION {
        return Err(CodecError::UnsupportedVersion {
            expected: VERSION,
            actual: version,
        });
    }

    let expected_crc = read_u32_le(data, 8);
    let payload = &data[HEADER_SIZE..];
    let actual_crc = crc32fast::hash(payload);
    if actual_crc != expected_crc {
        return Err(CodecError::CrcMismatch {
            expected: expected_crc,
            actual: actual_crc,
        });
    }

    if payload.len() != PAYLOAD_SIZE {
        return Err(CodecError::TrailingBytes);
    }

    let mut black = 0u64;
    let mut white = 0u64;
    for (square, &code) in payload[..NUM_SQUARES].iter().enumerate() {
        match code {
            0 => {}
            1 => black |= 1u64 << square,
            2 => white |= 1u64 << square,
            _ => return Err(CodecError::InvalidCell { square, code }),
        }
    }

    let player = match payload[NUM_SQUARES] {
        1 => Player::Black,
        2 => Player::White,
        code => return Err(CodecError::InvalidPlayer(code)),
    };

    Ok((Board::from_bitboards(black, white), player))
}

fn cell_code(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => 0,
        Cell::Black => 1,
        Cell::White => 2,
    }
}

// Callers check the length first.
fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}
