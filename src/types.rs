use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of a single square.
///
/// Wire encoding: `"B"`, `"W"`, or `""` for an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    #[serde(rename = "", alias = ".")]
    Empty,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "W")]
    White,
}

/// A side. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "W")]
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Self::Black => Cell::Black,
            Self::White => Cell::White,
        }
    }
}

/// Final result once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "W")]
    White,
    #[serde(rename = "T")]
    Tie,
}

impl Winner {
    /// Decides the result from final disc counts.
    pub fn from_counts(black: u8, white: u8) -> Self {
        if black > white {
            Self::Black
        } else if white > black {
            Self::White
        } else {
            Self::Tie
        }
    }
}

/// A board coordinate: `x` is the column, `y` the row, both zero-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Builds a position from signed request coordinates, rejecting anything off the board.
    pub fn checked(x: i32, y: i32) -> Option<Self> {
        let range = 0..BOARD_SIZE as i32;
        if range.contains(&x) && range.contains(&y) {
            Some(Self::new(x as u8, y as u8))
        } else {
            None
        }
    }

    pub fn is_on_board(self) -> bool {
        (self.x as usize) < BOARD_SIZE && (self.y as usize) < BOARD_SIZE
    }

    /// Row-major square index (`y * 8 + x`).
    pub fn index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < NUM_SQUARES);
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }
}

/// Public game state returned from the "current state" query.
///
/// `board[y][x]` holds the square at column `x`, row `y`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<Vec<Cell>>,
    /// Ignored when a state is loaded; counts are recomputed from `board`.
    #[serde(default)]
    pub black: u8,
    #[serde(default)]
    pub white: u8,
    pub player: Player,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_index_is_row_major() {
        assert_eq!(Position::new(2, 3).index(), 26);
        assert_eq!(Position::from_index(26), Position::new(2, 3));
        assert_eq!(Position::from_index(63), Position::new(7, 7));
    }

    #[test]
    fn checked_rejects_off_board_coordinates() {
        assert_eq!(Position::checked(7, 0), Some(Position::new(7, 0)));
        assert_eq!(Position::checked(8, 0), None);
        assert_eq!(Position::checked(0, -1), None);
    }

    #[test]
    fn cells_and_players_use_single_letter_wire_codes() {
        let cells = [Cell::Black, Cell::White, Cell::Empty];
        assert_eq!(serde_json::to_string(&cells).unwrap(), r#"["B","W",""]"#);
        assert_eq!(serde_json::to_string(&Player::White).unwrap(), r#""W""#);
        assert_eq!(serde_json::to_string(&Winner::Tie).unwrap(), r#""T""#);
    }

    #[test]
    fn dot_is_accepted_as_empty_on_input() {
        let cell: Cell = serde_json::from_str(r#"".""#).unwrap();
        assert_eq!(cell, Cell::Empty);
    }

    #[test]
    fn winner_follows_disc_majority() {
        assert_eq!(Winner::from_counts(33, 31), Winner::Black);
        assert_eq!(Winner::from_counts(10, 54), Winner::White);
        assert_eq!(Winner::from_counts(32, 32), Winner::Tie);
    }
}
