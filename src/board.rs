use crate::error::{EngineError, EngineResult};
use crate::types::{BOARD_SIZE, Cell, NUM_SQUARES, Player, Position};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Othello board state represented by two bitboards.
///
/// Bit `y * 8 + x` is set in `black` or `white` when that square holds a disc.
/// The masks never overlap, so black + white + empty always covers 64 squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the standard opening:
    /// (3,3)=white, (4,3)=black, (3,4)=black, (4,4)=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// A board with no discs at all.
    pub fn empty() -> Self {
        Self { black: 0, white: 0 }
    }

    /// Builds a board from raw masks. Squares set in both masks are treated as black.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        Self {
            black,
            white: white & !black,
        }
    }

    /// Builds a board from rows of cells (`rows[y][x]`), which must be exactly 8×8.
    pub fn from_rows(rows: &[Vec<Cell>]) -> EngineResult<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::MalformedState(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(EngineError::MalformedState(format!(
                    "row {y} has {} cells, expected {BOARD_SIZE}",
                    row.len()
                )));
            }
            for (x, &cell) in row.iter().enumerate() {
                board.set(y * BOARD_SIZE + x, cell);
            }
        }

        Ok(board)
    }

    pub fn bitboards(&self) -> (u64, u64) {
        (self.black, self.white)
    }

    pub fn cell_at(&self, pos: Position) -> Cell {
        if !pos.is_on_board() {
            return Cell::Empty;
        }
        self.cell_at_index(pos.index())
    }

    pub(crate) fn cell_at_index(&self, idx: usize) -> Cell {
        let square = bit(idx);
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    pub fn is_full(&self) -> bool {
        (self.black | self.white) == u64::MAX
    }

    /// Returns legal move mask for the given side.
    pub fn legal_moves(&self, player: Player) -> u64 {
        let (me, opp) = self.sides(player);
        let occupied = me | opp;
        let mut legal = 0u64;

        for pos in 0..NUM_SQUARES {
            let move_bit = bit(pos);
            if (occupied & move_bit) != 0 {
                continue;
            }
            if collect_flips(pos, me, opp) != 0 {
                legal |= move_bit;
            }
        }

        legal
    }

    /// Legal moves in row-major order.
    pub fn legal_positions(&self, player: Player) -> Vec<Position> {
        mask_to_positions(self.legal_moves(player))
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        self.legal_moves(player) != 0
    }

    pub fn is_legal(&self, player: Player, pos: Position) -> bool {
        self.flips_for(player, pos) != 0
    }

    /// Mask of opponent discs that `pos` would flip. Zero when the move is illegal.
    pub fn flips_for(&self, player: Player, pos: Position) -> u64 {
        if !pos.is_on_board() {
            return 0;
        }
        let (me, opp) = self.sides(player);
        collect_flips(pos.index(), me, opp)
    }

    /// Positions `pos` would flip, row-major.
    pub fn flipped_positions(&self, player: Player, pos: Position) -> Vec<Position> {
        mask_to_positions(self.flips_for(player, pos))
    }

    /// Places one disc and flips captured discs.
    /// Returns the flipped mask, or `IllegalMove` with the board untouched.
    pub fn apply(&mut self, player: Player, pos: Position) -> EngineResult<u64> {
        let flips = self.flips_for(player, pos);
        if flips == 0 {
            return Err(EngineError::IllegalMove { x: pos.x, y: pos.y });
        }

        let (me, opp) = self.sides(player);
        let next_me = me | bit(pos.index()) | flips;
        let next_opp = opp & !flips;

        match player {
            Player::Black => {
                self.black = next_me;
                self.white = next_opp;
            }
            Player::White => {
                self.white = next_me;
                self.black = next_opp;
            }
        }

        Ok(flips)
    }

    /// Rows of cells, `rows[y][x]`.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..BOARD_SIZE)
            .map(|y| {
                (0..BOARD_SIZE)
                    .map(|x| self.cell_at_index(y * BOARD_SIZE + x))
                    .collect()
            })
            .collect()
    }

    fn sides(&self, player: Player) -> (u64, u64) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    fn set(&mut self, idx: usize, cell: Cell) {
        let square = bit(idx);
        self.black &= !square;
        self.white &= !square;
        match cell {
            Cell::Black => self.black |= square,
            Cell::White => self.white |= square,
            Cell::Empty => {}
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
    if pos >= NUM_SQUARES {
        return 0;
    }

    let move_bit = bit(pos);
    if ((me | opp) & move_bit) != 0 {
        return 0;
    }

    let (row, col) = pos_to_row_col(pos);
    let mut flips = 0u64;

    for (dr, dc) in DIRECTIONS {
        let mut r = row + dr;
        let mut c = col + dc;
        let mut line = 0u64;

        // Scans stop at the edge; a run that reaches it without an anchor flips nothing.
        while in_bounds(r, c) {
            let square = bit((r as usize) * BOARD_SIZE + c as usize);
            if (opp & square) != 0 {
                line |= square;
            } else {
                if (me & square) != 0 {
                    flips |= line;
                }
                break;
            }

            r += dr;
            c += dc;
        }
    }

    flips
}

pub(crate) fn mask_to_positions(mut mask: u64) -> Vec<Position> {
    let mut out = Vec::with_capacity(mask.count_ones() as usize);
    while mask != 0 {
        out.push(Position::from_index(mask.trailing_zeros() as usize));
        mask &= mask - 1;
    }
    out
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
