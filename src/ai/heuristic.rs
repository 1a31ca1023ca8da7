use crate::board::Board;
use crate::types::{NUM_SQUARES, Player};

/// Positional weights, row-major. Corners weigh most, then edges, then the interior.
#[rustfmt::skip]
const SQUARE_WEIGHTS: [i32; NUM_SQUARES] = [
    100, 20, 30, 25, 25, 30, 20, 100,
     20,  1,  3,  3,  3,  3,  1,  20,
     30,  3,  5,  4,  4,  5,  3,  30,
     25,  3,  4,  2,  2,  4,  3,  25,
     25,  3,  4,  2,  2,  4,  3,  25,
     30,  3,  5,  4,  4,  5,  3,  30,
     20,  1,  3,  3,  3,  3,  1,  20,
    100, 20, 30, 25, 25, 30, 20, 100,
];

/// Weighted disc differential from `player`'s perspective.
///
/// Antisymmetric: `evaluate(b, p) == -evaluate(b, p.opponent())`.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let (black, white) = board.bitboards();
    let (me, opp) = match player {
        Player::Black => (black, white),
        Player::White => (white, black),
    };

    weighted_sum(me) - weighted_sum(opp)
}

fn weighted_sum(mut mask: u64) -> i32 {
    let mut score = 0;
    while mask != 0 {
        score += SQUARE_WEIGHTS[mask.trailing_zeros() as usize];
        mask &= mask - 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_SIZE, Position};

    fn bit(x: u8, y: u8) -> u64 {
        1u64 << Position::new(x, y).index()
    }

    #[test]
    fn opening_is_balanced() {
        let board = Board::new();

        assert_eq!(evaluate(&board, Player::Black), 0);
        assert_eq!(evaluate(&board, Player::White), 0);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let board = Board::from_bitboards(bit(0, 0) | bit(3, 3), bit(1, 0));

        assert_eq!(evaluate(&board, Player::Black), 100 + 2 - 20);
        assert_eq!(
            evaluate(&board, Player::White),
            -evaluate(&board, Player::Black)
        );
    }

    #[test]
    fn corners_outweigh_edges_and_edges_outweigh_interior() {
        let interior_max = (1..BOARD_SIZE - 1)
            .flat_map(|y| (1..BOARD_SIZE - 1).map(move |x| SQUARE_WEIGHTS[y * BOARD_SIZE + x]))
            .max()
            .unwrap();
        let edge_min = (0..NUM_SQUARES)
            .filter(|&i| {
                let (x, y) = (i % BOARD_SIZE, i / BOARD_SIZE);
                x == 0 || y == 0 || x == BOARD_SIZE - 1 || y == BOARD_SIZE - 1
            })
            .map(|i| SQUARE_WEIGHTS[i])
            .min()
            .unwrap();

        assert!(edge_min > interior_max);
        assert!(SQUARE_WEIGHTS[0] > SQUARE_WEIGHTS[2]);
        assert_eq!(SQUARE_WEIGHTS[0], SQUARE_WEIGHTS[63]);
    }
}
