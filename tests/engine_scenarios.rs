//! End-to-end scenarios against the public engine and session API.

use othello_engine::{Board, Cell, GameEngine, GameSession, Player, Position, Winner};

fn cell_total(engine: &GameEngine) -> usize {
    let state = engine.state();
    let empty = state
        .board
        .iter()
        .flatten()
        .filter(|&&cell| cell == Cell::Empty)
        .count();
    state.black as usize + state.white as usize + empty
}

#[test]
fn start_sets_up_the_standard_opening() {
    let session = GameSession::default();
    session.start();
    let state = session.current_state();

    assert_eq!(state.board[4][3], Cell::Black);
    assert_eq!(state.board[3][4], Cell::Black);
    assert_eq!(state.board[3][3], Cell::White);
    assert_eq!(state.board[4][4], Cell::White);
    let occupied = state
        .board
        .iter()
        .flatten()
        .filter(|&&cell| cell != Cell::Empty)
        .count();
    assert_eq!(occupied, 4);
    assert_eq!((state.black, state.white), (2, 2));
    assert_eq!(state.player, Player::Black);
}

#[test]
fn first_move_flips_the_center_disc() {
    let session = GameSession::default();
    session.start();

    assert!(session.attempt_move(2, 3));
    let state = session.current_state();

    assert_eq!(&state.board[3][2..5], &[Cell::Black, Cell::Black, Cell::Black]);
    assert_eq!((state.black, state.white), (4, 1));
    assert_eq!(state.player, Player::White);
}

#[test]
fn corner_move_from_opening_is_rejected() {
    let session = GameSession::default();
    session.start();
    let before = session.current_state();

    assert!(!session.attempt_move(0, 0));
    assert_eq!(session.current_state(), before);
}

#[test]
fn black_keeps_the_turn_when_white_has_no_reply() {
    let mut engine = GameEngine::default();
    let at = |x: u8, y: u8| 1u64 << Position::new(x, y).index();
    let black = at(0, 0) | at(7, 5);
    let white = at(1, 0) | at(5, 5) | at(6, 5);
    engine.load_position(Board::from_bitboards(black, white), Player::Black);

    assert!(engine.attempt_move(Position::new(2, 0)).is_ok());

    assert!(engine.board().legal_moves(Player::White) == 0);
    assert_eq!(engine.current_player(), Player::Black);
    assert!(!engine.is_terminal());
}

#[test]
fn undoing_every_move_restores_the_opening() {
    let mut engine = GameEngine::default();
    let opening = engine.state();
    let mut applied = 0;

    for ply in 0..12 {
        if engine.is_terminal() {
            break;
        }
        if ply % 2 == 0 {
            let pos = engine.valid_moves()[0];
            let flipped = engine.attempt_move(pos).unwrap();
            assert!(!flipped.is_empty());
        } else {
            engine.computer_move(Some(3)).unwrap();
        }
        assert_eq!(cell_total(&engine), 64);
        applied += 1;
    }

    for _ in 0..applied {
        assert!(engine.undo().is_ok());
    }

    assert_eq!(engine.state(), opening);
    assert_eq!(engine.history_len(), 0);
    assert!(engine.undo().is_err());
}

#[test]
fn self_play_reaches_a_result() {
    let mut engine = GameEngine::default();

    let mut plies = 0;
    while !engine.is_terminal() {
        engine.computer_move(Some(1)).unwrap();
        assert_eq!(cell_total(&engine), 64);
        plies += 1;
        assert!(plies <= 60);
    }

    let board = engine.board();
    assert!(!board.has_legal_move(Player::Black));
    assert!(!board.has_legal_move(Player::White));
    let (black, white) = board.count();
    assert_eq!(engine.winner(), Some(Winner::from_counts(black, white)));
}

#[test]
fn computer_moves_are_repeatable() {
    let first = GameSession::default();
    let second = GameSession::default();

    for _ in 0..6 {
        assert_eq!(first.computer_move(Some(4)), second.computer_move(Some(4)));
    }
    assert_eq!(first.current_state(), second.current_state());
}

#[test]
fn state_serializes_with_single_letter_codes() {
    let session = GameSession::default();
    let json = serde_json::to_value(session.current_state()).unwrap();

    assert_eq!(json["board"][3][3], "W");
    assert_eq!(json["board"][3][4], "B");
    assert_eq!(json["board"][0][0], "");
    assert_eq!(json["black"], 2);
    assert_eq!(json["white"], 2);
    assert_eq!(json["player"], "B");
}

#[test]
fn winner_serializes_as_tie_code() {
    let session = GameSession::default();
    let half = u64::MAX >> 32;
    let board = Board::from_bitboards(half, !half);
    let state = othello_engine::GameState {
        board: board.to_rows(),
        black: 0,
        white: 0,
        player: Player::Black,
    };

    assert!(session.set_state(&state));
    assert!(session.is_game_over());
    assert_eq!(serde_json::to_value(session.winner()).unwrap(), "T");
}
