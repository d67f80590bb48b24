//! Tests for board decoding, phase derivation and move descriptors.

use serde_json::json;
use teeko_client::{
    Board, BoardError, Cell, Coord, GameStateResponse, GameStatus, MoveDescriptor, MoveResponse,
    PLACEMENT_QUOTA, Phase, Piece, Turn, Winner,
};

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).expect("on board")
}

#[test]
fn test_empty_board_is_drop_phase() {
    assert_eq!(Phase::of(&Board::new()), Phase::Drop);
}

#[test]
fn test_phase_follows_occupancy_count() {
    let fixtures = [
        ("b..../...../...../...../.....", Phase::Drop),
        ("br.../br.../br.../b..../.....", Phase::Drop),
        ("br.../br.../br.../br.../.....", Phase::Slide),
        ("br.../br.../br.../br.../b....", Phase::Slide),
    ];
    for (rows, expected) in fixtures {
        let board: Board = rows.parse().expect("valid fixture");
        assert_eq!(Phase::of(&board), expected, "board {rows}");
    }
}

#[test]
fn test_phase_switches_exactly_at_quota() {
    for count in 0..=10 {
        let board: Board = (0..5)
            .map(|row| {
                (0..5)
                    .map(|col| if row * 5 + col < count { 'b' } else { '.' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
            .parse()
            .expect("valid fixture");
        let expected = if count < PLACEMENT_QUOTA { Phase::Drop } else { Phase::Slide };
        assert_eq!(board.occupied_count(), count);
        assert_eq!(Phase::of(&board), expected, "{count} pieces");
    }
}

#[test]
fn test_decode_state_response_from_service() {
    let body = json!({
        "board": [
            [" ", " ", " ", " ", " "],
            [" ", " ", " ", " ", " "],
            [" ", " ", "b", " ", " "],
            [" ", " ", " ", "r", " "],
            [" ", " ", " ", " ", " "]
        ],
        "game_status": "ongoing",
        "turn": "Opponent",
        "opponent_piece": "b",
        "winner": null
    });
    let state: GameStateResponse = serde_json::from_value(body).expect("decodes");
    assert_eq!(state.board.get(at(2, 2)), Cell::Occupied(Piece::Black));
    assert_eq!(state.board.get(at(3, 3)), Cell::Occupied(Piece::Red));
    assert_eq!(state.board.count(Piece::Black), 1);
    assert_eq!(state.turn, Turn::Opponent);
    assert_eq!(state.game_status, GameStatus::InProgress);
    assert_eq!(state.opponent_piece, Piece::Black);
    assert_eq!(state.winner, None);
}

#[test]
fn test_decode_finished_move_response() {
    let body = json!({
        "board": vec![vec![""; 5]; 5],
        "move": [[1, 1], [0, 0]],
        "turn": "None",
        "game_status": "over",
        "winner": "AI"
    });
    let response: MoveResponse = serde_json::from_value(body).expect("decodes");
    assert_eq!(response.turn, Turn::Nobody);
    assert_eq!(response.game_status, GameStatus::Over);
    assert_eq!(response.winner, Some(Winner::Ai));
    assert_eq!(response.applied, vec![vec![Some(1), Some(1)], vec![Some(0), Some(0)]]);
}

#[test]
fn test_board_rejects_unknown_symbols_and_bad_shape() {
    let unknown: Result<Board, _> = serde_json::from_value(json!(vec![vec!["x"; 5]; 5]));
    assert!(unknown.is_err());

    let short: Result<Board, _> = serde_json::from_value(json!(vec![vec![" "; 5]; 4]));
    assert!(short.is_err());

    assert_eq!(
        "b..../...../...../...../....".parse::<Board>(),
        Err(BoardError::ColumnCount { row: 4, len: 4 })
    );
}

#[test]
fn test_coord_bounds() {
    assert!(Coord::new(4, 4).is_ok());
    assert!(Coord::new(5, 0).is_err());
    assert!(serde_json::from_value::<Coord>(json!([0, 7])).is_err());
    assert_eq!(Coord::all().count(), 25);
}

#[test]
fn test_drop_descriptor_wire_form() {
    let descriptor = MoveDescriptor::Drop(at(2, 2));
    assert_eq!(serde_json::to_value(descriptor).expect("encodes"), json!([[2, 2]]));
}

#[test]
fn test_slide_descriptor_puts_destination_first() {
    let descriptor = MoveDescriptor::slide(at(0, 0), at(1, 1));
    assert_eq!(
        serde_json::to_value(descriptor).expect("encodes"),
        json!([[1, 1], [0, 0]])
    );
    assert_eq!(descriptor.coords(), vec![at(1, 1), at(0, 0)]);
}

#[test]
fn test_descriptor_rejects_empty_and_long_lists() {
    assert!(serde_json::from_value::<MoveDescriptor>(json!([])).is_err());
    assert!(serde_json::from_value::<MoveDescriptor>(json!([[0, 0], [0, 1], [0, 2]])).is_err());
}

#[test]
fn test_winner_banner() {
    assert_eq!(Winner::banner(Some(Winner::Ai)), "AI Wins!");
    assert_eq!(Winner::banner(Some(Winner::Opponent)), "You Win!");
    assert_eq!(Winner::banner(Some(Winner::Draw)), "It's a Draw!");
}
