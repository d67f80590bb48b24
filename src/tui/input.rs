//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use teeko_client::{BOARD_SIZE, Coord};

/// Moves the board cursor one cell for an arrow key, stopping at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let last = BOARD_SIZE - 1;

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(last), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(last)),
        _ => (row, col),
    };

    Coord::new(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).expect("on board")
    }

    #[test]
    fn test_arrows_move_one_cell() {
        assert_eq!(move_cursor(at(2, 2), KeyCode::Up), at(1, 2));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Down), at(3, 2));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Left), at(2, 1));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Right), at(2, 3));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(at(0, 0), KeyCode::Up), at(0, 0));
        assert_eq!(move_cursor(at(0, 0), KeyCode::Left), at(0, 0));
        assert_eq!(move_cursor(at(4, 4), KeyCode::Down), at(4, 4));
        assert_eq!(move_cursor(at(4, 4), KeyCode::Right), at(4, 4));
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(at(1, 3), KeyCode::Char('x')), at(1, 3));
    }
}
