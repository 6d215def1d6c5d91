//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from the visited-cell bitboard for
//! interactive play, debugging, and diagnostics in text environments.

use crate::game_state::board::Board;
use crate::game_state::board_types::Player;

/// Render the board to a string for terminal output.
///
/// Rows print top-down starting at row 0 to match `(row, col)` move
/// coordinates. `1`/`2` mark the players, `#` a visited cell, `·` an open
/// one. Coordinate labels wrap at 10 on oversized boards.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  ");
    for col in 0..board.width {
        out.push(digit(col));
        if col + 1 < board.width {
            out.push(' ');
        }
    }
    out.push('\n');

    for row in 0..board.height {
        out.push(digit(row));
        out.push(' ');

        for col in 0..board.width {
            out.push(cell_char(board, board.square(row, col)));
            if col + 1 < board.width {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(digit(row));
        out.push('\n');
    }

    out.push_str("  ");
    for col in 0..board.width {
        out.push(digit(col));
        if col + 1 < board.width {
            out.push(' ');
        }
    }

    out
}

fn cell_char(board: &Board, square: u8) -> char {
    for player in [Player::One, Player::Two] {
        if board.locations[player.index()] == Some(square) {
            return match player {
                Player::One => '1',
                Player::Two => '2',
            };
        }
    }
    if board.blocked & (1u64 << square) != 0 {
        '#'
    } else {
        '·'
    }
}

#[inline]
fn digit(coordinate: u8) -> char {
    char::from(b'0' + coordinate % 10)
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board::Board;
    use crate::game_state::board_types::{Move, MovePattern};

    #[test]
    fn renders_players_visited_cells_and_labels() {
        let mut board =
            Board::with_dimensions(3, 3, MovePattern::King).expect("3x3 should be supported");
        board.apply_move(Move::new(0, 0));
        board.apply_move(Move::new(2, 2));
        board.apply_move(Move::new(1, 1));

        let rendered = render_board(&board);
        let expected = [
            "  0 1 2",
            "0 # · · 0",
            "1 · 1 · 1",
            "2 · · 2 2",
            "  0 1 2",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn fresh_board_is_fully_open() {
        let board = Board::new();
        let rendered = render_board(&board);
        assert_eq!(rendered.matches('·').count(), 49);
        assert!(!rendered.contains('#'));
    }
}
