//! Core value types for the isolation board.
//!
//! Players, destination cells, and movement patterns are plain `Copy` data;
//! everything stateful lives in `board`.

use std::fmt;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// Destination cell of a move, in board coordinates.
///
/// Ordering is row-major and only matters so that "first legal move"
/// fallbacks are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Movement pattern shared by both players on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePattern {
    /// The eight L-shaped knight offsets (standard game).
    Knight,
    /// The eight adjacent cells (used by small test grids).
    King,
}

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl MovePattern {
    /// Relative (row, col) offsets in the fixed enumeration order.
    #[inline]
    pub const fn offsets(self) -> &'static [(i8, i8)] {
        match self {
            MovePattern::Knight => &KNIGHT_OFFSETS,
            MovePattern::King => &KING_OFFSETS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MovePattern, Player};

    #[test]
    fn opponent_round_trips() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn player_indices_are_distinct() {
        assert_eq!(Player::One.index(), 0);
        assert_eq!(Player::Two.index(), 1);
    }

    #[test]
    fn move_ordering_is_row_major() {
        assert!(Move::new(0, 6) < Move::new(1, 0));
        assert!(Move::new(2, 3) < Move::new(2, 4));
    }

    #[test]
    fn both_patterns_list_eight_offsets() {
        assert_eq!(MovePattern::Knight.offsets().len(), 8);
        assert_eq!(MovePattern::King.offsets().len(), 8);
    }

    #[test]
    fn move_displays_as_coordinate_pair() {
        assert_eq!(Move::new(3, 4).to_string(), "(3, 4)");
    }
}
