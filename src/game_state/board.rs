//! Bitboard state for the isolation blocking game.
//!
//! Cells are indexed row-major into a single `u64` mask of ever-visited
//! squares; each player keeps at most one location. Boards are cheap to
//! clone, and the search relies on `forecast` never touching the receiver.

use crate::game_state::board_types::{Move, MovePattern, Player};

pub const DEFAULT_WIDTH: u8 = 7;
pub const DEFAULT_HEIGHT: u8 = 7;

/// Full game state: geometry, blocked mask, player locations, side to move.
///
/// A player with no location yet is in the placement phase and may occupy
/// any open cell. Every cell a player has ever occupied (including current
/// positions) stays blocked for the rest of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub width: u8,
    pub height: u8,
    pub pattern: MovePattern,
    pub blocked: u64,
    pub locations: [Option<u8>; 2],
    pub side_to_move: Player,
    pub move_count: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard game: 7x7 grid, knight movement, player 1 to act.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pattern: MovePattern::Knight,
            blocked: 0,
            locations: [None, None],
            side_to_move: Player::One,
            move_count: 0,
        }
    }

    /// Custom geometry. The occupancy mask is a `u64`, so the grid may hold
    /// at most 64 cells.
    pub fn with_dimensions(width: u8, height: u8, pattern: MovePattern) -> Result<Self, String> {
        let cells = u16::from(width) * u16::from(height);
        if width == 0 || height == 0 || cells > 64 {
            return Err(format!(
                "unsupported board dimensions {width}x{height}: need between 1 and 64 cells"
            ));
        }
        Ok(Self {
            width,
            height,
            pattern,
            blocked: 0,
            locations: [None, None],
            side_to_move: Player::One,
            move_count: 0,
        })
    }

    #[inline]
    pub const fn cell_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    #[inline]
    pub const fn square(&self, row: u8, col: u8) -> u8 {
        row * self.width + col
    }

    #[inline]
    pub fn is_open(&self, row: u8, col: u8) -> bool {
        self.blocked & (1u64 << self.square(row, col)) == 0
    }

    #[inline]
    pub fn open_cell_count(&self) -> u32 {
        self.cell_count() - self.blocked.count_ones()
    }

    #[inline]
    pub const fn active_player(&self) -> Player {
        self.side_to_move
    }

    #[inline]
    pub const fn inactive_player(&self) -> Player {
        self.side_to_move.opponent()
    }

    /// Current cell of `player`, `None` while still unplaced.
    #[inline]
    pub fn location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()].map(|sq| Move::new(sq / self.width, sq % self.width))
    }

    /// Legal destinations for `player`, in a fixed deterministic order:
    /// row-major over open cells during placement, pattern-offset order once
    /// placed. Empty exactly when the player cannot act.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        match self.location(player) {
            None => self.open_cells(),
            Some(from) => {
                let mut moves = Vec::with_capacity(self.pattern.offsets().len());
                for &(dr, dc) in self.pattern.offsets() {
                    let row = i16::from(from.row) + i16::from(dr);
                    let col = i16::from(from.col) + i16::from(dc);
                    if self.in_bounds(row, col) && self.is_open(row as u8, col as u8) {
                        moves.push(Move::new(row as u8, col as u8));
                    }
                }
                moves
            }
        }
    }

    /// Legal destinations for the side to move.
    #[inline]
    pub fn active_legal_moves(&self) -> Vec<Move> {
        self.legal_moves(self.side_to_move)
    }

    /// Legal-move count for `player` without allocating.
    pub fn mobility(&self, player: Player) -> u32 {
        match self.location(player) {
            None => self.open_cell_count(),
            Some(from) => {
                let mut count = 0;
                for &(dr, dc) in self.pattern.offsets() {
                    let row = i16::from(from.row) + i16::from(dr);
                    let col = i16::from(from.col) + i16::from(dc);
                    if self.in_bounds(row, col) && self.is_open(row as u8, col as u8) {
                        count += 1;
                    }
                }
                count
            }
        }
    }

    pub fn move_is_legal(&self, player: Player, mv: Move) -> bool {
        if mv.row >= self.height || mv.col >= self.width || !self.is_open(mv.row, mv.col) {
            return false;
        }
        match self.location(player) {
            None => true,
            Some(from) => {
                let dr = i16::from(mv.row) - i16::from(from.row);
                let dc = i16::from(mv.col) - i16::from(from.col);
                self.pattern
                    .offsets()
                    .iter()
                    .any(|&(r, c)| (i16::from(r), i16::from(c)) == (dr, dc))
            }
        }
    }

    /// Move the side to move to `mv`, block the destination, pass the turn.
    ///
    /// `mv` must be legal for the side to move (enumerated from this exact
    /// state); see `move_is_legal`.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert!(
            self.move_is_legal(self.side_to_move, mv),
            "{} applied illegal move {mv}",
            self.side_to_move
        );
        let sq = self.square(mv.row, mv.col);
        self.locations[self.side_to_move.index()] = Some(sq);
        self.blocked |= 1u64 << sq;
        self.side_to_move = self.side_to_move.opponent();
        self.move_count += 1;
    }

    /// Child state after `mv`, leaving the receiver untouched.
    #[inline]
    pub fn forecast(&self, mv: Move) -> Board {
        let mut child = self.clone();
        child.apply_move(mv);
        child
    }

    /// `player` has lost: it is their turn and they cannot act.
    #[inline]
    pub fn is_loser(&self, player: Player) -> bool {
        player == self.side_to_move && self.mobility(self.side_to_move) == 0
    }

    /// `player` has won: the opponent is to act and cannot.
    #[inline]
    pub fn is_winner(&self, player: Player) -> bool {
        player == self.side_to_move.opponent() && self.mobility(self.side_to_move) == 0
    }

    #[inline]
    fn in_bounds(&self, row: i16, col: i16) -> bool {
        row >= 0 && col >= 0 && row < i16::from(self.height) && col < i16::from(self.width)
    }

    fn open_cells(&self) -> Vec<Move> {
        let mut cells = Vec::with_capacity(self.open_cell_count() as usize);
        for row in 0..self.height {
            for col in 0..self.width {
                if self.is_open(row, col) {
                    cells.push(Move::new(row, col));
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use crate::game_state::board_types::{Move, MovePattern, Player};

    #[test]
    fn fresh_board_is_fully_open_with_player_one_to_act() {
        let board = Board::new();
        assert_eq!(board.open_cell_count(), 49);
        assert_eq!(board.active_player(), Player::One);
        assert_eq!(board.location(Player::One), None);
        assert_eq!(board.location(Player::Two), None);
    }

    #[test]
    fn placement_phase_offers_every_open_cell() {
        let mut board = Board::new();
        assert_eq!(board.active_legal_moves().len(), 49);
        board.apply_move(Move::new(3, 3));
        // Player 2 places next and cannot take the occupied cell.
        assert_eq!(board.active_player(), Player::Two);
        let placements = board.active_legal_moves();
        assert_eq!(placements.len(), 48);
        assert!(!placements.contains(&Move::new(3, 3)));
    }

    #[test]
    fn placement_enumeration_is_row_major() {
        let board = Board::new();
        let moves = board.active_legal_moves();
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(0, 1));
        assert_eq!(moves[48], Move::new(6, 6));
    }

    #[test]
    fn knight_move_counts_from_center_and_corner() {
        let mut board = Board::new();
        board.apply_move(Move::new(3, 3));
        board.apply_move(Move::new(0, 0));
        assert_eq!(board.legal_moves(Player::One).len(), 8);
        assert_eq!(board.legal_moves(Player::Two).len(), 2);
        assert_eq!(board.mobility(Player::One), 8);
        assert_eq!(board.mobility(Player::Two), 2);
    }

    #[test]
    fn king_pattern_reaches_all_neighbors_from_center() {
        let mut board =
            Board::with_dimensions(3, 3, MovePattern::King).expect("3x3 should be supported");
        board.apply_move(Move::new(1, 1));
        assert_eq!(board.legal_moves(Player::One).len(), 8);
    }

    #[test]
    fn applying_a_move_blocks_the_cell_and_passes_the_turn() {
        let mut board = Board::new();
        board.apply_move(Move::new(2, 4));
        assert!(!board.is_open(2, 4));
        assert_eq!(board.active_player(), Player::Two);
        assert_eq!(board.location(Player::One), Some(Move::new(2, 4)));
        assert_eq!(board.move_count, 1);
    }

    #[test]
    fn forecast_leaves_the_original_untouched() {
        let mut board = Board::new();
        board.apply_move(Move::new(3, 3));
        board.apply_move(Move::new(5, 5));
        let before = board.clone();
        let child = board.forecast(Move::new(1, 2));
        assert_eq!(board, before);
        assert_eq!(child.location(Player::One), Some(Move::new(1, 2)));
        assert_eq!(child.active_player(), Player::Two);
    }

    #[test]
    fn vacated_cells_stay_blocked() {
        let mut board = Board::new();
        board.apply_move(Move::new(3, 3));
        board.apply_move(Move::new(5, 5));
        board.apply_move(Move::new(1, 2));
        assert!(!board.is_open(3, 3));
        assert!(!board.move_is_legal(Player::Two, Move::new(3, 3)));
    }

    #[test]
    fn blocked_mover_loses_and_opponent_wins() {
        // 2x2 king board: player 1 in a corner, player 2 adjacent, every
        // other cell blocked. Whoever is to move is stuck.
        let mut board =
            Board::with_dimensions(2, 2, MovePattern::King).expect("2x2 should be supported");
        board.apply_move(Move::new(0, 0));
        board.apply_move(Move::new(0, 1));
        board.apply_move(Move::new(1, 0));
        board.apply_move(Move::new(1, 1));
        // Player 1 to move, all four cells visited.
        assert_eq!(board.active_player(), Player::One);
        assert_eq!(board.mobility(Player::One), 0);
        assert!(board.is_loser(Player::One));
        assert!(board.is_winner(Player::Two));
        assert!(!board.is_loser(Player::Two));
        assert!(!board.is_winner(Player::One));
    }

    #[test]
    fn mobility_matches_legal_move_enumeration() {
        let mut board = Board::new();
        for mv in [
            Move::new(3, 3),
            Move::new(2, 2),
            Move::new(1, 2),
            Move::new(0, 1),
            Move::new(3, 1),
        ] {
            board.apply_move(mv);
            for player in [Player::One, Player::Two] {
                assert_eq!(
                    board.mobility(player) as usize,
                    board.legal_moves(player).len()
                );
            }
        }
    }

    #[test]
    fn oversized_and_empty_grids_are_rejected() {
        assert!(Board::with_dimensions(9, 8, MovePattern::Knight).is_err());
        assert!(Board::with_dimensions(0, 5, MovePattern::Knight).is_err());
        assert!(Board::with_dimensions(8, 8, MovePattern::Knight).is_ok());
    }

    #[test]
    fn default_matches_standard_game() {
        let board = Board::default();
        assert_eq!(board.width, DEFAULT_WIDTH);
        assert_eq!(board.height, DEFAULT_HEIGHT);
        assert_eq!(board.pattern, MovePattern::Knight);
    }
}
