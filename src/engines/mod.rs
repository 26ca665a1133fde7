use crate::chess_boards::chess_board::{ChessBoard, Move};

pub mod engine_alpha_beta;
pub mod engine_minmax;
pub mod evaluation;

/// Score of a minimizing node without replies, and the starting best score for Black.
pub const MAX_EVALUATION: i32 = 99_999_999;
/// Score of a maximizing node without replies, and the starting best score for White.
pub const MIN_EVALUATION: i32 = -99_999_999;

pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched from the root position, counting the root move itself.
    pub depth: u32,
    /// Treat a position where a king has been captured as a leaf.
    pub stop_at_king_capture: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            stop_at_king_capture: true,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

pub trait SearchEngine {
    fn name(&self) -> &str;
    fn config(&self) -> &SearchConfig;

    /// Scores every candidate in `moves` and returns the best one for the side to move,
    /// with its score and the number of searched nodes. `None` if `moves` is empty.
    fn find_best_move_among(&self, board: &ChessBoard, moves: &[Move]) -> Option<(Move, i32, u64)>;

    fn find_best_move(&self, board: &ChessBoard) -> Option<(Move, i32, u64)> {
        self.find_best_move_among(board, &board.legal_moves())
    }
}
