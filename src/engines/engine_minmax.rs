use crate::chess_boards::chess_board::{ChessBoard, Move, Team};
use crate::engines::evaluation::evaluate_board;
use crate::engines::{SearchConfig, SearchEngine, MAX_EVALUATION, MIN_EVALUATION};

/// Full-width minimax without pruning. Much slower than `AlphaBetaEngine` but visits every
/// node, which makes it the reference the pruning search is checked against.
pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        MinimaxEngine { config }
    }

    fn minimax(&self, board: &ChessBoard, mv: Move, depth: u32, maximizing: bool, node_count: &mut u64) -> i32 {
        *node_count += 1;
        let mut new_board = board.clone();
        new_board.make_move(mv);

        if depth <= 1 || (self.config.stop_at_king_capture && new_board.winner() != Team::None) {
            return evaluate_board(&new_board);
        }

        let replies = new_board.legal_moves();
        let scores = replies
            .into_iter()
            .map(|reply| self.minimax(&new_board, reply, depth - 1, !maximizing, node_count));
        if maximizing {
            scores.fold(MIN_EVALUATION, i32::max)
        } else {
            scores.fold(MAX_EVALUATION, i32::min)
        }
    }
}

impl SearchEngine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn find_best_move_among(&self, board: &ChessBoard, moves: &[Move]) -> Option<(Move, i32, u64)> {
        let mut best_move = None;
        let white_to_move = board.active_team() == Team::White;
        let mut best_score = if white_to_move { MIN_EVALUATION } else { MAX_EVALUATION };
        let mut node_count = 0;

        for &mv in moves {
            let score = self.minimax(board, mv, self.config.depth, !white_to_move, &mut node_count);
            let improves = if white_to_move { score > best_score } else { score < best_score };
            if improves || best_move.is_none() {
                best_score = score;
                best_move = Some(mv);
            }
        }

        best_move.map(|mv| (mv, best_score, node_count))
    }
}
