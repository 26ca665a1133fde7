use crate::chess_boards::chess_board::{ChessBoard, Move, Team};
use crate::engines::evaluation::evaluate_board;
use crate::engines::{SearchConfig, SearchEngine, MAX_EVALUATION, MIN_EVALUATION};

/// Fixed-depth minimax with alpha-beta pruning. Every explored position lives on its own
/// copy of the board.
pub struct AlphaBetaEngine {
    config: SearchConfig,
}

impl AlphaBetaEngine {
    pub fn new(config: SearchConfig) -> Self {
        AlphaBetaEngine { config }
    }

    /// Scores `mv` played on `board`, looking `depth` plies ahead including `mv` itself.
    /// `maximizing` tells whether the position after `mv` is scored for White.
    pub fn minimax(
        &self,
        board: &ChessBoard,
        mv: Move,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        node_count: &mut u64,
    ) -> i32 {
        *node_count += 1;
        let mut new_board = board.clone();
        new_board.make_move(mv);

        if depth <= 1 || (self.config.stop_at_king_capture && new_board.winner() != Team::None) {
            return evaluate_board(&new_board);
        }

        if maximizing {
            let mut max_score = MIN_EVALUATION;
            for reply in new_board.legal_moves() {
                let score = self.minimax(&new_board, reply, depth - 1, alpha, beta, false, node_count);
                max_score = max_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = MAX_EVALUATION;
            for reply in new_board.legal_moves() {
                let score = self.minimax(&new_board, reply, depth - 1, alpha, beta, true, node_count);
                min_score = min_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            min_score
        }
    }
}

impl SearchEngine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "Alpha Beta"
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn find_best_move_among(&self, board: &ChessBoard, moves: &[Move]) -> Option<(Move, i32, u64)> {
        let mut best_move = *moves.first()?;
        let white_to_move = board.active_team() == Team::White;
        let mut best_score = if white_to_move { MIN_EVALUATION } else { MAX_EVALUATION };
        let mut node_count = 0;

        for &mv in moves {
            let score = self.minimax(
                board,
                mv,
                self.config.depth,
                MIN_EVALUATION,
                MAX_EVALUATION,
                !white_to_move,
                &mut node_count,
            );
            let improves = if white_to_move { score > best_score } else { score < best_score };
            if improves {
                best_score = score;
                best_move = mv;
            }
        }

        Some((best_move, best_score, node_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(fen: &str, depth: u32) -> (Move, i32, u64) {
        let board = ChessBoard::from_fen(fen).unwrap();
        AlphaBetaEngine::new(SearchConfig::with_depth(depth))
            .find_best_move(&board)
            .unwrap()
    }

    #[test]
    fn test_white_takes_the_attacking_queen() {
        let (best_move, score, nodes) = search("k7/8/8/8/3q4/8/8/K2R4 w", 4);
        assert_eq!(best_move.as_algebraic(), "d1d4");
        assert_eq!(score, 5);
        assert!(nodes > 0);
    }

    #[test]
    fn test_black_takes_the_attacking_queen() {
        let (best_move, score, _) = search("k2r4/8/8/3Q4/8/8/8/K7 b", 4);
        assert_eq!(best_move.as_algebraic(), "d8d5");
        assert_eq!(score, -5);
    }

    #[test]
    fn test_depth_one_is_greedy() {
        let (best_move, score, nodes) = search("k7/8/8/8/8/2p5/1P6/K7 w", 1);
        assert_eq!(best_move.as_algebraic(), "b2c3");
        assert_eq!(score, 1);
        // One node per root move: king a2, b1 and the pawn's advance and capture.
        assert_eq!(nodes, 4);
    }

    #[test]
    fn test_king_capture_is_terminal() {
        let board = ChessBoard::from_fen("k7/8/8/8/8/8/8/RK6 w").unwrap();
        let (best_move, score, _) = AlphaBetaEngine::new(SearchConfig::default())
            .find_best_move(&board)
            .unwrap();
        assert_eq!(best_move.as_algebraic(), "a1a8");
        assert_eq!(score, 1005);

        let config = SearchConfig {
            stop_at_king_capture: false,
            ..SearchConfig::default()
        };
        let (best_move, score, _) = AlphaBetaEngine::new(config).find_best_move(&board).unwrap();
        assert_eq!(best_move.as_algebraic(), "a1a8");
        // Black has no replies left, which scores as the minimizing sentinel.
        assert_eq!(score, MAX_EVALUATION);
    }

    #[test]
    fn test_ties_keep_the_first_move() {
        let board = ChessBoard::new();
        let moves = board.legal_moves();
        let (best_move, score, _) = AlphaBetaEngine::new(SearchConfig::with_depth(2))
            .find_best_move_among(&board, &moves)
            .unwrap();
        assert_eq!(best_move, moves[0]);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_search_does_not_touch_the_board() {
        let board = ChessBoard::new();
        AlphaBetaEngine::new(SearchConfig::with_depth(3)).find_best_move(&board);
        assert_eq!(board, ChessBoard::new());
    }

    #[test]
    fn test_no_moves() {
        let board = ChessBoard::new();
        assert_eq!(AlphaBetaEngine::new(SearchConfig::default()).find_best_move_among(&board, &[]), None);
    }
}
