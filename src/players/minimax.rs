use super::Player;
use crate::chess_boards::chess_board::{ChessBoard, Move, Team};
use crate::engines::engine_alpha_beta::AlphaBetaEngine;
use crate::engines::{SearchConfig, SearchEngine};
use crate::error::PlayerError;

/// Plays the move the alpha-beta search scores best.
pub struct MinimaxPlayer {
    team: Team,
    engine: AlphaBetaEngine,
    debug: bool,
}

impl MinimaxPlayer {
    pub fn new(team: Team, config: SearchConfig) -> Self {
        MinimaxPlayer {
            team,
            engine: AlphaBetaEngine::new(config),
            debug: false,
        }
    }

    /// Report score and node count of every search on stderr.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Player for MinimaxPlayer {
    fn team(&self) -> Team {
        self.team
    }

    fn choose_move(&mut self, board: &ChessBoard, moves: &[Move]) -> Result<Move, PlayerError> {
        match self.engine.find_best_move_among(board, moves) {
            Some((best_move, score, nodes)) => {
                if self.debug {
                    eprintln!(
                        "{}: best move {} with score {} after {} nodes at depth {}",
                        self.team,
                        best_move,
                        score,
                        nodes,
                        self.engine.config().depth
                    );
                }
                Ok(best_move)
            }
            None => moves.first().copied().ok_or(PlayerError::NoMoves),
        }
    }
}
