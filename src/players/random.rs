use rand::Rng;
use rand_pcg::Pcg64;

use super::{rng_from_seed, Player};
use crate::chess_boards::chess_board::{ChessBoard, Move, Team};
use crate::error::PlayerError;

/// Picks uniformly among the legal moves.
pub struct RandomPlayer {
    team: Team,
    rng: Pcg64,
}

impl RandomPlayer {
    pub fn new(team: Team) -> Self {
        Self::from_rng(team, rng_from_seed(None))
    }

    pub fn with_seed(team: Team, seed: u64) -> Self {
        Self::from_rng(team, rng_from_seed(Some(seed)))
    }

    pub fn from_rng(team: Team, rng: Pcg64) -> Self {
        RandomPlayer { team, rng }
    }
}

impl Player for RandomPlayer {
    fn team(&self) -> Team {
        self.team
    }

    fn choose_move(&mut self, _board: &ChessBoard, moves: &[Move]) -> Result<Move, PlayerError> {
        if moves.is_empty() {
            return Err(PlayerError::NoMoves);
        }
        Ok(moves[self.rng.gen_range(0..moves.len())])
    }
}
