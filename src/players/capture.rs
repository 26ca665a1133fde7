use rand::seq::SliceRandom;
use rand_pcg::Pcg64;

use super::{is_capture, rng_from_seed, Player};
use crate::chess_boards::chess_board::{ChessBoard, Move, Team};
use crate::error::PlayerError;

/// Takes a random capture when one exists, otherwise a random move.
pub struct CapturePlayer {
    team: Team,
    rng: Pcg64,
}

impl CapturePlayer {
    pub fn new(team: Team) -> Self {
        Self::from_rng(team, rng_from_seed(None))
    }

    pub fn with_seed(team: Team, seed: u64) -> Self {
        Self::from_rng(team, rng_from_seed(Some(seed)))
    }

    pub fn from_rng(team: Team, rng: Pcg64) -> Self {
        CapturePlayer { team, rng }
    }
}

impl Player for CapturePlayer {
    fn team(&self) -> Team {
        self.team
    }

    fn choose_move(&mut self, board: &ChessBoard, moves: &[Move]) -> Result<Move, PlayerError> {
        let mut shuffled_moves = moves.to_vec();
        shuffled_moves.shuffle(&mut self.rng);
        shuffled_moves
            .iter()
            .find(|mv| is_capture(board, **mv))
            .or(shuffled_moves.first())
            .copied()
            .ok_or(PlayerError::NoMoves)
    }
}

/// Like `CapturePlayer`, but capturing the opposing king beats any other capture.
pub struct CheckmateCapturePlayer {
    team: Team,
    rng: Pcg64,
}

impl CheckmateCapturePlayer {
    pub fn new(team: Team) -> Self {
        Self::from_rng(team, rng_from_seed(None))
    }

    pub fn with_seed(team: Team, seed: u64) -> Self {
        Self::from_rng(team, rng_from_seed(Some(seed)))
    }

    pub fn from_rng(team: Team, rng: Pcg64) -> Self {
        CheckmateCapturePlayer { team, rng }
    }
}

impl Player for CheckmateCapturePlayer {
    fn team(&self) -> Team {
        self.team
    }

    fn choose_move(&mut self, board: &ChessBoard, moves: &[Move]) -> Result<Move, PlayerError> {
        let mut shuffled_moves = moves.to_vec();
        shuffled_moves.shuffle(&mut self.rng);
        shuffled_moves
            .iter()
            .find(|mv| is_capture(board, **mv) && board.piece_at(mv.to).is_king())
            .or_else(|| shuffled_moves.iter().find(|mv| is_capture(board, **mv)))
            .or(shuffled_moves.first())
            .copied()
            .ok_or(PlayerError::NoMoves)
    }
}
