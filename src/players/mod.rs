use std::fmt;
use std::io::{stdin, stdout};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::chess_boards::chess_board::{ChessBoard, Move, Team};
use crate::engines::SearchConfig;
use crate::error::PlayerError;

pub mod capture;
pub mod human;
pub mod minimax;
pub mod random;

pub use capture::{CapturePlayer, CheckmateCapturePlayer};
pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;

/// A move-selection policy for one team.
pub trait Player {
    fn team(&self) -> Team;

    fn name(&self) -> String {
        self.team().to_string()
    }

    /// Picks one of `moves`, the legal moves of `board`. Callers never pass an empty list;
    /// players answer `PlayerError::NoMoves` if they get one anyway.
    fn choose_move(&mut self, board: &ChessBoard, moves: &[Move]) -> Result<Move, PlayerError>;
}

/// Generator for a randomized player. Without a seed it is seeded from the wall clock.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> Pcg64 {
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default()
    });
    Pcg64::seed_from_u64(seed)
}

/// True if `mv` lands on a piece of the mover's opponent.
pub fn is_capture(board: &ChessBoard, mv: Move) -> bool {
    board.piece_at(mv.from).is_opposite_team(&board.piece_at(mv.to))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Random,
    Capture,
    Checkmate,
    Minimax,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 5] = [
        PlayerKind::Human,
        PlayerKind::Random,
        PlayerKind::Capture,
        PlayerKind::Checkmate,
        PlayerKind::Minimax,
    ];

    pub fn is_interactive(&self) -> bool {
        *self == PlayerKind::Human
    }

    /// Builds the player. `seed` only matters for the randomized kinds.
    pub fn build(&self, team: Team, seed: Option<u64>, config: SearchConfig, debug: bool) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::new(team, stdin().lock(), stdout())),
            PlayerKind::Random => Box::new(RandomPlayer::from_rng(team, rng_from_seed(seed))),
            PlayerKind::Capture => Box::new(CapturePlayer::from_rng(team, rng_from_seed(seed))),
            PlayerKind::Checkmate => Box::new(CheckmateCapturePlayer::from_rng(team, rng_from_seed(seed))),
            PlayerKind::Minimax => Box::new(MinimaxPlayer::new(team, config).with_debug(debug)),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::Random => "random",
            PlayerKind::Capture => "capture",
            PlayerKind::Checkmate => "checkmate",
            PlayerKind::Minimax => "minimax",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerKind::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown player kind {:?}, expected one of human, random, capture, checkmate, minimax", s))
    }
}
