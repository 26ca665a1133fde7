use crate::chess_boards::chess_board::{ChessBoard, Team};
use crate::engines::SearchConfig;
use crate::error::PlayerError;
use crate::game::{play_game, GameOptions};
use crate::players::PlayerKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub games: u32,
    /// Base seed. Game `n` seeds White with `seed + 2n` and Black with `seed + 2n + 1`.
    pub seed: Option<u64>,
    pub search: SearchConfig,
    pub max_turns: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TournamentResult {
    pub white_wins: u32,
    pub black_wins: u32,
    pub unfinished: u32,
    pub total_turns: u64,
}

impl TournamentResult {
    pub fn games(&self) -> u32 {
        self.white_wins + self.black_wins + self.unfinished
    }
}

/// Plays `config.games` games from the starting position between freshly built players.
pub fn play_tournament(config: &TournamentConfig, debug: bool) -> Result<TournamentResult, PlayerError> {
    let options = GameOptions {
        max_turns: config.max_turns,
        debug,
        ..GameOptions::default()
    };
    let mut result = TournamentResult::default();

    for game in 0..config.games as u64 {
        let white_seed = config.seed.map(|seed| seed.wrapping_add(2 * game));
        let black_seed = config.seed.map(|seed| seed.wrapping_add(2 * game + 1));
        let mut white = config.white.build(Team::White, white_seed, config.search, debug);
        let mut black = config.black.build(Team::Black, black_seed, config.search, debug);

        let outcome = play_game(ChessBoard::new(), white.as_mut(), black.as_mut(), &options)?;
        match outcome.winner {
            Team::White => result.white_wins += 1,
            Team::Black => result.black_wins += 1,
            Team::None => result.unfinished += 1,
        }
        result.total_turns += outcome.turns as u64;
        if debug {
            eprintln!("game {}: {:?} after {} turns", game + 1, outcome.reason, outcome.turns);
        }
    }

    Ok(result)
}
