use crate::chess_boards::chess_board::{ChessBoard, Move, Team};
use crate::error::PlayerError;
use crate::players::Player;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameOptions {
    /// Stop after this many half-turns. Without a limit two weak players may never finish.
    pub max_turns: Option<u32>,
    /// Print the board and every move on stdout.
    pub verbose: bool,
    /// Print the board as a boxed grid instead of a diagram.
    pub boxed_board: bool,
    pub debug: bool,
}

impl GameOptions {
    fn print_board(&self, board: &ChessBoard) {
        if self.boxed_board {
            println!("{}", board.render_to_string());
        } else {
            println!("{}", board);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    KingCaptured,
    NoLegalMoves,
    TurnLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// `Team::None` unless a king was captured.
    pub winner: Team,
    /// Half-turns played.
    pub turns: u32,
    pub reason: EndReason,
    pub board: ChessBoard,
}

/// Lets the side to move play one half-turn. Returns `None` without touching the board when
/// that side has no legal move.
pub fn play_turn(board: &mut ChessBoard, player: &mut dyn Player, options: &GameOptions) -> Result<Option<Move>, PlayerError> {
    if options.verbose {
        options.print_board(board);
        println!("{}'s turn.", player.name());
    }

    let moves = board.legal_moves();
    if options.debug {
        eprintln!("{} has {} legal moves", board.active_team(), moves.len());
    }
    if moves.is_empty() {
        return Ok(None);
    }

    let mv = player.choose_move(board, &moves)?;
    if !moves.contains(&mv) {
        return Err(PlayerError::IllegalMove {
            player: player.team(),
            mv,
        });
    }

    if options.verbose {
        println!(
            "{} chose to move {} from {} to {} ({})\n",
            player.name(),
            board.piece_at(mv.from).symbol(),
            mv.from,
            mv.to,
            board.piece_at(mv.to).symbol()
        );
    }
    board.make_move(mv);
    Ok(Some(mv))
}

/// Alternates the two players from `board` until a king is captured, the side to move is stuck,
/// or the turn limit is reached.
pub fn play_game(
    mut board: ChessBoard,
    white: &mut dyn Player,
    black: &mut dyn Player,
    options: &GameOptions,
) -> Result<GameOutcome, PlayerError> {
    let mut turns = 0;
    let reason = loop {
        if board.winner() != Team::None {
            break EndReason::KingCaptured;
        }
        if options.max_turns.is_some_and(|max_turns| turns >= max_turns) {
            break EndReason::TurnLimit;
        }

        let player: &mut dyn Player = if board.active_team() == Team::Black {
            &mut *black
        } else {
            &mut *white
        };
        match play_turn(&mut board, player, options)? {
            Some(_) => turns += 1,
            None => break EndReason::NoLegalMoves,
        }
    };

    let winner = board.winner();
    if options.verbose {
        options.print_board(&board);
        match reason {
            EndReason::KingCaptured => println!("{} won!", winner),
            EndReason::NoLegalMoves => println!("{} has no legal moves. Nobody won!", board.active_team()),
            EndReason::TurnLimit => println!("Stopped after {} turns. Nobody won!", turns),
        }
    }

    Ok(GameOutcome {
        winner,
        turns,
        reason,
        board,
    })
}
