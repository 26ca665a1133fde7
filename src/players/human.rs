use std::io::{BufRead, Write};

use super::Player;
use crate::chess_boards::chess_board::{ChessBoard, Move, Team};
use crate::error::PlayerError;

/// Reads moves as text, e.g. "e2e3" or "e2 e3", and asks again until the move is legal.
pub struct HumanPlayer<R, W> {
    team: Team,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(team: Team, input: R, output: W) -> Self {
        HumanPlayer { team, input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn list_moves(&mut self, moves: &[Move]) -> std::io::Result<()> {
        let listed: Vec<String> = moves.iter().map(|mv| mv.as_algebraic()).collect();
        writeln!(self.output, "{}", listed.join(" "))
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn team(&self) -> Team {
        self.team
    }

    fn choose_move(&mut self, _board: &ChessBoard, moves: &[Move]) -> Result<Move, PlayerError> {
        if moves.is_empty() {
            return Err(PlayerError::NoMoves);
        }
        loop {
            write!(self.output, "What's your move?: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayerError::InputClosed);
            }
            writeln!(self.output)?;

            let text = line.trim();
            match text.parse::<Move>() {
                Ok(mv) if moves.contains(&mv) => return Ok(mv),
                Ok(mv) => writeln!(
                    self.output,
                    "{} is not a valid move! Please choose one of the following moves:",
                    mv
                )?,
                Err(_) => writeln!(
                    self.output,
                    "{:?} is not a move! Please choose one of the following moves:",
                    text
                )?,
            }
            self.list_moves(moves)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn human(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new(Team::White, Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_accepts_a_legal_move() {
        let board = ChessBoard::new();
        let mut player = human("e2e3\n");
        let mv = player.choose_move(&board, &board.legal_moves()).unwrap();
        assert_eq!(mv.as_algebraic(), "e2e3");
        assert!(String::from_utf8_lossy(player.output()).starts_with("What's your move?: "));
    }

    #[test]
    fn test_accepts_separated_cells() {
        let board = ChessBoard::new();
        let mut player = human("  g1 f3 \n");
        assert_eq!(player.choose_move(&board, &board.legal_moves()).unwrap().as_algebraic(), "g1f3");
    }

    #[test]
    fn test_reprompts_until_legal() {
        let board = ChessBoard::new();
        let mut player = human("e2e4\nhello\ne2e3\n");
        let mv = player.choose_move(&board, &board.legal_moves()).unwrap();
        assert_eq!(mv.as_algebraic(), "e2e3");

        let output = String::from_utf8_lossy(player.output()).into_owned();
        assert_eq!(output.matches("What's your move?: ").count(), 3);
        assert!(output.contains("e2e4 is not a valid move!"));
        assert!(output.contains("\"hello\" is not a move!"));
        assert!(output.contains("b1a3 b1c3 g1f3 g1h3 a2a3"));
    }

    #[test]
    fn test_closed_input() {
        let board = ChessBoard::new();
        let mut player = human("e2e4\n");
        assert!(matches!(
            player.choose_move(&board, &board.legal_moves()),
            Err(PlayerError::InputClosed)
        ));
    }
}
