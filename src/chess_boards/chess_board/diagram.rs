use std::io::{self, Write};

use super::model::BOARD_SIZE;
use super::{glyph, Cell, ChessBoard, Piece};
use crate::error::ParseError;

const FILE_LABELS: &str = "abcdefgh";

impl ChessBoard {
    /// Renders the board as a glyph diagram with file letters above and below and rank
    /// numbers on both sides, rank 8 at the top:
    ///
    /// ```text
    ///    abcdefgh
    ///  8 ♜♞♝♛♚♝♞♜ 8
    ///  ...
    ///  1 ♖♘♗♕♔♗♘♖ 1
    ///    abcdefgh
    /// ```
    pub fn to_diagram(&self) -> String {
        let mut out = Vec::new();
        let _ = self.write_diagram(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    pub fn write_diagram<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut buf = [0u8; 4];
        writeln!(out, "   {}", FILE_LABELS)?;
        for rank in (0..BOARD_SIZE).rev() {
            write!(out, " {} ", rank + 1)?;
            for file in 0..BOARD_SIZE {
                let symbol = self.piece_at(Cell::new(file, rank)).symbol();
                out.write_all(glyph::encode(symbol, &mut buf))?;
            }
            writeln!(out, " {}", rank + 1)?;
        }
        writeln!(out, "   {}", FILE_LABELS)
    }

    /// Parses a diagram as produced by `to_diagram`. The parsed board has White to move.
    pub fn from_diagram(text: &str) -> Result<Self, ParseError> {
        Self::from_diagram_bytes(text.as_bytes())
    }

    pub fn from_diagram_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let text: String = glyph::decode_all(bytes)?.into_iter().collect();
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() != BOARD_SIZE as usize + 2 {
            return Err(ParseError::InvalidDiagram(format!(
                "expected 10 non-empty lines, found {}",
                lines.len()
            )));
        }
        if lines[0] != FILE_LABELS || lines[lines.len() - 1] != FILE_LABELS {
            return Err(ParseError::InvalidDiagram(String::from("missing file labels")));
        }

        let mut board = ChessBoard::empty();
        for (index, line) in lines[1..=BOARD_SIZE as usize].iter().enumerate() {
            let rank = BOARD_SIZE - 1 - index as i8;
            let label = (rank + 1).to_string();
            let parts: Vec<&str> = line.split_whitespace().collect();
            let labels_ok = match parts.as_slice() {
                [left, _] => *left == label,
                [left, _, right] => *left == label && *right == label,
                _ => false,
            };
            if !labels_ok {
                return Err(ParseError::InvalidDiagram(format!("malformed line for rank {}: {:?}", label, line)));
            }

            let glyphs: Vec<char> = parts[1].chars().collect();
            if glyphs.len() != BOARD_SIZE as usize {
                return Err(ParseError::InvalidDiagram(format!(
                    "rank {} has {} cells instead of 8",
                    label,
                    glyphs.len()
                )));
            }
            for (file, glyph) in glyphs.into_iter().enumerate() {
                let piece = Piece::from_glyph(glyph).ok_or(ParseError::UnknownGlyph(glyph))?;
                board.set_piece(Cell::new(file as i8, rank), piece);
            }
        }
        Ok(board)
    }
}

impl std::fmt::Display for ChessBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_diagram())
    }
}

#[cfg(test)]
mod tests {
    use super::super::catalog::*;
    use super::super::Team;
    use super::*;
    use crate::error::GlyphError;

    const START: &str = "   abcdefgh
 8 ♜♞♝♛♚♝♞♜ 8
 7 ♟♟♟♟♟♟♟♟ 7
 6 ........ 6
 5 ........ 5
 4 ........ 4
 3 ........ 3
 2 ♙♙♙♙♙♙♙♙ 2
 1 ♖♘♗♕♔♗♘♖ 1
   abcdefgh
";

    #[test]
    fn test_render_initial_position() {
        assert_eq!(ChessBoard::new().to_diagram(), START);
        assert_eq!(ChessBoard::new().to_string(), START);
    }

    #[test]
    fn test_parse_initial_position() {
        assert_eq!(ChessBoard::from_diagram(START).unwrap(), ChessBoard::new());
    }

    #[test]
    fn test_parsed_diagram_with_black_to_move() {
        let mut board = ChessBoard::from_diagram(START).unwrap();
        assert_eq!(board.active_team(), Team::White);
        board.set_active_team(Team::Black);
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 12);
        assert!(moves.iter().all(|mv| board.piece_at(mv.from).team() == Team::Black));
    }

    #[test]
    fn test_parse_custom_pieces() {
        let text = START.replace(" 4 ........ 4", " 4 .🐁..⛊... 4");
        let board = ChessBoard::from_diagram(&text).unwrap();
        assert_eq!(board.piece_at("b4".parse().unwrap()), WHITE_MOUSE);
        assert_eq!(board.piece_at("e4".parse().unwrap()), BLACK_BACKBENCHER);
        assert_eq!(ChessBoard::from_diagram(&board.to_diagram()).unwrap(), board);
    }

    #[test]
    fn test_unknown_glyph_is_rejected() {
        let text = START.replace(" 5 ........ 5", " 5 ...x.... 5");
        assert_eq!(ChessBoard::from_diagram(&text), Err(ParseError::UnknownGlyph('x')));
    }

    #[test]
    fn test_malformed_diagrams_are_rejected() {
        let short_rank = START.replace(" 5 ........ 5", " 5 ....... 5");
        assert!(matches!(ChessBoard::from_diagram(&short_rank), Err(ParseError::InvalidDiagram(_))));

        let wrong_label = START.replace(" 5 ........ 5", " 6 ........ 6");
        assert!(matches!(ChessBoard::from_diagram(&wrong_label), Err(ParseError::InvalidDiagram(_))));

        let missing_rank = START.replace(" 5 ........ 5\n", "");
        assert!(matches!(ChessBoard::from_diagram(&missing_rank), Err(ParseError::InvalidDiagram(_))));
    }

    #[test]
    fn test_invalid_bytes_are_rejected() {
        let mut bytes = START.as_bytes().to_vec();
        bytes.push(0xff);
        assert!(matches!(
            ChessBoard::from_diagram_bytes(&bytes),
            Err(ParseError::Glyph(GlyphError::InvalidSequence { .. }))
        ));
    }
}
