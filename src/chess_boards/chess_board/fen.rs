use super::catalog::*;
use super::model::BOARD_SIZE;
use super::{Cell, ChessBoard, Piece, PieceKind, Team};
use crate::error::ParseError;

pub const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

fn piece_from_char(c: char) -> Option<Piece> {
    let piece = match c {
        'p' => BLACK_PAWN,
        'r' => BLACK_ROOK,
        'n' => BLACK_KNIGHT,
        'b' => BLACK_BISHOP,
        'q' => BLACK_QUEEN,
        'k' => BLACK_KING,
        'x' => BLACK_BACKBENCHER,
        'm' => BLACK_MOUSE,
        'P' => WHITE_PAWN,
        'R' => WHITE_ROOK,
        'N' => WHITE_KNIGHT,
        'B' => WHITE_BISHOP,
        'Q' => WHITE_QUEEN,
        'K' => WHITE_KING,
        'X' => WHITE_BACKBENCHER,
        'M' => WHITE_MOUSE,
        _ => return None,
    };
    Some(piece)
}

fn piece_to_char(piece: Piece) -> Option<char> {
    let c = match piece.kind() {
        PieceKind::Empty => return None,
        PieceKind::King => 'k',
        PieceKind::Queen => 'q',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
        PieceKind::Rook => 'r',
        PieceKind::Pawn { .. } => 'p',
        PieceKind::BackBencher { .. } => 'x',
        PieceKind::Mouse => 'm',
    };
    Some(if piece.team() == Team::White { c.to_ascii_uppercase() } else { c })
}

/// Parses the placement and side fields of a position like
/// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w`. Further fields are ignored.
pub fn from_fen(fen: &str) -> Result<ChessBoard, ParseError> {
    let mut board = ChessBoard::empty();
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(ParseError::InvalidPosition(String::from(
            "expected a placement and a side to move",
        )));
    }

    let rows: Vec<&str> = parts[0].split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(ParseError::InvalidPosition(format!("expected 8 rows, found {}", rows.len())));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let rank = BOARD_SIZE - 1 - row_index as i8;
        let mut file = 0i8;

        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                if file as u32 + skip > BOARD_SIZE as u32 {
                    return Err(ParseError::InvalidPosition(format!("too many squares in row {}", row_index + 1)));
                }
                file += skip as i8;
            } else if let Some(piece) = piece_from_char(c) {
                if file >= BOARD_SIZE {
                    return Err(ParseError::InvalidPosition(format!("too many squares in row {}", row_index + 1)));
                }
                board.set_piece(Cell::new(file, rank), piece);
                file += 1;
            } else {
                return Err(ParseError::InvalidPosition(format!("invalid piece character {:?}", c)));
            }
        }
        if file != BOARD_SIZE {
            return Err(ParseError::InvalidPosition(format!(
                "row {} covers {} squares instead of 8",
                row_index + 1,
                file
            )));
        }
    }

    board.active_team = match parts[1] {
        "w" => Team::White,
        "b" => Team::Black,
        other => return Err(ParseError::InvalidPosition(format!("invalid side to move {:?}", other))),
    };

    Ok(board)
}

pub fn to_fen(board: &ChessBoard) -> String {
    let mut board_representation = String::new();

    for rank in (0..BOARD_SIZE).rev() {
        let mut empty_count = 0;

        for file in 0..BOARD_SIZE {
            match piece_to_char(board.piece_at(Cell::new(file, rank))) {
                Some(c) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(c);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }

        if rank > 0 {
            board_representation.push('/');
        }
    }

    let side = if board.active_team() == Team::Black { "b" } else { "w" };
    format!("{} {}", board_representation, side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_matches_new_board() {
        assert_eq!(from_fen(INITIAL_POSITION).unwrap(), ChessBoard::new());
        assert_eq!(ChessBoard::new().to_fen(), INITIAL_POSITION);
    }

    #[test]
    fn test_custom_pieces_and_side() {
        let board = from_fen("4k3/8/8/2m5/8/8/3X4/4K3 b").unwrap();
        assert_eq!(board.piece_at("c5".parse().unwrap()), BLACK_MOUSE);
        assert_eq!(board.piece_at("d2".parse().unwrap()), WHITE_BACKBENCHER);
        assert_eq!(board.active_team(), Team::Black);
        assert_eq!(board.to_fen(), "4k3/8/8/2m5/8/8/3X4/4K3 b");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let board = from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(board, ChessBoard::new());
    }

    #[test]
    fn test_invalid_positions() {
        assert!(from_fen("8/8/8/8/8/8/8/8").is_err());
        assert!(from_fen("8/8/8/8/8/8/8 w").is_err());
        assert!(from_fen("9/8/8/8/8/8/8/8 w").is_err());
        assert!(from_fen("7/8/8/8/8/8/8/8 w").is_err());
        assert!(from_fen("8/8/8/8/8/8/8/7z w").is_err());
        assert!(from_fen("8/8/8/8/8/8/8/8 x").is_err());
        assert!(from_fen("44k/8/8/8/8/8/8/8 w").is_err());
        assert!(matches!(
            from_fen("999999999999999/8/8/8/8/8/8/8 w"),
            Err(ParseError::InvalidPosition(_))
        ));
    }
}
