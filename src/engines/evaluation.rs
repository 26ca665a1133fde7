use crate::chess_boards::chess_board::{ChessBoard, Team};

/// Material balance from White's point of view. No positional or mobility terms.
pub fn evaluate_board(board: &ChessBoard) -> i32 {
    board
        .cells()
        .map(|(_, piece)| {
            let sign = if piece.team() == Team::White { 1 } else { -1 };
            piece.kind().value() * sign
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_is_balanced() {
        assert_eq!(evaluate_board(&ChessBoard::new()), 0);
        assert_eq!(evaluate_board(&ChessBoard::empty()), 0);
    }

    #[test]
    fn test_material_values() {
        let mut board = ChessBoard::new();
        board.remove_piece("d8".parse().unwrap());
        assert_eq!(evaluate_board(&board), 9);
        board.remove_piece("a1".parse().unwrap());
        assert_eq!(evaluate_board(&board), 4);
        board.remove_piece("e8".parse().unwrap());
        assert_eq!(evaluate_board(&board), 1004);

        let board = ChessBoard::from_fen("k7/pn6/8/8/8/8/8/KB6 w").unwrap();
        assert_eq!(evaluate_board(&board), 1003 - 1004);
    }

    #[test]
    fn test_custom_kinds_are_worth_nothing() {
        let board = ChessBoard::from_fen("k7/xm6/8/8/8/8/XM6/K7 w").unwrap();
        assert_eq!(evaluate_board(&board), 0);
        let board = ChessBoard::from_fen("k7/xm6/8/8/8/8/8/K7 b").unwrap();
        assert_eq!(evaluate_board(&board), 0);
    }
}
