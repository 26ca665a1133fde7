use crate::chess_boards::chess_board::{ChessBoard, Move};

/// Counts the leaves of the pseudo-legal move tree below `board`.
pub fn perft(board: &ChessBoard, depth: u8) -> u64 {
    let mut node_count = 0u64;

    if depth == 0 {
        return 1u64;
    }

    for mv in board.legal_moves() {
        let mut new_board = board.clone();
        new_board.make_move(mv);
        node_count += perft(&new_board, depth - 1);
    }
    node_count
}

/// Per-move subtree counts at `depth`, sorted by move text.
pub fn perft_divide(board: &ChessBoard, depth: u8) -> Vec<(Move, u64)> {
    let mut result_moves: Vec<(Move, u64)> = board
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let mut new_board = board.clone();
            new_board.make_move(mv);
            (mv, perft(&new_board, depth.saturating_sub(1)))
        })
        .collect();
    result_moves.sort_by_key(|(mv, _)| mv.as_algebraic());
    result_moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft() {
        let board = ChessBoard::new();
        assert_eq!(perft(&board, 0), 1u64);
        assert_eq!(perft(&board, 1), 12u64);
        assert_eq!(perft(&board, 2), 144u64);
    }

    #[test]
    fn test_perft_kings_only() {
        // Corner kings have three moves each.
        let board = ChessBoard::from_fen("7k/8/8/8/8/8/8/K7 w").unwrap();
        assert_eq!(perft(&board, 1), 3);
        assert_eq!(perft(&board, 2), 9);
    }

    #[test]
    fn test_perft_divide_sums_to_perft() {
        let board = ChessBoard::new();
        let divided = perft_divide(&board, 2);
        assert_eq!(divided.len(), 12);
        assert!(divided.iter().all(|(_, count)| *count == 12));
        assert_eq!(divided.iter().map(|(_, c)| c).sum::<u64>(), perft(&board, 2));
        assert_eq!(divided[0].0.as_algebraic(), "a2a3");
    }
}
