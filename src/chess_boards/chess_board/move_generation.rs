use super::model::BOARD_SIZE;
use super::{Cell, ChessBoard, Move, Piece, PieceKind};

const KING_MOVES: [(i8, i8); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
const KNIGHT_MOVES: [(i8, i8); 8] = [(-1, 2), (1, 2), (-2, 1), (2, 1), (-2, -1), (2, -1), (-1, -2), (1, -2)];
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [(-1, 1), (0, 1), (1, 1), (-1, 0), (1, 0), (-1, -1), (0, -1), (1, -1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (-1, 0), (1, 0), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

impl Piece {
    /// Appends every pseudo-legal move of this piece standing on `from`. Never mutates the board.
    pub fn enumerate_moves(&self, board: &ChessBoard, from: Cell, moves: &mut Vec<Move>) {
        match self.kind {
            PieceKind::Empty => {}
            PieceKind::King => self.generate_moves_from_offsets(board, from, &KING_MOVES, moves),
            PieceKind::Knight => self.generate_moves_from_offsets(board, from, &KNIGHT_MOVES, moves),
            PieceKind::Queen => self.generate_sliding_moves(board, from, &QUEEN_DIRECTIONS, moves),
            PieceKind::Rook => self.generate_sliding_moves(board, from, &ROOK_DIRECTIONS, moves),
            PieceKind::Bishop => self.generate_sliding_moves(board, from, &BISHOP_DIRECTIONS, moves),
            PieceKind::Pawn { forward } => self.generate_pawn_moves(board, from, forward, moves),
            PieceKind::BackBencher { forward } => {
                self.generate_pawn_moves(board, from, forward, moves);
                self.generate_retreat_moves(board, from, forward, moves);
            }
            PieceKind::Mouse => self.generate_mouse_moves(board, from, moves),
        }
    }

    /// Convenience wrapper returning the moves of this piece as a fresh vector.
    pub fn moves_from(&self, board: &ChessBoard, from: Cell) -> Vec<Move> {
        let mut moves = Vec::new();
        self.enumerate_moves(board, from, &mut moves);
        moves
    }

    /// Applies `mv` for this piece. Every current kind moves classically; the empty
    /// descriptor never moves.
    pub fn apply(&self, board: &mut ChessBoard, mv: Move) {
        match self.kind {
            PieceKind::Empty => {}
            PieceKind::King
            | PieceKind::Queen
            | PieceKind::Bishop
            | PieceKind::Knight
            | PieceKind::Rook
            | PieceKind::Pawn { .. }
            | PieceKind::BackBencher { .. }
            | PieceKind::Mouse => board.make_classical_move(mv),
        }
    }

    fn can_land_on(&self, board: &ChessBoard, to: Cell) -> bool {
        if !board.contains(to) {
            return false;
        }
        let target = board.piece_at(to);
        target.is_empty() || self.is_opposite_team(&target)
    }

    /// King and knight: fixed offsets, no blocking.
    fn generate_moves_from_offsets(&self, board: &ChessBoard, from: Cell, offsets: &[(i8, i8)], moves: &mut Vec<Move>) {
        for &(files, ranks) in offsets {
            let to = from.offset(files, ranks);
            if self.can_land_on(board, to) {
                moves.push(Move::new(from, to));
            }
        }
    }

    /// Rays for bishop, rook and queen. A ray stops at the first occupied cell, which is
    /// included only when it holds an opposing piece.
    fn generate_sliding_moves(&self, board: &ChessBoard, from: Cell, directions: &[(i8, i8)], moves: &mut Vec<Move>) {
        for &(files, ranks) in directions {
            let mut to = from.offset(files, ranks);
            while board.contains(to) {
                let target = board.piece_at(to);
                if target.is_empty() {
                    moves.push(Move::new(from, to));
                } else {
                    if self.is_opposite_team(&target) {
                        moves.push(Move::new(from, to));
                    }
                    break; // Block sliding
                }
                to = to.offset(files, ranks);
            }
        }
    }

    /// One step forward onto an empty cell, diagonals only as captures.
    fn generate_pawn_moves(&self, board: &ChessBoard, from: Cell, forward: i8, moves: &mut Vec<Move>) {
        let to = from.offset(0, forward);
        if board.contains(to) && board.piece_at(to).is_empty() {
            moves.push(Move::new(from, to));
        }

        for files in [-1, 1] {
            let to = from.offset(files, forward);
            if board.contains(to) && self.is_opposite_team(&board.piece_at(to)) {
                moves.push(Move::new(from, to));
            }
        }
    }

    /// Every cell on every rank behind the piece, relative to its forward direction.
    fn generate_retreat_moves(&self, board: &ChessBoard, from: Cell, forward: i8, moves: &mut Vec<Move>) {
        let mut rank = from.rank - forward;
        while (0..BOARD_SIZE).contains(&rank) {
            for file in 0..BOARD_SIZE {
                let to = Cell::new(file, rank);
                if self.can_land_on(board, to) {
                    moves.push(Move::new(from, to));
                }
            }
            rank -= forward;
        }
    }

    /// Straight ahead, the edge cells of its own and the neighbouring ranks, and the two
    /// corners of its home rank. A destination reachable by several rules is listed once.
    fn generate_mouse_moves(&self, board: &ChessBoard, from: Cell, moves: &mut Vec<Move>) {
        let home_rank = self.team.home_rank();
        let mut targets = vec![from.offset(0, self.team.forward())];
        for rank in [from.rank, from.rank + 1, from.rank - 1] {
            targets.push(Cell::new(0, rank));
            targets.push(Cell::new(BOARD_SIZE - 1, rank));
        }
        targets.push(Cell::new(0, home_rank));
        targets.push(Cell::new(BOARD_SIZE - 1, home_rank));

        let first = moves.len();
        for to in targets {
            let mv = Move::new(from, to);
            if self.can_land_on(board, to) && !moves[first..].contains(&mv) {
                moves.push(mv);
            }
        }
    }
}
