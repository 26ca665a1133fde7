use super::catalog::*;
use super::model::BOARD_SIZE;
use super::{fen, Cell, Move, Piece, Team};

const SIZE: usize = BOARD_SIZE as usize;

/// An 8x8 grid of piece descriptors plus the team to move. Every cell always holds a
/// descriptor; empty cells hold `EMPTY`. Cloning gives a fully independent board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    pub(crate) squares: [[Piece; SIZE]; SIZE],
    pub(crate) active_team: Team,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessBoard {
    /// Creates a board in the standard starting position, White to move.
    pub fn new() -> Self {
        let mut board = Self::empty();
        const BACK_RANK: [Piece; SIZE] = [
            WHITE_ROOK,
            WHITE_KNIGHT,
            WHITE_BISHOP,
            WHITE_QUEEN,
            WHITE_KING,
            WHITE_BISHOP,
            WHITE_KNIGHT,
            WHITE_ROOK,
        ];
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.squares[0][file] = *piece;
            board.squares[1][file] = WHITE_PAWN;
            board.squares[6][file] = BLACK_PAWN;
            board.squares[7][file] = Piece { kind: piece.kind, team: Team::Black };
        }
        board
    }

    /// Creates a board with no pieces, White to move.
    pub fn empty() -> Self {
        Self {
            squares: [[EMPTY; SIZE]; SIZE],
            active_team: Team::White,
        }
    }

    /// Delegates parsing to the `fen` module.
    pub fn from_fen(fen: &str) -> Result<Self, crate::error::ParseError> {
        fen::from_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        fen::to_fen(self)
    }

    pub fn active_team(&self) -> Team {
        self.active_team
    }

    pub fn set_active_team(&mut self, team: Team) {
        self.active_team = team;
    }

    /// Returns true if the cell is on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.is_on_board()
    }

    /// The descriptor at `cell`. Panics if the cell is off the board.
    pub fn piece_at(&self, cell: Cell) -> Piece {
        assert!(self.contains(cell), "cell {} is not on the board", cell);
        self.squares[cell.rank as usize][cell.file as usize]
    }

    pub fn set_piece(&mut self, cell: Cell, piece: Piece) {
        assert!(self.contains(cell), "cell {} is not on the board", cell);
        self.squares[cell.rank as usize][cell.file as usize] = piece;
    }

    pub fn remove_piece(&mut self, cell: Cell) {
        self.set_piece(cell, EMPTY);
    }

    /// Iterates over all 64 cells, rank by rank starting at rank 1.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        (0..BOARD_SIZE).flat_map(move |rank| {
            (0..BOARD_SIZE).map(move |file| {
                let cell = Cell::new(file, rank);
                (cell, self.piece_at(cell))
            })
        })
    }

    /// All pseudo-legal moves of the team to move.
    ///
    /// Panics if a piece rule produced a move that leaves the board: that is a defect in
    /// the rule, not a recoverable condition.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for (cell, piece) in self.cells() {
            if piece.team() == self.active_team {
                piece.enumerate_moves(self, cell, &mut moves);
            }
        }
        for mv in &moves {
            if !self.contains(mv.from) || !self.contains(mv.to) {
                panic!("legal_moves produced a move to or from a cell that is not on the board: {}", mv);
            }
        }
        moves
    }

    /// Applies a move by handing it to the piece standing on `mv.from`. Membership in
    /// `legal_moves()` is the caller's responsibility.
    pub fn make_move(&mut self, mv: Move) {
        if !self.contains(mv.from) || !self.contains(mv.to) {
            panic!("make_move called with a move to or from a cell that is not on the board: {}", mv);
        }
        let piece = self.piece_at(mv.from);
        piece.apply(self, mv);
    }

    /// Relocates the moving piece, empties its origin and passes the turn.
    pub(crate) fn make_classical_move(&mut self, mv: Move) {
        let piece = self.piece_at(mv.from);
        self.set_piece(mv.to, piece);
        self.set_piece(mv.from, EMPTY);
        self.active_team = self.active_team.opposite();
    }

    pub fn find_king_position(&self, team: Team) -> Option<Cell> {
        self.cells()
            .find(|(_, piece)| piece.is_king() && piece.team() == team)
            .map(|(cell, _)| cell)
    }

    /// The team whose opponent has lost its king, or `Team::None` while both kings stand.
    pub fn winner(&self) -> Team {
        let mut found_white_king = false;
        let mut found_black_king = false;
        for (_, piece) in self.cells() {
            if piece == WHITE_KING {
                found_white_king = true;
            } else if piece == BLACK_KING {
                found_black_king = true;
            }
        }
        if !found_white_king {
            return Team::Black;
        }
        if !found_black_king {
            return Team::White;
        }
        Team::None
    }

    /// Boxed grid rendering used by the interactive driver.
    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for rank in (0..BOARD_SIZE).rev() {
            // Render rows from top (8) to bottom (1)
            board_representation.push_str(&format!("{} │", rank + 1));
            for file in 0..BOARD_SIZE {
                let piece = self.piece_at(Cell::new(file, rank));
                let glyph = if piece.is_empty() { ' ' } else { piece.symbol() };
                board_representation.push_str(&format!(" {} │", glyph));
            }
            board_representation.push_str(&format!(" {}\n", rank + 1));

            if rank > 0 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}
