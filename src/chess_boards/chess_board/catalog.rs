use super::model::{Piece, PieceKind, Team};
use lazy_static::lazy_static;
use std::collections::HashMap;

pub const EMPTY: Piece = Piece { kind: PieceKind::Empty, team: Team::None };
pub const WHITE_KING: Piece = Piece { kind: PieceKind::King, team: Team::White };
pub const BLACK_KING: Piece = Piece { kind: PieceKind::King, team: Team::Black };
pub const WHITE_QUEEN: Piece = Piece { kind: PieceKind::Queen, team: Team::White };
pub const BLACK_QUEEN: Piece = Piece { kind: PieceKind::Queen, team: Team::Black };
pub const WHITE_BISHOP: Piece = Piece { kind: PieceKind::Bishop, team: Team::White };
pub const BLACK_BISHOP: Piece = Piece { kind: PieceKind::Bishop, team: Team::Black };
pub const WHITE_KNIGHT: Piece = Piece { kind: PieceKind::Knight, team: Team::White };
pub const BLACK_KNIGHT: Piece = Piece { kind: PieceKind::Knight, team: Team::Black };
pub const WHITE_ROOK: Piece = Piece { kind: PieceKind::Rook, team: Team::White };
pub const BLACK_ROOK: Piece = Piece { kind: PieceKind::Rook, team: Team::Black };
pub const WHITE_PAWN: Piece = Piece { kind: PieceKind::Pawn { forward: 1 }, team: Team::White };
pub const BLACK_PAWN: Piece = Piece { kind: PieceKind::Pawn { forward: -1 }, team: Team::Black };

/// Moves like a pawn going forward, but may drop back to any cell behind it.
pub const WHITE_BACKBENCHER: Piece = Piece { kind: PieceKind::BackBencher { forward: 1 }, team: Team::White };
pub const BLACK_BACKBENCHER: Piece = Piece { kind: PieceKind::BackBencher { forward: -1 }, team: Team::Black };

/// Hides at the board edges and retreats to its home corners.
pub const WHITE_MOUSE: Piece = Piece { kind: PieceKind::Mouse, team: Team::White };
pub const BLACK_MOUSE: Piece = Piece { kind: PieceKind::Mouse, team: Team::Black };

pub const ALL_PIECES: [Piece; 17] = [
    EMPTY,
    WHITE_KING,
    BLACK_KING,
    WHITE_QUEEN,
    BLACK_QUEEN,
    WHITE_BISHOP,
    BLACK_BISHOP,
    WHITE_KNIGHT,
    BLACK_KNIGHT,
    WHITE_ROOK,
    BLACK_ROOK,
    WHITE_PAWN,
    BLACK_PAWN,
    WHITE_BACKBENCHER,
    BLACK_BACKBENCHER,
    WHITE_MOUSE,
    BLACK_MOUSE,
];

lazy_static! {
    static ref PIECES_BY_GLYPH: HashMap<char, Piece> = ALL_PIECES.iter().map(|p| (p.symbol(), *p)).collect();
}

impl Piece {
    /// Display symbol of the descriptor. Only used for text I/O.
    pub fn symbol(&self) -> char {
        match (self.kind, self.team) {
            (PieceKind::Empty, _) => '.',
            (PieceKind::King, Team::White) => '♔',
            (PieceKind::King, _) => '♚',
            (PieceKind::Queen, Team::White) => '♕',
            (PieceKind::Queen, _) => '♛',
            (PieceKind::Bishop, Team::White) => '♗',
            (PieceKind::Bishop, _) => '♝',
            (PieceKind::Knight, Team::White) => '♘',
            (PieceKind::Knight, _) => '♞',
            (PieceKind::Rook, Team::White) => '♖',
            (PieceKind::Rook, _) => '♜',
            (PieceKind::Pawn { .. }, Team::White) => '♙',
            (PieceKind::Pawn { .. }, _) => '♟',
            (PieceKind::BackBencher { .. }, Team::White) => '⛉',
            (PieceKind::BackBencher { .. }, _) => '⛊',
            (PieceKind::Mouse, Team::White) => '🐁',
            (PieceKind::Mouse, _) => '🐀',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Piece> {
        PIECES_BY_GLYPH.get(&glyph).copied()
    }
}
