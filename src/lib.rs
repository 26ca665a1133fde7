pub mod chess_boards;
pub mod engines;
pub mod error;
pub mod game;
pub mod players;
pub mod tournament;

pub use chess_boards::chess_board::{Cell, ChessBoard, Move, Piece, PieceKind, Team};
pub use error::{GlyphError, ParseError, PlayerError};
