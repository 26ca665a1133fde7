pub mod catalog;
pub mod diagram;
pub mod fen;
pub mod glyph;
pub mod model;
pub use model::{Cell, Move, Piece, PieceKind, Team, BOARD_SIZE};

mod chess_board;
mod move_generation;
pub mod test_utils;
pub use chess_board::ChessBoard;
