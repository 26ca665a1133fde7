use crate::chess_boards::chess_board::{Move, Team};

/// Failures while turning text into cells, moves or whole positions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid cell: {0:?}")]
    InvalidCell(String),
    #[error("invalid move: {0:?}")]
    InvalidMove(String),
    #[error("unknown piece glyph: {0:?}")]
    UnknownGlyph(char),
    #[error("invalid diagram: {0}")]
    InvalidDiagram(String),
    #[error("invalid position: {0}")]
    InvalidPosition(String),
    #[error(transparent)]
    Glyph(#[from] GlyphError),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphError {
    #[error("glyph truncated at byte {offset}")]
    Truncated { offset: usize },
    #[error("invalid utf-8 sequence at byte {offset}")]
    InvalidSequence { offset: usize },
}

/// Failures of a player choosing its move.
#[derive(thiserror::Error, Debug)]
pub enum PlayerError {
    #[error("move input closed")]
    InputClosed,
    #[error("no legal moves to choose from")]
    NoMoves,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{player} chose {mv}, which is not a legal move")]
    IllegalMove { player: Team, mv: Move },
}
