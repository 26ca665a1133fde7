use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

pub const BOARD_SIZE: i8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    None,
    White,
    Black,
}

impl Team {
    pub fn opposite(&self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
            Team::None => Team::None,
        }
    }

    /// True when both teams are real teams and differ.
    pub fn is_opposing(&self, other: Team) -> bool {
        matches!((self, other), (Team::White, Team::Black) | (Team::Black, Team::White))
    }

    /// Rank direction a forward-moving piece of this team travels in.
    pub fn forward(&self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
            Team::None => 0,
        }
    }

    /// The rank a team's pieces start on.
    pub fn home_rank(&self) -> i8 {
        match self {
            Team::Black => BOARD_SIZE - 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::None => write!(f, "None"),
            Team::White => write!(f, "White"),
            Team::Black => write!(f, "Black"),
        }
    }
}

/// The movement rule a descriptor belongs to. Forward-moving kinds carry their rank step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Empty,
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn { forward: i8 },
    BackBencher { forward: i8 },
    Mouse,
}

impl PieceKind {
    /// Material value used by the static evaluation.
    pub fn value(&self) -> i32 {
        match self {
            PieceKind::Pawn { .. } => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 1000,
            PieceKind::Empty | PieceKind::BackBencher { .. } | PieceKind::Mouse => 0,
        }
    }
}

/// An immutable piece descriptor. Only the values in the catalog exist; cells hold copies
/// of them and compare structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) team: Team,
}

impl Piece {
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn is_empty(&self) -> bool {
        self.kind == PieceKind::Empty
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    pub fn is_opposite_team(&self, other: &Piece) -> bool {
        self.team.is_opposing(other.team)
    }
}

/// A place on the board: file 0-7 is a-h, rank 0-7 is 1-8. Off-board values are representable
/// so that rules can probe neighbours before checking bounds.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Cell {
    pub file: i8,
    pub rank: i8,
}

impl Cell {
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    pub fn offset(&self, files: i8, ranks: i8) -> Self {
        Self::new(self.file + files, self.rank + ranks)
    }

    pub fn is_on_board(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.file) && (0..BOARD_SIZE).contains(&self.rank)
    }

    pub fn as_algebraic(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (b'a' + self.file as u8) as char, self.rank + 1)
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

impl FromStr for Cell {
    type Err = ParseError;

    /// Parses a square like "e3".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                Ok(Cell::new((file as u8 - b'a') as i8, (rank as u8 - b'1') as i8))
            }
            _ => Err(ParseError::InvalidCell(s.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
}

impl Move {
    pub const fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }

    pub fn as_algebraic(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Accepts "e2e3" as well as "e2 e3".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 4 {
            return Err(ParseError::InvalidMove(s.to_string()));
        }
        let from: String = chars[..2].iter().collect();
        let to: String = chars[2..].iter().collect();
        let from = from.parse().map_err(|_| ParseError::InvalidMove(s.to_string()))?;
        let to = to.parse().map_err(|_| ParseError::InvalidMove(s.to_string()))?;
        Ok(Move { from, to })
    }
}
