//! Error types for the rules core.

use std::error::Error;
use std::fmt;

use super::state::Outcome;
use super::types::{CastleSide, Color, PieceKind, Piece, Square};

/// Error type for piece construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// Exactly one of color and kind is `None`
    IllegalPiece { color: Color, kind: PieceKind },
}

impl fmt::Display for PieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceError::IllegalPiece { color, kind } => {
                write!(f, "Illegal piece: color {color} with kind {kind}")
            }
        }
    }
}

impl Error for PieceError {}

/// Error type for move notation that does not decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Empty notation string
    Empty,
    /// Origin or destination is not a square id
    InvalidSquare { notation: String },
    /// Promotion suffix names no promotable kind, or follows a non-pawn move
    InvalidPromotion { notation: String },
    /// Anything else that does not fit the grammar
    Malformed { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Empty => write!(f, "Malformed move: empty notation"),
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Malformed move '{notation}': invalid square")
            }
            MoveParseError::InvalidPromotion { notation } => {
                write!(f, "Malformed move '{notation}': invalid promotion")
            }
            MoveParseError::Malformed { notation } => {
                write!(f, "Malformed move '{notation}'")
            }
        }
    }
}

impl Error for MoveParseError {}

/// A position or state that no legal game can reach.
///
/// These are fatal: the core refuses to guess and surfaces them to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    /// No king of this color on the board
    MissingKing { color: Color },
    /// More than one king of this color on the board
    MultipleKings { color: Color, count: u32 },
    /// The origin square does not hold the piece the move names
    OriginMismatch {
        square: Square,
        expected: PieceKind,
        found: Piece,
    },
    /// King or rook not on its home square for a castling move
    CastlingPiecesMissing { color: Color, side: CastleSide },
    /// A pawn captured onto an empty square with no pawn to take beside it
    MissingEnPassantVictim { square: Square },
    /// The side to move is `Color::None`
    NoSideToMove,
    /// The side that just moved left its own king attacked
    OpponentInCheck { color: Color },
}

impl fmt::Display for ConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyError::MissingKing { color } => {
                write!(f, "Inconsistent position: no {color} king")
            }
            ConsistencyError::MultipleKings { color, count } => {
                write!(f, "Inconsistent position: {count} {color} kings")
            }
            ConsistencyError::OriginMismatch {
                square,
                expected,
                found,
            } => write!(
                f,
                "Inconsistent move: expected {expected} on {square}, found {found}"
            ),
            ConsistencyError::CastlingPiecesMissing { color, side } => {
                write!(f, "Inconsistent castling: {color} {side:?} king or rook not home")
            }
            ConsistencyError::MissingEnPassantVictim { square } => {
                write!(f, "Inconsistent en passant: no pawn to capture on {square}")
            }
            ConsistencyError::NoSideToMove => {
                write!(f, "Inconsistent state: side to move is NONE")
            }
            ConsistencyError::OpponentInCheck { color } => {
                write!(f, "Inconsistent state: {color} is in check but not to move")
            }
        }
    }
}

impl Error for ConsistencyError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl Error for SquareError {}

/// Error type for save-format (FEN) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Wrong number of ranks in position string
    InvalidRank { rank: usize },
    /// Wrong number of files in a rank
    InvalidFileCount { rank: usize, files: usize },
    /// Counter field is not a number
    InvalidCounter { found: String },
    /// Placement parsed but does not describe a playable game
    Consistency(ConsistencyError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::InvalidFileCount { rank, files } => {
                write!(f, "Rank {rank} has {files} files, expected 8")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}' in FEN")
            }
            FenError::Consistency(err) => write!(f, "Inconsistent FEN position: {err}"),
        }
    }
}

impl Error for FenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FenError::Consistency(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConsistencyError> for FenError {
    fn from(err: ConsistencyError) -> Self {
        FenError::Consistency(err)
    }
}

/// Error type for applying a move to a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The notation did not decode
    Malformed(MoveParseError),
    /// The move is not in the current legal set
    IllegalMove { notation: String },
    /// The game already reached a terminal outcome
    GameOver { outcome: Outcome },
    /// The state is corrupt
    Consistency(ConsistencyError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Malformed(err) => write!(f, "{err}"),
            GameError::IllegalMove { notation } => write!(f, "Illegal move '{notation}'"),
            GameError::GameOver { outcome } => write!(f, "Game is over: {outcome}"),
            GameError::Consistency(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::Malformed(err) => Some(err),
            GameError::Consistency(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveParseError> for GameError {
    fn from(err: MoveParseError) -> Self {
        GameError::Malformed(err)
    }
}

impl From<ConsistencyError> for GameError {
    fn from(err: ConsistencyError) -> Self {
        GameError::Consistency(err)
    }
}
