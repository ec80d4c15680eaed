//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// File letters in index order
const FILE_LETTERS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A square on the board, stored as its index (a1=0, b1=1, ..., h8=63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const H8: Square = Square(63);

    /// Create a square from (file, rank), both 0-7.
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Create a square from coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn at(file: u8, rank: u8) -> Self {
        Square(rank * 8 + file)
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File letter ('a'..='h')
    #[inline]
    #[must_use]
    pub fn file_char(self) -> char {
        FILE_LETTERS[self.file() as usize]
    }

    /// Step by (file delta, rank delta); `None` when leaving the board.
    #[inline]
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file() as i8 + df;
        let rank = self.rank() as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::at(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Iterate all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank() + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square::at(file as u8, rank as u8))
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.file() as usize, sq.rank() as usize)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };

        Ok(Square::at(file, rank))
    }
}
