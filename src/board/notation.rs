//! Compact move notation.
//!
//! Grammar:
//! - piece moves: `<N|B|R|Q|K><from>[x]<to>`, e.g. "Ng1f3", "Qd1xd7"
//! - pawn moves: `<from>[x]<to>[=<Q|R|B|N>]`, e.g. "e2e4", "e5xd6", "a7a8=Q"
//! - castling: "O-O", "O-O-O"
//! - terminal tokens: "checkmate", "stalemate"
//!
//! Encoding then decoding any move yields the same move, and decoding then
//! encoding any accepted string yields the same string.
//!
//! # Examples
//! ```
//! use chess_rules::board::{Move, PieceKind};
//!
//! let mv: Move = "Ng1xf3".parse().unwrap();
//! assert_eq!(mv.piece(), PieceKind::Knight);
//! assert!(mv.is_capture());
//! assert_eq!(mv.to_string(), "Ng1xf3");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::MoveParseError;
use super::types::{CastleSide, Move, Notation, PieceKind, Square};

const CASTLE_KINGSIDE: &str = "O-O";
const CASTLE_QUEENSIDE: &str = "O-O-O";
const CHECKMATE: &str = "checkmate";
const STALEMATE: &str = "stalemate";

fn kind_letter(kind: PieceKind) -> Option<char> {
    kind.to_char().map(|c| c.to_ascii_uppercase())
}

fn kind_from_letter(c: char) -> Option<PieceKind> {
    if c.is_ascii_uppercase() {
        PieceKind::from_char(c)
    } else {
        None
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Castle(CastleSide::Kingside) => f.write_str(CASTLE_KINGSIDE),
            Move::Castle(CastleSide::Queenside) => f.write_str(CASTLE_QUEENSIDE),
            Move::Normal {
                piece,
                from,
                to,
                capture,
                promotion,
            } => {
                if piece != PieceKind::Pawn {
                    if let Some(letter) = kind_letter(piece) {
                        write!(f, "{letter}")?;
                    }
                }
                write!(f, "{from}")?;
                if capture {
                    f.write_str("x")?;
                }
                write!(f, "{to}")?;
                if let Some(letter) = promotion.and_then(kind_letter) {
                    write!(f, "={letter}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Move(mv) => write!(f, "{mv}"),
            Notation::Checkmate => f.write_str(CHECKMATE),
            Notation::Stalemate => f.write_str(STALEMATE),
        }
    }
}

fn parse_square(text: &str, notation: &str) -> Result<Square, MoveParseError> {
    text.parse().map_err(|_| MoveParseError::InvalidSquare {
        notation: notation.to_string(),
    })
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(MoveParseError::Empty);
        }
        match s {
            CASTLE_KINGSIDE => return Ok(Move::Castle(CastleSide::Kingside)),
            CASTLE_QUEENSIDE => return Ok(Move::Castle(CastleSide::Queenside)),
            _ => {}
        }
        let malformed = || MoveParseError::Malformed {
            notation: s.to_string(),
        };
        if !s.is_ascii() {
            return Err(malformed());
        }

        // Leading kind letter, or a pawn move when absent
        let first = s.chars().next().ok_or(MoveParseError::Empty)?;
        let (piece, rest) = if first.is_ascii_uppercase() {
            let kind = kind_from_letter(first)
                .filter(|k| *k != PieceKind::Pawn)
                .ok_or_else(malformed)?;
            (kind, &s[1..])
        } else {
            (PieceKind::Pawn, s)
        };

        // Split off a promotion suffix
        let (body, promotion) = match rest.split_once('=') {
            Some((body, suffix)) => {
                let invalid = || MoveParseError::InvalidPromotion {
                    notation: s.to_string(),
                };
                if piece != PieceKind::Pawn || suffix.len() != 1 {
                    return Err(invalid());
                }
                let kind = suffix
                    .chars()
                    .next()
                    .and_then(kind_from_letter)
                    .filter(|k| k.is_promotion_target())
                    .ok_or_else(invalid)?;
                (body, Some(kind))
            }
            None => (rest, None),
        };

        let (from, capture, to) = match body.len() {
            4 => (&body[..2], false, &body[2..]),
            5 if &body[2..3] == "x" => (&body[..2], true, &body[3..]),
            _ => return Err(malformed()),
        };
        let from = parse_square(from, s)?;
        let to = parse_square(to, s)?;

        Ok(Move::Normal {
            piece,
            from,
            to,
            capture,
            promotion,
        })
    }
}

impl FromStr for Notation {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CHECKMATE => Ok(Notation::Checkmate),
            STALEMATE => Ok(Notation::Stalemate),
            _ => s.parse().map(Notation::Move),
        }
    }
}
