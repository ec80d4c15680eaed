//! FEN-style save format for [`GameState`].
//!
//! Fields: placement, side, castling, en-passant target, non-capture
//! counter, full-move number. The last two are optional when parsing.

use super::error::FenError;
use super::{
    CastleSide, CastlingRights, Color, EnPassantOffer, GameBuilder, GameState, Piece, Square,
};

impl GameState {
    /// Parse a game from a FEN line.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut builder = GameBuilder::new();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let square = Square::new(file as u8, rank).ok_or(FenError::InvalidFileCount {
                    rank: rank_idx,
                    files: file + 1,
                })?;
                builder = builder.piece(square, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::InvalidFileCount {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        builder = builder.side_to_move(side);

        // [kingside, queenside] per color
        let mut sides = [[false; 2]; 2];
        if parts[2] != "-" {
            for c in parts[2].chars() {
                let (color, slot) = match c {
                    'K' => (Color::White, 0),
                    'Q' => (Color::White, 1),
                    'k' => (Color::Black, 0),
                    'q' => (Color::Black, 1),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
                sides[color.index()][slot] = true;
            }
        }
        for color in Color::BOTH {
            let [kingside, queenside] = sides[color.index()];
            builder = builder.castling(
                color,
                CastlingRights::from_flags(kingside, kingside || queenside, queenside),
            );
        }

        if parts[3] != "-" {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let target: Square = parts[3].parse().map_err(|_| invalid())?;
            if target.rank() != en_passant_rank(side) {
                return Err(invalid());
            }
            builder = builder.en_passant(target.file());
        }

        let non_capture = match parts.get(4) {
            Some(field) => parse_counter(field)?,
            None => 0,
        };
        let (fullmove, fullmove_field) = match parts.get(5) {
            Some(field) => (parse_counter(field)?.max(1), *field),
            None => (1, "1"),
        };
        let ply = (fullmove - 1)
            .checked_mul(2)
            .and_then(|ply| ply.checked_add(u32::from(side == Color::Black)))
            .ok_or_else(|| FenError::InvalidCounter {
                found: fullmove_field.to_string(),
            })?;

        Ok(builder.non_capture_count(non_capture).ply(ply).build()?)
    }

    /// Render the game as a FEN line.
    ///
    /// Castling letters describe which castles remain possible; a king flag
    /// without either rook flag is written as `-`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.position.get(Square::at(file, rank)).to_char() {
                    Some(c) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.side_to_move == Color::Black {
            "b"
        } else {
            "w"
        };

        let mut castling = String::new();
        for (color, letters) in [(Color::White, ['K', 'Q']), (Color::Black, ['k', 'q'])] {
            let rights = self.castling_rights(color);
            if rights.allows(CastleSide::Kingside) {
                castling.push(letters[0]);
            }
            if rights.allows(CastleSide::Queenside) {
                castling.push(letters[1]);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = self
            .en_passant
            .target_for(self.side_to_move)
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            en_passant,
            self.non_capture,
            self.ply / 2 + 1
        )
    }
}

/// Rank of the square a capturing pawn of `side` would land on.
fn en_passant_rank(side: Color) -> u8 {
    if side == Color::Black {
        2
    } else {
        5
    }
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        found: field.to_string(),
    })
}

impl std::str::FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_fen(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GameState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_fen())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GameState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fen = String::deserialize(deserializer)?;
        GameState::try_from_fen(&fen).map_err(serde::de::Error::custom)
    }
}

impl EnPassantOffer {
    /// The offer as a FEN target square for `side` to capture onto.
    #[must_use]
    pub fn target_for(self, side: Color) -> Option<Square> {
        Square::new(self.file()?, en_passant_rank(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ConsistencyError, PieceKind};

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn start_position_round_trips() {
        let game = GameState::try_from_fen(START).unwrap();
        assert_eq!(game, GameState::new());
        assert_eq!(game.to_fen(), START);
    }

    #[test]
    fn counters_and_side() {
        let game =
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 b - - 17 23").unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.non_capture_count(), 17);
        assert_eq!(game.ply(), 45);
        assert_eq!(game.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 17 23");
    }

    #[test]
    fn optional_counters_default() {
        let game = GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
        assert_eq!(game.non_capture_count(), 0);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn castling_letters_map_to_flags() {
        let game =
            GameState::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        assert_eq!(
            game.castling_rights(Color::White),
            CastlingRights::from_flags(true, true, false)
        );
        assert_eq!(
            game.castling_rights(Color::Black),
            CastlingRights::from_flags(false, true, true)
        );
        assert!(game.to_fen().contains(" Kq "));
    }

    #[test]
    fn en_passant_square_follows_side_to_move() {
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        let game = GameState::try_from_fen(fen).unwrap();
        assert_eq!(game.en_passant().file(), Some(3));
        assert_eq!(game.to_fen(), fen);

        // d3 is only valid with black to move
        assert!(matches!(
            GameState::try_from_fen("4k3/8/8/8/3P4/8/8/4K3 w - d3 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            GameState::try_from_fen("8/8/8 w"),
            Err(FenError::TooFewParts { found: 2 })
        );
        assert!(matches!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidRank { rank: 7 })
        ));
        assert!(matches!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1"),
            Err(FenError::InvalidFileCount { rank: 7, .. })
        ));
        assert!(matches!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1"),
            Err(FenError::InvalidPiece { char: 'X' })
        ));
        assert!(matches!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert!(matches!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 w KZ - 0 1"),
            Err(FenError::InvalidCastling { char: 'Z' })
        ));
        assert!(matches!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - ten 1"),
            Err(FenError::InvalidCounter { .. })
        ));
    }

    #[test]
    fn rejects_fullmove_numbers_that_overflow_the_ply() {
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 4294967295"),
            Err(FenError::InvalidCounter {
                found: "4294967295".to_string()
            })
        );
        assert!(matches!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 2147483649"),
            Err(FenError::InvalidCounter { .. })
        ));
        let last = GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 2147483648").unwrap();
        assert_eq!(last.ply(), u32::MAX);
    }

    #[test]
    fn rejects_positions_without_both_kings() {
        assert_eq!(
            GameState::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::Consistency(ConsistencyError::MissingKing {
                color: Color::Black
            }))
        );
    }

    #[test]
    fn pieces_land_on_the_right_squares() {
        let game = GameState::try_from_fen(START).unwrap();
        let e1: Square = "e1".parse().unwrap();
        let d8: Square = "d8".parse().unwrap();
        assert!(game.position().get(e1).is(Color::White, PieceKind::King));
        assert!(game.position().get(d8).is(Color::Black, PieceKind::Queen));
    }
}
