//! Attacked squares, check detection and the legality filter.

use log::trace;

use super::movegen::{Generated, KingMode};
use super::{
    Bitboard, CastlingRights, Color, ConsistencyError, EnPassantOffer, MoveList, Position,
};

impl Position {
    /// Every square attacked or defended by `color`.
    ///
    /// Non-king pieces are generated normally; the king contributes its
    /// adjacent squares without any safety screening. Exactly one king of
    /// `color` must be on the board.
    pub fn attacked_squares_by(&self, color: Color) -> Result<Bitboard, ConsistencyError> {
        let king = self.king_square(color)?;
        let mut out = self.generate_non_king(color, EnPassantOffer::none());
        self.generate_king_moves(king, color, KingMode::IgnoreChecks, &mut out);
        let Generated { attacks, .. } = out;
        Ok(attacks)
    }

    /// Returns true if `side`'s king stands on a square the other side attacks.
    pub fn is_in_check(&self, side: Color) -> Result<bool, ConsistencyError> {
        let king = self.king_square(side)?;
        Ok(self.attacked_squares_by(side.opponent())?.contains(king))
    }

    /// Keep the candidates that do not leave `side`'s king attacked, in
    /// their original order.
    ///
    /// Each candidate is played on a scratch copy; `self` is untouched.
    pub fn filter_legal(
        &self,
        side: Color,
        candidates: &MoveList,
    ) -> Result<MoveList, ConsistencyError> {
        let mut legal = MoveList::new();
        for mv in candidates {
            let mut scratch = self.clone();
            scratch.apply_move(mv, side)?;
            if scratch.is_in_check(side)? {
                trace!("{side} {mv} rejected: king left attacked");
                continue;
            }
            legal.push(*mv);
        }
        Ok(legal)
    }

    /// Pseudo-legal generation followed by the legality filter.
    pub fn legal_moves(
        &self,
        side: Color,
        en_passant: EnPassantOffer,
        rights: CastlingRights,
    ) -> Result<MoveList, ConsistencyError> {
        let candidates = self.pseudo_legal_moves(side, en_passant, rights)?;
        self.filter_legal(side, &candidates)
    }
}

/// Free-function form of [`Position::attacked_squares_by`].
pub fn attacked_squares_by(color: Color, position: &Position) -> Result<Bitboard, ConsistencyError> {
    position.attacked_squares_by(color)
}

/// Free-function form of [`Position::is_in_check`].
pub fn is_in_check(side: Color, position: &Position) -> Result<bool, ConsistencyError> {
    position.is_in_check(side)
}

/// Free-function form of [`Position::filter_legal`].
pub fn filter_legal(
    candidates: &MoveList,
    position: &Position,
    side: Color,
) -> Result<MoveList, ConsistencyError> {
    position.filter_legal(side, candidates)
}
