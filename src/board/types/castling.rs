//! Castling rights and en-passant offer types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const KINGSIDE_ROOK: u8 = 1 << 0;
const KING: u8 = 1 << 1;
const QUEENSIDE_ROOK: u8 = 1 << 2;

const ALL_FLAGS: u8 = KINGSIDE_ROOK | KING | QUEENSIDE_ROOK;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Files of (king from, king to, rook from, rook to)
    #[must_use]
    pub(crate) const fn files(self) -> (u8, u8, u8, u8) {
        match self {
            CastleSide::Kingside => (4, 6, 7, 5),
            CastleSide::Queenside => (4, 2, 0, 3),
        }
    }
}

/// One side's castling rights as three "still unmoved" flags:
/// kingside rook, king, queenside rook.
///
/// Flags only ever go from set to cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Every piece unmoved
    #[must_use]
    pub const fn full() -> Self {
        CastlingRights(ALL_FLAGS)
    }

    /// No castling possible
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// Build from the (kingside rook, king, queenside rook) flag vector
    #[must_use]
    pub const fn from_flags(kingside_rook: bool, king: bool, queenside_rook: bool) -> Self {
        let mut bits = 0;
        if kingside_rook {
            bits |= KINGSIDE_ROOK;
        }
        if king {
            bits |= KING;
        }
        if queenside_rook {
            bits |= QUEENSIDE_ROOK;
        }
        CastlingRights(bits)
    }

    /// The (kingside rook, king, queenside rook) flag vector
    #[must_use]
    pub const fn flags(self) -> [bool; 3] {
        [
            self.0 & KINGSIDE_ROOK != 0,
            self.0 & KING != 0,
            self.0 & QUEENSIDE_ROOK != 0,
        ]
    }

    /// Returns true when both the king and the rook for `side` are unmoved
    #[inline]
    #[must_use]
    pub const fn allows(self, side: CastleSide) -> bool {
        let rook = match side {
            CastleSide::Kingside => KINGSIDE_ROOK,
            CastleSide::Queenside => QUEENSIDE_ROOK,
        };
        self.0 & (KING | rook) == (KING | rook)
    }

    #[inline]
    pub fn revoke_king(&mut self) {
        self.0 &= !KING;
    }

    /// Clear the flag of the rook that starts on `side`'s corner
    #[inline]
    pub fn revoke_rook(&mut self, side: CastleSide) {
        match side {
            CastleSide::Kingside => self.0 &= !KINGSIDE_ROOK,
            CastleSide::Queenside => self.0 &= !QUEENSIDE_ROOK,
        }
    }

    #[inline]
    pub fn revoke_all(&mut self) {
        self.0 = 0;
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::full()
    }
}

/// The file of a pawn that just advanced two squares, capturable en passant
/// by the side to move for this ply only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnPassantOffer(Option<u8>);

impl EnPassantOffer {
    /// No offer
    #[must_use]
    pub const fn none() -> Self {
        EnPassantOffer(None)
    }

    /// Offer on `file` (0-7); out-of-range files yield no offer.
    #[must_use]
    pub const fn on_file(file: u8) -> Self {
        if file < 8 {
            EnPassantOffer(Some(file))
        } else {
            EnPassantOffer(None)
        }
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> Option<u8> {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rights_allow_both_sides() {
        let rights = CastlingRights::full();
        assert!(rights.allows(CastleSide::Kingside));
        assert!(rights.allows(CastleSide::Queenside));
        assert_eq!(rights.flags(), [true, true, true]);
    }

    #[test]
    fn king_flag_gates_both_sides() {
        let mut rights = CastlingRights::full();
        rights.revoke_king();
        assert!(!rights.allows(CastleSide::Kingside));
        assert!(!rights.allows(CastleSide::Queenside));
        assert_eq!(rights.flags(), [true, false, true]);
    }

    #[test]
    fn rook_flags_are_independent() {
        let mut rights = CastlingRights::full();
        rights.revoke_rook(CastleSide::Kingside);
        assert!(!rights.allows(CastleSide::Kingside));
        assert!(rights.allows(CastleSide::Queenside));
        rights.revoke_all();
        assert_eq!(rights, CastlingRights::none());
    }

    #[test]
    fn flag_vector_round_trips() {
        let rights = CastlingRights::from_flags(false, true, true);
        assert_eq!(rights.flags(), [false, true, true]);
    }

    #[test]
    fn en_passant_offer_bounds() {
        assert!(EnPassantOffer::on_file(3).is_active());
        assert_eq!(EnPassantOffer::on_file(3).file(), Some(3));
        assert!(!EnPassantOffer::on_file(8).is_active());
        assert!(!EnPassantOffer::none().is_active());
    }
}
