//! Pseudo-legal move generation.
//!
//! Each generator appends its moves and the squares its piece attacks. The
//! attacked set includes squares held by the generating side, since a
//! defended piece is still off-limits to the enemy king.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::KingMode;
use sliders::SliderType;

use super::{
    Bitboard, CastlingRights, Color, ConsistencyError, EnPassantOffer, MoveList, PieceKind,
    Position,
};

/// Moves and attacked squares collected by one or more generators.
#[derive(Clone, Debug, Default)]
pub(crate) struct Generated {
    pub(crate) moves: MoveList,
    pub(crate) attacks: Bitboard,
}

/// Generation order for the non-king pieces
const NON_KING_ORDER: [PieceKind; 5] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

impl Position {
    /// Moves and attacks of every non-king piece of `color`.
    pub(crate) fn generate_non_king(&self, color: Color, en_passant: EnPassantOffer) -> Generated {
        let mut out = Generated {
            moves: MoveList::new(),
            attacks: Bitboard::EMPTY,
        };
        for kind in NON_KING_ORDER {
            for (from, _) in self.pieces_of(color).filter(|(_, p)| p.kind() == kind) {
                match kind {
                    PieceKind::Pawn => self.generate_pawn_moves(from, color, en_passant, &mut out),
                    PieceKind::Knight => self.generate_knight_moves(from, color, &mut out),
                    _ => {
                        if let Some(slider) = SliderType::from_kind(kind) {
                            self.generate_slider_moves(from, color, slider, &mut out);
                        }
                    }
                }
            }
        }
        out
    }

    /// Pseudo-legal moves for `color`: every non-king move, then the king's
    /// moves screened against the opponent's attacked squares.
    ///
    /// The opponent set is fixed before the king is generated, so the two
    /// kings never depend on each other.
    pub fn pseudo_legal_moves(
        &self,
        color: Color,
        en_passant: EnPassantOffer,
        rights: CastlingRights,
    ) -> Result<MoveList, ConsistencyError> {
        let king = self.king_square(color)?;
        let opponent_attacks = self.attacked_squares_by(color.opponent())?;

        let mut out = self.generate_non_king(color, en_passant);
        self.generate_king_moves(
            king,
            color,
            KingMode::Guarded {
                opponent_attacks,
                rights,
            },
            &mut out,
        );
        Ok(out.moves)
    }
}
