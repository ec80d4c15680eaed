use super::super::attack_tables::KING_TARGETS;
use super::super::{
    Bitboard, CastleSide, CastlingRights, Color, Move, PieceKind, Position, Square,
};
use super::Generated;

/// How king destinations are screened.
#[derive(Clone, Copy, Debug)]
pub(crate) enum KingMode {
    /// Every adjacent square counts; used when the king is the attacker.
    IgnoreChecks,
    /// Skip squares the opponent attacks and consider castling.
    Guarded {
        opponent_attacks: Bitboard,
        rights: CastlingRights,
    },
}

impl Position {
    pub(crate) fn generate_king_moves(
        &self,
        from: Square,
        color: Color,
        mode: KingMode,
        out: &mut Generated,
    ) {
        let targets = KING_TARGETS[from.index()];
        out.attacks |= targets;

        let opponent_attacks = match mode {
            KingMode::IgnoreChecks => Bitboard::EMPTY,
            KingMode::Guarded {
                opponent_attacks, ..
            } => opponent_attacks,
        };

        for to in targets {
            let target = self.get(to);
            if target.color() == color || opponent_attacks.contains(to) {
                continue;
            }
            out.moves
                .push(Move::new(PieceKind::King, from, to, !target.is_empty()));
        }

        if let KingMode::Guarded {
            opponent_attacks,
            rights,
        } = mode
        {
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                if rights.allows(side) && self.can_castle(from, color, side, opponent_attacks) {
                    out.moves.push(Move::Castle(side));
                }
            }
        }
    }

    /// Board preconditions for castling (rights are checked by the caller).
    fn can_castle(
        &self,
        from: Square,
        color: Color,
        side: CastleSide,
        opponent_attacks: Bitboard,
    ) -> bool {
        let rank = color.back_rank();
        let (king_from, king_to, rook_from, _) = side.files();
        if from != Square::at(king_from, rank) || opponent_attacks.contains(from) {
            return false;
        }
        if !self
            .get(Square::at(rook_from, rank))
            .is(color, PieceKind::Rook)
        {
            return false;
        }

        let (low, high) = if rook_from < king_from {
            (rook_from + 1, king_from)
        } else {
            (king_from + 1, rook_from)
        };
        let between = rank_span(rank, low, high);
        let occupied = self.occupancy(Color::White) | self.occupancy(Color::Black);
        if !(between & occupied).is_empty() {
            return false;
        }

        let (low, high) = if king_to < king_from {
            (king_to, king_from)
        } else {
            (king_from + 1, king_to + 1)
        };
        (rank_span(rank, low, high) & opponent_attacks).is_empty()
    }
}

/// Squares of `rank` on files `low..high`.
fn rank_span(rank: u8, low: u8, high: u8) -> Bitboard {
    (low..high).map(|file| Square::at(file, rank)).collect()
}
