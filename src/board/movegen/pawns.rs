use super::super::{
    Color, EnPassantOffer, Move, PieceKind, Position, Square, PROMOTION_KINDS,
};
use super::Generated;

impl Position {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        en_passant: EnPassantOffer,
        out: &mut Generated,
    ) {
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        let push = |out: &mut Generated, to: Square, capture: bool| {
            if to.rank() == promotion_rank {
                for kind in PROMOTION_KINDS {
                    out.moves.push(Move::promotion(from, to, capture, kind));
                }
            } else {
                out.moves.push(Move::new(PieceKind::Pawn, from, to, capture));
            }
        };

        if let Some(forward) = from.offset(0, dir) {
            if self.is_empty(forward) {
                push(out, forward, false);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(0, dir) {
                        if self.is_empty(double) {
                            out.moves.push(Move::new(PieceKind::Pawn, from, double, false));
                        }
                    }
                }
            }
        }

        // Edge files only have one diagonal; `offset` drops the other.
        for df in [-1, 1] {
            let Some(target_sq) = from.offset(df, dir) else {
                continue;
            };
            out.attacks.insert(target_sq);
            let target = self.get(target_sq);
            if !target.is_empty() && target.color() != color {
                push(out, target_sq, true);
            }
        }

        if let Some(to) = self.en_passant_target(from, color, en_passant) {
            out.moves.push(Move::new(PieceKind::Pawn, from, to, true));
        }
    }

    /// Landing square of an en-passant capture by the pawn on `from`, if the
    /// active offer is on an adjacent file and its pawn is really there.
    fn en_passant_target(
        &self,
        from: Square,
        color: Color,
        en_passant: EnPassantOffer,
    ) -> Option<Square> {
        let file = en_passant.file()?;
        if from.file().abs_diff(file) != 1 {
            return None;
        }
        let victim = Square::new(file, from.rank())?;
        let to = Square::new(file, (from.rank() as i8 + color.pawn_direction()) as u8)?;
        let victim_piece = self.get(victim);
        let expected_rank = (color.pawn_start_rank() as i8 + 3 * color.pawn_direction()) as u8;
        if from.rank() == expected_rank
            && victim_piece.is(color.opponent(), PieceKind::Pawn)
            && self.is_empty(to)
        {
            Some(to)
        } else {
            None
        }
    }
}
