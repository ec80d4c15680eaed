use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Color, Move, PieceKind, Position, Square};
use super::Generated;

impl Position {
    /// Knight jumps: every target is attacked, non-own targets are moves.
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, out: &mut Generated) {
        let targets = KNIGHT_TARGETS[from.index()];
        out.attacks |= targets;

        for to in targets {
            let target = self.get(to);
            if target.color() == color {
                continue;
            }
            out.moves
                .push(Move::new(PieceKind::Knight, from, to, !target.is_empty()));
        }
    }
}
