use super::super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Color, Move, PieceKind, Position, Square};
use super::Generated;

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) fn from_kind(kind: PieceKind) -> Option<Self> {
        match kind {
            PieceKind::Bishop => Some(SliderType::Bishop),
            PieceKind::Rook => Some(SliderType::Rook),
            PieceKind::Queen => Some(SliderType::Queen),
            _ => None,
        }
    }

    fn kind(self) -> PieceKind {
        match self {
            SliderType::Bishop => PieceKind::Bishop,
            SliderType::Rook => PieceKind::Rook,
            SliderType::Queen => PieceKind::Queen,
        }
    }

    fn directions(self) -> &'static [(i8, i8)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Position {
    /// Walk each ray until the edge or the first occupied square.
    ///
    /// The blocking square is attacked either way; it is a capture move only
    /// when held by the other side.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        out: &mut Generated,
    ) {
        let kind = slider.kind();
        for &(df, dr) in slider.directions() {
            let mut cursor = from.offset(df, dr);
            while let Some(to) = cursor {
                out.attacks.insert(to);
                let target = self.get(to);
                if target.is_empty() {
                    out.moves.push(Move::new(kind, from, to, false));
                    cursor = to.offset(df, dr);
                    continue;
                }
                if target.color() != color {
                    out.moves.push(Move::new(kind, from, to, true));
                }
                break;
            }
        }
    }
}
