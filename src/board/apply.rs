//! Applying a move to the piece grid.
//!
//! Only the 64 squares change here. Castling rights, the en-passant offer
//! and the counters live on [`GameState`](super::GameState) and are updated
//! there.

use super::{CastleSide, Color, ConsistencyError, Move, Piece, PieceKind, Position, Square};

impl Position {
    /// Play `mv` for `color` and return the piece it removed (`Piece::EMPTY`
    /// for a quiet move or castling).
    ///
    /// The move is assumed pseudo-legal; the only checks made are the ones
    /// needed to keep the grid consistent.
    pub fn apply_move(&mut self, mv: &Move, color: Color) -> Result<Piece, ConsistencyError> {
        match *mv {
            Move::Castle(side) => {
                self.apply_castle(side, color)?;
                Ok(Piece::EMPTY)
            }
            Move::Normal {
                piece,
                from,
                to,
                capture,
                promotion,
            } => {
                let mover = self.get(from);
                if !mover.is(color, piece) {
                    return Err(ConsistencyError::OriginMismatch {
                        square: from,
                        expected: piece,
                        found: mover,
                    });
                }

                let en_passant = piece == PieceKind::Pawn
                    && capture
                    && from.file() != to.file()
                    && self.is_empty(to);
                let captured = if en_passant {
                    let victim = Square::at(to.file(), from.rank());
                    let taken = self.get(victim);
                    if !taken.is(color.opponent(), PieceKind::Pawn) {
                        return Err(ConsistencyError::MissingEnPassantVictim { square: victim });
                    }
                    self.clear(victim);
                    taken
                } else {
                    self.get(to)
                };

                let placed = match promotion {
                    Some(kind) => Piece::of(color, kind),
                    None => mover,
                };
                self.clear(from);
                self.set(to, placed);
                Ok(captured)
            }
        }
    }

    fn apply_castle(&mut self, side: CastleSide, color: Color) -> Result<(), ConsistencyError> {
        let rank = color.back_rank();
        let (king_from, king_to, rook_from, rook_to) = side.files();
        let king_sq = Square::at(king_from, rank);
        let rook_sq = Square::at(rook_from, rank);
        if !self.get(king_sq).is(color, PieceKind::King)
            || !self.get(rook_sq).is(color, PieceKind::Rook)
        {
            return Err(ConsistencyError::CastlingPiecesMissing { color, side });
        }

        self.clear(king_sq);
        self.clear(rook_sq);
        self.set(Square::at(king_to, rank), Piece::of(color, PieceKind::King));
        self.set(Square::at(rook_to, rank), Piece::of(color, PieceKind::Rook));
        Ok(())
    }
}
