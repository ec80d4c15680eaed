use std::fmt;

use log::{debug, warn};

use super::{
    CastleSide, CastlingRights, Color, ConsistencyError, EnPassantOffer, GameError, Layout, Move,
    MoveList, Notation, PieceKind, Position, Square,
};

/// Consecutive non-capture plies after which the game is drawn.
pub const NON_CAPTURE_LIMIT: u32 = 50;

/// Why a game ended without a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StalemateReason {
    /// The side to move has no legal move and is not in check.
    NoLegalMoves,
    /// [`NON_CAPTURE_LIMIT`] plies passed without a capture.
    NonCaptureLimit,
}

/// Result of inspecting a game for termination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate(StalemateReason),
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Terminal token for the codec, if the game is over
    #[must_use]
    pub const fn terminal_notation(self) -> Option<Notation> {
        match self {
            Outcome::Ongoing => None,
            Outcome::Checkmate { .. } => Some(Notation::Checkmate),
            Outcome::Stalemate(_) => Some(Notation::Stalemate),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Outcome::Stalemate(StalemateReason::NoLegalMoves) => {
                write!(f, "stalemate (no legal moves)")
            }
            Outcome::Stalemate(StalemateReason::NonCaptureLimit) => {
                write!(f, "stalemate ({NON_CAPTURE_LIMIT} plies without a capture)")
            }
        }
    }
}

/// Authoritative state of one game.
///
/// Queries never mutate; [`GameState::apply_move`] is the only way to
/// advance, and it leaves the state untouched when it fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) position: Position,
    pub(crate) castling: [CastlingRights; 2],
    pub(crate) en_passant: EnPassantOffer,
    pub(crate) side_to_move: Color,
    pub(crate) ply: u32,
    pub(crate) non_capture: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting arrangement, white to move, full rights.
    #[must_use]
    pub fn new() -> Self {
        Self::from_layout(Layout::Standard)
    }

    #[must_use]
    pub fn from_layout(layout: Layout) -> Self {
        GameState {
            position: Position::new(layout),
            castling: [CastlingRights::full(); 2],
            en_passant: EnPassantOffer::none(),
            side_to_move: Color::White,
            ply: 0,
            non_capture: 0,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Plies played since the start of the game
    #[must_use]
    pub const fn ply(&self) -> u32 {
        self.ply
    }

    #[must_use]
    pub const fn non_capture_count(&self) -> u32 {
        self.non_capture
    }

    /// Rights of `color`; `Color::None` has none.
    #[must_use]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        match color {
            Color::None => CastlingRights::none(),
            _ => self.castling[color.index()],
        }
    }

    /// Offer usable by the side to move
    #[must_use]
    pub const fn en_passant(&self) -> EnPassantOffer {
        self.en_passant
    }

    pub fn in_check(&self) -> Result<bool, ConsistencyError> {
        self.position.is_in_check(self.side_to_move)
    }

    /// Legal moves for the side to move, in generation order.
    pub fn legal_moves(&self) -> Result<MoveList, ConsistencyError> {
        let side = self.side_to_move;
        self.position
            .legal_moves(side, self.en_passant, self.castling_rights(side))
    }

    /// Termination status: the non-capture limit first, then mobility.
    pub fn outcome(&self) -> Result<Outcome, ConsistencyError> {
        if self.non_capture >= NON_CAPTURE_LIMIT {
            return Ok(Outcome::Stalemate(StalemateReason::NonCaptureLimit));
        }
        self.mobility_outcome(&self.legal_moves()?)
    }

    /// Outcome decided by the side to move's `legal` moves alone.
    fn mobility_outcome(&self, legal: &MoveList) -> Result<Outcome, ConsistencyError> {
        if !legal.is_empty() {
            return Ok(Outcome::Ongoing);
        }
        if self.in_check()? {
            Ok(Outcome::Checkmate {
                winner: self.side_to_move.opponent(),
            })
        } else {
            Ok(Outcome::Stalemate(StalemateReason::NoLegalMoves))
        }
    }

    /// Play `mv` for the side to move.
    ///
    /// Fails with `GameOver` once the game has ended and with `IllegalMove`
    /// for anything outside [`GameState::legal_moves`].
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), GameError> {
        if self.non_capture >= NON_CAPTURE_LIMIT {
            return Err(GameError::GameOver {
                outcome: Outcome::Stalemate(StalemateReason::NonCaptureLimit),
            });
        }
        let legal = self.legal_moves().map_err(|err| self.surface(err))?;
        let outcome = self
            .mobility_outcome(&legal)
            .map_err(|err| self.surface(err))?;
        if outcome.is_terminal() {
            return Err(GameError::GameOver { outcome });
        }
        if !legal.contains(mv) {
            return Err(GameError::IllegalMove {
                notation: mv.to_string(),
            });
        }

        let next = self.successor(mv).map_err(|err| self.surface(err))?;
        debug!("ply {}: {} played {}", next.ply, self.side_to_move, mv);
        if next.non_capture == NON_CAPTURE_LIMIT {
            debug!("non-capture limit reached after ply {}", next.ply);
        }
        *self = next;
        Ok(())
    }

    /// Decode `notation` and play it.
    pub fn apply_notation(&mut self, notation: &str) -> Result<(), GameError> {
        let mv: Move = notation.parse()?;
        self.apply_move(&mv)
    }

    /// Number of leaf nodes of the legal move tree at `depth`.
    ///
    /// Draw and mate detection are skipped: every legal move is expanded.
    pub fn perft(&self, depth: u32) -> Result<u64, ConsistencyError> {
        if depth == 0 {
            return Ok(1);
        }
        let moves = self.legal_moves()?;
        if depth == 1 {
            return Ok(moves.len() as u64);
        }
        let mut nodes = 0;
        for mv in &moves {
            nodes += self.successor(mv)?.perft(depth - 1)?;
        }
        Ok(nodes)
    }

    /// State after `mv` with all bookkeeping, without any legality checks.
    pub(crate) fn successor(&self, mv: &Move) -> Result<GameState, ConsistencyError> {
        let side = self.side_to_move;
        let mut next = self.clone();
        next.position.apply_move(mv, side)?;

        match *mv {
            Move::Castle(_) => next.castling[side.index()].revoke_all(),
            Move::Normal {
                piece, from, to, ..
            } => {
                if piece == PieceKind::King {
                    next.castling[side.index()].revoke_king();
                }
                if piece == PieceKind::Rook {
                    if let Some(corner) = rook_corner(side, from) {
                        next.castling[side.index()].revoke_rook(corner);
                    }
                }
                let opponent = side.opponent();
                if mv.is_capture() {
                    if let Some(corner) = rook_corner(opponent, to) {
                        next.castling[opponent.index()].revoke_rook(corner);
                    }
                }
            }
        }

        next.en_passant = match mv.from() {
            Some(from) if mv.is_double_pawn_push() => EnPassantOffer::on_file(from.file()),
            _ => EnPassantOffer::none(),
        };
        next.non_capture = if mv.is_capture() {
            0
        } else {
            self.non_capture.saturating_add(1)
        };
        next.ply = self.ply.saturating_add(1);
        next.side_to_move = side.opponent();
        Ok(next)
    }

    fn surface(&self, err: ConsistencyError) -> GameError {
        warn!("inconsistent game at ply {}: {}", self.ply, err);
        GameError::Consistency(err)
    }
}

/// Which rook corner of `color` `sq` is, if any.
fn rook_corner(color: Color, sq: Square) -> Option<CastleSide> {
    if sq.rank() != color.back_rank() {
        return None;
    }
    [CastleSide::Kingside, CastleSide::Queenside]
        .into_iter()
        .find(|side| side.files().2 == sq.file())
}
