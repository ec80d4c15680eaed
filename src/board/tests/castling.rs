//! Castling preconditions and rights bookkeeping.

use super::{game, legal, play, sq};
use crate::board::{CastleSide, Color, PieceKind};

const BOTH_SIDES: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

fn has(moves: &[String], notation: &str) -> bool {
    moves.iter().any(|m| m == notation)
}

#[test]
fn test_castling_offered_when_everything_holds() {
    let moves = legal(&game(BOTH_SIDES));
    assert!(has(&moves, "O-O"));
    assert!(has(&moves, "O-O-O"));
}

#[test]
fn test_castling_requires_rights() {
    let moves = legal(&game("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1"));
    assert!(!has(&moves, "O-O"));
    assert!(has(&moves, "O-O-O"));

    let moves = legal(&game("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1"));
    assert!(!has(&moves, "O-O"));
    assert!(!has(&moves, "O-O-O"));
}

#[test]
fn test_attacked_transit_square_blocks_castling() {
    // Rook on f2 covers f1 only
    let moves = legal(&game("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1"));
    assert!(!has(&moves, "O-O"));
    assert!(has(&moves, "O-O-O"));
}

#[test]
fn test_no_castling_out_of_check() {
    let moves = legal(&game("r3k2r/8/8/8/4r3/8/8/R3K2R w KQkq - 0 1"));
    assert!(!has(&moves, "O-O"));
    assert!(!has(&moves, "O-O-O"));
}

#[test]
fn test_occupied_path_blocks_castling() {
    let moves = legal(&game("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1"));
    assert!(has(&moves, "O-O"));
    assert!(!has(&moves, "O-O-O"));
}

#[test]
fn test_attacked_b_file_square_does_not_block_queenside() {
    // Bishop on a2 hits b1, which the king never crosses
    let moves = legal(&game("r3k2r/8/8/8/8/8/b7/R3K2R w KQkq - 0 1"));
    assert!(has(&moves, "O-O-O"));
}

#[test]
fn test_missing_rook_blocks_castling() {
    let moves = legal(&game("r3k2r/8/8/8/8/8/8/4K2R w KQkq - 0 1"));
    assert!(has(&moves, "O-O"));
    assert!(!has(&moves, "O-O-O"));
}

#[test]
fn test_kingside_castle_relocates_king_and_rook() {
    let mut g = game(BOTH_SIDES);
    play(&mut g, &["O-O"]);
    let pos = g.position();
    assert!(pos.get(sq("g1")).is(Color::White, PieceKind::King));
    assert!(pos.get(sq("f1")).is(Color::White, PieceKind::Rook));
    assert!(pos.is_empty(sq("e1")));
    assert!(pos.is_empty(sq("h1")));
    assert_eq!(g.castling_rights(Color::White).flags(), [false; 3]);
    assert_eq!(g.non_capture_count(), 1);
}

#[test]
fn test_black_queenside_castle() {
    let mut g = game("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    play(&mut g, &["O-O-O"]);
    let pos = g.position();
    assert!(pos.get(sq("c8")).is(Color::Black, PieceKind::King));
    assert!(pos.get(sq("d8")).is(Color::Black, PieceKind::Rook));
    assert!(pos.is_empty(sq("a8")));
    assert!(pos.is_empty(sq("b8")));
    assert!(g
        .castling_rights(Color::White)
        .allows(CastleSide::Queenside));
}

#[test]
fn test_rook_move_revokes_only_its_side() {
    let mut g = game(BOTH_SIDES);
    play(&mut g, &["Rh1g1"]);
    let white = g.castling_rights(Color::White);
    assert!(!white.allows(CastleSide::Kingside));
    assert!(white.allows(CastleSide::Queenside));

    // Returning the rook does not restore the right
    play(&mut g, &["Ke8d8", "Rg1h1", "Kd8e8"]);
    assert!(!has(&legal(&g), "O-O"));
    assert!(has(&legal(&g), "O-O-O"));
}

#[test]
fn test_king_move_revokes_both_sides() {
    let mut g = game(BOTH_SIDES);
    play(&mut g, &["Ke1f1", "Ke8d8", "Kf1e1", "Kd8e8"]);
    let moves = legal(&g);
    assert!(!has(&moves, "O-O"));
    assert!(!has(&moves, "O-O-O"));
    assert_eq!(g.castling_rights(Color::White).flags(), [true, false, true]);
}

#[test]
fn test_capture_on_corner_revokes_opponent_right() {
    let mut g = game(BOTH_SIDES);
    play(&mut g, &["Ra1xa8"]);
    let black = g.castling_rights(Color::Black);
    assert!(!black.allows(CastleSide::Queenside));
    assert!(black.allows(CastleSide::Kingside));
    assert!(!g
        .castling_rights(Color::White)
        .allows(CastleSide::Queenside));
    assert_eq!(g.non_capture_count(), 0);
}
