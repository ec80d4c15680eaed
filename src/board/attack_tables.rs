//! Precomputed jump targets and slide directions.

use once_cell::sync::Lazy;

use super::types::{Bitboard, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn jump_table(offsets: &[(i8, i8); 8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for sq in Square::all() {
        table[sq.index()] = offsets
            .iter()
            .filter_map(|&(df, dr)| sq.offset(df, dr))
            .collect();
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[Bitboard; 64]> = Lazy::new(|| jump_table(&KNIGHT_OFFSETS));

pub(crate) static KING_TARGETS: Lazy<[Bitboard; 64]> = Lazy::new(|| jump_table(&KING_OFFSETS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_center_target_counts() {
        let a1 = Square::A1;
        let d4: Square = "d4".parse().unwrap();
        assert_eq!(KNIGHT_TARGETS[a1.index()].popcount(), 2);
        assert_eq!(KNIGHT_TARGETS[d4.index()].popcount(), 8);
        assert_eq!(KING_TARGETS[a1.index()].popcount(), 3);
        assert_eq!(KING_TARGETS[d4.index()].popcount(), 8);
    }
}
