//! King geometry.

use crate::bitboard::Bitboard;
use crate::file::File;
use crate::rank::Rank;
use crate::square::Square;

use super::Direction::{self, East, North, NorthEast, NorthWest, South, SouthEast, SouthWest, West};

const CORNER_A1: &[Direction] = &[North, East, NorthEast];
const CORNER_H1: &[Direction] = &[North, West, NorthWest];
const CORNER_A8: &[Direction] = &[South, East, SouthEast];
const CORNER_H8: &[Direction] = &[South, West, SouthWest];
const EDGE_RANK_1: &[Direction] = &[North, East, West, NorthEast, NorthWest];
const EDGE_RANK_8: &[Direction] = &[South, East, West, SouthEast, SouthWest];
const EDGE_FILE_A: &[Direction] = &[North, South, East, NorthEast, SouthEast];
const EDGE_FILE_H: &[Direction] = &[North, South, West, NorthWest, SouthWest];
const OPEN: &[Direction] = &[North, South, East, West, NorthEast, NorthWest, SouthEast, SouthWest];

/// Return every square one king step from `sq`.
///
/// Corners and edges get their own direction lists, so no step ever has to
/// be filtered for wraparound.
pub fn king_moves(sq: Square) -> Bitboard {
    let directions = match (sq.file(), sq.rank()) {
        (File::FileA, Rank::Rank1) => CORNER_A1,
        (File::FileH, Rank::Rank1) => CORNER_H1,
        (File::FileA, Rank::Rank8) => CORNER_A8,
        (File::FileH, Rank::Rank8) => CORNER_H8,
        (_, Rank::Rank1) => EDGE_RANK_1,
        (_, Rank::Rank8) => EDGE_RANK_8,
        (File::FileA, _) => EDGE_FILE_A,
        (File::FileH, _) => EDGE_FILE_H,
        _ => OPEN,
    };

    let bits = sq.bits();
    let moves = directions.iter().fold(0u64, |acc, dir| acc | dir.step(bits));
    Bitboard::new(moves)
}
