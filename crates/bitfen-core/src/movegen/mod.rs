//! Pseudo-legal move geometry.
//!
//! Every generator takes a source square and returns the set of squares a
//! piece of that kind could reach on an empty board. Occupancy, blocking,
//! check and turn order are the caller's business.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::bitboard::Bitboard;
use crate::square::Square;

pub use self::king::king_moves;
pub use self::knights::knight_moves;
pub use self::pawns::{pawn_captures, pawn_moves, pawn_pushes};
pub use self::sliders::{diagonal_moves, file_moves, queen_moves, rank_moves, rook_moves};

/// One of the eight compass directions, as a shift of the one-hot square value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Shift a raw square value one step.
    ///
    /// The shift itself knows nothing about files: stepping East from the H
    /// file lands on the A file of the next rank. Callers guard against that.
    /// Stepping off the top or bottom of the board yields 0.
    #[inline]
    pub(crate) const fn step(self, bits: u64) -> u64 {
        match self {
            Direction::North => bits << 8,
            Direction::South => bits >> 8,
            Direction::East => bits << 1,
            Direction::West => bits >> 1,
            Direction::NorthEast => bits << 9,
            Direction::NorthWest => bits << 7,
            Direction::SouthEast => bits >> 7,
            Direction::SouthWest => bits >> 9,
        }
    }

    /// Return the direction leading from `from` to `to` along a rank, file or
    /// diagonal, or `None` if the squares are equal or not aligned.
    fn toward(from: Square, to: Square) -> Option<Direction> {
        let file_delta = to.file().index() as i8 - from.file().index() as i8;
        let rank_delta = to.rank().index() as i8 - from.rank().index() as i8;
        if file_delta != 0 && rank_delta != 0 && file_delta.abs() != rank_delta.abs() {
            return None;
        }
        match (file_delta.signum(), rank_delta.signum()) {
            (0, 1) => Some(Direction::North),
            (0, -1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            (1, 1) => Some(Direction::NorthEast),
            (-1, 1) => Some(Direction::NorthWest),
            (1, -1) => Some(Direction::SouthEast),
            (-1, -1) => Some(Direction::SouthWest),
            _ => None,
        }
    }
}

/// Return the squares strictly between `from` and `to`.
///
/// Empty when the squares do not share a rank, file or diagonal, when they
/// are adjacent, and when they are the same square.
pub fn squares_between(from: Square, to: Square) -> Bitboard {
    let Some(dir) = Direction::toward(from, to) else {
        return Bitboard::EMPTY;
    };

    let mut between = Bitboard::EMPTY;
    let mut bits = dir.step(from.bits());
    // Aligned squares are reached without crossing an edge.
    while let Some(sq) = Square::from_bits(bits) {
        if sq == to {
            break;
        }
        between.toggle(sq);
        bits = dir.step(bits);
    }
    between
}

/// Return `true` if `b` is one king step away from `a`.
#[inline]
pub fn squares_adjacent(a: Square, b: Square) -> bool {
    king_moves(a).contains(b)
}
