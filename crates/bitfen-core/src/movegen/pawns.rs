//! Pawn geometry.

use crate::bitboard::Bitboard;
use crate::file::File;
use crate::rank::Rank;
use crate::side::Side;
use crate::square::Square;

use super::Direction;

/// Return the squares a pawn of `side` on `sq` could advance to: one step
/// forward, plus two steps from its starting rank.
pub fn pawn_pushes(side: Side, sq: Square) -> Bitboard {
    let (forward, start, last) = match side {
        Side::White => (Direction::North, Rank::Rank2, Rank::Rank8),
        Side::Black => (Direction::South, Rank::Rank7, Rank::Rank1),
    };
    let rank = sq.rank();
    if rank == last {
        return Bitboard::EMPTY;
    }

    let single = forward.step(sq.bits());
    let mut moves = single;
    if rank == start {
        moves |= forward.step(single);
    }
    Bitboard::new(moves)
}

/// Return the two forward diagonals a pawn of `side` on `sq` could capture on.
pub fn pawn_captures(side: Side, sq: Square) -> Bitboard {
    let (left, right, last) = match side {
        Side::White => (Direction::NorthWest, Direction::NorthEast, Rank::Rank8),
        Side::Black => (Direction::SouthWest, Direction::SouthEast, Rank::Rank1),
    };
    if sq.rank() == last {
        return Bitboard::EMPTY;
    }

    let bits = sq.bits();
    let mut moves = 0u64;
    if sq.file() > File::FileA {
        moves |= left.step(bits);
    }
    if sq.file() < File::FileH {
        moves |= right.step(bits);
    }
    Bitboard::new(moves)
}

/// Return every square a pawn of `side` on `sq` could move to, pushes and
/// captures merged into one set.
#[inline]
pub fn pawn_moves(side: Side, sq: Square) -> Bitboard {
    pawn_pushes(side, sq) | pawn_captures(side, sq)
}
