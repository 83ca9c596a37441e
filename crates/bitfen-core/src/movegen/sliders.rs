//! Sliding geometry for rooks, bishops and queens.

use crate::bitboard::Bitboard;
use crate::file::File;
use crate::rank::Rank;
use crate::square::{Square, file_of, rank_of};

use super::Direction;

/// Walk from `sq` in `dir` for as long as `same_line` accepts the next raw
/// value. Shifting off the board yields 0, which no line accepts.
fn walk(sq: Square, dir: Direction, same_line: impl Fn(u64) -> bool) -> u64 {
    let mut moves = 0u64;
    let mut bits = dir.step(sq.bits());
    while same_line(bits) {
        moves |= bits;
        bits = dir.step(bits);
    }
    moves
}

/// Return every square along the rank of `sq`, excluding `sq` itself.
pub fn rank_moves(sq: Square) -> Bitboard {
    let rank = rank_of(sq.bits());
    let on_rank = |bits| rank_of(bits) == rank;
    Bitboard::new(walk(sq, Direction::East, on_rank) | walk(sq, Direction::West, on_rank))
}

/// Return every square along the file of `sq`, excluding `sq` itself.
pub fn file_moves(sq: Square) -> Bitboard {
    let file = file_of(sq.bits());
    let on_file = |bits| file_of(bits) == file;
    Bitboard::new(walk(sq, Direction::North, on_file) | walk(sq, Direction::South, on_file))
}

/// Return every square on the two diagonals through `sq`, excluding `sq`.
///
/// A direction is only entered when `sq` is not already on the edge it
/// would cross. Each walk then stops on the first edge square it reaches.
pub fn diagonal_moves(sq: Square) -> Bitboard {
    let file = sq.file();
    let rank = sq.rank();
    let rays = [
        (Direction::NorthEast, file < File::FileH && rank < Rank::Rank8),
        (Direction::NorthWest, file > File::FileA && rank < Rank::Rank8),
        (Direction::SouthEast, file < File::FileH && rank > Rank::Rank1),
        (Direction::SouthWest, file > File::FileA && rank > Rank::Rank1),
    ];

    let mut moves = Bitboard::EMPTY;
    for (dir, open) in rays {
        if !open {
            continue;
        }
        let mut bits = dir.step(sq.bits());
        while let Some(next) = Square::from_bits(bits) {
            moves.toggle(next);
            if next.on_edge() {
                break;
            }
            bits = dir.step(bits);
        }
    }
    moves
}

/// Rank and file moves combined.
#[inline]
pub fn rook_moves(sq: Square) -> Bitboard {
    rank_moves(sq) | file_moves(sq)
}

/// Diagonal, rank and file moves combined.
#[inline]
pub fn queen_moves(sq: Square) -> Bitboard {
    diagonal_moves(sq) | rank_moves(sq) | file_moves(sq)
}
