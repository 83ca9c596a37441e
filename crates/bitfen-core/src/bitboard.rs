//! Bitboards: one bit per square, set when the square belongs to the set.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::file::File;
use crate::rank::Rank;
use crate::square::Square;

/// A 64-bit occupancy mask. Bit `i` corresponds to the square whose one-hot
/// value is `1 << i`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// No squares set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// All 64 squares set.
    pub const FULL: Bitboard = Bitboard(!0);

    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_2: Bitboard = Bitboard(0x0000_0000_0000_FF00);
    pub const RANK_7: Bitboard = Bitboard(0x00FF_0000_0000_0000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    /// Create a bitboard from a raw mask.
    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits)
    }

    /// Create a bitboard by toggling each of `squares` once, starting from empty.
    ///
    /// A square listed twice cancels itself out.
    pub fn from_squares(squares: &[Square]) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for &sq in squares {
            bb.toggle(sq);
        }
        bb
    }

    /// Return the raw mask.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Return `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count the number of set squares.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `sq` is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & sq.bits() != 0
    }

    /// Return a copy with `sq` set.
    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | sq.bits())
    }

    /// Return a copy with `sq` cleared.
    #[inline]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !sq.bits())
    }

    /// Flip the bit for `sq` in place.
    #[inline]
    pub fn toggle(&mut self, sq: Square) {
        self.0 ^= sq.bits();
    }

    /// Return the set squares in FEN reading order: rank 8 down to rank 1,
    /// and A to H within each rank.
    pub fn squares(self) -> Vec<Square> {
        let mut squares = Vec::with_capacity(self.count() as usize);
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                let sq = Square::new(rank, file);
                if self.contains(sq) {
                    squares.push(sq);
                }
            }
        }
        squares
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Bitboard {
        Bitboard(sq.bits())
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

/// Yields set squares from the lowest bit (A1) upward, consuming the set.
impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let lowest = self.0 & self.0.wrapping_neg();
        self.0 ^= lowest;
        Square::from_bits(lowest)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for Bitboard {}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "  {rank} ")?;
            for file in File::ALL {
                let c = if self.contains(Square::new(rank, file)) { '1' } else { '.' };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "    A B C D E F G H")
    }
}

#[cfg(test)]
mod tests {
    use super::Bitboard;
    use crate::square::Square;

    #[test]
    fn toggle_is_its_own_inverse() {
        let original = Bitboard::from_squares(&[Square::C3, Square::F6]);
        for sq in Square::all() {
            let mut bb = original;
            bb.toggle(sq);
            assert_ne!(bb, original);
            bb.toggle(sq);
            assert_eq!(bb, original, "double toggle of {sq} changed the set");
        }
    }

    #[test]
    fn toggle_flips_exactly_one_bit() {
        let mut bb = Bitboard::EMPTY;
        bb.toggle(Square::E4);
        assert_eq!(bb.bits(), 1 << 28);
        assert!(bb.contains(Square::E4));
        assert!(!bb.contains(Square::D4));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn seeded_squares_toggle_once_each() {
        let bb = Bitboard::from_squares(&[Square::A1, Square::H8, Square::A1]);
        assert!(!bb.contains(Square::A1));
        assert!(bb.contains(Square::H8));
        assert_eq!(Bitboard::from_squares(&[]), Bitboard::EMPTY);
    }

    #[test]
    fn squares_in_fen_order() {
        let bb = Bitboard::from_squares(&[Square::A1, Square::H8, Square::E4, Square::A8, Square::H1]);
        assert_eq!(
            bb.squares(),
            vec![Square::A8, Square::H8, Square::E4, Square::A1, Square::H1]
        );
        assert!(Bitboard::EMPTY.squares().is_empty());
        assert_eq!(Bitboard::FULL.squares().len(), 64);
    }

    #[test]
    fn with_and_without() {
        let bb = Bitboard::EMPTY.with(Square::E4);
        assert!(bb.contains(Square::E4));
        assert!(bb.without(Square::E4).is_empty());
    }

    #[test]
    fn iterator_is_bit_order() {
        let bb = Bitboard::from_squares(&[Square::H8, Square::E4, Square::A1]);
        let squares: Vec<_> = bb.collect();
        assert_eq!(squares, vec![Square::A1, Square::E4, Square::H8]);
        assert_eq!(Bitboard::RANK_1.len(), 8);
    }

    #[test]
    fn masks() {
        assert_eq!(Bitboard::RANK_1.count(), 8);
        assert_eq!(Bitboard::FILE_A.count(), 8);
        assert_eq!((Bitboard::RANK_1 & Bitboard::FILE_A), Square::A1.bitboard());
        assert_eq!(!Bitboard::EMPTY, Bitboard::FULL);
        assert_eq!(Bitboard::default(), Bitboard::EMPTY);
    }

    #[test]
    fn debug_grid() {
        let output = format!("{:?}", Square::A8.bitboard());
        assert!(output.contains("8 1 . . . . . . ."));
        assert!(output.contains("A B C D E F G H"));
    }
}
