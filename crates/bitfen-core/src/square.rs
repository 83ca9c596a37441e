//! Board squares as one-hot 64-bit values.
//!
//! Bit index = rank * 8 + file, so A1 is bit 0, H1 is bit 7, A8 is bit 56
//! and H8 is bit 63.

use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::error::ChessError;
use crate::file::File;
use crate::rank::Rank;

/// Algebraic labels indexed by bit position.
static LABELS: [&str; 64] = [
    "A1", "B1", "C1", "D1", "E1", "F1", "G1", "H1",
    "A2", "B2", "C2", "D2", "E2", "F2", "G2", "H2",
    "A3", "B3", "C3", "D3", "E3", "F3", "G3", "H3",
    "A4", "B4", "C4", "D4", "E4", "F4", "G4", "H4",
    "A5", "B5", "C5", "D5", "E5", "F5", "G5", "H5",
    "A6", "B6", "C6", "D6", "E6", "F6", "G6", "H6",
    "A7", "B7", "C7", "D7", "E7", "F7", "G7", "H7",
    "A8", "B8", "C8", "D8", "E8", "F8", "G8", "H8",
];

/// Return the file number (1 = A .. 8 = H) of a raw square value.
///
/// Any value that is not exactly one set bit has no file and yields 0.
#[inline]
pub const fn file_of(bits: u64) -> u8 {
    if bits.is_power_of_two() {
        (bits.trailing_zeros() % 8) as u8 + 1
    } else {
        0
    }
}

/// Return the rank number (1..8) of a raw square value, or 0 if `bits` is not
/// exactly one set bit.
#[inline]
pub const fn rank_of(bits: u64) -> u8 {
    if bits.is_power_of_two() {
        (bits.trailing_zeros() / 8) as u8 + 1
    } else {
        0
    }
}

/// A single square on the board, held as a `u64` with exactly one bit set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u64);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square(1u64 << (rank.index() * 8 + file.index()))
    }

    /// Wrap a raw one-hot value, returning `None` for zero or any value with
    /// more than one bit set.
    #[inline]
    pub const fn from_bits(bits: u64) -> Option<Square> {
        if bits.is_power_of_two() {
            Some(Square(bits))
        } else {
            None
        }
    }

    /// Create a square from its bit index (0..63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(1u64 << index))
        } else {
            None
        }
    }

    /// Parse a two-character label such as `"E4"`. The file letter may be
    /// either case.
    pub fn from_label(s: &str) -> Option<Square> {
        let &[file_byte, rank_byte] = s.as_bytes() else {
            return None;
        };
        let file_byte = file_byte.to_ascii_uppercase();
        if !(b'A'..=b'H').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }
        let file = File::from_index(file_byte - b'A')?;
        let rank = Rank::from_index(rank_byte - b'1')?;
        Some(Square::new(rank, file))
    }

    /// Return the raw one-hot value.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Return the bit index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0.trailing_zeros() as usize
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match self.index() % 8 {
            0 => File::FileA,
            1 => File::FileB,
            2 => File::FileC,
            3 => File::FileD,
            4 => File::FileE,
            5 => File::FileF,
            6 => File::FileG,
            _ => File::FileH,
        }
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match self.index() / 8 {
            0 => Rank::Rank1,
            1 => Rank::Rank2,
            2 => Rank::Rank3,
            3 => Rank::Rank4,
            4 => Rank::Rank5,
            5 => Rank::Rank6,
            6 => Rank::Rank7,
            _ => Rank::Rank8,
        }
    }

    /// Return `true` if the square is on the A or H file, or on rank 1 or 8.
    #[inline]
    pub const fn on_edge(self) -> bool {
        matches!(self.file(), File::FileA | File::FileH)
            || matches!(self.rank(), Rank::Rank1 | Rank::Rank8)
    }

    /// Return the uppercase algebraic label, e.g. `"E4"`.
    #[inline]
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// Return a bitboard with only this square set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(self.0)
    }

    /// Iterate over all 64 squares in bit order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(|index| Square(1u64 << index))
    }

    pub const A1: Square = Square(1 << 0);
    pub const B1: Square = Square(1 << 1);
    pub const C1: Square = Square(1 << 2);
    pub const D1: Square = Square(1 << 3);
    pub const E1: Square = Square(1 << 4);
    pub const F1: Square = Square(1 << 5);
    pub const G1: Square = Square(1 << 6);
    pub const H1: Square = Square(1 << 7);
    pub const A2: Square = Square(1 << 8);
    pub const B2: Square = Square(1 << 9);
    pub const C2: Square = Square(1 << 10);
    pub const D2: Square = Square(1 << 11);
    pub const E2: Square = Square(1 << 12);
    pub const F2: Square = Square(1 << 13);
    pub const G2: Square = Square(1 << 14);
    pub const H2: Square = Square(1 << 15);
    pub const A3: Square = Square(1 << 16);
    pub const B3: Square = Square(1 << 17);
    pub const C3: Square = Square(1 << 18);
    pub const D3: Square = Square(1 << 19);
    pub const E3: Square = Square(1 << 20);
    pub const F3: Square = Square(1 << 21);
    pub const G3: Square = Square(1 << 22);
    pub const H3: Square = Square(1 << 23);
    pub const A4: Square = Square(1 << 24);
    pub const B4: Square = Square(1 << 25);
    pub const C4: Square = Square(1 << 26);
    pub const D4: Square = Square(1 << 27);
    pub const E4: Square = Square(1 << 28);
    pub const F4: Square = Square(1 << 29);
    pub const G4: Square = Square(1 << 30);
    pub const H4: Square = Square(1 << 31);
    pub const A5: Square = Square(1 << 32);
    pub const B5: Square = Square(1 << 33);
    pub const C5: Square = Square(1 << 34);
    pub const D5: Square = Square(1 << 35);
    pub const E5: Square = Square(1 << 36);
    pub const F5: Square = Square(1 << 37);
    pub const G5: Square = Square(1 << 38);
    pub const H5: Square = Square(1 << 39);
    pub const A6: Square = Square(1 << 40);
    pub const B6: Square = Square(1 << 41);
    pub const C6: Square = Square(1 << 42);
    pub const D6: Square = Square(1 << 43);
    pub const E6: Square = Square(1 << 44);
    pub const F6: Square = Square(1 << 45);
    pub const G6: Square = Square(1 << 46);
    pub const H6: Square = Square(1 << 47);
    pub const A7: Square = Square(1 << 48);
    pub const B7: Square = Square(1 << 49);
    pub const C7: Square = Square(1 << 50);
    pub const D7: Square = Square(1 << 51);
    pub const E7: Square = Square(1 << 52);
    pub const F7: Square = Square(1 << 53);
    pub const G7: Square = Square(1 << 54);
    pub const H7: Square = Square(1 << 55);
    pub const A8: Square = Square(1 << 56);
    pub const B8: Square = Square(1 << 57);
    pub const C8: Square = Square(1 << 58);
    pub const D8: Square = Square(1 << 59);
    pub const E8: Square = Square(1 << 60);
    pub const F8: Square = Square(1 << 61);
    pub const G8: Square = Square(1 << 62);
    pub const H8: Square = Square(1 << 63);
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Square, ChessError> {
        Square::from_label(s).ok_or_else(|| ChessError::InvalidSquare {
            label: s.to_string(),
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
