//! Castling rights as a 4-bit mask.

use std::fmt;

use crate::error::ChessError;
use crate::side::Side;

/// Which wing of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Castling rights: bit 0 = White king-side, 1 = White queen-side,
/// 2 = Black king-side, 3 = Black queen-side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All four castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// FEN letters in canonical output order.
    const LETTERS: [(char, CastleRights); 4] = [
        ('K', Self::WHITE_KING),
        ('Q', Self::WHITE_QUEEN),
        ('k', Self::BLACK_KING),
        ('q', Self::BLACK_QUEEN),
    ];

    /// Create rights from a raw mask, keeping only the lower 4 bits.
    #[inline]
    pub const fn new(bits: u8) -> CastleRights {
        CastleRights(bits & 0b1111)
    }

    /// Return the raw mask.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Return `true` if no rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if every bit of `other` is set.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Flip the bits of `other`.
    #[inline]
    pub const fn toggle(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 ^ other.0)
    }

    /// Check whether `side` may still castle toward `wing`.
    #[inline]
    pub const fn has(self, side: Side, wing: CastleSide) -> bool {
        let flag = match (side, wing) {
            (Side::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Side::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Side::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Side::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        };
        self.contains(flag)
    }

    /// Parse the FEN castling field (e.g. `"KQkq"`, `"Kq"`, `"-"`).
    ///
    /// Each letter toggles its right, so a repeated letter cancels itself:
    /// `"KK"` grants nothing. `-` is accepted anywhere and changes nothing.
    pub fn from_fen(field: &str) -> Result<CastleRights, ChessError> {
        Self::parse_field(field, field)
    }

    pub(crate) fn parse_field(field: &str, fen: &str) -> Result<CastleRights, ChessError> {
        field.chars().try_fold(CastleRights::NONE, |rights, c| {
            if c == '-' {
                return Ok(rights);
            }
            Self::LETTERS
                .iter()
                .find(|(letter, _)| *letter == c)
                .map(|&(_, flag)| rights.toggle(flag))
                .ok_or_else(|| ChessError::InvalidCastlingChar {
                    character: c,
                    fen: fen.to_string(),
                })
        })
    }
}

/// Renders the FEN castling field in `KQkq` order, or `-` when empty.
impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (letter, flag) in Self::LETTERS {
            if self.contains(flag) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}
