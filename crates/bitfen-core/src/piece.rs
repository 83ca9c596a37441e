//! Per-kind piece wrappers: one bitboard of positions for one side.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::movegen;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// Where the pieces of one kind and side stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSet {
    positions: Bitboard,
    side: Side,
}

impl PieceSet {
    /// Create a set for `side` standing on `positions`.
    #[inline]
    pub const fn new(positions: Bitboard, side: Side) -> PieceSet {
        PieceSet { positions, side }
    }
}

/// All pieces of one kind for one side.
///
/// The variant is the kind; the payload is the side and the squares it holds.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    King(PieceSet),
    Queen(PieceSet),
    Rook(PieceSet),
    Bishop(PieceSet),
    Knight(PieceSet),
    Pawn(PieceSet),
}

impl Piece {
    /// Create an empty wrapper for `kind` and `side`.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece::with_positions(kind, side, Bitboard::EMPTY)
    }

    /// Create a wrapper for `kind` and `side` standing on `positions`.
    pub const fn with_positions(kind: PieceKind, side: Side, positions: Bitboard) -> Piece {
        let set = PieceSet::new(positions, side);
        match kind {
            PieceKind::King => Piece::King(set),
            PieceKind::Queen => Piece::Queen(set),
            PieceKind::Rook => Piece::Rook(set),
            PieceKind::Bishop => Piece::Bishop(set),
            PieceKind::Knight => Piece::Knight(set),
            PieceKind::Pawn => Piece::Pawn(set),
        }
    }

    /// Create an empty wrapper from a FEN letter: uppercase is White,
    /// lowercase is Black.
    pub fn from_symbol(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Piece::new(kind, side))
    }

    #[inline]
    const fn set(&self) -> &PieceSet {
        match self {
            Piece::King(set)
            | Piece::Queen(set)
            | Piece::Rook(set)
            | Piece::Bishop(set)
            | Piece::Knight(set)
            | Piece::Pawn(set) => set,
        }
    }

    #[inline]
    fn set_mut(&mut self) -> &mut PieceSet {
        match self {
            Piece::King(set)
            | Piece::Queen(set)
            | Piece::Rook(set)
            | Piece::Bishop(set)
            | Piece::Knight(set)
            | Piece::Pawn(set) => set,
        }
    }

    /// Return the kind of piece.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        match self {
            Piece::King(_) => PieceKind::King,
            Piece::Queen(_) => PieceKind::Queen,
            Piece::Rook(_) => PieceKind::Rook,
            Piece::Bishop(_) => PieceKind::Bishop,
            Piece::Knight(_) => PieceKind::Knight,
            Piece::Pawn(_) => PieceKind::Pawn,
        }
    }

    /// Return the side these pieces play for.
    #[inline]
    pub const fn side(&self) -> Side {
        self.set().side
    }

    /// Return the FEN letter: uppercase for White, lowercase for Black.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.kind().symbol(self.side())
    }

    /// Return the squares these pieces stand on.
    #[inline]
    pub const fn positions(&self) -> Bitboard {
        self.set().positions
    }

    /// Flip whether a piece of this kind stands on `sq`.
    #[inline]
    pub fn toggle(&mut self, sq: Square) {
        self.set_mut().positions.toggle(sq);
    }

    /// Return every square a piece of this kind and side could reach from
    /// `src` on an empty board.
    pub fn moves_from(&self, src: Square) -> Bitboard {
        match self {
            Piece::King(_) => movegen::king_moves(src),
            Piece::Queen(_) => movegen::queen_moves(src),
            Piece::Rook(_) => movegen::rook_moves(src),
            Piece::Bishop(_) => movegen::diagonal_moves(src),
            Piece::Knight(_) => movegen::knight_moves(src),
            Piece::Pawn(set) => movegen::pawn_moves(set.side, src),
        }
    }

    /// Return `true` if a piece of this kind could geometrically move from
    /// `src` to `dst`. Occupancy, check and turn order are not considered.
    #[inline]
    pub fn valid_move(&self, src: Square, dst: Square) -> bool {
        self.moves_from(src).contains(dst)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())?;
        f.debug_list().entries(self.positions().squares()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::bitboard::Bitboard;
    use crate::piece_kind::PieceKind;
    use crate::side::Side;
    use crate::square::Square;

    #[test]
    fn symbols() {
        let expected = [
            (PieceKind::King, 'K', 'k'),
            (PieceKind::Queen, 'Q', 'q'),
            (PieceKind::Rook, 'R', 'r'),
            (PieceKind::Bishop, 'B', 'b'),
            (PieceKind::Knight, 'N', 'n'),
            (PieceKind::Pawn, 'P', 'p'),
        ];
        for (kind, white, black) in expected {
            assert_eq!(Piece::new(kind, Side::White).symbol(), white);
            assert_eq!(Piece::new(kind, Side::Black).symbol(), black);
        }
    }

    #[test]
    fn from_symbol_roundtrip() {
        for side in Side::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, side);
                let parsed = Piece::from_symbol(piece.symbol()).unwrap();
                assert_eq!(parsed.kind(), kind);
                assert_eq!(parsed.side(), side);
            }
        }
        assert!(Piece::from_symbol('f').is_none());
        assert!(Piece::from_symbol('3').is_none());
    }

    #[test]
    fn toggle_updates_positions() {
        let mut rook = Piece::new(PieceKind::Rook, Side::White);
        rook.toggle(Square::A1);
        rook.toggle(Square::H1);
        assert_eq!(rook.positions(), Bitboard::from_squares(&[Square::A1, Square::H1]));
        rook.toggle(Square::A1);
        assert_eq!(rook.positions(), Square::H1.bitboard());
        assert_eq!(rook.kind(), PieceKind::Rook);
        assert_eq!(rook.side(), Side::White);
    }

    #[test]
    fn valid_move_per_kind() {
        let queen = Piece::new(PieceKind::Queen, Side::White);
        assert!(queen.valid_move(Square::D1, Square::H5));
        assert!(queen.valid_move(Square::D1, Square::D8));
        assert!(!queen.valid_move(Square::D1, Square::E3));

        let rook = Piece::new(PieceKind::Rook, Side::Black);
        assert!(rook.valid_move(Square::A8, Square::A1));
        assert!(!rook.valid_move(Square::A8, Square::B7));

        let bishop = Piece::new(PieceKind::Bishop, Side::White);
        assert!(bishop.valid_move(Square::C1, Square::H6));
        assert!(!bishop.valid_move(Square::C1, Square::C2));

        let knight = Piece::new(PieceKind::Knight, Side::White);
        assert!(knight.valid_move(Square::G1, Square::F3));
        assert!(!knight.valid_move(Square::G1, Square::G3));

        let king = Piece::new(PieceKind::King, Side::Black);
        assert!(king.valid_move(Square::E8, Square::D7));
        assert!(!king.valid_move(Square::E8, Square::E6));
    }

    #[test]
    fn pawn_direction_depends_on_side() {
        let white = Piece::new(PieceKind::Pawn, Side::White);
        let black = Piece::new(PieceKind::Pawn, Side::Black);
        assert!(white.valid_move(Square::E2, Square::E4));
        assert!(!white.valid_move(Square::E4, Square::E3));
        assert!(black.valid_move(Square::E7, Square::E5));
        assert!(black.valid_move(Square::E4, Square::D3));
        assert!(!black.valid_move(Square::E4, Square::E5));
    }

    #[test]
    fn valid_move_ignores_own_positions() {
        let mut knight = Piece::new(PieceKind::Knight, Side::White);
        knight.toggle(Square::B1);
        assert!(knight.valid_move(Square::E4, Square::F6));
    }

    #[test]
    fn debug_lists_squares() {
        let knight = Piece::with_positions(
            PieceKind::Knight,
            Side::Black,
            Bitboard::from_squares(&[Square::B8, Square::G8]),
        );
        assert_eq!(format!("{knight:?}"), "n[Square(B8), Square(G8)]");
    }
}
