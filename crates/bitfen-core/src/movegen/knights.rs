//! Knight geometry.

use crate::bitboard::Bitboard;
use crate::file::File;
use crate::rank::Rank;
use crate::square::Square;

/// Return every square a knight on `sq` could jump to.
///
/// Each of the eight jumps is a fixed shift of the bit index. A shift is only
/// taken when the file and rank of the source leave room for it; otherwise
/// the raw shift would wrap onto the far side of the board.
pub fn knight_moves(sq: Square) -> Bitboard {
    let bits = sq.bits();
    let file = sq.file();
    let rank = sq.rank();
    let mut moves = 0u64;

    // Two up.
    if rank <= Rank::Rank6 {
        if file < File::FileH {
            moves |= bits << 17;
        }
        if file > File::FileA {
            moves |= bits << 15;
        }
    }
    // One up.
    if rank < Rank::Rank8 {
        if file <= File::FileF {
            moves |= bits << 10;
        }
        if file >= File::FileC {
            moves |= bits << 6;
        }
    }
    // One down.
    if rank > Rank::Rank1 {
        if file <= File::FileF {
            moves |= bits >> 6;
        }
        if file >= File::FileC {
            moves |= bits >> 10;
        }
    }
    // Two down.
    if rank >= Rank::Rank3 {
        if file < File::FileH {
            moves |= bits >> 15;
        }
        if file > File::FileA {
            moves |= bits >> 17;
        }
    }

    Bitboard::new(moves)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::knight_moves;
    use crate::bitboard::Bitboard;
    use crate::movegen::tests::reference;
    use crate::square::Square;

    const JUMPS: [(i8, i8); 8] = [
        (1, 2),
        (-1, 2),
        (2, 1),
        (-2, 1),
        (2, -1),
        (-2, -1),
        (1, -2),
        (-1, -2),
    ];

    #[test_case(Square::A1; "a1")]
    #[test_case(Square::H1; "h1")]
    #[test_case(Square::A8; "a8")]
    #[test_case(Square::H8; "h8")]
    fn corners_have_two(sq: Square) {
        assert_eq!(knight_moves(sq).count(), 2);
    }

    #[test]
    fn from_a1() {
        assert_eq!(
            knight_moves(Square::A1),
            Bitboard::from_squares(&[Square::C2, Square::B3])
        );
    }

    #[test]
    fn from_e5() {
        assert_eq!(
            knight_moves(Square::E5),
            Bitboard::from_squares(&[
                Square::D3,
                Square::D7,
                Square::F3,
                Square::F7,
                Square::G4,
                Square::G6,
                Square::C4,
                Square::C6,
            ])
        );
    }

    #[test]
    fn interior_squares_have_eight() {
        for sq in Square::all() {
            let file = sq.file().number();
            let rank = sq.rank().number();
            if (3..=6).contains(&file) && (3..=6).contains(&rank) {
                assert_eq!(knight_moves(sq).count(), 8, "knight on {sq}");
            }
        }
    }

    #[test]
    fn matches_coordinate_reference_everywhere() {
        for sq in Square::all() {
            assert_eq!(knight_moves(sq), reference(sq, &JUMPS, false), "knight on {sq}");
        }
    }
}
