//! Integration tests over the public API: FEN round-trips, placement errors,
//! and the geometry a front-end relies on when validating move tokens.

use bitfen_core::movegen::{diagonal_moves, file_moves, king_moves, knight_moves};
use bitfen_core::{
    Bitboard, Board, ChessError, PieceKind, Position, STARTING_FEN, Side, Square, squares_adjacent,
    squares_between,
};

const POSITIONS: &[&str] = &[
    STARTING_FEN,
    "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
    "8/8/8/3k4/8/3K4/4P3/8 b - - 99 255",
];

// ── FEN ──────────────────────────────────────────────────────────────────────

#[test]
fn positions_roundtrip() {
    for fen in POSITIONS {
        let position: Position = fen.parse().unwrap();
        assert_eq!(&position.to_string(), fen);
        assert_eq!(position.to_string().parse::<Position>().unwrap(), position);
        position.board().validate().unwrap();
    }
}

#[test]
fn placement_field_matches_board_rendering() {
    for fen in POSITIONS {
        let placement = fen.split(' ').next().unwrap();
        let board: Board = placement.parse().unwrap();
        let position: Position = fen.parse().unwrap();
        assert_eq!(position.board(), &board);
    }
}

#[test]
fn each_piece_letter_replaced_by_f_is_reported() {
    for (i, c) in STARTING_FEN.char_indices().take_while(|&(_, c)| c != ' ') {
        if !c.is_ascii_alphabetic() {
            continue;
        }
        let mut fen = STARTING_FEN.to_string();
        fen.replace_range(i..i + 1, "f");
        assert_eq!(
            fen.parse::<Position>(),
            Err(ChessError::InvalidPieceChar {
                character: 'f',
                fen: fen.clone(),
            })
        );
    }
}

#[test]
fn later_field_errors_surface_in_order() {
    let bad_side = "8/8/8/8/8/8/8/8 white - - 0 1";
    assert!(matches!(bad_side.parse::<Position>(), Err(ChessError::InvalidSide { .. })));

    let bad_side_and_castling = "8/8/8/8/8/8/8/8 white Z - 0 1";
    assert!(matches!(
        bad_side_and_castling.parse::<Position>(),
        Err(ChessError::InvalidSide { .. })
    ));

    let bad_en_passant_and_clock = "8/8/8/8/8/8/8/8 w - e5 x 1";
    assert!(matches!(
        bad_en_passant_and_clock.parse::<Position>(),
        Err(ChessError::InvalidEnPassant { .. })
    ));
}

#[test]
fn five_fields_is_malformed() {
    assert!(matches!(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0".parse::<Position>(),
        Err(ChessError::MalformedFen { found: 5, .. })
    ));
}

// ── Geometry ─────────────────────────────────────────────────────────────────

#[test]
fn corner_geometry() {
    assert_eq!(
        knight_moves(Square::A1),
        Bitboard::from_squares(&[Square::C2, Square::B3])
    );
    assert_eq!(
        king_moves(Square::A1),
        Bitboard::from_squares(&[Square::A2, Square::B2, Square::B1])
    );
    assert_eq!(file_moves(Square::A1).count(), 7);
    assert_eq!(diagonal_moves(Square::A1).count(), 7);
    assert!(diagonal_moves(Square::A1).contains(Square::H8));
}

#[test]
fn between_and_adjacent() {
    assert_eq!(squares_between(Square::A1, Square::A8).count(), 6);
    assert!(squares_between(Square::A1, Square::B1).is_empty());
    assert_eq!(
        squares_between(Square::B2, Square::H8),
        Bitboard::from_squares(&[Square::C3, Square::D4, Square::E5, Square::F6, Square::G7])
    );
    assert!(squares_adjacent(Square::E5, Square::E6));
    assert!(!squares_adjacent(Square::A1, Square::A3));
}

#[test]
fn geometric_validity_is_blind_to_occupancy() {
    let position = Position::new();
    let rook = position.board().piece(PieceKind::Rook, Side::White);
    // A1 to A8 passes through its own pawn on A2 and lands on a black rook.
    assert!(rook.valid_move(Square::A1, Square::A8));
    assert!(position.parse_move("RA1A8").is_ok());
    assert!(position.parse_move("RA1B8").is_err());
}
