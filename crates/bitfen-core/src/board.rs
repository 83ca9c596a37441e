//! The board: twelve piece wrappers, one per (kind, side), and FEN piece placement.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::bitboard::Bitboard;
use crate::error::ChessError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::side::Side;
use crate::square::Square;

/// Piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Number of piece wrappers on a board.
const PIECE_COUNT: usize = PieceKind::COUNT * Side::COUNT;

#[inline]
const fn slot(kind: PieceKind, side: Side) -> usize {
    side.index() * PieceKind::COUNT + kind.index()
}

/// Physical occupancy of the 64 squares.
///
/// Holds one [`Piece`] per (kind, side) pair, White first. No square is ever
/// set in more than one of them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pieces: [Piece; PIECE_COUNT],
}

impl Board {
    /// Return a board with no pieces on it.
    pub fn new() -> Board {
        Board {
            pieces: std::array::from_fn(|i| {
                Piece::new(PieceKind::ALL[i % PieceKind::COUNT], Side::ALL[i / PieceKind::COUNT])
            }),
        }
    }

    /// Return the standard starting arrangement.
    pub fn starting_position() -> Board {
        let mut board = Board::new();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in File::ALL.into_iter().zip(back_rank) {
            board.pieces[slot(kind, Side::White)].toggle(Square::new(Rank::Rank1, file));
            board.pieces[slot(PieceKind::Pawn, Side::White)].toggle(Square::new(Rank::Rank2, file));
            board.pieces[slot(PieceKind::Pawn, Side::Black)].toggle(Square::new(Rank::Rank7, file));
            board.pieces[slot(kind, Side::Black)].toggle(Square::new(Rank::Rank8, file));
        }
        board
    }

    /// Return all twelve piece wrappers, White King..Pawn then Black King..Pawn.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Return the wrapper for `kind` and `side`.
    #[inline]
    pub fn piece(&self, kind: PieceKind, side: Side) -> &Piece {
        &self.pieces[slot(kind, side)]
    }

    /// Return the wrapper whose bitboard holds `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.positions().contains(sq))
    }

    /// Return the symbol of the piece on `sq`, if any.
    #[inline]
    pub fn occupied_by(&self, sq: Square) -> Option<char> {
        self.piece_at(sq).map(Piece::symbol)
    }

    /// Return `true` if any piece stands on `sq`.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupied().contains(sq)
    }

    /// Return the union of all twelve bitboards.
    pub fn occupied(&self) -> Bitboard {
        self.pieces
            .iter()
            .fold(Bitboard::EMPTY, |acc, piece| acc | piece.positions())
    }

    /// Return every square held by `side`.
    pub fn side_occupancy(&self, side: Side) -> Bitboard {
        self.pieces
            .iter()
            .filter(|piece| piece.side() == side)
            .fold(Bitboard::EMPTY, |acc, piece| acc | piece.positions())
    }

    /// Put a `kind`/`side` piece on `sq`, or take it off if it is already there.
    ///
    /// Refuses to place a piece on a square held by any other wrapper.
    pub fn toggle_piece(&mut self, kind: PieceKind, side: Side, sq: Square) -> Result<(), ChessError> {
        let index = slot(kind, side);
        if !self.pieces[index].positions().contains(sq) {
            if let Some(occupant) = self.occupied_by(sq) {
                return Err(ChessError::SquareOccupied { square: sq, occupant });
            }
        }
        self.pieces[index].toggle(sq);
        Ok(())
    }

    /// Check that no square is held by two wrappers at once.
    pub fn validate(&self) -> Result<(), ChessError> {
        let mut seen = Bitboard::EMPTY;
        for piece in &self.pieces {
            if let Some(square) = (seen & piece.positions()).squares().first().copied() {
                return Err(ChessError::OverlappingPieces { square });
            }
            seen |= piece.positions();
        }
        Ok(())
    }

    /// Replace the board's contents with a FEN piece placement such as
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    ///
    /// On error the board is left unchanged.
    pub fn set_pieces(&mut self, placement: &str) -> Result<(), ChessError> {
        self.load_placement(placement, placement)
    }

    /// Load `placement`, quoting `fen` in any error.
    pub(crate) fn load_placement(&mut self, placement: &str, fen: &str) -> Result<(), ChessError> {
        trace!(placement, "loading piece placement");
        let board = parse_placement(placement, fen).inspect_err(|error| {
            debug!(%error, "rejected piece placement");
        })?;
        *self = board;
        Ok(())
    }

    /// Return a wrapper that displays the board as an 8x8 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

fn parse_placement(placement: &str, fen: &str) -> Result<Board, ChessError> {
    let wrong_rank_count = || ChessError::WrongRankCount {
        found: placement.split('/').count(),
        fen: fen.to_string(),
    };
    let bad_rank_length = |rank_index: usize, length: usize| ChessError::BadRankLength {
        rank: 8 - rank_index as u8,
        length,
        fen: fen.to_string(),
    };

    let mut board = Board::new();
    // Rank 8 is index 0, as FEN lists it first.
    let mut rank_index = 0usize;
    let mut file_index = 0usize;

    for c in placement.chars() {
        match c {
            '/' => {
                if file_index != File::COUNT {
                    return Err(bad_rank_length(rank_index, file_index));
                }
                rank_index += 1;
                if rank_index >= Rank::COUNT {
                    return Err(wrong_rank_count());
                }
                file_index = 0;
            }
            '1'..='8' => {
                file_index += c as usize - '0' as usize;
                if file_index > File::COUNT {
                    return Err(bad_rank_length(rank_index, file_index));
                }
            }
            _ => {
                let piece = Piece::from_symbol(c).ok_or_else(|| ChessError::InvalidPieceChar {
                    character: c,
                    fen: fen.to_string(),
                })?;
                if file_index >= File::COUNT {
                    return Err(bad_rank_length(rank_index, file_index + 1));
                }
                let rank = Rank::ALL[Rank::COUNT - 1 - rank_index];
                let sq = Square::new(rank, File::ALL[file_index]);
                board.pieces[slot(piece.kind(), piece.side())].toggle(sq);
                file_index += 1;
            }
        }
    }

    if file_index != File::COUNT {
        return Err(bad_rank_length(rank_index, file_index));
    }
    if rank_index != Rank::COUNT - 1 {
        return Err(wrong_rank_count());
    }
    Ok(board)
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ChessError;

    fn from_str(placement: &str) -> Result<Board, ChessError> {
        let mut board = Board::new();
        board.set_pieces(placement)?;
        Ok(board)
    }
}

/// Renders the FEN piece placement.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty = 0u8;
            for file in File::ALL {
                match self.occupied_by(Square::new(rank, file)) {
                    Some(symbol) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{symbol}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank != Rank::Rank1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank} ")?;
            for file in File::ALL {
                let c = self.0.occupied_by(Square::new(rank, file)).unwrap_or('.');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   A B C D E F G H")
    }
}
