//! Error type for FEN, square-label and move-token parsing, and board integrity.

use std::num::ParseIntError;

use crate::square::Square;

/// Every failure the library reports. Variants carry the offending fragment
/// and, for FEN input, the whole original string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// The FEN string does not have exactly six whitespace-separated fields.
    #[error("expected 6 FEN fields, found {found} in \"{fen}\"")]
    MalformedFen {
        /// Number of fields found.
        found: usize,
        /// The FEN as given.
        fen: String,
    },

    /// The piece placement contains a character outside `[rnbqkpRNBQKP1-8/]`.
    #[error("invalid piece character '{character}' in \"{fen}\"")]
    InvalidPieceChar {
        /// The offending character.
        character: char,
        /// The FEN (or standalone placement) as given.
        fen: String,
    },

    /// The piece placement does not describe exactly eight ranks.
    #[error("expected 8 ranks in piece placement, found {found} in \"{fen}\"")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
        /// The FEN (or standalone placement) as given.
        fen: String,
    },

    /// A rank describes more or fewer than eight squares.
    #[error("rank {rank} describes {length} squares, expected 8, in \"{fen}\"")]
    BadRankLength {
        /// Rank number as printed on the board (8 for the first FEN rank).
        rank: u8,
        /// Number of squares the rank describes.
        length: usize,
        /// The FEN (or standalone placement) as given.
        fen: String,
    },

    /// The side-to-move field is neither `w` nor `b`.
    #[error("invalid side to move \"{token}\" in \"{fen}\"")]
    InvalidSide {
        /// The offending token.
        token: String,
        /// The FEN as given.
        fen: String,
    },

    /// The castling field contains a character outside `KQkq-`.
    #[error("invalid castling character '{character}' in \"{fen}\"")]
    InvalidCastlingChar {
        /// The offending character.
        character: char,
        /// The FEN as given.
        fen: String,
    },

    /// The en passant field is neither `-` nor a rank 3 or rank 6 square.
    #[error("invalid en passant target \"{token}\" in \"{fen}\"")]
    InvalidEnPassant {
        /// The offending token.
        token: String,
        /// The FEN as given.
        fen: String,
    },

    /// The halfmove clock or fullmove number is not an integer in 0..=255.
    #[error("invalid {field} \"{value}\": {source}")]
    InvalidNumber {
        /// Which counter failed (`"halfmove clock"` or `"fullmove number"`).
        field: &'static str,
        /// The raw field text.
        value: String,
        /// The integer parser's own diagnostic.
        #[source]
        source: ParseIntError,
    },

    /// A square label is not `A1`..`H8`.
    #[error("invalid square \"{label}\"")]
    InvalidSquare {
        /// The offending label.
        label: String,
    },

    /// A long-algebraic move token is malformed or geometrically impossible.
    #[error("invalid move \"{token}\": {reason}")]
    InvalidMove {
        /// The token as given.
        token: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Placing a piece would put a second piece on an occupied square.
    #[error("square {square} is already occupied by '{occupant}'")]
    SquareOccupied {
        /// The contested square.
        square: Square,
        /// Symbol of the piece already there.
        occupant: char,
    },

    /// Two piece bitboards claim the same square.
    #[error("more than one piece on {square}")]
    OverlappingPieces {
        /// The first doubly-occupied square found.
        square: Square,
    },
}
