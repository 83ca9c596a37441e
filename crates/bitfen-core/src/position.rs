//! A full position: board, side to move, castling rights, en passant target
//! and move counters, with FEN parsing and rendering.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::error::ChessError;
use crate::move_token::MoveToken;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::side::Side;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Complete position state as carried by a FEN string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    side_to_move: Side,
    castling: CastleRights,
    /// Square a pawn skipped over on its last double step; rank 3 or 6 only.
    en_passant: Option<Square>,
    halfmove_clock: u8,
    fullmove_number: u8,
}

impl Position {
    /// Return the start-of-game position.
    pub fn new() -> Position {
        Position {
            board: Board::starting_position(),
            side_to_move: Side::White,
            castling: CastleRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Return the piece placement.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Return the castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u8 {
        self.halfmove_clock
    }

    /// Return the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u8 {
        self.fullmove_number
    }

    /// Parse a long-algebraic move token and check that the named piece
    /// (a pawn when no letter is given) of the side to move could
    /// geometrically make it.
    ///
    /// Occupancy is not consulted: the token need not start on a square the
    /// side actually holds.
    pub fn parse_move(&self, token: &str) -> Result<MoveToken, ChessError> {
        let mv: MoveToken = token.parse()?;
        let kind = mv.piece().unwrap_or(PieceKind::Pawn);
        let invalid = |reason| ChessError::InvalidMove {
            token: token.to_string(),
            reason,
        };

        if mv.promotion().is_some() && kind != PieceKind::Pawn {
            return Err(invalid("only pawns promote"));
        }
        if !Piece::new(kind, self.side_to_move).valid_move(mv.from(), mv.to()) {
            return Err(invalid("piece cannot reach the destination square"));
        }
        trace!(%mv, side = %self.side_to_move, "accepted move token");
        Ok(mv)
    }
}

fn parse_fen(fen: &str) -> Result<Position, ChessError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[placement, side, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
        return Err(ChessError::MalformedFen {
            found: fields.len(),
            fen: fen.to_string(),
        });
    };

    let mut board = Board::new();
    board.load_placement(placement, fen)?;

    let side_to_move = Side::from_fen(side).ok_or_else(|| ChessError::InvalidSide {
        token: side.to_string(),
        fen: fen.to_string(),
    })?;

    let castling = CastleRights::parse_field(castling, fen)?;

    let en_passant = parse_en_passant(en_passant, fen)?;

    let halfmove_clock = parse_counter(halfmove, "halfmove clock")?;
    let fullmove_number = parse_counter(fullmove, "fullmove number")?;

    Ok(Position {
        board,
        side_to_move,
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
    })
}

fn parse_en_passant(token: &str, fen: &str) -> Result<Option<Square>, ChessError> {
    if token == "-" {
        return Ok(None);
    }
    match Square::from_label(token) {
        Some(sq) if matches!(sq.rank(), Rank::Rank3 | Rank::Rank6) => Ok(Some(sq)),
        _ => Err(ChessError::InvalidEnPassant {
            token: token.to_string(),
            fen: fen.to_string(),
        }),
    }
}

fn parse_counter(value: &str, field: &'static str) -> Result<u8, ChessError> {
    value.parse::<u8>().map_err(|source| ChessError::InvalidNumber {
        field,
        value: value.to_string(),
        source,
    })
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(fen: &str) -> Result<Position, ChessError> {
        let position = parse_fen(fen).inspect_err(|error| {
            debug!(%error, "rejected FEN");
        })?;
        debug!(fen, "parsed FEN");
        Ok(position)
    }
}

/// Renders the position as a six-field FEN string.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.board, self.side_to_move, self.castling)?;
        match self.en_passant {
            Some(sq) => write!(f, "{}", sq.label().to_ascii_lowercase())?,
            None => write!(f, "-")?,
        }
        write!(f, " {} {}", self.halfmove_clock, self.fullmove_number)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self)
    }
}
