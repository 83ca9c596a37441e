//! Chess position model: one-hot squares, bitboards, pseudo-legal move
//! geometry, and FEN encoding for boards and positions.

mod bitboard;
mod board;
mod castle_rights;
mod error;
mod file;
mod move_token;
pub mod movegen;
mod piece;
mod piece_kind;
mod position;
mod rank;
mod side;
mod square;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard, STARTING_PLACEMENT};
pub use castle_rights::{CastleRights, CastleSide};
pub use error::ChessError;
pub use file::File;
pub use move_token::MoveToken;
pub use movegen::{squares_adjacent, squares_between};
pub use piece::{Piece, PieceSet};
pub use piece_kind::PieceKind;
pub use position::{Position, STARTING_FEN};
pub use rank::Rank;
pub use side::Side;
pub use square::{Square, file_of, rank_of};
