//! Long-algebraic move tokens such as `E2E4`, `NG1F3`, `E4xD5` or `E7D8Q`.

use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A structurally valid long-algebraic move.
///
/// Shape: `[N|B|R|Q|K]? <from> [-|x]? <to> [N|B|R|Q]?`. Square letters may be
/// either case; the leading piece letter must be uppercase so that it cannot
/// be confused with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveToken {
    piece: Option<PieceKind>,
    from: Square,
    to: Square,
    capture: bool,
    promotion: Option<PieceKind>,
}

impl MoveToken {
    /// The moving piece, or `None` for a pawn move.
    #[inline]
    pub fn piece(&self) -> Option<PieceKind> {
        self.piece
    }

    /// The source square.
    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    /// The destination square.
    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    /// `true` if the token was written with an `x` capture marker.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.capture
    }

    /// The promotion piece, if any.
    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }
}

fn leading_piece(c: u8) -> Option<PieceKind> {
    match c {
        b'N' => Some(PieceKind::Knight),
        b'B' => Some(PieceKind::Bishop),
        b'R' => Some(PieceKind::Rook),
        b'Q' => Some(PieceKind::Queen),
        b'K' => Some(PieceKind::King),
        _ => None,
    }
}

fn promotion_piece(c: u8) -> Option<PieceKind> {
    match c.to_ascii_uppercase() {
        b'N' => Some(PieceKind::Knight),
        b'B' => Some(PieceKind::Bishop),
        b'R' => Some(PieceKind::Rook),
        b'Q' => Some(PieceKind::Queen),
        _ => None,
    }
}

/// Match everything after the optional piece letter.
fn parse_body(body: &[u8]) -> Option<(Square, bool, Square, Option<PieceKind>)> {
    let square = |bytes: &[u8]| Square::from_label(std::str::from_utf8(bytes).ok()?);

    let from = square(body.get(..2)?)?;
    let mut rest = &body[2..];

    let mut capture = false;
    if let Some((&marker, tail)) = rest.split_first() {
        if marker == b'-' || marker == b'x' {
            capture = marker == b'x';
            rest = tail;
        }
    }

    let to = square(rest.get(..2)?)?;
    let promotion = match &rest[2..] {
        [] => None,
        [c] => Some(promotion_piece(*c)?),
        _ => return None,
    };
    Some((from, capture, to, promotion))
}

impl FromStr for MoveToken {
    type Err = ChessError;

    fn from_str(token: &str) -> Result<MoveToken, ChessError> {
        let bytes = token.as_bytes();

        // A leading B could be a bishop or the B file; try the piece reading first.
        let with_piece = bytes
            .split_first()
            .and_then(|(&c, body)| Some((leading_piece(c)?, parse_body(body)?)));
        let (piece, (from, capture, to, promotion)) = match with_piece {
            Some((piece, body)) => (Some(piece), body),
            None => (
                None,
                parse_body(bytes).ok_or_else(|| ChessError::InvalidMove {
                    token: token.to_string(),
                    reason: "does not match [NBRQK]<from>[-x]<to>[NBRQ]",
                })?,
            ),
        };

        Ok(MoveToken {
            piece,
            from,
            to,
            capture,
            promotion,
        })
    }
}

/// Renders the canonical uppercase form, e.g. `NG1F3`, `E4xD5`, `E7E8Q`.
impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(piece) = self.piece {
            write!(f, "{}", piece.fen_char().to_ascii_uppercase())?;
        }
        write!(f, "{}", self.from)?;
        if self.capture {
            write!(f, "x")?;
        }
        write!(f, "{}", self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.fen_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::MoveToken;
    use crate::error::ChessError;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn pawn_push() {
        let mv: MoveToken = "E2E4".parse().unwrap();
        assert_eq!(mv.piece(), None);
        assert_eq!(mv.from(), Square::E2);
        assert_eq!(mv.to(), Square::E4);
        assert!(!mv.is_capture());
        assert_eq!(mv.promotion(), None);
    }

    #[test]
    fn knight_move() {
        let mv: MoveToken = "NG1F3".parse().unwrap();
        assert_eq!(mv.piece(), Some(PieceKind::Knight));
        assert_eq!(mv.from(), Square::G1);
        assert_eq!(mv.to(), Square::F3);
    }

    #[test]
    fn capture_and_promotion() {
        let mv: MoveToken = "E7xD8Q".parse().unwrap();
        assert!(mv.is_capture());
        assert_eq!(mv.promotion(), Some(PieceKind::Queen));
        assert_eq!(mv.to_string(), "E7xD8Q");

        let dashed: MoveToken = "E2-E4".parse().unwrap();
        assert!(!dashed.is_capture());
        assert_eq!(dashed.to_string(), "E2E4");
    }

    #[test]
    fn leading_b_is_file_or_bishop() {
        let pawn: MoveToken = "B2B4".parse().unwrap();
        assert_eq!(pawn.piece(), None);
        assert_eq!(pawn.from(), Square::B2);

        let bishop: MoveToken = "BB2C3".parse().unwrap();
        assert_eq!(bishop.piece(), Some(PieceKind::Bishop));
        assert_eq!(bishop.from(), Square::B2);
    }

    #[test]
    fn lowercase_squares() {
        let mv: MoveToken = "e7e8q".parse().unwrap();
        assert_eq!(mv.from(), Square::E7);
        assert_eq!(mv.promotion(), Some(PieceKind::Queen));
        assert_eq!(mv.to_string(), "E7E8Q");
    }

    #[test_case(""; "empty")]
    #[test_case("E2"; "missing destination")]
    #[test_case("E2E"; "truncated destination")]
    #[test_case("E2E9"; "off board")]
    #[test_case("I2E4"; "bad file")]
    #[test_case("E2E4K"; "king promotion")]
    #[test_case("E2E4QQ"; "trailing characters")]
    #[test_case("PE2E4"; "explicit pawn letter")]
    #[test_case("E2+E4"; "unknown marker")]
    #[test_case("É2E4"; "non ascii")]
    fn malformed(token: &str) {
        assert!(matches!(
            token.parse::<MoveToken>(),
            Err(ChessError::InvalidMove { .. })
        ));
    }

    #[test]
    fn error_names_token() {
        let err = "Z9Z9".parse::<MoveToken>().unwrap_err();
        assert!(err.to_string().starts_with("invalid move \"Z9Z9\""));
    }
}
