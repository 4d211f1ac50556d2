// crates/domain/src/lexer/token.rs
use wordlist_lines_shared_kernel::{Position, ScanError};

/// Why a byte was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalKind {
    /// A byte outside the charset that is not a line ending.
    Character(u8),
    /// `\n` as the first byte of a line.
    BlankLine,
    /// `\r` not immediately followed by `\n`.
    BareCarriageReturn,
}

impl IllegalKind {
    /// 不正箇所のリテラル表現 (エスケープなし)
    pub fn literal(self) -> String {
        match self {
            Self::Character(byte) => char::from(byte).to_string(),
            Self::BlankLine => "\n".to_string(),
            Self::BareCarriageReturn => "\r".to_string(),
        }
    }
}

/// Kinds of token the scanner emits. Both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfStream,
    Illegal(IllegalKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
    /// Offending character or line ending; empty for `EndOfStream`.
    pub literal: String,
}

impl Token {
    pub const fn end_of_stream(position: Position) -> Self {
        Self { kind: TokenKind::EndOfStream, position, literal: String::new() }
    }

    pub fn illegal(position: Position, kind: IllegalKind) -> Self {
        Self { kind: TokenKind::Illegal(kind), position, literal: kind.literal() }
    }

    /// Converts an `Illegal` token into the matching [`ScanError`].
    /// Returns `None` for `EndOfStream`.
    pub fn into_error(self) -> Option<ScanError> {
        match self.kind {
            TokenKind::EndOfStream => None,
            TokenKind::Illegal(IllegalKind::Character(_)) => {
                Some(ScanError::illegal_character(self.position, self.literal))
            }
            TokenKind::Illegal(IllegalKind::BlankLine) => Some(ScanError::blank_line(self.position)),
            TokenKind::Illegal(IllegalKind::BareCarriageReturn) => Some(ScanError::bare_cr(self.position)),
        }
    }
}
