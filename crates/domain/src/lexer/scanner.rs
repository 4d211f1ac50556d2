// crates/domain/src/lexer/scanner.rs
//! ワードリスト字句解析器
//!
//! Reads a buffered byte source one byte at a time and stops at the first
//! terminal token: `EndOfStream` for a well-formed list, `Illegal` for the
//! first rejected byte. Accepted bytes and resolved line endings never
//! surface as tokens; they only move the cursor.

use std::io::{self, BufRead};

use wordlist_lines_shared_kernel::Position;

use super::{
    charset::{DnsLabelCharset, LabelCharset},
    token::{IllegalKind, Token},
};

/// Byte-level state machine over a single wordlist.
///
/// A scanner is bound to one source and walks it exactly once. After a
/// terminal token has been produced, further calls return that same token
/// without touching the source again.
#[derive(Debug)]
pub struct Scanner<R, C = DnsLabelCharset> {
    reader: R,
    charset: C,
    position: Position,
    last: Option<u8>,
    terminal: Option<Token>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self::with_charset(reader, DnsLabelCharset)
    }
}

impl<R: BufRead, C: LabelCharset> Scanner<R, C> {
    pub fn with_charset(reader: R, charset: C) -> Self {
        Self {
            reader,
            charset,
            position: Position::start(),
            last: None,
            terminal: None,
        }
    }

    /// Current cursor position.
    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn is_done(&self) -> bool {
        self.terminal.is_some()
    }

    /// Scans until the next terminal token.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the source fails. Rejected input
    /// is not an error here; it comes back as an `Illegal` token.
    pub fn next_token(&mut self) -> io::Result<Token> {
        if let Some(token) = &self.terminal {
            return Ok(token.clone());
        }
        let token = self.scan()?;
        self.terminal = Some(token.clone());
        Ok(token)
    }

    fn scan(&mut self) -> io::Result<Token> {
        loop {
            let Some(byte) = self.read_byte()? else {
                return Ok(self.end_of_stream());
            };
            self.last = Some(byte);
            self.position.advance();

            match byte {
                b'\n' => {
                    // 行頭の改行は空行
                    if self.position.column == 1 {
                        return Ok(Token::illegal(self.position, IllegalKind::BlankLine));
                    }
                    self.position.next_line();
                }
                b'\r' => {
                    if self.peek_byte()? != Some(b'\n') {
                        return Ok(Token::illegal(self.position, IllegalKind::BareCarriageReturn));
                    }
                    // CRLF: a leading CR must not hide that the LF starts the line.
                    if self.position.column == 1 {
                        self.position.column = 0;
                    }
                }
                _ if self.charset.is_permitted(byte) => {}
                _ => return Ok(Token::illegal(self.position, IllegalKind::Character(byte))),
            }
        }
    }

    /// An unterminated trailing line still counts as a line.
    fn end_of_stream(&mut self) -> Token {
        if self.last != Some(b'\n') && self.position.column > 0 {
            self.position.next_line();
        }
        Token::end_of_stream(self.position)
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
