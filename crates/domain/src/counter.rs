// crates/domain/src/counter.rs
use std::io::{BufRead, Cursor};

use wordlist_lines_shared_kernel::{LineCount, ScanResult};

use crate::lexer::{DnsLabelCharset, LabelCharset, Scanner};

/// Drives a [`Scanner`] to its terminal token and turns it into a count.
///
/// `count` consumes the counter, so the underlying source is released as
/// soon as counting finishes, whichever way it ends.
#[derive(Debug)]
pub struct LineCounter<R, C = DnsLabelCharset> {
    scanner: Scanner<R, C>,
}

impl<R: BufRead> LineCounter<R> {
    pub fn new(reader: R) -> Self {
        Self { scanner: Scanner::new(reader) }
    }
}

impl<'a> LineCounter<Cursor<&'a [u8]>> {
    /// メモリ上のバイト列から生成
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::new(Cursor::new(bytes))
    }
}

impl<R: BufRead, C: LabelCharset> LineCounter<R, C> {
    pub fn with_charset(reader: R, charset: C) -> Self {
        Self { scanner: Scanner::with_charset(reader, charset) }
    }

    /// Counts the lines of the wordlist.
    ///
    /// Line numbers advance once per terminator (real or synthetic), so the
    /// line the scanner ends on is one past the last completed line.
    ///
    /// # Errors
    ///
    /// Returns the first rejection found, or `ScanError::SourceRead` if the
    /// source fails. No partial count is reported alongside an error.
    pub fn count(mut self) -> ScanResult<LineCount> {
        let token = self.scanner.next_token()?;
        let completed = LineCount::new(token.position.line.saturating_sub(1));
        token.into_error().map_or(Ok(completed), Err)
    }
}

/// 文字列をそのまま検証して行数を返す
///
/// # Errors
///
/// See [`LineCounter::count`].
pub fn count_str(input: &str) -> ScanResult<LineCount> {
    LineCounter::from_bytes(input.as_bytes()).count()
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Read};

    use wordlist_lines_shared_kernel::{Position, ScanError};

    use super::*;

    #[test]
    fn counts_lines_with_and_without_trailing_newline() {
        assert_eq!(count_str("test").unwrap(), 1usize);
        assert_eq!(count_str("TestString\nTest\n1234").unwrap(), 3usize);
        assert_eq!(count_str("TestString\nTest\n1234\n").unwrap(), 3usize);
        assert_eq!(count_str("TestString\r\nTest\r\n1234").unwrap(), 3usize);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(count_str("").unwrap(), LineCount::zero());
    }

    #[test]
    fn first_rejection_wins() {
        let err = count_str("a\n\nb_").unwrap_err();
        assert!(matches!(err, ScanError::IllegalBlankLine { line: 2, column: 1 }));
    }

    #[test]
    fn illegal_character_carries_literal_and_position() {
        let err = count_str("good\nba d\n").unwrap_err();
        assert_eq!(err.position(), Some(Position::new(2, 3)));
        assert_eq!(err.literal(), Some(" "));
    }

    #[test]
    fn non_ascii_byte_is_reported_as_its_latin1_char() {
        let err = LineCounter::from_bytes(b"caf\xe9\n").count().unwrap_err();
        assert_eq!(err.literal(), Some("\u{e9}"));
        assert_eq!(err.position(), Some(Position::new(1, 4)));
    }

    #[test]
    fn custom_charset_is_honoured() {
        let digits_only = |b: u8| b.is_ascii_digit();
        let count = LineCounter::with_charset("12\n34\n".as_bytes(), digits_only).count().unwrap();
        assert_eq!(count, 2usize);
        let err = LineCounter::with_charset("12\nab\n".as_bytes(), digits_only).count().unwrap_err();
        assert_eq!(err.position(), Some(Position::new(2, 1)));
    }

    struct FailAfter<'a> {
        data: &'a [u8],
    }

    impl Read for FailAfter<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"));
            }
            let n = self.data.len().min(buf.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn read_failure_is_an_ordinary_error() {
        let reader = BufReader::new(FailAfter { data: b"abc\ndef\n" });
        let err = LineCounter::new(reader).count().unwrap_err();
        assert!(matches!(err, ScanError::SourceRead { .. }));
        assert!(!err.is_rejection());
    }
}
