// crates/shared-kernel/src/value_objects/position.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Cursor location inside a wordlist.
///
/// `line` is 1-based. `column` is 0 at the start of a line and advances once
/// per consumed byte, so the first byte of a line sits at column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// 走査開始位置 (1 行目, 0 列目)
    #[inline]
    pub const fn start() -> Self {
        Self { line: 1, column: 0 }
    }

    #[inline]
    pub const fn is_line_start(self) -> bool {
        self.column == 0
    }

    #[inline]
    pub fn advance(&mut self) {
        self.column += 1;
    }

    /// Moves to column 0 of the next line.
    #[inline]
    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
