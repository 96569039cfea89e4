use std::iter::Peekable;
use std::str::Chars;

use crate::error::BoardInitError;

/// A symbol and the number of consecutive cells it covers
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Run {
    /// the cell symbol, not yet validated
    pub symbol: char,
    /// how many cells the symbol repeats for
    pub count: usize,
}

/// Splits a row token in to its runs, e.g. `W1E5` yields `('W', 1)` then
/// `('E', 5)`. Stops after the first error
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    chars: Peekable<Chars<'a>>,
    failed: bool,
}

impl<'a> Runs<'a> {
    #[allow(missing_docs)]
    pub fn new(token: &'a str) -> Self {
        Runs {
            chars: token.chars().peekable(),
            failed: false,
        }
    }
}

impl Iterator for Runs<'_> {
    type Item = Result<Run, BoardInitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let symbol = self.chars.next()?;

        let mut digits = 0usize;
        let mut count = 0usize;
        while let Some(d) = self.chars.next_if(char::is_ascii_digit) {
            let d = d as usize - '0' as usize;
            // saturating, an overflowed count can never fit in a row anyway
            count = count.saturating_mul(10).saturating_add(d);
            digits += 1;
        }

        if digits == 0 {
            self.failed = true;
            return Some(Err(BoardInitError::BadChar));
        }

        Some(Ok(Run { symbol, count }))
    }
}
