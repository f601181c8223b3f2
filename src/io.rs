//! Token-stream input parsing.
//!
//! Instances arrive as whitespace-delimited textual tokens (sizes first,
//! then data). Inputs are judge-controlled, so a schema mismatch is a
//! hard error rather than something to recover from.

use std::str::FromStr;

use crate::error::{HarnessError, HarnessResult};

/// Reader over a whitespace-delimited token stream.
pub struct TokenReader<'a> {
    tokens: std::str::SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> TokenReader<'a> {
    /// Create a reader over the full input text
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
            consumed: 0,
        }
    }

    /// Read and parse the next token
    pub fn next<T: FromStr>(&mut self) -> HarnessResult<T> {
        let token = self.tokens.next().ok_or_else(|| {
            HarnessError::MalformedInput(format!(
                "expected token #{}, found end of input",
                self.consumed + 1
            ))
        })?;
        self.consumed += 1;
        token.parse::<T>().map_err(|_| {
            HarnessError::MalformedInput(format!(
                "token #{} ({:?}) is not a valid {}",
                self.consumed,
                token,
                std::any::type_name::<T>()
            ))
        })
    }

    /// Read `n` tokens into a vector
    pub fn take<T: FromStr>(&mut self, n: usize) -> HarnessResult<Vec<T>> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.next()?);
        }
        Ok(out)
    }

    /// Number of tokens consumed so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}
