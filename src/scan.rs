//! Whitespace-token scanning over an in-memory input buffer.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("expected a non-negative integer, got {0:?}")]
    BadToken(String),
}

// every control byte counts as a separator
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

pub struct Scanner<'a> {
    buf: &'a [u8],
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn token(&mut self) -> Result<&'a [u8], ScanError> {
        let start = self
            .buf
            .iter()
            .position(|&c| !is_whitespace(c))
            .ok_or(ScanError::UnexpectedEof)?;
        self.buf = &self.buf[start..];
        let end = self
            .buf
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.buf.len());
        let (token, rest) = self.buf.split_at(end);
        self.buf = rest;
        Ok(token)
    }

    pub fn value<T: std::str::FromStr>(&mut self) -> Result<T, ScanError> {
        let token = self.token()?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| ScanError::BadToken(String::from_utf8_lossy(token).into_owned()))
    }

    pub fn values(&mut self, n: usize) -> Result<Vec<u64>, ScanError> {
        (0..n).map(|_| self.value()).collect()
    }
}
