//! Reads pairs of equal-length integer sequences and, for each position,
//! emits a value derived from a running nearest-maximum search and
//! modular exponentiation. See [`transform::transform`] for the exact
//! per-position contract.

pub mod modnum;
pub mod scan;
pub mod transform;

use std::io::Write;

use log::debug;
use thiserror::Error;

use crate::scan::{ScanError, Scanner};
use crate::transform::transform;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed input: {0}")]
    Scan(#[from] ScanError),
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}

/// Runs the whole job: scans the test-case count, then per test case
/// scans n, A and B, transforms, and writes one line of space-terminated
/// results.
pub fn run<W: Write>(input: &[u8], out: &mut W) -> Result<(), Error> {
    let mut scanner = Scanner::new(input);
    let cases: usize = scanner.value()?;

    for case in 0..cases {
        let n: usize = scanner.value()?;
        let a = scanner.values(n)?;
        let b = scanner.values(n)?;
        debug!("case {}/{}: n = {}", case + 1, cases, n);

        for value in transform(&a, &b) {
            write!(out, "{} ", value)?;
        }
        writeln!(out)?;
    }

    Ok(())
}
