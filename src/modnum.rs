//! Modular arithmetic over a runtime modulus.
//!
//! `mul_mod` is shift-and-add rather than a widening multiply: it reduces
//! after every doubling and accumulation, so no intermediate exceeds the
//! native width for any modulus below 2^63. `pow_mod` builds on it and is
//! safe for exponents up to u64::MAX.

/// The fixed prime modulus used by the transformer.
pub const M: u64 = 998_244_353;

pub fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(0 < m && m < 1 << 63);
    let mut sum = a % m + b % m;
    if sum >= m {
        sum -= m;
    }
    sum
}

pub fn mul_mod(mut a: u64, mut b: u64, m: u64) -> u64 {
    debug_assert!(0 < m && m < 1 << 63);
    a %= m;
    let mut acc = 0;
    while b > 0 {
        if b & 1 == 1 {
            acc = add_mod(acc, a, m);
        }
        a = add_mod(a, a, m);
        b >>= 1;
    }
    acc
}

pub fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    let mut base = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}
