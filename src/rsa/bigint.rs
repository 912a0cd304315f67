// RSA Big Integer Operations
// Wrapper around num-bigint for key derivation and codeword arithmetic

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Num, One, Signed, Zero};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
///
/// A zero or one modulus yields zero instead of dividing by zero.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_zero() || modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Greatest common divisor (Euclid)
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    let (mut a, mut b) = (a.clone(), b.clone());
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// State of the iterative extended Euclidean algorithm.
///
/// Holds the two triples `(u1, u2, u3)` and `(v1, v2, v3)`; every step
/// replaces `u` with `v` and `v` with `u - q * v`, where `q = u3 / v3`.
#[derive(Debug, Clone, PartialEq)]
struct EuclidState {
    u: (BigInt, BigInt, BigInt),
    v: (BigInt, BigInt, BigInt),
}

impl EuclidState {
    fn new(a: &RsaBigInt, m: &RsaBigInt) -> Self {
        Self {
            u: (BigInt::one(), BigInt::zero(), BigInt::from(m.clone())),
            v: (BigInt::zero(), BigInt::one(), BigInt::from(a.clone())),
        }
    }

    fn is_done(&self) -> bool {
        self.v.2.is_zero()
    }

    fn step(self) -> Self {
        let q = &self.u.2 / &self.v.2;
        let next = (
            &self.u.0 - &q * &self.v.0,
            &self.u.1 - &q * &self.v.1,
            &self.u.2 - &q * &self.v.2,
        );
        Self { u: self.v, v: next }
    }
}

/// Compute modular inverse: a^(-1) mod m
///
/// The result is normalized into `[0, m)`. When `gcd(a, m) != 1` no inverse
/// exists and the returned value is meaningless; callers are expected to pick
/// `a` coprime to `m`.
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> RsaBigInt {
    let mut state = EuclidState::new(a, m);
    while !state.is_done() {
        state = state.step();
    }

    let modulus = BigInt::from(m.clone());
    let mut inverse = state.u.1;
    if inverse.is_negative() && !modulus.is_zero() {
        inverse = inverse.mod_floor(&modulus);
    }

    inverse.magnitude().clone()
}

/// Parse a non-negative decimal integer, rejecting signs, separators and
/// anything else `from_str_radix` would otherwise tolerate.
pub fn parse_decimal(text: &str) -> Option<RsaBigInt> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    RsaBigInt::from_str_radix(text, 10).ok()
}

/// Parse a non-negative integer written in decimal or `0x`-prefixed hexadecimal
pub fn parse_integer(text: &str) -> Option<RsaBigInt> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            RsaBigInt::from_str_radix(digits, 16).ok()
        }
        None => parse_decimal(text),
    }
}
