// RSA Key Generation
// Derives the (modulus, public exponent, private exponent) triple from two primes

use std::fmt;
use std::str::FromStr;

use num_traits::{One, Zero};
use tracing::{debug, trace};

use super::bigint::{from_u64, gcd, mod_inverse, parse_integer, RsaBigInt};
use crate::error::CipherError;

/// RSA key triple
///
/// Public key pair is `(n, e)`, private key pair is `(n, d)`. The triple is
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTriple {
    n: RsaBigInt, // Modulus
    e: RsaBigInt, // Public exponent
    d: RsaBigInt, // Private exponent
}

impl KeyTriple {
    /// Wrap an existing triple, e.g. one restored from storage
    pub fn new(modulus: RsaBigInt, public_exponent: RsaBigInt, private_exponent: RsaBigInt) -> Self {
        Self {
            n: modulus,
            e: public_exponent,
            d: private_exponent,
        }
    }

    pub fn modulus(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn public_exponent(&self) -> &RsaBigInt {
        &self.e
    }

    pub fn private_exponent(&self) -> &RsaBigInt {
        &self.d
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }
}

/// Formats as `"<n> <e> <d>"` in decimal
impl fmt::Display for KeyTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.n, self.e, self.d)
    }
}

/// Parses three whitespace-separated integers, each decimal or `0x` hexadecimal
impl FromStr for KeyTriple {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|part| {
                parse_integer(part)
                    .ok_or_else(|| CipherError::InvalidKey(format!("not an integer: {:?}", part)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match <[RsaBigInt; 3]>::try_from(values) {
            Ok([n, e, d]) => Ok(KeyTriple::new(n, e, d)),
            Err(values) => Err(CipherError::InvalidKey(format!(
                "expected 3 integers, got {}",
                values.len()
            ))),
        }
    }
}

/// Generate the key triple for two primes p and q
///
/// No primality or distinctness check is performed: non-primes or `p == q`
/// produce a triple that simply fails to round-trip. `(p-1)(q-1)` must admit a
/// public exponent coprime to it (always true for distinct odd primes),
/// otherwise the exponent search does not terminate.
pub fn generate_keys(p: &RsaBigInt, q: &RsaBigInt) -> KeyTriple {
    // Step 1: Compute n = p * q
    let n = p * q;

    // Step 2: Compute m = (p-1)(q-1)
    let m = predecessor(p) * predecessor(q);

    // Step 3: Search for the public exponent
    let e = find_public_exponent(&m);

    // Step 4: Compute d = e^(-1) mod m
    let d = mod_inverse(&e, &m);

    debug!(modulus = %n, public_exponent = %e, bits = n.bits(), "generated key triple");

    KeyTriple { n, e, d }
}

/// Find the smallest public exponent coprime to `m`
///
/// Tries 3, then 5, 7, 11, 13, 17, 19, ... alternately adding 2 and 4 so that
/// multiples of 2 and 3 are skipped.
pub fn find_public_exponent(m: &RsaBigInt) -> RsaBigInt {
    let one = RsaBigInt::one();
    let mut e = from_u64(3);
    if gcd(&e, m) == one {
        return e;
    }

    e = from_u64(5);
    let mut step = 2u8;
    while gcd(&e, m) != one {
        trace!(candidate = %e, "public exponent candidate shares a factor with m");
        e += step;
        step = if step == 2 { 4 } else { 2 };
    }

    e
}

fn predecessor(x: &RsaBigInt) -> RsaBigInt {
    if x.is_zero() {
        RsaBigInt::zero()
    } else {
        x - 1u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::mod_pow;

    #[test]
    fn test_key_generation_small_primes() {
        let keys = generate_keys(&from_u64(7), &from_u64(11));

        assert_eq!(keys.modulus(), &from_u64(77));
        // 3 and 5 divide 60, so the search lands on 7
        assert_eq!(keys.public_exponent(), &from_u64(7));
        assert_eq!(keys.private_exponent(), &from_u64(43));
    }

    #[test]
    fn test_key_generation_61_53() {
        let keys = generate_keys(&from_u64(61), &from_u64(53));

        assert_eq!(keys.modulus(), &from_u64(3233));
        assert_eq!(keys.public_exponent(), &from_u64(7));
        assert_eq!(keys.private_exponent(), &from_u64(1783));
    }

    #[test]
    fn test_key_properties() {
        let p = from_u64(10007);
        let q = from_u64(10009);
        let keys = generate_keys(&p, &q);

        // Verify n = p * q
        assert_eq!(keys.modulus(), &(&p * &q));

        // Verify e * d ≡ 1 (mod m)
        let m = (&p - 1u8) * (&q - 1u8);
        let product = keys.public_exponent() * keys.private_exponent();
        assert_eq!(product % &m, from_u64(1));

        // 1 < e < n and 0 <= d < m
        assert!(keys.public_exponent() > &from_u64(1));
        assert!(keys.public_exponent() < keys.modulus());
        assert!(keys.private_exponent() < &m);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate_keys(&from_u64(10007), &from_u64(10009));
        let second = generate_keys(&from_u64(10007), &from_u64(10009));
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_public_exponent_sequence() {
        // m = 2^2 * 3 * 5 * 7 * 11 * 13: 3, 5, 7, 11, 13 all rejected, 17 accepted
        let m = from_u64(4 * 3 * 5 * 7 * 11 * 13);
        assert_eq!(find_public_exponent(&m), from_u64(17));

        // 9 and 15 are never tried: 3 is the only multiple of 3 in the sequence
        let m = from_u64(2 * 5 * 7);
        assert_eq!(find_public_exponent(&m), from_u64(3));
        let m = from_u64(6 * 5 * 7);
        assert_eq!(find_public_exponent(&m), from_u64(11));
    }

    #[test]
    fn test_rsa_identity_holds_for_every_residue() {
        let keys = generate_keys(&from_u64(11), &from_u64(13));
        let n = keys.modulus();

        for x in 0..143u64 {
            let x = from_u64(x);
            let c = mod_pow(&x, keys.public_exponent(), n);
            assert_eq!(mod_pow(&c, keys.private_exponent(), n), x);
        }
    }

    #[test]
    fn test_key_triple_display_and_parse() {
        let keys = generate_keys(&from_u64(61), &from_u64(53));
        let text = keys.to_string();
        assert_eq!(text, "3233 7 1783");

        let parsed: KeyTriple = text.parse().unwrap();
        assert_eq!(parsed, keys);

        let hex: KeyTriple = "0xca1 0x7\t1783".parse().unwrap();
        assert_eq!(hex, keys);
    }

    #[test]
    fn test_key_triple_parse_errors() {
        assert!(matches!(
            "3233 7".parse::<KeyTriple>(),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            "3233 7 1783 1".parse::<KeyTriple>(),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            "3233 seven 1783".parse::<KeyTriple>(),
            Err(CipherError::InvalidKey(_))
        ));
    }
}
