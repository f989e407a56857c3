//! Prime-field description and Montgomery constants

use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Size of an encoded field element in bytes (32 bytes = 256 bits)
pub const FIELD_ELEMENT_SIZE: usize = 32;

/// Width of the Montgomery radix `R = 2^256` in bits.
///
/// The backend is treated as a fixed 256-bit unsigned integer, so every
/// accepted modulus shares the same radix.
const MONT_BITS: u32 = 256;

/// A prime field `F_p` described by its modulus.
///
/// Construction derives the Montgomery constants once; afterwards the value
/// is immutable and is shared by every element referencing it through an
/// [`Arc`] handle. Two handles describe the same field whenever their moduli
/// are equal; pointer identity is only a fast path.
///
/// The modulus is required to be odd, greater than one, and at most 256 bits
/// wide. Primality is the caller's responsibility: a composite odd modulus
/// yields a ring in which `invert` can fail for nonzero elements.
#[derive(Debug)]
pub struct Field {
    modulus: BigUint,
    /// `R mod p` — the Montgomery form of one.
    r: BigUint,
    /// `R² mod p` — conversion factor into the Montgomery domain.
    r2: BigUint,
    /// `-p⁻¹ mod R` — the reduction multiplier.
    neg_inv: BigUint,
    /// `R − 1`, used to take values `mod R` by masking.
    r_mask: BigUint,
}

impl Field {
    /// Create a new field from its modulus, deriving the Montgomery
    /// constants.
    ///
    /// Fails with [`Error::InvalidModulus`] if the modulus is zero, even,
    /// one, or wider than 256 bits.
    pub fn new(modulus: BigUint) -> Result<Arc<Self>> {
        if modulus.is_zero() {
            return Err(Error::InvalidModulus {
                reason: "modulus must be nonzero",
            });
        }
        if !modulus.bit(0) {
            return Err(Error::InvalidModulus {
                reason: "modulus must be odd",
            });
        }
        if modulus.is_one() {
            return Err(Error::InvalidModulus {
                reason: "modulus must exceed one",
            });
        }
        if modulus.bits() > u64::from(MONT_BITS) {
            return Err(Error::InvalidModulus {
                reason: "modulus must fit in 256 bits",
            });
        }

        let r_full: BigUint = BigUint::one() << MONT_BITS;
        let r = &r_full % &modulus;
        let r2 = (&r * &r) % &modulus;
        // p is odd, so p⁻¹ mod 2^256 always exists.
        let inv = modulus
            .modinv(&r_full)
            .ok_or(Error::InvalidModulus {
                reason: "modulus is not invertible modulo 2^256",
            })?;
        let neg_inv = (&r_full - inv) % &r_full;
        let r_mask = r_full - BigUint::one();

        Ok(Arc::new(Field {
            modulus,
            r,
            r2,
            neg_inv,
            r_mask,
        }))
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// `R mod p`, the Montgomery representation of one.
    pub(crate) fn mont_one(&self) -> &BigUint {
        &self.r
    }

    /// Whether `other` describes the same field.
    pub fn same_field(&self, other: &Field) -> bool {
        std::ptr::eq(self, other) || self.modulus == other.modulus
    }

    /// Reduce an arbitrary value into `[0, p)`.
    pub(crate) fn reduce(&self, value: BigUint) -> BigUint {
        value % &self.modulus
    }

    /// `(a + b) mod p` for operands already in `[0, p)`.
    pub(crate) fn add_raw(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let sum = a + b;
        if sum >= self.modulus {
            sum - &self.modulus
        } else {
            sum
        }
    }

    /// `(a − b) mod p` for operands already in `[0, p)`.
    pub(crate) fn sub_raw(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a >= b {
            a - b
        } else {
            &self.modulus - b + a
        }
    }

    /// `(−a) mod p` for an operand already in `[0, p)`.
    pub(crate) fn neg_raw(&self, a: &BigUint) -> BigUint {
        if a.is_zero() {
            BigUint::zero()
        } else {
            &self.modulus - a
        }
    }

    /// `(a · b) mod p` — full multiply followed by reduction.
    pub(crate) fn mul_raw(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// `a⁻¹ mod p` via the extended Euclidean algorithm.
    ///
    /// Fails with [`Error::NotInvertible`] iff `a ≡ 0` (or, for a composite
    /// modulus, when `gcd(a, p) ≠ 1`).
    pub(crate) fn invert_raw(&self, a: &BigUint) -> Result<BigUint> {
        if a.is_zero() {
            return Err(Error::NotInvertible);
        }
        a.modinv(&self.modulus).ok_or(Error::NotInvertible)
    }

    /// Montgomery reduction: `REDC(t) = t · R⁻¹ mod p` for `t < R·p`.
    pub(crate) fn mont_reduce(&self, t: BigUint) -> BigUint {
        let m = ((&t & &self.r_mask) * &self.neg_inv) & &self.r_mask;
        let u = (t + m * &self.modulus) >> MONT_BITS;
        if u >= self.modulus {
            u - &self.modulus
        } else {
            u
        }
    }

    /// Montgomery-domain product: `REDC(a · b)`.
    pub(crate) fn mont_mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.mont_reduce(a * b)
    }

    /// Convert a canonical residue into the Montgomery domain.
    pub(crate) fn to_mont(&self, value: &BigUint) -> BigUint {
        self.mont_mul(value, &self.r2)
    }

    /// Convert a Montgomery-domain value back to its canonical residue.
    pub(crate) fn from_mont(&self, value: &BigUint) -> BigUint {
        self.mont_reduce(value.clone())
    }

    /// Modular square root of a canonical residue, if one exists.
    ///
    /// Applies Euler's criterion first; for `p ≡ 3 (mod 4)` the root is a
    /// single exponentiation, otherwise the general Tonelli–Shanks loop
    /// runs. Either square root of the residue may be returned.
    pub(crate) fn sqrt_raw(&self, a: &BigUint) -> Option<BigUint> {
        if a.is_zero() {
            return Some(BigUint::zero());
        }
        let one = BigUint::one();
        let p = &self.modulus;
        let legendre_exp: BigUint = (p - &one) >> 1u32;
        if a.modpow(&legendre_exp, p) != one {
            return None;
        }

        if (p % 4u32) == BigUint::from(3u32) {
            let exp: BigUint = (p + &one) >> 2u32;
            return Some(a.modpow(&exp, p));
        }

        // Tonelli–Shanks: p − 1 = q · 2^s with q odd.
        let mut q: BigUint = p - &one;
        let mut s = 0u64;
        while !q.bit(0) {
            q >>= 1u32;
            s += 1;
        }

        // Any quadratic non-residue serves as the generator; trial 2, 3, …
        let mut z = BigUint::from(2u32);
        while z.modpow(&legendre_exp, p) == one {
            z += 1u32;
        }

        let mut c = z.modpow(&q, p);
        let mut t = a.modpow(&q, p);
        let mut r = a.modpow(&((&q + &one) >> 1u32), p);
        let mut m = s;

        while t != one {
            // Least i with t^(2^i) = 1.
            let mut i = 1u64;
            let mut t2i = (&t * &t) % p;
            while i < m {
                if t2i == one {
                    break;
                }
                t2i = (&t2i * &t2i) % p;
                i += 1;
            }
            if i == m {
                return None;
            }

            let mut b = c.clone();
            for _ in 0..(m - i - 1) {
                b = (&b * &b) % p;
            }

            r = (&r * &b) % p;
            let b2 = (&b * &b) % p;
            t = (&t * &b2) % p;
            c = b2;
            m = i;
        }

        Some(r)
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.same_field(other)
    }
}

impl Eq for Field {}
