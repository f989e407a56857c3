//! Canonical-domain field elements

use std::cmp::Ordering;
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use crate::field::{Field, FIELD_ELEMENT_SIZE};
use crate::mont::MontgomeryElement;

/// A residue `0 ≤ v < p` in canonical representation, tagged with its field.
///
/// Elements are plain values: every operation constructs a new element and
/// the shared [`Field`] handle is never mutated. Binary operations verify
/// both operands belong to the same field and fail with
/// [`Error::FieldMismatch`] otherwise.
#[derive(Debug, Clone)]
pub struct FieldElement {
    value: BigUint,
    field: Arc<Field>,
}

impl FieldElement {
    /// Build an element from an arbitrary unsigned integer, reducing it
    /// modulo `p`. Reduction never truncates: the full value participates.
    pub fn new(field: &Arc<Field>, value: BigUint) -> Self {
        FieldElement {
            value: field.reduce(value),
            field: field.clone(),
        }
    }

    /// The additive identity element.
    pub fn zero(field: &Arc<Field>) -> Self {
        FieldElement {
            value: BigUint::zero(),
            field: field.clone(),
        }
    }

    /// The multiplicative identity element.
    pub fn one(field: &Arc<Field>) -> Self {
        // Any accepted modulus exceeds one, so no reduction is needed.
        FieldElement {
            value: BigUint::one(),
            field: field.clone(),
        }
    }

    /// Convenience constructor from a small integer, reduced modulo `p`.
    pub fn from_u64(field: &Arc<Field>, value: u64) -> Self {
        Self::new(field, BigUint::from(value))
    }

    /// Decode a canonical fixed-width big-endian byte string.
    ///
    /// Exactly [`FIELD_ELEMENT_SIZE`] bytes are required; values `≥ p` fail
    /// with [`Error::OutOfRange`] rather than being reduced.
    pub fn from_bytes(field: &Arc<Field>, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != FIELD_ELEMENT_SIZE {
            return Err(Error::Length {
                context: "field element",
                expected: FIELD_ELEMENT_SIZE,
                actual: bytes.len(),
            });
        }
        let value = BigUint::from_bytes_be(bytes);
        if value >= *field.modulus() {
            return Err(Error::OutOfRange {
                context: "field element",
            });
        }
        Ok(FieldElement {
            value,
            field: field.clone(),
        })
    }

    /// Encode the canonical residue as fixed-width big-endian bytes.
    pub fn to_bytes(&self) -> [u8; FIELD_ELEMENT_SIZE] {
        let mut out = [0u8; FIELD_ELEMENT_SIZE];
        let raw = self.value.to_bytes_be();
        out[FIELD_ELEMENT_SIZE - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Decode an element from a big-endian hex string.
    ///
    /// The string may be any even length up to 64 digits; like
    /// [`FieldElement::from_bytes`], values `≥ p` are rejected.
    pub fn from_hex(field: &Arc<Field>, s: &str) -> Result<Self> {
        let raw = hex::decode(s).map_err(|_| Error::OutOfRange {
            context: "hex string",
        })?;
        if raw.len() > FIELD_ELEMENT_SIZE {
            return Err(Error::Length {
                context: "hex field element",
                expected: FIELD_ELEMENT_SIZE,
                actual: raw.len(),
            });
        }
        let value = BigUint::from_bytes_be(&raw);
        if value >= *field.modulus() {
            return Err(Error::OutOfRange {
                context: "field element",
            });
        }
        Ok(FieldElement {
            value,
            field: field.clone(),
        })
    }

    /// Encode the canonical residue as a fixed-width lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Sample a field element from `rng`.
    ///
    /// 32 random bytes are drawn and reduced modulo `p`.
    pub fn random<R: RngCore + CryptoRng>(field: &Arc<Field>, rng: &mut R) -> Self {
        let mut bytes = [0u8; FIELD_ELEMENT_SIZE];
        rng.fill_bytes(&mut bytes);
        Self::new(field, BigUint::from_bytes_be(&bytes))
    }

    /// The canonical residue value.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Handle of the owning field.
    pub fn field(&self) -> &Arc<Field> {
        &self.field
    }

    fn check_field(&self, other: &Self, operation: &'static str) -> Result<()> {
        if !self.field.same_field(&other.field) {
            return Err(Error::FieldMismatch { operation });
        }
        Ok(())
    }

    /// `(self + other) mod p`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_field(other, "add")?;
        Ok(FieldElement {
            value: self.field.add_raw(&self.value, &other.value),
            field: self.field.clone(),
        })
    }

    /// `(self − other) mod p`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_field(other, "sub")?;
        Ok(FieldElement {
            value: self.field.sub_raw(&self.value, &other.value),
            field: self.field.clone(),
        })
    }

    /// `(self · other) mod p` — full multiply, then reduce.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_field(other, "mul")?;
        Ok(FieldElement {
            value: self.field.mul_raw(&self.value, &other.value),
            field: self.field.clone(),
        })
    }

    /// `(−self) mod p`.
    pub fn neg(&self) -> Self {
        FieldElement {
            value: self.field.neg_raw(&self.value),
            field: self.field.clone(),
        }
    }

    /// `self² mod p`.
    pub fn square(&self) -> Self {
        FieldElement {
            value: self.field.mul_raw(&self.value, &self.value),
            field: self.field.clone(),
        }
    }

    /// `2·self mod p`.
    pub fn double(&self) -> Self {
        FieldElement {
            value: self.field.add_raw(&self.value, &self.value),
            field: self.field.clone(),
        }
    }

    /// `k·self mod p` for a small scalar factor.
    pub fn mul_small(&self, k: u32) -> Self {
        FieldElement {
            value: self.field.reduce(&self.value * k),
            field: self.field.clone(),
        }
    }

    /// `self^exp mod p` by square-and-multiply.
    pub fn pow(&self, exp: &BigUint) -> Self {
        FieldElement {
            value: self.value.modpow(exp, self.field.modulus()),
            field: self.field.clone(),
        }
    }

    /// `self⁻¹ mod p`; fails with [`Error::NotInvertible`] iff `self ≡ 0`.
    pub fn invert(&self) -> Result<Self> {
        Ok(FieldElement {
            value: self.field.invert_raw(&self.value)?,
            field: self.field.clone(),
        })
    }

    /// A square root of `self`, if `self` is a quadratic residue.
    pub fn sqrt(&self) -> Option<Self> {
        self.field.sqrt_raw(&self.value).map(|value| FieldElement {
            value,
            field: self.field.clone(),
        })
    }

    /// Whether the element is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Parity of the canonical residue (least-significant bit set).
    pub fn is_odd(&self) -> bool {
        self.value.bit(0)
    }

    /// Convert into the Montgomery domain.
    pub fn to_montgomery(&self) -> MontgomeryElement {
        MontgomeryElement::from_element(self)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.field.same_field(&other.field) && self.value == other.value
    }
}

impl Eq for FieldElement {}

/// Numeric ordering of canonical residues, defined only within one field.
///
/// This is a deterministic tie-break, not field semantics — a finite field
/// carries no intrinsic order. Elements of distinct fields are unordered.
impl PartialOrd for FieldElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.field.same_field(&other.field) {
            return None;
        }
        Some(self.value.cmp(&other.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(p: u64) -> Arc<Field> {
        Field::new(BigUint::from(p)).unwrap()
    }

    #[test]
    fn smoky_mod_19() {
        let f = field(19);
        let a = FieldElement::from_u64(&f, 6);
        let b = FieldElement::from_u64(&f, 16);

        assert_eq!(a.add(&b).unwrap(), FieldElement::from_u64(&f, 3));
        assert_eq!(b.add(&a).unwrap(), FieldElement::from_u64(&f, 3));
        assert_eq!(a.sub(&b).unwrap(), FieldElement::from_u64(&f, 9));
        assert_eq!(b.sub(&a).unwrap(), FieldElement::from_u64(&f, 10));
        assert_eq!(a.neg(), FieldElement::from_u64(&f, 13));
        assert_eq!(b.neg(), FieldElement::from_u64(&f, 3));
        assert_eq!(a.mul(&b).unwrap(), FieldElement::one(&f));
        assert_eq!(
            a.mul(&b.invert().unwrap()).unwrap(),
            FieldElement::from_u64(&f, 17)
        );
        assert_eq!(
            b.mul(&a.invert().unwrap()).unwrap(),
            FieldElement::from_u64(&f, 9)
        );
    }

    #[test]
    fn construction_reduces() {
        let f = field(19);
        let big = FieldElement::new(&f, BigUint::from(19u32 * 7 + 5));
        assert_eq!(big, FieldElement::from_u64(&f, 5));
    }

    #[test]
    fn mismatched_fields_are_rejected() {
        let f = field(19);
        let g = field(23);
        let a = FieldElement::from_u64(&f, 2);
        let b = FieldElement::from_u64(&g, 2);
        assert_eq!(
            a.add(&b).unwrap_err(),
            Error::FieldMismatch { operation: "add" }
        );
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn equal_moduli_interoperate() {
        // Distinct handles over the same modulus describe the same field.
        let f = field(19);
        let g = field(19);
        let a = FieldElement::from_u64(&f, 7);
        let b = FieldElement::from_u64(&g, 12);
        assert_eq!(a.add(&b).unwrap(), FieldElement::zero(&f));
    }

    #[test]
    fn bytes_round_trip_and_range_check() {
        let f = field(19);
        let a = FieldElement::from_u64(&f, 11);
        let bytes = a.to_bytes();
        assert_eq!(FieldElement::from_bytes(&f, &bytes).unwrap(), a);

        let mut p_bytes = [0u8; FIELD_ELEMENT_SIZE];
        p_bytes[FIELD_ELEMENT_SIZE - 1] = 19;
        assert_eq!(
            FieldElement::from_bytes(&f, &p_bytes).unwrap_err(),
            Error::OutOfRange {
                context: "field element"
            }
        );
        assert!(matches!(
            FieldElement::from_bytes(&f, &[0u8; 16]).unwrap_err(),
            Error::Length { .. }
        ));
    }

    #[test]
    fn hex_round_trip() {
        let f = field(1125899839733759);
        let a = FieldElement::from_u64(&f, 570768668753918);
        let parsed = FieldElement::from_hex(&f, &a.to_hex()).unwrap();
        assert_eq!(parsed, a);
        assert!(FieldElement::from_hex(&f, "zz").is_err());
    }

    #[test]
    fn random_elements_are_reduced() {
        use rand::rngs::OsRng;
        let f = field(19);
        for _ in 0..32 {
            let e = FieldElement::random(&f, &mut OsRng);
            assert!(e.value() < f.modulus());
        }
    }

    #[test]
    fn ordering_is_numeric() {
        let f = field(19);
        let small = FieldElement::from_u64(&f, 3);
        let large = FieldElement::from_u64(&f, 17);
        assert!(small < large);
    }
}
