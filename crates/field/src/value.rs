//! Capability interface shared by the two element flavors

use std::fmt::Debug;
use std::sync::Arc;

use num_bigint::BigUint;

use crate::element::FieldElement;
use crate::error::{Error, Result};
use crate::field::{Field, FIELD_ELEMENT_SIZE};
use crate::mont::MontgomeryElement;

/// Field arithmetic as a capability interface.
///
/// Curves and polynomials are generic over any value implementing this
/// trait, which lets the same group law run over canonical residues or
/// Montgomery-domain residues unchanged. The canonical-residue accessors
/// cross the domain boundary where needed (serialization, parity checks),
/// so implementations in a scaled domain pay the conversion only there.
pub trait FieldValue: Clone + PartialEq + Debug + Sized {
    /// Handle of the owning field.
    fn field(&self) -> &Arc<Field>;

    /// The additive identity of `field`.
    fn zero(field: &Arc<Field>) -> Self;

    /// The multiplicative identity of `field`.
    fn one(field: &Arc<Field>) -> Self;

    /// `(self + other) mod p`.
    fn add(&self, other: &Self) -> Result<Self>;

    /// `(self − other) mod p`.
    fn sub(&self, other: &Self) -> Result<Self>;

    /// `(self · other) mod p`.
    fn mul(&self, other: &Self) -> Result<Self>;

    /// `(−self) mod p`.
    fn neg(&self) -> Self;

    /// `self² mod p`.
    fn square(&self) -> Self;

    /// `k·self mod p` for a small scalar factor.
    fn mul_small(&self, k: u32) -> Self;

    /// `self⁻¹ mod p`; [`Error::NotInvertible`] iff `self ≡ 0`.
    fn invert(&self) -> Result<Self>;

    /// A square root of the represented residue, if one exists.
    fn sqrt(&self) -> Option<Self>;

    /// Whether the element is the additive identity.
    fn is_zero(&self) -> bool;

    /// Parity of the canonical residue.
    fn is_odd(&self) -> bool;

    /// The canonical residue in `[0, p)` this value represents.
    fn canonical(&self) -> BigUint;

    /// Build a value from a canonical residue, reducing modulo `p`.
    fn from_canonical(field: &Arc<Field>, value: BigUint) -> Self;

    /// Encode the canonical residue as fixed-width big-endian bytes.
    fn canonical_bytes(&self) -> [u8; FIELD_ELEMENT_SIZE] {
        let mut out = [0u8; FIELD_ELEMENT_SIZE];
        let raw = self.canonical().to_bytes_be();
        out[FIELD_ELEMENT_SIZE - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Strict fixed-width decode: exactly [`FIELD_ELEMENT_SIZE`] big-endian
    /// bytes, rejecting values `≥ p` with [`Error::OutOfRange`].
    fn decode(field: &Arc<Field>, bytes: &[u8]) -> Result<Self> {
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
        Ok(Self::from_canonical(field, value))
    }
}

impl FieldValue for FieldElement {
    fn field(&self) -> &Arc<Field> {
        self.field()
    }

    fn zero(field: &Arc<Field>) -> Self {
        FieldElement::zero(field)
    }

    fn one(field: &Arc<Field>) -> Self {
        FieldElement::one(field)
    }

    fn add(&self, other: &Self) -> Result<Self> {
        FieldElement::add(self, other)
    }

    fn sub(&self, other: &Self) -> Result<Self> {
        FieldElement::sub(self, other)
    }

    fn mul(&self, other: &Self) -> Result<Self> {
        FieldElement::mul(self, other)
    }

    fn neg(&self) -> Self {
        FieldElement::neg(self)
    }

    fn square(&self) -> Self {
        FieldElement::square(self)
    }

    fn mul_small(&self, k: u32) -> Self {
        FieldElement::mul_small(self, k)
    }

    fn invert(&self) -> Result<Self> {
        FieldElement::invert(self)
    }

    fn sqrt(&self) -> Option<Self> {
        FieldElement::sqrt(self)
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }

    fn is_odd(&self) -> bool {
        FieldElement::is_odd(self)
    }

    fn canonical(&self) -> BigUint {
        self.value().clone()
    }

    fn from_canonical(field: &Arc<Field>, value: BigUint) -> Self {
        FieldElement::new(field, value)
    }
}

impl FieldValue for MontgomeryElement {
    fn field(&self) -> &Arc<Field> {
        self.field()
    }

    fn zero(field: &Arc<Field>) -> Self {
        MontgomeryElement::zero(field)
    }

    fn one(field: &Arc<Field>) -> Self {
        MontgomeryElement::one(field)
    }

    fn add(&self, other: &Self) -> Result<Self> {
        MontgomeryElement::add(self, other)
    }

    fn sub(&self, other: &Self) -> Result<Self> {
        MontgomeryElement::sub(self, other)
    }

    fn mul(&self, other: &Self) -> Result<Self> {
        MontgomeryElement::mul(self, other)
    }

    fn neg(&self) -> Self {
        MontgomeryElement::neg(self)
    }

    fn square(&self) -> Self {
        MontgomeryElement::square(self)
    }

    fn mul_small(&self, k: u32) -> Self {
        MontgomeryElement::mul_small(self, k)
    }

    fn invert(&self) -> Result<Self> {
        MontgomeryElement::invert(self)
    }

    fn sqrt(&self) -> Option<Self> {
        MontgomeryElement::sqrt(self)
    }

    fn is_zero(&self) -> bool {
        MontgomeryElement::is_zero(self)
    }

    fn is_odd(&self) -> bool {
        MontgomeryElement::is_odd(self)
    }

    fn canonical(&self) -> BigUint {
        MontgomeryElement::canonical(self)
    }

    fn from_canonical(field: &Arc<Field>, value: BigUint) -> Self {
        MontgomeryElement::new(field, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(p: u64) -> Arc<Field> {
        Field::new(BigUint::from(p)).unwrap()
    }

    fn both_flavors_agree<V: FieldValue>(f: &Arc<Field>) {
        let a = V::from_canonical(f, BigUint::from(6u32));
        let b = V::from_canonical(f, BigUint::from(16u32));
        assert_eq!(a.add(&b).unwrap().canonical(), BigUint::from(3u32));
        assert_eq!(a.mul(&b).unwrap().canonical(), BigUint::from(1u32));
        assert_eq!(a.square().canonical(), BigUint::from(17u32));
        assert!(V::zero(f).is_zero());
        assert_eq!(V::one(f).canonical(), BigUint::from(1u32));
    }

    #[test]
    fn trait_ops_match_across_domains() {
        let f = field(19);
        both_flavors_agree::<FieldElement>(&f);
        both_flavors_agree::<MontgomeryElement>(&f);
    }

    #[test]
    fn decode_is_strict() {
        let f = field(19);
        let mut bytes = [0u8; FIELD_ELEMENT_SIZE];
        bytes[FIELD_ELEMENT_SIZE - 1] = 21;
        assert!(matches!(
            <FieldElement as FieldValue>::decode(&f, &bytes),
            Err(Error::OutOfRange { .. })
        ));
        bytes[FIELD_ELEMENT_SIZE - 1] = 18;
        let decoded = <MontgomeryElement as FieldValue>::decode(&f, &bytes).unwrap();
        assert_eq!(decoded.canonical(), BigUint::from(18u32));
        assert_eq!(decoded.canonical_bytes(), bytes);
    }
}
