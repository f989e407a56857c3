//! Montgomery-domain field elements

use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::element::FieldElement;
use crate::error::{Error, Result};
use crate::field::Field;

/// A residue stored as `v·R mod p` with `R = 2^256`.
///
/// Multiplication in this domain is a multiply followed by Montgomery
/// reduction, trading a one-off conversion cost for cheaper repeated
/// products. The type is deliberately distinct from [`FieldElement`]:
/// mixing the two domains without an explicit conversion is a programming
/// error the type system rules out.
#[derive(Debug, Clone)]
pub struct MontgomeryElement {
    /// Montgomery-domain representation, in `[0, p)`.
    value: BigUint,
    field: Arc<Field>,
}

impl MontgomeryElement {
    /// Build an element from an arbitrary unsigned integer: the value is
    /// reduced modulo `p` and carried into the Montgomery domain.
    pub fn new(field: &Arc<Field>, value: BigUint) -> Self {
        let reduced = field.reduce(value);
        MontgomeryElement {
            value: field.to_mont(&reduced),
            field: field.clone(),
        }
    }

    /// The additive identity.
    pub fn zero(field: &Arc<Field>) -> Self {
        MontgomeryElement {
            value: BigUint::zero(),
            field: field.clone(),
        }
    }

    /// The multiplicative identity, `R mod p`.
    pub fn one(field: &Arc<Field>) -> Self {
        MontgomeryElement {
            value: field.mont_one().clone(),
            field: field.clone(),
        }
    }

    /// Convert a canonical element into the Montgomery domain.
    pub fn from_element(element: &FieldElement) -> Self {
        MontgomeryElement {
            value: element.field().to_mont(element.value()),
            field: element.field().clone(),
        }
    }

    /// Convert back to the canonical representation.
    pub fn to_element(&self) -> FieldElement {
        FieldElement::new(&self.field, self.field.from_mont(&self.value))
    }

    /// The canonical residue this element represents.
    pub fn canonical(&self) -> BigUint {
        self.field.from_mont(&self.value)
    }

    /// The raw Montgomery-domain value.
    pub fn raw_value(&self) -> &BigUint {
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

    /// `(self + other) mod p` — addition is domain-agnostic.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_field(other, "add")?;
        Ok(MontgomeryElement {
            value: self.field.add_raw(&self.value, &other.value),
            field: self.field.clone(),
        })
    }

    /// `(self − other) mod p`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_field(other, "sub")?;
        Ok(MontgomeryElement {
            value: self.field.sub_raw(&self.value, &other.value),
            field: self.field.clone(),
        })
    }

    /// `(−self) mod p`.
    pub fn neg(&self) -> Self {
        MontgomeryElement {
            value: self.field.neg_raw(&self.value),
            field: self.field.clone(),
        }
    }

    /// Montgomery product: multiply, then reduce by `R`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_field(other, "mul")?;
        Ok(MontgomeryElement {
            value: self.field.mont_mul(&self.value, &other.value),
            field: self.field.clone(),
        })
    }

    /// `self²` in the Montgomery domain.
    pub fn square(&self) -> Self {
        MontgomeryElement {
            value: self.field.mont_mul(&self.value, &self.value),
            field: self.field.clone(),
        }
    }

    /// `2·self mod p`.
    pub fn double(&self) -> Self {
        MontgomeryElement {
            value: self.field.add_raw(&self.value, &self.value),
            field: self.field.clone(),
        }
    }

    /// `k·self` for a small scalar factor; scaling is linear, so the result
    /// stays in the Montgomery domain.
    pub fn mul_small(&self, k: u32) -> Self {
        MontgomeryElement {
            value: self.field.reduce(&self.value * k),
            field: self.field.clone(),
        }
    }

    /// `self⁻¹`; fails with [`Error::NotInvertible`] iff `self ≡ 0`.
    pub fn invert(&self) -> Result<Self> {
        let canonical = self.canonical();
        let inv = self.field.invert_raw(&canonical)?;
        Ok(MontgomeryElement {
            value: self.field.to_mont(&inv),
            field: self.field.clone(),
        })
    }

    /// A square root of the represented residue, if one exists.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.field.sqrt_raw(&self.canonical())?;
        Some(MontgomeryElement {
            value: self.field.to_mont(&root),
            field: self.field.clone(),
        })
    }

    /// Whether the element is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Parity of the canonical residue.
    pub fn is_odd(&self) -> bool {
        self.canonical().bit(0)
    }
}

impl PartialEq for MontgomeryElement {
    fn eq(&self, other: &Self) -> bool {
        // Montgomery values are reduced, so equal residues have equal
        // representations.
        self.field.same_field(&other.field) && self.value == other.value
    }
}

impl Eq for MontgomeryElement {}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(p: u64) -> Arc<Field> {
        Field::new(BigUint::from(p)).unwrap()
    }

    fn elem(f: &Arc<Field>, v: u64) -> MontgomeryElement {
        MontgomeryElement::new(f, BigUint::from(v))
    }

    #[test]
    fn smoky_mod_19() {
        let f = field(19);
        let a = elem(&f, 6);
        let b = elem(&f, 16);

        assert_eq!(a.add(&b).unwrap(), elem(&f, 3));
        assert_eq!(a.sub(&b).unwrap(), elem(&f, 9));
        assert_eq!(b.sub(&a).unwrap(), elem(&f, 10));
        assert_eq!(a.neg(), elem(&f, 13));
        assert_eq!(a.mul(&b).unwrap(), elem(&f, 1));
        assert_eq!(b.mul(&a).unwrap(), elem(&f, 1));
    }

    #[test]
    fn conversions_are_mutually_inverse() {
        let f = field(1125899839733759);
        for v in [0u64, 1, 2, 6, 1099511644160, 1125899839733758] {
            let e = FieldElement::from_u64(&f, v);
            let m = e.to_montgomery();
            assert_eq!(m.to_element(), e);
            assert_eq!(m.canonical(), *e.value());
            // to_mont(from_mont(to_mont(x))) = to_mont(x)
            assert_eq!(m.to_element().to_montgomery(), m);
        }
    }

    #[test]
    fn one_is_r_mod_p() {
        let f = field(19);
        assert_eq!(MontgomeryElement::one(&f).canonical(), BigUint::from(1u32));
        assert_eq!(MontgomeryElement::one(&f).raw_value(), f.mont_one());
    }

    #[test]
    fn invert_in_domain() {
        let f = field(19);
        for v in 1u64..19 {
            let m = elem(&f, v);
            assert_eq!(m.mul(&m.invert().unwrap()).unwrap(), elem(&f, 1));
        }
        assert_eq!(elem(&f, 0).invert(), Err(Error::NotInvertible));
    }

    #[test]
    fn mul_small_stays_in_domain() {
        let f = field(19);
        let m = elem(&f, 6);
        assert_eq!(m.mul_small(2), elem(&f, 12));
        assert_eq!(m.mul_small(4).canonical(), BigUint::from(5u32));
    }

    #[test]
    fn mismatched_fields_are_rejected() {
        let f = field(19);
        let g = field(23);
        assert_eq!(
            elem(&f, 2).mul(&elem(&g, 2)).unwrap_err(),
            Error::FieldMismatch { operation: "mul" }
        );
    }
}
