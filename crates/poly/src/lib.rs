//! Dense polynomials over prime-field values.
//!
//! A [`Polynomial`] stores its coefficients in ascending degree order over
//! any [`FieldValue`] flavor. Trailing zero coefficients are insignificant
//! and are stripped on construction; the zero polynomial is the empty
//! coefficient vector, and its degree is the `None` sentinel rather than an
//! error.
//!
//! Arithmetic is the usual ring structure (coefficient-wise addition and
//! subtraction, convolution product), evaluation uses Horner's scheme, and
//! [`Polynomial::interpolate`] builds the Lagrange interpolant through a set
//! of points. Mixing coefficients of different fields surfaces
//! [`ng_field::Error::FieldMismatch`] like any other field operation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::Arc;

use num_bigint::BigUint;

use ng_field::{Error, Field, FieldValue, Result};

/// A dense polynomial with coefficients in ascending degree order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<V: FieldValue> {
    coeffs: Vec<V>,
}

impl<V: FieldValue> Polynomial<V> {
    /// Build a polynomial from coefficients, lowest degree first.
    ///
    /// Trailing zero coefficients are stripped, and all coefficients must
    /// belong to one field.
    pub fn new(mut coeffs: Vec<V>) -> Result<Self> {
        if let Some((first, rest)) = coeffs.split_first() {
            for coeff in rest {
                if !coeff.field().same_field(first.field()) {
                    return Err(Error::FieldMismatch {
                        operation: "polynomial construction",
                    });
                }
            }
        }
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        Ok(Polynomial { coeffs })
    }

    /// Convenience constructor reducing raw integer coefficients into the
    /// field.
    pub fn from_integers(field: &Arc<Field>, values: Vec<BigUint>) -> Self {
        let mut coeffs: Vec<V> = values
            .into_iter()
            .map(|v| V::from_canonical(field, v))
            .collect();
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        Polynomial { coeffs }
    }

    /// The zero polynomial (additive identity of the ring).
    pub fn zero() -> Self {
        Polynomial { coeffs: Vec::new() }
    }

    /// The constant-one polynomial (multiplicative identity of the ring).
    pub fn one(field: &Arc<Field>) -> Self {
        Polynomial {
            coeffs: vec![V::one(field)],
        }
    }

    /// Coefficients in ascending degree order, trailing zeros stripped.
    pub fn coefficients(&self) -> &[V] {
        &self.coeffs
    }

    /// Degree of the polynomial; `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Whether this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluate at `x` by Horner's scheme, O(degree) multiplications.
    ///
    /// The zero polynomial evaluates to the zero of `x`'s field.
    pub fn evaluate(&self, x: &V) -> Result<V> {
        let mut iter = self.coeffs.iter().rev();
        let mut acc = match iter.next() {
            None => return Ok(V::zero(x.field())),
            Some(leading) => leading.clone(),
        };
        for coeff in iter {
            acc = acc.mul(x)?.add(coeff)?;
        }
        Ok(acc)
    }

    /// Coefficient-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            let coeff = match (self.coeffs.get(i), other.coeffs.get(i)) {
                (Some(a), Some(b)) => a.add(b)?,
                (Some(a), None) => a.clone(),
                (None, Some(b)) => b.clone(),
                (None, None) => unreachable!(),
            };
            result.push(coeff);
        }
        Polynomial::new(result)
    }

    /// Coefficient-wise difference.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            let coeff = match (self.coeffs.get(i), other.coeffs.get(i)) {
                (Some(a), Some(b)) => a.sub(b)?,
                (Some(a), None) => a.clone(),
                (None, Some(b)) => b.neg(),
                (None, None) => unreachable!(),
            };
            result.push(coeff);
        }
        Polynomial::new(result)
    }

    /// Convolution product.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }
        let field = self.coeffs[0].field().clone();
        let mut result = vec![V::zero(&field); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].add(&a.mul(b)?)?;
            }
        }
        Polynomial::new(result)
    }

    /// Scale every coefficient by a field value.
    pub fn scale(&self, factor: &V) -> Result<Self> {
        let mut result = Vec::with_capacity(self.coeffs.len());
        for coeff in &self.coeffs {
            result.push(coeff.mul(factor)?);
        }
        Polynomial::new(result)
    }

    /// Lagrange interpolation through `(x, y)` points with distinct
    /// abscissae.
    ///
    /// Duplicate abscissae make a basis denominator vanish and surface as
    /// [`Error::NotInvertible`].
    pub fn interpolate(points: &[(V, V)]) -> Result<Self> {
        let field = match points.first() {
            None => return Ok(Self::zero()),
            Some((x, _)) => x.field().clone(),
        };

        let mut acc = Self::zero();
        for (i, (xi, yi)) in points.iter().enumerate() {
            // ∏_{j≠i} (x − x_j)
            let mut basis = Self::one(&field);
            for (j, (xj, _)) in points.iter().enumerate() {
                if i == j {
                    continue;
                }
                let factor = Polynomial::new(vec![xj.neg(), V::one(&field)])?;
                basis = basis.mul(&factor)?;
            }
            let denominator = basis.evaluate(xi)?;
            let weight = yi.mul(&denominator.invert()?)?;
            acc = acc.add(&basis.scale(&weight)?)?;
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ng_field::{FieldElement, MontgomeryElement};

    const TOY_PRIME: u64 = 1125899839733759;

    fn field() -> Arc<Field> {
        Field::new(BigUint::from(TOY_PRIME)).unwrap()
    }

    fn poly(f: &Arc<Field>, coeffs: &[u64]) -> Polynomial<FieldElement> {
        Polynomial::from_integers(f, coeffs.iter().map(|&c| BigUint::from(c)).collect())
    }

    fn elem(f: &Arc<Field>, v: u64) -> FieldElement {
        FieldElement::from_u64(f, v)
    }

    #[test]
    fn mul() {
        let f = field();
        // (x + 5)(x + 1) = x² + 6x + 5
        let product = poly(&f, &[5, 1]).mul(&poly(&f, &[1, 1])).unwrap();
        assert_eq!(product, poly(&f, &[5, 6, 1]));
        assert_eq!(product.evaluate(&elem(&f, 1)).unwrap(), elem(&f, 12));
        assert_eq!(product.evaluate(&elem(&f, 2)).unwrap(), elem(&f, 21));
    }

    #[test]
    fn add_and_sub() {
        let f = field();
        // (x + 5) + (x + 1) = 2x + 6
        let sum = poly(&f, &[5, 1]).add(&poly(&f, &[1, 1])).unwrap();
        assert_eq!(sum.evaluate(&elem(&f, 1)).unwrap(), elem(&f, 8));
        assert_eq!(sum.evaluate(&elem(&f, 101)).unwrap(), elem(&f, 208));

        let diff = sum.sub(&poly(&f, &[1, 1])).unwrap();
        assert_eq!(diff, poly(&f, &[5, 1]));
    }

    #[test]
    fn normalization_strips_trailing_zeros() {
        let f = field();
        let padded = poly(&f, &[3, 2, 0, 0]);
        assert_eq!(padded, poly(&f, &[3, 2]));
        assert_eq!(padded.degree(), Some(1));

        // x − x = zero polynomial.
        let cancelled = poly(&f, &[0, 1]).sub(&poly(&f, &[0, 1])).unwrap();
        assert!(cancelled.is_zero());
        assert_eq!(cancelled.degree(), None);
    }

    #[test]
    fn zero_polynomial_sentinel() {
        let f = field();
        let zero = Polynomial::<FieldElement>::zero();
        assert_eq!(zero.degree(), None);
        assert_eq!(zero.evaluate(&elem(&f, 12345)).unwrap(), elem(&f, 0));
        assert_eq!(zero.mul(&poly(&f, &[1, 1])).unwrap(), zero);
    }

    #[test]
    fn horner_matches_direct_substitution() {
        let f = field();
        // 4x³ + 3x² + 2x + 1 at a handful of points.
        let cubic = poly(&f, &[1, 2, 3, 4]);
        for x in [0u64, 1, 2, 17, 90001] {
            let expected = (4 * x * x * x + 3 * x * x + 2 * x + 1) % TOY_PRIME;
            assert_eq!(
                cubic.evaluate(&elem(&f, x)).unwrap(),
                elem(&f, expected)
            );
        }
    }

    #[test]
    fn interpolation_hits_its_nodes() {
        let f = field();
        let single =
            Polynomial::<FieldElement>::interpolate(&[(elem(&f, 5), elem(&f, 2))]).unwrap();
        assert_eq!(single.evaluate(&elem(&f, 5)).unwrap(), elem(&f, 2));

        let points = [
            (elem(&f, 13), elem(&f, 5)),
            (elem(&f, 7), elem(&f, 2)),
            (elem(&f, 2), elem(&f, 11)),
        ];
        let interpolant = Polynomial::interpolate(&points).unwrap();
        assert_eq!(interpolant.degree(), Some(2));
        for (x, y) in &points {
            assert_eq!(interpolant.evaluate(x).unwrap(), y.clone());
        }
    }

    #[test]
    fn interpolation_rejects_duplicate_abscissae() {
        let f = field();
        let err = Polynomial::<FieldElement>::interpolate(&[
            (elem(&f, 7), elem(&f, 1)),
            (elem(&f, 7), elem(&f, 2)),
        ])
        .unwrap_err();
        assert_eq!(err, Error::NotInvertible);
    }

    #[test]
    fn mixed_fields_are_rejected() {
        let f = field();
        let g = Field::new(BigUint::from(19u32)).unwrap();
        let err = Polynomial::new(vec![elem(&f, 1), elem(&g, 1)]).unwrap_err();
        assert!(matches!(err, Error::FieldMismatch { .. }));

        let a = poly(&f, &[1, 2]);
        let b = Polynomial::new(vec![elem(&g, 3), elem(&g, 4)]).unwrap();
        assert!(matches!(
            a.add(&b).unwrap_err(),
            Error::FieldMismatch { .. }
        ));
    }

    #[test]
    fn montgomery_coefficients_work_too() {
        let f = field();
        let m = |v: u64| MontgomeryElement::new(&f, BigUint::from(v));
        let p = Polynomial::new(vec![m(5), m(1)]).unwrap();
        let q = Polynomial::new(vec![m(1), m(1)]).unwrap();
        let product = p.mul(&q).unwrap();
        assert_eq!(product.evaluate(&m(2)).unwrap(), m(21));
    }
}
