//! Jacobian projective point representation

use std::sync::Arc;

use ng_field::{Field, FieldValue};

/// A point in Jacobian projective coordinates `(X, Y, Z)`.
///
/// Represents the affine point `(X/Z², Y/Z³)`; `Z = 0` denotes the point at
/// infinity. The scaled layout lets addition and doubling defer the field
/// inversion to a single [`crate::Curve::to_affine`] at the end of a
/// computation.
#[derive(Debug, Clone)]
pub struct JacobianPoint<V: FieldValue> {
    x: V,
    y: V,
    z: V,
}

impl<V: FieldValue> JacobianPoint<V> {
    /// A point from raw projective coordinates.
    pub fn new(x: V, y: V, z: V) -> Self {
        JacobianPoint { x, y, z }
    }

    /// The point at infinity, `(0 : 1 : 0)`.
    pub fn infinity(field: &Arc<Field>) -> Self {
        JacobianPoint {
            x: V::zero(field),
            y: V::one(field),
            z: V::zero(field),
        }
    }

    /// Whether this is the point at infinity (`Z = 0`).
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// The projective X coordinate.
    pub fn x(&self) -> &V {
        &self.x
    }

    /// The projective Y coordinate.
    pub fn y(&self) -> &V {
        &self.y
    }

    /// The projective Z coordinate.
    pub fn z(&self) -> &V {
        &self.z
    }

    /// Deconstruct into `(X, Y, Z)` parts.
    pub fn into_parts(self) -> (V, V, V) {
        (self.x, self.y, self.z)
    }
}

/// Projective equality: `(X₁, Y₁, Z₁) = (X₂, Y₂, Z₂)` iff they project to
/// the same affine point, i.e. `X₁Z₂² = X₂Z₁²` and `Y₁Z₂³ = Y₂Z₁³`.
impl<V: FieldValue> PartialEq for JacobianPoint<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }
        let cross = || -> ng_field::Result<bool> {
            let z1s = self.z.square();
            let z2s = other.z.square();
            let x_eq = self.x.mul(&z2s)? == other.x.mul(&z1s)?;
            let y_eq =
                self.y.mul(&z2s)?.mul(&other.z)? == other.y.mul(&z1s)?.mul(&self.z)?;
            Ok(x_eq && y_eq)
        };
        cross().unwrap_or(false)
    }
}
