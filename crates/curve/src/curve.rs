//! Curve parameters and the group law

use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

use ng_field::{Field, FieldValue, FIELD_ELEMENT_SIZE};

use crate::affine::AffinePoint;
use crate::error::{Error, Result};
use crate::jacobian::JacobianPoint;

/// Size of an uncompressed point encoding: `0x04 ‖ x ‖ y`.
pub const POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * FIELD_ELEMENT_SIZE;

/// Size of a compressed point encoding: `0x02/0x03 ‖ x`.
pub const POINT_COMPRESSED_SIZE: usize = 1 + FIELD_ELEMENT_SIZE;

/// Parameters of a short-Weierstrass curve `y² = x³ + a·x + b` over `F_p`,
/// together with a designated generator and the group order `n`.
///
/// The struct is immutable after construction and is the sole owner of the
/// group law: points are plain coordinate bundles, and every operation on
/// them goes through a `Curve` method. The type is generic over the field
/// element flavor, so the same formulas run over canonical residues or
/// Montgomery-domain residues.
///
/// Non-singularity (`4a³ + 27b² ≠ 0`) and the correctness of the order are
/// trusted properties of the parameter set; only the generator is checked
/// against the curve equation at construction.
#[derive(Debug, Clone)]
pub struct Curve<V: FieldValue> {
    field: Arc<Field>,
    a: V,
    b: V,
    gx: V,
    gy: V,
    order: BigUint,
}

impl<V: FieldValue> Curve<V> {
    /// Assemble a curve from its parameters.
    ///
    /// Fails with [`Error::InvalidPoint`] if the generator does not satisfy
    /// the curve equation, and with a field-mismatch error if any parameter
    /// belongs to a different field than `field`.
    pub fn new(field: Arc<Field>, a: V, b: V, gx: V, gy: V, order: BigUint) -> Result<Self> {
        for value in [&a, &b, &gx, &gy] {
            if !value.field().same_field(&field) {
                return Err(Error::Field(ng_field::Error::FieldMismatch {
                    operation: "curve construction",
                }));
            }
        }
        let curve = Curve {
            field,
            a,
            b,
            gx,
            gy,
            order,
        };
        if !curve.is_on_curve(&curve.generator())? {
            return Err(Error::InvalidPoint {
                reason: "generator does not satisfy the curve equation",
            });
        }
        Ok(curve)
    }

    /// Handle of the underlying field.
    pub fn field(&self) -> &Arc<Field> {
        &self.field
    }

    /// The `a` coefficient.
    pub fn a(&self) -> &V {
        &self.a
    }

    /// The `b` coefficient.
    pub fn b(&self) -> &V {
        &self.b
    }

    /// The generator point in affine coordinates.
    pub fn generator(&self) -> AffinePoint<V> {
        AffinePoint::new(self.gx.clone(), self.gy.clone())
    }

    /// The group order `n` of the cyclic group generated by the generator.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Whether an affine point satisfies `y² = x³ + a·x + b`.
    ///
    /// The point at infinity is on every curve. The check runs in whichever
    /// arithmetic domain `V` uses: every term of the equation carries the
    /// same domain factor, so no conversion is needed.
    pub fn is_on_curve(&self, point: &AffinePoint<V>) -> Result<bool> {
        let (x, y) = match point.coordinates() {
            None => return Ok(true),
            Some(coords) => coords,
        };
        let lhs = y.square();
        let x_cubed = x.square().mul(x)?;
        let rhs = x_cubed.add(&self.a.mul(x)?)?.add(&self.b)?;
        Ok(lhs == rhs)
    }

    /// Whether a Jacobian point satisfies the projected curve equation
    /// `Y² = X³ + a·X·Z⁴ + b·Z⁶`.
    pub fn is_on_curve_jacobian(&self, point: &JacobianPoint<V>) -> Result<bool> {
        if point.is_infinity() {
            return Ok(true);
        }
        let z2 = point.z().square();
        let z4 = z2.square();
        let z6 = z4.mul(&z2)?;
        let lhs = point.y().square();
        let rhs = point
            .x()
            .square()
            .mul(point.x())?
            .add(&self.a.mul(point.x())?.mul(&z4)?)?
            .add(&self.b.mul(&z6)?)?;
        Ok(lhs == rhs)
    }

    /// Lift an affine point into Jacobian coordinates (`Z = 1`).
    pub fn from_affine(&self, point: &AffinePoint<V>) -> JacobianPoint<V> {
        match point.coordinates() {
            None => JacobianPoint::infinity(&self.field),
            Some((x, y)) => JacobianPoint::new(x.clone(), y.clone(), V::one(&self.field)),
        }
    }

    /// Project a Jacobian point back to affine coordinates.
    ///
    /// Costs one field inversion; the point at infinity maps to the affine
    /// identity marker.
    pub fn to_affine(&self, point: &JacobianPoint<V>) -> Result<AffinePoint<V>> {
        if point.is_infinity() {
            return Ok(AffinePoint::infinity());
        }
        let z_inv = point.z().invert()?;
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(&z_inv)?;
        Ok(AffinePoint::new(
            point.x().mul(&z_inv2)?,
            point.y().mul(&z_inv3)?,
        ))
    }

    /// Point doubling in Jacobian coordinates.
    ///
    /// `2·∞ = ∞`, and a point with `Y = 0` is its own inverse, so it also
    /// doubles to infinity.
    pub fn double(&self, point: &JacobianPoint<V>) -> Result<JacobianPoint<V>> {
        if point.is_infinity() || point.y().is_zero() {
            return Ok(JacobianPoint::infinity(&self.field));
        }

        // S = 4·X·Y²
        let y2 = point.y().square();
        let s = point.x().mul(&y2)?.mul_small(4);

        // M = 3·X² + a·Z⁴
        let z4 = point.z().square().square();
        let m = point.x().square().mul_small(3).add(&self.a.mul(&z4)?)?;

        // X' = M² − 2·S
        let x3 = m.square().sub(&s.mul_small(2))?;

        // Y' = M·(S − X') − 8·Y⁴
        let y3 = m.mul(&s.sub(&x3)?)?.sub(&y2.square().mul_small(8))?;

        // Z' = 2·Y·Z
        let z3 = point.y().mul(point.z())?.mul_small(2);

        Ok(JacobianPoint::new(x3, y3, z3))
    }

    /// General point addition in Jacobian coordinates.
    ///
    /// Handles the degenerate inputs explicitly: either operand at
    /// infinity, equal points (delegates to doubling), and opposite points
    /// (yields infinity).
    pub fn add(&self, p: &JacobianPoint<V>, q: &JacobianPoint<V>) -> Result<JacobianPoint<V>> {
        if p.is_infinity() {
            return Ok(q.clone());
        }
        if q.is_infinity() {
            return Ok(p.clone());
        }

        let z1s = p.z().square();
        let z2s = q.z().square();

        // U1 = X1·Z2², U2 = X2·Z1²
        let u1 = p.x().mul(&z2s)?;
        let u2 = q.x().mul(&z1s)?;

        // S1 = Y1·Z2³, S2 = Y2·Z1³
        let s1 = p.y().mul(&z2s)?.mul(q.z())?;
        let s2 = q.y().mul(&z1s)?.mul(p.z())?;

        if u1 == u2 {
            if s1 != s2 {
                // P = −Q
                return Ok(JacobianPoint::infinity(&self.field));
            }
            return self.double(p);
        }

        let h = u2.sub(&u1)?;
        let r = s2.sub(&s1)?;
        let h2 = h.square();
        let h3 = h2.mul(&h)?;
        let v = u1.mul(&h2)?;

        // X3 = R² − H³ − 2·U1·H²
        let x3 = r.square().sub(&h3)?.sub(&v.mul_small(2))?;

        // Y3 = R·(U1·H² − X3) − S1·H³
        let y3 = r.mul(&v.sub(&x3)?)?.sub(&s1.mul(&h3)?)?;

        // Z3 = H·Z1·Z2
        let z3 = p.z().mul(q.z())?.mul(&h)?;

        Ok(JacobianPoint::new(x3, y3, z3))
    }

    /// Scalar multiplication `k·P` by double-and-add.
    ///
    /// Bits of `k` are consumed least-significant first; `k = 0` yields the
    /// point at infinity. The scan order is fixed for reproducibility; the
    /// loop is not constant-time.
    pub fn scalar_mul(&self, point: &JacobianPoint<V>, k: &BigUint) -> Result<JacobianPoint<V>> {
        let mut acc = JacobianPoint::infinity(&self.field);
        let mut addend = point.clone();
        for i in 0..k.bits() {
            if k.bit(i) {
                acc = self.add(&acc, &addend)?;
            }
            addend = self.double(&addend)?;
        }
        Ok(acc)
    }

    /// Scalar multiplication on an affine point, returning an affine result.
    pub fn scalar_mul_affine(&self, point: &AffinePoint<V>, k: &BigUint) -> Result<AffinePoint<V>> {
        let product = self.scalar_mul(&self.from_affine(point), k)?;
        self.to_affine(&product)
    }

    /// Affine point addition, routed through Jacobian coordinates.
    pub fn add_affine(&self, p: &AffinePoint<V>, q: &AffinePoint<V>) -> Result<AffinePoint<V>> {
        let sum = self.add(&self.from_affine(p), &self.from_affine(q))?;
        self.to_affine(&sum)
    }

    /// Affine point doubling via the tangent slope `λ = (3x² + a) / 2y`.
    pub fn double_affine(&self, point: &AffinePoint<V>) -> Result<AffinePoint<V>> {
        let (x, y) = match point.coordinates() {
            None => return Ok(AffinePoint::infinity()),
            Some(coords) => coords,
        };
        if y.is_zero() {
            return Ok(AffinePoint::infinity());
        }

        let numerator = x.square().mul_small(3).add(&self.a)?;
        let lambda = numerator.mul(&y.mul_small(2).invert()?)?;

        // x₂ = λ² − 2·x₁, y₂ = λ·(x₁ − x₂) − y₁
        let x2 = lambda.square().sub(&x.mul_small(2))?;
        let y2 = lambda.mul(&x.sub(&x2)?)?.sub(y)?;

        Ok(AffinePoint::new(x2, y2))
    }

    /// The inverse `−P = (x, −y)` of an affine point.
    pub fn negate(&self, point: &AffinePoint<V>) -> AffinePoint<V> {
        match point.coordinates() {
            None => AffinePoint::infinity(),
            Some((x, y)) => AffinePoint::new(x.clone(), y.neg()),
        }
    }

    /// Sample a nonzero scalar below the group order.
    ///
    /// 32 random bytes are drawn and reduced modulo `n`; zero is rejected
    /// and resampled.
    pub fn random_scalar<R: RngCore + CryptoRng>(&self, rng: &mut R) -> BigUint {
        loop {
            let mut bytes = [0u8; FIELD_ELEMENT_SIZE];
            rng.fill_bytes(&mut bytes);
            let k = BigUint::from_bytes_be(&bytes) % &self.order;
            if !k.is_zero() {
                return k;
            }
        }
    }

    /// Serialize an affine point in uncompressed form: `0x04 ‖ x ‖ y`.
    ///
    /// The point at infinity encodes as the all-zero buffer.
    pub fn encode_point(&self, point: &AffinePoint<V>) -> [u8; POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; POINT_UNCOMPRESSED_SIZE];
        let (x, y) = match point.coordinates() {
            None => return out,
            Some(coords) => coords,
        };
        out[0] = 0x04;
        out[1..1 + FIELD_ELEMENT_SIZE].copy_from_slice(&x.canonical_bytes());
        out[1 + FIELD_ELEMENT_SIZE..].copy_from_slice(&y.canonical_bytes());
        out
    }

    /// Deserialize an uncompressed point, validating it against the curve.
    ///
    /// Errors: [`Error::Length`] for a wrong-size buffer, an
    /// `OutOfRange` field error for a coordinate `≥ p`, and
    /// [`Error::InvalidPoint`] for a bad prefix or a point off the curve.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<AffinePoint<V>> {
        if bytes.len() != POINT_UNCOMPRESSED_SIZE {
            return Err(Error::Length {
                context: "uncompressed point",
                expected: POINT_UNCOMPRESSED_SIZE,
                actual: bytes.len(),
            });
        }
        if bytes.iter().all(|&b| b == 0) {
            return Ok(AffinePoint::infinity());
        }
        if bytes[0] != 0x04 {
            return Err(Error::InvalidPoint {
                reason: "invalid uncompressed point prefix (expected 0x04)",
            });
        }
        let x = V::decode(&self.field, &bytes[1..1 + FIELD_ELEMENT_SIZE])?;
        let y = V::decode(&self.field, &bytes[1 + FIELD_ELEMENT_SIZE..])?;
        let point = AffinePoint::new(x, y);
        if !self.is_on_curve(&point)? {
            return Err(Error::InvalidPoint {
                reason: "point coordinates do not satisfy the curve equation",
            });
        }
        Ok(point)
    }

    /// Serialize an affine point in compressed form: `0x02/0x03 ‖ x`, the
    /// tag carrying the parity of `y`.
    ///
    /// The point at infinity encodes as the all-zero buffer.
    pub fn encode_point_compressed(&self, point: &AffinePoint<V>) -> [u8; POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; POINT_COMPRESSED_SIZE];
        let (x, y) = match point.coordinates() {
            None => return out,
            Some(coords) => coords,
        };
        out[0] = if y.is_odd() { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&x.canonical_bytes());
        out
    }

    /// Deserialize a compressed point, recovering `y` by a field square
    /// root and the parity tag.
    pub fn decode_point_compressed(&self, bytes: &[u8]) -> Result<AffinePoint<V>> {
        if bytes.len() != POINT_COMPRESSED_SIZE {
            return Err(Error::Length {
                context: "compressed point",
                expected: POINT_COMPRESSED_SIZE,
                actual: bytes.len(),
            });
        }
        if bytes.iter().all(|&b| b == 0) {
            return Ok(AffinePoint::infinity());
        }
        let tag = bytes[0];
        if tag != 0x02 && tag != 0x03 {
            return Err(Error::InvalidPoint {
                reason: "invalid compressed point prefix",
            });
        }
        let x = V::decode(&self.field, &bytes[1..])?;

        // y² = x³ + a·x + b
        let rhs = x
            .square()
            .mul(&x)?
            .add(&self.a.mul(&x)?)?
            .add(&self.b)?;
        let y = rhs.sqrt().ok_or(Error::InvalidPoint {
            reason: "x-coordinate has no square root on the curve",
        })?;
        let y = if y.is_odd() == (tag == 0x03) { y } else { y.neg() };

        Ok(AffinePoint::new(x, y))
    }
}
