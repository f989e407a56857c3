//! Prime-field and elliptic-curve arithmetic with ready-made P-256 and
//! secp256k1 instances.
//!
//! This crate re-exports the workspace members and binds the published
//! parameter sets from `ng-params` into working curves:
//!
//! - [`p256`] — NIST P-256, with field arithmetic in the Montgomery domain.
//! - [`secp256k1`] — SEC 2 secp256k1, over canonical residues.
//!
//! ```
//! use ng_ec::secp256k1;
//! use num_bigint::BigUint;
//!
//! # fn main() -> Result<(), ng_ec::CurveError> {
//! let curve = secp256k1::curve()?;
//! let g = curve.from_affine(&curve.generator());
//! let doubled = curve.to_affine(&curve.scalar_mul(&g, &BigUint::from(2u32))?)?;
//! assert!(!doubled.is_infinity());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod p256;
pub mod secp256k1;

pub use ng_curve::{
    AffinePoint, Curve, Error as CurveError, JacobianPoint, POINT_COMPRESSED_SIZE,
    POINT_UNCOMPRESSED_SIZE,
};
pub use ng_field::{
    Error as FieldError, Field, FieldElement, FieldValue, MontgomeryElement, FIELD_ELEMENT_SIZE,
};
pub use ng_params as params;
pub use ng_poly::Polynomial;

use num_bigint::BigUint;

/// Parse a big-endian hex constant into an unsigned integer.
pub(crate) fn hex_uint(s: &str) -> ng_field::Result<BigUint> {
    BigUint::parse_bytes(s.as_bytes(), 16).ok_or(ng_field::Error::OutOfRange {
        context: "hex string",
    })
}
