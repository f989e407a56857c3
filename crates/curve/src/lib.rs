//! Short-Weierstrass elliptic-curve arithmetic over a prime field.
//!
//! A [`Curve`] bundles the parameters of `y² = x³ + a·x + b` — the
//! coefficients, the generator, and the group order — and implements the
//! group law over any field-value flavor (canonical or Montgomery domain)
//! through the [`ng_field::FieldValue`] capability interface.
//!
//! Points exist in two physical layouts for the same semantic entity:
//! [`AffinePoint`] carries `(x, y)` coordinates with a distinguished
//! infinity state, while [`JacobianPoint`] carries `(X, Y, Z)` with
//! `x = X/Z²`, `y = Y/Z³` so that chains of additions and doublings avoid
//! a field inversion per step. Converting Jacobian → affine costs one
//! inversion; affine → Jacobian is free (`Z = 1`).
//!
//! The curve is assumed non-singular (`4a³ + 27b² ≠ 0`); parameter sets are
//! validated at the source, not re-checked per operation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod affine;
mod curve;
mod error;
mod jacobian;

pub use affine::AffinePoint;
pub use curve::{Curve, POINT_COMPRESSED_SIZE, POINT_UNCOMPRESSED_SIZE};
pub use error::{Error, Result};
pub use jacobian::JacobianPoint;
