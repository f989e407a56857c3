//! Curve parameter sets as pure data.
//!
//! Each module holds one published parameter set — field prime, curve
//! coefficients, generator coordinates, and group order — as big-endian hex
//! string constants. No behavior lives here; `ng-ec` binds these values
//! into working `Field`/`Curve` instances.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod p256;
pub mod secp256k1;
