//! Prime-field arithmetic over an arbitrary-precision unsigned integer backend.
//!
//! A [`Field`] is constructed once from an odd modulus and shared read-only
//! behind an [`std::sync::Arc`] handle. Residues come in two flavors kept
//! apart at the type level:
//!
//! - [`FieldElement`] — the canonical representation, a residue in `[0, p)`.
//! - [`MontgomeryElement`] — the same residue scaled by `R = 2^256`, where
//!   multiplication is a multiply followed by Montgomery reduction instead
//!   of a full-width division.
//!
//! Converting between the two is explicit; every arithmetic operation on a
//! pair of elements verifies that both belong to the same field and reports
//! [`Error::FieldMismatch`] otherwise. The [`FieldValue`] trait abstracts
//! over both flavors so higher layers (curves, polynomials) can be written
//! once.
//!
//! The implementation is variable-time by construction (the backend is a
//! heap-allocated big integer); it makes no side-channel claims.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod element;
mod error;
mod field;
mod mont;
mod value;

pub use element::FieldElement;
pub use error::{Error, Result};
pub use field::{Field, FIELD_ELEMENT_SIZE};
pub use mont::MontgomeryElement;
pub use value::FieldValue;
