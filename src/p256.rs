//! NIST P-256 curve instance.
//!
//! The original parameter family runs P-256 arithmetic in the Montgomery
//! domain, so this instance binds the curve over [`MontgomeryElement`]:
//! repeated products inside the group law use Montgomery reduction, and
//! values cross back to canonical residues only at the serialization edge.

use std::sync::Arc;

use ng_curve::{Curve, Result};
use ng_field::{Field, MontgomeryElement};
use ng_params::p256 as params;

use crate::hex_uint;

/// The P-256 base field `F_p` with `p = 2^256 − 2^224 + 2^192 + 2^96 − 1`.
pub fn field() -> ng_field::Result<Arc<Field>> {
    Field::new(hex_uint(params::MODULUS)?)
}

/// The P-256 curve `y² = x³ − 3x + b` with its standard generator and order.
pub fn curve() -> Result<Curve<MontgomeryElement>> {
    let field = field()?;
    let element = |hex: &str| -> ng_field::Result<MontgomeryElement> {
        Ok(MontgomeryElement::new(&field, hex_uint(hex)?))
    };
    Curve::new(
        field.clone(),
        element(params::A)?,
        element(params::B)?,
        element(params::GENERATOR_X)?,
        element(params::GENERATOR_Y)?,
        hex_uint(params::ORDER)?,
    )
}
