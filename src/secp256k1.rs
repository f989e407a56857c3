//! SEC 2 secp256k1 curve instance.
//!
//! Bound over canonical [`FieldElement`] residues, matching the original
//! parameter family; `a = 0` keeps the doubling formula cheap without a
//! scaled domain.

use std::sync::Arc;

use ng_curve::{Curve, Result};
use ng_field::{Field, FieldElement};
use ng_params::secp256k1 as params;

use crate::hex_uint;

/// The secp256k1 base field `F_p` with `p = 2^256 − 2^32 − 977`.
pub fn field() -> ng_field::Result<Arc<Field>> {
    Field::new(hex_uint(params::MODULUS)?)
}

/// The secp256k1 curve `y² = x³ + 7` with its standard generator and order.
pub fn curve() -> Result<Curve<FieldElement>> {
    let field = field()?;
    let element = |hex: &str| -> ng_field::Result<FieldElement> {
        FieldElement::from_hex(&field, hex)
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
