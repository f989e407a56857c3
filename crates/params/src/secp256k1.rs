//! SEC 2 secp256k1 parameters.

/// Field prime `p = 2^256 − 2^32 − 977`
pub const MODULUS: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

/// Curve coefficient `a = 0`
pub const A: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Curve coefficient `b = 7`
pub const B: &str = "0000000000000000000000000000000000000000000000000000000000000007";

/// Generator x-coordinate
pub const GENERATOR_X: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

/// Generator y-coordinate
pub const GENERATOR_Y: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

/// Group order `n`
pub const ORDER: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
