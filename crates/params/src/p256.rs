//! NIST P-256 (secp256r1) parameters, per FIPS 186-4 / SEC 2.

/// Field prime `p = 2^256 − 2^224 + 2^192 + 2^96 − 1`
pub const MODULUS: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// Curve coefficient `a = −3 mod p`
pub const A: &str = "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc";

/// Curve coefficient `b`
pub const B: &str = "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b";

/// Generator x-coordinate
pub const GENERATOR_X: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

/// Generator y-coordinate
pub const GENERATOR_Y: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

/// Group order `n`
pub const ORDER: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";
