//! Affine point representation

use ng_field::FieldValue;

/// A point on a short-Weierstrass curve in affine coordinates.
///
/// The point at infinity — the identity of the group — is the coordinate-less
/// state; every other point carries its `(x, y)` pair. Points are plain
/// values with no curve handle of their own: the group law lives on
/// [`crate::Curve`], which owns the parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct AffinePoint<V: FieldValue> {
    coords: Option<(V, V)>,
}

impl<V: FieldValue> AffinePoint<V> {
    /// A finite point from its coordinates.
    ///
    /// The coordinates are not checked against any curve equation here;
    /// use [`crate::Curve::is_on_curve`] on untrusted input.
    pub fn new(x: V, y: V) -> Self {
        AffinePoint {
            coords: Some((x, y)),
        }
    }

    /// The point at infinity.
    pub fn infinity() -> Self {
        AffinePoint { coords: None }
    }

    /// Whether this is the point at infinity.
    pub fn is_infinity(&self) -> bool {
        self.coords.is_none()
    }

    /// Both coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&V, &V)> {
        self.coords.as_ref().map(|(x, y)| (x, y))
    }

    /// The x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&V> {
        self.coords.as_ref().map(|(x, _)| x)
    }

    /// The y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&V> {
        self.coords.as_ref().map(|(_, y)| y)
    }

    /// Deconstruct into coordinates, or `None` for the point at infinity.
    pub fn into_coordinates(self) -> Option<(V, V)> {
        self.coords
    }
}
