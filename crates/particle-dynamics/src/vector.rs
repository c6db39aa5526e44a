//! 3D vector value type used for all positions, velocities, and forces.
//!
//! `Vector3` is a plain value: every copy-returning operation produces an
//! independent vector, and the in-place forms are the only mutations. The
//! layout is `#[repr(C)]` with one padding word so a vector occupies four
//! words, matching GPU buffer alignment.

use bytemuck::{Pod, Zeroable};

use crate::precision::Real;

/// A three-component vector of [`Real`] scalars.
///
/// The zero vector is the default. No operation normalizes implicitly.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct Vector3 {
    /// x-axis component.
    pub x: Real,
    /// y-axis component.
    pub y: Real,
    /// z-axis component.
    pub z: Real,
    /// Padding to four-word alignment; always zero.
    _pad: Real,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z, _pad: 0.0 }
    }

    /// Flip the sign of every component in place.
    #[inline]
    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// Length of the vector.
    #[inline]
    pub fn magnitude(&self) -> Real {
        self.square_magnitude().sqrt()
    }

    /// Squared length of the vector.
    ///
    /// Monotonically equivalent to [`magnitude`](Self::magnitude) for
    /// ordering comparisons, without the square root.
    #[inline]
    pub fn square_magnitude(&self) -> Real {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// `self += other * scale` as one fused update.
    ///
    /// This is the primitive the integrator is built on; it performs the
    /// same multiply-then-add per component as the unfused expression.
    #[inline]
    pub fn add_scaled_vector(&mut self, other: Vector3, scale: Real) {
        self.x += other.x * scale;
        self.y += other.y * scale;
        self.z += other.z * scale;
    }

    /// Component-wise (Hadamard) product.
    #[inline]
    pub fn component_product(&self, other: Vector3) -> Vector3 {
        Vector3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Component-wise product, stored into `self`.
    #[inline]
    pub fn component_product_update(&mut self, other: Vector3) {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
    }

    /// Scalar (dot) product. Commutative.
    #[inline]
    pub fn scalar_product(&self, other: Vector3) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Vector (cross) product `self × other`. Anti-commutative.
    #[inline]
    pub fn vector_product(&self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Sets `self` to `self × other`, the same operand order as
    /// [`vector_product`](Self::vector_product).
    #[inline]
    pub fn vector_product_update(&mut self, other: Vector3) {
        *self = self.vector_product(other);
    }

    /// Reset every component to zero.
    #[inline]
    pub fn clear(&mut self) {
        *self = Vector3::ZERO;
    }

    /// The components as an array, in `[x, y, z]` order.
    #[inline]
    pub fn to_array(self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Vector3::ZERO
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl core::fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Vector3")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .finish()
    }
}

impl core::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl core::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl core::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl core::ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl core::ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Vector3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl core::ops::Mul<Real> for Vector3 {
    type Output = Vector3;

    fn mul(self, value: Real) -> Vector3 {
        Vector3::new(self.x * value, self.y * value, self.z * value)
    }
}

impl core::ops::MulAssign<Real> for Vector3 {
    fn mul_assign(&mut self, value: Real) {
        self.x *= value;
        self.y *= value;
        self.z *= value;
    }
}

impl From<[Real; 3]> for Vector3 {
    fn from([x, y, z]: [Real; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [Real; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

#[cfg(not(feature = "double-precision"))]
impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(not(feature = "double-precision"))]
impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "double-precision")]
impl From<Vector3> for glam::DVec3 {
    fn from(v: Vector3) -> Self {
        glam::DVec3::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "double-precision")]
impl From<glam::DVec3> for Vector3 {
    fn from(v: glam::DVec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: Real = 1e-5;

    fn approx_eq(a: Real, b: Real) -> bool {
        (a - b).abs() <= TOLERANCE
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vector3::default(), Vector3::ZERO);
        assert_eq!(Vector3::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_invert_matches_neg() {
        let v = Vector3::new(1.0, -2.0, 3.0);
        let mut inverted = v;
        inverted.invert();
        assert_eq!(inverted, -v);
        assert_eq!(inverted, Vector3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_magnitude() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert!(approx_eq(v.magnitude(), 5.0));
        assert!(approx_eq(v.square_magnitude(), 25.0));
    }

    #[test]
    fn test_scale_square_magnitude() {
        let v = Vector3::new(1.5, -2.0, 0.5);
        let s = 3.0;
        assert!(approx_eq(
            (v * s).square_magnitude(),
            v.square_magnitude() * s * s
        ));
    }

    #[test]
    fn test_scale_in_place_matches_copy() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let mut scaled = v;
        scaled *= 2.5;
        assert_eq!(scaled, v * 2.5);
    }

    #[test]
    fn test_add_sub() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, -3.0, 9.0));
        assert_eq!(a - b, Vector3::new(-3.0, 7.0, -3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_add_scaled_vector_matches_unfused() {
        let a = Vector3::new(0.25, -1.0, 2.0);
        let v = Vector3::new(3.0, 0.5, -2.0);
        let s = 1.75;

        let mut fused = a;
        fused.add_scaled_vector(v, s);
        assert_eq!(fused, a + v * s);
    }

    #[test]
    fn test_component_product() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.component_product(b), Vector3::new(4.0, 10.0, 18.0));

        let mut c = a;
        c.component_product_update(b);
        assert_eq!(c, a.component_product(b));
    }

    #[test]
    fn test_dot_commutative() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        assert_eq!(a.scalar_product(b), b.scalar_product(a));
        assert!(approx_eq(a.scalar_product(b), -4.0 + 1.0 + 6.0));
    }

    #[test]
    fn test_cross_anti_commutative() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        assert_eq!(a.vector_product(b), -b.vector_product(a));
    }

    #[test]
    fn test_cross_of_parallel_is_zero() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a.vector_product(a), Vector3::ZERO);
        assert_eq!(a.vector_product(a * -2.0), Vector3::ZERO);
    }

    #[test]
    fn test_cross_basis_orientation() {
        // Right-handed basis: x × y = z.
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);
        assert_eq!(x.vector_product(y), z);
        assert_eq!(y.vector_product(x), -z);
    }

    #[test]
    fn test_cross_update_operand_order() {
        // The mutating form must compute self × other, never other × self.
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);

        let mut a = x;
        a.vector_product_update(y);
        assert_eq!(a, x.vector_product(y));

        let mut b = y;
        b.vector_product_update(x);
        assert_eq!(b, y.vector_product(x));
        assert_eq!(b, -a);
    }

    #[test]
    fn test_clear() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.clear();
        assert_eq!(v, Vector3::ZERO);
    }

    #[test]
    fn test_array_round_trip() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), v);
    }
}
