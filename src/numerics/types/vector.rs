// src/numerics/types/vector.rs
// Vector3 generic implementation with default precision f32.
// Uses the FloatingPoint trait from super::traits.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use serde::{Deserialize, Serialize};

use super::basis::Basis;
use super::traits::FloatingPoint;
use crate::error::NumericsError;
use crate::numerics::scalar;

/// Component selector for 3D vectors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Vector3Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl TryFrom<usize> for Vector3Axis {
    type Error = NumericsError;

    fn try_from(axis: usize) -> Result<Self, Self::Error> {
        match axis {
            0 => Ok(Vector3Axis::X),
            1 => Ok(Vector3Axis::Y),
            2 => Ok(Vector3Axis::Z),
            _ => Err(NumericsError::AxisOutOfRange { axis, count: 3 }),
        }
    }
}

/// Vector3 is a 3D vector over any [`FloatingPoint`] type.
///
/// Components are addressable by name or by axis index `0..3`. Comparison
/// operators order lexicographically by `x`, then `y`, then `z`.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Vector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// Conditional impls for serde
impl<T> Serialize for Vector3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    pub fn get_axis(&self, axis: usize) -> T {
        debug_assert!(axis < 3, "Vector3 axis {} out of range", axis);
        self[axis]
    }

    pub fn set_axis(&mut self, axis: usize, value: T) {
        debug_assert!(axis < 3, "Vector3 axis {} out of range", axis);
        self[axis] = value;
    }

    pub fn set_all(&mut self, value: T) {
        *self = Self::splat(value);
    }

    /// Resets every component to zero.
    pub fn set_zero(&mut self) {
        *self = Self::zero();
    }

    /// Axis of the smallest component. Ties resolve toward the later axis.
    pub fn min_axis(&self) -> Vector3Axis {
        if self.x < self.y {
            if self.x < self.z {
                Vector3Axis::X
            } else {
                Vector3Axis::Z
            }
        } else if self.y < self.z {
            Vector3Axis::Y
        } else {
            Vector3Axis::Z
        }
    }

    /// Axis of the largest component.
    pub fn max_axis(&self) -> Vector3Axis {
        if self.x < self.y {
            if self.y < self.z {
                Vector3Axis::Z
            } else {
                Vector3Axis::Y
            }
        } else if self.x < self.z {
            Vector3Axis::Z
        } else {
            Vector3Axis::X
        }
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Scales to unit length in place; the zero vector stays zero.
    pub fn normalize(&mut self) {
        let length_squared = self.length_squared();
        if length_squared == T::zero() {
            self.set_zero();
        } else {
            let length = length_squared.sqrt();
            self.x /= length;
            self.y /= length;
            self.z /= length;
        }
    }

    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    pub fn is_normalized(&self) -> bool {
        scalar::is_equal_approx_tolerance(self.length_squared(), T::one(), T::UNIT_EPSILON)
    }

    /// Component-wise reciprocal.
    pub fn inverse(&self) -> Self {
        Self::new(T::one() / self.x, T::one() / self.y, T::one() / self.z)
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Outer product `self * other^T`.
    pub fn outer(&self, other: &Self) -> Basis<T> {
        Basis::from_rows(*other * self.x, *other * self.y, *other * self.z)
    }

    pub fn to_diagonal_matrix(&self) -> Basis<T> {
        let zero = T::zero();
        Basis::new(self.x, zero, zero, zero, self.y, zero, zero, zero, self.z)
    }

    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component signs, with zero counted as positive.
    pub fn sign(&self) -> Self {
        Self::new(self.x.sgn(), self.y.sgn(), self.z.sgn())
    }

    pub fn floor(&self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    pub fn ceil(&self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }

    pub fn round(&self) -> Self {
        Self::new(self.x.round(), self.y.round(), self.z.round())
    }

    pub fn distance_to(&self, other: &Self) -> T {
        (*other - *self).length()
    }

    pub fn distance_squared_to(&self, other: &Self) -> T {
        (*other - *self).length_squared()
    }

    pub fn direction_to(&self, to: &Self) -> Self {
        (*to - *self).normalized()
    }

    pub fn posmod(&self, modulus: T) -> Self {
        Self::new(
            scalar::fposmod(self.x, modulus),
            scalar::fposmod(self.y, modulus),
            scalar::fposmod(self.z, modulus),
        )
    }

    pub fn posmodv(&self, modv: &Self) -> Self {
        Self::new(
            scalar::fposmod(self.x, modv.x),
            scalar::fposmod(self.y, modv.y),
            scalar::fposmod(self.z, modv.z),
        )
    }

    pub fn project(&self, to: &Self) -> Self {
        *to * (self.dot(to) / to.length_squared())
    }

    /// Unsigned angle between the two vectors, in `[0, PI]`.
    pub fn angle_to(&self, to: &Self) -> T {
        self.cross(to).length().atan2(self.dot(to))
    }

    /// Angle from `self` to `to`, negative when the rotation runs clockwise
    /// around `axis`.
    pub fn signed_angle_to(&self, to: &Self, axis: &Self) -> T {
        let cross_to = self.cross(to);
        let unsigned_angle = cross_to.length().atan2(self.dot(to));
        if cross_to.dot(axis) < T::zero() {
            -unsigned_angle
        } else {
            unsigned_angle
        }
    }

    pub fn snapped(&self, by: &Self) -> Self {
        Self::new(
            scalar::stepify(self.x, by.x),
            scalar::stepify(self.y, by.y),
            scalar::stepify(self.z, by.z),
        )
    }

    /// Rotates around a normalized `axis` by `phi` radians.
    pub fn rotate(&mut self, axis: &Self, phi: T) {
        *self = Basis::from_axis_angle(axis, phi).xform(self);
    }

    pub fn rotated(&self, axis: &Self, phi: T) -> Self {
        let mut v = *self;
        v.rotate(axis, phi);
        v
    }

    pub fn limit_length(&self, max_length: T) -> Self {
        let l = self.length();
        let mut v = *self;
        if l > T::zero() && max_length > T::zero() && max_length < l {
            v /= l;
            v *= max_length;
        }
        v
    }

    pub fn lerp(&self, to: &Self, weight: T) -> Self {
        Self::new(
            scalar::lerp(self.x, to.x, weight),
            scalar::lerp(self.y, to.y, weight),
            scalar::lerp(self.z, to.z, weight),
        )
    }

    /// Rotates toward `to` around their common normal by a fraction of the
    /// angle between them. Parallel inputs have no such normal and fall back
    /// to a linear blend.
    pub fn slerp(&self, to: &Self, weight: T) -> Self {
        let axis = self.cross(to);
        if axis.length_squared() == T::zero() {
            return self.lerp(to, weight);
        }
        let theta = self.angle_to(to);
        self.rotated(&axis.normalized(), theta * weight)
    }

    /// Catmull-Rom interpolation between `self` and `b`.
    pub fn cubic_interpolate(&self, b: &Self, pre_a: &Self, post_b: &Self, weight: T) -> Self {
        let p0 = *pre_a;
        let p1 = *self;
        let p2 = *b;
        let p3 = *post_b;
        let t = weight;
        let t2 = t * t;
        let t3 = t2 * t;
        let two = T::from_f64(2.0);
        let three = T::from_f64(3.0);

        (p1 * two
            + (-p0 + p2) * t
            + (p0 * two - p1 * T::from_f64(5.0) + p2 * T::from_f64(4.0) - p3) * t2
            + (-p0 + p1 * three - p2 * three + p3) * t3)
            * T::from_f64(0.5)
    }

    pub fn move_toward(&self, to: &Self, delta: T) -> Self {
        let vd = *to - *self;
        let len = vd.length();
        if len <= delta || len < T::CMP_EPSILON {
            *to
        } else {
            *self + vd / len * delta
        }
    }

    /// Removes the component along `normal`.
    pub fn slide(&self, normal: &Self) -> Self {
        debug_assert!(normal.is_normalized(), "slide normal must be normalized");
        *self - *normal * self.dot(normal)
    }

    pub fn bounce(&self, normal: &Self) -> Self {
        -self.reflect(normal)
    }

    /// Mirrors `self` across the axis `normal`.
    pub fn reflect(&self, normal: &Self) -> Self {
        debug_assert!(normal.is_normalized(), "reflect normal must be normalized");
        *normal * (T::from_f64(2.0) * self.dot(normal)) - *self
    }

    pub fn is_equal_approx(&self, other: &Self) -> bool {
        scalar::is_equal_approx(self.x, other.x)
            && scalar::is_equal_approx(self.y, other.y)
            && scalar::is_equal_approx(self.z, other.z)
    }

    pub fn is_equal_approx_tolerance(&self, other: &Self, tolerance: T) -> bool {
        scalar::is_equal_approx_tolerance(self.x, other.x, tolerance)
            && scalar::is_equal_approx_tolerance(self.y, other.y, tolerance)
            && scalar::is_equal_approx_tolerance(self.z, other.z, tolerance)
    }
}

impl<T: FloatingPoint> Index<usize> for Vector3<T> {
    type Output = T;

    fn index(&self, axis: usize) -> &T {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 axis {} out of range", axis),
        }
    }
}

impl<T: FloatingPoint> IndexMut<usize> for Vector3<T> {
    fn index_mut(&mut self, axis: usize) -> &mut T {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 axis {} out of range", axis),
        }
    }
}

impl<T: FloatingPoint> Index<Vector3Axis> for Vector3<T> {
    type Output = T;

    fn index(&self, axis: Vector3Axis) -> &T {
        &self[axis as usize]
    }
}

impl<T: FloatingPoint> IndexMut<Vector3Axis> for Vector3<T> {
    fn index_mut(&mut self, axis: Vector3Axis) -> &mut T {
        &mut self[axis as usize]
    }
}

// Implement operator + for Vector3<T>
impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: FloatingPoint> AddAssign for Vector3<T> {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

// Implement operator - for Vector3<T>
impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl<T: FloatingPoint> Mul for Vector3<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: FloatingPoint> MulAssign for Vector3<T> {
    fn mul_assign(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
    }
}

impl<T: FloatingPoint> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl<T: FloatingPoint> Div for Vector3<T> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }
}

impl<T: FloatingPoint> Div<T> for Vector3<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl<T: FloatingPoint> DivAssign for Vector3<T> {
    fn div_assign(&mut self, other: Self) {
        self.x /= other.x;
        self.y /= other.y;
        self.z /= other.z;
    }
}

impl<T: FloatingPoint> DivAssign<T> for Vector3<T> {
    fn div_assign(&mut self, scalar: T) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($t:ty) => {
        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            fn mul(self, vector: Vector3<$t>) -> Vector3<$t> {
                vector * self
            }
        }
    };
}

impl_scalar_lhs_mul!(f32);
impl_scalar_lhs_mul!(f64);

// Conversions between Vector3<T> and tuples

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

// Conversions between Vector3<T> and arrays [T; 3]

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Vector3<T> {
    type Error = NumericsError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        match slice {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(NumericsError::SliceLength {
                expected: 3,
                actual: slice.len(),
            }),
        }
    }
}
