// src/numerics/types/vector2.rs
// Vector2 (float, generic precision) and Vector2i (integer) types.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use crate::error::NumericsError;
use crate::numerics::scalar;

/// Component selector for 2D vectors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Vector2Axis {
    X = 0,
    Y = 1,
}

impl TryFrom<usize> for Vector2Axis {
    type Error = NumericsError;

    fn try_from(axis: usize) -> Result<Self, Self::Error> {
        match axis {
            0 => Ok(Vector2Axis::X),
            1 => Ok(Vector2Axis::Y),
            _ => Err(NumericsError::AxisOutOfRange { axis, count: 2 }),
        }
    }
}

/// 2D vector, also used for points and sizes (`width`/`height`).
///
/// Ordering is lexicographic on `(x, y)`; it exists for sorting, not for
/// any geometric meaning.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Vector2<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
}

impl<T> Serialize for Vector2<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector2<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y) = <(T, T)>::deserialize(deserializer)?;
        Ok(Vector2 { x, y })
    }
}

impl<T: FloatingPoint> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }

    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    pub fn one() -> Self {
        Self::splat(T::one())
    }

    pub fn width(&self) -> T {
        self.x
    }

    pub fn height(&self) -> T {
        self.y
    }

    /// Width over height.
    pub fn aspect(&self) -> T {
        self.x / self.y
    }

    pub fn get_axis(&self, axis: usize) -> T {
        debug_assert!(axis < 2, "Vector2 axis {} out of range", axis);
        self[axis]
    }

    pub fn set_axis(&mut self, axis: usize, value: T) {
        debug_assert!(axis < 2, "Vector2 axis {} out of range", axis);
        self[axis] = value;
    }

    /// Index of the smaller component; ties pick `y`.
    pub fn min_axis(&self) -> Vector2Axis {
        if self.x < self.y {
            Vector2Axis::X
        } else {
            Vector2Axis::Y
        }
    }

    /// Index of the larger component; ties pick `x`.
    pub fn max_axis(&self) -> Vector2Axis {
        if self.x < self.y {
            Vector2Axis::Y
        } else {
            Vector2Axis::X
        }
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Scales to unit length in place; the zero vector stays zero.
    pub fn normalize(&mut self) {
        let l = self.length_squared();
        if l != T::zero() {
            let l = l.sqrt();
            self.x /= l;
            self.y /= l;
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

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn distance_to(&self, other: &Self) -> T {
        (*self - *other).length()
    }

    pub fn distance_squared_to(&self, other: &Self) -> T {
        (*self - *other).length_squared()
    }

    pub fn direction_to(&self, to: &Self) -> Self {
        (*to - *self).normalized()
    }

    pub fn angle(&self) -> T {
        self.y.atan2(self.x)
    }

    /// Signed angle from `self` to `other`, in `(-PI, PI]`.
    pub fn angle_to(&self, other: &Self) -> T {
        self.cross(other).atan2(self.dot(other))
    }

    /// Angle of the line from `point` to `self`.
    pub fn angle_to_point(&self, point: &Self) -> T {
        (self.y - point.y).atan2(self.x - point.x)
    }

    /// Replaces `self` with the unit vector at `radians`.
    pub fn set_rotation(&mut self, radians: T) {
        self.x = radians.cos();
        self.y = radians.sin();
    }

    pub fn rotated(&self, by: T) -> Self {
        let length = self.length();
        let mut v = Self::zero();
        v.set_rotation(self.angle() + by);
        v * length
    }

    /// Perpendicular vector, rotated 90 degrees clockwise.
    pub fn tangent(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Component signs, with zero counted as positive.
    pub fn sign(&self) -> Self {
        Self::new(self.x.sgn(), self.y.sgn())
    }

    pub fn floor(&self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    pub fn ceil(&self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }

    pub fn round(&self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    pub fn posmod(&self, modulus: T) -> Self {
        Self::new(
            scalar::fposmod(self.x, modulus),
            scalar::fposmod(self.y, modulus),
        )
    }

    pub fn posmodv(&self, modv: &Self) -> Self {
        Self::new(
            scalar::fposmod(self.x, modv.x),
            scalar::fposmod(self.y, modv.y),
        )
    }

    pub fn snapped(&self, by: &Self) -> Self {
        Self::new(scalar::stepify(self.x, by.x), scalar::stepify(self.y, by.y))
    }

    pub fn project(&self, to: &Self) -> Self {
        *to * (self.dot(to) / to.length_squared())
    }

    /// Projects `vec` onto the line with normal `self` at distance `d`.
    pub fn plane_project(&self, d: T, vec: &Self) -> Self {
        *vec - *self * (self.dot(vec) - d)
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

    /// Alias of [`limit_length`](Self::limit_length).
    pub fn clamped(&self, max_length: T) -> Self {
        self.limit_length(max_length)
    }

    pub fn lerp(&self, to: &Self, weight: T) -> Self {
        Self::new(
            scalar::lerp(self.x, to.x, weight),
            scalar::lerp(self.y, to.y, weight),
        )
    }

    /// Rotates toward `to` by a fraction of the angle between them.
    /// Lengths are not interpolated; `self` is expected to be normalized.
    pub fn slerp(&self, to: &Self, weight: T) -> Self {
        let theta = self.angle_to(to);
        self.rotated(theta * weight)
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

    /// Mirrors `self` across the line with direction `normal`.
    pub fn reflect(&self, normal: &Self) -> Self {
        debug_assert!(normal.is_normalized(), "reflect normal must be normalized");
        *normal * (T::from_f64(2.0) * self.dot(normal)) - *self
    }

    pub fn is_equal_approx(&self, other: &Self) -> bool {
        scalar::is_equal_approx(self.x, other.x) && scalar::is_equal_approx(self.y, other.y)
    }
}

impl<T: FloatingPoint> Index<usize> for Vector2<T> {
    type Output = T;

    fn index(&self, axis: usize) -> &T {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 axis {} out of range", axis),
        }
    }
}

impl<T: FloatingPoint> IndexMut<usize> for Vector2<T> {
    fn index_mut(&mut self, axis: usize) -> &mut T {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2 axis {} out of range", axis),
        }
    }
}

impl<T: FloatingPoint> Index<Vector2Axis> for Vector2<T> {
    type Output = T;

    fn index(&self, axis: Vector2Axis) -> &T {
        &self[axis as usize]
    }
}

impl<T: FloatingPoint> IndexMut<Vector2Axis> for Vector2<T> {
    fn index_mut(&mut self, axis: Vector2Axis) -> &mut T {
        &mut self[axis as usize]
    }
}

impl<T: FloatingPoint> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: FloatingPoint> AddAssign for Vector2<T> {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl<T: FloatingPoint> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: FloatingPoint> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl<T: FloatingPoint> Mul for Vector2<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<T: FloatingPoint> MulAssign for Vector2<T> {
    fn mul_assign(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
    }
}

impl<T: FloatingPoint> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl<T: FloatingPoint> Div for Vector2<T> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }
}

impl<T: FloatingPoint> Div<T> for Vector2<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<T: FloatingPoint> DivAssign for Vector2<T> {
    fn div_assign(&mut self, other: Self) {
        self.x /= other.x;
        self.y /= other.y;
    }
}

impl<T: FloatingPoint> DivAssign<T> for Vector2<T> {
    fn div_assign(&mut self, scalar: T) {
        self.x /= scalar;
        self.y /= scalar;
    }
}

impl<T: FloatingPoint> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($t:ty) => {
        impl Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            fn mul(self, vector: Vector2<$t>) -> Vector2<$t> {
                vector * self
            }
        }
    };
}

impl_scalar_lhs_mul!(f32);
impl_scalar_lhs_mul!(f64);

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Vector2<T> {
    type Error = NumericsError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        match slice {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(NumericsError::SliceLength {
                expected: 2,
                actual: slice.len(),
            }),
        }
    }
}

/// Integer 2D vector. Division truncates toward zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vector2i {
    pub x: i32,
    pub y: i32,
}

impl Vector2i {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn width(&self) -> i32 {
        self.x
    }

    pub fn height(&self) -> i32 {
        self.y
    }

    pub fn aspect(&self) -> f32 {
        self.x as f32 / self.y as f32
    }

    pub fn get_axis(&self, axis: usize) -> i32 {
        debug_assert!(axis < 2, "Vector2i axis {} out of range", axis);
        self[axis]
    }

    pub fn set_axis(&mut self, axis: usize, value: i32) {
        debug_assert!(axis < 2, "Vector2i axis {} out of range", axis);
        self[axis] = value;
    }

    pub fn to_vector2(&self) -> Vector2<f32> {
        Vector2::new(self.x as f32, self.y as f32)
    }
}

impl Index<usize> for Vector2i {
    type Output = i32;

    fn index(&self, axis: usize) -> &i32 {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2i axis {} out of range", axis),
        }
    }
}

impl IndexMut<usize> for Vector2i {
    fn index_mut(&mut self, axis: usize) -> &mut i32 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2i axis {} out of range", axis),
        }
    }
}

impl Add for Vector2i {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2i {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vector2i {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vector2i {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul for Vector2i {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

impl Mul<i32> for Vector2i {
    type Output = Self;

    fn mul(self, scalar: i32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2i> for i32 {
    type Output = Vector2i;

    fn mul(self, vector: Vector2i) -> Vector2i {
        vector * self
    }
}

impl MulAssign<i32> for Vector2i {
    fn mul_assign(&mut self, scalar: i32) {
        *self = *self * scalar;
    }
}

impl Div for Vector2i {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }
}

impl Div<i32> for Vector2i {
    type Output = Self;

    fn div(self, scalar: i32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl DivAssign<i32> for Vector2i {
    fn div_assign(&mut self, scalar: i32) {
        *self = *self / scalar;
    }
}

impl Neg for Vector2i {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<Vector2i> for Vector2<f32> {
    fn from(v: Vector2i) -> Self {
        v.to_vector2()
    }
}

impl From<(i32, i32)> for Vector2i {
    fn from(tuple: (i32, i32)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}
