// src/numerics/types/quaternion.rs
// Unit quaternion rotations, generic over FloatingPoint (default f32).

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::basis::Basis;
use super::traits::FloatingPoint;
use super::vector::Vector3;
use crate::numerics::scalar;

/// Quaternion `(x, y, z, w)` where `w` is the real part.
///
/// Rotation operations assume unit length; call [`Quaternion::normalize`]
/// after accumulating products. The default value is the identity rotation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Serialize for Quaternion<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z, &self.w).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Quaternion<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z, w) = <(T, T, T, T)>::deserialize(deserializer)?;
        Ok(Quaternion { x, y, z, w })
    }
}

impl<T: FloatingPoint> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatingPoint> Quaternion<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The rotation that leaves every vector unchanged.
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    pub fn set(&mut self, x: T, y: T, z: T, w: T) {
        *self = Self::new(x, y, z, w);
    }

    /// Rotation of `angle` radians around `axis`.
    ///
    /// The axis is normalized on the fly. A zero axis produces the all-zero
    /// quaternion, which is not a rotation.
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let mut q = Self::identity();
        q.set_axis_angle(axis, angle);
        q
    }

    pub fn set_axis_angle(&mut self, axis: &Vector3<T>, angle: T) {
        let d = axis.length();
        if d == T::zero() {
            self.set(T::zero(), T::zero(), T::zero(), T::zero());
        } else {
            let half = angle * T::from_f64(0.5);
            let s = half.sin() / d;
            self.set(axis.x * s, axis.y * s, axis.z * s, half.cos());
        }
    }

    /// Shortest-arc rotation taking the unit vector `from` onto `to`.
    ///
    /// Nearly opposite vectors have no unique arc; the result is then the
    /// half turn around Y.
    pub fn shortest_arc(from: &Vector3<T>, to: &Vector3<T>) -> Self {
        let c = from.cross(to);
        let d = from.dot(to);

        if d < -T::one() + T::CMP_EPSILON {
            Self::new(T::zero(), T::one(), T::zero(), T::zero())
        } else {
            let s = ((T::one() + d) * T::from_f64(2.0)).sqrt();
            let rs = T::one() / s;
            Self::new(c.x * rs, c.y * rs, c.z * rs, s * T::from_f64(0.5))
        }
    }

    /// Euler angles in YXZ order, the engine default.
    pub fn from_euler(euler: &Vector3<T>) -> Self {
        Self::from_euler_yxz(euler)
    }

    pub fn set_euler(&mut self, euler: &Vector3<T>) {
        self.set_euler_yxz(euler);
    }

    pub fn get_euler(&self) -> Vector3<T> {
        self.get_euler_yxz()
    }

    pub fn from_euler_xyz(euler: &Vector3<T>) -> Self {
        let mut q = Self::identity();
        q.set_euler_xyz(euler);
        q
    }

    /// Sets the rotation `X(ax) * Y(ay) * Z(az)`; Z is applied first.
    pub fn set_euler_xyz(&mut self, euler: &Vector3<T>) {
        let half = T::from_f64(0.5);
        let (sin_a1, cos_a1) = ((euler.x * half).sin(), (euler.x * half).cos());
        let (sin_a2, cos_a2) = ((euler.y * half).sin(), (euler.y * half).cos());
        let (sin_a3, cos_a3) = ((euler.z * half).sin(), (euler.z * half).cos());

        self.set(
            sin_a1 * cos_a2 * cos_a3 + sin_a2 * sin_a3 * cos_a1,
            -sin_a1 * sin_a3 * cos_a2 + sin_a2 * cos_a1 * cos_a3,
            sin_a1 * sin_a2 * cos_a3 + sin_a3 * cos_a1 * cos_a2,
            -sin_a1 * sin_a2 * sin_a3 + cos_a1 * cos_a2 * cos_a3,
        );
    }

    pub fn get_euler_xyz(&self) -> Vector3<T> {
        debug_assert!(self.is_normalized(), "quaternion must be normalized");
        Basis::from_quaternion(self).get_euler_xyz()
    }

    pub fn from_euler_yxz(euler: &Vector3<T>) -> Self {
        let mut q = Self::identity();
        q.set_euler_yxz(euler);
        q
    }

    /// Sets the rotation `Y(ay) * X(ax) * Z(az)`; Z is applied first.
    pub fn set_euler_yxz(&mut self, euler: &Vector3<T>) {
        let half = T::from_f64(0.5);
        let (sin_a1, cos_a1) = ((euler.y * half).sin(), (euler.y * half).cos());
        let (sin_a2, cos_a2) = ((euler.x * half).sin(), (euler.x * half).cos());
        let (sin_a3, cos_a3) = ((euler.z * half).sin(), (euler.z * half).cos());

        self.set(
            sin_a1 * cos_a2 * sin_a3 + cos_a1 * sin_a2 * cos_a3,
            sin_a1 * cos_a2 * cos_a3 - cos_a1 * sin_a2 * sin_a3,
            -sin_a1 * sin_a2 * cos_a3 + cos_a1 * cos_a2 * sin_a3,
            sin_a1 * sin_a2 * sin_a3 + cos_a1 * cos_a2 * cos_a3,
        );
    }

    pub fn get_euler_yxz(&self) -> Vector3<T> {
        debug_assert!(self.is_normalized(), "quaternion must be normalized");
        Basis::from_quaternion(self).get_euler_yxz()
    }

    /// Rotation axis. Near the identity the raw vector part is returned.
    pub fn get_axis(&self) -> Vector3<T> {
        if self.w.abs() > T::one() - T::CMP_EPSILON {
            return Vector3::new(self.x, self.y, self.z);
        }
        let r = T::one() / (T::one() - self.w * self.w).sqrt();
        Vector3::new(self.x * r, self.y * r, self.z * r)
    }

    pub fn get_angle(&self) -> T {
        T::from_f64(2.0) * self.w.acos()
    }

    pub fn get_axis_angle(&self) -> (Vector3<T>, T) {
        (self.get_axis(), self.get_angle())
    }

    /// Angle of the rotation that takes `self` to `to`.
    pub fn angle_to(&self, to: &Self) -> T {
        let d = self.dot(to);
        let two = T::from_f64(2.0);
        (d * d * two - T::one()).clamp(-T::one(), T::one()).acos()
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    pub fn normalize(&mut self) {
        *self /= self.length();
    }

    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    /// Unit length within `UNIT_EPSILON`.
    pub fn is_normalized(&self) -> bool {
        scalar::is_equal_approx_tolerance(self.length_squared(), T::one(), T::UNIT_EPSILON)
    }

    /// Conjugate. Equals the inverse only for unit quaternions.
    pub fn inverse(&self) -> Self {
        debug_assert!(self.is_normalized(), "quaternion must be normalized");
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    pub fn is_equal_approx(&self, other: &Self) -> bool {
        scalar::is_equal_approx(self.x, other.x)
            && scalar::is_equal_approx(self.y, other.y)
            && scalar::is_equal_approx(self.z, other.z)
            && scalar::is_equal_approx(self.w, other.w)
    }

    /// Spherical interpolation along the shorter arc.
    ///
    /// When the inputs lie in opposite hemispheres the target is negated,
    /// so at `weight == 1` the result may be `-to`, the same rotation.
    pub fn slerp(&self, to: &Self, weight: T) -> Self {
        debug_assert!(self.is_normalized(), "start quaternion must be normalized");
        debug_assert!(to.is_normalized(), "end quaternion must be normalized");

        let mut cosom = self.dot(to);
        let to1 = if cosom < T::zero() {
            cosom = -cosom;
            -*to
        } else {
            *to
        };

        let (scale0, scale1) = if (T::one() - cosom) > T::CMP_EPSILON {
            let omega = cosom.acos();
            let sinom = omega.sin();
            (
                ((T::one() - weight) * omega).sin() / sinom,
                (weight * omega).sin() / sinom,
            )
        } else {
            // Nearly parallel: sin(omega) is too small to divide by.
            (T::one() - weight, weight)
        };

        Self::new(
            scale0 * self.x + scale1 * to1.x,
            scale0 * self.y + scale1 * to1.y,
            scale0 * self.z + scale1 * to1.z,
            scale0 * self.w + scale1 * to1.w,
        )
    }

    /// Spherical interpolation that keeps the sign of `to`.
    pub fn slerpni(&self, to: &Self, weight: T) -> Self {
        debug_assert!(self.is_normalized(), "start quaternion must be normalized");
        debug_assert!(to.is_normalized(), "end quaternion must be normalized");

        let dot = self.dot(to);
        if dot.abs() > T::from_f64(0.9999) {
            return *self;
        }

        let theta = dot.acos();
        let sin_t = T::one() / theta.sin();
        let new_factor = (weight * theta).sin() * sin_t;
        let inv_factor = ((T::one() - weight) * theta).sin() * sin_t;

        Self::new(
            inv_factor * self.x + new_factor * to.x,
            inv_factor * self.y + new_factor * to.y,
            inv_factor * self.z + new_factor * to.z,
            inv_factor * self.w + new_factor * to.w,
        )
    }

    /// Cubic blend between `self` and `b` shaped by the neighbours
    /// `pre_a` and `post_b`.
    pub fn cubic_slerp(&self, b: &Self, pre_a: &Self, post_b: &Self, weight: T) -> Self {
        let t2 = (T::one() - weight) * weight * T::from_f64(2.0);
        let sp = self.slerp(b, weight);
        let sq = pre_a.slerpni(post_b, weight);
        sp.slerpni(&sq, t2)
    }

    /// Rotates `v`. Requires a unit quaternion.
    pub fn xform(&self, v: &Vector3<T>) -> Vector3<T> {
        debug_assert!(self.is_normalized(), "quaternion must be normalized");
        let u = Vector3::new(self.x, self.y, self.z);
        let uv = u.cross(v);
        *v + ((uv * self.w) + u.cross(&uv)) * T::from_f64(2.0)
    }

    /// Product with the pure quaternion `(v, 0)`.
    pub fn mul_vector(&self, v: &Vector3<T>) -> Self {
        Self::new(
            self.w * v.x + self.y * v.z - self.z * v.y,
            self.w * v.y + self.z * v.x - self.x * v.z,
            self.w * v.z + self.x * v.y - self.y * v.x,
            -self.x * v.x - self.y * v.y - self.z * v.z,
        )
    }
}

impl<T: FloatingPoint> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl<T: FloatingPoint> AddAssign for Quaternion<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: FloatingPoint> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl<T: FloatingPoint> SubAssign for Quaternion<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: FloatingPoint> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// Hamilton product: `(a * b).xform(v) == a.xform(b.xform(v))`.
impl<T: FloatingPoint> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, q: Self) -> Self {
        Self::new(
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y + self.y * q.w + self.z * q.x - self.x * q.z,
            self.w * q.z + self.z * q.w + self.x * q.y - self.y * q.x,
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
        )
    }
}

impl<T: FloatingPoint> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, q: Self) {
        *self = *self * q;
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Self;

    fn mul(self, v: Vector3<T>) -> Self {
        self.mul_vector(&v)
    }
}

impl<T: FloatingPoint> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl<T: FloatingPoint> MulAssign<T> for Quaternion<T> {
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: FloatingPoint> Div<T> for Quaternion<T> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        self * (T::one() / s)
    }
}

impl<T: FloatingPoint> DivAssign<T> for Quaternion<T> {
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($t:ty) => {
        impl Mul<Quaternion<$t>> for $t {
            type Output = Quaternion<$t>;

            fn mul(self, q: Quaternion<$t>) -> Quaternion<$t> {
                q * self
            }
        }
    };
}

impl_scalar_lhs_mul!(f32);
impl_scalar_lhs_mul!(f64);

impl<T: FloatingPoint> From<Basis<T>> for Quaternion<T> {
    fn from(basis: Basis<T>) -> Self {
        basis.get_quat()
    }
}

impl<T: FloatingPoint> From<[T; 4]> for Quaternion<T> {
    fn from(array: [T; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl<T: FloatingPoint> From<Quaternion<T>> for [T; 4] {
    fn from(q: Quaternion<T>) -> Self {
        [q.x, q.y, q.z, q.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn v3(x: f64, y: f64, z: f64) -> Vector3<f64> {
        Vector3::new(x, y, z)
    }

    fn assert_vec_close(a: Vector3<f64>, b: Vector3<f64>) {
        assert!(a.is_equal_approx_tolerance(&b, 1e-9), "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_default_is_identity() {
        let q = Quaternion::<f32>::default();
        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(q.xform(&Vector3::new(1.0, 2.0, 3.0)), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_axis_angle_construction() {
        let q = Quaternion::from_axis_angle(&v3(0.0, 0.0, 2.0), FRAC_PI_2);
        assert_relative_eq!(q.z, FRAC_PI_4.sin());
        assert_relative_eq!(q.w, FRAC_PI_4.cos());
        assert!(q.is_normalized());
        assert_vec_close(q.xform(&v3(1.0, 0.0, 0.0)), v3(0.0, 1.0, 0.0));

        let (axis, angle) = q.get_axis_angle();
        assert_vec_close(axis, v3(0.0, 0.0, 1.0));
        assert_relative_eq!(angle, FRAC_PI_2, epsilon = 1e-12);

        let degenerate = Quaternion::from_axis_angle(&Vector3::<f64>::zero(), 1.0);
        assert_eq!(degenerate, Quaternion::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_shortest_arc() {
        let from = v3(1.0, 0.0, 0.0);
        let to = v3(0.0, 0.0, 1.0);
        let q = Quaternion::shortest_arc(&from, &to);
        assert!(q.is_normalized());
        assert_vec_close(q.xform(&from), to);

        let flipped = Quaternion::shortest_arc(&from, &-from);
        assert_eq!(flipped, Quaternion::new(0.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn test_hamilton_product_composes_rotations() {
        let a = Quaternion::from_axis_angle(&v3(1.0, 0.0, 0.0), 0.7);
        let b = Quaternion::from_axis_angle(&v3(0.0, 1.0, 0.0), -1.3);
        let v = v3(0.3, -2.0, 1.5);
        assert_vec_close((a * b).xform(&v), a.xform(&b.xform(&v)));

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);

        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        assert_eq!(i * j, Quaternion::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(j * i, Quaternion::new(0.0, 0.0, -1.0, 0.0));
    }

    #[test]
    fn test_inverse_undoes_rotation() {
        let q = Quaternion::from_axis_angle(&v3(1.0, 1.0, 0.0), 1.1);
        let v = v3(0.5, 0.25, -4.0);
        assert_vec_close(q.inverse().xform(&q.xform(&v)), v);
        assert!((q * q.inverse()).is_equal_approx(&Quaternion::identity()));
    }

    #[test]
    fn test_normalize() {
        let mut q = Quaternion::new(0.0_f64, 3.0, 0.0, 4.0);
        assert_eq!(q.length(), 5.0);
        assert!(!q.is_normalized());
        q.normalize();
        assert!(q.is_normalized());
        assert!(q.is_equal_approx(&Quaternion::new(0.0, 0.6, 0.0, 0.8)));
    }

    #[test]
    fn test_slerp_endpoints_and_midpoint() {
        let axis = v3(0.0, 1.0, 0.0);
        let a = Quaternion::from_axis_angle(&axis, 0.0);
        let b = Quaternion::from_axis_angle(&axis, FRAC_PI_2);
        assert_eq!(a.slerp(&b, 0.0), a);
        assert!(a.slerp(&b, 1.0).is_equal_approx(&b));

        let mid = a.slerp(&b, 0.5);
        let expected = Quaternion::from_axis_angle(&axis, FRAC_PI_4);
        assert!(mid.is_equal_approx(&expected));
        assert_vec_close(mid.xform(&v3(1.0, 0.0, 0.0)), expected.xform(&v3(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_slerp_takes_short_path() {
        let a = Quaternion::from_axis_angle(&v3(0.0, 0.0, 1.0), 0.2);
        let b = -Quaternion::from_axis_angle(&v3(0.0, 0.0, 1.0), 0.6);
        let mid = a.slerp(&b, 0.5);
        let expected = Quaternion::from_axis_angle(&v3(0.0, 0.0, 1.0), 0.4);
        assert!(mid.is_equal_approx(&expected), "{:?}", mid);
    }

    #[test]
    fn test_slerpni_near_parallel_returns_self() {
        let a = Quaternion::from_axis_angle(&v3(1.0, 0.0, 0.0), 0.3);
        let b = Quaternion::from_axis_angle(&v3(1.0, 0.0, 0.0), 0.30001);
        assert_eq!(a.slerpni(&b, 0.5), a);

        let c = Quaternion::from_axis_angle(&v3(1.0, 0.0, 0.0), 1.3);
        let mid = a.slerpni(&c, 0.5);
        assert!(mid.is_equal_approx(&Quaternion::from_axis_angle(&v3(1.0, 0.0, 0.0), 0.8)));
    }

    #[test]
    fn test_cubic_slerp_hits_endpoints() {
        let axis = v3(0.0, 0.0, 1.0);
        let pre = Quaternion::from_axis_angle(&axis, -0.5);
        let a = Quaternion::from_axis_angle(&axis, 0.0);
        let b = Quaternion::from_axis_angle(&axis, 0.5);
        let post = Quaternion::from_axis_angle(&axis, 1.0);
        assert!(a.cubic_slerp(&b, &pre, &post, 0.0).is_equal_approx(&a));
        assert!(a.cubic_slerp(&b, &pre, &post, 1.0).is_equal_approx(&b));

        let mid = a.cubic_slerp(&b, &pre, &post, 0.5);
        assert!(mid.is_normalized());
        assert!(mid.is_equal_approx(&Quaternion::from_axis_angle(&axis, 0.25)));
    }

    #[test]
    fn test_euler_round_trips() {
        let euler = v3(0.3, -0.8, 1.2);
        let yxz = Quaternion::from_euler(&euler);
        assert!(yxz.is_normalized());
        assert_vec_close(yxz.get_euler(), euler);

        let xyz = Quaternion::from_euler_xyz(&euler);
        assert!(xyz.is_normalized());
        assert_vec_close(xyz.get_euler_xyz(), euler);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "quaternion must be normalized")]
    fn test_euler_xyz_requires_unit_quaternion() {
        let _ = Quaternion::new(0.0_f64, 0.0, 0.0, 2.0).get_euler_xyz();
    }

    #[test]
    fn test_euler_matches_basis() {
        let euler = v3(-0.4, 0.9, 0.1);
        let v = v3(1.0, 2.0, 3.0);
        let q = Quaternion::from_euler_yxz(&euler);
        assert_vec_close(q.xform(&v), Basis::from_euler(&euler).xform(&v));

        let q = Quaternion::from_euler_xyz(&euler);
        let mut b = Basis::identity();
        b.set_euler_xyz(&euler);
        assert_vec_close(q.xform(&v), b.xform(&v));
    }

    #[test]
    fn test_angle_to() {
        let a = Quaternion::from_axis_angle(&v3(0.0, 1.0, 0.0), 0.25);
        let b = Quaternion::from_axis_angle(&v3(0.0, 1.0, 0.0), 1.0);
        assert_relative_eq!(a.angle_to(&b), 0.75, epsilon = 1e-9);
        assert_relative_eq!(a.angle_to(&-a), 0.0, epsilon = 1e-6);
        let c = Quaternion::from_axis_angle(&v3(0.0, 1.0, 0.0), PI);
        assert_relative_eq!(Quaternion::identity().angle_to(&c), PI, epsilon = 1e-6);
    }

    #[test]
    fn test_vector_product_and_arithmetic() {
        let q = Quaternion::new(1.0_f32, 2.0, 3.0, 4.0);
        let p = q * Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(p, q * Quaternion::new(1.0, 0.0, 0.0, 0.0));

        assert_eq!(q + q, 2.0 * q);
        assert_eq!(q - q, Quaternion::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(q / 2.0, Quaternion::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(q.dot(&q), 30.0);
        let array: [f32; 4] = q.into();
        assert_eq!(Quaternion::from(array), q);
    }

    #[test]
    fn test_quaternion_bincode_roundtrip() {
        let q = Quaternion::new(0.1_f32, -0.2, 0.3, 0.9);
        let config = bincode::config::standard();
        let encoded = bincode::serde::encode_to_vec(q, config).unwrap();
        let (decoded, _): (Quaternion<f32>, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(q, decoded);
    }
}
