// src/numerics/types/basis.rs
// 3x3 linear frame, generic over FloatingPoint (default f32).
//
// Storage is three row vectors. `xform` dots each row with the input, while
// `get_axis(i)` gathers the i-th column (the image of the i-th unit vector).

use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::quaternion::Quaternion;
use super::traits::FloatingPoint;
use super::vector::Vector3;
use crate::numerics::scalar;

/// Order in which elemental rotations compose for Euler conversions.
///
/// `Xyz` means the matrix `X(ax) * Y(ay) * Z(az)`, so Z acts first on a
/// vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EulerOrder {
    Xyz,
    Xzy,
    Yzx,
    #[default]
    Yxz,
    Zxy,
    Zyx,
}

/// Basis is a 3x3 matrix stored as rows.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Basis<T: FloatingPoint = f32> {
    pub rows: [Vector3<T>; 3],
}

impl<T> Serialize for Basis<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let rows: [[T; 3]; 3] = [
            self.rows[0].into(),
            self.rows[1].into(),
            self.rows[2].into(),
        ];
        rows.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Basis<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let [r0, r1, r2] = <[[T; 3]; 3]>::deserialize(deserializer)?;
        Ok(Basis::from_rows(r0.into(), r1.into(), r2.into()))
    }
}

impl<T: FloatingPoint> Default for Basis<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatingPoint> Basis<T> {
    /// Builds a basis from nine scalars given row by row.
    #[allow(clippy::too_many_arguments)]
    pub fn new(xx: T, xy: T, xz: T, yx: T, yy: T, yz: T, zx: T, zy: T, zz: T) -> Self {
        Self::from_rows(
            Vector3::new(xx, xy, xz),
            Vector3::new(yx, yy, yz),
            Vector3::new(zx, zy, zz),
        )
    }

    pub fn identity() -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::new(l, o, o, o, l, o, o, o, l)
    }

    pub fn from_rows(row0: Vector3<T>, row1: Vector3<T>, row2: Vector3<T>) -> Self {
        Self {
            rows: [row0, row1, row2],
        }
    }

    /// Builds a basis whose axes (columns) are `x`, `y` and `z`.
    pub fn from_columns(x: Vector3<T>, y: Vector3<T>, z: Vector3<T>) -> Self {
        let mut b = Self::identity();
        b.set_axes(&x, &y, &z);
        b
    }

    /// Rotation of `phi` radians around the normalized `axis`.
    pub fn from_axis_angle(axis: &Vector3<T>, phi: T) -> Self {
        let mut b = Self::identity();
        b.set_axis_angle(axis, phi);
        b
    }

    pub fn from_axis_angle_scale(axis: &Vector3<T>, phi: T, scale: &Vector3<T>) -> Self {
        let mut b = Self::identity();
        b.set_axis_angle_scale(axis, phi, scale);
        b
    }

    /// Rotation from YXZ Euler angles.
    pub fn from_euler(euler: &Vector3<T>) -> Self {
        let mut b = Self::identity();
        b.set_euler(euler);
        b
    }

    pub fn from_euler_scale(euler: &Vector3<T>, scale: &Vector3<T>) -> Self {
        let mut b = Self::identity();
        b.set_euler_scale(euler, scale);
        b
    }

    pub fn from_euler_order(order: EulerOrder, euler: &Vector3<T>) -> Self {
        let mut b = Self::identity();
        b.set_euler_order(order, euler);
        b
    }

    pub fn from_quaternion(q: &Quaternion<T>) -> Self {
        let mut b = Self::identity();
        b.set_quaternion(q);
        b
    }

    pub fn from_quaternion_scale(q: &Quaternion<T>, scale: &Vector3<T>) -> Self {
        let mut b = Self::identity();
        b.set_quaternion_scale(q, scale);
        b
    }

    /// An orthonormal frame whose third row is the unit vector `z`.
    pub fn from_z(z: &Vector3<T>) -> Self {
        let one = T::one();
        let (row0, row1) = if z.z.abs() > T::from_f64(core::f64::consts::FRAC_1_SQRT_2) {
            // Pick the first row in the y-z plane.
            let a = z.y * z.y + z.z * z.z;
            let k = one / a.sqrt();
            let row0 = Vector3::new(T::zero(), -z.z * k, z.y * k);
            (row0, Vector3::new(a * k, -z.x * row0.z, z.x * row0.y))
        } else {
            // Pick the first row in the x-y plane.
            let a = z.x * z.x + z.y * z.y;
            let k = one / a.sqrt();
            let row0 = Vector3::new(-z.y * k, z.x * k, T::zero());
            (row0, Vector3::new(-z.z * row0.y, z.z * row0.x, a * k))
        };
        Self::from_rows(row0, row1, *z)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set(&mut self, xx: T, xy: T, xz: T, yx: T, yy: T, yz: T, zx: T, zy: T, zz: T) {
        *self = Self::new(xx, xy, xz, yx, yy, yz, zx, zy, zz);
    }

    pub fn set_zero(&mut self) {
        self.rows = [Vector3::zero(); 3];
    }

    // Axis (column) and row access

    /// The i-th column: where the i-th unit vector lands under `xform`.
    pub fn get_axis(&self, axis: usize) -> Vector3<T> {
        debug_assert!(axis < 3, "Basis axis {} out of range", axis);
        Vector3::new(self.rows[0][axis], self.rows[1][axis], self.rows[2][axis])
    }

    pub fn set_axis(&mut self, axis: usize, value: &Vector3<T>) {
        debug_assert!(axis < 3, "Basis axis {} out of range", axis);
        self.rows[0][axis] = value.x;
        self.rows[1][axis] = value.y;
        self.rows[2][axis] = value.z;
    }

    pub fn set_axes(&mut self, x: &Vector3<T>, y: &Vector3<T>, z: &Vector3<T>) {
        self.set_axis(0, x);
        self.set_axis(1, y);
        self.set_axis(2, z);
    }

    pub fn get_column(&self, index: usize) -> Vector3<T> {
        self.get_axis(index)
    }

    pub fn get_row(&self, row: usize) -> Vector3<T> {
        debug_assert!(row < 3, "Basis row {} out of range", row);
        self.rows[row]
    }

    pub fn set_row(&mut self, row: usize, value: &Vector3<T>) {
        debug_assert!(row < 3, "Basis row {} out of range", row);
        self.rows[row] = *value;
    }

    pub fn get_main_diagonal(&self) -> Vector3<T> {
        Vector3::new(self.rows[0].x, self.rows[1].y, self.rows[2].z)
    }

    /// Replaces the whole basis with `diag(diagonal)`.
    pub fn set_diagonal(&mut self, diagonal: &Vector3<T>) {
        *self = diagonal.to_diagonal_matrix();
    }

    // Transforms

    /// Dot product of `v` with the first column.
    pub fn tdotx(&self, v: &Vector3<T>) -> T {
        self.rows[0].x * v.x + self.rows[1].x * v.y + self.rows[2].x * v.z
    }

    pub fn tdoty(&self, v: &Vector3<T>) -> T {
        self.rows[0].y * v.x + self.rows[1].y * v.y + self.rows[2].y * v.z
    }

    pub fn tdotz(&self, v: &Vector3<T>) -> T {
        self.rows[0].z * v.x + self.rows[1].z * v.y + self.rows[2].z * v.z
    }

    pub fn xform(&self, v: &Vector3<T>) -> Vector3<T> {
        Vector3::new(self.rows[0].dot(v), self.rows[1].dot(v), self.rows[2].dot(v))
    }

    /// Multiplies by the transpose. This is the inverse transform only when
    /// the basis is orthonormal.
    pub fn xform_inv(&self, v: &Vector3<T>) -> Vector3<T> {
        Vector3::new(self.tdotx(v), self.tdoty(v), self.tdotz(v))
    }

    /// `self^T * m`.
    pub fn transpose_xform(&self, m: &Self) -> Self {
        let mut out = Self::identity();
        for i in 0..3 {
            for j in 0..3 {
                out.rows[i][j] = self.rows[0][i] * m.rows[0][j]
                    + self.rows[1][i] * m.rows[1][j]
                    + self.rows[2][i] * m.rows[2][j];
            }
        }
        out
    }

    /// Basis for transforming normals: the inverse transpose.
    pub fn get_normal_xform_basis(&self) -> Self {
        self.inverse().transposed()
    }

    /// Transforms a normal and renormalizes it. `self` must already be a
    /// normal basis (see [`Basis::get_normal_xform_basis`]).
    pub fn xform_normal_fast(&self, normal: &Vector3<T>) -> Vector3<T> {
        self.xform(normal).normalized()
    }

    pub fn xform_normal(&self, normal: &Vector3<T>) -> Vector3<T> {
        self.get_normal_xform_basis().xform_normal_fast(normal)
    }

    // Matrix algebra

    pub fn determinant(&self) -> T {
        let e = &self.rows;
        e[0][0] * (e[1][1] * e[2][2] - e[2][1] * e[1][2])
            - e[1][0] * (e[0][1] * e[2][2] - e[2][1] * e[0][2])
            + e[2][0] * (e[0][1] * e[1][2] - e[1][1] * e[0][2])
    }

    /// Inverts in place through the adjugate. The basis must not be
    /// singular.
    pub fn invert(&mut self) {
        let e = self.rows;
        let cofac = |r1: usize, c1: usize, r2: usize, c2: usize| {
            e[r1][c1] * e[r2][c2] - e[r1][c2] * e[r2][c1]
        };

        let co = [cofac(1, 1, 2, 2), cofac(1, 2, 2, 0), cofac(1, 0, 2, 1)];
        let det = e[0][0] * co[0] + e[0][1] * co[1] + e[0][2] * co[2];
        debug_assert!(det != T::zero(), "cannot invert a singular basis");

        let s = T::one() / det;
        self.set(
            co[0] * s,
            cofac(0, 2, 2, 1) * s,
            cofac(0, 1, 1, 2) * s,
            co[1] * s,
            cofac(0, 0, 2, 2) * s,
            cofac(0, 2, 1, 0) * s,
            co[2] * s,
            cofac(0, 1, 2, 0) * s,
            cofac(0, 0, 1, 1) * s,
        );
    }

    pub fn inverse(&self) -> Self {
        let mut b = *self;
        b.invert();
        b
    }

    pub fn transpose(&mut self) {
        let e = &mut self.rows;
        let (a, b) = (e[0][1], e[1][0]);
        e[0][1] = b;
        e[1][0] = a;
        let (a, b) = (e[0][2], e[2][0]);
        e[0][2] = b;
        e[2][0] = a;
        let (a, b) = (e[1][2], e[2][1]);
        e[1][2] = b;
        e[2][1] = a;
    }

    pub fn transposed(&self) -> Self {
        let mut b = *self;
        b.transpose();
        b
    }

    /// Gram-Schmidt on the axes, x first.
    pub fn orthonormalize(&mut self) {
        debug_assert!(
            self.determinant() != T::zero(),
            "cannot orthonormalize a singular basis"
        );

        let mut x = self.get_axis(0);
        let mut y = self.get_axis(1);
        let mut z = self.get_axis(2);

        x.normalize();
        y = y - x * x.dot(&y);
        y.normalize();
        z = z - x * x.dot(&z) - y * y.dot(&z);
        z.normalize();

        self.set_axes(&x, &y, &z);
    }

    pub fn orthonormalized(&self) -> Self {
        let mut b = *self;
        b.orthonormalize();
        b
    }

    pub fn is_orthogonal(&self) -> bool {
        (*self * self.transposed()).is_equal_approx(&Self::identity())
    }

    pub fn is_diagonal(&self) -> bool {
        let e = &self.rows;
        scalar::is_zero_approx(e[0][1])
            && scalar::is_zero_approx(e[0][2])
            && scalar::is_zero_approx(e[1][0])
            && scalar::is_zero_approx(e[1][2])
            && scalar::is_zero_approx(e[2][0])
            && scalar::is_zero_approx(e[2][1])
    }

    /// Orthogonal with determinant +1.
    pub fn is_rotation(&self) -> bool {
        scalar::is_equal_approx_tolerance(self.determinant(), T::one(), T::UNIT_EPSILON)
            && self.is_orthogonal()
    }

    pub fn is_symmetric(&self) -> bool {
        let e = &self.rows;
        scalar::is_equal_approx(e[0][1], e[1][0])
            && scalar::is_equal_approx(e[0][2], e[2][0])
            && scalar::is_equal_approx(e[1][2], e[2][1])
    }

    pub fn is_equal_approx(&self, other: &Self) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.is_equal_approx(b))
    }

    /// Element-wise ratio comparison, for bases with large entries.
    pub fn is_equal_approx_ratio(&self, other: &Self, epsilon: T) -> bool {
        (0..3).all(|i| {
            (0..3).all(|j| {
                scalar::is_equal_approx_ratio_eps(self.rows[i][j], other.rows[i][j], epsilon)
            })
        })
    }

    // Rotation and scale, global frame

    pub fn rotate(&mut self, axis: &Vector3<T>, phi: T) {
        *self = self.rotated(axis, phi);
    }

    /// Applies a rotation around `axis` after this basis.
    pub fn rotated(&self, axis: &Vector3<T>, phi: T) -> Self {
        Self::from_axis_angle(axis, phi) * *self
    }

    pub fn rotate_euler(&mut self, euler: &Vector3<T>) {
        *self = self.rotated_euler(euler);
    }

    pub fn rotated_euler(&self, euler: &Vector3<T>) -> Self {
        Self::from_euler(euler) * *self
    }

    pub fn rotate_quaternion(&mut self, q: &Quaternion<T>) {
        *self = self.rotated_quaternion(q);
    }

    pub fn rotated_quaternion(&self, q: &Quaternion<T>) -> Self {
        Self::from_quaternion(q) * *self
    }

    pub fn rotate_local(&mut self, axis: &Vector3<T>, phi: T) {
        *self = self.rotated_local(axis, phi);
    }

    /// Applies a rotation around `axis` before this basis, i.e. in its own
    /// frame.
    pub fn rotated_local(&self, axis: &Vector3<T>, phi: T) -> Self {
        *self * Self::from_axis_angle(axis, phi)
    }

    /// Scales the rows: `diag(scale) * self`.
    pub fn scale(&mut self, scale: &Vector3<T>) {
        self.rows[0] *= scale.x;
        self.rows[1] *= scale.y;
        self.rows[2] *= scale.z;
    }

    pub fn scaled(&self, scale: &Vector3<T>) -> Self {
        let mut b = *self;
        b.scale(scale);
        b
    }

    pub fn scale_local(&mut self, scale: &Vector3<T>) {
        *self = self.scaled_local(scale);
    }

    /// `self * diag(scale)`.
    pub fn scaled_local(&self, scale: &Vector3<T>) -> Self {
        *self * scale.to_diagonal_matrix()
    }

    /// Lengths of the axes, negated when the basis flips handedness.
    pub fn get_scale(&self) -> Vector3<T> {
        self.get_scale_abs() * self.determinant().sgn()
    }

    pub fn get_scale_abs(&self) -> Vector3<T> {
        Vector3::new(
            self.get_axis(0).length(),
            self.get_axis(1).length(),
            self.get_axis(2).length(),
        )
    }

    /// Row lengths with the determinant's sign.
    pub fn get_scale_local(&self) -> Vector3<T> {
        Vector3::new(
            self.rows[0].length(),
            self.rows[1].length(),
            self.rows[2].length(),
        ) * self.determinant().sgn()
    }

    /// The pure rotation left after removing scale and reflection.
    fn rotation_part(&self) -> Self {
        let mut m = self.orthonormalized();
        if m.determinant() < T::zero() {
            m.scale(&Vector3::splat(-T::one()));
        }
        m
    }

    pub fn get_rotation_euler(&self) -> Vector3<T> {
        self.rotation_part().get_euler()
    }

    pub fn get_rotation_quat(&self) -> Quaternion<T> {
        self.rotation_part().get_quat()
    }

    pub fn get_rotation_axis_angle(&self) -> (Vector3<T>, T) {
        self.rotation_part().get_axis_angle()
    }

    pub fn set_axis_angle(&mut self, axis: &Vector3<T>, phi: T) {
        debug_assert!(axis.is_normalized(), "rotation axis must be normalized");
        let one = T::one();
        let axis_sq = Vector3::new(axis.x * axis.x, axis.y * axis.y, axis.z * axis.z);
        let cosine = phi.cos();
        let sine = phi.sin();
        let t = one - cosine;
        let e = &mut self.rows;

        e[0][0] = axis_sq.x + cosine * (one - axis_sq.x);
        e[1][1] = axis_sq.y + cosine * (one - axis_sq.y);
        e[2][2] = axis_sq.z + cosine * (one - axis_sq.z);

        let xyzt = axis.x * axis.y * t;
        let zyxs = axis.z * sine;
        e[0][1] = xyzt - zyxs;
        e[1][0] = xyzt + zyxs;

        let xyzt = axis.x * axis.z * t;
        let zyxs = axis.y * sine;
        e[0][2] = xyzt + zyxs;
        e[2][0] = xyzt - zyxs;

        let xyzt = axis.y * axis.z * t;
        let zyxs = axis.x * sine;
        e[1][2] = xyzt - zyxs;
        e[2][1] = xyzt + zyxs;
    }

    pub fn set_axis_angle_scale(&mut self, axis: &Vector3<T>, phi: T, scale: &Vector3<T>) {
        self.set_diagonal(scale);
        self.rotate(axis, phi);
    }

    pub fn set_euler_scale(&mut self, euler: &Vector3<T>, scale: &Vector3<T>) {
        self.set_diagonal(scale);
        self.rotate_euler(euler);
    }

    pub fn set_quaternion_scale(&mut self, q: &Quaternion<T>, scale: &Vector3<T>) {
        self.set_diagonal(scale);
        self.rotate_quaternion(q);
    }

    // Quaternion and axis-angle extraction

    pub fn set_quaternion(&mut self, q: &Quaternion<T>) {
        let one = T::one();
        let s = T::from_f64(2.0) / q.length_squared();
        let (xs, ys, zs) = (q.x * s, q.y * s, q.z * s);
        let (wx, wy, wz) = (q.w * xs, q.w * ys, q.w * zs);
        let (xx, xy, xz) = (q.x * xs, q.x * ys, q.x * zs);
        let (yy, yz, zz) = (q.y * ys, q.y * zs, q.z * zs);

        self.set(
            one - (yy + zz),
            xy - wz,
            xz + wy,
            xy + wz,
            one - (xx + zz),
            yz - wx,
            xz - wy,
            yz + wx,
            one - (xx + yy),
        );
    }

    /// Quaternion of a pure rotation basis. Scaled bases should go through
    /// [`Basis::get_rotation_quat`].
    pub fn get_quat(&self) -> Quaternion<T> {
        let e = &self.rows;
        let half = T::from_f64(0.5);
        let trace = e[0][0] + e[1][1] + e[2][2];
        let mut temp = [T::zero(); 4];

        if trace > T::zero() {
            let s = (trace + T::one()).sqrt();
            temp[3] = s * half;
            let s = half / s;
            temp[0] = (e[2][1] - e[1][2]) * s;
            temp[1] = (e[0][2] - e[2][0]) * s;
            temp[2] = (e[1][0] - e[0][1]) * s;
        } else {
            let i = if e[0][0] < e[1][1] {
                if e[1][1] < e[2][2] {
                    2
                } else {
                    1
                }
            } else if e[0][0] < e[2][2] {
                2
            } else {
                0
            };
            let j = (i + 1) % 3;
            let k = (i + 2) % 3;

            let s = (e[i][i] - e[j][j] - e[k][k] + T::one()).sqrt();
            temp[i] = s * half;
            let s = half / s;
            temp[3] = (e[k][j] - e[j][k]) * s;
            temp[j] = (e[j][i] + e[i][j]) * s;
            temp[k] = (e[k][i] + e[i][k]) * s;
        }

        Quaternion::new(temp[0], temp[1], temp[2], temp[3])
    }

    /// Axis and angle of a pure rotation basis.
    ///
    /// The identity reports the Y axis with a zero angle; half turns are
    /// resolved from the symmetric part of the matrix.
    pub fn get_axis_angle(&self) -> (Vector3<T>, T) {
        let e = &self.rows;
        let epsilon = T::from_f64(0.01);
        let epsilon2 = T::from_f64(0.1);
        let two = T::from_f64(2.0);
        let four = T::from_f64(4.0);
        let sqrt12 = T::from_f64(core::f64::consts::FRAC_1_SQRT_2);

        if (e[1][0] - e[0][1]).abs() < epsilon
            && (e[2][0] - e[0][2]).abs() < epsilon
            && (e[2][1] - e[1][2]).abs() < epsilon
        {
            // Symmetric: either the identity or a half turn.
            if (e[1][0] + e[0][1]).abs() < epsilon2
                && (e[2][0] + e[0][2]).abs() < epsilon2
                && (e[2][1] + e[1][2]).abs() < epsilon2
                && (e[0][0] + e[1][1] + e[2][2] - T::from_f64(3.0)).abs() < epsilon2
            {
                return (Vector3::new(T::zero(), T::one(), T::zero()), T::zero());
            }

            let xx = (e[0][0] + T::one()) / two;
            let yy = (e[1][1] + T::one()) / two;
            let zz = (e[2][2] + T::one()) / two;
            let xy = (e[1][0] + e[0][1]) / four;
            let xz = (e[2][0] + e[0][2]) / four;
            let yz = (e[2][1] + e[1][2]) / four;

            let axis = if xx > yy && xx > zz {
                if xx < epsilon {
                    Vector3::new(T::zero(), sqrt12, sqrt12)
                } else {
                    let x = xx.sqrt();
                    Vector3::new(x, xy / x, xz / x)
                }
            } else if yy > zz {
                if yy < epsilon {
                    Vector3::new(sqrt12, T::zero(), sqrt12)
                } else {
                    let y = yy.sqrt();
                    Vector3::new(xy / y, y, yz / y)
                }
            } else if zz < epsilon {
                Vector3::new(sqrt12, sqrt12, T::zero())
            } else {
                let z = zz.sqrt();
                Vector3::new(xz / z, yz / z, z)
            };
            return (axis, T::PI);
        }

        let s = ((e[1][2] - e[2][1]) * (e[1][2] - e[2][1])
            + (e[2][0] - e[0][2]) * (e[2][0] - e[0][2])
            + (e[0][1] - e[1][0]) * (e[0][1] - e[1][0]))
            .sqrt();
        let angle = ((e[0][0] + e[1][1] + e[2][2] - T::one()) / two).acos();
        let axis = Vector3::new(
            (e[2][1] - e[1][2]) / s,
            (e[0][2] - e[2][0]) / s,
            (e[1][0] - e[0][1]) / s,
        );
        (axis, angle)
    }

    // Euler angles

    pub fn get_euler(&self) -> Vector3<T> {
        self.get_euler_yxz()
    }

    pub fn set_euler(&mut self, euler: &Vector3<T>) {
        self.set_euler_yxz(euler);
    }

    pub fn get_euler_order(&self, order: EulerOrder) -> Vector3<T> {
        match order {
            EulerOrder::Xyz => self.get_euler_xyz(),
            EulerOrder::Xzy => self.get_euler_xzy(),
            EulerOrder::Yzx => self.get_euler_yzx(),
            EulerOrder::Yxz => self.get_euler_yxz(),
            EulerOrder::Zxy => self.get_euler_zxy(),
            EulerOrder::Zyx => self.get_euler_zyx(),
        }
    }

    pub fn set_euler_order(&mut self, order: EulerOrder, euler: &Vector3<T>) {
        let (x, y, z) = elemental_rotations(euler);
        *self = match order {
            EulerOrder::Xyz => x * (y * z),
            EulerOrder::Xzy => x * z * y,
            EulerOrder::Yzx => y * z * x,
            EulerOrder::Yxz => y * x * z,
            EulerOrder::Zxy => z * x * y,
            EulerOrder::Zyx => z * y * x,
        };
    }

    pub fn set_euler_xyz(&mut self, euler: &Vector3<T>) {
        self.set_euler_order(EulerOrder::Xyz, euler);
    }

    pub fn set_euler_xzy(&mut self, euler: &Vector3<T>) {
        self.set_euler_order(EulerOrder::Xzy, euler);
    }

    pub fn set_euler_yzx(&mut self, euler: &Vector3<T>) {
        self.set_euler_order(EulerOrder::Yzx, euler);
    }

    pub fn set_euler_yxz(&mut self, euler: &Vector3<T>) {
        self.set_euler_order(EulerOrder::Yxz, euler);
    }

    pub fn set_euler_zxy(&mut self, euler: &Vector3<T>) {
        self.set_euler_order(EulerOrder::Zxy, euler);
    }

    pub fn set_euler_zyx(&mut self, euler: &Vector3<T>) {
        self.set_euler_order(EulerOrder::Zyx, euler);
    }

    // rot =  cy*cz          -cy*sz           sy
    //        cz*sx*sy+cx*sz  cx*cz-sx*sy*sz -cy*sx
    //       -cx*cz*sy+sx*sz  cz*sx+cx*sy*sz  cx*cy
    pub fn get_euler_xyz(&self) -> Vector3<T> {
        let e = &self.rows;
        let (zero, one) = (T::zero(), T::one());
        let half_pi = T::PI * T::from_f64(0.5);
        let sy = e[0][2];

        if sy < one - T::CMP_EPSILON {
            if sy > -(one - T::CMP_EPSILON) {
                if e[1][0] == zero
                    && e[0][1] == zero
                    && e[1][2] == zero
                    && e[2][1] == zero
                    && e[1][1] == one
                {
                    // Pure Y rotation.
                    Vector3::new(zero, e[0][2].atan2(e[0][0]), zero)
                } else {
                    Vector3::new(
                        (-e[1][2]).atan2(e[2][2]),
                        sy.asin(),
                        (-e[0][1]).atan2(e[0][0]),
                    )
                }
            } else {
                Vector3::new(e[2][1].atan2(e[1][1]), -half_pi, zero)
            }
        } else {
            Vector3::new(e[2][1].atan2(e[1][1]), half_pi, zero)
        }
    }

    // rot =  cz*cy             -sz             cz*sy
    //        sx*sy+cx*cy*sz    cx*cz           cx*sz*sy-cy*sx
    //        cy*sx*sz          cz*sx           cx*cy+sx*sz*sy
    pub fn get_euler_xzy(&self) -> Vector3<T> {
        let e = &self.rows;
        let (zero, one) = (T::zero(), T::one());
        let half_pi = T::PI * T::from_f64(0.5);
        let sz = e[0][1];

        if sz < one - T::CMP_EPSILON {
            if sz > -(one - T::CMP_EPSILON) {
                Vector3::new(
                    e[2][1].atan2(e[1][1]),
                    e[0][2].atan2(e[0][0]),
                    (-sz).asin(),
                )
            } else {
                Vector3::new(-e[1][2].atan2(e[2][2]), zero, half_pi)
            }
        } else {
            Vector3::new(-e[1][2].atan2(e[2][2]), zero, -half_pi)
        }
    }

    // rot =  cy*cz             sy*sx-cy*cx*sz     cx*sy+cy*sz*sx
    //        sz                cz*cx              -cz*sx
    //        -cz*sy            cy*sx+cx*sy*sz     cy*cx-sy*sz*sx
    pub fn get_euler_yzx(&self) -> Vector3<T> {
        let e = &self.rows;
        let (zero, one) = (T::zero(), T::one());
        let half_pi = T::PI * T::from_f64(0.5);
        let sz = e[1][0];

        if sz < one - T::CMP_EPSILON {
            if sz > -(one - T::CMP_EPSILON) {
                Vector3::new(
                    (-e[1][2]).atan2(e[1][1]),
                    (-e[2][0]).atan2(e[0][0]),
                    sz.asin(),
                )
            } else {
                Vector3::new(e[2][1].atan2(e[2][2]), zero, -half_pi)
            }
        } else {
            Vector3::new(e[2][1].atan2(e[2][2]), zero, half_pi)
        }
    }

    // rot =  cy*cz+sy*sx*sz    cz*sy*sx-cy*sz        cx*sy
    //        cx*sz             cx*cz                 -sx
    //        cy*sx*sz-cz*sy    cy*cz*sx+sy*sz        cy*cx
    pub fn get_euler_yxz(&self) -> Vector3<T> {
        let e = &self.rows;
        let (zero, one) = (T::zero(), T::one());
        let half_pi = T::PI * T::from_f64(0.5);
        let m12 = e[1][2];

        if m12 < one - T::CMP_EPSILON {
            if m12 > -(one - T::CMP_EPSILON) {
                if e[1][0] == zero
                    && e[0][1] == zero
                    && e[0][2] == zero
                    && e[2][0] == zero
                    && e[0][0] == one
                {
                    // Pure X rotation.
                    Vector3::new((-m12).atan2(e[1][1]), zero, zero)
                } else {
                    Vector3::new(
                        (-m12).asin(),
                        e[0][2].atan2(e[2][2]),
                        e[1][0].atan2(e[1][1]),
                    )
                }
            } else {
                Vector3::new(half_pi, e[0][1].atan2(e[0][0]), zero)
            }
        } else {
            Vector3::new(-half_pi, -e[0][1].atan2(e[0][0]), zero)
        }
    }

    // rot =  cz*cy-sz*sx*sy    -cx*sz                cz*sy+cy*sz*sx
    //        cy*sz+cz*sx*sy    cz*cx                 sz*sy-cz*cy*sx
    //        -cx*sy            sx                    cx*cy
    pub fn get_euler_zxy(&self) -> Vector3<T> {
        let e = &self.rows;
        let (zero, one) = (T::zero(), T::one());
        let half_pi = T::PI * T::from_f64(0.5);
        let sx = e[2][1];

        if sx < one - T::CMP_EPSILON {
            if sx > -(one - T::CMP_EPSILON) {
                Vector3::new(
                    sx.asin(),
                    (-e[2][0]).atan2(e[2][2]),
                    (-e[0][1]).atan2(e[1][1]),
                )
            } else {
                Vector3::new(-half_pi, e[0][2].atan2(e[0][0]), zero)
            }
        } else {
            Vector3::new(half_pi, e[0][2].atan2(e[0][0]), zero)
        }
    }

    // rot =  cz*cy             cz*sy*sx-cx*sz        sz*sx+cz*cx*sy
    //        cy*sz             cz*cx+sz*sy*sx        cx*sz*sy-cz*sx
    //        -sy               cy*sx                 cy*cx
    pub fn get_euler_zyx(&self) -> Vector3<T> {
        let e = &self.rows;
        let (zero, one) = (T::zero(), T::one());
        let half_pi = T::PI * T::from_f64(0.5);
        let sy = e[2][0];

        if sy < one - T::CMP_EPSILON {
            if sy > -(one - T::CMP_EPSILON) {
                Vector3::new(
                    e[2][1].atan2(e[2][2]),
                    (-sy).asin(),
                    e[1][0].atan2(e[0][0]),
                )
            } else {
                Vector3::new(zero, half_pi, -e[0][1].atan2(e[1][1]))
            }
        } else {
            Vector3::new(zero, -half_pi, -e[0][1].atan2(e[1][1]))
        }
    }

    // Interpolation

    /// Row-wise linear interpolation.
    pub fn lerp(&self, to: &Self, weight: T) -> Self {
        Self::from_rows(
            self.rows[0].lerp(&to.rows[0], weight),
            self.rows[1].lerp(&to.rows[1], weight),
            self.rows[2].lerp(&to.rows[2], weight),
        )
    }

    /// Spherical interpolation of the rotation with linear interpolation of
    /// the row lengths.
    pub fn slerp(&self, to: &Self, weight: T) -> Self {
        let from = self.get_rotation_quat();
        let target = to.get_rotation_quat();
        let mut b = Self::from_quaternion(&from.slerp(&target, weight));
        for i in 0..3 {
            b.rows[i] *= scalar::lerp(self.rows[i].length(), to.rows[i].length(), weight);
        }
        b
    }
}

/// Elemental rotation matrices around X, Y and Z.
fn elemental_rotations<T: FloatingPoint>(euler: &Vector3<T>) -> (Basis<T>, Basis<T>, Basis<T>) {
    let (o, l) = (T::zero(), T::one());

    let (c, s) = (euler.x.cos(), euler.x.sin());
    let x = Basis::new(l, o, o, o, c, -s, o, s, c);

    let (c, s) = (euler.y.cos(), euler.y.sin());
    let y = Basis::new(c, o, s, o, l, o, -s, o, c);

    let (c, s) = (euler.z.cos(), euler.z.sin());
    let z = Basis::new(c, -s, o, s, c, o, o, o, l);

    (x, y, z)
}

impl<T: FloatingPoint> Index<usize> for Basis<T> {
    type Output = Vector3<T>;

    fn index(&self, row: usize) -> &Vector3<T> {
        &self.rows[row]
    }
}

impl<T: FloatingPoint> IndexMut<usize> for Basis<T> {
    fn index_mut(&mut self, row: usize) -> &mut Vector3<T> {
        &mut self.rows[row]
    }
}

/// Matrix product: `(a * b).xform(v) == a.xform(&b.xform(v))`.
impl<T: FloatingPoint> Mul for Basis<T> {
    type Output = Self;

    fn mul(self, m: Self) -> Self {
        let row = |r: &Vector3<T>| Vector3::new(m.tdotx(r), m.tdoty(r), m.tdotz(r));
        Self::from_rows(row(&self.rows[0]), row(&self.rows[1]), row(&self.rows[2]))
    }
}

impl<T: FloatingPoint> MulAssign for Basis<T> {
    fn mul_assign(&mut self, m: Self) {
        *self = *self * m;
    }
}

impl<T: FloatingPoint> Mul<T> for Basis<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::from_rows(self.rows[0] * s, self.rows[1] * s, self.rows[2] * s)
    }
}

impl<T: FloatingPoint> MulAssign<T> for Basis<T> {
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Basis<T> {
    type Output = Vector3<T>;

    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.xform(&v)
    }
}

impl<T: FloatingPoint> Add for Basis<T> {
    type Output = Self;

    fn add(self, m: Self) -> Self {
        Self::from_rows(
            self.rows[0] + m.rows[0],
            self.rows[1] + m.rows[1],
            self.rows[2] + m.rows[2],
        )
    }
}

impl<T: FloatingPoint> AddAssign for Basis<T> {
    fn add_assign(&mut self, m: Self) {
        *self = *self + m;
    }
}

impl<T: FloatingPoint> Sub for Basis<T> {
    type Output = Self;

    fn sub(self, m: Self) -> Self {
        Self::from_rows(
            self.rows[0] - m.rows[0],
            self.rows[1] - m.rows[1],
            self.rows[2] - m.rows[2],
        )
    }
}

impl<T: FloatingPoint> SubAssign for Basis<T> {
    fn sub_assign(&mut self, m: Self) {
        *self = *self - m;
    }
}

impl<T: FloatingPoint> From<Quaternion<T>> for Basis<T> {
    fn from(q: Quaternion<T>) -> Self {
        Self::from_quaternion(&q)
    }
}
