// tests/integration/properties.rs
//! Generated-input checks of the algebraic guarantees

use fulgor_math::numerics::half as half_float;
use fulgor_math::numerics::scalar;
use fulgor_math::{Basis, Quaternion, Vector2, Vector3};
use proptest::prelude::*;

fn component() -> impl Strategy<Value = f64> {
    -100.0..100.0_f64
}

fn vector3() -> impl Strategy<Value = Vector3<f64>> {
    (component(), component(), component()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn vector2() -> impl Strategy<Value = Vector2<f64>> {
    (component(), component()).prop_map(|(x, y)| Vector2::new(x, y))
}

fn unit_axis() -> impl Strategy<Value = Vector3<f64>> {
    vector3()
        .prop_filter("axis must not be degenerate", |v| v.length() > 1e-3)
        .prop_map(|v| v.normalized())
}

fn euler() -> impl Strategy<Value = Vector3<f64>> {
    let angle = -std::f64::consts::PI..std::f64::consts::PI;
    (angle.clone(), angle.clone(), angle).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn unit_quaternion() -> impl Strategy<Value = Quaternion<f64>> {
    euler().prop_map(|e| Quaternion::from_euler(&e))
}

fn basis() -> impl Strategy<Value = Basis<f64>> {
    (euler(), (0.5..2.0_f64, 0.5..2.0_f64, 0.5..2.0_f64))
        .prop_map(|(e, (sx, sy, sz))| Basis::from_euler_scale(&e, &Vector3::new(sx, sy, sz)))
}

proptest! {
    #[test]
    fn prop_normalized_is_unit_and_parallel(v in vector3()) {
        prop_assume!(v.length() > 1e-6);
        let n = v.normalized();
        prop_assert!((n.length() - 1.0).abs() < 1e-12);
        prop_assert!(n.is_normalized());
        prop_assert!(n.cross(&v).length() <= 1e-9 * v.length());
        prop_assert!(n.dot(&v) > 0.0);
    }

    #[test]
    fn prop_normalized_zero_only_for_zero(v in vector3()) {
        let n = v.normalized();
        prop_assert_eq!(n == Vector3::zero(), v == Vector3::zero());
    }

    #[test]
    fn prop_rotation_round_trip(v in vector3(), axis in unit_axis(), angle in -6.3..6.3_f64) {
        let back = v.rotated(&axis, angle).rotated(&axis, -angle);
        prop_assert!(back.is_equal_approx_tolerance(&v, 1e-9), "{:?} != {:?}", back, v);

        let flat = Vector2::new(v.x, v.y);
        let flat_back = flat.rotated(angle).rotated(-angle);
        prop_assert!((flat_back.x - flat.x).abs() < 1e-9);
        prop_assert!((flat_back.y - flat.y).abs() < 1e-9);
    }

    #[test]
    fn prop_lerp_endpoints_are_exact(
        a in vector3(),
        b in vector3(),
        a2 in vector2(),
        b2 in vector2(),
        m in basis(),
        n in basis(),
    ) {
        prop_assert_eq!(a.lerp(&b, 0.0), a);
        prop_assert_eq!(a.lerp(&b, 1.0), b);
        prop_assert_eq!(a2.lerp(&b2, 0.0), a2);
        prop_assert_eq!(a2.lerp(&b2, 1.0), b2);
        prop_assert_eq!(m.lerp(&n, 0.0), m);
        prop_assert_eq!(m.lerp(&n, 1.0), n);
    }

    #[test]
    fn prop_slerp_endpoints_are_exact(q in unit_quaternion(), r in unit_quaternion()) {
        prop_assert_eq!(q.slerp(&r, 0.0), q);
        // The far end is reached on the short arc, possibly as -r.
        let end = q.slerp(&r, 1.0);
        prop_assert!(end == r || end == -r, "{:?} vs {:?}", end, r);
    }

    #[test]
    fn prop_basis_product_is_associative(a in basis(), b in basis(), c in basis(), v in vector3()) {
        let left = ((a * b) * c).xform(&v);
        let right = (a * (b * c)).xform(&v);
        prop_assert!(left.is_equal_approx_tolerance(&right, 1e-9), "{:?} != {:?}", left, right);
        let nested = a.xform(&b.xform(&c.xform(&v)));
        prop_assert!(left.is_equal_approx_tolerance(&nested, 1e-9));
    }

    #[test]
    fn prop_set_axis_then_get_axis(m in basis(), v in vector3(), axis in 0usize..3) {
        let mut m = m;
        m.set_axis(axis, &v);
        prop_assert_eq!(m.get_axis(axis), v);
        m.set_row(axis, &v);
        prop_assert_eq!(m.get_row(axis), v);
    }

    #[test]
    fn prop_is_equal_approx_reflexive(x in any::<f64>().prop_filter("not NaN", |x| !x.is_nan())) {
        prop_assert!(scalar::is_equal_approx(x, x));
    }

    #[test]
    fn prop_wrap_lands_in_range(value in -1.0e4..1.0e4_f64, int_value in -10_000i64..10_000) {
        let wrapped = scalar::wrapf(value, 0.0, 10.0);
        prop_assert!((0.0..10.0).contains(&wrapped) || (wrapped - 10.0).abs() < 1e-9);
        let wrapped = scalar::wrapi(int_value, -3, 7);
        prop_assert!((-3..7).contains(&wrapped));
        prop_assert_eq!((wrapped - int_value).rem_euclid(10), 0);
    }

    #[test]
    fn prop_half_encode_truncates_within_one_ulp(value in 0.0..65000.0_f32, negative in any::<bool>()) {
        let value = if negative { -value } else { value };
        let decoded = half_float::half_to_float(half_float::make_half_float(value));
        prop_assert!(decoded.abs() <= value.abs());
        // Relative step for normals, fixed 2^-24 step for subnormals.
        let ulp = (value.abs() / 1024.0).max(2.0_f32.powi(-24));
        prop_assert!((value - decoded).abs() <= ulp);
        prop_assert_eq!(decoded.is_sign_negative(), negative);
    }

    #[test]
    fn prop_half_subnormals_survive_encoding(value in 6.0e-8..6.1e-5_f32) {
        let bits = half_float::make_half_float(value);
        prop_assert!(bits != 0 && bits < 0x0400, "{} encoded as {:#06x}", value, bits);
        prop_assert_eq!(half_float::make_half_float(half_float::half_to_float(bits)), bits);
    }

    #[test]
    fn prop_quaternion_xform_preserves_length(q in unit_quaternion(), v in vector3()) {
        let rotated = q.xform(&v);
        prop_assert!((rotated.length() - v.length()).abs() < 1e-9);
        let via_basis = Basis::from_quaternion(&q).xform(&v);
        prop_assert!(rotated.is_equal_approx_tolerance(&via_basis, 1e-9));
    }
}

#[test]
fn test_is_equal_approx_special_values() {
    for x in [0.0, 1.0, 1.0e30, -1.0e30, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(scalar::is_equal_approx(x, x), "{} should equal itself", x);
    }
    assert!(!scalar::is_equal_approx(f64::INFINITY, f64::NEG_INFINITY));
    assert!(!scalar::is_equal_approx(f64::NAN, f64::NAN));
}
