// tests/integration/rotation.rs
//! The three rotation representations must agree with each other

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use approx::assert_relative_eq;
use fulgor_math::{Basis, EulerOrder, Quaternion, Vector2, Vector3};

fn v3(x: f64, y: f64, z: f64) -> Vector3<f64> {
    Vector3::new(x, y, z)
}

fn assert_vec_close(a: Vector3<f64>, b: Vector3<f64>) {
    assert!(a.is_equal_approx_tolerance(&b, 1e-9), "{:?} != {:?}", a, b);
}

fn probes() -> [Vector3<f64>; 4] {
    [
        v3(1.0, 0.0, 0.0),
        v3(0.0, 1.0, 0.0),
        v3(0.3, -2.0, 0.7),
        v3(-5.0, 4.0, 1.5),
    ]
}

#[test]
fn test_axis_angle_agrees_across_types() {
    println!("=== Axis-Angle Agreement Test ===");
    super::init_tracing();

    let axis = v3(-1.0, 2.0, 0.5).normalized();
    let angle = 1.234;
    let q = Quaternion::from_axis_angle(&axis, angle);
    let b = Basis::from_axis_angle(&axis, angle);

    for v in probes() {
        let by_vector = v.rotated(&axis, angle);
        assert_vec_close(q.xform(&v), by_vector);
        assert_vec_close(b.xform(&v), by_vector);
        assert_vec_close(Basis::from(q).xform(&v), by_vector);
    }

    println!("Axis-angle agreement: OK");
}

#[test]
fn test_quaternion_product_matches_basis_product() {
    let q1 = Quaternion::from_euler(&v3(0.2, -1.0, 0.4));
    let q2 = Quaternion::from_axis_angle(&v3(0.0, 0.0, 1.0), 2.1);
    let composed = Basis::from_quaternion(&(q1 * q2));
    let product = Basis::from_quaternion(&q1) * Basis::from_quaternion(&q2);
    assert!(composed.is_equal_approx(&product));

    for v in probes() {
        assert_vec_close((q1 * q2).xform(&v), q1.xform(&q2.xform(&v)));
    }
}

#[test]
fn test_slerp_halfway_between_quarter_turns() {
    // Identity and a 90 degree turn are orthogonal on the rotation sphere.
    let axis = v3(0.0, 0.0, 1.0);
    let from = Quaternion::from_axis_angle(&axis, 0.0);
    let to = Quaternion::from_axis_angle(&axis, FRAC_PI_2);
    let halfway = from.slerp(&to, 0.5);

    let probe = v3(1.0, 0.0, 0.0);
    assert_vec_close(halfway.xform(&probe), v3(FRAC_PI_4.cos(), FRAC_PI_4.sin(), 0.0));
    assert_vec_close(
        halfway.xform(&probe),
        Quaternion::from_axis_angle(&axis, FRAC_PI_4).xform(&probe),
    );

    let basis_halfway = Basis::from_quaternion(&from).slerp(&Basis::from_quaternion(&to), 0.5);
    assert_vec_close(basis_halfway.xform(&probe), halfway.xform(&probe));
}

#[test]
fn test_euler_representations_agree() {
    let euler = v3(0.7, -0.2, 1.9);
    let q = Quaternion::from_euler(&euler);
    let b = Basis::from_euler(&euler);

    let from_basis = b.get_quat();
    assert!(from_basis.is_equal_approx(&q) || from_basis.is_equal_approx(&-q));
    assert_vec_close(q.get_euler(), b.get_euler());
    assert_vec_close(q.get_euler(), euler);

    let q_xyz = Quaternion::from_euler_xyz(&euler);
    let b_xyz = Basis::from_euler_order(EulerOrder::Xyz, &euler);
    for v in probes() {
        assert_vec_close(q_xyz.xform(&v), b_xyz.xform(&v));
    }
    assert_vec_close(q_xyz.get_euler_xyz(), b_xyz.get_euler_xyz());
}

#[test]
fn test_euler_orders_describe_different_rotations() {
    let euler = v3(0.5, 0.6, 0.7);
    let probe = v3(1.0, 2.0, 3.0);
    let xyz = Basis::from_euler_order(EulerOrder::Xyz, &euler).xform(&probe);
    let zyx = Basis::from_euler_order(EulerOrder::Zyx, &euler).xform(&probe);
    assert!(!xyz.is_equal_approx(&zyx));

    // Each order is the matching product of elemental rotations.
    let x = Basis::from_axis_angle(&v3(1.0, 0.0, 0.0), euler.x);
    let y = Basis::from_axis_angle(&v3(0.0, 1.0, 0.0), euler.y);
    let z = Basis::from_axis_angle(&v3(0.0, 0.0, 1.0), euler.z);
    assert_vec_close(xyz, (x * y * z).xform(&probe));
    assert_vec_close(zyx, (z * y * x).xform(&probe));
    assert_vec_close(Basis::from_euler(&euler).xform(&probe), (y * x * z).xform(&probe));
}

#[test]
fn test_shortest_arc_aligns_vectors() {
    let pairs = [
        (v3(1.0, 0.0, 0.0), v3(0.0, 1.0, 0.0)),
        (v3(0.0, 0.0, 1.0), v3(1.0, 1.0, 1.0).normalized()),
        (v3(1.0, 2.0, 3.0).normalized(), v3(-3.0, 0.5, 1.0).normalized()),
    ];
    for (from, to) in pairs {
        let q = Quaternion::shortest_arc(&from, &to);
        assert!(q.is_normalized());
        assert_vec_close(q.xform(&from), to);
        assert_vec_close(Basis::from(q).xform(&from), to);
        // The arc is the smallest rotation: its angle equals the vector angle.
        assert_relative_eq!(q.get_angle(), from.angle_to(&to), epsilon = 1e-9);
    }
}

#[test]
fn test_planar_rotation_matches_z_axis_rotation() {
    let axis = v3(0.0, 0.0, 1.0);
    for angle in [0.3, -1.2, 2.9] {
        let flat = Vector2::new(2.0_f64, -0.5);
        let rotated = flat.rotated(angle);
        let lifted = Basis::from_axis_angle(&axis, angle).xform(&v3(flat.x, flat.y, 0.0));
        assert_relative_eq!(rotated.x, lifted.x, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, lifted.y, epsilon = 1e-12);
        assert_relative_eq!(lifted.z, 0.0);
    }
}

#[test]
fn test_scaled_frame_decomposition() {
    let q = Quaternion::from_euler(&v3(0.3, 1.1, -0.6));
    let scale = v3(1.5, 0.25, 4.0);
    let frame = Basis::from_quaternion_scale(&q, &scale);

    assert_vec_close(frame.get_scale(), scale);
    assert!(frame.get_rotation_quat().is_equal_approx(&q));

    // Axes are the rotated unit axes stretched by the scale.
    assert_vec_close(frame.get_axis(0), q.xform(&v3(scale.x, 0.0, 0.0)));
    assert_vec_close(frame.get_axis(2), q.xform(&v3(0.0, 0.0, scale.z)));

    // Normals stay perpendicular to transformed tangents.
    let tangent = v3(1.0, -1.0, 0.0);
    let normal = v3(1.0, 1.0, 2.0).normalized();
    assert_relative_eq!(tangent.dot(&normal), 0.0);
    let moved = frame.xform(&tangent);
    let moved_normal = frame.xform_normal(&normal);
    assert_relative_eq!(moved.dot(&moved_normal), 0.0, epsilon = 1e-9);
}

#[test]
fn test_inverse_relationships() {
    let q = Quaternion::from_euler(&v3(-0.4, 0.8, 2.2));
    let b = Basis::from_quaternion(&q);
    let skewed = b * v3(2.0, 3.0, 0.5).to_diagonal_matrix();

    for v in probes() {
        assert_vec_close(q.inverse().xform(&q.xform(&v)), v);
        // Orthonormal: the transpose inverts.
        assert_vec_close(b.xform_inv(&b.xform(&v)), v);
        assert_vec_close(skewed.inverse().xform(&skewed.xform(&v)), v);
    }

    // Scaled: the transpose no longer inverts.
    let v = v3(1.0, 1.0, 1.0);
    assert!(!skewed.xform_inv(&skewed.xform(&v)).is_equal_approx(&v));
}
