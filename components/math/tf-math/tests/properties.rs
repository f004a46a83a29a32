//! Property tests for the vector and matrix algebra

use proptest::prelude::*;
use tf_math::{MathError, Matrix4, Vector3};

fn vector(range: f32) -> impl Strategy<Value = Vector3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

/// Random diagonally dominant matrices, which are always well conditioned
fn invertible_matrix() -> impl Strategy<Value = Matrix4> {
    prop::array::uniform16(-1.0f32..1.0).prop_map(|mut e| {
        for d in [0, 5, 10, 15] {
            e[d] += if e[d] >= 0.0 { 4.0 } else { -4.0 };
        }
        Matrix4::new(e)
    })
}

proptest! {
    #[test]
    fn normalized_has_unit_magnitude(v in vector(100.0)) {
        prop_assume!(v.magnitude() > 1e-3);
        prop_assert!((v.normalized().magnitude() - 1.0).abs() < 1e-5);

        let mut m = v;
        m.normalize();
        prop_assert!((m.magnitude() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn try_normalized_agrees_with_normalized(v in vector(100.0)) {
        prop_assume!(v.magnitude() > 1e-3);
        prop_assert_eq!(v.try_normalized(), Ok(v.normalized()));
    }

    #[test]
    fn cross_is_orthogonal_to_both_operands(a in vector(10.0), b in vector(10.0)) {
        let c = Vector3::cross(a, b);
        let tolerance = 1e-5 * a.magnitude() * b.magnitude() * a.magnitude().max(b.magnitude()) + 1e-6;
        prop_assert!(c.dot(a).abs() <= tolerance, "cross·a = {}", c.dot(a));
        prop_assert!(c.dot(b).abs() <= tolerance, "cross·b = {}", c.dot(b));
    }

    #[test]
    fn in_place_ops_match_operators(a in vector(50.0), b in vector(50.0), s in 0.1f32..10.0) {
        let mut m = a;
        m.add_in_place(b);
        prop_assert_eq!(m, a + b);

        let mut m = a;
        m.sub_in_place(b);
        prop_assert_eq!(m, a - b);

        let mut m = a;
        m.mul_in_place(s);
        prop_assert_eq!(m, a * s);

        let mut m = a;
        m.div_in_place(s);
        prop_assert_eq!(m, a / s);
    }

    #[test]
    fn matrix_times_inverse_is_identity(m in invertible_matrix()) {
        let inv = m.inverse().unwrap();
        prop_assert!(m.mul(&inv).approx_eq(&Matrix4::IDENTITY, 1e-4));
        prop_assert!(inv.mul(&m).approx_eq(&Matrix4::IDENTITY, 1e-4));
    }

    #[test]
    fn determinant_of_product_is_product_of_determinants(a in invertible_matrix(), b in invertible_matrix()) {
        let lhs = a.mul(&b).determinant();
        let rhs = a.determinant() * b.determinant();
        prop_assert!((lhs - rhs).abs() <= 1e-3 * rhs.abs().max(1.0));
    }

    #[test]
    fn matrix_with_zero_row_is_singular(m in invertible_matrix(), row in 0usize..4) {
        let mut e = *m.elements();
        e[row * 4..row * 4 + 4].fill(0.0);
        let result = Matrix4::new(e).inverse();
        prop_assert!(matches!(result, Err(MathError::NotInvertible { .. })), "expected NotInvertible, got {:?}", result);
    }

    #[test]
    fn look_at_inverse_maps_eye_to_origin(
        angle in 0.0f32..std::f32::consts::TAU,
        distance in 1.0f32..100.0,
        elevation in -1.0f32..1.0,
    ) {
        let eye = Vector3::new(distance * angle.cos(), distance * elevation, distance * angle.sin());
        let view = Matrix4::look_at(eye, Vector3::ZERO, Vector3::UP).inverse().unwrap();
        let local = view.transform_point(eye);
        prop_assert!(local.magnitude() <= 1e-4 * (1.0 + eye.magnitude()), "local = {}", local);
    }

    #[test]
    fn perspective_maps_near_and_far_planes(
        aspect in 0.5f32..3.0,
        fov in 10.0f32..120.0,
        near in 0.01f32..10.0,
        ratio in 2.0f32..1000.0,
    ) {
        let far = near * ratio;
        let p = Matrix4::perspective(aspect, fov, near, far);
        let n = p.transform_point(Vector3::new(0.0, 0.0, -near));
        let f = p.transform_point(Vector3::new(0.0, 0.0, -far));
        prop_assert!((n.z + 1.0).abs() < 1e-3, "near z = {}", n.z);
        prop_assert!((f.z - 1.0).abs() < 1e-3, "far z = {}", f.z);
    }
}

#[test]
fn zero_matrix_is_not_invertible() {
    assert!(matches!(
        Matrix4::ZERO.inverse(),
        Err(MathError::NotInvertible { .. })
    ));
}
