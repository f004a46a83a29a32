//! Geometry checks on generated spheres

use pretty_assertions::assert_eq;
use test_case::test_case;
use tf_math::Vector3;
use tf_mesh::{
    IndexFormat, MAX_SPHERE_VERTICES, MeshError, SphereMesh, SphereParams, create_sphere,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn unit_sphere_four_by_four() {
    init_logger();
    let mesh = create_sphere(1.0, 4, 4).unwrap();

    assert_eq!(mesh.vertex_count(), 14);
    assert_eq!(mesh.index_count(), 72);
    assert_eq!(mesh.triangle_count(), 24);
    assert_eq!(mesh.positions().len(), 42);
    assert_eq!(mesh.normals().len(), 42);
    assert_eq!(mesh.indices().format(), IndexFormat::U16);
    assert_eq!(mesh.byte_size(), 42 * 4 * 2 + 72 * 2);
}

#[test_case(2, 3 ; "smallest sphere")]
#[test_case(4, 4 ; "four by four")]
#[test_case(16, 16 ; "demo sphere")]
#[test_case(7, 11 ; "odd segments")]
#[test_case(64, 5 ; "tall")]
fn counts_follow_the_closed_form(theta: u32, phi: u32) {
    let params = SphereParams::new(2.5, theta, phi);
    let mesh = SphereMesh::new(params).unwrap();

    let expected_vertices = 2 + (theta as usize - 1) * phi as usize;
    let expected_indices = 6 * phi as usize + 6 * phi as usize * (theta as usize - 2);
    assert_eq!(mesh.vertex_count(), expected_vertices);
    assert_eq!(mesh.index_count(), expected_indices);
    assert_eq!(params.vertex_count(), expected_vertices);
    assert_eq!(params.index_count(), expected_indices);
}

#[test_case(1.0, 4, 4)]
#[test_case(5.0, 16, 16)]
#[test_case(0.25, 9, 13)]
fn vertices_lie_on_the_sphere(radius: f32, theta: u32, phi: u32) {
    let mesh = create_sphere(radius, theta, phi).unwrap();
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i).unwrap();
        assert!(
            (p.magnitude() - radius).abs() <= 1e-5 * radius.max(1.0),
            "vertex {i} at {p} is off the sphere"
        );
    }
}

#[test]
fn normals_are_normalized_positions() {
    let mesh = create_sphere(3.0, 8, 12).unwrap();
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i).unwrap();
        let n = mesh.normal(i).unwrap();
        assert!((n.magnitude() - 1.0).abs() < 1e-5, "normal {i} is {n}");
        assert!((n - p.normalized()).magnitude() < 1e-5, "normal {i} is {n}");
    }
}

#[test_case(2, 3)]
#[test_case(4, 4)]
#[test_case(16, 16)]
#[test_case(5, 24)]
fn every_triangle_faces_outward(theta: u32, phi: u32) {
    let mesh = create_sphere(1.0, theta, phi).unwrap();
    for [a, b, c] in mesh.triangles() {
        let pa = mesh.position(a as usize).unwrap();
        let pb = mesh.position(b as usize).unwrap();
        let pc = mesh.position(c as usize).unwrap();
        let face = Vector3::cross(pb - pa, pc - pa);
        let centroid = pa + pb + pc;
        assert!(
            face.dot(centroid) > 0.0,
            "triangle ({a}, {b}, {c}) faces inward"
        );
    }
}

#[test]
fn indices_are_in_range_and_triangles_are_not_degenerate() {
    let mesh = create_sphere(1.0, 10, 10).unwrap();
    let vertex_count = mesh.vertex_count() as u32;
    for [a, b, c] in mesh.triangles() {
        assert!(a < vertex_count && b < vertex_count && c < vertex_count);
        assert!(a != b && b != c && a != c);
    }
}

#[test]
fn every_vertex_is_referenced() {
    let mesh = create_sphere(1.0, 6, 7).unwrap();
    let mut used = vec![false; mesh.vertex_count()];
    for i in mesh.indices().iter() {
        used[i as usize] = true;
    }
    assert!(used.into_iter().all(|u| u));
}

#[test]
fn generation_is_deterministic() {
    let a = create_sphere(5.0, 16, 16).unwrap();
    let b = create_sphere(5.0, 16, 16).unwrap();
    assert_eq!(a, b);
}

#[test]
fn large_meshes_widen_to_u32() {
    let mesh = create_sphere(1.0, 300, 300).unwrap();
    assert_eq!(mesh.vertex_count(), 89_702);
    assert_eq!(mesh.indices().format(), IndexFormat::U32);
    let max = mesh.indices().iter().max().unwrap();
    assert_eq!(max, 89_701);
}

#[test]
fn largest_u16_mesh_stays_narrow() {
    // With phi = 3 the vertex count steps by 3 across the 65536 boundary
    let narrow = create_sphere(1.0, 21_845, 3).unwrap();
    assert_eq!(narrow.vertex_count(), 65_534);
    assert_eq!(narrow.indices().format(), IndexFormat::U16);

    let wide = create_sphere(1.0, 21_846, 3).unwrap();
    assert_eq!(wide.vertex_count(), 65_537);
    assert_eq!(wide.indices().format(), IndexFormat::U32);
}

#[test_case(0.0, 4, 4 ; "zero radius")]
#[test_case(-1.0, 4, 4 ; "negative radius")]
#[test_case(f32::INFINITY, 4, 4 ; "infinite radius")]
#[test_case(1.0, 0, 4 ; "no theta segments")]
#[test_case(1.0, 1, 4 ; "one theta segment")]
#[test_case(1.0, 4, 2 ; "two phi segments")]
fn invalid_parameters_are_rejected(radius: f32, theta: u32, phi: u32) {
    let result = create_sphere(radius, theta, phi);
    assert!(matches!(result, Err(MeshError::InvalidParameters(_))));
}

#[test_case(65_000, 65_000 ; "billions of vertices")]
#[test_case(u32::MAX, u32::MAX ; "largest segment counts")]
#[test_case(2, 4_194_303 ; "one huge ring")]
fn oversized_spheres_fail_before_allocating(theta: u32, phi: u32) {
    let result = create_sphere(1.0, theta, phi);
    assert!(matches!(
        result,
        Err(MeshError::TooManyVertices { limit: MAX_SPHERE_VERTICES, .. })
    ));
}

#[cfg(feature = "serde-support")]
#[test]
fn mesh_serializes_to_json() {
    let mesh = create_sphere(1.0, 2, 3).unwrap();
    let json = serde_json::to_value(&mesh).unwrap();

    assert_eq!(json["params"]["theta_segment"], 2);
    assert_eq!(json["indices"]["U16"].as_array().unwrap().len(), 18);
    assert_eq!(json["positions"].as_array().unwrap().len(), 15);

    let back: SphereMesh = serde_json::from_value(json).unwrap();
    assert_eq!(back, mesh);
}

#[cfg(feature = "serde-support")]
#[test]
fn loaded_meshes_are_checked() {
    let mesh = create_sphere(1.0, 2, 3).unwrap();
    let json = serde_json::to_value(&mesh).unwrap();

    let mut bad_index = json.clone();
    bad_index["indices"]["U16"][0] = serde_json::json!(5);
    let error = serde_json::from_value::<SphereMesh>(bad_index).unwrap_err();
    assert!(error.to_string().contains("Index 5 is out of range for 5 vertices"));

    let mut bad_radius = json.clone();
    bad_radius["params"]["radius"] = serde_json::json!(-1.0);
    assert!(serde_json::from_value::<SphereMesh>(bad_radius).is_err());

    let mut short_normals = json.clone();
    short_normals["normals"] = serde_json::json!([0.0, 1.0, 0.0]);
    let error = serde_json::from_value::<SphereMesh>(short_normals).unwrap_err();
    assert!(error.to_string().contains("Inconsistent mesh buffers"));

    let mut wide = json;
    let indices = wide["indices"]["U16"].clone();
    wide["indices"] = serde_json::json!({ "U32": indices });
    assert!(serde_json::from_value::<SphereMesh>(wide).is_err());
}

mod properties {
    use proptest::prelude::*;
    use tf_mesh::{SphereMesh, SphereParams};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn counts_and_ranges_hold_for_any_valid_params(
            radius in 0.01f32..100.0,
            theta in 2u32..40,
            phi in 3u32..40,
        ) {
            let params = SphereParams::new(radius, theta, phi);
            let mesh = SphereMesh::new(params).unwrap();

            prop_assert_eq!(mesh.vertex_count(), params.vertex_count());
            prop_assert_eq!(mesh.index_count(), params.index_count());

            let vertex_count = mesh.vertex_count() as u32;
            prop_assert!(mesh.indices().iter().all(|i| i < vertex_count));
        }
    }
}
