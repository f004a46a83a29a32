//! Orbit camera around the particle box

use serde::{Deserialize, Serialize};
use tf_math::{Matrix4, Result, Vector3};

/// A camera circling the vertical axis and looking at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitCamera {
    /// Position on the orbit in degrees, measured from +x towards +z
    pub angle_degrees: f32,
    /// Horizontal distance from the vertical axis
    pub distance: f32,
    /// Height above the origin
    pub height: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            angle_degrees: -45.0,
            distance: 1000.0,
            height: 1000.0,
            fov_degrees: 60.0,
            near: 0.01,
            far: 10000.0,
        }
    }
}

impl OrbitCamera {
    /// World position of the camera
    pub fn eye(&self) -> Vector3 {
        let (sin, cos) = self.angle_degrees.to_radians().sin_cos();
        Vector3::new(self.distance * cos, self.height, self.distance * sin)
    }

    /// Camera-to-world transform
    pub fn camera_matrix(&self) -> Matrix4 {
        Matrix4::look_at(self.eye(), Vector3::ZERO, Vector3::UP)
    }

    /// World-to-camera transform
    ///
    /// Fails when the eye sits on the vertical axis through the target, where
    /// the look-at basis degenerates.
    pub fn view_matrix(&self) -> Result<Matrix4> {
        self.camera_matrix().inverse()
    }

    /// Perspective projection for a viewport of the given aspect ratio
    pub fn projection(&self, aspect: f32) -> Matrix4 {
        Matrix4::perspective(aspect, self.fov_degrees, self.near, self.far)
    }

    /// View followed by projection, ready for a uniform upload
    pub fn view_projection(&self, aspect: f32) -> Result<Matrix4> {
        Ok(self.view_matrix()? * self.projection(aspect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_eye() {
        let eye = OrbitCamera::default().eye();
        let half = 1000.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert!((eye.x - half).abs() < 1e-2);
        assert_eq!(eye.y, 1000.0);
        assert!((eye.z + half).abs() < 1e-2);
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = OrbitCamera::default();
        let mvp = camera.view_projection(16.0 / 9.0).unwrap();
        let ndc = mvp.transform_point(Vector3::ZERO);
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_camera_on_axis_is_an_error() {
        let camera = OrbitCamera {
            distance: 0.0,
            ..OrbitCamera::default()
        };
        assert!(camera.view_matrix().is_err());
    }
}
