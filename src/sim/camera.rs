//! Free-fly scene camera
//!
//! Independent of the player: it only moves through explicit pan, dolly and
//! rotate calls or by snapping to one of the overview presets.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Eye / look-at / up triple consumed by the renderer's view transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 4.0, 14.0),
            center: Vec3::new(0.0, 1.0, 0.0),
            up: Vec3::Y,
        }
    }
}

/// Fixed overview positions bound to the number keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraPreset {
    /// Looking at the room center from the +Z side
    Front,
    /// Looking at the room center from the +X side
    Side,
    /// Straight down from above the ceiling
    Top,
}

impl CameraPreset {
    /// Preset for a number key (1-3)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(CameraPreset::Front),
            2 => Some(CameraPreset::Side),
            3 => Some(CameraPreset::Top),
            _ => None,
        }
    }

    pub fn camera(&self) -> Camera {
        match self {
            CameraPreset::Front => Camera {
                eye: Vec3::new(0.0, 3.0, 12.0),
                center: Vec3::new(0.0, 1.0, 0.0),
                up: Vec3::Y,
            },
            CameraPreset::Side => Camera {
                eye: Vec3::new(12.0, 3.0, 0.0),
                center: Vec3::new(0.0, 1.0, 0.0),
                up: Vec3::Y,
            },
            // Tiny Z offset keeps the view from being parallel to `up`
            CameraPreset::Top => Camera {
                eye: Vec3::new(0.0, 18.0, 0.01),
                center: Vec3::ZERO,
                up: Vec3::NEG_Z,
            },
        }
    }
}

impl Camera {
    /// Snap to a preset
    pub fn apply_preset(&mut self, preset: CameraPreset) {
        *self = preset.camera();
    }

    /// Unit vector from eye to center (zero if they coincide)
    pub fn view_dir(&self) -> Vec3 {
        (self.center - self.eye).normalize_or_zero()
    }

    /// Sideways axis, `up x view`
    fn side_dir(&self) -> Vec3 {
        self.up.cross(self.center - self.eye).normalize_or_zero()
    }

    fn translate(&mut self, offset: Vec3) {
        self.eye += offset;
        self.center += offset;
    }

    /// Slide along the sideways axis
    pub fn pan_lateral(&mut self, distance: f32) {
        self.translate(self.side_dir() * distance);
    }

    /// Slide along `up`
    pub fn pan_vertical(&mut self, distance: f32) {
        self.translate(self.up.normalize_or_zero() * distance);
    }

    /// Move toward (positive) or away from the look-at point
    pub fn dolly(&mut self, distance: f32) {
        self.translate(self.view_dir() * distance);
    }

    /// Tilt the view toward `up` by `degrees`, re-deriving `up`
    pub fn pitch(&mut self, degrees: f32) {
        let view = self.view_dir();
        let side = self.up.cross(view).normalize_or_zero();
        let (sin, cos) = degrees.to_radians().sin_cos();
        let view = view * cos + self.up * sin;
        self.up = view.cross(side);
        self.center = self.eye + view;
    }

    /// Turn the view toward the sideways axis by `degrees`
    pub fn yaw(&mut self, degrees: f32) {
        let view = self.view_dir();
        let side = self.up.cross(view).normalize_or_zero();
        let (sin, cos) = degrees.to_radians().sin_cos();
        let view = view * cos + side * sin;
        self.center = self.eye + view;
    }

    /// Right-handed view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.center, self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_presets() {
        let mut camera = Camera::default();
        camera.apply_preset(CameraPreset::Top);
        assert_eq!(camera.eye, Vec3::new(0.0, 18.0, 0.01));
        assert_eq!(camera.up, Vec3::NEG_Z);

        assert_eq!(CameraPreset::from_index(2), Some(CameraPreset::Side));
        assert_eq!(CameraPreset::from_index(4), None);
    }

    #[test]
    fn test_pans_keep_view_direction() {
        let mut camera = Camera::default();
        let before = camera.view_dir();

        camera.pan_lateral(0.2);
        camera.pan_vertical(0.2);
        camera.dolly(-0.2);

        assert!((camera.view_dir() - before).length() < EPS);
    }

    #[test]
    fn test_pan_vertical_moves_eye_and_center() {
        let mut camera = Camera::default();
        camera.pan_vertical(0.2);
        assert!((camera.eye.y - 4.2).abs() < EPS);
        assert!((camera.center.y - 1.2).abs() < EPS);
    }

    #[test]
    fn test_pan_lateral_is_horizontal() {
        let mut camera = CameraPreset::Front.camera();
        camera.pan_lateral(0.5);
        assert!((camera.eye.x.abs() - 0.5).abs() < EPS);
        assert!((camera.eye.y - 3.0).abs() < EPS);
        assert!((camera.eye.z - 12.0).abs() < EPS);
    }

    #[test]
    fn test_dolly_moves_along_view() {
        let mut camera = CameraPreset::Front.camera();
        let start = camera.eye;
        camera.dolly(1.0);
        let moved = camera.eye - start;
        assert!((moved.length() - 1.0).abs() < EPS);
        assert!(moved.dot(camera.view_dir()) > 0.99);
    }

    #[test]
    fn test_pitch_keeps_up_orthogonal() {
        let mut camera = Camera::default();
        for _ in 0..10 {
            camera.pitch(2.0);
        }
        let view = camera.view_dir();
        assert!(view.dot(camera.up).abs() < EPS);
        // Pitched upward
        assert!(view.y > Camera::default().view_dir().y);
    }

    #[test]
    fn test_yaw_turns_horizontally() {
        let mut camera = CameraPreset::Front.camera();
        let before = camera.view_dir();
        camera.yaw(90.0);
        let after = camera.view_dir();
        assert!(after.dot(before).abs() < 0.01);
        assert!((after.y - before.y).abs() < 0.2);
        assert_eq!(camera.eye, CameraPreset::Front.camera().eye);
    }

    #[test]
    fn test_view_matrix_maps_center_ahead() {
        let camera = CameraPreset::Front.camera();
        let p = camera.view_matrix().transform_point3(camera.center);
        // Right-handed: forward is -Z in view space
        assert!(p.z < 0.0);
        assert!(p.x.abs() < EPS);
    }
}
