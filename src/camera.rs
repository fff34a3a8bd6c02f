//! A fly-through camera driven by keyboard, cursor and scroll input.

use cgmath::{perspective, Deg, InnerSpace, Matrix4, Point3, Vector3};

const YAW: f32 = -90.0;
const PITCH: f32 = 0.0;
const SPEED: f32 = 2.5;
const SENSITIVITY: f32 = 0.1;
const ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Direction of a keyboard-driven camera step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Euler-angle camera.
///
/// `yaw` and `pitch` are in degrees. `pitch` stays within +/-89 degrees when mouse movement is
/// processed with `constrain_pitch`, which keeps the basis well defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub front: Vector3<f32>,
    pub up: Vector3<f32>,
    pub right: Vector3<f32>,
    pub world_up: Vector3<f32>,
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(Point3::new(0.0, 0.0, 0.0), Vector3::unit_y(), YAW, PITCH)
    }
}

impl Camera {
    pub fn new(position: Point3<f32>, world_up: Vector3<f32>, yaw: f32, pitch: f32) -> Self {
        let mut camera = Camera {
            position,
            front: -Vector3::unit_z(),
            up: world_up,
            right: Vector3::unit_x(),
            world_up,
            yaw,
            pitch,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_vectors();
        camera
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using `zoom` as the vertical field of view.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Matrix4<f32> {
        perspective(Deg(self.zoom), aspect_ratio, Z_NEAR, Z_FAR)
    }

    /// Moves the camera along its basis by `movement_speed * delta_time`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Turns the camera by cursor offsets. Positive `y_offset` looks up.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.max(-PITCH_LIMIT).min(PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Scrolling up narrows the field of view.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).max(ZOOM_MIN).min(ZOOM_MAX);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vector3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        assert!(close(camera.front.x, 0.0));
        assert!(close(camera.front.y, 0.0));
        assert!(close(camera.front.z, -1.0));
        assert!(close(camera.right.x, 1.0));
        assert!(close(camera.up.y, 1.0));
    }

    #[test]
    fn zero_delta_time_does_not_move() {
        let mut camera = Camera::default();
        for &direction in &[
            CameraMovement::Forward,
            CameraMovement::Backward,
            CameraMovement::Left,
            CameraMovement::Right,
        ] {
            camera.process_keyboard(direction, 0.0);
        }
        assert_eq!(camera.position, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn movement_scales_with_speed_and_delta_time() {
        let mut camera = Camera::default();
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        assert!(close(camera.position.z, -SPEED));

        camera.process_keyboard(CameraMovement::Forward, 1.0);
        assert!(close(camera.position.z, -2.0 * SPEED));

        camera.process_keyboard(CameraMovement::Backward, 2.0);
        assert!(close(camera.position.z, 0.0));

        camera.process_keyboard(CameraMovement::Right, 0.5);
        assert!(close(camera.position.x, 0.5 * SPEED));

        camera.process_keyboard(CameraMovement::Left, 1.0);
        assert!(close(camera.position.x, -0.5 * SPEED));
    }

    #[test]
    fn pitch_is_clamped_when_constrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 10_000.0, true);
        assert!(close(camera.pitch, PITCH_LIMIT));

        camera.process_mouse_movement(0.0, -100_000.0, true);
        assert!(close(camera.pitch, -PITCH_LIMIT));
    }

    #[test]
    fn pitch_is_free_when_unconstrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 1_000.0, false);
        assert!(close(camera.pitch, 100.0));
    }

    #[test]
    fn mouse_movement_scales_by_sensitivity() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(10.0, 5.0, true);
        assert!(close(camera.yaw, YAW + 1.0));
        assert!(close(camera.pitch, 0.5));
        assert!(close(camera.front.magnitude(), 1.0));
    }

    #[test]
    fn zoom_stays_in_range() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(10.0);
        assert!(close(camera.zoom, 35.0));

        camera.process_mouse_scroll(100.0);
        assert!(close(camera.zoom, ZOOM_MIN));

        camera.process_mouse_scroll(-100.0);
        assert!(close(camera.zoom, ZOOM_MAX));
    }
}
