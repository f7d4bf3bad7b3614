//! Math utilities and types
//!
//! Provides the fundamental math types used by the collision core.

pub use nalgebra::{Matrix3, Matrix4, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// True when every component of the vector is finite
    pub fn is_finite(v: &super::Vec3) -> bool {
        v.iter().all(|c| c.is_finite())
    }
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;

    /// Rotation from Euler angles in degrees, applied about X first, then Y, then Z.
    fn from_euler_degrees(angles: Vec3) -> Mat4;

    /// Upper-left 3x3 block (rotation and scale, no translation)
    fn linear_part(&self) -> Mat3;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn from_euler_degrees(angles: Vec3) -> Mat4 {
        // Column vectors: the rightmost factor is applied first
        Self::rotation_z(utils::deg_to_rad(angles.z))
            * Self::rotation_y(utils::deg_to_rad(angles.y))
            * Self::rotation_x(utils::deg_to_rad(angles.x))
    }

    fn linear_part(&self) -> Mat3 {
        self.fixed_view::<3, 3>(0, 0).into_owned()
    }
}
