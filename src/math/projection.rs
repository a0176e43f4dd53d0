//! View-volume projection builders (OpenGL clip-space conventions).
//!
//! The camera looks down `-z`; the visible volume is mapped onto the
//! normalized device cube `[-1, 1]³`. These are consumed by rendering code
//! and are not part of the multiply benchmark.

use super::matrix::Mat4;

/// Orthographic projection of the box `[left, right] × [bottom, top] × [-near, -far]`.
pub fn orthographic_projection_matrix(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    let mut m = Mat4::ZERO;
    m[0] = 2.0 / (right - left);
    m[5] = 2.0 / (top - bottom);
    m[10] = -2.0 / (far - near);
    m[12] = -(right + left) / (right - left);
    m[13] = -(top + bottom) / (top - bottom);
    m[14] = -(far + near) / (far - near);
    m[15] = 1.0;
    m
}

/// Perspective projection with a vertical `field_of_view` in radians.
pub fn perspective_projection_matrix(
    aspect_ratio: f32,
    field_of_view: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    let focal = 1.0 / (field_of_view * 0.5).tan();
    let mut m = Mat4::ZERO;
    m[0] = focal / aspect_ratio;
    m[5] = focal;
    m[10] = (far + near) / (near - far);
    m[11] = -1.0;
    m[14] = 2.0 * far * near / (near - far);
    m
}
