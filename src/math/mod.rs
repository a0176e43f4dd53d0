//! Fixed-size vector and matrix kernels.
//!
//! Everything here is a pure function over `Copy` value types: no state,
//! no allocation, no error paths.

pub mod matrix;
pub mod projection;
pub mod vector;

pub use matrix::{Mat3, Mat4, mat3_mul, mat3_vec3_mul, mat4_mul, mat4_vec4_mul};
pub use projection::{orthographic_projection_matrix, perspective_projection_matrix};
pub use vector::{
    Vec3, Vec4, cross, dot3, dot4, norm3, norm4, normalize3, normalize4, scale3, scale4,
};
