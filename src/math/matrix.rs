//! Column-major 3×3 and 4×4 matrices.
//!
//! Element `(row, col)` of an N×N matrix lives at flat index `N * col + row`.
//! Every product in this crate reads its operands through that layout, so the
//! storage order and the multiply formulas must change together or not at all.

use std::ops::{Index, IndexMut};

use super::vector::{Vec3, Vec4};

/// 3×3 matrix, column-major.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Mat3(pub [f32; 9]);

/// 4×4 matrix, column-major.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Mat4(pub [f32; 16]);

impl Mat3 {
    pub const ZERO: Self = Self([0.0; 9]);

    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    ]);

    pub const fn from_cols_array(m: [f32; 9]) -> Self {
        Self(m)
    }

    pub const fn as_array(&self) -> &[f32; 9] {
        &self.0
    }

    /// Element at `row`, `col`.
    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.0[3 * col + row]
    }
}

impl Mat4 {
    pub const ZERO: Self = Self([0.0; 16]);

    /// Ones at flat indices 0, 5, 10 and 15.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self(m)
    }

    pub const fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    /// Element at `row`, `col`.
    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.0[4 * col + row]
    }
}

impl Index<usize> for Mat3 {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Mat3 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

/// Matrix product `A × B`.
///
/// Each output element is accumulated as
/// `A[row,0]·B[0,col] + A[row,1]·B[1,col] + A[row,2]·B[2,col]`, left to right.
pub fn mat3_mul(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut result = Mat3::ZERO;
    for col in 0..3 {
        for row in 0..3 {
            let mut acc = a[row] * b[3 * col];
            for k in 1..3 {
                acc += a[3 * k + row] * b[3 * col + k];
            }
            result[3 * col + row] = acc;
        }
    }
    result
}

/// Matrix product `A × B`, four multiply-adds per output element in `k` order.
pub fn mat4_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut result = Mat4::ZERO;
    for col in 0..4 {
        for row in 0..4 {
            let mut acc = a[row] * b[4 * col];
            for k in 1..4 {
                acc += a[4 * k + row] * b[4 * col + k];
            }
            result[4 * col + row] = acc;
        }
    }
    result
}

/// Matrix-vector product `M × v`.
pub fn mat3_vec3_mul(m: &Mat3, v: &Vec3) -> Vec3 {
    let mut result = Vec3::ZERO;
    for row in 0..3 {
        result[row] = m[row] * v[0] + m[3 + row] * v[1] + m[6 + row] * v[2];
    }
    result
}

/// Matrix-vector product `M × v`.
pub fn mat4_vec4_mul(m: &Mat4, v: &Vec4) -> Vec4 {
    let mut result = Vec4::ZERO;
    for row in 0..4 {
        result[row] =
            m[row] * v[0] + m[4 + row] * v[1] + m[8 + row] * v[2] + m[12 + row] * v[3];
    }
    result
}
