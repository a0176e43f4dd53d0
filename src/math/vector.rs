//! 3- and 4-component vectors and the kernels that operate on them.

use std::ops::{Index, IndexMut};

/// Three `f32` components.
///
/// The components can be read by index, by position (`x`, `y`, `z`) or by
/// colour (`r`, `g`, `b`). All three views read the same storage: `x` and `r`
/// are the same value, never two separate fields.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vec3(pub [f32; 3]);

/// Four `f32` components, viewable as `x, y, z, w` or `r, g, b, a`.
///
/// Like [`Vec3`], the named accessors alias the indexed storage.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vec4(pub [f32; 4]);

impl Vec3 {
    pub const ZERO: Self = Self([0.0; 3]);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    pub const fn as_array(&self) -> &[f32; 3] {
        &self.0
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub const fn r(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn g(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub const fn b(&self) -> f32 {
        self.0[2]
    }
}

impl Vec4 {
    pub const ZERO: Self = Self([0.0; 4]);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    pub const fn as_array(&self) -> &[f32; 4] {
        &self.0
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub const fn w(&self) -> f32 {
        self.0[3]
    }

    #[inline]
    pub const fn r(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn g(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub const fn b(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub const fn a(&self) -> f32 {
        self.0[3]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Self(v)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(v: [f32; 4]) -> Self {
        Self(v)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

/// Dot product of two 3-vectors.
#[inline]
pub fn dot3(u: &Vec3, v: &Vec3) -> f32 {
    u[0] * v[0] + u[1] * v[1] + u[2] * v[2]
}

/// Dot product of two 4-vectors.
#[inline]
pub fn dot4(u: &Vec4, v: &Vec4) -> f32 {
    u[0] * v[0] + u[1] * v[1] + u[2] * v[2] + u[3] * v[3]
}

/// Right-handed cross product `u × v`.
///
/// The result is orthogonal to both inputs, up to rounding.
#[inline]
pub fn cross(u: &Vec3, v: &Vec3) -> Vec3 {
    Vec3([
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ])
}

/// Euclidean length of a 3-vector.
#[inline]
pub fn norm3(v: &Vec3) -> f32 {
    dot3(v, v).sqrt()
}

/// Euclidean length of a 4-vector.
#[inline]
pub fn norm4(v: &Vec4) -> f32 {
    dot4(v, v).sqrt()
}

#[inline]
pub fn scale3(s: f32, v: &Vec3) -> Vec3 {
    Vec3([s * v[0], s * v[1], s * v[2]])
}

#[inline]
pub fn scale4(s: f32, v: &Vec4) -> Vec4 {
    Vec4([s * v[0], s * v[1], s * v[2], s * v[3]])
}

/// Scales `v` to unit length.
///
/// There is no zero check: normalizing the zero vector computes `1.0 / 0.0`
/// and returns non-finite (NaN) components instead of failing.
#[inline]
pub fn normalize3(v: &Vec3) -> Vec3 {
    scale3(1.0 / norm3(v), v)
}

/// Scales `v` to unit length. Same zero-vector behaviour as [`normalize3`].
#[inline]
pub fn normalize4(v: &Vec4) -> Vec4 {
    scale4(1.0 / norm4(v), v)
}
