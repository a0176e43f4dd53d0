//! The two 4×4 multiply entry points under benchmark.
//!
//! Both compute `A × B` with the same formula and the same operation order
//! as [`crate::math::mat4_mul`]. They differ only in how the result reaches
//! the caller:
//!
//! - [`mat4_mul_out`] writes into storage the caller already owns.
//! - [`mat4_mul_value`] builds a new [`Mat4`] and returns it.
//!
//! For non-aliasing inputs the two results must be bit-for-bit identical.
//! A difference means one of them is wrong, not that floating point is noisy.
//!
//! Both are `#[inline(never)]` so that a call from the timing loop really
//! goes through the calling convention being measured. The body of
//! [`mat4_mul_value`] is deliberately written as "build a local, return it";
//! do not rewrite it in terms of [`mat4_mul_out`].

use crate::math::Mat4;

/// Out-parameter convention: `result = a × b`.
///
/// No allocation; the only effect is the write through `result`. The
/// borrow checker rules out `result` aliasing `a` or `b`.
#[inline(never)]
#[rustfmt::skip]
pub fn mat4_mul_out(result: &mut Mat4, a: &Mat4, b: &Mat4) {
    let (a, b) = (&a.0, &b.0);
    let r = &mut result.0;

    let (a00, a01, a02, a03) = (a[0], a[4], a[8],  a[12]);
    let (a10, a11, a12, a13) = (a[1], a[5], a[9],  a[13]);
    let (a20, a21, a22, a23) = (a[2], a[6], a[10], a[14]);
    let (a30, a31, a32, a33) = (a[3], a[7], a[11], a[15]);

    let (b00, b01, b02, b03) = (b[0], b[4], b[8],  b[12]);
    let (b10, b11, b12, b13) = (b[1], b[5], b[9],  b[13]);
    let (b20, b21, b22, b23) = (b[2], b[6], b[10], b[14]);
    let (b30, b31, b32, b33) = (b[3], b[7], b[11], b[15]);

    r[0]  = a00 * b00 + a01 * b10 + a02 * b20 + a03 * b30;
    r[1]  = a10 * b00 + a11 * b10 + a12 * b20 + a13 * b30;
    r[2]  = a20 * b00 + a21 * b10 + a22 * b20 + a23 * b30;
    r[3]  = a30 * b00 + a31 * b10 + a32 * b20 + a33 * b30;

    r[4]  = a00 * b01 + a01 * b11 + a02 * b21 + a03 * b31;
    r[5]  = a10 * b01 + a11 * b11 + a12 * b21 + a13 * b31;
    r[6]  = a20 * b01 + a21 * b11 + a22 * b21 + a23 * b31;
    r[7]  = a30 * b01 + a31 * b11 + a32 * b21 + a33 * b31;

    r[8]  = a00 * b02 + a01 * b12 + a02 * b22 + a03 * b32;
    r[9]  = a10 * b02 + a11 * b12 + a12 * b22 + a13 * b32;
    r[10] = a20 * b02 + a21 * b12 + a22 * b22 + a23 * b32;
    r[11] = a30 * b02 + a31 * b12 + a32 * b22 + a33 * b32;

    r[12] = a00 * b03 + a01 * b13 + a02 * b23 + a03 * b33;
    r[13] = a10 * b03 + a11 * b13 + a12 * b23 + a13 * b33;
    r[14] = a20 * b03 + a21 * b13 + a22 * b23 + a23 * b33;
    r[15] = a30 * b03 + a31 * b13 + a32 * b23 + a33 * b33;
}

/// Return-by-value convention: returns `a × b` as a new matrix.
#[inline(never)]
#[rustfmt::skip]
pub fn mat4_mul_value(a: &Mat4, b: &Mat4) -> Mat4 {
    let (a, b) = (&a.0, &b.0);

    let (a00, a01, a02, a03) = (a[0], a[4], a[8],  a[12]);
    let (a10, a11, a12, a13) = (a[1], a[5], a[9],  a[13]);
    let (a20, a21, a22, a23) = (a[2], a[6], a[10], a[14]);
    let (a30, a31, a32, a33) = (a[3], a[7], a[11], a[15]);

    let (b00, b01, b02, b03) = (b[0], b[4], b[8],  b[12]);
    let (b10, b11, b12, b13) = (b[1], b[5], b[9],  b[13]);
    let (b20, b21, b22, b23) = (b[2], b[6], b[10], b[14]);
    let (b30, b31, b32, b33) = (b[3], b[7], b[11], b[15]);

    let mut result = Mat4::ZERO;
    let r = &mut result.0;

    r[0]  = a00 * b00 + a01 * b10 + a02 * b20 + a03 * b30;
    r[1]  = a10 * b00 + a11 * b10 + a12 * b20 + a13 * b30;
    r[2]  = a20 * b00 + a21 * b10 + a22 * b20 + a23 * b30;
    r[3]  = a30 * b00 + a31 * b10 + a32 * b20 + a33 * b30;

    r[4]  = a00 * b01 + a01 * b11 + a02 * b21 + a03 * b31;
    r[5]  = a10 * b01 + a11 * b11 + a12 * b21 + a13 * b31;
    r[6]  = a20 * b01 + a21 * b11 + a22 * b21 + a23 * b31;
    r[7]  = a30 * b01 + a31 * b11 + a32 * b21 + a33 * b31;

    r[8]  = a00 * b02 + a01 * b12 + a02 * b22 + a03 * b32;
    r[9]  = a10 * b02 + a11 * b12 + a12 * b22 + a13 * b32;
    r[10] = a20 * b02 + a21 * b12 + a22 * b22 + a23 * b32;
    r[11] = a30 * b02 + a31 * b12 + a32 * b22 + a33 * b32;

    r[12] = a00 * b03 + a01 * b13 + a02 * b23 + a03 * b33;
    r[13] = a10 * b03 + a11 * b13 + a12 * b23 + a13 * b33;
    r[14] = a20 * b03 + a21 * b13 + a22 * b23 + a23 * b33;
    r[15] = a30 * b03 + a31 * b13 + a32 * b23 + a33 * b33;

    result
}
