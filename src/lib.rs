//! Out-parameter vs return-by-value: a 4×4 matrix multiply benchmark.
//!
//! Math libraries written for graphics and physics have to pick how a
//! matrix product gets back to the caller. One style writes into storage
//! the caller passes in. The other builds a value and returns it. This crate
//! measures that difference directly. It multiplies millions of random
//! 4×4 pairs both ways, times each pass and checks the results match bit for bit.
//!
//! ## Usage
//!
//! ```
//! use matconv::convention::{mat4_mul_out, mat4_mul_value};
//! use matconv::math::Mat4;
//!
//! let a = Mat4::IDENTITY;
//! let b = Mat4::from_cols_array(std::array::from_fn(|i| i as f32));
//!
//! let mut out = Mat4::ZERO;
//! mat4_mul_out(&mut out, &a, &b);
//! assert_eq!(out, mat4_mul_value(&a, &b));
//! ```
//!
//! Running a small benchmark in-process:
//!
//! ```
//! use matconv::{BenchConfig, Harness};
//!
//! let config = BenchConfig { trials: 2, count: 64, seed: Some(7), ..Default::default() };
//! let mut harness = Harness::new(config, Vec::new()).unwrap();
//! let summary = harness.run().unwrap();
//! assert_eq!(summary.total_differences(), 0);
//! ```
//!
//! ## What's inside
//!
//! - `math`: `Vec3`/`Vec4`/`Mat3`/`Mat4` and their kernels, column-major
//! - `convention`: the two multiply entry points being compared
//! - `harness`: batch generation, timing, validation and reporting

pub mod convention;
pub mod error;
pub mod harness;
pub mod logging;
pub mod math;

pub use convention::{mat4_mul_out, mat4_mul_value};
pub use error::BenchError;
pub use harness::{BenchConfig, Harness, Summary, TrialReport};
