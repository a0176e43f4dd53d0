use std::process::Command;

use matconv::harness::trial::{TrialBuffers, random_mat4};
use matconv::harness::BufferRole;
use matconv::math::{Mat4, Vec3, Vec4, cross, dot3, dot4, mat4_mul, norm3, normalize3, normalize4};
use matconv::{BenchConfig, BenchError, Harness, mat4_mul_out, mat4_mul_value};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The default benchmark element range, `[-10, 10]`.
fn element_range() -> Uniform<f32> {
    Uniform::new_inclusive(-10.0, 10.0)
}

fn assert_matrices_identical(expected: &Mat4, actual: &Mat4, name: &str) {
    for i in 0..16 {
        assert!(
            expected[i].to_bits() == actual[i].to_bits(),
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

fn assert_matrices_close(expected: &Mat4, actual: &Mat4, name: &str) {
    let scale = expected
        .as_array()
        .iter()
        .chain(actual.as_array())
        .fold(1.0f32, |m, x| m.max(x.abs()));
    for i in 0..16 {
        assert!(
            (expected[i] - actual[i]).abs() <= 1e-3 * scale,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

fn both_conventions(a: &Mat4, b: &Mat4) -> (Mat4, Mat4) {
    let mut out = Mat4::from_cols_array([f32::NAN; 16]);
    mat4_mul_out(&mut out, a, b);
    (out, mat4_mul_value(a, b))
}

/// `Σ_k A[row,k]·B[k,col]`, written out from the definition.
fn hand_product(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut m = Mat4::ZERO;
    for col in 0..4 {
        for row in 0..4 {
            m[4 * col + row] = a.get(row, 0) * b.get(0, col)
                + a.get(row, 1) * b.get(1, col)
                + a.get(row, 2) * b.get(2, col)
                + a.get(row, 3) * b.get(3, col);
        }
    }
    m
}

fn random_vec3(rng: &mut StdRng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
    )
}

// ============================================================
// Convention equivalence
// ============================================================

#[test]
fn test_conventions_agree_on_special_matrices() {
    let counting = Mat4::from_cols_array(std::array::from_fn(|i| i as f32));
    let cases = [
        (Mat4::IDENTITY, Mat4::IDENTITY, "identity*identity"),
        (Mat4::ZERO, counting, "zero*m"),
        (counting, Mat4::ZERO, "m*zero"),
        (counting, counting, "m*m"),
    ];

    for (a, b, name) in cases {
        let (out, value) = both_conventions(&a, &b);
        assert_matrices_identical(&out, &value, name);
    }
}

#[test]
fn test_conventions_agree_on_random_matrices() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for i in 0..10_000 {
        let a = random_mat4(&mut rng, &element_range());
        let b = random_mat4(&mut rng, &element_range());
        let (out, value) = both_conventions(&a, &b);

        assert_matrices_identical(&out, &value, &format!("random_{}", i));
        assert_matrices_identical(&mat4_mul(&a, &b), &value, &format!("kernel_{}", i));
    }
}

#[test]
fn test_identity_law() {
    let mut rng = StdRng::seed_from_u64(5);

    for i in 0..100 {
        let m = random_mat4(&mut rng, &element_range());

        let (out, value) = both_conventions(&m, &Mat4::IDENTITY);
        assert_matrices_identical(&m, &out, &format!("m*I out_{}", i));
        assert_matrices_identical(&m, &value, &format!("m*I value_{}", i));

        let (out, value) = both_conventions(&Mat4::IDENTITY, &m);
        assert_matrices_identical(&m, &out, &format!("I*m out_{}", i));
        assert_matrices_identical(&m, &value, &format!("I*m value_{}", i));
    }
}

#[test]
fn test_associativity_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(11);

    for i in 0..1000 {
        let a = random_mat4(&mut rng, &element_range());
        let b = random_mat4(&mut rng, &element_range());
        let c = random_mat4(&mut rng, &element_range());

        let left = mat4_mul_value(&mat4_mul_value(&a, &b), &c);
        let right = mat4_mul_value(&a, &mat4_mul_value(&b, &c));

        assert_matrices_close(&left, &right, &format!("assoc_{}", i));
    }
}

// ============================================================
// Vector kernel properties
// ============================================================

#[test]
fn test_dot4_non_negative() {
    let mut rng = StdRng::seed_from_u64(3);

    assert_eq!(dot4(&Vec4::ZERO, &Vec4::ZERO), 0.0);

    for _ in 0..1000 {
        let v = Vec4::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        assert!(dot4(&v, &v) > 0.0, "dot4 of nonzero {:?} should be positive", v);
    }
}

#[test]
fn test_normalize_gives_unit_length() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..1000 {
        let v = random_vec3(&mut rng);
        let n = norm3(&normalize3(&v));
        assert!((n - 1.0).abs() < 1e-5, "|normalize({:?})| = {}", v, n);
    }
}

#[test]
fn test_normalize_zero_vector_is_not_finite() {
    let n3 = normalize3(&Vec3::ZERO);
    assert!(n3.as_array().iter().any(|c| !c.is_finite()));

    let n4 = normalize4(&Vec4::ZERO);
    assert!(n4.as_array().iter().any(|c| !c.is_finite()));
}

#[test]
fn test_cross_is_orthogonal() {
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..1000 {
        let u = random_vec3(&mut rng);
        let v = random_vec3(&mut rng);
        let w = cross(&u, &v);
        let tol = 1e-5 * (norm3(&u) + norm3(&v)).powi(3) + 1e-6;

        assert!(dot3(&w, &u).abs() <= tol, "cross({:?}, {:?}) not orthogonal to u", u, v);
        assert!(dot3(&w, &v).abs() <= tol, "cross({:?}, {:?}) not orthogonal to v", u, v);
    }
}

// ============================================================
// Harness scenarios
// ============================================================

#[test]
fn test_single_matrix_end_to_end() {
    let seed = 42;
    let config = BenchConfig {
        trials: 1,
        count: 1,
        seed: Some(seed),
        ..Default::default()
    };

    let mut harness = Harness::new(config, Vec::new()).unwrap();
    let summary = harness.run().unwrap();
    let output = String::from_utf8(harness.into_output()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(summary.trials.len(), 1);
    assert_eq!(summary.total_differences(), 0);
    assert_eq!(lines.len(), 4, "unexpected report: {:?}", output);

    let times: Vec<&str> = lines[0].split(" : ").collect();
    assert_eq!(times.len(), 2);
    assert!(times.iter().all(|t| t.parse::<u64>().is_ok()), "bad timing line {:?}", lines[0]);
    assert_eq!(lines[1], "Differences: 0");
    assert!(lines[2].starts_with("AVERAGES:  Return reference - "));
    assert!(lines[2].contains(" : Return Value - "));
    assert_eq!(lines[3], "");

    // Same seed reproduces the same inputs; both outputs equal the hand product.
    let mut buffers = TrialBuffers::allocate(1, 0).unwrap();
    buffers.fill_random(&mut StdRng::seed_from_u64(seed), &element_range());
    buffers.time_out_param();
    buffers.time_by_value();

    let mut rng = StdRng::seed_from_u64(seed);
    let left = random_mat4(&mut rng, &element_range());
    let right = random_mat4(&mut rng, &element_range());
    assert_eq!(buffers.left[0], left);
    assert_eq!(buffers.right[0], right);

    let expected = hand_product(&left, &right);
    assert_matrices_identical(&expected, &buffers.out_param[0], "end_to_end out_param");
    assert_matrices_identical(&expected, &buffers.by_value[0], "end_to_end by_value");
    assert_eq!(buffers.count_differences(), 0);
}

#[test]
fn test_many_trials_report_every_trial() {
    let config = BenchConfig {
        trials: 5,
        count: 256,
        seed: Some(1),
        ..Default::default()
    };

    let mut harness = Harness::new(config, Vec::new()).unwrap();
    let summary = harness.run().unwrap();
    let output = String::from_utf8(harness.into_output()).unwrap();

    assert_eq!(summary.trials.len(), 5);
    assert_eq!(output.matches("Differences: 0\n").count(), 5);
    assert_eq!(output.matches("AVERAGES:").count(), 1);
    for (i, t) in summary.trials.iter().enumerate() {
        assert_eq!(t.trial, i);
    }
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = BenchConfig {
        trials: 0,
        ..Default::default()
    };
    assert!(matches!(Harness::new(config, Vec::new()), Err(BenchError::Config(_))));
}

#[test]
fn test_range_too_wide_for_sampler_is_rejected() {
    let config = BenchConfig {
        trials: 1,
        count: 1,
        min: -3.0e38,
        max: 3.0e38,
        seed: Some(1),
    };
    assert!(matches!(Harness::new(config, Vec::new()), Err(BenchError::Config(_))));
}

#[test]
fn test_unallocatable_batch_fails_cleanly() {
    let config = BenchConfig {
        trials: 3,
        count: 1 << 60,
        seed: Some(0),
        ..Default::default()
    };

    let mut harness = Harness::new(config, Vec::new()).unwrap();
    let err = harness.run().unwrap_err();
    assert!(
        matches!(err, BenchError::Allocation { trial: 0, .. }),
        "unexpected error: {}",
        err
    );
    assert!(err.to_string().contains("left"));

    // no numeric output after the failure
    assert!(harness.into_output().is_empty());
}

#[test]
fn test_allocator_refusal_fails_cleanly() {
    // 2^34 matrices is 1 TiB per buffer: representable, but not allocatable
    let config = BenchConfig {
        trials: 1,
        count: 1 << 34,
        seed: Some(0),
        ..Default::default()
    };

    let mut harness = Harness::new(config, Vec::new()).unwrap();
    let err = harness.run().unwrap_err();
    match &err {
        BenchError::Allocation {
            buffer,
            trial,
            count,
            ..
        } => {
            assert_eq!(*buffer, BufferRole::Left);
            assert_eq!(*trial, 0);
            assert_eq!(*count, 1 << 34);
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(err.to_string().contains("allocator"), "unexpected message: {}", err);
    assert!(harness.into_output().is_empty());
}

#[test]
fn test_binary_exits_nonzero_on_allocation_failure() {
    let output = Command::new(env!("CARGO_BIN_EXE_matconv"))
        .args(["--trials", "1", "--count", "1152921504606846976", "--seed", "0"])
        .env("RUST_LOG", "error")
        .output()
        .expect("failed to run matconv binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("left"), "missing diagnostic: {}", stderr);
}

#[test]
fn test_binary_reports_failure_with_logging_off() {
    let output = Command::new(env!("CARGO_BIN_EXE_matconv"))
        .args(["--trials", "1", "--count", "1152921504606846976", "--seed", "0"])
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run matconv binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("left buffer"), "missing diagnostic: {}", stderr);
}

#[test]
fn test_binary_rejects_range_too_wide() {
    let output = Command::new(env!("CARGO_BIN_EXE_matconv"))
        .args(["--trials", "1", "--count", "1", "--min", "-3e38", "--max", "3e38"])
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run matconv binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too wide"), "missing diagnostic: {}", stderr);
}

#[test]
fn test_binary_small_run_succeeds() {
    let output = Command::new(env!("CARGO_BIN_EXE_matconv"))
        .args(["--trials", "2", "--count", "32", "--seed", "9"])
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run matconv binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Differences: 0").count(), 2);
    assert!(stdout.contains("AVERAGES:  Return reference - "));
}
