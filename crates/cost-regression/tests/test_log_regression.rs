//! Recovery tests for the log2 regression

use approx::assert_abs_diff_eq;
use cost_regression::{fit_log2, Error};

fn exact_series(a: f64, b: f64, xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| a * x.log2() + b).collect()
}

#[test]
fn test_recovers_noise_free_model() {
    let cases = [(1.0, 0.0), (2.5, -3.0), (-0.75, 120.0), (1250.0, 40000.0)];
    let xs: Vec<f64> = (0..40).map(|i| 10.0 + 3.0 * i as f64).collect();

    for (a, b) in cases {
        let ys = exact_series(a, b, &xs);
        let model = fit_log2(&xs, &ys).unwrap();

        let tol = 1e-9 * (1.0 + a.abs() + b.abs());
        assert_abs_diff_eq!(model.slope(), a, epsilon = tol);
        assert_abs_diff_eq!(model.intercept(), b, epsilon = tol);
        assert_abs_diff_eq!(model.r_squared(), 1.0, epsilon = 1e-9);
        assert!(model.p_value() < 1e-12, "p = {}", model.p_value());
    }
}

#[test]
fn test_powers_of_two() {
    let model = fit_log2(&[1.0, 2.0, 4.0, 8.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();
    assert_abs_diff_eq!(model.slope(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(model.intercept(), 0.0, epsilon = 1e-12);
    assert_eq!(model.sample_size(), 4);
}

#[test]
fn test_noisy_data_has_positive_stderr() {
    let xs: Vec<f64> = (1..=64).map(|i| i as f64 * 16.0).collect();
    let ys: Vec<f64> = xs
        .iter()
        .enumerate()
        .map(|(i, &x)| 3.0 * x.log2() + 10.0 + if i % 2 == 0 { 0.5 } else { -0.5 })
        .collect();

    let model = fit_log2(&xs, &ys).unwrap();
    assert_abs_diff_eq!(model.slope(), 3.0, epsilon = 0.1);
    assert!(model.std_err() > 0.0);
    assert!(model.intercept_std_err() > model.std_err());
    assert!(model.r_squared() < 1.0);
    assert!(model.r_squared() > 0.9);
}

#[test]
fn test_zero_x_fails() {
    let result = fit_log2(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_negative_x_fails() {
    let result = fit_log2(&[1.0, -2.0, 4.0], &[1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_length_mismatch_fails() {
    let result = fit_log2(&[1.0, 2.0, 4.0, 8.0], &[1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}
