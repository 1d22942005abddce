//! # Autocovariance
//!
//! $$
//! \gamma_H(k)=\tfrac12\left(|k-1|^{2H}-2|k|^{2H}+|k+1|^{2H}\right)
//! $$
//!
use ndarray::Array1;

use crate::traits::FloatExt;

/// Autocovariance of unit-step fGn at a single lag.
pub fn autocovariance<T: FloatExt>(hurst: T, k: usize) -> T {
  if k == 0 {
    return T::one();
  }

  let two_h = T::from_usize_(2) * hurst;
  let k = T::from_usize_(k);
  T::from_f64_fast(0.5)
    * ((k - T::one()).powf(two_h) - T::from_usize_(2) * k.powf(two_h) + (k + T::one()).powf(two_h))
}

/// Autocovariances for lags `0..=n`.
pub fn autocovariance_sequence<T: FloatExt>(hurst: T, n: usize) -> Array1<T> {
  Array1::from_shape_fn(n + 1, |k| autocovariance(hurst, k))
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;

  use super::*;

  #[test]
  fn lag_zero_is_unit_variance() {
    for h in [0.05_f64, 0.3, 0.5, 0.7, 0.99] {
      assert_eq!(autocovariance(h, 0), 1.0);
    }
  }

  #[test]
  fn independent_increments_at_half() {
    let gamma = autocovariance_sequence(0.5_f64, 64);
    assert_eq!(gamma.len(), 65);
    assert_eq!(gamma[0], 1.0);
    for &g in gamma.iter().skip(1) {
      assert_eq!(g, 0.0);
    }
  }

  #[test]
  fn sign_follows_memory_regime() {
    let persistent = autocovariance_sequence(0.8_f64, 32);
    let anti = autocovariance_sequence(0.2_f64, 32);
    for k in 1..=32 {
      assert!(persistent[k] > 0.0);
      assert!(anti[k] < 0.0);
    }
  }

  #[test]
  fn lag_one_matches_closed_form() {
    // gamma(1) = 2^{2H-1} - 1
    for h in [0.1_f64, 0.35, 0.72, 0.95] {
      assert_abs_diff_eq!(
        autocovariance(h, 1),
        2.0_f64.powf(2.0 * h - 1.0) - 1.0,
        epsilon = 1e-14
      );
    }
  }

  #[test]
  fn large_lags_decay_like_power_law() {
    // gamma(k) ~ H(2H-1) k^{2H-2}
    let h = 0.75_f64;
    let k = 10_000;
    let asymptotic = h * (2.0 * h - 1.0) * (k as f64).powf(2.0 * h - 2.0);
    let rel = (autocovariance(h, k) / asymptotic - 1.0).abs();
    assert!(rel < 1e-3, "relative error {rel}");
  }

  #[test]
  fn works_in_single_precision() {
    let gamma = autocovariance_sequence(0.7_f32, 8);
    assert_eq!(gamma.len(), 9);
    assert_abs_diff_eq!(gamma[1], 2.0_f32.powf(0.4) - 1.0, epsilon = 1e-6);
  }
}
