//! # Hosking
//!
//! $$
//! X_k\mid X_{0..k-1}\sim\mathcal N\Big(\textstyle\sum_{j=1}^{k}\phi_{k,j}X_{k-j},\ v_k\Big),\quad
//! v_k=v_{k-1}\left(1-\phi_{k,k}^2\right)
//! $$
//!
use ndarray::Array1;

use crate::traits::FloatExt;

/// Exact fGn via the Durbin-Levinson recursion.
///
/// `gamma` holds the autocovariances for lags `0..n` (at least `n` entries)
/// and `gn` the `n` standard normal draws that drive the path. The output is
/// unit-step noise, the caller applies the horizon scaling.
pub fn sample<T: FloatExt>(gamma: &Array1<T>, gn: &[T]) -> Array1<T> {
  let n = gn.len();
  let mut fgn = Array1::<T>::zeros(n);
  if n == 0 {
    return fgn;
  }

  // phi[j - 1] = phi_{k,j}
  let mut phi = vec![T::zero(); n];
  let mut prev = vec![T::zero(); n];
  let mut v = gamma[0];
  fgn[0] = v.sqrt() * gn[0];

  for k in 1..n {
    let mut acc = gamma[k];
    for j in 1..k {
      acc -= phi[j - 1] * gamma[k - j];
    }
    let kappa = acc / v;

    prev[..k - 1].copy_from_slice(&phi[..k - 1]);
    for j in 1..k {
      phi[j - 1] = prev[j - 1] - kappa * prev[k - j - 1];
    }
    phi[k - 1] = kappa;
    v = (v * (T::one() - kappa * kappa)).max(T::zero());

    let mut mean = T::zero();
    for j in 1..=k {
      mean += phi[j - 1] * fgn[k - j];
    }
    fgn[k] = mean + v.sqrt() * gn[k];
  }

  fgn
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use ndarray::array;

  use super::*;
  use crate::stochastic::noise::fgn::autocov::autocovariance_sequence;

  #[test]
  fn independent_case_passes_draws_through() {
    let gamma = autocovariance_sequence(0.5_f64, 5);
    let gn = [0.3, -1.2, 0.7, 2.0, -0.1];
    let out = sample(&gamma, &gn);
    for (a, b) in out.iter().zip(gn.iter()) {
      assert_abs_diff_eq!(*a, *b, epsilon = 1e-15);
    }
  }

  #[test]
  fn second_value_is_conditional_on_first() {
    // X_1 = rho X_0 + sqrt(1 - rho^2) Z_1
    let h = 0.8_f64;
    let gamma = autocovariance_sequence(h, 2);
    let rho = gamma[1];
    let out = sample(&gamma, &[1.5, -0.4]);
    assert_abs_diff_eq!(out[0], 1.5, epsilon = 1e-15);
    assert_abs_diff_eq!(
      out[1],
      rho * 1.5 + (1.0 - rho * rho).sqrt() * -0.4,
      epsilon = 1e-14
    );
  }

  #[test]
  fn recursion_reproduces_cholesky_factor() {
    // With a unit impulse in position i, the path is column i of the lower
    // Cholesky factor L, so L L^T must give back the Toeplitz covariance.
    let h = 0.9_f64;
    let n = 6;
    let gamma = autocovariance_sequence(h, n);
    let mut cols = Vec::with_capacity(n);
    for i in 0..n {
      let mut gn = vec![0.0; n];
      gn[i] = 1.0;
      cols.push(sample(&gamma, &gn));
    }

    for r in 0..n {
      for c in 0..n {
        let cov: f64 = (0..n).map(|i| cols[i][r] * cols[i][c]).sum();
        let lag = if r > c { r - c } else { c - r };
        assert_abs_diff_eq!(cov, gamma[lag], epsilon = 1e-10);
      }
    }
  }

  #[test]
  fn empty_draws_give_empty_path() {
    let out = sample(&array![1.0_f64], &[]);
    assert!(out.is_empty());
  }
}
