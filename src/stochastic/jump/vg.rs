//! # VG
//!
//! $$
//! X_t=\theta\,G_t+\sigma\,W_{G_t},\quad G_t\sim\Gamma\!\left(\tfrac{t}{\nu},\nu\right)
//! $$
//!
use ndarray::Array1;
use rand::Rng;

use crate::error::Result;
use crate::stochastic::cumulative_path;
use crate::stochastic::time_grid;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;
use crate::validation::check_horizon;
use crate::validation::check_increments;
use crate::validation::check_number;
use crate::validation::check_positive;

/// Variance-gamma process: Brownian motion with drift run on a gamma clock.
#[derive(Debug, Clone, Copy)]
pub struct VG<T: FloatExt> {
  /// Drift of the subordinated Brownian motion (`theta`).
  drift: T,
  /// Variance rate of the gamma subordinator (`nu`).
  variance: T,
  /// Volatility of the subordinated Brownian motion (`sigma`).
  scale: T,
  t: T,
  zero: bool,
}

impl<T: FloatExt> VG<T> {
  /// Defaults follow the unit process: `t = 1`.
  pub fn new(drift: T, variance: T, scale: T, t: Option<T>) -> Result<Self> {
    Ok(Self {
      drift: check_number(drift, "drift")?,
      variance: check_positive(variance, "variance")?,
      scale: check_positive(scale, "scale")?,
      t: check_horizon(t)?,
      zero: true,
    })
  }

  pub fn with_zero(mut self, zero: bool) -> Self {
    self.zero = zero;
    self
  }

  pub fn drift(&self) -> T {
    self.drift
  }

  pub fn variance(&self) -> T {
    self.variance
  }

  pub fn scale(&self) -> T {
    self.scale
  }

  pub fn t(&self) -> T {
    self.t
  }

  pub fn set_drift(&mut self, drift: T) -> Result<()> {
    self.drift = check_number(drift, "drift")?;
    Ok(())
  }

  pub fn set_variance(&mut self, variance: T) -> Result<()> {
    self.variance = check_positive(variance, "variance")?;
    Ok(())
  }

  pub fn set_scale(&mut self, scale: T) -> Result<()> {
    self.scale = check_positive(scale, "scale")?;
    Ok(())
  }

  pub fn times(&self, n: usize) -> Array1<T> {
    time_grid(self.t, n)
  }
}

impl<T: FloatExt> ProcessExt<T> for VG<T> {
  type Output = Array1<T>;

  fn sample_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Self::Output> {
    let n = check_increments(n)?;
    let dt = self.t / T::from_usize_(n);

    let mut gammas = vec![T::zero(); n];
    T::fill_gamma(rng, dt / self.variance, self.variance, &mut gammas)?;
    let mut gn = vec![T::zero(); n];
    T::fill_standard_normal(rng, &mut gn);

    let increments = Array1::from_shape_fn(n, |i| {
      self.drift * gammas[i] + self.scale * gammas[i].sqrt() * gn[i]
    });

    Ok(cumulative_path(&increments, self.zero))
  }
}

#[cfg(test)]
mod tests {
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::*;
  use crate::error::StochasticError;

  #[test]
  fn path_shape_and_origin() {
    let vg = VG::new(0.1_f64, 0.2, 0.3, Some(1.0)).unwrap();
    let path = vg.sample(64).unwrap();
    assert_eq!(path.len(), 65);
    assert_eq!(path[0], 0.0);
    assert_eq!(vg.times(64).len(), 65);
    assert_eq!(vg.with_zero(false).sample(64).unwrap().len(), 64);
  }

  #[test]
  fn terminal_moments_match_subordination() {
    // E[X_t] = theta t, Var[X_t] = (sigma^2 + nu theta^2) t
    let (drift, variance, scale, t) = (0.5_f64, 0.3, 0.8, 2.0);
    let vg = VG::new(drift, variance, scale, Some(t)).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let m = 20_000;
    let ends: Vec<f64> = (0..m)
      .map(|_| vg.sample_with_rng(10, &mut rng).unwrap()[10])
      .collect();
    let mean = ends.iter().sum::<f64>() / m as f64;
    let var = ends.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / m as f64;
    let var_theory = (scale * scale + variance * drift * drift) * t;
    assert!((mean - drift * t).abs() < 0.05, "mean={mean}");
    assert!((var / var_theory - 1.0).abs() < 0.06, "var={var}, theory={var_theory}");
  }

  #[test]
  fn rejects_invalid_parameters() {
    assert!(VG::new(f64::NAN, 1.0, 1.0, None).is_err());
    assert!(VG::new(0.0_f64, 0.0, 1.0, None).is_err());
    assert!(VG::new(0.0_f64, 1.0, -1.0, None).is_err());
    assert!(VG::new(0.0_f64, 1.0, 1.0, Some(0.0)).is_err());

    let mut vg = VG::new(0.0_f64, 1.0, 1.0, None).unwrap();
    assert!(vg.set_scale(0.0).is_err());
    assert_eq!(vg.scale(), 1.0);
    assert_eq!(vg.sample(0), Err(StochasticError::InvalidResolution { n: 0 }));
  }
}
