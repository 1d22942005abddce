//! # Gamma process
//!
//! $$
//! G_{t+\Delta}-G_t\sim\Gamma\!\left(\frac{\mu^2\Delta}{\sigma^2},\ \frac{\sigma^2}{\mu}\right)
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
use crate::validation::check_positive;
use crate::validation::check_time_sequence;

/// Gamma process with mean `mean * t` and variance `variance * t`.
#[derive(Debug, Clone, Copy)]
pub struct GammaProcess<T: FloatExt> {
  mean: T,
  variance: T,
  t: T,
  zero: bool,
}

impl<T: FloatExt> GammaProcess<T> {
  /// Mean/variance parametrisation, per unit time.
  pub fn new(mean: T, variance: T, t: Option<T>) -> Result<Self> {
    Ok(Self {
      mean: check_positive(mean, "mean")?,
      variance: check_positive(variance, "variance")?,
      t: check_horizon(t)?,
      zero: true,
    })
  }

  /// Rate/scale parametrisation: `rate = mean^2 / variance` and
  /// `scale = mean / variance`.
  pub fn from_rate_scale(rate: T, scale: T, t: Option<T>) -> Result<Self> {
    let rate = check_positive(rate, "rate")?;
    let scale = check_positive(scale, "scale")?;
    let mean = rate / scale;
    Self::new(mean, mean / scale, t)
  }

  pub fn with_zero(mut self, zero: bool) -> Self {
    self.zero = zero;
    self
  }

  pub fn mean(&self) -> T {
    self.mean
  }

  pub fn variance(&self) -> T {
    self.variance
  }

  pub fn rate(&self) -> T {
    self.mean * self.mean / self.variance
  }

  pub fn scale(&self) -> T {
    self.mean / self.variance
  }

  pub fn t(&self) -> T {
    self.t
  }

  pub fn set_mean(&mut self, mean: T) -> Result<()> {
    self.mean = check_positive(mean, "mean")?;
    Ok(())
  }

  pub fn set_variance(&mut self, variance: T) -> Result<()> {
    self.variance = check_positive(variance, "variance")?;
    Ok(())
  }

  pub fn set_t(&mut self, t: T) -> Result<()> {
    self.t = check_horizon(Some(t))?;
    Ok(())
  }

  pub fn times(&self, n: usize) -> Array1<T> {
    time_grid(self.t, n)
  }

  /// Values at the given strictly increasing, non-negative times. A path
  /// starting at `0` reports `0` there.
  pub fn sample_at_with_rng<R: Rng + ?Sized>(
    &self,
    times: &[T],
    rng: &mut R,
  ) -> Result<Array1<T>> {
    let deltas = check_time_sequence(times)?;
    let scale = self.variance / self.mean;
    let shape_coef = self.mean * self.mean / self.variance;

    let mut out = Array1::<T>::zeros(deltas.len());
    let mut acc = T::zero();
    let mut draw = [T::zero()];
    for (i, &dt) in deltas.iter().enumerate() {
      if dt > T::zero() {
        T::fill_gamma(rng, shape_coef * dt, scale, &mut draw)?;
        acc += draw[0];
      }
      out[i] = acc;
    }

    Ok(out)
  }

  pub fn sample_at(&self, times: &[T]) -> Result<Array1<T>> {
    self.sample_at_with_rng(times, &mut rand::thread_rng())
  }
}

impl<T: FloatExt> ProcessExt<T> for GammaProcess<T> {
  type Output = Array1<T>;

  fn sample_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Self::Output> {
    let n = check_increments(n)?;
    let dt = self.t / T::from_usize_(n);
    let shape = self.mean * self.mean * dt / self.variance;
    let scale = self.variance / self.mean;

    let mut increments = vec![T::zero(); n];
    T::fill_gamma(rng, shape, scale, &mut increments)?;

    Ok(cumulative_path(&Array1::from(increments), self.zero))
  }
}
