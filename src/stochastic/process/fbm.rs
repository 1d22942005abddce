//! # fBM
//!
//! $$
//! \mathbb E[B_t^H B_s^H]=\tfrac12\left(t^{2H}+s^{2H}-|t-s|^{2H}\right)
//! $$
//!
use ndarray::Array1;
use rand::Rng;

use crate::error::Result;
use crate::stochastic::cumulative_path;
use crate::stochastic::noise::fgn::FgnAlgorithm;
use crate::stochastic::noise::fgn::FGN;
use crate::stochastic::time_grid;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Fractional Brownian motion on `[0, t]`, the running sum of fGn.
#[derive(Debug, Clone, Copy)]
pub struct FBM<T: FloatExt> {
  fgn: FGN<T>,
  /// Prefix the path with `B_0 = 0`.
  zero: bool,
}

impl<T: FloatExt> FBM<T> {
  pub fn new(hurst: T, t: Option<T>) -> Result<Self> {
    Ok(Self {
      fgn: FGN::new(hurst, t)?,
      zero: true,
    })
  }

  pub fn with_algorithm(mut self, algorithm: FgnAlgorithm) -> Self {
    self.fgn = self.fgn.with_algorithm(algorithm);
    self
  }

  pub fn with_zero(mut self, zero: bool) -> Self {
    self.zero = zero;
    self
  }

  pub fn hurst(&self) -> T {
    self.fgn.hurst()
  }

  pub fn t(&self) -> T {
    self.fgn.t()
  }

  pub fn zero(&self) -> bool {
    self.zero
  }

  pub fn set_hurst(&mut self, hurst: T) -> Result<()> {
    self.fgn.set_hurst(hurst)
  }

  pub fn set_t(&mut self, t: T) -> Result<()> {
    self.fgn.set_t(t)
  }

  /// Underlying noise generator.
  pub fn fgn(&self) -> &FGN<T> {
    &self.fgn
  }

  /// Grid `0, t/n, ..., t` matching a path with origin.
  pub fn times(&self, n: usize) -> Array1<T> {
    time_grid(self.t(), n)
  }
}

impl<T: FloatExt> ProcessExt<T> for FBM<T> {
  type Output = Array1<T>;

  fn sample_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Self::Output> {
    let fgn = self.fgn.sample_with_rng(n, rng)?;
    Ok(cumulative_path(&fgn, self.zero))
  }
}
