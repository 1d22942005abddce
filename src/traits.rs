//! # Traits
//!
//! $$
//! \text{Trait contracts: }\mathcal{P}:(\theta,n,\omega)\to X_{0..n}(\omega)
//! $$
//!
use std::fmt::Debug;
use std::fmt::Display;
use std::iter::Sum;
use std::ops::AddAssign;
use std::ops::SubAssign;

use ndarray::ScalarOperand;
use rand::Rng;
use rayon::prelude::*;

use crate::error::Result;

/// Floating point types the samplers run on.
///
/// The bounds cover everything `ndrustfft` needs from an FFT scalar, so any
/// `FloatExt` type can be pushed through the circulant embedding.
pub trait FloatExt:
  num_traits::Float
  + num_traits::FromPrimitive
  + num_traits::Signed
  + num_traits::FloatConst
  + Sum
  + Default
  + Debug
  + Display
  + Send
  + Sync
  + ScalarOperand
  + AddAssign
  + SubAssign
  + 'static
{
  fn from_usize_(n: usize) -> Self;
  fn from_f64_fast(v: f64) -> Self;
  /// Lossy conversion used when reporting a value inside an error.
  fn to_f64_lossy(self) -> f64;
  fn fill_standard_normal<R: Rng + ?Sized>(rng: &mut R, out: &mut [Self]);
  /// Fills `out` with `Gamma(shape, scale)` draws.
  fn fill_gamma<R: Rng + ?Sized>(rng: &mut R, shape: Self, scale: Self, out: &mut [Self])
    -> Result<()>;
}

/// A stateless generator of sample paths.
///
/// Implementors hold validated parameters only. Every call draws a fresh path
/// whose length is decided by `n`, the number of increments.
pub trait ProcessExt<T: FloatExt>: Send + Sync {
  type Output: Send;

  fn sample_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Self::Output>;

  fn sample(&self, n: usize) -> Result<Self::Output> {
    self.sample_with_rng(n, &mut rand::thread_rng())
  }

  /// Draws `m` independent paths on the rayon pool. Each worker uses its own
  /// thread-local generator.
  fn sample_par(&self, m: usize, n: usize) -> Result<Vec<Self::Output>> {
    (0..m).into_par_iter().map(|_| self.sample(n)).collect()
  }
}
