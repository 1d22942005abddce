//! # fGn
//!
//! $$
//! \operatorname{Cov}(\Delta B_i^H,\Delta B_j^H)=\tfrac12\left(|k+1|^{2H}-2|k|^{2H}+|k-1|^{2H}\right)\left(\tfrac{t}{n}\right)^{2H},\ k=i-j
//! $$
//!
//! Two exact samplers are available. Davies-Harte runs in `O(n log n)` but its
//! circulant embedding can fail for large Hurst exponents; Hosking runs in
//! `O(n^2)` and always succeeds. A failed embedding demotes the call to
//! Hosking and logs a warning.
//!
pub mod autocov;
pub mod davies_harte;
pub mod hosking;

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use rand::Rng;
use tracing::debug;
use tracing::warn;

use self::autocov::autocovariance_sequence;
use self::davies_harte::CirculantEmbedding;
use self::davies_harte::NegativeEigenvalue;
use crate::error::Result;
use crate::error::StochasticError;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;
use crate::validation::check_horizon;
use crate::validation::check_hurst;
use crate::validation::check_increments;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FgnAlgorithm {
  /// Davies-Harte first, Hosking if the embedding fails.
  #[default]
  Auto,
  Hosking,
  DaviesHarte,
}

impl FgnAlgorithm {
  pub fn name(&self) -> &'static str {
    match self {
      FgnAlgorithm::Auto => "auto",
      FgnAlgorithm::Hosking => "hosking",
      FgnAlgorithm::DaviesHarte => "daviesharte",
    }
  }

  fn first_attempt(self) -> Self {
    match self {
      FgnAlgorithm::Auto | FgnAlgorithm::DaviesHarte => FgnAlgorithm::DaviesHarte,
      FgnAlgorithm::Hosking => FgnAlgorithm::Hosking,
    }
  }
}

impl FromStr for FgnAlgorithm {
  type Err = StochasticError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "auto" => Ok(FgnAlgorithm::Auto),
      "hosking" => Ok(FgnAlgorithm::Hosking),
      "daviesharte" | "davies-harte" | "davies_harte" => Ok(FgnAlgorithm::DaviesHarte),
      _ => Err(StochasticError::UnrecognizedAlgorithm(s.to_string())),
    }
  }
}

impl fmt::Display for FgnAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Sampler state. Davies-Harte either succeeds or falls back once, Hosking
/// always succeeds, so at most two attempts are made.
enum Attempt<T: FloatExt> {
  Attempting(FgnAlgorithm),
  FallingBack(NegativeEigenvalue),
  Succeeded(Array1<T>),
}

#[derive(Debug, Clone, Copy)]
pub struct FGN<T: FloatExt> {
  hurst: T,
  t: T,
  algorithm: FgnAlgorithm,
}

impl<T: FloatExt> FGN<T> {
  /// `t` defaults to `1`.
  pub fn new(hurst: T, t: Option<T>) -> Result<Self> {
    Ok(Self {
      hurst: check_hurst(hurst)?,
      t: check_horizon(t)?,
      algorithm: FgnAlgorithm::Auto,
    })
  }

  /// Algorithm used by [`ProcessExt::sample`].
  pub fn with_algorithm(mut self, algorithm: FgnAlgorithm) -> Self {
    self.algorithm = algorithm;
    self
  }

  pub fn hurst(&self) -> T {
    self.hurst
  }

  pub fn t(&self) -> T {
    self.t
  }

  pub fn algorithm(&self) -> FgnAlgorithm {
    self.algorithm
  }

  pub fn set_hurst(&mut self, hurst: T) -> Result<()> {
    self.hurst = check_hurst(hurst)?;
    Ok(())
  }

  pub fn set_t(&mut self, t: T) -> Result<()> {
    self.t = check_horizon(Some(t))?;
    Ok(())
  }

  pub fn dt(&self, n: usize) -> T {
    self.t / T::from_usize_(n.max(1))
  }

  /// Standard deviation of a single increment, `(t/n)^H`.
  pub fn scale(&self, n: usize) -> T {
    self.dt(n).powf(self.hurst)
  }

  /// Unit-step autocovariances for lags `0..=n`.
  pub fn autocovariance(&self, n: usize) -> Array1<T> {
    autocovariance_sequence(self.hurst, n)
  }

  pub fn sample_with(&self, n: usize, algorithm: FgnAlgorithm) -> Result<Array1<T>> {
    self.sample_with_algorithm_rng(n, algorithm, &mut rand::thread_rng())
  }

  /// Samples with an algorithm given by name: `auto`, `hosking` or
  /// `daviesharte`.
  pub fn sample_named(&self, n: usize, algorithm: &str) -> Result<Array1<T>> {
    self.sample_named_with_rng(n, algorithm, &mut rand::thread_rng())
  }

  pub fn sample_named_with_rng<R: Rng + ?Sized>(
    &self,
    n: usize,
    algorithm: &str,
    rng: &mut R,
  ) -> Result<Array1<T>> {
    let n = check_increments(n)?;
    let algorithm: FgnAlgorithm = algorithm.parse()?;
    self.sample_with_algorithm_rng(n, algorithm, rng)
  }

  pub fn sample_with_algorithm_rng<R: Rng + ?Sized>(
    &self,
    n: usize,
    algorithm: FgnAlgorithm,
    rng: &mut R,
  ) -> Result<Array1<T>> {
    let n = check_increments(n)?;
    let gamma = self.autocovariance(n);
    debug!(hurst = %self.hurst, n, %algorithm, "sampling fractional gaussian noise");

    let mut state = Attempt::Attempting(algorithm.first_attempt());
    let noise = loop {
      state = match state {
        Attempt::Attempting(FgnAlgorithm::Hosking) => {
          let mut gn = vec![T::zero(); n];
          T::fill_standard_normal(rng, &mut gn);
          Attempt::Succeeded(hosking::sample(&gamma, &gn))
        }
        Attempt::Attempting(_) => match CirculantEmbedding::new(&gamma, n) {
          Ok(embedding) => {
            let mut gn = vec![T::zero(); 2 * n];
            T::fill_standard_normal(rng, &mut gn);
            Attempt::Succeeded(embedding.sample(&gn))
          }
          Err(err) => Attempt::FallingBack(err),
        },
        Attempt::FallingBack(err) => {
          warn!(
            hurst = %self.hurst,
            n,
            eigenvalue = err.value,
            index = err.index,
            "Davies-Harte embedding is not positive semi-definite, falling back to Hosking"
          );
          Attempt::Attempting(FgnAlgorithm::Hosking)
        }
        Attempt::Succeeded(noise) => break noise,
      };
    };

    let scale = self.scale(n);
    Ok(noise.mapv(|x| x * scale))
  }
}

impl<T: FloatExt> ProcessExt<T> for FGN<T> {
  type Output = Array1<T>;

  fn sample_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Self::Output> {
    self.sample_with_algorithm_rng(n, self.algorithm, rng)
  }
}
