//! # Random walk
//!
//! $$
//! S_k=\sum_{i=1}^{k}\xi_i,\quad \mathbb P(\xi_i=s_j)=\frac{w_j}{\sum_l w_l}
//! $$
//!
use ndarray::Array1;
use rand::distributions::Distribution;
use rand::distributions::WeightedIndex;
use rand::Rng;

use crate::error::Result;
use crate::error::StochasticError;
use crate::stochastic::cumulative_path;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;
use crate::validation::check_increments;
use crate::validation::check_nonnegative;
use crate::validation::check_number;

#[derive(Debug, Clone)]
pub struct RandomWalk<T: FloatExt> {
  steps: Vec<T>,
  weights: Vec<T>,
  p: Vec<T>,
  index: WeightedIndex<f64>,
  zero: bool,
}

impl<T: FloatExt> RandomWalk<T> {
  /// Walk over `steps`, equally weighted when `weights` is `None`.
  pub fn new(steps: Vec<T>, weights: Option<Vec<T>>) -> Result<Self> {
    if steps.is_empty() {
      return Err(StochasticError::InvalidLength {
        name: "steps",
        expected: 1,
        actual: 0,
      });
    }
    for &s in &steps {
      check_number(s, "step")?;
    }

    let weights = match weights {
      Some(w) if w.len() != steps.len() => {
        return Err(StochasticError::InvalidLength {
          name: "weights",
          expected: steps.len(),
          actual: w.len(),
        });
      }
      Some(w) => w,
      None => vec![T::one(); steps.len()],
    };
    for &w in &weights {
      check_nonnegative(w, "weight")?;
    }

    let total: T = weights.iter().copied().sum();
    if total <= T::zero() {
      return Err(StochasticError::InvalidParameter {
        name: "weights",
        value: total.to_f64_lossy(),
        constraint: "a positive total weight",
      });
    }
    let p = weights.iter().map(|&w| w / total).collect();
    let index = WeightedIndex::new(weights.iter().map(|w| w.to_f64_lossy())).map_err(|_| {
      StochasticError::InvalidParameter {
        name: "weights",
        value: total.to_f64_lossy(),
        constraint: "weights representable as finite f64",
      }
    })?;

    Ok(Self {
      steps,
      weights,
      p,
      index,
      zero: true,
    })
  }

  /// Steps of `-1` and `+1` with equal probability.
  pub fn simple() -> Result<Self> {
    Self::new(vec![-T::one(), T::one()], None)
  }

  pub fn with_zero(mut self, zero: bool) -> Self {
    self.zero = zero;
    self
  }

  pub fn steps(&self) -> &[T] {
    &self.steps
  }

  pub fn weights(&self) -> &[T] {
    &self.weights
  }

  /// Step probabilities, the normalised weights.
  pub fn p(&self) -> &[T] {
    &self.p
  }

  pub fn sample_increments_with_rng<R: Rng + ?Sized>(
    &self,
    n: usize,
    rng: &mut R,
  ) -> Result<Array1<T>> {
    let n = check_increments(n)?;
    Ok(Array1::from_shape_fn(n, |_| self.steps[self.index.sample(rng)]))
  }

  pub fn sample_increments(&self, n: usize) -> Result<Array1<T>> {
    self.sample_increments_with_rng(n, &mut rand::thread_rng())
  }
}

impl<T: FloatExt> ProcessExt<T> for RandomWalk<T> {
  type Output = Array1<T>;

  fn sample_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Self::Output> {
    let increments = self.sample_increments_with_rng(n, rng)?;
    Ok(cumulative_path(&increments, self.zero))
  }
}
