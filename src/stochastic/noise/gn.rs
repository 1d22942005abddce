use ndarray::Array1;
use rand::Rng;

use crate::error::Result;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;
use crate::validation::check_horizon;
use crate::validation::check_increments;

/// Gaussian noise: `n` independent `N(0, t/n)` increments.
#[derive(Debug, Copy, Clone)]
pub struct Gn<T: FloatExt> {
  t: T,
}

impl<T: FloatExt> Gn<T> {
  pub fn new(t: Option<T>) -> Result<Self> {
    Ok(Gn {
      t: check_horizon(t)?,
    })
  }

  pub fn t(&self) -> T {
    self.t
  }

  pub fn dt(&self, n: usize) -> T {
    self.t / T::from_usize_(n.max(1))
  }

  pub fn fill_slice<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [T]) {
    if out.is_empty() {
      return;
    }
    T::fill_standard_normal(rng, out);
    let std_dev = self.dt(out.len()).sqrt();
    for x in out.iter_mut() {
      *x = *x * std_dev;
    }
  }
}

impl<T: FloatExt> ProcessExt<T> for Gn<T> {
  type Output = Array1<T>;

  fn sample_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Self::Output> {
    let n = check_increments(n)?;
    let mut out = vec![T::zero(); n];
    self.fill_slice(rng, &mut out);
    Ok(Array1::from(out))
  }
}
