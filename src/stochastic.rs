//! # Stochastic Process Simulation Modules
//!
//! `stochastic` groups the process generators of the crate. Every generator is
//! constructed once from validated parameters and then produces independent
//! finite sample paths through [`ProcessExt`].
//!
//! ## Modules
//!
//! | Module      | Description                                                                     |
//! |-------------|---------------------------------------------------------------------------------|
//! | [`noise`]   | Gaussian noise and fractional Gaussian noise (Hosking and Davies-Harte).        |
//! | [`process`] | Integrated and discrete processes: fBM, gamma process, random walk.             |
//! | [`jump`]    | Subordinated processes such as the variance-gamma process.                      |
//!
//! ## Parallelism
//!
//! `sample_par(m, n)` draws `m` paths over the rayon pool.
//!
//! ## Example Usage
//!
//! ```rust
//! use stochastic_paths::stochastic::noise::fgn::FGN;
//! use stochastic_paths::stochastic::ProcessExt;
//!
//! let fgn = FGN::new(0.7, Some(1.0)).unwrap();
//! let path = fgn.sample(1000).unwrap();
//! ```

pub mod jump;
pub mod noise;
pub mod process;

use ndarray::Array1;
use rand::Rng;
use rand_distr::Distribution;
use rand_distr::Gamma;
use rand_distr::StandardNormal;

use crate::error::Result;
use crate::error::StochasticError;
pub use crate::traits::FloatExt;
pub use crate::traits::ProcessExt;

/// Default number of increments
pub const N: usize = 1000;
/// Default time horizon
pub const HORIZON: f64 = 1.0;

macro_rules! impl_float_ext {
  ($ty:ty) => {
    impl FloatExt for $ty {
      fn from_usize_(n: usize) -> Self {
        n as $ty
      }

      fn from_f64_fast(v: f64) -> Self {
        v as $ty
      }

      fn to_f64_lossy(self) -> f64 {
        self as f64
      }

      fn fill_standard_normal<R: Rng + ?Sized>(rng: &mut R, out: &mut [Self]) {
        for x in out.iter_mut() {
          *x = StandardNormal.sample(rng);
        }
      }

      fn fill_gamma<R: Rng + ?Sized>(
        rng: &mut R,
        shape: Self,
        scale: Self,
        out: &mut [Self],
      ) -> Result<()> {
        let gamma = Gamma::new(shape, scale).map_err(|_| StochasticError::InvalidParameter {
          name: "gamma shape",
          value: shape as f64,
          constraint: "a positive, finite shape and scale",
        })?;
        for x in out.iter_mut() {
          *x = gamma.sample(rng);
        }
        Ok(())
      }
    }
  };
}

impl_float_ext!(f64);
impl_float_ext!(f32);

/// Uniform time grid `0, t/n, ..., t` with `n + 1` points.
pub fn time_grid<T: FloatExt>(t: T, n: usize) -> Array1<T> {
  Array1::linspace(T::zero(), t, n + 1)
}

/// Running sum of `increments`, prefixed with `0` when `zero` is set.
pub fn cumulative_path<T: FloatExt>(increments: &Array1<T>, zero: bool) -> Array1<T> {
  let offset = usize::from(zero);
  let mut path = Array1::<T>::zeros(increments.len() + offset);
  let mut acc = T::zero();

  for (i, &dx) in increments.iter().enumerate() {
    acc += dx;
    path[i + offset] = acc;
  }

  path
}
