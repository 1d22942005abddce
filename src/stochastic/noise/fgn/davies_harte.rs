//! # Davies-Harte
//!
//! $$
//! c=\big(\gamma(0),\gamma(1),\dots,\gamma(n-1),0,\gamma(n-1),\dots,\gamma(1)\big),\quad
//! \lambda=\operatorname{FFT}(c)
//! $$
//!
//! The circulant with first row `c` contains the `n x n` Toeplitz covariance
//! of the noise as its upper-left block. When every eigenvalue is
//! non-negative the block can be sampled exactly with two FFTs.
//!
use ndarray::Array1;
use ndrustfft::ndfft;
use ndrustfft::FftHandler;
use num_complex::Complex;
use thiserror::Error;

use crate::traits::FloatExt;

/// Relative tolerance under which a negative eigenvalue is treated as
/// rounding noise and clamped to zero.
pub const EIGENVALUE_TOLERANCE: f64 = 1e-10;

/// The embedding is not positive semi-definite.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("circulant embedding has negative eigenvalue {value} at index {index}")]
pub struct NegativeEigenvalue {
  pub index: usize,
  pub value: f64,
}

pub struct CirculantEmbedding<T: FloatExt> {
  /// Number of noise values produced per draw.
  pub n: usize,
  eigenvalues: Array1<T>,
  fft_handler: FftHandler<T>,
}

impl<T: FloatExt> CirculantEmbedding<T> {
  /// Builds the embedding from autocovariances for lags `0..n` (`gamma`
  /// must hold at least `n` entries) and checks its spectrum.
  pub fn new(gamma: &Array1<T>, n: usize) -> Result<Self, NegativeEigenvalue> {
    let len = 2 * n;
    let mut row = Array1::<Complex<T>>::zeros(len);
    for k in 0..n {
      row[k] = Complex::new(gamma[k], T::zero());
    }
    for k in 1..n {
      row[len - k] = Complex::new(gamma[k], T::zero());
    }

    let fft_handler = FftHandler::new(len);
    let mut spectrum = Array1::<Complex<T>>::zeros(len);
    ndfft(&row, &mut spectrum, &fft_handler, 0);

    let mut eigenvalues = spectrum.mapv(|z| z.re);
    let largest = eigenvalues
      .iter()
      .fold(T::one(), |acc, &l| acc.max(num_traits::Float::abs(l)));
    let tolerance = T::from_f64_fast(EIGENVALUE_TOLERANCE) * largest;

    let (index, min) = eigenvalues
      .iter()
      .enumerate()
      .fold((0, T::infinity()), |(i0, m0), (i, &l)| {
        if l < m0 {
          (i, l)
        } else {
          (i0, m0)
        }
      });
    if min < -tolerance {
      return Err(NegativeEigenvalue {
        index,
        value: min.to_f64_lossy(),
      });
    }
    eigenvalues.mapv_inplace(|l| l.max(T::zero()));

    Ok(Self {
      n,
      eigenvalues,
      fft_handler,
    })
  }

  pub fn eigenvalues(&self) -> &Array1<T> {
    &self.eigenvalues
  }

  /// Maps `2n` standard normal draws to `n` unit-step noise values.
  pub fn sample(&self, gn: &[T]) -> Array1<T> {
    let n = self.n;
    let len = 2 * n;
    debug_assert_eq!(gn.len(), len);
    let (v, u) = gn.split_at(n);

    let lambda = &self.eigenvalues;
    let half = T::from_usize_(len);
    let quarter = T::from_usize_(2 * len);

    let mut w = Array1::<Complex<T>>::zeros(len);
    w[0] = Complex::new((lambda[0] / half).sqrt() * v[0], T::zero());
    w[n] = Complex::new((lambda[n] / half).sqrt() * u[0], T::zero());
    for j in 1..n {
      let a = (lambda[j] / quarter).sqrt();
      w[j] = Complex::new(a * v[j], a * u[j]);
      w[len - j] = w[j].conj();
    }

    let mut z = Array1::<Complex<T>>::zeros(len);
    ndfft(&w, &mut z, &self.fft_handler, 0);

    Array1::from_shape_fn(n, |k| z[k].re)
  }
}
