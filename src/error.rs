//! # Errors
//!
//! Validation failures raised by process constructors, setters and samplers.
//! Numerical trouble inside a sampler that can be recovered from (an invalid
//! circulant embedding) never shows up here.
//!
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum StochasticError {
  /// A scalar parameter violates its domain.
  #[error("invalid parameter: {name} = {value}, expected {constraint}")]
  InvalidParameter {
    name: &'static str,
    value: f64,
    constraint: &'static str,
  },

  /// The requested number of increments is not a positive integer.
  #[error("invalid resolution: number of increments must be at least 1, got {n}")]
  InvalidResolution { n: usize },

  /// The algorithm name is not one of `auto`, `hosking` or `daviesharte`.
  #[error("unrecognized algorithm `{0}`, expected one of: auto, hosking, daviesharte")]
  UnrecognizedAlgorithm(String),

  /// A vector parameter has the wrong length.
  #[error("invalid length for {name}: expected {expected}, got {actual}")]
  InvalidLength {
    name: &'static str,
    expected: usize,
    actual: usize,
  },

  /// A time sequence passed to `sample_at` is not usable.
  #[error("invalid time sequence: {reason}")]
  InvalidTimes { reason: &'static str },
}

pub type Result<T, E = StochasticError> = std::result::Result<T, E>;
