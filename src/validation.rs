//! # Validation
//!
//! Parameter gates shared by every process. Each check either passes the
//! value through or fails before any sampling work starts.
//!
use crate::error::Result;
use crate::error::StochasticError;
use crate::traits::FloatExt;

/// Hurst exponent must lie strictly inside `(0, 1)`.
pub fn check_hurst<T: FloatExt>(hurst: T) -> Result<T> {
  if hurst > T::zero() && hurst < T::one() {
    Ok(hurst)
  } else {
    Err(StochasticError::InvalidParameter {
      name: "hurst",
      value: hurst.to_f64_lossy(),
      constraint: "a value in the open interval (0, 1)",
    })
  }
}

pub fn check_number<T: FloatExt>(value: T, name: &'static str) -> Result<T> {
  if value.is_finite() {
    Ok(value)
  } else {
    Err(StochasticError::InvalidParameter {
      name,
      value: value.to_f64_lossy(),
      constraint: "a finite number",
    })
  }
}

pub fn check_positive<T: FloatExt>(value: T, name: &'static str) -> Result<T> {
  if value.is_finite() && value > T::zero() {
    Ok(value)
  } else {
    Err(StochasticError::InvalidParameter {
      name,
      value: value.to_f64_lossy(),
      constraint: "a positive, finite number",
    })
  }
}

pub fn check_nonnegative<T: FloatExt>(value: T, name: &'static str) -> Result<T> {
  if value.is_finite() && value >= T::zero() {
    Ok(value)
  } else {
    Err(StochasticError::InvalidParameter {
      name,
      value: value.to_f64_lossy(),
      constraint: "a non-negative, finite number",
    })
  }
}

/// Time horizon, `1` when omitted.
pub fn check_horizon<T: FloatExt>(t: Option<T>) -> Result<T> {
  check_positive(t.unwrap_or(T::one()), "t")
}

/// Number of increments must be at least one.
pub fn check_increments(n: usize) -> Result<usize> {
  if n >= 1 {
    Ok(n)
  } else {
    Err(StochasticError::InvalidResolution { n })
  }
}

/// Times must start at or after zero and strictly increase. Returns the
/// increments between consecutive entries, with an implicit leading zero.
pub fn check_time_sequence<T: FloatExt>(times: &[T]) -> Result<Vec<T>> {
  if times.is_empty() {
    return Err(StochasticError::InvalidTimes {
      reason: "at least one time is required",
    });
  }
  if times.iter().any(|t| !t.is_finite()) {
    return Err(StochasticError::InvalidTimes {
      reason: "times must be finite",
    });
  }
  if times[0] < T::zero() {
    return Err(StochasticError::InvalidTimes {
      reason: "times must be non-negative",
    });
  }

  let mut prev = T::zero();
  let mut deltas = Vec::with_capacity(times.len());
  for (i, &t) in times.iter().enumerate() {
    if i > 0 && t <= prev {
      return Err(StochasticError::InvalidTimes {
        reason: "times must be strictly increasing",
      });
    }
    deltas.push(t - prev);
    prev = t;
  }

  Ok(deltas)
}
