//! # stochastic-paths
//!
//! Exact sample paths of fractional Gaussian noise and fractional Brownian
//! motion, together with gamma, variance-gamma, Gaussian noise and random walk
//! generators.
//!
//! Every generator validates its parameters on construction and draws fresh
//! paths through [`ProcessExt`](traits::ProcessExt). Randomness can be
//! injected with the `*_with_rng` methods for reproducible runs.
//!
//! fGn is drawn with Davies-Harte (circulant embedding, `O(n log n)`) when the
//! embedding is valid and with Hosking (Durbin-Levinson, `O(n^2)`) otherwise.
//! A demotion is reported through `tracing` at WARN level.

pub mod error;
pub mod stochastic;
pub mod traits;
pub mod validation;

pub use error::StochasticError;
