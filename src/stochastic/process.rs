//! # Process
//!
//! $$
//! X_{t_k}=X_0+\sum_{i=1}^{k}\Delta X_i
//! $$
//!
pub mod fbm;
pub mod gamma;
pub mod random_walk;
