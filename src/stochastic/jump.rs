//! # Jump
//!
//! $$
//! X_t=\theta\,S_t+\sigma\,W_{S_t}
//! $$
//!
pub mod vg;
