//! # Noise
//!
//! $$
//! \xi_i\sim\mathcal N\!\left(0,(t/n)^{2H}\right),\quad \operatorname{Cov}(\xi_i,\xi_j)=(t/n)^{2H}\gamma_H(|i-j|)
//! $$
//!
pub mod fgn;
pub mod gn;
