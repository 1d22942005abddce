use std::env;

use anyhow::Context;
use anyhow::Result;
use stochastic_paths::stochastic::noise::fgn::FgnAlgorithm;
use stochastic_paths::stochastic::noise::fgn::FGN;
use stochastic_paths::stochastic::process::fbm::FBM;
use stochastic_paths::stochastic::ProcessExt;
use stochastic_paths::stochastic::N;
use tracing::info;

// Usage: stochastic-paths [hurst] [n] [algorithm]
fn main() -> Result<()> {
  tracing_subscriber::fmt::init();

  let args: Vec<String> = env::args().skip(1).collect();
  let hurst: f64 = match args.first() {
    Some(h) => h.parse().with_context(|| format!("invalid hurst exponent `{h}`"))?,
    None => 0.7,
  };
  let n: usize = match args.get(1) {
    Some(n) => n.parse().with_context(|| format!("invalid number of increments `{n}`"))?,
    None => N,
  };
  let algorithm: FgnAlgorithm = match args.get(2) {
    Some(a) => a.parse()?,
    None => FgnAlgorithm::Auto,
  };

  let fgn = FGN::new(hurst, None)?.with_algorithm(algorithm);
  let noise = fgn.sample(n)?;
  let lag1 = noise
    .iter()
    .zip(noise.iter().skip(1))
    .map(|(a, b)| a * b)
    .sum::<f64>()
    / (n.max(2) - 1) as f64;
  let var = noise.iter().map(|x| x * x).sum::<f64>() / n as f64;
  info!(hurst, n, %algorithm, var, lag1, "sampled fractional gaussian noise");

  let fbm = FBM::new(hurst, None)?.with_algorithm(algorithm);
  let path = fbm.sample(n)?;
  info!(terminal = path[n], "sampled fractional brownian motion");

  println!("{}", path.iter().map(|x| format!("{x:.6}")).collect::<Vec<_>>().join(","));

  Ok(())
}
