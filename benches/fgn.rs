use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use stochastic_paths::stochastic::noise::fgn::FgnAlgorithm;
use stochastic_paths::stochastic::noise::fgn::FGN;
use stochastic_paths::stochastic::process::fbm::FBM;
use stochastic_paths::traits::ProcessExt;

fn bench_fgn_by_size(c: &mut Criterion) {
  let mut group = c.benchmark_group("FGN_by_size");
  let fgn = FGN::new(0.7f64, None).unwrap();

  for &n in &[64, 256, 1024, 4096] {
    group.bench_with_input(BenchmarkId::new("davies_harte", n), &n, |b, &n| {
      b.iter(|| black_box(fgn.sample_with(n, FgnAlgorithm::DaviesHarte).unwrap()));
    });
    group.bench_with_input(BenchmarkId::new("hosking", n), &n, |b, &n| {
      b.iter(|| black_box(fgn.sample_with(n, FgnAlgorithm::Hosking).unwrap()));
    });
  }

  group.finish();
}

fn bench_fgn_by_hurst(c: &mut Criterion) {
  let mut group = c.benchmark_group("FGN_by_hurst");
  let n = 1024usize;

  for &h in &[0.1, 0.3, 0.5, 0.7, 0.9, 0.99] {
    let label = format!("H={:.2}", h);

    group.bench_with_input(BenchmarkId::new("auto", &label), &h, |b, &h| {
      let fgn = FGN::new(h, None).unwrap();
      b.iter(|| black_box(fgn.sample(n).unwrap()));
    });
  }

  group.finish();
}

fn bench_fgn_f32_vs_f64(c: &mut Criterion) {
  let mut group = c.benchmark_group("FGN_f32_vs_f64");
  let n = 4096usize;

  group.bench_function("f64/davies_harte", |b| {
    let fgn = FGN::new(0.7f64, None).unwrap();
    b.iter(|| black_box(fgn.sample(n).unwrap()));
  });

  group.bench_function("f32/davies_harte", |b| {
    let fgn = FGN::new(0.7f32, None).unwrap();
    b.iter(|| black_box(fgn.sample(n).unwrap()));
  });

  group.finish();
}

fn bench_fbm_sample_par(c: &mut Criterion) {
  let mut group = c.benchmark_group("FBM_sample_par");
  let n = 1024usize;
  let fbm = FBM::new(0.7f64, None).unwrap();

  for &m in &[10, 100] {
    group.bench_with_input(BenchmarkId::new("sample_par", m), &m, |b, &m| {
      b.iter(|| black_box(fbm.sample_par(m, n).unwrap()));
    });

    group.bench_with_input(BenchmarkId::new("sample_sequential", m), &m, |b, &m| {
      b.iter(|| {
        let v: Vec<_> = (0..m).map(|_| fbm.sample(n).unwrap()).collect();
        black_box(v)
      });
    });
  }

  group.finish();
}

criterion_group!(
  benches,
  bench_fgn_by_size,
  bench_fgn_by_hurst,
  bench_fgn_f32_vs_f64,
  bench_fbm_sample_par
);
criterion_main!(benches);
