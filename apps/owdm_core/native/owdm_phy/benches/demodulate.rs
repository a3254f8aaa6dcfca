//! Demodulation benchmarks

use channel_physics::AwgnChannel;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use owdm_phy::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn benchmark_demodulate_noisy(c: &mut Criterion) {
    let mut group = c.benchmark_group("demodulate_64x100_10db");
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let (_, symbols) = SymbolGenerator::new(100, 64).generate(&mut rng);
    let channel = AwgnChannel::from_snr_db(10.0, 64).unwrap();

    for shaping in Shaping::catalog() {
        let modulator = WaveletModulator::new(Dwt, shaping, 64).unwrap();
        let demodulator = WaveletDemodulator::new(Dwt, shaping, 64).unwrap();
        let received = channel.apply(&modulator.modulate(&symbols).unwrap(), &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(shaping), &received, |b, r| {
            b.iter(|| black_box(demodulator.demodulate(r).unwrap()))
        });
    }
    group.finish();
}

fn benchmark_ber_point(c: &mut Criterion) {
    let config = SimulationConfig {
        n_subcarriers: 64,
        n_symbols: 100,
        waveforms: vec![Shaping::Wavelet(Wavelet::Haar)],
        axis: AxisKind::SnrDb,
        sweep: vec![10.0],
        trials_per_point: 1,
        seed: 4,
    };
    let driver = SimulationDriver::new(config).unwrap();

    c.bench_function("ber_point_haar_64x100", |b| {
        b.iter(|| black_box(driver.run_ber().unwrap()))
    });
}

criterion_group!(benches, benchmark_demodulate_noisy, benchmark_ber_point);
criterion_main!(benches);
