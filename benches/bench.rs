use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rand_chacha::ChaChaRng;
use rand_core::SeedableRng;

use aggsig::batch;
use aggsig::{ClientId, Coordinator, CoordinatorConfig, LocalCoordinator, LocalPeer};

fn coordinator(num_peers: usize, seed: u64) -> LocalCoordinator<LocalPeer<ChaChaRng>, ChaChaRng> {
    let peers: Vec<_> = (0..num_peers)
        .map(|i| LocalPeer::new(ChaChaRng::seed_from_u64(seed.wrapping_add(i as u64))))
        .collect();
    LocalCoordinator::new(
        peers,
        CoordinatorConfig::default(),
        ChaChaRng::seed_from_u64(seed.wrapping_add(9999)),
    )
}

fn sign_n(n: usize) -> Vec<(aggsig::CurvePublicKey, aggsig::Signature, &'static [u8])> {
    let c = coordinator(3, n as u64);
    (0..n)
        .map(|i| {
            let client = ClientId::new(format!("client-{i}")).unwrap();
            let pk = c.keygen(&client).unwrap();
            let sig = c.sign(&client, b"benchmark message").unwrap();
            (pk, sig, b"benchmark message".as_slice())
        })
        .collect()
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sign");
    for n in [1usize, 2, 3, 5, 8].iter() {
        group.throughput(Throughput::Elements(1));
        let coordinator = coordinator(*n, 42);
        let client = ClientId::new("bench-client").unwrap();
        coordinator.keygen(&client).unwrap();
        group.bench_with_input(BenchmarkId::new("peers", n), n, |b, _| {
            b.iter(|| coordinator.sign(&client, b"benchmark message").unwrap())
        });
    }
    group.finish();
}

fn bench_batch_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Verification");
    for n in [8usize, 16, 24, 32].iter() {
        group.throughput(Throughput::Elements(*n as u64));
        let sigs = sign_n(*n);

        group.bench_with_input(
            BenchmarkId::new("Unbatched verification", n),
            &sigs,
            |b, sigs| {
                b.iter(|| {
                    for (pk, sig, message) in sigs.iter() {
                        let _ = batch::verify_single(pk, sig, message);
                    }
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("Batched verification", n), &sigs, |b, sigs| {
            b.iter(|| {
                let mut verifier = batch::Verifier::new();
                for (pk, sig, message) in sigs.iter() {
                    let item = batch::Item::new(pk, sig, message).unwrap();
                    verifier.queue(item);
                }
                verifier.verify(rand::thread_rng())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sign, bench_batch_verify);
criterion_main!(benches);
