//! # Message Verifier Benchmarks
//!
//! | Benchmark | What it shows |
//! |-----------|---------------|
//! | `generate/*`, `verify/*` | Throughput by payload size and keyed hash |
//! | `compare/*` | Digest comparison cost with first vs last byte mismatch (should match) |
//! | `reject/*` | Cost of rejecting forged input (should be cheap and flat) |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use message_verifier::domain::compare::digests_match;
use message_verifier::{HashAlgorithm, JsonSerializer, MessageVerifier, MessageVerifierApi};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::time::Duration;

const SECRET: &str = "s3cr3t-32-bytes-minimum-xxxxxxxx";

fn verifier(hash: HashAlgorithm) -> MessageVerifier<JsonSerializer> {
    MessageVerifier::builder()
        .secret(SECRET)
        .hasher(hash)
        .serializer(JsonSerializer)
        .build()
        .expect("benchmark verifier")
}

fn random_payload(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn bench_generate_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("message-verifier");
    group.measurement_time(Duration::from_secs(5));

    for hash in [HashAlgorithm::Sha1, HashAlgorithm::Sha256, HashAlgorithm::Sha512] {
        let verifier = verifier(hash);

        for size in [32usize, 256, 4096] {
            let payload = random_payload(size);
            let signed = verifier.generate(&payload).expect("generate");

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("generate/{hash}"), size),
                &payload,
                |b, payload| b.iter(|| black_box(verifier.generate(payload).expect("generate"))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("verify/{hash}"), size),
                &signed,
                |b, signed| {
                    b.iter(|| black_box(verifier.verify::<String>(signed).expect("verify")))
                },
            );
        }
    }

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    for len in [40usize, 64, 128] {
        let expected = vec![b'a'; len];
        let mut first = expected.clone();
        first[0] = b'b';
        let mut last = expected.clone();
        last[len - 1] = b'b';

        group.bench_with_input(BenchmarkId::new("first_byte_mismatch", len), &first, |b, s| {
            b.iter(|| black_box(digests_match(black_box(&expected), black_box(s))))
        });
        group.bench_with_input(BenchmarkId::new("last_byte_mismatch", len), &last, |b, s| {
            b.iter(|| black_box(digests_match(black_box(&expected), black_box(s))))
        });
        group.bench_with_input(BenchmarkId::new("equal", len), &expected, |b, s| {
            b.iter(|| black_box(digests_match(black_box(&expected), black_box(s))))
        });
    }

    group.finish();
}

fn bench_reject(c: &mut Criterion) {
    let mut group = c.benchmark_group("reject");
    let verifier = verifier(HashAlgorithm::Sha1);
    let signed = verifier.generate(&random_payload(256)).expect("generate");
    let (data, _) = signed.split_once("--").expect("separator");
    let forged = format!("{data}--{}", "0".repeat(40));

    group.bench_function("malformed", |b| {
        b.iter(|| black_box(verifier.verify::<String>(black_box("a--b--c")).is_err()))
    });
    group.bench_function("forged_digest", |b| {
        b.iter(|| black_box(verifier.verify::<String>(black_box(&forged)).is_err()))
    });

    group.finish();
}

criterion_group!(benches, bench_generate_verify, bench_compare, bench_reject);
criterion_main!(benches);
