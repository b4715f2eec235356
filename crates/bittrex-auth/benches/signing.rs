//! Benchmarks for request signing
//!
//! Run with: cargo bench --bench signing

use bittrex_auth::{Credentials, FixedNonce, RequestSigner, RequestSpec};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const BASE_URL: &str = "https://bittrex.com/api/v1.1/";

fn bench_sign_url(c: &mut Criterion) {
    let creds = Credentials::new("bench_key", "bench_secret_0123456789abcdef").unwrap();
    let url = "https://bittrex.com/api/v1.1/account/getbalances?apikey=bench_key&nonce=1500000000";

    c.bench_function("hmac_sha512_hex", |b| {
        b.iter(|| creds.sign(black_box(url)).unwrap())
    });
}

fn bench_build_requests(c: &mut Criterion) {
    let creds = Credentials::new("bench_key", "bench_secret_0123456789abcdef").unwrap();
    let nonce = FixedNonce(1_500_000_000);
    let signer = RequestSigner::new(&creds, &nonce);

    let public = RequestSpec::public("public/getmarkets");
    let private = RequestSpec::private("market/buylimit")
        .with_param("market", "BTC-LTC")
        .with_param("quantity", "1.25")
        .with_param("rate", "0.0123");

    let mut group = c.benchmark_group("build");
    group.bench_function("public_no_params", |b| {
        b.iter(|| signer.build(BASE_URL, black_box(&public)).unwrap())
    });
    group.bench_function("private_limit_order", |b| {
        b.iter(|| signer.build(BASE_URL, black_box(&private)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_sign_url, bench_build_requests);
criterion_main!(benches);
