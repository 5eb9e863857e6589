//! Benchmarks for the ecrecover precompile emulation.
use alloy_primitives::{keccak256, B256};
use criterion::{criterion_group, criterion_main, Criterion};
use eth_ecrecover::{ec_recover_run, EcRecoverInput};
use k256::ecdsa::SigningKey;

fn bench_ecrecover(c: &mut Criterion) {
    // Generate a secp256k1 signature over a fixed digest.
    let key = SigningKey::from_slice(keccak256("bench key").as_slice()).unwrap();
    let hash = keccak256("1337133713371337");
    let (sig, recid) = key.sign_prehash_recoverable(hash.as_slice()).unwrap();

    let sig_bytes = sig.to_bytes();
    let input = EcRecoverInput {
        hash,
        v: B256::with_last_byte(27 + recid.to_byte()),
        r: B256::from_slice(&sig_bytes[..32]),
        s: B256::from_slice(&sig_bytes[32..]),
    }
    .encode();

    c.bench_function("ecrecover precompile", |b| b.iter(|| ec_recover_run(&input)));
}

criterion_group!(benches, bench_ecrecover);
criterion_main!(benches);
