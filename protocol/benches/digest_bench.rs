// Encoding and digest benchmarks.
//
// Covers the raw transaction encode, the synchronous id helper, the async
// pipeline on a current-thread runtime, and encode throughput as the number
// of operations per transaction grows.

use std::collections::BTreeSet;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hive_protocol::block::{BlockHeader, BlockId, Checksum};
use hive_protocol::operation::{CustomJsonOperation, TransferOperation};
use hive_protocol::types::{Asset, AssetSymbol, TimePointSec};
use hive_protocol::{Block, DigestPipeline, Transaction, TransactionBuilder};

fn transfer(i: usize) -> TransferOperation {
    TransferOperation {
        from: "alice".into(),
        to: "bob".into(),
        amount: Asset::from_scaled(1_000 + i as i64, AssetSymbol::Hive),
        memo: format!("invoice {:06}", i),
    }
}

fn transaction(operations: usize) -> Transaction {
    TransactionBuilder::new()
        .ref_block(23679, 291568045)
        .expiration(TimePointSec::from_secs(1_763_625_548))
        .operations((0..operations).map(transfer))
        .operation(CustomJsonOperation {
            required_auths: BTreeSet::new(),
            required_posting_auths: BTreeSet::from(["alice".to_string()]),
            id: "follow".into(),
            json: r#"["follow",{"follower":"alice","following":"bob","what":["blog"]}]"#.into(),
        })
        .build()
        .expect("valid transaction")
}

fn bench_encode(c: &mut Criterion) {
    let tx = transaction(1);
    c.bench_function("transaction/encode", |b| {
        b.iter(|| tx.to_bytes().unwrap());
    });
}

fn bench_id(c: &mut Criterion) {
    let tx = transaction(1);
    c.bench_function("transaction/id", |b| {
        b.iter(|| tx.id().unwrap());
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let pipeline = DigestPipeline::new();
    let tx = transaction(1);
    let block = Block::from(BlockHeader {
        previous: BlockId::from_hex("04c4b40011223344556677889900aabbccddeeff").unwrap(),
        timestamp: TimePointSec::from_secs(1_696_161_603),
        witness: "blocktrades".into(),
        transaction_merkle_root: Checksum::default(),
        extensions: Vec::new(),
    });

    c.bench_function("digest/transaction", |b| {
        b.iter(|| runtime.block_on(pipeline.transaction(&tx)).unwrap());
    });
    c.bench_function("digest/block", |b| {
        b.iter(|| runtime.block_on(pipeline.block(&block)).unwrap());
    });
}

fn bench_encode_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("transaction/encode_ops");

    for size in [1, 10, 100, 1000] {
        let tx = transaction(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tx, |b, tx| {
            b.iter(|| tx.to_bytes().unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_id,
    bench_pipeline,
    bench_encode_scaling,
);
criterion_main!(benches);
