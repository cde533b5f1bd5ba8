//! Golden vectors from the live chain.
//!
//! Every transaction here was broadcast on mainnet; its id is the one block
//! explorers show. If any of these change, signatures produced with this
//! crate will be rejected by the network.

mod common;

use hive_protocol::block::{BlockHeader, BlockHeaderExtension, BlockId, Checksum, HardforkVersionVote, Version};
use hive_protocol::codec::HexBytes;
use hive_protocol::operation::Operation;
use hive_protocol::{
    block_digest, transaction_digest, Block, ChainId, DigestPipeline, Error, Transaction,
};

const RECURRENT_DIGEST: &str = "766af9c77a5ae87644370a384b93a5b2763b50837b656d22f19a90118e10526f";
const RECURRENT_BIN: &str = "beeab0de00000000000000000000000000000000000000000000000000000000\
    7f5cadf960114cca1e6901310a74656368636f646572780e74656368636f646572782e7673630200000000000000\
    2320bcbe003000050001010100";

// ---------------------------------------------------------------------------
// Transaction ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn claim_reward_balance_id() {
    common::init_tracing();
    let result = transaction_digest(&common::fixture("claim")).await.unwrap();
    assert_eq!(result.tx_id, "d992be1237dad6a9643d1d1b0d09cca42cee83f9");
}

#[tokio::test]
async fn update_proposal_id() {
    common::init_tracing();
    let result = transaction_digest(&common::fixture("updateProposal")).await.unwrap();
    assert_eq!(result.tx_id, "4d01373a67a4911acc2a39d6fac47421e760ec47");
}

#[tokio::test]
async fn comment_id() {
    common::init_tracing();
    let result = transaction_digest(&common::fixture("comment")).await.unwrap();
    assert_eq!(result.tx_id, "c4661343cde8e79872f1ba1d2708d6cbe0643c83");
}

#[tokio::test]
async fn recurrent_transfer_id_digest_and_bin() {
    common::init_tracing();
    let tx = common::fixture("recurrent_transfer");
    let result = transaction_digest(&tx).await.unwrap();
    assert_eq!(result.tx_id, "85db372428a47aba8aeb154df8650a900c612fa5");
    assert_eq!(hex::encode(result.digest), RECURRENT_DIGEST);
    let expected_bin: String = RECURRENT_BIN.split_whitespace().collect();
    assert_eq!(hex::encode(&result.bin), expected_bin);
}

#[test]
fn synchronous_helpers_agree_with_pipeline() {
    let tx = common::fixture("recurrent_transfer");
    assert_eq!(tx.id().unwrap(), "85db372428a47aba8aeb154df8650a900c612fa5");
    assert_eq!(
        hex::encode(tx.signing_digest(&ChainId::MAINNET).unwrap()),
        RECURRENT_DIGEST
    );
}

// ---------------------------------------------------------------------------
// Payload properties
// ---------------------------------------------------------------------------

#[tokio::test]
async fn signatures_never_reach_the_payload() {
    let signed = common::fixture("claim");
    assert!(signed.is_signed());

    let mut unsigned = signed.clone();
    unsigned.signatures.clear();
    let mut resigned = signed.clone();
    resigned.signatures.extend((0..5).map(|i| HexBytes::from(vec![i as u8; 65])));

    let a = transaction_digest(&signed).await.unwrap();
    let b = transaction_digest(&unsigned).await.unwrap();
    let c = transaction_digest(&resigned).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);

    let signature = &signed.signatures[0];
    assert!(!a
        .bin
        .windows(signature.len())
        .any(|window| window == signature.as_slice()));
}

#[tokio::test]
async fn key_order_in_json_does_not_matter() {
    let reordered = Transaction::from_json(
        r#"{
            "signatures": [],
            "operations": [{
                "value": {
                    "reward_vests": {"precision": 6, "amount": "14537722209", "nai": "@@000000037"},
                    "reward_hive": {"amount": "0", "nai": "@@000000021", "precision": 3},
                    "account": "techcoderx",
                    "reward_hbd": {"precision": 3, "nai": "@@000000013", "amount": "0"}
                },
                "type": "claim_reward_balance_operation"
            }],
            "extensions": [],
            "ref_block_prefix": 3934909655,
            "expiration": "2025-09-27T15:28:10",
            "ref_block_num": 52283
        }"#,
    )
    .unwrap();
    let original = common::fixture("claim");
    assert_eq!(
        transaction_digest(&reordered).await.unwrap(),
        transaction_digest(&original).await.unwrap()
    );
}

#[tokio::test]
async fn legacy_pair_form_encodes_identically() {
    let legacy = Transaction::from_json(
        r#"{
            "ref_block_num": 52283,
            "ref_block_prefix": 3934909655,
            "expiration": "2025-09-27T15:28:10",
            "operations": [["claim_reward_balance", {
                "account": "techcoderx",
                "reward_steem": "0.000 HIVE",
                "reward_sbd": "0.000 HBD",
                "reward_vests": "14537.722209 VESTS"
            }]],
            "extensions": []
        }"#,
    )
    .unwrap();
    let result = transaction_digest(&legacy).await.unwrap();
    assert_eq!(result.tx_id, "d992be1237dad6a9643d1d1b0d09cca42cee83f9");
}

#[tokio::test]
async fn testnet_changes_digest_but_not_id() {
    let tx = common::fixture("comment");
    let mainnet = transaction_digest(&tx).await.unwrap();
    let testnet = DigestPipeline::new()
        .with_chain_id("18dcf0a285365fc58b71f18b3d3fec954aa0c141c44e4e5cb4cf777b9eab274e".parse().unwrap())
        .transaction(&tx)
        .await
        .unwrap();
    assert_eq!(mainnet.tx_id, testnet.tx_id);
    assert_ne!(mainnet.digest, testnet.digest);
    assert_eq!(mainnet.bin[32..], testnet.bin[32..]);
}

#[tokio::test]
async fn unknown_operation_fails_the_whole_digest() {
    let tx = Transaction::from_json(
        r#"{
            "ref_block_num": 1,
            "ref_block_prefix": 2,
            "expiration": "2025-01-01T00:00:00",
            "operations": [{"type": "teleport_operation", "value": {"to": "mars"}}]
        }"#,
    )
    .unwrap();
    assert!(matches!(tx.operations[0], Operation::Unknown(_)));

    let err = transaction_digest(&tx).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "unable to serialize transaction: unknown operation kind: teleport_operation"
    );
    assert!(matches!(err.root_cause(), Error::UnknownOperationKind(_)));
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

fn header() -> BlockHeader {
    BlockHeader {
        previous: BlockId::from_hex("04c4b40011223344556677889900aabbccddeeff").unwrap(),
        timestamp: "2023-10-01T12:00:03".parse().unwrap(),
        witness: "blocktrades".into(),
        transaction_merkle_root: Checksum::default(),
        extensions: Vec::new(),
    }
}

#[tokio::test]
async fn block_hash_vector() {
    common::init_tracing();
    let result = block_digest(&Block::from(header())).await.unwrap();
    assert_eq!(
        result.hash,
        "aeaf4215c6ac401d014aa40113704875638ff926964e5a530e7edd2dabdc94c2"
    );
}

#[tokio::test]
async fn block_hash_covers_extensions() {
    let mut header = header();
    let version: Version = "1.27.0".parse().unwrap();
    header.extensions = vec![
        BlockHeaderExtension::from(version),
        BlockHeaderExtension::from(HardforkVersionVote {
            hf_version: version,
            hf_time: header.timestamp,
        }),
    ];
    let result = block_digest(&Block::from(header)).await.unwrap();
    assert_eq!(
        result.hash,
        "12d941f108b876d38f1d50f510f48c602297be8ba7ef1e2c16fe9450ce4143c4"
    );
}

#[tokio::test]
async fn block_hash_ignores_signature_and_transactions() {
    let bare = Block::from(header());
    let mut full = bare.clone();
    full.witness_signature = Some([3u8; 65].into());
    full.transactions.push(common::fixture("claim"));
    assert_eq!(
        block_digest(&bare).await.unwrap(),
        block_digest(&full).await.unwrap()
    );
}
