//! Shared helpers for the integration tests.

use std::sync::Once;

use hive_protocol::Transaction;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a `RUST_LOG`-filtered subscriber once per test binary.
/// `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer();
        let _ = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
            builder.json().try_init()
        } else {
            builder.pretty().try_init()
        };
    });
}

/// Wallet transactions captured from mainnet, keyed by name.
pub fn fixture(name: &str) -> Transaction {
    let all: Value = serde_json::from_str(include_str!("../fixtures/transactions.json"))
        .expect("fixture file is valid json");
    let document = all
        .get(name)
        .unwrap_or_else(|| panic!("no fixture named {name}"))
        .clone();
    serde_json::from_value(document).expect("fixture parses as a transaction")
}
