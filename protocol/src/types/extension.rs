//! Placeholder extensions.

use crate::codec::Void;
use crate::static_variant;

static_variant! {
    /// `future_extensions`: reserved slots on transactions and most operations.
    /// Only the empty alternative exists, so in practice these lists are empty.
    pub enum FutureExtension {
        0 => Void(Void) = "void_t",
    }
}

/// The extension list type carried by transactions and most operations.
pub type Extensions = Vec<FutureExtension>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_to_bytes;

    #[test]
    fn empty_list_is_one_zero_byte() {
        assert_eq!(encode_to_bytes(&Extensions::new()).unwrap(), vec![0]);
    }

    #[test]
    fn void_entry_is_its_index() {
        let list: Extensions = serde_json::from_str(r#"[{"type": "void_t", "value": {}}]"#).unwrap();
        assert_eq!(encode_to_bytes(&list).unwrap(), vec![1, 0]);
    }
}
