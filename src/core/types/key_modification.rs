use cosmwasm_std::{Binary, Timestamp};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single historical write to a world state key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct KeyModification {
    /// Identifies the transaction that performed the write, as `{block_height}-{tx_index}`.
    pub tx_id: String,
    /// The raw bytes that were written.
    pub value: Binary,
    /// The block time at which the write was committed.
    pub timestamp: Timestamp,
    pub is_delete: bool,
}
impl KeyModification {
    pub fn new<S: Into<String>>(tx_id: S, value: &[u8], timestamp: Timestamp) -> Self {
        Self {
            tx_id: tx_id.into(),
            value: Binary::from(value),
            timestamp,
            is_delete: false,
        }
    }
}
