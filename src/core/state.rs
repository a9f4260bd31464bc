use cosmwasm_std::{Binary, Order, StdError, Storage};
use cosmwasm_storage::{to_length_prefixed_nested, PrefixedStorage, ReadonlyPrefixedStorage};
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::types::key_modification::KeyModification;
use crate::core::types::ledger_record::LedgerRecord;
use crate::core::types::private_collection::{PrivateCollection, DEFAULT_PRIVATE_COLLECTION_NAME};
use crate::service::ledger_stub::{HistoryIterator, LedgerIterator};
use crate::util::aliases::AssetResult;

/// The namespace holding the raw bytes of every public world state key.
const WORLD_STATE_NAMESPACE: &[u8] = b"world_state";
/// The root namespace for restricted collections.  Each collection nests beneath it by name.
const PRIVATE_DATA_NAMESPACE: &[u8] = b"private_data";

/// The contract's configuration, set on instantiation.
pub const STATE_V1: Item<StateV1> = Item::new("state_v1");
/// Every write made to a world state key, keyed by the key and its write sequence number.
const HISTORY: Map<(&str, u64), KeyModification> = Map::new("history");
/// The next write sequence number for each world state key.
const HISTORY_SEQUENCE: Map<&str, u64> = Map::new("history_sequence");
/// Commitment hashes for private data, keyed by collection name and key.
const PRIVATE_DATA_HASHES: Map<(&str, &str), Binary> = Map::new("private_data_hashes");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct StateV1 {
    pub private_collection: PrivateCollection,
}
impl StateV1 {
    pub fn new(msg: &InitMsg) -> Self {
        StateV1 {
            private_collection: PrivateCollection::new(
                msg.private_collection_name
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PRIVATE_COLLECTION_NAME.to_string()),
                msg.private_collection_members.clone(),
            ),
        }
    }
}

pub fn load_world_state(storage: &dyn Storage, key: &str) -> Option<Vec<u8>> {
    ReadonlyPrefixedStorage::multilevel(storage, &[WORLD_STATE_NAMESPACE]).get(key.as_bytes())
}

pub fn save_world_state(storage: &mut dyn Storage, key: &str, value: &[u8]) {
    PrefixedStorage::multilevel(storage, &[WORLD_STATE_NAMESPACE]).set(key.as_bytes(), value);
}

/// Iterates world state keys in ascending order.  The start key is inclusive and the end key is
/// exclusive.  An empty end key leaves the scan unbounded above.
pub fn range_world_state<'a>(
    storage: &'a dyn Storage,
    start_key: &str,
    end_key: &str,
) -> LedgerIterator<'a> {
    range_namespace(storage, &[WORLD_STATE_NAMESPACE], start_key, end_key)
}

/// Records a write against a world state key.  Entries are kept in write order.
pub fn append_history(
    storage: &mut dyn Storage,
    key: &str,
    modification: &KeyModification,
) -> AssetResult<()> {
    let sequence = HISTORY_SEQUENCE
        .may_load(storage, key)
        .map_err(to_storage_error)?
        .unwrap_or_default();
    HISTORY
        .save(storage, (key, sequence), modification)
        .map_err(to_storage_error)?;
    HISTORY_SEQUENCE
        .save(storage, key, &(sequence + 1))
        .map_err(to_storage_error)
}

/// Iterates every write made to a world state key, oldest first.
pub fn history_for_key<'a>(storage: &'a dyn Storage, key: &str) -> HistoryIterator<'a> {
    Box::new(
        HISTORY
            .prefix(key)
            .range(storage, None, None, Order::Ascending)
            .map(|result| {
                result
                    .map(|(_, modification)| modification)
                    .map_err(to_storage_error)
            }),
    )
}

pub fn load_private_data(storage: &dyn Storage, collection: &str, key: &str) -> Option<Vec<u8>> {
    ReadonlyPrefixedStorage::multilevel(storage, &[PRIVATE_DATA_NAMESPACE, collection.as_bytes()])
        .get(key.as_bytes())
}

/// Writes private data and the commitment hash that stands in for it.
pub fn save_private_data(
    storage: &mut dyn Storage,
    collection: &str,
    key: &str,
    value: &[u8],
    hash: &[u8],
) -> AssetResult<()> {
    PrefixedStorage::multilevel(storage, &[PRIVATE_DATA_NAMESPACE, collection.as_bytes()])
        .set(key.as_bytes(), value);
    PRIVATE_DATA_HASHES
        .save(storage, (collection, key), &Binary::from(hash))
        .map_err(to_storage_error)
}

pub fn range_private_data<'a>(
    storage: &'a dyn Storage,
    collection: &str,
    start_key: &str,
    end_key: &str,
) -> LedgerIterator<'a> {
    range_namespace(
        storage,
        &[PRIVATE_DATA_NAMESPACE, collection.as_bytes()],
        start_key,
        end_key,
    )
}

pub fn load_private_data_hash(
    storage: &dyn Storage,
    collection: &str,
    key: &str,
) -> AssetResult<Option<Vec<u8>>> {
    PRIVATE_DATA_HASHES
        .may_load(storage, (collection, key))
        .map(|hash| hash.map(|h| h.to_vec()))
        .map_err(to_storage_error)
}

fn range_namespace<'a>(
    storage: &'a dyn Storage,
    namespaces: &[&[u8]],
    start_key: &str,
    end_key: &str,
) -> LedgerIterator<'a> {
    let prefix = to_length_prefixed_nested(namespaces);
    let start = [prefix.as_slice(), start_key.as_bytes()].concat();
    let end = if end_key.is_empty() {
        namespace_upper_bound(&prefix)
    } else {
        Some([prefix.as_slice(), end_key.as_bytes()].concat())
    };
    let prefix_length = prefix.len();
    Box::new(
        storage
            .range(Some(start.as_slice()), end.as_deref(), Order::Ascending)
            .map(move |(key, value)| {
                String::from_utf8(key[prefix_length..].to_vec())
                    .map(|key| LedgerRecord::new(key, value))
                    .map_err(|e| {
                        ContractError::storage(format!("stored key was not valid utf8: {}", e))
                    })
            }),
    )
}

/// The smallest key that sorts after every key beginning with the prefix, or None if no such key
/// exists.
fn namespace_upper_bound(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut bound = prefix.to_vec();
    while let Some(last) = bound.pop() {
        if last < u8::MAX {
            bound.push(last + 1);
            return Some(bound);
        }
    }
    None
}

fn to_storage_error(error: StdError) -> ContractError {
    ContractError::storage(error.to_string())
}
