use std::collections::BTreeMap;

use cosmwasm_std::Binary;

use crate::core::types::key_modification::KeyModification;
use crate::core::types::ledger_record::LedgerRecord;
use crate::util::aliases::AssetResult;

/// Caller-supplied values handed to a single execution and never written to the world state.
pub type TransientMap = BTreeMap<String, Binary>;

/// A range scan over ledger keys.  Dropping the iterator releases the underlying cursor.
pub type LedgerIterator<'a> = Box<dyn Iterator<Item = AssetResult<LedgerRecord>> + 'a>;

/// A scan over the writes made to a single key, oldest first.
pub type HistoryIterator<'a> = Box<dyn Iterator<Item = AssetResult<KeyModification>> + 'a>;

/// Read access to the ledger's world state and restricted collections.  Ordering, consensus and
/// commit semantics belong to the host chain; implementations only expose one transaction's view.
pub trait LedgerReader {
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>>;

    /// Scans keys in `[start, end)`.  An empty string leaves that side unbounded.
    fn get_state_by_range(&self, start: &str, end: &str) -> AssetResult<LedgerIterator<'_>>;

    fn get_history_for_key(&self, key: &str) -> AssetResult<HistoryIterator<'_>>;

    fn get_private_data(&self, collection: &str, key: &str) -> AssetResult<Option<Vec<u8>>>;

    fn get_private_data_by_range(
        &self,
        collection: &str,
        start: &str,
        end: &str,
    ) -> AssetResult<LedgerIterator<'_>>;

    /// Fetches the commitment hash recorded when the private data was written.
    fn get_private_data_hash(&self, collection: &str, key: &str) -> AssetResult<Option<Vec<u8>>>;
}

/// Write access to the ledger, available only while executing a transaction.
pub trait LedgerStub: LedgerReader {
    fn put_state(&mut self, key: &str, value: &[u8]) -> AssetResult<()>;

    fn put_private_data(&mut self, collection: &str, key: &str, value: &[u8]) -> AssetResult<()>;

    fn get_transient(&self) -> AssetResult<&TransientMap>;
}
