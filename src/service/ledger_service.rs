use cosmwasm_std::{Deps, DepsMut, Env, Storage};
use result_extensions::ResultExtensions;
use sha2::{Digest, Sha256};

use crate::core::state::{
    append_history, history_for_key, load_private_data, load_private_data_hash, load_world_state,
    range_private_data, range_world_state, save_private_data, save_world_state,
};
use crate::core::types::key_modification::KeyModification;
use crate::util::aliases::AssetResult;

use super::ledger_stub::{HistoryIterator, LedgerIterator, LedgerReader, LedgerStub, TransientMap};

/// A read-only view of the ledger backed by contract storage.  Used by queries.
pub struct ReadonlyLedgerService<'a> {
    storage: &'a dyn Storage,
}
impl<'a> ReadonlyLedgerService<'a> {
    pub fn new(deps: &Deps<'a>) -> Self {
        Self {
            storage: deps.storage,
        }
    }
}
impl<'a> LedgerReader for ReadonlyLedgerService<'a> {
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        load_world_state(self.storage, key).to_ok()
    }

    fn get_state_by_range(&self, start: &str, end: &str) -> AssetResult<LedgerIterator<'_>> {
        range_world_state(self.storage, start, end).to_ok()
    }

    fn get_history_for_key(&self, key: &str) -> AssetResult<HistoryIterator<'_>> {
        history_for_key(self.storage, key).to_ok()
    }

    fn get_private_data(&self, collection: &str, key: &str) -> AssetResult<Option<Vec<u8>>> {
        load_private_data(self.storage, collection, key).to_ok()
    }

    fn get_private_data_by_range(
        &self,
        collection: &str,
        start: &str,
        end: &str,
    ) -> AssetResult<LedgerIterator<'_>> {
        range_private_data(self.storage, collection, start, end).to_ok()
    }

    fn get_private_data_hash(&self, collection: &str, key: &str) -> AssetResult<Option<Vec<u8>>> {
        load_private_data_hash(self.storage, collection, key)
    }
}

/// The ledger as seen by a single executing transaction.  Every world state write is appended to
/// the key's history, and every private data write records a SHA-256 commitment hash.
pub struct LedgerService<'a> {
    deps: DepsMut<'a>,
    env: Env,
    transient_map: TransientMap,
}
impl<'a> LedgerService<'a> {
    pub fn new(deps: DepsMut<'a>, env: Env) -> Self {
        Self::with_transient(deps, env, TransientMap::new())
    }

    pub fn with_transient(deps: DepsMut<'a>, env: Env, transient_map: TransientMap) -> Self {
        Self {
            deps,
            env,
            transient_map,
        }
    }

    fn tx_id(&self) -> String {
        format!(
            "{}-{}",
            self.env.block.height,
            self.env
                .transaction
                .as_ref()
                .map(|tx| tx.index)
                .unwrap_or_default(),
        )
    }
}
impl<'a> LedgerReader for LedgerService<'a> {
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        load_world_state(&*self.deps.storage, key).to_ok()
    }

    fn get_state_by_range(&self, start: &str, end: &str) -> AssetResult<LedgerIterator<'_>> {
        range_world_state(&*self.deps.storage, start, end).to_ok()
    }

    fn get_history_for_key(&self, key: &str) -> AssetResult<HistoryIterator<'_>> {
        history_for_key(&*self.deps.storage, key).to_ok()
    }

    fn get_private_data(&self, collection: &str, key: &str) -> AssetResult<Option<Vec<u8>>> {
        load_private_data(&*self.deps.storage, collection, key).to_ok()
    }

    fn get_private_data_by_range(
        &self,
        collection: &str,
        start: &str,
        end: &str,
    ) -> AssetResult<LedgerIterator<'_>> {
        range_private_data(&*self.deps.storage, collection, start, end).to_ok()
    }

    fn get_private_data_hash(&self, collection: &str, key: &str) -> AssetResult<Option<Vec<u8>>> {
        load_private_data_hash(&*self.deps.storage, collection, key)
    }
}
impl<'a> LedgerStub for LedgerService<'a> {
    fn put_state(&mut self, key: &str, value: &[u8]) -> AssetResult<()> {
        let modification = KeyModification::new(self.tx_id(), value, self.env.block.time);
        save_world_state(self.deps.storage, key, value);
        append_history(self.deps.storage, key, &modification)
    }

    fn put_private_data(&mut self, collection: &str, key: &str, value: &[u8]) -> AssetResult<()> {
        let hash = Sha256::digest(value);
        save_private_data(self.deps.storage, collection, key, value, hash.as_slice())
    }

    fn get_transient(&self) -> AssetResult<&TransientMap> {
        (&self.transient_map).to_ok()
    }
}
