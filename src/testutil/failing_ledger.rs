use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::service::ledger_stub::{
    HistoryIterator, LedgerIterator, LedgerReader, LedgerStub, TransientMap,
};
use crate::util::aliases::AssetResult;

/// A ledger whose every call fails as if the underlying store were unreachable.
pub struct FailingLedger;
impl FailingLedger {
    fn fail<T>(&self) -> AssetResult<T> {
        ContractError::storage("ledger is unavailable").to_err()
    }
}
impl LedgerReader for FailingLedger {
    fn get_state(&self, _key: &str) -> AssetResult<Option<Vec<u8>>> {
        self.fail()
    }

    fn get_state_by_range(&self, _start: &str, _end: &str) -> AssetResult<LedgerIterator<'_>> {
        self.fail()
    }

    fn get_history_for_key(&self, _key: &str) -> AssetResult<HistoryIterator<'_>> {
        self.fail()
    }

    fn get_private_data(&self, _collection: &str, _key: &str) -> AssetResult<Option<Vec<u8>>> {
        self.fail()
    }

    fn get_private_data_by_range(
        &self,
        _collection: &str,
        _start: &str,
        _end: &str,
    ) -> AssetResult<LedgerIterator<'_>> {
        self.fail()
    }

    fn get_private_data_hash(&self, _collection: &str, _key: &str) -> AssetResult<Option<Vec<u8>>> {
        self.fail()
    }
}
impl LedgerStub for FailingLedger {
    fn put_state(&mut self, _key: &str, _value: &[u8]) -> AssetResult<()> {
        self.fail()
    }

    fn put_private_data(
        &mut self,
        _collection: &str,
        _key: &str,
        _value: &[u8],
    ) -> AssetResult<()> {
        self.fail()
    }

    fn get_transient(&self) -> AssetResult<&TransientMap> {
        self.fail()
    }
}
