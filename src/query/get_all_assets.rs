use cosmwasm_std::{to_json_binary, Binary, Deps};
use result_extensions::ResultExtensions;

use crate::core::types::asset::Asset;
use crate::service::ledger_service::ReadonlyLedgerService;
use crate::service::ledger_stub::LedgerReader;
use crate::util::aliases::AssetResult;
use crate::util::functions::from_ledger_bytes;

/// Scans the entire world state in key order.  There is no pagination, so the result grows with
/// the number of assets ever created.
pub fn get_all_assets<L: LedgerReader>(ledger: &L) -> AssetResult<Vec<Asset>> {
    let mut assets = vec![];
    for record in ledger.get_state_by_range("", "")? {
        assets.push(from_ledger_bytes::<Asset>(&record?.value)?);
    }
    assets.to_ok()
}

pub fn query_get_all_assets(deps: &Deps) -> AssetResult<Binary> {
    to_json_binary(&get_all_assets(&ReadonlyLedgerService::new(deps))?)?.to_ok()
}
