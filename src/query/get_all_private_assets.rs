use cosmwasm_std::{to_json_binary, Binary, Deps};
use result_extensions::ResultExtensions;

use crate::core::state::STATE_V1;
use crate::core::types::private_asset::PrivateAsset;
use crate::service::ledger_service::ReadonlyLedgerService;
use crate::service::ledger_stub::LedgerReader;
use crate::util::aliases::AssetResult;
use crate::util::functions::from_ledger_bytes;

/// Scans an entire restricted collection in key order.
pub fn get_all_private_assets<L: LedgerReader>(
    ledger: &L,
    collection: &str,
) -> AssetResult<Vec<PrivateAsset>> {
    let mut assets = vec![];
    for record in ledger.get_private_data_by_range(collection, "", "")? {
        assets.push(from_ledger_bytes::<PrivateAsset>(&record?.value)?);
    }
    assets.to_ok()
}

pub fn query_get_all_private_assets(deps: &Deps) -> AssetResult<Binary> {
    let state = STATE_V1.load(deps.storage)?;
    to_json_binary(&get_all_private_assets(
        &ReadonlyLedgerService::new(deps),
        &state.private_collection.name,
    )?)?
    .to_ok()
}
