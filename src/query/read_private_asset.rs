use cosmwasm_std::{to_json_binary, Binary, Deps};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::state::STATE_V1;
use crate::core::types::private_asset::PrivateAsset;
use crate::service::ledger_service::ReadonlyLedgerService;
use crate::service::ledger_stub::LedgerReader;
use crate::util::aliases::AssetResult;
use crate::util::functions::from_ledger_bytes;

/// Loads a private asset from a restricted collection.
///
/// # Parameters
///
/// * `ledger` The ledger view to read from.
/// * `collection` The name of the restricted collection.
/// * `asset_name` The unique name of the private asset within the collection.
pub fn read_private_asset<L: LedgerReader>(
    ledger: &L,
    collection: &str,
    asset_name: &str,
) -> AssetResult<PrivateAsset> {
    match ledger.get_private_data(collection, asset_name)? {
        Some(bytes) => from_ledger_bytes::<PrivateAsset>(&bytes),
        None => ContractError::not_found(format!("{} does not exist", asset_name)).to_err(),
    }
}

/// A query that fetches a target [PrivateAsset](crate::core::types::private_asset::PrivateAsset)
/// from the contract's configured private collection.
pub fn query_read_private_asset(deps: &Deps, asset_name: String) -> AssetResult<Binary> {
    let state = STATE_V1.load(deps.storage)?;
    let asset = read_private_asset(
        &ReadonlyLedgerService::new(deps),
        &state.private_collection.name,
        &asset_name,
    )?;
    to_json_binary(&asset)?.to_ok()
}
