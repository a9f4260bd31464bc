use cosmwasm_std::{to_json_binary, Binary, Deps};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::state::STATE_V1;
use crate::service::ledger_service::ReadonlyLedgerService;
use crate::service::ledger_stub::LedgerReader;
use crate::util::aliases::AssetResult;

/// Fetches the commitment hash of a private asset as a lowercase hex string.  The hash lets a
/// party outside the collection verify a deal's contents without being able to read them.
///
/// # Parameters
///
/// * `ledger` The ledger view to read from.
/// * `collection` The name of the restricted collection.
/// * `asset_name` The unique name of the private asset within the collection.
pub fn get_private_asset_hash<L: LedgerReader>(
    ledger: &L,
    collection: &str,
    asset_name: &str,
) -> AssetResult<String> {
    match ledger.get_private_data_hash(collection, asset_name)? {
        Some(hash) => hex::encode(hash).to_ok(),
        None => ContractError::not_found(format!("asset does not exist: {}", asset_name)).to_err(),
    }
}

pub fn query_get_private_asset_hash(deps: &Deps, asset_name: String) -> AssetResult<Binary> {
    let state = STATE_V1.load(deps.storage)?;
    to_json_binary(&get_private_asset_hash(
        &ReadonlyLedgerService::new(deps),
        &state.private_collection.name,
        &asset_name,
    )?)?
    .to_ok()
}
