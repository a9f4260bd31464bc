use cosmwasm_std::{to_json_binary, Binary, Deps};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::types::asset::Asset;
use crate::service::ledger_service::ReadonlyLedgerService;
use crate::service::ledger_stub::LedgerReader;
use crate::util::aliases::AssetResult;
use crate::util::functions::from_ledger_bytes;

/// Loads an asset from the world state.
///
/// # Parameters
///
/// * `ledger` The ledger view to read from.
/// * `asset_name` The unique name of the asset.
pub fn read_asset<L: LedgerReader>(ledger: &L, asset_name: &str) -> AssetResult<Asset> {
    match ledger.get_state(asset_name)? {
        Some(bytes) => from_ledger_bytes::<Asset>(&bytes),
        None => {
            ContractError::not_found(format!("the asset {} does not exist", asset_name)).to_err()
        }
    }
}

/// A query that fetches a target [Asset](crate::core::types::asset::Asset) from the world state.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `asset_name` The unique name of the asset.
pub fn query_read_asset(deps: &Deps, asset_name: String) -> AssetResult<Binary> {
    let asset = read_asset(&ReadonlyLedgerService::new(deps), &asset_name)?;
    to_json_binary(&asset)?.to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::mock_dependencies;

    use crate::core::error::ContractError;
    use crate::core::state::save_world_state;
    use crate::service::ledger_service::ReadonlyLedgerService;
    use crate::testutil::test_constants::DEFAULT_ASSET_NAME;
    use crate::testutil::test_utilities::{
        get_default_asset, test_create_default_asset, test_instantiate_success, InstArgs,
    };

    use super::{query_read_asset, read_asset};

    #[test]
    fn test_read_created_asset() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), &InstArgs::default());
        test_create_default_asset(deps.as_mut());
        let asset = read_asset(
            &ReadonlyLedgerService::new(&deps.as_ref()),
            DEFAULT_ASSET_NAME,
        )
        .expect("the created asset should be readable");
        assert_eq!(
            get_default_asset(),
            asset,
            "a freshly created asset should have empty processing info and zero prices",
        );
    }

    #[test]
    fn test_read_missing_asset() {
        let deps = mock_dependencies();
        let error = query_read_asset(&deps.as_ref(), "nonexistent".to_string()).unwrap_err();
        assert!(
            matches!(error, ContractError::NotFound { .. }),
            "expected a missing asset to produce a not found error, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_read_malformed_asset() {
        let mut deps = mock_dependencies();
        save_world_state(deps.as_mut().storage, DEFAULT_ASSET_NAME, b"{not-json");
        let error = read_asset(
            &ReadonlyLedgerService::new(&deps.as_ref()),
            DEFAULT_ASSET_NAME,
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::DeserializationError { .. }),
            "expected malformed bytes to produce a deserialization error, but got: {:?}",
            error,
        );
    }
}
