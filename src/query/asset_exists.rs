use cosmwasm_std::{to_json_binary, Binary, Deps};
use result_extensions::ResultExtensions;

use crate::service::ledger_service::ReadonlyLedgerService;
use crate::service::ledger_stub::LedgerReader;
use crate::util::aliases::AssetResult;

/// Determines whether an asset with the given name is present in the world state.
///
/// # Parameters
///
/// * `ledger` The ledger view to read from.
/// * `asset_name` The unique name of the asset.
pub fn asset_exists<L: LedgerReader>(ledger: &L, asset_name: &str) -> AssetResult<bool> {
    ledger.get_state(asset_name)?.is_some().to_ok()
}

/// A query that reports whether an [Asset](crate::core::types::asset::Asset) exists.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `asset_name` The unique name of the asset.
pub fn query_asset_exists(deps: &Deps, asset_name: String) -> AssetResult<Binary> {
    let exists = asset_exists(&ReadonlyLedgerService::new(deps), &asset_name)?;
    to_json_binary(&exists)?.to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::mock_dependencies;

    use crate::core::error::ContractError;
    use crate::core::msg::QueryMsg;
    use crate::testutil::failing_ledger::FailingLedger;
    use crate::testutil::test_constants::DEFAULT_ASSET_NAME;
    use crate::testutil::test_utilities::{
        query_as, test_create_default_asset, test_instantiate_success, InstArgs,
    };

    use super::asset_exists;

    #[test]
    fn test_asset_exists_after_creation() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), &InstArgs::default());
        let exists_query = || QueryMsg::AssetExists {
            asset_name: DEFAULT_ASSET_NAME.to_string(),
        };
        assert!(
            !query_as::<bool>(deps.as_ref(), exists_query()),
            "the asset should not exist before it is created",
        );
        test_create_default_asset(deps.as_mut());
        assert!(
            query_as::<bool>(deps.as_ref(), exists_query()),
            "the asset should exist after it is created",
        );
    }

    #[test]
    fn test_asset_exists_propagates_storage_failures() {
        let error = asset_exists(&FailingLedger, DEFAULT_ASSET_NAME).unwrap_err();
        assert!(
            matches!(error, ContractError::StorageError { .. }),
            "expected a failed read to produce a storage error, but got: {:?}",
            error,
        );
    }
}
