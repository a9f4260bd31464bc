use cosmwasm_std::{to_json_binary, Binary, Deps};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::service::ledger_service::ReadonlyLedgerService;
use crate::service::ledger_stub::LedgerReader;
use crate::util::aliases::AssetResult;
use crate::util::functions::format_history_entry;

use super::asset_exists::asset_exists;

/// Lists every write made to an asset, oldest first, formatted as `timestamp:value`.
///
/// # Parameters
///
/// * `ledger` The ledger view to read from.
/// * `asset_name` The unique name of the asset.
pub fn get_history<L: LedgerReader>(ledger: &L, asset_name: &str) -> AssetResult<Vec<String>> {
    if !asset_exists(ledger, asset_name)? {
        return ContractError::not_found(format!("the asset {} does not exist", asset_name))
            .to_err();
    }
    let mut history = vec![];
    for modification in ledger.get_history_for_key(asset_name)? {
        history.push(format_history_entry(&modification?)?);
    }
    history.to_ok()
}

pub fn query_get_history(deps: &Deps, asset_name: String) -> AssetResult<Binary> {
    let history = get_history(&ReadonlyLedgerService::new(deps), &asset_name)?;
    to_json_binary(&history)?.to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::mock_dependencies;

    use crate::core::error::ContractError;
    use crate::core::msg::{ExecuteMsg, QueryMsg};
    use crate::core::types::asset::Asset;
    use crate::testutil::test_constants::DEFAULT_ASSET_NAME;
    use crate::testutil::test_utilities::{
        get_default_asset, query_as, test_create_default_asset, test_execute,
        test_instantiate_success, InstArgs,
    };
    use crate::util::functions::to_ledger_bytes;

    use super::query_get_history;

    // mock_env() places every transaction at this block time
    const MOCK_BLOCK_TIME: &str = "2019-10-23 02:23:39 AM";

    #[test]
    fn test_history_lists_each_write_in_order() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), &InstArgs::default());
        test_create_default_asset(deps.as_mut());
        let mut sell = |new_owner: &str, price: i64| {
            test_execute(
                deps.as_mut(),
                ExecuteMsg::SellOriginalAsset {
                    asset_name: DEFAULT_ASSET_NAME.to_string(),
                    new_owner: new_owner.to_string(),
                    asset_original_price: price,
                },
            )
            .expect("the sale should succeed");
        };
        sell("B", 100);
        sell("C", 200);
        let history = query_as::<Vec<String>>(
            deps.as_ref(),
            QueryMsg::GetHistory {
                asset_name: DEFAULT_ASSET_NAME.to_string(),
            },
        );
        let created = get_default_asset();
        let expected = [
            created.clone(),
            Asset {
                owner: "B".to_string(),
                asset_original_price: 100,
                ..created.clone()
            },
            Asset {
                owner: "C".to_string(),
                asset_original_price: 200,
                ..created
            },
        ]
        .iter()
        .map(|asset| {
            format!(
                "{}:{}",
                MOCK_BLOCK_TIME,
                String::from_utf8(to_ledger_bytes(asset).unwrap()).unwrap(),
            )
        })
        .collect::<Vec<String>>();
        assert_eq!(
            expected, history,
            "the history should contain the creation followed by each sale in order",
        );
    }

    #[test]
    fn test_history_for_missing_asset() {
        let deps = mock_dependencies();
        let error = query_get_history(&deps.as_ref(), "nonexistent".to_string()).unwrap_err();
        assert!(
            matches!(error, ContractError::NotFound { .. }),
            "expected a missing asset to produce a not found error, but got: {:?}",
            error,
        );
    }
}
