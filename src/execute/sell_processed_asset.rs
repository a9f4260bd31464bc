use cosmwasm_std::Response;
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::query::read_asset::read_asset;
use crate::service::ledger_stub::LedgerStub;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::functions::to_ledger_bytes;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SellProcessedAssetV1 {
    pub asset_name: String,
    pub new_owner: String,
    pub asset_process_price: i64,
}
impl SellProcessedAssetV1 {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        asset_name: S1,
        new_owner: S2,
        asset_process_price: i64,
    ) -> Self {
        SellProcessedAssetV1 {
            asset_name: asset_name.into(),
            new_owner: new_owner.into(),
            asset_process_price,
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<SellProcessedAssetV1> {
        match msg {
            ExecuteMsg::SellProcessedAsset {
                asset_name,
                new_owner,
                asset_process_price,
            } => SellProcessedAssetV1::new(asset_name, new_owner, asset_process_price).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::SellProcessedAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Transfers a processed asset to a new owner, recording the processed price.  The original
/// sale price is kept as it was.
pub fn sell_processed_asset<L: LedgerStub>(
    ledger: &mut L,
    msg: SellProcessedAssetV1,
) -> EntryPointResponse {
    let mut asset = read_asset(ledger, &msg.asset_name)?;
    asset.owner = msg.new_owner;
    asset.asset_process_price = msg.asset_process_price;
    ledger.put_state(&asset.asset_name, &to_ledger_bytes(&asset)?)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(EventType::SellProcessedAsset, &asset.asset_name)
                .set_owner(&asset.owner)
                .set_new_value(asset.asset_process_price),
        )
        .to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{mock_dependencies, mock_env};

    use crate::core::error::ContractError;
    use crate::core::msg::{ExecuteMsg, QueryMsg};
    use crate::core::types::asset::Asset;
    use crate::service::ledger_service::LedgerService;
    use crate::testutil::failing_ledger::FailingLedger;
    use crate::testutil::test_constants::DEFAULT_ASSET_NAME;
    use crate::testutil::test_utilities::{
        query_as, single_attribute_for_key, test_create_default_asset, test_execute,
        test_instantiate_success, InstArgs,
    };
    use crate::util::constants::{ASSET_EVENT_TYPE_KEY, ASSET_OWNER_KEY, NEW_VALUE_KEY};
    use crate::util::event_attributes::EventType;

    use super::{sell_processed_asset, SellProcessedAssetV1};

    #[test]
    fn test_valid_sell_processed_asset_via_execute() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), &InstArgs::default());
        test_create_default_asset(deps.as_mut());
        test_execute(
            deps.as_mut(),
            ExecuteMsg::SellOriginalAsset {
                asset_name: DEFAULT_ASSET_NAME.to_string(),
                new_owner: "processor".to_string(),
                asset_original_price: 100,
            },
        )
        .unwrap();
        let response = test_execute(
            deps.as_mut(),
            ExecuteMsg::SellProcessedAsset {
                asset_name: DEFAULT_ASSET_NAME.to_string(),
                new_owner: "grocer".to_string(),
                asset_process_price: 300,
            },
        )
        .expect("selling a processed asset should succeed");
        assert_eq!(
            EventType::SellProcessedAsset.event_name().as_str(),
            single_attribute_for_key(&response, ASSET_EVENT_TYPE_KEY),
        );
        assert_eq!(
            "grocer",
            single_attribute_for_key(&response, ASSET_OWNER_KEY),
        );
        assert_eq!("300", single_attribute_for_key(&response, NEW_VALUE_KEY));
        let asset = query_as::<Asset>(
            deps.as_ref(),
            QueryMsg::ReadAsset {
                asset_name: DEFAULT_ASSET_NAME.to_string(),
            },
        );
        assert_eq!("grocer", asset.owner);
        assert_eq!(300, asset.asset_process_price);
        assert_eq!(
            100, asset.asset_original_price,
            "the original sale price should be preserved",
        );
    }

    #[test]
    fn test_negative_processed_price_is_stored() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), &InstArgs::default());
        test_create_default_asset(deps.as_mut());
        test_execute(
            deps.as_mut(),
            ExecuteMsg::SellProcessedAsset {
                asset_name: DEFAULT_ASSET_NAME.to_string(),
                new_owner: "grocer".to_string(),
                asset_process_price: -40,
            },
        )
        .expect("public sale prices are not checked for sign");
        let asset = query_as::<Asset>(
            deps.as_ref(),
            QueryMsg::ReadAsset {
                asset_name: DEFAULT_ASSET_NAME.to_string(),
            },
        );
        assert_eq!("grocer", asset.owner);
        assert_eq!(-40, asset.asset_process_price);
        assert_eq!(
            0, asset.asset_original_price,
            "the original sale price should be untouched",
        );
    }

    #[test]
    fn test_sell_processed_missing_asset() {
        let mut deps = mock_dependencies();
        let mut ledger = LedgerService::new(deps.as_mut(), mock_env());
        let error = sell_processed_asset(
            &mut ledger,
            SellProcessedAssetV1::new("nonexistent", "grocer", 300),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::NotFound { .. }),
            "expected a missing asset to produce a not found error, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_sell_processed_storage_failure() {
        let error = sell_processed_asset(
            &mut FailingLedger,
            SellProcessedAssetV1::new(DEFAULT_ASSET_NAME, "grocer", 300),
        )
        .unwrap_err();
        assert!(matches!(error, ContractError::StorageError { .. }));
    }
}
