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
pub struct SellOriginalAssetV1 {
    pub asset_name: String,
    pub new_owner: String,
    pub asset_original_price: i64,
}
impl SellOriginalAssetV1 {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        asset_name: S1,
        new_owner: S2,
        asset_original_price: i64,
    ) -> Self {
        SellOriginalAssetV1 {
            asset_name: asset_name.into(),
            new_owner: new_owner.into(),
            asset_original_price,
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<SellOriginalAssetV1> {
        match msg {
            ExecuteMsg::SellOriginalAsset {
                asset_name,
                new_owner,
                asset_original_price,
            } => SellOriginalAssetV1::new(asset_name, new_owner, asset_original_price).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::SellOriginalAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Transfers an unprocessed asset to a new owner at the given price.
pub fn sell_original_asset<L: LedgerStub>(
    ledger: &mut L,
    msg: SellOriginalAssetV1,
) -> EntryPointResponse {
    let mut asset = read_asset(ledger, &msg.asset_name)?;
    asset.owner = msg.new_owner;
    asset.asset_original_price = msg.asset_original_price;
    ledger.put_state(&asset.asset_name, &to_ledger_bytes(&asset)?)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(EventType::SellOriginalAsset, &asset.asset_name)
                .set_owner(&asset.owner)
                .set_new_value(asset.asset_original_price),
        )
        .to_ok()
}
