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
pub struct ProcessAssetV1 {
    pub asset_name: String,
    pub asset_process_info: String,
}
impl ProcessAssetV1 {
    pub fn new<S1: Into<String>, S2: Into<String>>(asset_name: S1, asset_process_info: S2) -> Self {
        ProcessAssetV1 {
            asset_name: asset_name.into(),
            asset_process_info: asset_process_info.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<ProcessAssetV1> {
        match msg {
            ExecuteMsg::ProcessAsset {
                asset_name,
                asset_process_info,
            } => ProcessAssetV1::new(asset_name, asset_process_info).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::ProcessAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Replaces the processing annotation on an asset.  Ownership and prices are left untouched.
pub fn process_asset<L: LedgerStub>(ledger: &mut L, msg: ProcessAssetV1) -> EntryPointResponse {
    let mut asset = read_asset(ledger, &msg.asset_name)?;
    asset.asset_process_info = msg.asset_process_info;
    ledger.put_state(&asset.asset_name, &to_ledger_bytes(&asset)?)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(EventType::ProcessAsset, &asset.asset_name)
                .set_new_value(&asset.asset_process_info),
        )
        .to_ok()
}
