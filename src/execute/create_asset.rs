use cosmwasm_std::Response;
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::types::asset::Asset;
use crate::query::asset_exists::asset_exists;
use crate::service::ledger_stub::LedgerStub;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::functions::to_ledger_bytes;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CreateAssetV1 {
    pub asset_name: String,
    pub asset_property: String,
    pub owner: String,
}
impl CreateAssetV1 {
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        asset_name: S1,
        asset_property: S2,
        owner: S3,
    ) -> Self {
        CreateAssetV1 {
            asset_name: asset_name.into(),
            asset_property: asset_property.into(),
            owner: owner.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<CreateAssetV1> {
        match msg {
            ExecuteMsg::CreateAsset {
                asset_name,
                asset_property,
                owner,
            } => CreateAssetV1::new(asset_name, asset_property, owner).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::CreateAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Writes a brand new asset to the world state with no processing history and zeroed prices.
///
/// # Parameters
///
/// * `ledger` The ledger the executing transaction writes through.
/// * `msg` The asset to create.
pub fn create_asset<L: LedgerStub>(ledger: &mut L, msg: CreateAssetV1) -> EntryPointResponse {
    if asset_exists(ledger, &msg.asset_name)? {
        return ContractError::AlreadyExists {
            explanation: format!("the asset {} already exists", msg.asset_name),
        }
        .to_err();
    }
    let asset = Asset::new(&msg.asset_name, &msg.asset_property, &msg.owner);
    ledger.put_state(&asset.asset_name, &to_ledger_bytes(&asset)?)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(EventType::CreateAsset, &asset.asset_name)
                .set_owner(&asset.owner),
        )
        .to_ok()
}
