use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::util::aliases::AssetResult;

/// Rejects malformed public asset messages before they reach the ledger.  Private deals carry
/// their content in the transient map, which is checked by the deal itself.
pub fn validate_execute_msg(msg: &ExecuteMsg) -> AssetResult<()> {
    match msg {
        ExecuteMsg::CreateAsset { asset_name, .. } => {
            validate_asset_name("ExecuteMsg::CreateAsset", asset_name)
        }
        ExecuteMsg::SellOriginalAsset { asset_name, .. } => {
            validate_asset_name("ExecuteMsg::SellOriginalAsset", asset_name)
        }
        ExecuteMsg::ProcessAsset { asset_name, .. } => {
            validate_asset_name("ExecuteMsg::ProcessAsset", asset_name)
        }
        ExecuteMsg::SellProcessedAsset { asset_name, .. } => {
            validate_asset_name("ExecuteMsg::SellProcessedAsset", asset_name)
        }
        ExecuteMsg::PrivateDeal { .. } => Ok(()),
    }
}

fn validate_asset_name(message_type: &str, asset_name: &str) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    // Stricter than private deal field validation, which only rejects empty strings
    if asset_name.trim().is_empty() {
        invalid_fields.push("asset_name: must not be blank".to_string());
    }
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: message_type.to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}
