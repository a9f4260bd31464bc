use crate::core::error::ContractError;
use crate::core::types::private_collection::PrivateCollection;
use crate::util::aliases::AssetResult;

use cosmwasm_std::MessageInfo;
use result_extensions::ResultExtensions;

/// Ensures that the info provided to the route does not include any funds.
///
/// # Parameters
///
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
///
/// # Examples
/// ```
/// use supply_chain_smart_contract::util::contract_helpers::check_funds_are_empty;
/// use cosmwasm_std::testing::mock_info;
///
/// let info = mock_info("producer", &[]);
/// check_funds_are_empty(&info).expect("no coin provided in info - should be success");
/// ```
pub fn check_funds_are_empty(info: &MessageInfo) -> AssetResult<()> {
    if !info.funds.is_empty() {
        ContractError::InvalidFunds("route requires no funds be present".to_string()).to_err()
    } else {
        Ok(())
    }
}

/// Ensures that the sender is allowed to write into the given restricted collection.
///
/// # Parameters
///
/// * `info` A message information object provided by the cosmwasm framework.
/// * `collection` The restricted collection the sender is attempting to write.
///
/// # Examples
/// ```
/// use supply_chain_smart_contract::core::types::private_collection::PrivateCollection;
/// use supply_chain_smart_contract::util::contract_helpers::check_collection_member;
/// use cosmwasm_std::testing::mock_info;
///
/// let collection = PrivateCollection::new("deals", vec!["dealer".to_string()]);
/// check_collection_member(&mock_info("dealer", &[]), &collection).expect("dealer is a member");
/// check_collection_member(&mock_info("stranger", &[]), &collection).unwrap_err();
/// ```
pub fn check_collection_member(
    info: &MessageInfo,
    collection: &PrivateCollection,
) -> AssetResult<()> {
    if !collection.is_member(&info.sender) {
        ContractError::Unauthorized {
            explanation: format!(
                "sender [{}] is not a member of private collection [{}]",
                info.sender, collection.name,
            ),
        }
        .to_err()
    } else {
        Ok(())
    }
}
