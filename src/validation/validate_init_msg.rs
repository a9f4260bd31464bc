use std::collections::HashSet;

use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::util::aliases::AssetResult;

pub fn validate_init_msg(msg: &InitMsg) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if let Some(collection_name) = &msg.private_collection_name {
        if collection_name.trim().is_empty() {
            invalid_fields.push("private_collection_name: must not be blank".to_string());
        }
    }
    if msg.private_collection_members.is_empty() {
        invalid_fields.push(
            "private_collection_members: at least one member must be supplied".to_string(),
        );
    }
    if msg
        .private_collection_members
        .iter()
        .any(|member| member.trim().is_empty())
    {
        invalid_fields.push("private_collection_members: addresses must not be blank".to_string());
    }
    if msg
        .private_collection_members
        .iter()
        .collect::<HashSet<_>>()
        .len()
        != msg.private_collection_members.len()
    {
        invalid_fields.push("private_collection_members: each member must be unique".to_string());
    }
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: "Instantiate".to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}
