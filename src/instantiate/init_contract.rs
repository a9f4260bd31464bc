use crate::core::msg::InitMsg;
use crate::core::state::{StateV1, STATE_V1};
use crate::migrate::version_info::migrate_version_info;
use crate::util::aliases::EntryPointResponse;
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use cosmwasm_std::{DepsMut, MessageInfo, Response};
use result_extensions::ResultExtensions;

/// The main functionality executed when the smart contract is first instantiated.  This creates
/// the internal contract [StateV1](crate::core::state::StateV1) value, which names the restricted
/// collection holding private deals and the addresses allowed to write to it.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` A custom instantiation message defined by this contract for creating the initial
/// configuration used by the contract.
pub fn init_contract(deps: DepsMut, info: MessageInfo, msg: InitMsg) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let state = StateV1::new(&msg);
    STATE_V1.save(deps.storage, &state)?;
    // Set the version info to the default contract values on instantiation
    migrate_version_info(deps.storage)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::InstantiateContract)
                .set_private_collection(&state.private_collection.name),
        )
        .to_ok()
}

#[cfg(test)]
mod tests {
    use crate::core::error::ContractError;
    use crate::core::state::STATE_V1;
    use crate::core::types::private_collection::DEFAULT_PRIVATE_COLLECTION_NAME;
    use crate::migrate::version_info::{get_version_info, CONTRACT_NAME, CONTRACT_VERSION};
    use crate::testutil::test_constants::{
        DEFAULT_ADMIN_ADDRESS, DEFAULT_DEALER_ADDRESS, DEFAULT_PRIVATE_COLLECTION,
    };
    use crate::testutil::test_utilities::{single_attribute_for_key, test_instantiate, InstArgs};
    use crate::util::constants::{ASSET_EVENT_TYPE_KEY, PRIVATE_COLLECTION_KEY};
    use crate::util::event_attributes::EventType;
    use cosmwasm_std::coin;
    use cosmwasm_std::testing::{mock_dependencies, mock_info};

    #[test]
    fn test_valid_default_init() {
        let mut deps = mock_dependencies();
        let response = test_instantiate(deps.as_mut(), &InstArgs::default())
            .expect("the default instantiate should produce a response without error");
        assert_eq!(
            2,
            response.attributes.len(),
            "the event type and collection name should be emitted",
        );
        assert_eq!(
            EventType::InstantiateContract.event_name().as_str(),
            single_attribute_for_key(&response, ASSET_EVENT_TYPE_KEY),
            "the proper event type should be emitted",
        );
        assert_eq!(
            DEFAULT_PRIVATE_COLLECTION,
            single_attribute_for_key(&response, PRIVATE_COLLECTION_KEY),
            "the configured collection name should be emitted",
        );
        assert!(
            response.messages.is_empty(),
            "instantiation should not produce messages",
        );
        let state = STATE_V1
            .load(deps.as_ref().storage)
            .expect("the contract state should be stored after instantiation");
        assert_eq!(DEFAULT_PRIVATE_COLLECTION, state.private_collection.name);
        assert_eq!(
            vec![DEFAULT_DEALER_ADDRESS.to_string()],
            state.private_collection.members,
        );
        let version_info = get_version_info(deps.as_ref().storage)
            .expect("version info should successfully load after instantiation");
        assert_eq!(
            CONTRACT_NAME, version_info.contract,
            "the contract name should be properly stored after a successful instantiation",
        );
        assert_eq!(
            CONTRACT_VERSION, version_info.version,
            "the contract version should be properly stored after a successful instantiation",
        );
    }

    #[test]
    fn test_init_defaults_the_collection_name() {
        let mut deps = mock_dependencies();
        test_instantiate(
            deps.as_mut(),
            &InstArgs {
                private_collection_name: None,
                ..Default::default()
            },
        )
        .expect("instantiation without a collection name should succeed");
        let state = STATE_V1.load(deps.as_ref().storage).unwrap();
        assert_eq!(
            DEFAULT_PRIVATE_COLLECTION_NAME, state.private_collection.name,
            "the default collection name should be used when none is provided",
        );
    }

    #[test]
    fn test_invalid_init_fails_for_provided_funds() {
        let mut deps = mock_dependencies();
        let error = test_instantiate(
            deps.as_mut(),
            &InstArgs {
                info: mock_info(DEFAULT_ADMIN_ADDRESS, &[coin(150, "nhash")]),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidFunds(_)),
            "the instantiation should reject funds, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_invalid_init_fails_for_invalid_init_msg() {
        let mut deps = mock_dependencies();
        let error = test_instantiate(
            deps.as_mut(),
            &InstArgs {
                private_collection_members: vec![],
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidMessageFields { .. }),
            "the instantiation should reject an empty member list, but got: {:?}",
            error,
        );
        assert!(
            STATE_V1.may_load(deps.as_ref().storage).unwrap().is_none(),
            "no state should be stored when the message is rejected",
        );
    }
}
