use cosmwasm_std::{MessageInfo, Response};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::types::private_asset::PrivateAsset;
use crate::core::types::private_asset_input::PrivateAssetInput;
use crate::core::types::private_collection::PrivateCollection;
use crate::service::ledger_stub::{LedgerStub, TransientMap};
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::constants::PRIVATE_ASSET_TRANSIENT_KEY;
use crate::util::contract_helpers::check_collection_member;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::functions::{from_ledger_bytes, to_ledger_bytes};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PrivateDealV1 {
    pub transient_map: TransientMap,
}
impl PrivateDealV1 {
    pub fn new(transient_map: TransientMap) -> Self {
        PrivateDealV1 { transient_map }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<PrivateDealV1> {
        match msg {
            ExecuteMsg::PrivateDeal { transient_map } => PrivateDealV1::new(transient_map).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::PrivateDeal".to_string(),
            }
            .to_err(),
        }
    }
}

/// Records a confidential deal in the restricted collection.  The deal's content is taken from
/// the ledger's transient map under [PRIVATE_ASSET_TRANSIENT_KEY], so none of it appears in the
/// world state or in the emitted attributes.  Only the commitment hash is visible outside the
/// collection.
///
/// # Parameters
///
/// * `ledger` The ledger the executing transaction writes through.  Must carry the call's
/// transient map.
/// * `info` A message information object provided by the cosmwasm framework.  The sender must be
/// a member of the collection.
/// * `collection` The restricted collection configured for the contract.
pub fn private_deal<L: LedgerStub>(
    ledger: &mut L,
    info: &MessageInfo,
    collection: &PrivateCollection,
) -> EntryPointResponse {
    check_collection_member(info, collection)?;
    let input = read_transient_input(ledger)?;
    input.validate()?;
    if ledger
        .get_private_data(&collection.name, &input.asset_name)?
        .is_some()
    {
        return ContractError::AlreadyExists {
            explanation: format!("{} already exists", input.asset_name),
        }
        .to_err();
    }
    let asset = PrivateAsset::from(input);
    let bytes = to_ledger_bytes(&asset)?;
    ledger.put_private_data(&collection.name, &asset.asset_name, &bytes)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::PrivateDeal).set_private_collection(&collection.name),
        )
        .to_ok()
}

fn read_transient_input<L: LedgerStub>(ledger: &L) -> AssetResult<PrivateAssetInput> {
    match ledger.get_transient()?.get(PRIVATE_ASSET_TRANSIENT_KEY) {
        Some(bytes) => {
            // A null payload carries no fields and is reported by field validation
            let input = from_ledger_bytes::<Option<PrivateAssetInput>>(bytes.as_slice())?;
            input.unwrap_or_default().to_ok()
        }
        None => ContractError::MissingTransientData {
            field: PRIVATE_ASSET_TRANSIENT_KEY.to_string(),
        }
        .to_err(),
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{mock_dependencies, mock_env};
    use cosmwasm_std::Binary;

    use crate::contract::execute;
    use crate::core::error::ContractError;
    use crate::core::msg::{ExecuteMsg, QueryMsg};
    use crate::core::types::private_asset::{PrivateAsset, PRIVATE_ASSET_DOC_TYPE};
    use crate::core::types::private_asset_input::PrivateAssetInput;
    use crate::core::types::private_collection::PrivateCollection;
    use crate::service::ledger_service::LedgerService;
    use crate::service::ledger_stub::TransientMap;
    use crate::testutil::failing_ledger::FailingLedger;
    use crate::testutil::test_constants::{
        DEFAULT_ASSET_NAME, DEFAULT_ASSET_PROPERTY, DEFAULT_DEALER_ADDRESS,
        DEFAULT_OUTSIDER_ADDRESS, DEFAULT_PRIVATE_COLLECTION, DEFAULT_PRIVATE_OWNER,
        DEFAULT_PRIVATE_PRICE,
    };
    use crate::testutil::test_utilities::{
        empty_mock_info, get_default_private_asset_input, get_transient_map, query_as,
        single_attribute_for_key, test_instantiate_success, test_private_deal,
        test_private_deal_success, InstArgs,
    };
    use crate::util::constants::{
        ASSET_EVENT_TYPE_KEY, PRIVATE_ASSET_TRANSIENT_KEY, PRIVATE_COLLECTION_KEY,
    };
    use crate::util::event_attributes::EventType;

    use super::private_deal;

    #[test]
    fn test_valid_private_deal_via_execute() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), &InstArgs::default());
        let response = test_private_deal_success(deps.as_mut(), &get_default_private_asset_input());
        assert!(
            response.messages.is_empty(),
            "a private deal should not produce messages",
        );
        assert_eq!(
            2,
            response.attributes.len(),
            "a private deal should only emit the event type and the collection name",
        );
        assert_eq!(
            EventType::PrivateDeal.event_name().as_str(),
            single_attribute_for_key(&response, ASSET_EVENT_TYPE_KEY),
        );
        assert_eq!(
            DEFAULT_PRIVATE_COLLECTION,
            single_attribute_for_key(&response, PRIVATE_COLLECTION_KEY),
        );
        let asset = query_as::<PrivateAsset>(
            deps.as_ref(),
            QueryMsg::ReadAssetPrivate {
                asset_name: DEFAULT_ASSET_NAME.to_string(),
            },
        );
        assert_eq!(PRIVATE_ASSET_DOC_TYPE, asset.doc_type);
        assert_eq!(DEFAULT_ASSET_PROPERTY, asset.asset_property);
        assert_eq!(DEFAULT_PRIVATE_OWNER, asset.owner);
        assert_eq!(DEFAULT_PRIVATE_PRICE, asset.price);
        assert!(
            !query_as::<bool>(
                deps.as_ref(),
                QueryMsg::AssetExists {
                    asset_name: DEFAULT_ASSET_NAME.to_string(),
                },
            ),
            "a private deal should never be written to the world state",
        );
    }

    #[test]
    fn test_private_deal_rejects_non_members() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), &InstArgs::default());
        let error = execute(
            deps.as_mut(),
            mock_env(),
            empty_mock_info(DEFAULT_OUTSIDER_ADDRESS),
            ExecuteMsg::PrivateDeal {
                transient_map: get_transient_map(&get_default_private_asset_input()),
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::Unauthorized { .. }),
            "expected a non-member to be rejected, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_private_deal_missing_transient_data() {
        let mut deps = mock_dependencies();
        let mut ledger = LedgerService::new(deps.as_mut(), mock_env());
        let error = private_deal(
            &mut ledger,
            &empty_mock_info(DEFAULT_DEALER_ADDRESS),
            &default_collection(),
        )
        .unwrap_err();
        match error {
            ContractError::MissingTransientData { field } => {
                assert_eq!(PRIVATE_ASSET_TRANSIENT_KEY, field)
            }
            e => panic!("unexpected error encountered: {:?}", e),
        }
    }

    #[test]
    fn test_private_deal_malformed_transient_data() {
        let mut deps = mock_dependencies();
        let mut transient_map = TransientMap::new();
        transient_map.insert(
            PRIVATE_ASSET_TRANSIENT_KEY.to_string(),
            Binary::from(b"{not-json".to_vec()),
        );
        let mut ledger = LedgerService::with_transient(deps.as_mut(), mock_env(), transient_map);
        let error = private_deal(
            &mut ledger,
            &empty_mock_info(DEFAULT_DEALER_ADDRESS),
            &default_collection(),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::DeserializationError { .. }),
            "expected unparseable input to produce a deserialization error, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_private_deal_null_transient_data() {
        let mut deps = mock_dependencies();
        let mut transient_map = TransientMap::new();
        transient_map.insert(
            PRIVATE_ASSET_TRANSIENT_KEY.to_string(),
            Binary::from(b"null".to_vec()),
        );
        let mut ledger = LedgerService::with_transient(deps.as_mut(), mock_env(), transient_map);
        let error = private_deal(
            &mut ledger,
            &empty_mock_info(DEFAULT_DEALER_ADDRESS),
            &default_collection(),
        )
        .unwrap_err();
        match error {
            ContractError::ValidationError { field, .. } => assert_eq!(
                "assetname", field,
                "a null payload should fail validation on the first field",
            ),
            e => panic!("unexpected error encountered: {:?}", e),
        }
    }

    #[test]
    fn test_private_deal_field_validation() {
        let cases = vec![
            (PrivateAssetInput::new("", "p", "o", 1), "assetname"),
            (PrivateAssetInput::new("n", "", "o", 1), "assetproperty"),
            (PrivateAssetInput::new("n", "p", "", 1), "owner"),
            (PrivateAssetInput::new("n", "p", "o", 0), "price"),
            (PrivateAssetInput::new("n", "p", "o", -3), "price"),
        ];
        for (input, expected_field) in cases {
            let mut deps = mock_dependencies();
            test_instantiate_success(deps.as_mut(), &InstArgs::default());
            match test_private_deal(deps.as_mut(), &input).unwrap_err() {
                ContractError::ValidationError { field, .. } => assert_eq!(
                    expected_field, field,
                    "the first invalid field should be reported",
                ),
                e => panic!("unexpected error encountered: {:?}", e),
            }
        }
    }

    #[test]
    fn test_private_deal_duplicate_is_rejected() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), &InstArgs::default());
        test_private_deal_success(deps.as_mut(), &get_default_private_asset_input());
        let error =
            test_private_deal(deps.as_mut(), &get_default_private_asset_input()).unwrap_err();
        assert!(
            matches!(error, ContractError::AlreadyExists { .. }),
            "expected a second deal with the same name to be rejected, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_private_deal_storage_failure() {
        let error = private_deal(
            &mut FailingLedger,
            &empty_mock_info(DEFAULT_DEALER_ADDRESS),
            &default_collection(),
        )
        .unwrap_err();
        assert!(matches!(error, ContractError::StorageError { .. }));
    }

    fn default_collection() -> PrivateCollection {
        PrivateCollection::new(
            DEFAULT_PRIVATE_COLLECTION,
            vec![DEFAULT_DEALER_ADDRESS.to_string()],
        )
    }
}
