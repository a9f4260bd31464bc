use cosmwasm_std::{
    from_json,
    testing::{mock_env, mock_info, MockApi, MockQuerier, MockStorage},
    Binary, Deps, DepsMut, Env, MessageInfo, OwnedDeps, Response,
};
use serde::de::DeserializeOwned;

use crate::{
    contract::{execute, instantiate, query},
    core::{
        msg::{ExecuteMsg, InitMsg, QueryMsg},
        types::{asset::Asset, private_asset_input::PrivateAssetInput},
    },
    service::ledger_stub::TransientMap,
    util::{
        aliases::EntryPointResponse, constants::PRIVATE_ASSET_TRANSIENT_KEY,
        functions::to_ledger_bytes,
    },
};

use super::test_constants::{
    DEFAULT_ADMIN_ADDRESS, DEFAULT_ASSET_NAME, DEFAULT_ASSET_OWNER, DEFAULT_ASSET_PROPERTY,
    DEFAULT_DEALER_ADDRESS, DEFAULT_PRIVATE_COLLECTION, DEFAULT_PRIVATE_OWNER,
    DEFAULT_PRIVATE_PRICE, DEFAULT_SENDER_ADDRESS,
};

pub type MockOwnedDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

pub struct InstArgs {
    pub env: Env,
    pub info: MessageInfo,
    pub private_collection_name: Option<String>,
    pub private_collection_members: Vec<String>,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            env: mock_env(),
            info: mock_info(DEFAULT_ADMIN_ADDRESS, &[]),
            private_collection_name: Some(DEFAULT_PRIVATE_COLLECTION.to_string()),
            private_collection_members: vec![DEFAULT_DEALER_ADDRESS.to_string()],
        }
    }
}

pub fn test_instantiate(deps: DepsMut, args: &InstArgs) -> EntryPointResponse {
    instantiate(
        deps,
        args.env.clone(),
        args.info.clone(),
        InitMsg {
            private_collection_name: args.private_collection_name.clone(),
            private_collection_members: args.private_collection_members.clone(),
        },
    )
}

pub fn test_instantiate_success(deps: DepsMut, args: &InstArgs) -> Response {
    test_instantiate(deps, args).expect("expected instantiation to succeed")
}

pub fn empty_mock_info<S: Into<String>>(sender: S) -> MessageInfo {
    mock_info(&sender.into(), &[])
}

/// Runs an execute message through the contract entrypoint as the default sender.
pub fn test_execute(deps: DepsMut, msg: ExecuteMsg) -> EntryPointResponse {
    execute(
        deps,
        mock_env(),
        empty_mock_info(DEFAULT_SENDER_ADDRESS),
        msg,
    )
}

pub fn get_create_default_asset_msg() -> ExecuteMsg {
    ExecuteMsg::CreateAsset {
        asset_name: DEFAULT_ASSET_NAME.to_string(),
        asset_property: DEFAULT_ASSET_PROPERTY.to_string(),
        owner: DEFAULT_ASSET_OWNER.to_string(),
    }
}

/// The record stored by [test_create_default_asset].
pub fn get_default_asset() -> Asset {
    Asset::new(
        DEFAULT_ASSET_NAME,
        DEFAULT_ASSET_PROPERTY,
        DEFAULT_ASSET_OWNER,
    )
}

pub fn test_create_default_asset(deps: DepsMut) -> Response {
    test_execute(deps, get_create_default_asset_msg())
        .expect("expected the default asset to be created")
}

pub fn get_default_private_asset_input() -> PrivateAssetInput {
    PrivateAssetInput::new(
        DEFAULT_ASSET_NAME,
        DEFAULT_ASSET_PROPERTY,
        DEFAULT_PRIVATE_OWNER,
        DEFAULT_PRIVATE_PRICE,
    )
}

/// Builds a transient map holding the input under the private asset key.
pub fn get_transient_map(input: &PrivateAssetInput) -> TransientMap {
    let mut transient_map = TransientMap::new();
    transient_map.insert(
        PRIVATE_ASSET_TRANSIENT_KEY.to_string(),
        Binary::from(to_ledger_bytes(input).expect("expected the input to serialize")),
    );
    transient_map
}

/// Opens a private deal through the contract entrypoint as the default dealer.
pub fn test_private_deal(deps: DepsMut, input: &PrivateAssetInput) -> EntryPointResponse {
    execute(
        deps,
        mock_env(),
        empty_mock_info(DEFAULT_DEALER_ADDRESS),
        ExecuteMsg::PrivateDeal {
            transient_map: get_transient_map(input),
        },
    )
}

pub fn test_private_deal_success(deps: DepsMut, input: &PrivateAssetInput) -> Response {
    test_private_deal(deps, input).expect("expected the private deal to succeed")
}

/// Runs a query through the contract entrypoint and deserializes the response.
pub fn query_as<T: DeserializeOwned>(deps: Deps, msg: QueryMsg) -> T {
    let binary = query(deps, mock_env(), msg).expect("expected the query to succeed");
    from_json::<T>(&binary).expect("expected the query response to deserialize")
}

pub fn single_attribute_for_key<'a, T>(response: &'a Response<T>, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}
