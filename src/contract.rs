use crate::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use crate::core::state::STATE_V1;
use crate::execute::create_asset::{create_asset, CreateAssetV1};
use crate::execute::private_deal::{private_deal, PrivateDealV1};
use crate::execute::process_asset::{process_asset, ProcessAssetV1};
use crate::execute::sell_original_asset::{sell_original_asset, SellOriginalAssetV1};
use crate::execute::sell_processed_asset::{sell_processed_asset, SellProcessedAssetV1};
use crate::instantiate::init_contract::init_contract;
use crate::migrate::migrate_contract::migrate_contract;
use crate::query::asset_exists::query_asset_exists;
use crate::query::get_all_assets::query_get_all_assets;
use crate::query::get_all_private_assets::query_get_all_private_assets;
use crate::query::get_history::query_get_history;
use crate::query::get_private_asset_hash::query_get_private_asset_hash;
use crate::query::query_state::query_state;
use crate::query::query_version::query_version;
use crate::query::read_asset::query_read_asset;
use crate::query::read_private_asset::query_read_private_asset;
use crate::service::ledger_service::LedgerService;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::validation::validate_execute_msg::validate_execute_msg;
use crate::validation::validate_init_msg::validate_init_msg;
use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo};

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    // Ensure the init message is properly formatted before doing anything
    validate_init_msg(&msg)?;
    // Execute the core instantiation code
    init_contract(deps, info, msg)
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> AssetResult<Binary> {
    match msg {
        QueryMsg::AssetExists { asset_name } => query_asset_exists(&deps, asset_name),
        QueryMsg::ReadAsset { asset_name } => query_read_asset(&deps, asset_name),
        QueryMsg::GetAllAssets {} => query_get_all_assets(&deps),
        QueryMsg::GetHistory { asset_name } => query_get_history(&deps, asset_name),
        QueryMsg::ReadAssetPrivate { asset_name } => query_read_private_asset(&deps, asset_name),
        QueryMsg::GetAllPrivateAssets {} => query_get_all_private_assets(&deps),
        QueryMsg::GetPrivateAssetHash { asset_name } => {
            query_get_private_asset_hash(&deps, asset_name)
        }
        QueryMsg::QueryState {} => query_state(&deps),
        QueryMsg::QueryVersion {} => query_version(&deps),
    }
}

#[entry_point]
pub fn execute(deps: DepsMut, env: Env, info: MessageInfo, msg: ExecuteMsg) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    // Ensure the execute message is properly formatted before doing anything
    validate_execute_msg(&msg)?;
    match msg {
        ExecuteMsg::CreateAsset { .. } => create_asset(
            &mut LedgerService::new(deps, env),
            CreateAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::SellOriginalAsset { .. } => sell_original_asset(
            &mut LedgerService::new(deps, env),
            SellOriginalAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::ProcessAsset { .. } => process_asset(
            &mut LedgerService::new(deps, env),
            ProcessAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::SellProcessedAsset { .. } => sell_processed_asset(
            &mut LedgerService::new(deps, env),
            SellProcessedAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::PrivateDeal { .. } => {
            let collection = STATE_V1.load(deps.storage)?.private_collection;
            let deal = PrivateDealV1::from_execute_msg(msg)?;
            private_deal(
                &mut LedgerService::with_transient(deps, env, deal.transient_map),
                &info,
                &collection,
            )
        }
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, msg: MigrateMsg) -> EntryPointResponse {
    match msg {
        MigrateMsg::ContractUpgrade {} => migrate_contract(deps),
    }
}
