use std::collections::BTreeMap;

use cosmwasm_std::Binary;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The message sent when the contract is first created.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct InitMsg {
    /// The name of the restricted collection that holds private deals.  Defaults to
    /// [DEFAULT_PRIVATE_COLLECTION_NAME](crate::core::types::private_collection::DEFAULT_PRIVATE_COLLECTION_NAME).
    pub private_collection_name: Option<String>,
    /// The addresses allowed to write private deals.  At least one must be supplied.
    pub private_collection_members: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    CreateAsset {
        asset_name: String,
        asset_property: String,
        owner: String,
    },
    SellOriginalAsset {
        asset_name: String,
        new_owner: String,
        asset_original_price: i64,
    },
    ProcessAsset {
        asset_name: String,
        asset_process_info: String,
    },
    SellProcessedAsset {
        asset_name: String,
        new_owner: String,
        asset_process_price: i64,
    },
    /// Opens a private deal.  The deal itself is read from the transient map under the
    /// [PRIVATE_ASSET_TRANSIENT_KEY](crate::util::constants::PRIVATE_ASSET_TRANSIENT_KEY) key.
    /// Transient values are handed to the contract for this call only and are never written
    /// to the world state.
    PrivateDeal {
        transient_map: BTreeMap<String, Binary>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    AssetExists { asset_name: String },
    ReadAsset { asset_name: String },
    GetAllAssets {},
    GetHistory { asset_name: String },
    ReadAssetPrivate { asset_name: String },
    GetAllPrivateAssets {},
    GetPrivateAssetHash { asset_name: String },
    QueryState {},
    QueryVersion {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MigrateMsg {
    ContractUpgrade {},
}
