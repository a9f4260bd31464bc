use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use supply_chain_smart_contract::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use supply_chain_smart_contract::core::state::StateV1;
use supply_chain_smart_contract::core::types::asset::Asset;
use supply_chain_smart_contract::core::types::private_asset::PrivateAsset;
use supply_chain_smart_contract::core::types::private_asset_input::PrivateAssetInput;
use supply_chain_smart_contract::core::types::private_collection::PrivateCollection;

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(InitMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(Asset), &out_dir);
    export_schema(&schema_for!(PrivateAsset), &out_dir);
    export_schema(&schema_for!(PrivateAssetInput), &out_dir);
    export_schema(&schema_for!(PrivateCollection), &out_dir);
    export_schema(&schema_for!(StateV1), &out_dir);
}
