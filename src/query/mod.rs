//! Contains the functionality used in the [contract file](crate::contract) to perform a contract query.
//! Each route exposes a function generic over [LedgerReader](crate::service::ledger_stub::LedgerReader)
//! alongside the binary-producing query used by the entrypoint.

pub mod asset_exists;
pub mod get_all_assets;
pub mod get_all_private_assets;
pub mod get_history;
pub mod get_private_asset_hash;
pub mod query_state;
pub mod query_version;
pub mod read_asset;
pub mod read_private_asset;
