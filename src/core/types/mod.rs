//! Contains all structs used to drive core functionality throughout the contract.

/// Defines the public world state record tracked through ownership transfers.
pub mod asset;
/// Defines a single historical write to a world state key.
pub mod key_modification;
pub mod ledger_record;
/// Defines the confidential deal record stored in the restricted collection.
pub mod private_asset;
/// Defines the transient payload used to open a private deal.
pub mod private_asset_input;
pub mod private_collection;
