//! Contains all execution routes used by the [contract file](crate::contract).

/// Contains the functionality used by the [CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod create_asset;
/// Contains the functionality used by the [PrivateDeal](crate::core::msg::ExecuteMsg::PrivateDeal)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod private_deal;
/// Contains the functionality used by the [ProcessAsset](crate::core::msg::ExecuteMsg::ProcessAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod process_asset;
/// Contains the functionality used by the [SellOriginalAsset](crate::core::msg::ExecuteMsg::SellOriginalAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod sell_original_asset;
/// Contains the functionality used by the [SellProcessedAsset](crate::core::msg::ExecuteMsg::SellProcessedAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod sell_processed_asset;
