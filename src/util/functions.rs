use chrono::{DateTime, Utc};
use cosmwasm_std::Timestamp;
use result_extensions::ResultExtensions;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::ContractError;
use crate::core::types::key_modification::KeyModification;
use crate::util::aliases::AssetResult;
use crate::util::constants::HISTORY_TIMESTAMP_FORMAT;

/// Serializes a record into the JSON bytes stored on the ledger.
///
/// # Examples
/// ```
/// use supply_chain_smart_contract::core::types::asset::Asset;
/// use supply_chain_smart_contract::util::functions::to_ledger_bytes;
///
/// let bytes = to_ledger_bytes(&Asset::new("apple", "gala", "orchard")).unwrap();
/// assert!(bytes.starts_with(br#"{"assetname":"apple""#));
/// ```
pub fn to_ledger_bytes<T: Serialize>(record: &T) -> AssetResult<Vec<u8>> {
    serde_json_wasm::to_vec(record)
        .map_err(|e| ContractError::generic(format!("failed to serialize record: {}", e)))
}

/// Deserializes JSON bytes read from the ledger or the transient map.
///
/// # Examples
/// ```
/// use supply_chain_smart_contract::core::error::ContractError;
/// use supply_chain_smart_contract::core::types::asset::Asset;
/// use supply_chain_smart_contract::util::functions::from_ledger_bytes;
///
/// let error = from_ledger_bytes::<Asset>(b"not json").unwrap_err();
/// assert!(matches!(error, ContractError::DeserializationError { .. }));
/// ```
pub fn from_ledger_bytes<T: DeserializeOwned>(bytes: &[u8]) -> AssetResult<T> {
    serde_json_wasm::from_slice::<T>(bytes)
        .map_err(|e| ContractError::deserialization(format!("failed to unmarshal JSON: {}", e)))
}

/// Renders a block time in UTC with second precision, e.g. `2019-10-23 02:23:39 AM`.
///
/// # Examples
/// ```
/// use cosmwasm_std::Timestamp;
/// use supply_chain_smart_contract::util::functions::format_timestamp;
///
/// let rendered = format_timestamp(&Timestamp::from_seconds(1_571_797_419)).unwrap();
/// assert_eq!("2019-10-23 02:23:39 AM", rendered.as_str());
/// ```
pub fn format_timestamp(timestamp: &Timestamp) -> AssetResult<String> {
    let seconds = i64::try_from(timestamp.seconds()).map_err(|_| ContractError::UnexpectedState {
        explanation: format!("timestamp [{}] is out of range", timestamp),
    })?;
    match DateTime::<Utc>::from_timestamp(seconds, 0) {
        Some(date_time) => format!("{}", date_time.format(HISTORY_TIMESTAMP_FORMAT)).to_ok(),
        None => ContractError::UnexpectedState {
            explanation: format!("timestamp [{}] is out of range", timestamp),
        }
        .to_err(),
    }
}

/// Produces the `timestamp:value` line reported for a single historical write.
pub fn format_history_entry(modification: &KeyModification) -> AssetResult<String> {
    format!(
        "{}:{}",
        format_timestamp(&modification.timestamp)?,
        String::from_utf8_lossy(modification.value.as_slice()),
    )
    .to_ok()
}
