use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use result_extensions::ResultExtensions;

use crate::{core::error::ContractError, util::aliases::AssetResult};

/// The payload a caller places in the transient map to open a private deal.  Absent keys take
/// their zero value so that they are reported by [validate](self::PrivateAssetInput::validate)
/// with the offending field name instead of failing deserialization.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct PrivateAssetInput {
    #[serde(rename = "assetname")]
    pub asset_name: String,
    #[serde(rename = "assetproperty")]
    pub asset_property: String,
    pub owner: String,
    pub price: i64,
}
impl PrivateAssetInput {
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        asset_name: S1,
        asset_property: S2,
        owner: S3,
        price: i64,
    ) -> Self {
        Self {
            asset_name: asset_name.into(),
            asset_property: asset_property.into(),
            owner: owner.into(),
            price,
        }
    }

    /// Checks the fields in declaration order and reports the first one that fails.  Strings only
    /// need to be non-empty, so whitespace-only values are accepted here even though public route
    /// asset names are rejected when blank.
    pub fn validate(&self) -> AssetResult<()> {
        if self.asset_name.is_empty() {
            return ContractError::validation("assetname", "must be a non-empty string").to_err();
        }
        if self.asset_property.is_empty() {
            return ContractError::validation("assetproperty", "must be a non-empty string")
                .to_err();
        }
        if self.owner.is_empty() {
            return ContractError::validation("owner", "must be a non-empty string").to_err();
        }
        if self.price <= 0 {
            return ContractError::validation("price", "must be a positive integer").to_err();
        }
        Ok(())
    }
}
