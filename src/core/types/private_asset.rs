use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::private_asset_input::PrivateAssetInput;

/// The fixed discriminator written on every private asset record.
pub const PRIVATE_ASSET_DOC_TYPE: &str = "SCPrivAsset";

/// A confidential deal record written to the restricted private collection.  Records are
/// immutable once written.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct PrivateAsset {
    /// Distinguishes this record type from others in the state database.  Always equal to
    /// [PRIVATE_ASSET_DOC_TYPE].
    #[serde(rename = "docType")]
    pub doc_type: String,
    #[serde(rename = "assetname")]
    pub asset_name: String,
    #[serde(rename = "assetproperty")]
    pub asset_property: String,
    pub owner: String,
    /// The agreed price of the deal.  Always strictly positive.
    pub price: i64,
}
impl PrivateAsset {
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        asset_name: S1,
        asset_property: S2,
        owner: S3,
        price: i64,
    ) -> Self {
        Self {
            doc_type: PRIVATE_ASSET_DOC_TYPE.to_string(),
            asset_name: asset_name.into(),
            asset_property: asset_property.into(),
            owner: owner.into(),
            price,
        }
    }
}
impl From<PrivateAssetInput> for PrivateAsset {
    fn from(input: PrivateAssetInput) -> Self {
        Self::new(
            input.asset_name,
            input.asset_property,
            input.owner,
            input.price,
        )
    }
}
