use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A physical asset tracked on the public world state as it moves from its producer to a
/// processor and on to a dealer.  The serialized key names match the records written by existing
/// deployments, so they must not change.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Asset {
    /// The unique name of the asset.  Also used as its key in the world state.
    #[serde(rename = "assetname")]
    pub asset_name: String,
    /// A free-form description of the asset.
    #[serde(rename = "assetproperty")]
    pub asset_property: String,
    /// The party that currently holds the asset.
    pub owner: String,
    /// Annotation describing how the asset was processed.  Empty until processed.
    #[serde(rename = "assetprocessinfo")]
    pub asset_process_info: String,
    /// The price paid when the unprocessed asset was sold.  Zero until sold.
    #[serde(rename = "assetoriginalprice")]
    pub asset_original_price: i64,
    /// The price paid when the processed asset was sold.  Zero until sold.
    #[serde(rename = "assetprocessprice")]
    pub asset_process_price: i64,
}
impl Asset {
    /// Constructs a freshly-issued asset.  Processing info starts empty and both prices start at
    /// zero.
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        asset_name: S1,
        asset_property: S2,
        owner: S3,
    ) -> Self {
        Self {
            asset_name: asset_name.into(),
            asset_property: asset_property.into(),
            owner: owner.into(),
            asset_process_info: String::new(),
            asset_original_price: 0,
            asset_process_price: 0,
        }
    }
}
