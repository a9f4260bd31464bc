use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The collection name used when none is supplied on instantiation.
pub const DEFAULT_PRIVATE_COLLECTION_NAME: &str = "collectionPrivateData";

/// A restricted partition of the ledger.  Only listed members may write deals into it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct PrivateCollection {
    pub name: String,
    pub members: Vec<String>,
}
impl PrivateCollection {
    pub fn new<S: Into<String>>(name: S, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    pub fn is_member<S: AsRef<str>>(&self, address: S) -> bool {
        self.members.iter().any(|m| m == address.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::PrivateCollection;

    #[test]
    fn test_is_member() {
        let collection =
            PrivateCollection::new("deals", vec!["producer".to_string(), "dealer".to_string()]);
        assert!(collection.is_member("producer"));
        assert!(collection.is_member("dealer"));
        assert!(
            !collection.is_member("processor"),
            "an address not in the member list should not be a member",
        );
    }
}
