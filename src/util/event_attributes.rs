use super::constants::{
    ASSET_EVENT_TYPE_KEY, ASSET_NAME_KEY, ASSET_OWNER_KEY, NEW_VALUE_KEY, PRIVATE_COLLECTION_KEY,
};

pub enum EventType {
    InstantiateContract,
    MigrateContract,
    CreateAsset,
    SellOriginalAsset,
    ProcessAsset,
    SellProcessedAsset,
    PrivateDeal,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
            EventType::CreateAsset => "create_asset",
            EventType::SellOriginalAsset => "sell_original_asset",
            EventType::ProcessAsset => "process_asset",
            EventType::SellProcessedAsset => "sell_processed_asset",
            EventType::PrivateDeal => "private_deal",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(ASSET_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    pub fn for_asset_event<T: Into<String>>(event_type: EventType, asset_name: T) -> Self {
        Self::new(event_type).set_asset_name(asset_name)
    }

    pub fn set_asset_name<T: Into<String>>(mut self, asset_name: T) -> Self {
        self.attributes
            .push((ASSET_NAME_KEY.into(), asset_name.into()));
        self
    }

    pub fn set_owner<T: Into<String>>(mut self, owner: T) -> Self {
        self.attributes.push((ASSET_OWNER_KEY.into(), owner.into()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes
            .push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }

    pub fn set_private_collection<T: Into<String>>(mut self, collection_name: T) -> Self {
        self.attributes
            .push((PRIVATE_COLLECTION_KEY.into(), collection_name.into()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}
