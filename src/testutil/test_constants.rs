/// All addresses in these test constants were randomly generated for testing purposes
/// This address should be used as the sender when instantiating the contract
pub const DEFAULT_ADMIN_ADDRESS: &str = "tp1grjeedyfmx0hujsgmqhdr6thjrye4hfesvh2lz";
/// Use this address in a circumstance that is testing a public asset interaction
pub const DEFAULT_SENDER_ADDRESS: &str = "tp1dv7562fvlvf74904t222ze362m036ugtmg45ll";
/// This address is the only member of the default private collection and may open private deals
pub const DEFAULT_DEALER_ADDRESS: &str = "tp1dj50kvzsknr3ydypw3lt8f4dulrrncw4j626vk";
/// Use this address to simulate a party that is not a member of the private collection
pub const DEFAULT_OUTSIDER_ADDRESS: &str = "tp1kq5zx7w0x6jvavcay8tutqldync62r29gp8e68";
/// The default private collection name when using test_instantiate
pub const DEFAULT_PRIVATE_COLLECTION: &str = "supplyChainPrivateDeals";
/// The name of the asset created by test_create_default_asset
pub const DEFAULT_ASSET_NAME: &str = "apple-lot-1";
pub const DEFAULT_ASSET_PROPERTY: &str = "gala apples, 40 crates";
/// The owner assigned to the asset created by test_create_default_asset
pub const DEFAULT_ASSET_OWNER: &str = "orchard";
/// The price used by the default private asset input
pub const DEFAULT_PRIVATE_PRICE: i64 = 250;
/// The owner used by the default private asset input
pub const DEFAULT_PRIVATE_OWNER: &str = "dealer";
