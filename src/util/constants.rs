// Execution output attributes.  All should be prefixed with "asset_" to make them easy to
// discern when observed in the event stream

//////////////////////////////
// Shared output attributes //
//////////////////////////////

/// Value = Event Type correlating to EvenType enum into String values (String)
pub const ASSET_EVENT_TYPE_KEY: &str = "asset_event_type";
/// Value = The name of the public asset being changed (String)
pub const ASSET_NAME_KEY: &str = "asset_name";
/// Value = The owner of the public asset after the change (String)
pub const ASSET_OWNER_KEY: &str = "asset_owner";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "asset_new_value";
/// Value = The name of the restricted collection written by a private deal (String)
pub const PRIVATE_COLLECTION_KEY: &str = "asset_private_collection";

//////////////////////
// Global Constants //
//////////////////////

/// The transient map key under which a private deal's payload must be supplied.
pub const PRIVATE_ASSET_TRANSIENT_KEY: &str = "scprivasset";
/// The chrono pattern used to render history timestamps, e.g. `2019-10-23 02:23:39 AM`.
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";
