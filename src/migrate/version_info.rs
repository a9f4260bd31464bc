use cosmwasm_std::Storage;
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use result_extensions::ResultExtensions;
use semver::Version;

use crate::util::aliases::AssetResult;

pub const CONTRACT_NAME: &str = env!("CARGO_CRATE_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fetches the version info stored by the most recent instantiation or migration.
pub fn get_version_info(storage: &dyn Storage) -> AssetResult<ContractVersion> {
    get_contract_version(storage)?.to_ok()
}

/// Overwrites the stored version info with this build's crate name and version.
pub fn migrate_version_info(storage: &mut dyn Storage) -> AssetResult<ContractVersion> {
    set_contract_version(storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    get_version_info(storage)
}

pub fn parse_sem_ver(version_info: &ContractVersion) -> AssetResult<Version> {
    version_info.version.parse::<Version>()?.to_ok()
}
