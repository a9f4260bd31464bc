use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Semver parsing error: {0}")]
    SemVer(#[from] semver::Error),

    #[error("Existing record found: {explanation}")]
    AlreadyExists { explanation: String },

    #[error("Failed to deserialize stored or supplied data: {explanation}")]
    DeserializationError { explanation: String },

    #[error("Current contract name [{current_contract}] does not match provided migration name [{migration_contract}]")]
    InvalidContractName {
        current_contract: String,
        migration_contract: String,
    },

    #[error("Current contract version [{current_version}] is higher than provided migration version [{migration_version}]")]
    InvalidContractVersion {
        current_version: String,
        migration_version: String,
    },

    #[error("{0}")]
    InvalidFunds(String),

    #[error("Message of type [{message_type}] was invalid. Invalid fields: {invalid_fields:?}")]
    InvalidMessageFields {
        message_type: String,
        invalid_fields: Vec<String>,
    },

    #[error("Invalid message type provided. Expected message type {expected_message_type}")]
    InvalidMessageType { expected_message_type: String },

    #[error("Private data not found in the transient map under key [{field}]")]
    MissingTransientData { field: String },

    #[error("Resource not found: {explanation}")]
    NotFound { explanation: String },

    #[error("Failed to access ledger storage: {explanation}")]
    StorageError { explanation: String },

    #[error("Unauthorized: {explanation}")]
    Unauthorized { explanation: String },

    #[error("Unexpected state: {explanation}")]
    UnexpectedState { explanation: String },

    #[error("Invalid field [{field}]: {explanation}")]
    ValidationError { field: String, explanation: String },

    #[error("{msg}")]
    GenericError { msg: String },
}
impl ContractError {
    pub fn generic<S: Into<String>>(msg: S) -> ContractError {
        ContractError::GenericError { msg: msg.into() }
    }

    pub fn not_found<S: Into<String>>(explanation: S) -> ContractError {
        ContractError::NotFound {
            explanation: explanation.into(),
        }
    }

    pub fn storage<S: Into<String>>(explanation: S) -> ContractError {
        ContractError::StorageError {
            explanation: explanation.into(),
        }
    }

    pub fn deserialization<S: Into<String>>(explanation: S) -> ContractError {
        ContractError::DeserializationError {
            explanation: explanation.into(),
        }
    }

    pub fn validation<S1: Into<String>, S2: Into<String>>(
        field: S1,
        explanation: S2,
    ) -> ContractError {
        ContractError::ValidationError {
            field: field.into(),
            explanation: explanation.into(),
        }
    }
}
