//! Contains the functionality used in the [contract file](crate::contract) to instantiate the contract.

/// The main functionality executed when the smart contract is first instantiated.
pub mod init_contract;
