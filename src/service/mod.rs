//! The seam between contract logic and the ledger it runs against.

/// Contract-storage-backed implementations of the ledger traits.
pub mod ledger_service;
/// Defines the traits through which all contract operations read and write the ledger.
pub mod ledger_stub;
