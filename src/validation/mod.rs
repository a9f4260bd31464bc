//! Contains the up-front message checks run before any entrypoint touches the ledger.

pub mod validate_execute_msg;
pub mod validate_init_msg;
