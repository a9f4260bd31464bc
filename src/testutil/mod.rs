pub mod failing_ledger;
pub mod test_constants;
pub mod test_utilities;
