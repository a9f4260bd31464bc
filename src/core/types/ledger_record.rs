/// A key and the raw bytes stored beneath it, as produced by a ledger range scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerRecord {
    pub key: String,
    pub value: Vec<u8>,
}
impl LedgerRecord {
    pub fn new<S: Into<String>>(key: S, value: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
