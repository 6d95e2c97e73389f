//! In-memory vote counters.
//!
//! [`VoteStore`] is an immutable snapshot: [`VoteStore::increment`] never
//! touches `self` and instead hands back the next snapshot. The coin list is
//! fixed at startup and its order is the display order for the whole session.

use thiserror::Error;

/// Coins offered for shilling, in display order.
pub const DEFAULT_COINS: [&str; 7] = [
    "Bitcoin",
    "Ethereum",
    "Dash",
    "Bitconnect",
    "OmiseGo",
    "Tezos",
    "Icon",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinRecord {
    pub name: String,
    pub votes: u64,
}

impl CoinRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            votes: 0,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoteError {
    #[error("No coin at position {index} (only {len} coins)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteStore {
    records: Vec<CoinRecord>,
}

impl Default for VoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteStore {
    /// The default seven coins, all at zero votes.
    pub fn new() -> Self {
        Self {
            records: DEFAULT_COINS.iter().map(|name| CoinRecord::new(*name)).collect(),
        }
    }

    /// Produce the next snapshot with the record at `index` bumped by one.
    ///
    /// Every other record is carried over unchanged. An out-of-range index
    /// is rejected and `self` stays the current state.
    pub fn increment(&self, index: usize) -> Result<VoteStore, VoteError> {
        if index >= self.records.len() {
            return Err(VoteError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }

        let mut records = self.records.clone();
        let record = &mut records[index];
        record.votes = record.votes.saturating_add(1);
        Ok(VoteStore { records })
    }

    pub fn records(&self) -> &[CoinRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&CoinRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    pub fn total_votes(&self) -> u64 {
        self.records.iter().map(|r| r.votes).sum()
    }
}
