use super::debt::Debt;
use super::ledger::LedgerEntry;
use crate::error::Result;
use async_trait::async_trait;

/// Storage port for the debt book and its ledger.
///
/// The debt-action protocol is defined once against this trait; any backend
/// (process-local demo store, persistent store) runs the identical protocol.
/// `commit_action` must apply the debt update and the ledger insert as a
/// single atomic unit: a crash between them may not leave a debt updated
/// without its ledger entry, or vice versa.
#[async_trait]
pub trait DebtStore: Send + Sync {
    async fn get_debt(&self, debt_id: u32) -> Result<Option<Debt>>;
    async fn put_debt(&self, debt: Debt) -> Result<()>;
    async fn insert_entry(&self, entry: LedgerEntry) -> Result<()>;
    async fn commit_action(&self, debt: Debt, entry: LedgerEntry) -> Result<()>;
    async fn all_debts(&self) -> Result<Vec<Debt>>;
    async fn all_entries(&self) -> Result<Vec<LedgerEntry>>;
}

pub type DebtStoreBox = Box<dyn DebtStore>;
