use crate::domain::debt::Debt;
use crate::domain::ledger::LedgerEntry;
use crate::domain::ports::DebtStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Book {
    debts: HashMap<u32, Debt>,
    entries: Vec<LedgerEntry>,
}

/// A thread-safe, process-local store for the debt book and its ledger.
///
/// Backs the demo mode: same protocol as the persistent store, no disk.
/// Debts and ledger entries live behind a single `RwLock`, so an action
/// commit writes both under one lock acquisition.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    book: Arc<RwLock<Book>>,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DebtStore for InMemoryStore {
    async fn get_debt(&self, debt_id: u32) -> Result<Option<Debt>> {
        let book = self.book.read().await;
        Ok(book.debts.get(&debt_id).cloned())
    }

    async fn put_debt(&self, debt: Debt) -> Result<()> {
        let mut book = self.book.write().await;
        book.debts.insert(debt.id, debt);
        Ok(())
    }

    async fn insert_entry(&self, entry: LedgerEntry) -> Result<()> {
        let mut book = self.book.write().await;
        book.entries.push(entry);
        Ok(())
    }

    async fn commit_action(&self, debt: Debt, entry: LedgerEntry) -> Result<()> {
        // Both writes happen under the same lock: no observer sees the debt
        // updated without its ledger entry.
        let mut book = self.book.write().await;
        book.debts.insert(debt.id, debt);
        book.entries.push(entry);
        Ok(())
    }

    async fn all_debts(&self) -> Result<Vec<Debt>> {
        let book = self.book.read().await;
        let mut debts: Vec<Debt> = book.debts.values().cloned().collect();
        debts.sort_by_key(|d| d.id);
        Ok(debts)
    }

    async fn all_entries(&self) -> Result<Vec<LedgerEntry>> {
        let book = self.book.read().await;
        Ok(book.entries.clone())
    }
}
