use crate::domain::debt::Debt;
use crate::domain::ledger::LedgerEntry;
use crate::domain::ports::DebtStore;
use crate::error::{DebtError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options, WriteBatch};
use std::path::Path;
use std::sync::Arc;

/// Column Family for debt records, keyed by big-endian debt id.
pub const CF_DEBTS: &str = "debts";
/// Column Family for ledger entries, keyed by entry UUID.
pub const CF_LEDGER: &str = "ledger";

/// A persistent store implementation using RocksDB.
///
/// Debts and ledger entries live in separate Column Families of one
/// database, which lets `commit_action` apply both writes through a single
/// atomic `WriteBatch`.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbStore {
    db: Arc<DB>,
}

impl RocksDbStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the "debts" and "ledger" column families exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_debts = ColumnFamilyDescriptor::new(CF_DEBTS, Options::default());
        let cf_ledger = ColumnFamilyDescriptor::new(CF_LEDGER, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_debts, cf_ledger])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            DebtError::IoError(std::io::Error::other(format!(
                "column family {name} not found"
            )))
        })
    }
}

#[async_trait]
impl DebtStore for RocksDbStore {
    async fn get_debt(&self, debt_id: u32) -> Result<Option<Debt>> {
        let cf = self.cf(CF_DEBTS)?;
        match self.db.get_cf(cf, debt_id.to_be_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn put_debt(&self, debt: Debt) -> Result<()> {
        let cf = self.cf(CF_DEBTS)?;
        let value = serde_json::to_vec(&debt)?;
        self.db.put_cf(cf, debt.id.to_be_bytes(), value)?;
        Ok(())
    }

    async fn insert_entry(&self, entry: LedgerEntry) -> Result<()> {
        let cf = self.cf(CF_LEDGER)?;
        let value = serde_json::to_vec(&entry)?;
        self.db.put_cf(cf, entry.id.as_bytes(), value)?;
        Ok(())
    }

    async fn commit_action(&self, debt: Debt, entry: LedgerEntry) -> Result<()> {
        let debts_cf = self.cf(CF_DEBTS)?;
        let ledger_cf = self.cf(CF_LEDGER)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(debts_cf, debt.id.to_be_bytes(), serde_json::to_vec(&debt)?);
        batch.put_cf(ledger_cf, entry.id.as_bytes(), serde_json::to_vec(&entry)?);
        self.db.write(batch)?;
        Ok(())
    }

    async fn all_debts(&self) -> Result<Vec<Debt>> {
        let cf = self.cf(CF_DEBTS)?;
        let mut debts = Vec::new();
        // Big-endian keys iterate in id order.
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            debts.push(serde_json::from_slice(&value)?);
        }
        Ok(debts)
    }

    async fn all_entries(&self) -> Result<Vec<LedgerEntry>> {
        let cf = self.cf(CF_LEDGER)?;
        let mut entries = Vec::new();
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            entries.push(serde_json::from_slice(&value)?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ledger::{ActionKind, DebtAction};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample_entry(debt: &Debt) -> LedgerEntry {
        let action = DebtAction {
            debt_id: debt.id,
            kind: ActionKind::Amortize,
            amount: 200.0,
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            person: "Luis".to_string(),
            method: Some("transferencia".to_string()),
            note: None,
        };
        LedgerEntry::for_debt_payment(debt, &action)
    }

    #[tokio::test]
    async fn test_open_creates_column_families() {
        let dir = tempdir().unwrap();
        let store = RocksDbStore::open(dir.path()).expect("Failed to open RocksDB");

        assert!(store.db.cf_handle(CF_DEBTS).is_some());
        assert!(store.db.cf_handle(CF_LEDGER).is_some());
    }

    #[tokio::test]
    async fn test_debt_round_trip() {
        let dir = tempdir().unwrap();
        let store = RocksDbStore::open(dir.path()).unwrap();

        let debt = Debt::new(1, "Banco Azul", 1000.0, 100.0).with_interest_rate(12.0);
        store.put_debt(debt.clone()).await.unwrap();

        let retrieved = store.get_debt(1).await.unwrap().unwrap();
        assert_eq!(retrieved, debt);
        assert!(store.get_debt(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_commit_action_is_batched() {
        let dir = tempdir().unwrap();
        let store = RocksDbStore::open(dir.path()).unwrap();

        let mut debt = Debt::new(1, "Banco Azul", 1000.0, 100.0);
        store.put_debt(debt.clone()).await.unwrap();

        let entry = sample_entry(&debt);
        debt.balance = 800.0;
        store.commit_action(debt.clone(), entry.clone()).await.unwrap();

        assert_eq!(store.get_debt(1).await.unwrap().unwrap().balance, 800.0);
        let entries = store.all_entries().await.unwrap();
        assert_eq!(entries, vec![entry]);
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let dir = tempdir().unwrap();

        let debt = Debt::new(7, "Hipoteca", 90000.0, 450.0).with_interest_rate(3.2);
        {
            let store = RocksDbStore::open(dir.path()).unwrap();
            store.put_debt(debt.clone()).await.unwrap();
        }

        let store = RocksDbStore::open(dir.path()).unwrap();
        assert_eq!(store.get_debt(7).await.unwrap().unwrap(), debt);
    }
}
