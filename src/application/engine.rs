use crate::domain::debt::{Amount, Debt, DebtStatus};
use crate::domain::ledger::{ActionKind, DebtAction, LedgerEntry};
use crate::domain::ports::DebtStoreBox;
use crate::error::{DebtError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The result of a successfully applied debt action: the updated debt and
/// the single ledger entry it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub debt: Debt,
    pub entry: LedgerEntry,
}

/// The main entry point for applying debt actions.
///
/// `DebtEngine` owns the storage backend and runs the payment protocol:
/// validate the request, load the debt, run the amortization transition, and
/// commit the updated debt together with its ledger entry. Actions on the
/// same debt are serialized through a per-debt lock held across the whole
/// read-compute-write cycle, so two concurrent payments cannot both compute
/// against a stale balance.
pub struct DebtEngine {
    store: DebtStoreBox,
    row_locks: Mutex<HashMap<u32, Arc<Mutex<()>>>>,
}

impl DebtEngine {
    pub fn new(store: DebtStoreBox) -> Self {
        Self {
            store,
            row_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Adds a debt to the book after checking its record invariants.
    pub async fn register_debt(&self, debt: Debt) -> Result<()> {
        debt.validate()?;
        self.store.put_debt(debt).await
    }

    /// Applies a debt action and returns the updated debt plus the ledger
    /// entry recording the payment.
    ///
    /// Fails with `ValidationError` for a non-positive amount or an action
    /// against an already settled debt, and with `NotFoundError` when the
    /// debt does not exist. No state changes on failure.
    pub async fn apply(&self, action: DebtAction) -> Result<ActionOutcome> {
        let amount = Amount::new(action.amount)?;

        let lock = self.row_lock(action.debt_id).await;
        let _guard = lock.lock().await;

        let mut debt = self
            .store
            .get_debt(action.debt_id)
            .await?
            .ok_or(DebtError::NotFoundError(action.debt_id))?;

        if debt.status == DebtStatus::PaidOff {
            return Err(DebtError::ValidationError(format!(
                "debt {} is already settled",
                debt.id
            )));
        }

        let entry = LedgerEntry::for_debt_payment(&debt, &action);

        match action.kind {
            ActionKind::PayInstallment => debt.pay_installment(amount.value()),
            ActionKind::Amortize => debt.amortize(amount.value()),
        }

        self.store.commit_action(debt.clone(), entry.clone()).await?;

        log::debug!(
            "applied {:?} of {} to debt {} (balance {}, status {:?})",
            action.kind,
            entry.amount,
            debt.id,
            debt.balance,
            debt.status
        );

        Ok(ActionOutcome { debt, entry })
    }

    /// Returns every ledger entry emitted so far.
    pub async fn ledger(&self) -> Result<Vec<LedgerEntry>> {
        self.store.all_entries().await
    }

    /// Consumes the engine and returns the final state of the debt book.
    pub async fn into_results(self) -> Result<Vec<Debt>> {
        self.store.all_debts().await
    }

    async fn row_lock(&self, debt_id: u32) -> Arc<Mutex<()>> {
        let mut locks = self.row_locks.lock().await;
        locks.entry(debt_id).or_default().clone()
    }
}
