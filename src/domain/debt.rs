use crate::domain::amortization;
use crate::error::DebtError;
use serde::{Deserialize, Serialize};

/// Balances at or below this are treated as fully repaid. Payments land on
/// rounded cents, so strict zero comparison would strand one-cent remainders.
pub const SETTLEMENT_THRESHOLD: f64 = 0.01;

/// Floor applied to the stored payment when deriving the remaining horizon,
/// so a zero payment cannot trip the schedule guards.
pub const PAYMENT_FLOOR: f64 = 0.01;

/// Represents a positive monetary amount for debt actions.
///
/// Ensures that action amounts are always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, DebtError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(DebtError::ValidationError(
                "amount must be a positive number".to_string(),
            ))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = DebtError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum DebtStatus {
    #[serde(rename = "activa")]
    Active,
    #[serde(rename = "pagada")]
    PaidOff,
    #[serde(rename = "morosa")]
    Delinquent,
}

/// A household debt: outstanding principal, the contractual recurring
/// payment, and an optional nominal annual interest rate in percent.
///
/// `id` and `entity` are opaque identity fields; payments never touch them.
/// A debt reaches `pagada` only through [`Debt::pay_installment`] or
/// [`Debt::amortize`], which zero the balance and payment together.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Debt {
    pub id: u32,
    /// Creditor name; doubles as the ledger category of every payment.
    pub entity: String,
    pub balance: f64,
    pub monthly_payment: f64,
    /// `None` or `0` means interest-free.
    pub interest_rate: Option<f64>,
    pub status: DebtStatus,
}

impl Debt {
    pub fn new(id: u32, entity: impl Into<String>, balance: f64, monthly_payment: f64) -> Self {
        Self {
            id,
            entity: entity.into(),
            balance,
            monthly_payment,
            interest_rate: None,
            status: DebtStatus::Active,
        }
    }

    pub fn with_interest_rate(mut self, annual_rate_pct: f64) -> Self {
        self.interest_rate = Some(annual_rate_pct);
        self
    }

    /// Checks the record invariants before it enters a store.
    pub fn validate(&self) -> Result<(), DebtError> {
        if !self.balance.is_finite() || self.balance < 0.0 {
            return Err(DebtError::ValidationError(format!(
                "debt {}: balance must be a non-negative number",
                self.id
            )));
        }
        if !self.monthly_payment.is_finite() || self.monthly_payment < 0.0 {
            return Err(DebtError::ValidationError(format!(
                "debt {}: monthly payment must be a non-negative number",
                self.id
            )));
        }
        if self.status == DebtStatus::PaidOff && (self.balance != 0.0 || self.monthly_payment != 0.0)
        {
            return Err(DebtError::ValidationError(format!(
                "debt {}: a settled debt must carry a zero balance and payment",
                self.id
            )));
        }
        Ok(())
    }

    /// Applies a scheduled installment: one month of interest is capitalized
    /// first, then the payment is subtracted. The contractual payment is
    /// never changed by an installment.
    pub fn pay_installment(&mut self, amount: f64) {
        let accrued = amortization::accrue_monthly_interest(self.balance, self.interest_rate);
        self.balance = amortization::round_currency(accrued - amount).max(0.0);
        self.settle_if_cleared();
    }

    /// Applies an extraordinary principal payment: no interest accrues, and
    /// the payment may not drive the balance negative.
    ///
    /// When a balance remains, the monthly payment is re-derived so the debt
    /// retires over the same horizon the old schedule had: amortizing early
    /// keeps the payoff date and lowers the required payment. A schedule that
    /// cannot be solved (zero payment, payment below the interest accrual)
    /// retains the previous payment unchanged.
    pub fn amortize(&mut self, amount: f64) {
        let new_balance = amortization::round_currency((self.balance - amount).max(0.0));

        if new_balance > 0.0 {
            let payment = self.monthly_payment.max(PAYMENT_FLOOR);
            if let Some(months) = amortization::remaining_term(self.balance, payment, self.interest_rate)
            {
                let horizon = months.round().max(1.0);
                let recalculated =
                    amortization::level_payment(new_balance, self.interest_rate, horizon);
                if recalculated > 0.0 {
                    self.monthly_payment = recalculated;
                }
            }
        }

        self.balance = new_balance;
        self.settle_if_cleared();
    }

    fn settle_if_cleared(&mut self) {
        if self.balance <= SETTLEMENT_THRESHOLD {
            self.balance = 0.0;
            self.monthly_payment = 0.0;
            self.status = DebtStatus::PaidOff;
        }
    }
}
