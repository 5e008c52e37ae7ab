use crate::domain::amortization::round_currency;
use crate::domain::debt::Debt;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    PayInstallment,
    Amortize,
}

/// A request to apply a payment to a debt. Consumed, never stored.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct DebtAction {
    pub debt_id: u32,
    #[serde(rename = "action")]
    pub kind: ActionKind,
    #[serde(rename = "monto")]
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(rename = "persona")]
    pub person: String,
    #[serde(rename = "metodo")]
    pub method: Option<String>,
    #[serde(rename = "nota")]
    pub note: Option<String>,
}

/// The household ledger vocabulary. Debt payments always post as `deuda`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum EntryKind {
    #[serde(rename = "ingreso")]
    Income,
    #[serde(rename = "gasto")]
    Expense,
    #[serde(rename = "deuda")]
    Debt,
}

/// A cash movement recorded in the household ledger.
///
/// Emitted exactly once per successful debt action and never mutated
/// afterward.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct LedgerEntry {
    pub id: Uuid,
    #[serde(rename = "tipo")]
    pub kind: EntryKind,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "monto")]
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(rename = "persona")]
    pub person: String,
    #[serde(rename = "metodo")]
    pub method: Option<String>,
    #[serde(rename = "nota")]
    pub note: Option<String>,
}

impl LedgerEntry {
    /// Builds the ledger entry for a debt payment, categorized under the
    /// creditor's name, with an auto-generated note when none was supplied.
    pub fn for_debt_payment(debt: &Debt, action: &DebtAction) -> Self {
        let note = action.note.clone().unwrap_or_else(|| {
            let label = match action.kind {
                ActionKind::PayInstallment => "Cuota",
                ActionKind::Amortize => "Amortización",
            };
            format!("Pago de deuda: {} - {}", debt.entity, label)
        });

        Self {
            id: Uuid::new_v4(),
            kind: EntryKind::Debt,
            category: debt.entity.clone(),
            amount: round_currency(action.amount),
            date: action.date,
            person: action.person.clone(),
            method: action.method.clone(),
            note: Some(note),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(kind: ActionKind, note: Option<&str>) -> DebtAction {
        DebtAction {
            debt_id: 1,
            kind,
            amount: 100.0,
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            person: "Ana".to_string(),
            method: None,
            note: note.map(String::from),
        }
    }

    #[test]
    fn test_entry_posts_as_debt_under_creditor() {
        let debt = Debt::new(1, "Banco Azul", 1000.0, 100.0);
        let entry = LedgerEntry::for_debt_payment(&debt, &action(ActionKind::PayInstallment, None));

        assert_eq!(entry.kind, EntryKind::Debt);
        assert_eq!(entry.category, "Banco Azul");
        assert_eq!(entry.amount, 100.0);
        assert_eq!(entry.person, "Ana");
    }

    #[test]
    fn test_entry_amount_is_rounded() {
        let debt = Debt::new(1, "Banco Azul", 1000.0, 100.0);
        let mut act = action(ActionKind::Amortize, None);
        act.amount = 33.333333;
        let entry = LedgerEntry::for_debt_payment(&debt, &act);
        assert_eq!(entry.amount, 33.33);
    }

    #[test]
    fn test_default_note_names_entity_and_kind() {
        let debt = Debt::new(1, "Banco Azul", 1000.0, 100.0);

        let cuota = LedgerEntry::for_debt_payment(&debt, &action(ActionKind::PayInstallment, None));
        assert_eq!(cuota.note.as_deref(), Some("Pago de deuda: Banco Azul - Cuota"));

        let amort = LedgerEntry::for_debt_payment(&debt, &action(ActionKind::Amortize, None));
        assert_eq!(
            amort.note.as_deref(),
            Some("Pago de deuda: Banco Azul - Amortización")
        );
    }

    #[test]
    fn test_supplied_note_passes_through() {
        let debt = Debt::new(1, "Banco Azul", 1000.0, 100.0);
        let entry =
            LedgerEntry::for_debt_payment(&debt, &action(ActionKind::PayInstallment, Some("extra")));
        assert_eq!(entry.note.as_deref(), Some("extra"));
    }

    #[test]
    fn test_action_csv_deserialization() {
        let csv = "debt_id,action,monto,date,persona,metodo,nota\n1,pay_installment,100.0,2025-01-05,Ana,,";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let result: DebtAction = iter.next().unwrap().expect("Failed to deserialize action");
        assert_eq!(result.kind, ActionKind::PayInstallment);
        assert_eq!(result.amount, 100.0);
        assert_eq!(result.method, None);
        assert_eq!(result.note, None);
    }
}
