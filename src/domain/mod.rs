pub mod amortization;
pub mod debt;
pub mod ledger;
pub mod ports;
