//! Household debt tracker core: amortization math and the debt-action
//! protocol, defined once against an abstract storage port and run
//! unchanged against the in-memory demo store or the persistent store.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
