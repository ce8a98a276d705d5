//! Reports module for the sealed ledger
//!
//! Derived views over plaintext records: loan balances, the dashboard
//! summary and the spending breakdown. Nothing here is persisted; every
//! report is recomputed from the records it is given.

pub mod loan_balance;
pub mod spending;
pub mod summary;

pub use loan_balance::{remaining_amount, total_paid, LoanBalance};
pub use spending::{spending_by_category, SpendingByCategory, SpendingReport};
pub use summary::{summarize, DashboardSummary};
