//! Case-scoped operations. Mutations work on a `&mut Case` and never fail: unknown ids and
//! invariant violations are reported as `None`/`false` and logged at debug level.

pub mod account_service;
pub mod case_service;
pub mod expense_service;
pub mod payment_service;
pub mod summary_service;

pub use account_service::AccountService;
pub use case_service::CaseService;
pub use expense_service::ExpenseService;
pub use payment_service::PaymentService;
pub use summary_service::{AccountBalance, CaseKpis, CaseTotals, SummaryService};
