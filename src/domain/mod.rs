pub mod account;
pub mod case;
pub mod category;
pub mod common;
pub mod expense;
pub mod payment;

pub use account::{Account, AccountDraft};
pub use case::{Case, CaseDetailsPatch, NewCase};
pub use category::{CategorySuggestion, MainCategory};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use expense::{Expense, ExpenseDraft};
pub use payment::{InvoiceDraft, Payment, PaymentPatch, PaymentStatus, ReceiptDraft};
