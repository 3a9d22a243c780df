use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    account::{Account, AccountDraft},
    common::*,
    expense::Expense,
    payment::Payment,
};

/// A single donor/client engagement: one account, its expenses and the client's payments.
///
/// Expenses and payments are stored most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub id: Uuid,
    pub code: String,
    pub client_name: String,
    pub donor_name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl Case {
    /// Creates a case with no details, account, expenses or payments.
    pub fn blank(id: Uuid) -> Self {
        Self {
            id,
            code: String::new(),
            client_name: String::new(),
            donor_name: String::new(),
            accounts: Vec::new(),
            expenses: Vec::new(),
            payments: Vec::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.code.is_empty()
            && self.client_name.is_empty()
            && self.donor_name.is_empty()
            && self.accounts.is_empty()
            && self.expenses.is_empty()
            && self.payments.is_empty()
    }

    /// The case's sole account, if one has been opened.
    pub fn account(&self) -> Option<&Account> {
        self.accounts.first()
    }

    pub fn account_id(&self) -> Option<Uuid> {
        self.account().map(|account| account.id)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn payment(&self, id: Uuid) -> Option<&Payment> {
        self.payments.iter().find(|payment| payment.id == id)
    }

    pub fn payment_mut(&mut self, id: Uuid) -> Option<&mut Payment> {
        self.payments.iter_mut().find(|payment| payment.id == id)
    }
}

impl Identifiable for Case {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Case {
    fn name(&self) -> &str {
        &self.client_name
    }
}

impl Displayable for Case {
    fn display_label(&self) -> String {
        match (self.code.is_empty(), self.client_name.is_empty()) {
            (true, true) => "Untitled case".into(),
            (false, true) => self.code.clone(),
            (true, false) => self.client_name.clone(),
            (false, false) => format!("{} · {}", self.code, self.client_name),
        }
    }
}

/// Case creation form: details plus the initial account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewCase {
    pub code: String,
    pub client_name: String,
    pub donor_name: String,
    pub account: AccountDraft,
}

/// Edits to case header fields. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CaseDetailsPatch {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub donor_name: Option<String>,
}
