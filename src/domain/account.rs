use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// The bank account a case draws expenses from and receives client payments into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub starting_balance: Decimal,
}

impl Account {
    pub fn new(id: Uuid, name: impl Into<String>, starting_balance: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            starting_balance,
        }
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} (opening {})", self.name, self.starting_balance)
    }
}

/// Form input for opening the case account. The balance is raw text and is coerced on use.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AccountDraft {
    pub name: String,
    pub starting_balance: String,
}

impl AccountDraft {
    pub fn new(name: impl Into<String>, starting_balance: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            starting_balance: starting_balance.into(),
        }
    }
}
