use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::MainCategory;
use crate::domain::common::*;
use crate::suggest::suggest_category;

/// A categorized outgoing charge against the case account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: MainCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Expense {
    pub fn is_charged_to(&self, account_id: Uuid) -> bool {
        self.account_id == Some(account_id)
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        match &self.subcategory {
            Some(sub) => format!("{} {} / {} {}", self.date, self.category, sub, self.amount),
            None => format!("{} {} {}", self.date, self.category, self.amount),
        }
    }
}

/// Expense form input. `amount` is raw text; `date` and `account_id` fall back to today and the
/// case account when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseDraft {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub amount: String,
    pub category: MainCategory,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub account_id: Option<Uuid>,
    #[serde(default)]
    pub note: Option<String>,
}

impl ExpenseDraft {
    pub fn new(amount: impl Into<String>, category: MainCategory) -> Self {
        Self {
            date: None,
            amount: amount.into(),
            category,
            subcategory: None,
            account_id: None,
            note: None,
        }
    }

    /// Builds a draft whose category is prefilled from the note text.
    pub fn from_note(amount: impl Into<String>, note: impl Into<String>) -> Self {
        let note = note.into();
        let suggestion = suggest_category(&note);
        Self {
            date: None,
            amount: amount.into(),
            category: suggestion.main,
            subcategory: suggestion.sub.map(str::to_string),
            account_id: None,
            note: Some(note),
        }
    }

    pub fn with_subcategory(mut self, sub: impl Into<String>) -> Self {
        self.subcategory = Some(sub.into());
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn charged_to(mut self, account_id: Uuid) -> Self {
        self.account_id = Some(account_id);
        self
    }
}
