use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Lifecycle of an invoice owed by the client. Transitions are user-driven only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Upcoming,
    Completed,
    Missed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Upcoming => "upcoming",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Missed => "missed",
        };
        f.write_str(label)
    }
}

/// An invoice or received payment credited to the case account once completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: Uuid,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<NaiveDate>,
}

impl Payment {
    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }

    /// View-time predicate; an overdue payment keeps its stored status.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_completed() && self.due_date < today
    }

    pub fn is_credited_to(&self, account_id: Uuid) -> bool {
        self.account_id == Some(account_id)
    }
}

impl Identifiable for Payment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Payment {
    fn display_label(&self) -> String {
        format!("{} due {} ({})", self.amount, self.due_date, self.status)
    }
}

/// New invoice input. A missing due date falls back to today.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InvoiceDraft {
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub amount: String,
}

impl InvoiceDraft {
    pub fn new(amount: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            due_date: Some(due_date),
            amount: amount.into(),
        }
    }
}

/// A payment already received; `date` becomes both due and paid-on date.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReceiptDraft {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub amount: String,
}

impl ReceiptDraft {
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            date: None,
            amount: amount.into(),
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Partial update applied to an existing payment. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentPatch {
    #[serde(default)]
    pub status: Option<PaymentStatus>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub paid_on: Option<NaiveDate>,
}

impl PaymentPatch {
    pub fn status(status: PaymentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
