//! Payment reminder text.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::{format_currency_value, format_date, CurrencyCode, LocaleConfig};
use crate::errors::TrackerError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderTone {
    #[default]
    Polite,
    Urgent,
    Playful,
}

impl ReminderTone {
    pub const ALL: [ReminderTone; 3] = [
        ReminderTone::Polite,
        ReminderTone::Urgent,
        ReminderTone::Playful,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReminderTone::Polite => "polite",
            ReminderTone::Urgent => "urgent",
            ReminderTone::Playful => "playful",
        }
    }
}

impl fmt::Display for ReminderTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReminderTone {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ReminderTone::ALL
            .into_iter()
            .find(|tone| tone.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TrackerError::UnknownTone(wanted.to_string()))
    }
}

/// Renders reminder text using a currency and locale for the amount and due date.
#[derive(Debug, Clone, Default)]
pub struct ReminderBuilder {
    currency: CurrencyCode,
    locale: LocaleConfig,
}

impl ReminderBuilder {
    pub fn new(currency: CurrencyCode, locale: LocaleConfig) -> Self {
        Self { currency, locale }
    }

    pub fn build(
        &self,
        tone: ReminderTone,
        client_name: &str,
        amount: Decimal,
        due: NaiveDate,
    ) -> String {
        let client = match client_name.trim() {
            "" => "there",
            name => name,
        };
        let amount = format_currency_value(amount, &self.currency, &self.locale);
        let due = format_date(&self.locale, due);
        match tone {
            ReminderTone::Polite => format!(
                "Hi {client}, this is a friendly reminder that your payment of {amount} is due on \
                 {due}. Please let us know if you have any questions. Thank you!"
            ),
            ReminderTone::Urgent => format!(
                "Hi {client}, your payment of {amount} due on {due} needs your immediate \
                 attention. Please arrange payment right away so your case can stay on schedule."
            ),
            ReminderTone::Playful => format!(
                "Hey {client}! Just a little nudge: {amount} is hoping to find its way to us by \
                 {due}. Thanks a bunch!"
            ),
        }
    }
}

/// Renders reminder text in USD with en-US formatting.
pub fn build_reminder(
    tone: ReminderTone,
    client_name: &str,
    amount: Decimal,
    due: NaiveDate,
) -> String {
    ReminderBuilder::default().build(tone, client_name, amount, due)
}
