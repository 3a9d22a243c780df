use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub date_format: DateFormatStyle,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            date_format: DateFormatStyle::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormatStyle {
    Short,
    Medium,
    Long,
}

pub fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

/// Coerces raw form input into a non-negative amount. Anything unparsable or negative is zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, ',' | '$' | ' '))
        .collect();
    let amount = Decimal::from_str(&cleaned).unwrap_or_default();
    if amount.is_sign_negative() {
        Decimal::ZERO
    } else {
        amount
    }
}

/// Like [`parse_amount`] but keeps the sign, for opening balances.
pub fn parse_signed_amount(raw: &str) -> Decimal {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, ',' | '$' | ' '))
        .collect();
    Decimal::from_str(&cleaned).unwrap_or_default()
}

pub fn format_number(locale: &LocaleConfig, value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let mut body = format!("{:.*}", precision as usize, rounded);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    match body.find(locale.decimal_separator) {
        Some(pos) if precision > 0 => {
            let int_part = insert_grouping(&body[..pos], locale.grouping_separator);
            format!("{}{}", int_part, &body[pos..])
        }
        _ => insert_grouping(&body, locale.grouping_separator),
    }
}

fn insert_grouping(int_part: &str, separator: char) -> String {
    match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, separator)),
        None => group_digits(int_part, separator),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders `amount` with the currency symbol, e.g. `$1,250.00` or `-$40.00`.
pub fn format_currency_value(amount: Decimal, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let symbol = symbol_for(code.as_str());
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    if symbol.chars().count() > 1 && symbol.chars().all(|ch| ch.is_ascii_uppercase()) {
        format!("{}{} {}", sign, symbol, body)
    } else {
        format!("{}{}{}", sign, symbol, body)
    }
}

pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    match locale.date_format {
        DateFormatStyle::Short => date.format("%Y-%m-%d").to_string(),
        DateFormatStyle::Medium => format!(
            "{:02} {} {}",
            date.day(),
            month_label(date.month()),
            date.year()
        ),
        DateFormatStyle::Long => format!(
            "{}, {} {} {}",
            date.weekday(),
            date.day(),
            month_label(date.month()),
            date.year()
        ),
    }
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_amount_coerces_garbage_to_zero() {
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("-15"), Decimal::ZERO);
        assert_eq!(parse_amount(" 1,250.50 "), dec!(1250.50));
        assert_eq!(parse_signed_amount("-15"), dec!(-15));
    }

    #[test]
    fn formats_grouped_currency() {
        let locale = LocaleConfig::default();
        let usd = CurrencyCode::default();
        assert_eq!(format_currency_value(dec!(1250), &usd, &locale), "$1,250.00");
        assert_eq!(format_currency_value(dec!(-40.5), &usd, &locale), "-$40.50");
        assert_eq!(
            format_currency_value(dec!(900), &CurrencyCode::new("chf"), &locale),
            "CHF 900.00"
        );
    }

    #[test]
    fn formats_dates_per_style() {
        let mut locale = LocaleConfig::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(&locale, date), "05 Mar 2024");
        locale.date_format = DateFormatStyle::Short;
        assert_eq!(format_date(&locale, date), "2024-03-05");
    }
}
