use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{account::Account, case::Case, payment::Payment};

/// Days ahead of today that count as "due soon" unless configured otherwise.
pub const DEFAULT_DUE_SOON_DAYS: u32 = 7;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountBalance {
    pub account_id: Uuid,
    pub name: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct CaseTotals {
    pub received_in: Decimal,
    pub expected_in: Decimal,
    pub paid_out: Decimal,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct CaseKpis {
    pub due_soon: usize,
    pub overdue: usize,
    pub month_spend: Decimal,
}

/// Pure derivations over a case's current expenses and payments.
pub struct SummaryService;

impl SummaryService {
    /// Starting balance, minus expenses charged to the account, plus completed payments
    /// credited to it. Saturates at the `Decimal` range instead of overflowing.
    pub fn account_balance(case: &Case, account: &Account) -> Decimal {
        let spent = saturating_sum(
            case.expenses
                .iter()
                .filter(|expense| expense.is_charged_to(account.id))
                .map(|expense| expense.amount),
        );
        let received = saturating_sum(
            case.payments
                .iter()
                .filter(|payment| payment.is_completed() && payment.is_credited_to(account.id))
                .map(|payment| payment.amount),
        );
        account
            .starting_balance
            .saturating_sub(spent)
            .saturating_add(received)
    }

    pub fn balances(case: &Case) -> Vec<AccountBalance> {
        case.accounts
            .iter()
            .map(|account| AccountBalance {
                account_id: account.id,
                name: account.name.clone(),
                balance: Self::account_balance(case, account),
            })
            .collect()
    }

    pub fn totals(case: &Case) -> CaseTotals {
        let (completed, open): (Vec<_>, Vec<_>) =
            case.payments.iter().partition(|payment| payment.is_completed());
        CaseTotals {
            received_in: saturating_sum(completed.iter().map(|payment| payment.amount)),
            expected_in: saturating_sum(open.iter().map(|payment| payment.amount)),
            paid_out: saturating_sum(case.expenses.iter().map(|expense| expense.amount)),
        }
    }

    /// Due-soon and overdue counts plus spend in `today`'s calendar month.
    ///
    /// A payment is due soon when it is not completed and falls in `[today, today + window_days]`.
    pub fn kpis(case: &Case, today: NaiveDate, window_days: u32) -> CaseKpis {
        let horizon = today
            .checked_add_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MAX);
        let open = || case.payments.iter().filter(|payment| !payment.is_completed());
        CaseKpis {
            due_soon: open()
                .filter(|payment| payment.due_date >= today && payment.due_date <= horizon)
                .count(),
            overdue: open().filter(|payment| payment.is_overdue(today)).count(),
            month_spend: saturating_sum(
                case.expenses
                    .iter()
                    .filter(|expense| {
                        expense.date.year() == today.year()
                            && expense.date.month() == today.month()
                    })
                    .map(|expense| expense.amount),
            ),
        }
    }

    /// The outstanding payment with the earliest due date, used to prefill reminders.
    pub fn next_due_payment(case: &Case) -> Option<&Payment> {
        case.payments
            .iter()
            .filter(|payment| !payment.is_completed())
            .min_by_key(|payment| payment.due_date)
    }
}

fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}
