//! Business logic helpers for case expenses.

use tracing::debug;
use uuid::Uuid;

use crate::core::{clock::Clock, ids::IdGenerator};
use crate::currency::parse_amount;
use crate::domain::{
    case::Case,
    category::MainCategory,
    expense::{Expense, ExpenseDraft},
};

/// Records and removes expenses on a case.
pub struct ExpenseService;

impl ExpenseService {
    /// Prepends a new expense and returns its identifier.
    ///
    /// Unparsable amounts become zero, a missing date becomes today and a missing account falls
    /// back to the case account.
    pub fn add(
        case: &mut Case,
        draft: &ExpenseDraft,
        ids: &dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Uuid {
        let expense = Expense {
            id: ids.next_id(),
            date: draft.date.unwrap_or_else(|| clock.today()),
            amount: parse_amount(&draft.amount),
            category: draft.category,
            subcategory: normalize_subcategory(draft.category, draft.subcategory.as_deref()),
            account_id: draft.account_id.or_else(|| case.account_id()),
            note: draft
                .note
                .as_deref()
                .map(str::trim)
                .filter(|note| !note.is_empty())
                .map(str::to_string),
        };
        let id = expense.id;
        debug!(case = %case.id, expense = %id, amount = %expense.amount, "expense recorded");
        case.expenses.insert(0, expense);
        id
    }

    /// Removes the expense identified by `id`, returning it. Unknown ids are a no-op.
    pub fn remove(case: &mut Case, id: Uuid) -> Option<Expense> {
        match case.expenses.iter().position(|expense| expense.id == id) {
            Some(index) => Some(case.expenses.remove(index)),
            None => {
                debug!(case = %case.id, expense = %id, "expense not found; ignoring delete");
                None
            }
        }
    }
}

fn normalize_subcategory(main: MainCategory, sub: Option<&str>) -> Option<String> {
    let sub = sub.map(str::trim).filter(|sub| !sub.is_empty())?;
    match main.canonical_subcategory(sub) {
        Some(canonical) => Some(canonical.to_string()),
        None => {
            debug!(category = %main, subcategory = sub, "dropping unknown subcategory");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{clock::FixedClock, ids::SequentialIds};
    use crate::domain::account::AccountDraft;
    use crate::core::services::AccountService;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn case_with_account(ids: &SequentialIds) -> Case {
        let mut case = Case::blank(ids.next_id());
        AccountService::add(&mut case, &AccountDraft::new("Main", "1000"), ids);
        case
    }

    #[test]
    fn add_applies_defaults() {
        let ids = SequentialIds::new();
        let clock = FixedClock::new(today());
        let mut case = case_with_account(&ids);

        let draft = ExpenseDraft::new("not a number", MainCategory::Misc);
        let id = ExpenseService::add(&mut case, &draft, &ids, &clock);

        let expense = case.expense(id).unwrap();
        assert_eq!(expense.amount, Decimal::ZERO);
        assert_eq!(expense.date, today());
        assert_eq!(expense.account_id, case.account_id());
    }

    #[test]
    fn newest_expense_comes_first() {
        let ids = SequentialIds::new();
        let clock = FixedClock::new(today());
        let mut case = case_with_account(&ids);
        ExpenseService::add(&mut case, &ExpenseDraft::new("1", MainCategory::Essay), &ids, &clock);
        let second =
            ExpenseService::add(&mut case, &ExpenseDraft::new("2", MainCategory::Misc), &ids, &clock);
        assert_eq!(case.expenses[0].id, second);
    }

    #[test]
    fn subcategory_is_canonicalized_or_dropped() {
        let ids = SequentialIds::new();
        let clock = FixedClock::new(today());
        let mut case = case_with_account(&ids);
        let valid = ExpenseDraft::new("5", MainCategory::Travel).with_subcategory("hotel");
        let invalid = ExpenseDraft::new("5", MainCategory::Essay).with_subcategory("Hotel");
        let valid_id = ExpenseService::add(&mut case, &valid, &ids, &clock);
        let invalid_id = ExpenseService::add(&mut case, &invalid, &ids, &clock);
        assert_eq!(case.expense(valid_id).unwrap().subcategory.as_deref(), Some("Hotel"));
        assert!(case.expense(invalid_id).unwrap().subcategory.is_none());
    }

    #[test]
    fn remove_unknown_is_noop() {
        let ids = SequentialIds::new();
        let mut case = case_with_account(&ids);
        let before = case.clone();
        assert!(ExpenseService::remove(&mut case, Uuid::new_v4()).is_none());
        assert_eq!(case, before);
    }
}
