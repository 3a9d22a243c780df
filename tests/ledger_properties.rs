mod common;

use case_ledger::{
    core::{services::SummaryService, CaseAction},
    domain::{
        AccountDraft, ExpenseDraft, InvoiceDraft, MainCategory, PaymentPatch, PaymentStatus,
        ReceiptDraft,
    },
};
use common::{days_from_today, open_case, store, today};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn balance_of(store: &case_ledger::core::CaseStore) -> Decimal {
    let case = store.active_case().unwrap();
    SummaryService::balances(case)[0].balance
}

#[test]
fn expenses_reduce_balance() {
    for amount in ["0", "1", "200", "999.99"] {
        let mut store = store();
        let case_id = open_case(&mut store, "500");
        store.dispatch(CaseAction::AddExpense {
            case_id,
            draft: ExpenseDraft::new(amount, MainCategory::Misc),
        });
        let expected = dec!(500) - amount.parse::<Decimal>().unwrap();
        assert_eq!(balance_of(&store), expected, "amount {amount}");
    }
}

#[test]
fn completed_payments_increase_balance() {
    for amount in ["0", "35", "1200.50"] {
        let mut store = store();
        let case_id = open_case(&mut store, "500");
        store.dispatch(CaseAction::AddReceivedPayment {
            case_id,
            draft: ReceiptDraft::new(amount),
        });
        let expected = dec!(500) + amount.parse::<Decimal>().unwrap();
        assert_eq!(balance_of(&store), expected, "amount {amount}");
    }
}

#[test]
fn balance_example_from_case_file() {
    let mut store = store();
    let case_id = open_case(&mut store, "1000");
    store.dispatch(CaseAction::AddExpense {
        case_id,
        draft: ExpenseDraft::from_note("200", "Clinic ultrasound"),
    });
    store.dispatch(CaseAction::AddReceivedPayment {
        case_id,
        draft: ReceiptDraft::new("150"),
    });
    assert_eq!(balance_of(&store), dec!(950));
}

#[test]
fn upcoming_invoices_do_not_move_balance_until_completed() {
    let mut store = store();
    let case_id = open_case(&mut store, "1000");
    store.dispatch(CaseAction::AddInvoice {
        case_id,
        draft: InvoiceDraft::new("300", days_from_today(10)),
    });
    assert_eq!(balance_of(&store), dec!(1000));

    let payment_id = store.active_case().unwrap().payments[0].id;
    store.dispatch(CaseAction::UpdatePayment {
        case_id,
        payment_id,
        patch: PaymentPatch::status(PaymentStatus::Completed),
    });
    let case = store.active_case().unwrap();
    assert_eq!(case.payments[0].paid_on, Some(today()));
    assert_eq!(balance_of(&store), dec!(1300));
}

#[test]
fn second_account_is_ignored() {
    let mut store = store();
    let case_id = open_case(&mut store, "1000");
    let before = store.book().clone();
    store.dispatch(CaseAction::AddAccount {
        case_id,
        draft: AccountDraft::new("Another", "50"),
    });
    assert_eq!(store.book(), &before);
    assert_eq!(store.active_case().unwrap().accounts.len(), 1);
}

#[test]
fn due_soon_and_overdue_are_exclusive() {
    let mut store = store();
    let case_id = open_case(&mut store, "0");
    store.dispatch(CaseAction::AddInvoice {
        case_id,
        draft: InvoiceDraft::new("100", days_from_today(3)),
    });
    let case = store.active_case().unwrap();
    let kpis = SummaryService::kpis(case, today(), 7);
    assert_eq!((kpis.due_soon, kpis.overdue), (1, 0));

    let mut store = common::store();
    let case_id = open_case(&mut store, "0");
    store.dispatch(CaseAction::AddInvoice {
        case_id,
        draft: InvoiceDraft::new("100", days_from_today(-1)),
    });
    let case = store.active_case().unwrap();
    let kpis = SummaryService::kpis(case, today(), 7);
    assert_eq!((kpis.due_soon, kpis.overdue), (0, 1));
}

#[test]
fn overdue_payments_keep_their_status() {
    let mut store = store();
    let case_id = open_case(&mut store, "0");
    store.dispatch(CaseAction::AddInvoice {
        case_id,
        draft: InvoiceDraft::new("100", days_from_today(-30)),
    });
    let case = store.active_case().unwrap();
    assert_eq!(case.payments[0].status, PaymentStatus::Upcoming);
    assert!(case.payments[0].is_overdue(today()));
}

#[test]
fn deleting_expense_restores_balance() {
    let mut store = store();
    let case_id = open_case(&mut store, "1000");
    store.dispatch(CaseAction::AddExpense {
        case_id,
        draft: ExpenseDraft::new("250", MainCategory::Essay),
    });
    let expense_id = store.active_case().unwrap().expenses[0].id;
    store.dispatch(CaseAction::DeleteExpense {
        case_id,
        expense_id,
    });
    assert_eq!(balance_of(&store), dec!(1000));
    assert!(store.active_case().unwrap().expenses.is_empty());
}

#[test]
fn due_soon_covers_exactly_seven_days_ahead() {
    let mut store = store();
    let case_id = open_case(&mut store, "0");
    for offset in [0, 7, 8] {
        store.dispatch(CaseAction::AddInvoice {
            case_id,
            draft: InvoiceDraft::new("10", days_from_today(offset)),
        });
    }
    let case = store.active_case().unwrap();
    let kpis = SummaryService::kpis(case, today(), 7);
    assert_eq!(kpis.due_soon, 2);
    assert_eq!(kpis.overdue, 0);
}

#[test]
fn month_spend_excludes_same_month_last_year() {
    let mut store = store();
    let case_id = open_case(&mut store, "0");
    store.dispatch(CaseAction::AddExpense {
        case_id,
        draft: ExpenseDraft::new("40", MainCategory::Misc),
    });
    store.dispatch(CaseAction::AddExpense {
        case_id,
        draft: ExpenseDraft::new("60", MainCategory::Misc).on(days_from_today(-366)),
    });
    let case = store.active_case().unwrap();
    assert_eq!(SummaryService::kpis(case, today(), 7).month_spend, dec!(40));
    assert_eq!(SummaryService::totals(case).paid_out, dec!(100));
}

#[test]
fn oversized_amounts_do_not_break_derivations() {
    let mut store = store();
    let case_id = open_case(&mut store, "0");
    for _ in 0..2 {
        store.dispatch(CaseAction::AddExpense {
            case_id,
            draft: ExpenseDraft::new("50000000000000000000000000000", MainCategory::Misc),
        });
    }
    let case = store.active_case().unwrap();
    assert_eq!(SummaryService::totals(case).paid_out, Decimal::MAX);
    assert_eq!(SummaryService::balances(case)[0].balance, Decimal::MIN);
}
