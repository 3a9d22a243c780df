#![allow(dead_code)]

use case_ledger::{
    core::{CaseAction, CaseStore, FixedClock, SequentialIds},
    domain::{AccountDraft, NewCase},
};
use chrono::{Duration, NaiveDate};
use uuid::Uuid;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
}

pub fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

/// A deterministic store pinned to `today()`.
pub fn store() -> CaseStore {
    CaseStore::new(
        Box::new(FixedClock::new(today())),
        Box::new(SequentialIds::new()),
    )
}

/// Opens a case with a single account holding `balance`, returning the case id.
pub fn open_case(store: &mut CaseStore, balance: &str) -> Uuid {
    store.dispatch(CaseAction::CreateCase(NewCase {
        code: "C-100".into(),
        client_name: "Maria Lopez".into(),
        donor_name: "Donor 7".into(),
        account: AccountDraft::new("Escrow", balance),
    }));
    store.book().active_id()
}
