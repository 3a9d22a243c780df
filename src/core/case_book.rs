//! The case collection and the actions that evolve it.
//!
//! `CaseBook::reduce` never mutates the book it is called on; it returns the next book. The
//! collection always holds at least one case and exactly one of them is active.

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::{clock::Clock, ids::IdGenerator};
use crate::core::services::{AccountService, CaseService, ExpenseService, PaymentService};
use crate::domain::{
    account::AccountDraft,
    case::{Case, CaseDetailsPatch, NewCase},
    expense::ExpenseDraft,
    payment::{InvoiceDraft, PaymentPatch, ReceiptDraft},
};

/// A discrete user action against the case collection.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseAction {
    CreateBlankCase,
    CreateCase(NewCase),
    SelectCase(Uuid),
    UpdateCaseDetails { case_id: Uuid, patch: CaseDetailsPatch },
    DeleteCase(Uuid),
    AddAccount { case_id: Uuid, draft: AccountDraft },
    AddExpense { case_id: Uuid, draft: ExpenseDraft },
    DeleteExpense { case_id: Uuid, expense_id: Uuid },
    AddInvoice { case_id: Uuid, draft: InvoiceDraft },
    AddReceivedPayment { case_id: Uuid, draft: ReceiptDraft },
    UpdatePayment { case_id: Uuid, payment_id: Uuid, patch: PaymentPatch },
    DeletePayment { case_id: Uuid, payment_id: Uuid },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaseBook {
    cases: Vec<Case>,
    active: Uuid,
}

impl CaseBook {
    /// A book holding a single blank, active case.
    pub fn new(ids: &dyn IdGenerator) -> Self {
        let case = CaseService::blank(ids);
        Self {
            active: case.id,
            cases: vec![case],
        }
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn active_id(&self) -> Uuid {
        self.active
    }

    pub fn active_case(&self) -> Option<&Case> {
        self.case(self.active)
    }

    pub fn case(&self, id: Uuid) -> Option<&Case> {
        self.cases.iter().find(|case| case.id == id)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Returns the book that results from applying `action`.
    pub fn reduce(&self, action: CaseAction, clock: &dyn Clock, ids: &dyn IdGenerator) -> Self {
        let mut next = self.clone();
        next.apply(action, clock, ids);
        next
    }

    fn apply(&mut self, action: CaseAction, clock: &dyn Clock, ids: &dyn IdGenerator) {
        match action {
            CaseAction::CreateBlankCase => {
                let case = CaseService::blank(ids);
                self.push_active(case);
            }
            CaseAction::CreateCase(form) => {
                let case = CaseService::open(&form, ids);
                self.push_active(case);
            }
            CaseAction::SelectCase(id) => {
                if self.case(id).is_some() {
                    self.active = id;
                } else {
                    debug!(case = %id, "cannot select unknown case");
                }
            }
            CaseAction::UpdateCaseDetails { case_id, patch } => {
                self.with_case(case_id, |case| CaseService::update_details(case, &patch));
            }
            CaseAction::DeleteCase(id) => self.delete_case(id, ids),
            CaseAction::AddAccount { case_id, draft } => {
                self.with_case(case_id, |case| {
                    AccountService::add(case, &draft, ids);
                });
            }
            CaseAction::AddExpense { case_id, draft } => {
                self.with_case(case_id, |case| {
                    ExpenseService::add(case, &draft, ids, clock);
                });
            }
            CaseAction::DeleteExpense {
                case_id,
                expense_id,
            } => {
                self.with_case(case_id, |case| {
                    ExpenseService::remove(case, expense_id);
                });
            }
            CaseAction::AddInvoice { case_id, draft } => {
                self.with_case(case_id, |case| {
                    PaymentService::add_invoice(case, &draft, ids, clock);
                });
            }
            CaseAction::AddReceivedPayment { case_id, draft } => {
                self.with_case(case_id, |case| {
                    PaymentService::add_received(case, &draft, ids, clock);
                });
            }
            CaseAction::UpdatePayment {
                case_id,
                payment_id,
                patch,
            } => {
                self.with_case(case_id, |case| {
                    PaymentService::update(case, payment_id, &patch, clock);
                });
            }
            CaseAction::DeletePayment {
                case_id,
                payment_id,
            } => {
                self.with_case(case_id, |case| {
                    PaymentService::remove(case, payment_id);
                });
            }
        }
    }

    fn push_active(&mut self, case: Case) {
        self.active = case.id;
        self.cases.push(case);
    }

    fn with_case<F>(&mut self, id: Uuid, mutator: F)
    where
        F: FnOnce(&mut Case),
    {
        match self.cases.iter_mut().find(|case| case.id == id) {
            Some(case) => mutator(case),
            None => debug!(case = %id, "case not found; ignoring action"),
        }
    }

    fn delete_case(&mut self, id: Uuid, ids: &dyn IdGenerator) {
        let before = self.cases.len();
        self.cases.retain(|case| case.id != id);
        if self.cases.len() == before {
            debug!(case = %id, "case not found; ignoring delete");
            return;
        }
        if self.cases.is_empty() {
            let replacement = CaseService::blank(ids);
            info!(case = %replacement.id, "last case deleted; starting a blank case");
            self.cases.push(replacement);
        }
        if self.active == id {
            self.active = self.cases[0].id;
        }
    }
}

/// Owns the current `CaseBook` and the clock and id sources used to evolve it.
pub struct CaseStore {
    book: CaseBook,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl CaseStore {
    pub fn new(clock: Box<dyn Clock>, ids: Box<dyn IdGenerator>) -> Self {
        let book = CaseBook::new(ids.as_ref());
        Self { book, clock, ids }
    }

    /// Replaces the book with the result of applying `action` and returns the new book.
    pub fn dispatch(&mut self, action: CaseAction) -> &CaseBook {
        debug!(?action, "dispatching case action");
        self.book = self.book.reduce(action, self.clock.as_ref(), self.ids.as_ref());
        &self.book
    }

    pub fn book(&self) -> &CaseBook {
        &self.book
    }

    pub fn active_case(&self) -> Option<&Case> {
        self.book.active_case()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
