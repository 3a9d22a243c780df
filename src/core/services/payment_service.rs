//! Invoices owed by the client and payments received against them.

use tracing::debug;
use uuid::Uuid;

use crate::core::{clock::Clock, ids::IdGenerator};
use crate::currency::parse_amount;
use crate::domain::{
    case::Case,
    payment::{InvoiceDraft, Payment, PaymentPatch, PaymentStatus, ReceiptDraft},
};

pub struct PaymentService;

impl PaymentService {
    /// Records an upcoming invoice against the case account (or no account if none is open).
    pub fn add_invoice(
        case: &mut Case,
        draft: &InvoiceDraft,
        ids: &dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Uuid {
        let payment = Payment {
            id: ids.next_id(),
            due_date: draft.due_date.unwrap_or_else(|| clock.today()),
            amount: parse_amount(&draft.amount),
            account_id: case.account_id(),
            status: PaymentStatus::Upcoming,
            paid_on: None,
        };
        Self::prepend(case, payment)
    }

    /// Records a payment that has already been received.
    pub fn add_received(
        case: &mut Case,
        draft: &ReceiptDraft,
        ids: &dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Uuid {
        let date = draft.date.unwrap_or_else(|| clock.today());
        let payment = Payment {
            id: ids.next_id(),
            due_date: date,
            amount: parse_amount(&draft.amount),
            account_id: case.account_id(),
            status: PaymentStatus::Completed,
            paid_on: Some(date),
        };
        Self::prepend(case, payment)
    }

    /// Applies `patch` to the payment identified by `id`. Returns `false` for unknown ids.
    ///
    /// Completing a payment stamps `paid_on` with today unless a date is already known; any other
    /// status clears it.
    pub fn update(case: &mut Case, id: Uuid, patch: &PaymentPatch, clock: &dyn Clock) -> bool {
        let case_id = case.id;
        let Some(payment) = case.payment_mut(id) else {
            debug!(case = %case_id, payment = %id, "payment not found; ignoring update");
            return false;
        };
        if let Some(status) = patch.status {
            payment.status = status;
        }
        if let Some(due_date) = patch.due_date {
            payment.due_date = due_date;
        }
        if let Some(amount) = patch.amount {
            payment.amount = amount.max(rust_decimal::Decimal::ZERO);
        }
        if let Some(paid_on) = patch.paid_on {
            payment.paid_on = Some(paid_on);
        }
        if payment.status == PaymentStatus::Completed {
            payment.paid_on.get_or_insert_with(|| clock.today());
        } else {
            payment.paid_on = None;
        }
        debug!(case = %case_id, payment = %id, status = %payment.status, "payment updated");
        true
    }

    /// Removes the payment identified by `id`. Unknown ids are a no-op.
    pub fn remove(case: &mut Case, id: Uuid) -> Option<Payment> {
        match case.payments.iter().position(|payment| payment.id == id) {
            Some(index) => Some(case.payments.remove(index)),
            None => {
                debug!(case = %case.id, payment = %id, "payment not found; ignoring delete");
                None
            }
        }
    }

    fn prepend(case: &mut Case, payment: Payment) -> Uuid {
        let id = payment.id;
        debug!(
            case = %case.id,
            payment = %id,
            status = %payment.status,
            amount = %payment.amount,
            "payment recorded"
        );
        case.payments.insert(0, payment);
        id
    }
}
