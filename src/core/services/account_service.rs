use tracing::debug;
use uuid::Uuid;

use crate::core::ids::IdGenerator;
use crate::currency::parse_signed_amount;
use crate::domain::{account::Account, account::AccountDraft, case::Case};

pub struct AccountService;

impl AccountService {
    /// Opens the case account. A case holds at most one account, so this is a no-op returning
    /// `None` when one already exists.
    pub fn add(case: &mut Case, draft: &AccountDraft, ids: &dyn IdGenerator) -> Option<Uuid> {
        if !case.accounts.is_empty() {
            debug!(case = %case.id, "case already has an account; ignoring add");
            return None;
        }
        let account = Account::new(
            ids.next_id(),
            draft.name.trim(),
            parse_signed_amount(&draft.starting_balance),
        );
        let id = account.id;
        debug!(case = %case.id, account = %id, "account opened");
        case.accounts.push(account);
        Some(id)
    }
}
