use tracing::debug;

use crate::core::ids::IdGenerator;
use crate::domain::case::{Case, CaseDetailsPatch, NewCase};

use super::AccountService;

pub struct CaseService;

impl CaseService {
    pub fn blank(ids: &dyn IdGenerator) -> Case {
        Case::blank(ids.next_id())
    }

    /// Builds a case from the creation form, opening its initial account.
    pub fn open(form: &NewCase, ids: &dyn IdGenerator) -> Case {
        let mut case = Case::blank(ids.next_id());
        case.code = form.code.trim().to_string();
        case.client_name = form.client_name.trim().to_string();
        case.donor_name = form.donor_name.trim().to_string();
        AccountService::add(&mut case, &form.account, ids);
        debug!(case = %case.id, code = %case.code, "case opened");
        case
    }

    pub fn update_details(case: &mut Case, patch: &CaseDetailsPatch) {
        if let Some(code) = &patch.code {
            case.code = code.trim().to_string();
        }
        if let Some(client) = &patch.client_name {
            case.client_name = client.trim().to_string();
        }
        if let Some(donor) = &patch.donor_name {
            case.donor_name = donor.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::SequentialIds;
    use crate::domain::account::AccountDraft;

    #[test]
    fn open_populates_details_and_account() {
        let ids = SequentialIds::new();
        let form = NewCase {
            code: " C-7 ".into(),
            client_name: "Rivera".into(),
            donor_name: "Okafor".into(),
            account: AccountDraft::new("Escrow", "2500"),
        };
        let case = CaseService::open(&form, &ids);
        assert_eq!(case.code, "C-7");
        assert_eq!(case.accounts.len(), 1);
        assert!(case.expenses.is_empty() && case.payments.is_empty());
    }

    #[test]
    fn update_details_leaves_unset_fields() {
        let ids = SequentialIds::new();
        let mut case = CaseService::blank(&ids);
        case.donor_name = "Okafor".into();
        let patch = CaseDetailsPatch {
            client_name: Some("Rivera".into()),
            ..CaseDetailsPatch::default()
        };
        CaseService::update_details(&mut case, &patch);
        assert_eq!(case.client_name, "Rivera");
        assert_eq!(case.donor_name, "Okafor");
    }
}
