use std::{env, process};

use chrono::{Duration, NaiveDate};
use serde_json::json;

use case_ledger::{
    config::ConfigManager,
    core::{
        services::SummaryService, CaseAction, CaseStore, Clock, SystemClock, UuidGenerator,
    },
    currency::parse_amount,
    domain::{AccountDraft, ExpenseDraft, InvoiceDraft, NewCase, ReceiptDraft},
    init,
    reminder::ReminderTone,
    suggest::suggest_category,
    utils::build_info,
    TrackerError,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    match command.as_str() {
        "suggest" => {
            let text = args.collect::<Vec<_>>().join(" ");
            let suggestion = suggest_category(&text);
            println!("{}", serde_json::to_string_pretty(&suggestion)?);
        }
        "remind" => {
            let rest: Vec<String> = args.collect();
            let config = ConfigManager::new().load()?;
            let (tone, client, amount, due) = match rest.as_slice() {
                [tone, client, amount, due] => (tone.parse::<ReminderTone>()?, client, amount, due),
                [client, amount, due] => (config.default_tone, client, amount, due),
                _ => {
                    print_usage();
                    process::exit(1);
                }
            };
            let due = NaiveDate::parse_from_str(due, "%Y-%m-%d")
                .map_err(|_| TrackerError::InvalidDate(due.clone()))?;
            let text = config
                .reminder_builder()
                .build(tone, client, parse_amount(amount), due);
            println!("{text}");
        }
        "demo" => {
            let config = ConfigManager::new().load()?;
            let store = demo_store();
            let case = store
                .active_case()
                .ok_or_else(|| TrackerError::Config("demo case missing".into()))?;
            let today = store.clock().today();
            let report = json!({
                "case": case,
                "balances": SummaryService::balances(case),
                "totals": SummaryService::totals(case),
                "kpis": SummaryService::kpis(case, today, config.due_soon_days),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "version" => {
            println!("{}", build_info::current());
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn demo_store() -> CaseStore {
    let mut store = CaseStore::new(Box::new(SystemClock), Box::new(UuidGenerator));
    let today = store.clock().today();
    let blank = store.book().active_id();
    store.dispatch(CaseAction::CreateCase(NewCase {
        code: "DEMO-1".into(),
        client_name: "Jordan Avery".into(),
        donor_name: "Sample Donor".into(),
        account: AccountDraft::new("Escrow", "1000"),
    }));
    store.dispatch(CaseAction::DeleteCase(blank));
    let case_id = store.book().active_id();
    store.dispatch(CaseAction::AddExpense {
        case_id,
        draft: ExpenseDraft::from_note("200", "Clinic ultrasound"),
    });
    store.dispatch(CaseAction::AddReceivedPayment {
        case_id,
        draft: ReceiptDraft::new("150"),
    });
    store.dispatch(CaseAction::AddInvoice {
        case_id,
        draft: InvoiceDraft::new("500", today + Duration::days(3)),
    });
    store
}

fn print_usage() {
    eprintln!(
        "Usage: case_ledger_cli <command>\n\
         Commands:\n  \
         suggest <note...>\n  \
         remind [polite|urgent|playful] <client> <amount> <YYYY-MM-DD>\n  \
         demo\n  \
         version"
    );
}
