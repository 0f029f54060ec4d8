use std::fs;

use teller::{
    app::{csv_reader, load_seeds, run_session},
    config::default_seeds,
    domain::ledger::Ledger,
    io::{reader::read_script, writer},
    session::controller::Session,
};

struct CaseOutput {
    messages: Vec<String>,
    accounts: String,
    history: Option<String>,
}

fn run_case(script_csv: &str, seeds_csv: Option<&str>) -> CaseOutput {
    let seeds = match seeds_csv {
        Some(csv) => load_seeds(csv.as_bytes()).expect("failed to parse seeds"),
        None => default_seeds(),
    };
    let mut ledger = Ledger::with_seeds(seeds).expect("invalid seeds");
    let mut session = Session::new();

    let mut rdr = csv_reader(script_csv.as_bytes());
    let mut out = Vec::<u8>::new();
    run_session(&mut ledger, &mut session, read_script(&mut rdr), &mut out)
        .expect("script failed");
    let messages = String::from_utf8(out)
        .expect("output was not valid UTF-8")
        .lines()
        .map(str::to_string)
        .collect();

    let mut accounts = Vec::<u8>::new();
    writer::write_accounts(&mut accounts, ledger.accounts()).expect("failed to write accounts");

    let history = session.view(&ledger).map(|view| {
        let mut buf = Vec::<u8>::new();
        writer::write_history(&mut buf, &view.history).expect("failed to write history");
        String::from_utf8(buf).expect("history was not valid UTF-8")
    });

    CaseOutput {
        messages,
        accounts: String::from_utf8(accounts).expect("output was not valid UTF-8"),
        history,
    }
}

fn normalize_csv(s: &str) -> String {
    // Normalize line endings + trim trailing whitespace lines.
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn case1_deposit_then_overdraw_is_refused() {
    let script = fs::read_to_string("tests/fixtures/case1_script.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/case1_expected.csv").unwrap();

    let actual = run_case(&script, None);

    assert_eq!(normalize_csv(&actual.accounts), normalize_csv(&expected));
    assert_eq!(
        actual.messages,
        vec![
            "Welcome, Mary Dawn. Balance: $1000.00",
            "Enter amount to deposit.",
            "Successfully deposited $250.50",
            "Insufficient funds.",
            "Logged out.",
        ]
    );
    assert!(actual.history.is_none());
}

#[test]
fn case2_create_on_miss_and_form_validation() {
    let script = fs::read_to_string("tests/fixtures/case2_script.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/case2_expected.csv").unwrap();

    let actual = run_case(&script, None);

    assert_eq!(normalize_csv(&actual.accounts), normalize_csv(&expected));
    assert_eq!(
        actual.messages,
        vec![
            "Account not found. Would you like to create a new account?",
            "Account created for Nobody. Balance: $0.00",
            "Successfully deposited $10.01",
            "Enter amount to withdraw.",
            "Please enter a valid amount.",
            "Please enter a valid amount.",
            "Successfully withdrew $3.50",
            "Logged out.",
            "An account with this name and number already exists.",
            "Welcome, Nobody. Balance: $6.51",
        ]
    );

    // still logged in: history is newest first
    let history = actual.history.expect("session should still be open");
    let rows: Vec<Vec<&str>> = history
        .lines()
        .skip(1)
        .map(|l| l.split(',').collect())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][1..], &["withdraw", "-3.50"]);
    assert_eq!(&rows[1][1..], &["deposit", "+10.01"]);
    assert!(rows[0][0] >= rows[1][0], "timestamps must not decrease");
}

#[test]
fn case3_seed_file_and_cent_precision() {
    let seeds = fs::read_to_string("tests/fixtures/case3_seeds.csv").unwrap();
    let script = fs::read_to_string("tests/fixtures/case3_script.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/case3_expected.csv").unwrap();

    let actual = run_case(&script, Some(&seeds));

    assert_eq!(normalize_csv(&actual.accounts), normalize_csv(&expected));
    assert_eq!(actual.messages.last().unwrap(), "Successfully withdrew $0.20");
}
