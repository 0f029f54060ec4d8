use std::io::Write;

use chrono::SecondsFormat;

use crate::domain::{account::Account, transaction::Transaction};

#[derive(serde::Serialize)]
/// Output row for the accounts table: `name,number,balance,transactions`.
struct AccountRow<'a> {
    name: &'a str,
    number: &'a str,
    balance: String,
    transactions: usize,
}

#[derive(serde::Serialize)]
/// Output row for a history list: `timestamp,kind,amount`.
struct HistoryRow {
    timestamp: String,
    kind: &'static str,
    amount: String,
}

/// Writes account states to a CSV writer, in the order given.
///
/// Balances are formatted with exactly two decimal places.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use teller::domain::ledger::{Ledger, SeedAccount};
/// use teller::common::money::Money;
/// use teller::io::writer::write_accounts;
///
/// let ledger = Ledger::with_seeds([
///     SeedAccount::new("Mary Dawn", "123-444-888", Money::from_units(1000)),
/// ]).unwrap();
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, ledger.accounts()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "name,number,balance,transactions\nMary Dawn,123-444-888,1000.00,0\n");
/// ```
pub fn write_accounts<W: Write>(writer: W, accounts: &[Account]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for acc in accounts {
        wtr.serialize(AccountRow {
            name: acc.name(),
            number: acc.number(),
            balance: acc.balance().to_string_2dp(),
            transactions: acc.transactions().len(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes a history list (already newest first) to a CSV writer.
///
/// Amounts carry their sign, `+` for deposits and `-` for withdrawals, with
/// two decimal places. Timestamps are RFC 3339 in UTC with millisecond
/// precision. An empty history produces only the header.
pub fn write_history<W: Write>(writer: W, history: &[Transaction]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(["timestamp", "kind", "amount"])?;

    for tx in history {
        let sign = match tx {
            Transaction::Deposit { .. } => '+',
            Transaction::Withdraw { .. } => '-',
        };
        wtr.serialize(HistoryRow {
            timestamp: tx.timestamp().to_rfc3339_opts(SecondsFormat::Millis, true),
            kind: tx.kind().as_str(),
            amount: format!("{sign}{}", tx.amount().to_string_2dp()),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
