use crate::{
    common::{intent::Intent, money::Money},
    domain::{ledger::SeedAccount, transaction::TxKind},
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Seed file row: `name,number,balance`.
struct SeedRow {
    name: String,
    number: String,
    balance: String,
}

#[derive(serde::Deserialize)]
/// Script file row. Only `intent` is always present; the other columns are
/// used depending on the intent.
struct ScriptRow {
    intent: String,
    name: Option<String>,
    number: Option<String>,
    amount: Option<String>,
}

/// Reads seed accounts from a CSV reader.
///
/// Supported headers: `name,number,balance`. Balances are decimal strings;
/// validation of the identity and sign is left to the ledger.
///
/// # Examples
///
/// ```
/// use teller::io::reader::read_seeds;
/// use csv::ReaderBuilder;
///
/// let data = "name,number,balance\nMary Dawn,123-444-888,1000\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let seeds: Vec<_> = read_seeds(&mut rdr).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(seeds[0].name, "Mary Dawn");
/// assert_eq!(seeds[0].balance.to_string_2dp(), "1000.00");
/// ```
pub fn read_seeds<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<SeedAccount, String>> + '_ {
    rdr.deserialize::<SeedRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let balance = Money::from_str(&row.balance)
            .map_err(|e| format!("bad balance for seed {}: {e}", row.name.trim()))?;
        Ok(SeedAccount::new(row.name.trim(), row.number.trim(), balance))
    })
}

/// Reads a script of user intents from a CSV reader.
///
/// Supported headers: `intent,name,number,amount`. Intent names are matched
/// case-insensitively:
///
/// | intent     | columns used                         |
/// |------------|--------------------------------------|
/// | `login`    | `name`, `number`                     |
/// | `create`   | `name`, `number`                     |
/// | `select`   | `amount` holds `deposit`/`withdraw`  |
/// | `confirm`  | `amount` as typed (may be invalid)   |
/// | `deposit`  | `amount`                             |
/// | `withdraw` | `amount`                             |
/// | `logout`   | none                                 |
///
/// Blank credentials are passed through so the session can reject them.
/// Amounts for `deposit`/`withdraw` must parse; errors carry the row line.
pub fn read_script<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Intent, String>> + '_ {
    rdr.deserialize::<ScriptRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.intent.trim().to_ascii_lowercase();
        let text = |field: Option<String>| field.unwrap_or_default();

        match kind.as_str() {
            "login" => Ok(Intent::LoginAttempt {
                name: text(row.name),
                number: text(row.number),
            }),
            "create" => Ok(Intent::CreateAccountConfirm {
                name: text(row.name),
                number: text(row.number),
            }),
            "select" => {
                let tx_kind = row
                    .amount
                    .as_deref()
                    .ok_or_else(|| "select missing transaction kind".to_string())
                    .and_then(TxKind::from_str)?;
                Ok(Intent::SelectTransaction(tx_kind))
            }
            "confirm" => Ok(Intent::ConfirmTransaction {
                amount: text(row.amount),
            }),
            "deposit" => Ok(Intent::DepositRequest {
                amount: parse_amount(&kind, row.amount)?,
            }),
            "withdraw" | "withdrawal" => Ok(Intent::WithdrawRequest {
                amount: parse_amount(&kind, row.amount)?,
            }),
            "logout" => Ok(Intent::Logout),
            other => Err(format!("unknown intent: {other}")),
        }
    })
}

fn parse_amount(intent: &str, amount: Option<String>) -> Result<Money, String> {
    let raw = amount.ok_or_else(|| format!("{intent} missing amount"))?;
    Money::from_str(&raw).map_err(|e| format!("{intent} has bad amount {raw:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper: parse CSV input into collected intents for assertions.
    fn collect_intents(input: &str) -> Vec<Result<Intent, String>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input.as_bytes());
        read_script(&mut reader).collect()
    }

    #[test]
    fn parses_all_supported_intents() {
        let data = "intent,name,number,amount\n\
login,Mary Dawn,123-444-888,\n\
create,Nobody,000-000,\n\
select,,,Withdraw\n\
confirm,,,12.5\n\
deposit,,,250.50\n\
WITHDRAW,,,40\n\
logout,,,\n";
        let intents = collect_intents(data);

        assert_eq!(
            intents,
            vec![
                Ok(Intent::LoginAttempt {
                    name: "Mary Dawn".to_string(),
                    number: "123-444-888".to_string(),
                }),
                Ok(Intent::CreateAccountConfirm {
                    name: "Nobody".to_string(),
                    number: "000-000".to_string(),
                }),
                Ok(Intent::SelectTransaction(TxKind::Withdraw)),
                Ok(Intent::ConfirmTransaction {
                    amount: "12.5".to_string(),
                }),
                Ok(Intent::DepositRequest {
                    amount: Money::from_str("250.50").unwrap(),
                }),
                Ok(Intent::WithdrawRequest {
                    amount: Money::from_units(40),
                }),
                Ok(Intent::Logout),
            ]
        );
    }

    #[test]
    fn blank_login_fields_reach_the_session() {
        let intents = collect_intents("intent,name,number,amount\nlogin,,,\n");
        assert_eq!(
            intents,
            vec![Ok(Intent::LoginAttempt {
                name: String::new(),
                number: String::new(),
            })]
        );
    }

    #[test]
    fn confirm_keeps_unparseable_text() {
        let intents = collect_intents("intent,name,number,amount\nconfirm,,,abc\n");
        assert_eq!(
            intents,
            vec![Ok(Intent::ConfirmTransaction {
                amount: "abc".to_string(),
            })]
        );
    }

    #[test]
    fn reports_missing_and_bad_amounts() {
        let intents = collect_intents("intent,name,number,amount\ndeposit,,,\nwithdraw,,,ten\n");

        assert_eq!(intents.len(), 2);
        assert_eq!(intents[0], Err("deposit missing amount".to_string()));
        let err = intents[1].clone().unwrap_err();
        assert!(err.starts_with("withdraw has bad amount \"ten\""), "{err}");
    }

    #[test]
    fn reports_unknown_intent_and_kind() {
        let intents = collect_intents("intent,name,number,amount\nrefund,,,1\nselect,,,transfer\n");

        assert_eq!(intents[0], Err("unknown intent: refund".to_string()));
        assert_eq!(
            intents[1],
            Err("unknown transaction kind: transfer".to_string())
        );
    }

    #[test]
    fn reads_seed_rows() {
        let data = "name,number,balance\nMary Dawn,123-444-888,1000\nAlf David,2301-8880,2500.75\n";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());

        let seeds: Vec<_> = read_seeds(&mut reader).collect();

        assert_eq!(
            seeds,
            vec![
                Ok(SeedAccount::new("Mary Dawn", "123-444-888", Money::from_units(1000))),
                Ok(SeedAccount::new(
                    "Alf David",
                    "2301-8880",
                    Money::from_str("2500.75").unwrap()
                )),
            ]
        );
    }

    #[test]
    fn reports_bad_seed_balance() {
        let data = "name,number,balance\nMary Dawn,123-444-888,lots\n";
        let mut reader = csv::ReaderBuilder::new().from_reader(data.as_bytes());

        let seeds: Vec<_> = read_seeds(&mut reader).collect();

        let err = seeds[0].clone().unwrap_err();
        assert!(err.starts_with("bad balance for seed Mary Dawn"), "{err}");
    }
}
