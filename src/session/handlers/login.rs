use tracing::info;

use crate::{
    common::error::SessionError,
    domain::ledger::Ledger,
    session::{
        controller::Session,
        outcome::{AccountView, Outcome},
    },
};

pub fn handle(
    session: &mut Session,
    ledger: &Ledger,
    name: &str,
    number: &str,
) -> Result<Outcome, SessionError> {
    let (name, number) = credentials(name, number)?;

    match ledger.find_account(name, number) {
        Some(acc) => {
            info!(account = %acc.id(), name = acc.name(), "login");
            session.open(acc.id());
            Ok(Outcome::LoggedIn(AccountView::from(acc)))
        }
        None => {
            info!(name, number, "login miss");
            Ok(Outcome::AccountNotFound {
                name: name.to_string(),
                number: number.to_string(),
            })
        }
    }
}

/// Trims both fields; either one empty is rejected before touching the ledger.
pub(crate) fn credentials<'a>(
    name: &'a str,
    number: &'a str,
) -> Result<(&'a str, &'a str), SessionError> {
    let (name, number) = (name.trim(), number.trim());
    if name.is_empty() || number.is_empty() {
        return Err(SessionError::MissingCredentials);
    }
    Ok((name, number))
}
