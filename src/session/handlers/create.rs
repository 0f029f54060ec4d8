use tracing::info;

use crate::{
    common::error::SessionError,
    domain::ledger::Ledger,
    session::{
        controller::Session,
        handlers::login::credentials,
        outcome::{AccountView, Outcome},
    },
};

/// Opens a new empty account after the user confirmed creation, and logs into it.
pub fn handle(
    session: &mut Session,
    ledger: &mut Ledger,
    name: &str,
    number: &str,
) -> Result<Outcome, SessionError> {
    let (name, number) = credentials(name, number)?;

    let acc = ledger.create_account(name, number)?;
    info!(account = %acc.id(), name = acc.name(), "account created");
    session.open(acc.id());
    Ok(Outcome::AccountCreated(AccountView::from(acc)))
}
