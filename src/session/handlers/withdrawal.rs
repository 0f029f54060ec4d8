use tracing::{info, warn};

use crate::{
    common::{error::SessionError, money::Money},
    domain::ledger::Ledger,
    session::{controller::Session, outcome::Outcome},
};

pub fn handle(session: &mut Session, ledger: &mut Ledger, amount: Money) -> Result<Outcome, SessionError> {
    let id = session.require_current()?;

    let transaction = ledger.withdraw(id, amount).inspect_err(|err| {
        warn!(account = %id, %amount, %err, "withdrawal rejected");
    })?;
    info!(account = %id, %amount, "withdrawal applied");

    session.pending = None;
    let view = session.view(ledger).ok_or(SessionError::NotLoggedIn)?;
    Ok(Outcome::Transacted { transaction, view })
}
