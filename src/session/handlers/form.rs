use std::str::FromStr;

use tracing::{debug, warn};

use crate::{
    common::{
        error::{LedgerError, SessionError},
        money::Money,
    },
    domain::{ledger::Ledger, transaction::TxKind},
    session::{
        controller::Session,
        handlers::{deposit, withdrawal},
        outcome::Outcome,
    },
};

/// Opens the amount form for a deposit or a withdrawal.
pub fn select(session: &mut Session, kind: TxKind) -> Result<Outcome, SessionError> {
    let id = session.require_current()?;
    debug!(account = %id, %kind, "amount form opened");
    session.pending = Some(kind);
    Ok(Outcome::AwaitingAmount(kind))
}

/// Submits the amount form. The text must parse as a positive number; on any
/// failure the form stays open with its kind.
pub fn confirm(session: &mut Session, ledger: &mut Ledger, raw: &str) -> Result<Outcome, SessionError> {
    session.require_current()?;
    let kind = session.pending.ok_or(SessionError::NoPendingTransaction)?;

    let amount = Money::from_str(raw).map_err(|err| {
        warn!(input = raw, %err, "unparseable amount");
        LedgerError::InvalidAmount(format!("{:?} is not a number", raw.trim()))
    })?;

    match kind {
        TxKind::Deposit => deposit::handle(session, ledger, amount),
        TxKind::Withdraw => withdrawal::handle(session, ledger, amount),
    }
}
