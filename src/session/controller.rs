use tracing::debug;

use crate::{
    common::{error::SessionError, intent::Intent},
    domain::{account::AccountId, ledger::Ledger, transaction::TxKind},
    session::{
        handlers::{create, deposit, form, login, logout, withdrawal},
        outcome::{AccountView, Outcome},
    },
};

/// UI-side state for one user: which account is open and which amount form,
/// if any, is showing. The ledger never sees this.
#[derive(Debug, Default)]
pub struct Session {
    pub(crate) current: Option<AccountId>,
    pub(crate) pending: Option<TxKind>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            current: None,
            pending: None,
        }
    }

    pub fn current(&self) -> Option<AccountId> {
        self.current
    }

    pub fn pending(&self) -> Option<TxKind> {
        self.pending
    }

    /// Snapshot of the open account, if any.
    pub fn view(&self, ledger: &Ledger) -> Option<AccountView> {
        self.current
            .and_then(|id| ledger.account(id))
            .map(AccountView::from)
    }

    pub fn process(&mut self, ledger: &mut Ledger, intent: Intent) -> Result<Outcome, SessionError> {
        debug!(?intent, "processing intent");
        match intent {
            Intent::LoginAttempt { name, number } => login::handle(self, ledger, &name, &number),
            Intent::CreateAccountConfirm { name, number } => {
                create::handle(self, ledger, &name, &number)
            }
            Intent::SelectTransaction(kind) => form::select(self, kind),
            Intent::ConfirmTransaction { amount } => form::confirm(self, ledger, &amount),
            Intent::DepositRequest { amount } => deposit::handle(self, ledger, amount),
            Intent::WithdrawRequest { amount } => withdrawal::handle(self, ledger, amount),
            Intent::Logout => Ok(logout::handle(self)),
        }
    }

    pub(crate) fn require_current(&self) -> Result<AccountId, SessionError> {
        self.current.ok_or(SessionError::NotLoggedIn)
    }

    pub(crate) fn open(&mut self, id: AccountId) {
        self.current = Some(id);
        self.pending = None;
    }
}
