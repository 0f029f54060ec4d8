use crate::{common::money::Money, domain::transaction::TxKind};

/// A user request forwarded from the presentation layer to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    LoginAttempt { name: String, number: String },
    CreateAccountConfirm { name: String, number: String },
    /// Opens the amount form for the given kind.
    SelectTransaction(TxKind),
    /// Submits the raw text typed into the amount form.
    ConfirmTransaction { amount: String },
    DepositRequest { amount: Money },
    WithdrawRequest { amount: Money },
    Logout,
}
