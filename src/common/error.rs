use crate::{common::money::Money, domain::account::AccountId};

/// Failures reported by the ledger. None of them leaves a partial mutation behind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },
    #[error("invalid account identity: {0}")]
    InvalidIdentity(String),
    #[error("account {name} / {number} already exists")]
    DuplicateAccount { name: String, number: String },
    #[error("unknown account id {0}")]
    UnknownAccount(AccountId),
    #[error("amount overflows the account balance")]
    AmountOverflow,
}

/// Failures of a single user intent. These are shown to the user; the session
/// keeps going afterwards.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please enter both account name and number.")]
    MissingCredentials,
    #[error("Please log in first.")]
    NotLoggedIn,
    #[error("Choose deposit or withdraw first.")]
    NoPendingTransaction,
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl SessionError {
    /// The message the presentation layer shows for this failure.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Ledger(LedgerError::InvalidAmount(_)) => {
                "Please enter a valid amount.".to_string()
            }
            SessionError::Ledger(LedgerError::InsufficientFunds { .. }) => {
                "Insufficient funds.".to_string()
            }
            SessionError::Ledger(LedgerError::InvalidIdentity(_)) => {
                SessionError::MissingCredentials.to_string()
            }
            SessionError::Ledger(LedgerError::DuplicateAccount { .. }) => {
                "An account with this name and number already exists.".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing script csv path. usage: teller <script.csv> [seeds.csv]")]
    MissingArg,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid seed account: {0}")]
    Seed(LedgerError),
}
