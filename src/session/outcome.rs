use crate::{
    common::money::Money,
    domain::{
        account::{Account, AccountId},
        transaction::{Transaction, TxKind},
    },
};

/// What the presentation layer needs to draw the account screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    pub id: AccountId,
    pub name: String,
    pub number: String,
    pub balance: Money,
    /// Newest first.
    pub history: Vec<Transaction>,
}

impl From<&Account> for AccountView {
    fn from(acc: &Account) -> Self {
        Self {
            id: acc.id(),
            name: acc.name().to_string(),
            number: acc.number().to_string(),
            balance: acc.balance(),
            history: acc.history(),
        }
    }
}

/// Successful result of one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    LoggedIn(AccountView),
    /// Lookup missed; the caller may follow up with a creation confirm.
    AccountNotFound { name: String, number: String },
    AccountCreated(AccountView),
    AwaitingAmount(TxKind),
    Transacted {
        transaction: Transaction,
        view: AccountView,
    },
    LoggedOut,
}

impl Outcome {
    pub fn view(&self) -> Option<&AccountView> {
        match self {
            Outcome::LoggedIn(view)
            | Outcome::AccountCreated(view)
            | Outcome::Transacted { view, .. } => Some(view),
            _ => None,
        }
    }

    /// The line shown to the user.
    ///
    /// Amounts are rounded to cents for display only; a sub-cent deposit is
    /// credited in full but reads as `$0.00`.
    pub fn message(&self) -> String {
        match self {
            Outcome::LoggedIn(view) => {
                format!("Welcome, {}. Balance: ${}", view.name, view.balance)
            }
            Outcome::AccountNotFound { .. } => {
                "Account not found. Would you like to create a new account?".to_string()
            }
            Outcome::AccountCreated(view) => {
                format!("Account created for {}. Balance: ${}", view.name, view.balance)
            }
            Outcome::AwaitingAmount(kind) => format!("Enter amount to {kind}."),
            Outcome::Transacted { transaction, .. } => match transaction {
                Transaction::Deposit { amount, .. } => {
                    format!("Successfully deposited ${amount}")
                }
                Transaction::Withdraw { amount, .. } => {
                    format!("Successfully withdrew ${amount}")
                }
            },
            Outcome::LoggedOut => "Logged out.".to_string(),
        }
    }
}
