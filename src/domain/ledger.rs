use chrono::Utc;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{
        account::{Account, AccountId},
        transaction::Transaction,
    },
};

/// Reference account supplied at start-up. Seeds carry an opening balance but
/// no transaction history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAccount {
    pub name: String,
    pub number: String,
    pub balance: Money,
}

impl SeedAccount {
    pub fn new(name: impl Into<String>, number: impl Into<String>, balance: Money) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            balance,
        }
    }
}

/// In-memory store of accounts, kept in creation order.
///
/// Accounts are addressed by the [`AccountId`] handed out on creation, so a
/// session can remember "the current account" without borrowing the ledger.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    pub fn with_seeds<I>(seeds: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = SeedAccount>,
    {
        let mut ledger = Ledger::new();
        for seed in seeds {
            if seed.balance.is_negative() {
                return Err(LedgerError::InvalidAmount(format!(
                    "opening balance for {} must not be negative",
                    seed.name.trim()
                )));
            }
            ledger.insert(&seed.name, &seed.number, seed.balance)?;
        }
        Ok(ledger)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id.index())
    }

    /// Earliest-created account whose name matches case-insensitively and whose
    /// number matches exactly. `None` is an ordinary miss.
    pub fn find_account(&self, name: &str, number: &str) -> Option<&Account> {
        let (name, number) = (name.trim(), number.trim());
        self.accounts.iter().find(|acc| acc.matches(name, number))
    }

    /// Opens an empty account. A pair that lookup already resolves is refused,
    /// since the new account could never be found again.
    pub fn create_account(&mut self, name: &str, number: &str) -> Result<&Account, LedgerError> {
        let id = self.insert(name, number, Money::zero())?;
        Ok(&self.accounts[id.index()])
    }

    pub fn deposit(&mut self, id: AccountId, amount: Money) -> Result<Transaction, LedgerError> {
        self.account_mut(id)?.deposit(amount, Utc::now())
    }

    pub fn withdraw(&mut self, id: AccountId, amount: Money) -> Result<Transaction, LedgerError> {
        self.account_mut(id)?.withdraw(amount, Utc::now())
    }

    /// Newest-first copy of the account's log.
    pub fn history(&self, id: AccountId) -> Result<Vec<Transaction>, LedgerError> {
        self.account(id)
            .map(Account::history)
            .ok_or(LedgerError::UnknownAccount(id))
    }

    fn account_mut(&mut self, id: AccountId) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(id.index())
            .ok_or(LedgerError::UnknownAccount(id))
    }

    fn insert(&mut self, name: &str, number: &str, opening: Money) -> Result<AccountId, LedgerError> {
        let (name, number) = (name.trim(), number.trim());
        if name.is_empty() || number.is_empty() {
            return Err(LedgerError::InvalidIdentity(
                "account name and number must not be empty".to_string(),
            ));
        }
        if self.find_account(name, number).is_some() {
            return Err(LedgerError::DuplicateAccount {
                name: name.to_string(),
                number: number.to_string(),
            });
        }

        let id = AccountId(self.accounts.len());
        self.accounts
            .push(Account::new(id, name.to_string(), number.to_string(), opening));
        Ok(id)
    }
}
