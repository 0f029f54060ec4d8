use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::transaction::{Transaction, TxKind},
};

/// Handle to an account, issued by the ledger in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(pub(crate) usize);

impl AccountId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    name: String,
    number: String,
    /// Seed balance; zero for accounts opened on demand.
    opening_balance: Money,
    balance: Money,
    /// Append-only, oldest first.
    transactions: Vec<Transaction>,
}

impl Account {
    pub(crate) fn new(id: AccountId, name: String, number: String, opening_balance: Money) -> Self {
        Self {
            id,
            name,
            number,
            opening_balance,
            balance: opening_balance,
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn opening_balance(&self) -> Money {
        self.opening_balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Name compares case-insensitively, number exactly.
    pub fn matches(&self, name: &str, number: &str) -> bool {
        self.number == number && self.name.to_lowercase() == name.to_lowercase()
    }

    /// Snapshot of the log, newest first.
    pub fn history(&self) -> Vec<Transaction> {
        self.transactions.iter().rev().cloned().collect()
    }

    pub fn deposit(&mut self, amount: Money, now: DateTime<Utc>) -> Result<Transaction, LedgerError> {
        ensure_positive(amount)?;
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        Ok(self.apply(TxKind::Deposit, amount, balance, now))
    }

    pub fn withdraw(&mut self, amount: Money, now: DateTime<Utc>) -> Result<Transaction, LedgerError> {
        ensure_positive(amount)?;
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        let balance = self.balance - amount;
        Ok(self.apply(TxKind::Withdraw, amount, balance, now))
    }

    fn apply(&mut self, kind: TxKind, amount: Money, balance: Money, now: DateTime<Utc>) -> Transaction {
        // keep the log non-decreasing if the wall clock steps back
        let at = match self.transactions.last() {
            Some(last) if last.timestamp() > now => last.timestamp(),
            _ => now,
        };
        let tx = Transaction::new(kind, amount, at);
        self.balance = balance;
        self.transactions.push(tx.clone());
        tx
    }
}

fn ensure_positive(amount: Money) -> Result<(), LedgerError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(format!(
            "amount must be greater than zero, got {}",
            amount.to_string_2dp()
        )))
    }
}
