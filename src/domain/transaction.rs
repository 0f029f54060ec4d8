use std::fmt;

use chrono::{DateTime, Utc};

use crate::common::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxKind {
    Deposit,
    Withdraw,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Deposit => "deposit",
            TxKind::Withdraw => "withdraw",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deposit" => Ok(TxKind::Deposit),
            "withdraw" | "withdrawal" => Ok(TxKind::Withdraw),
            other => Err(format!("unknown transaction kind: {other}")),
        }
    }
}

/// An applied balance change. Records are immutable once appended to an
/// account's log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Deposit { amount: Money, at: DateTime<Utc> },
    Withdraw { amount: Money, at: DateTime<Utc> },
}

impl Transaction {
    pub fn new(kind: TxKind, amount: Money, at: DateTime<Utc>) -> Self {
        match kind {
            TxKind::Deposit => Transaction::Deposit { amount, at },
            TxKind::Withdraw => Transaction::Withdraw { amount, at },
        }
    }

    pub fn kind(&self) -> TxKind {
        match self {
            Transaction::Deposit { .. } => TxKind::Deposit,
            Transaction::Withdraw { .. } => TxKind::Withdraw,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Transaction::Deposit { amount, .. } | Transaction::Withdraw { amount, .. } => *amount,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Transaction::Deposit { at, .. } | Transaction::Withdraw { at, .. } => *at,
        }
    }

    /// The amount with the sign it contributes to the balance.
    pub fn signed_amount(&self) -> Money {
        match self {
            Transaction::Deposit { amount, .. } => *amount,
            Transaction::Withdraw { amount, .. } => Money::zero() - *amount,
        }
    }
}
