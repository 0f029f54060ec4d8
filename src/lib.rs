//! In-memory teller: an account ledger with deposits, withdrawals and
//! per-account history, driven by a session controller that stands in for
//! the screen a user would click through.

pub mod app;
pub mod common;
pub mod config;
pub mod domain;
pub mod io;
pub mod session;
pub mod telemetry;
