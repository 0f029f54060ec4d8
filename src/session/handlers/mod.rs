pub mod create;
pub mod deposit;
pub mod form;
pub mod login;
pub mod logout;
pub mod withdrawal;
