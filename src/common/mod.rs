pub mod error;
pub mod intent;
pub mod money;
