pub mod wallet_manager;

pub use wallet_manager::{NewRecurringIncome, WalletManager};
