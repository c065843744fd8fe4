//! Money helpers for the pharmacy storefront: locale aware display of
//! amounts, and integer cent arithmetic for prices and cart totals.

pub mod dto;
pub mod error;
pub mod format;
pub mod model;
pub mod money;

pub use error::MoneyError;
pub use format::{format_money, FormatOptions};
pub use model::{AmountInput, LineAmount, LineItem};
pub use money::{cents_to_amount_string, sum_cents, to_cents};
