pub mod amount;
pub mod line;

pub use amount::AmountInput;
pub use line::{LineAmount, LineItem};
