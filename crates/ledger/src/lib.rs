pub use error::ParseError;
pub use money::Money;
pub use store::{ExpenseRecord, ExpenseStore};

mod error;
mod money;
mod store;
