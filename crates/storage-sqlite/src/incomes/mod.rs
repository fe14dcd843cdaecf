//! SQLite storage implementation for income entries.

mod model;
mod repository;

pub use model::{IncomeDB, NewIncomeDB};
pub use repository::IncomeRepository;
