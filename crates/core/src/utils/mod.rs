pub mod month_utils;

pub use month_utils::MonthKey;
