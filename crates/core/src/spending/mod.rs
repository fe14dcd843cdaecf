//! Spending module - whole-month expense grouping, independent of budgets.

mod spending_model;
mod spending_service;

#[cfg(test)]
mod spending_service_tests;

pub use spending_model::SpendingOverview;
pub use spending_service::{SpendingService, SpendingServiceTrait};
