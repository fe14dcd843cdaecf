/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Minimum accepted password length for sign-up
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Suggested expense categories offered by the clients
pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 7] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Other",
];

/// Suggested income sources offered by the clients
pub const DEFAULT_INCOME_SOURCES: [&str; 7] = [
    "Salary",
    "Freelance",
    "Business",
    "Investments",
    "Rental",
    "Gifts",
    "Other",
];
