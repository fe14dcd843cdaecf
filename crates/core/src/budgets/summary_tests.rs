#[cfg(test)]
mod tests {
    use crate::budgets::{compute_summary, Budget, BudgetMode};
    use crate::expenses::Expense;
    use crate::incomes::{Frequency, Income};
    use crate::utils::MonthKey;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn month() -> MonthKey {
        "2026-03".parse().unwrap()
    }

    fn budget(total: Decimal, categories: &[(&str, Decimal)]) -> Budget {
        let now = Utc::now().naive_utc();
        Budget {
            id: "b-1".to_string(),
            user_id: "u-1".to_string(),
            month: month(),
            total_budget: total,
            category_budgets: categories
                .iter()
                .map(|(name, amount)| (name.to_string(), *amount))
                .collect(),
            mode: BudgetMode::Category,
            created_at: now,
            updated_at: now,
        }
    }

    fn expense(category: &str, amount: Decimal, date: &str) -> Expense {
        let now = Utc::now().naive_utc();
        Expense {
            id: format!("e-{category}-{amount}"),
            user_id: "u-1".to_string(),
            category: category.to_string(),
            description: "entry".to_string(),
            amount,
            date: date.parse().unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    fn income(amount: Decimal, date: &str) -> Income {
        let now = Utc::now().naive_utc();
        Income {
            id: format!("i-{amount}"),
            user_id: "u-1".to_string(),
            source: "Salary".to_string(),
            description: "entry".to_string(),
            amount,
            date: date.parse().unwrap(),
            frequency: Frequency::Monthly,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_worked_example() {
        let budget = budget(dec!(500), &[("Food & Dining", dec!(200))]);
        let expenses = vec![
            expense("Food & Dining", dec!(50), "2026-03-05"),
            expense("Food & Dining", dec!(30), "2026-03-12"),
            expense("Other", dec!(20), "2026-03-20"),
        ];

        let summary = compute_summary(&budget, &expenses, &[], month());

        assert_eq!(summary.total_spent, dec!(100));
        assert_eq!(summary.remaining, dec!(400));
        assert_eq!(summary.percentage_used, dec!(20));

        let food = &summary.category_breakdown["Food & Dining"];
        assert_eq!(food.budgeted, dec!(200));
        assert_eq!(food.spent, dec!(80));
        assert_eq!(food.remaining, dec!(120));
        assert_eq!(food.percentage_used, dec!(40));
    }

    #[test]
    fn test_zero_total_budget_has_zero_percentage() {
        let budget = budget(Decimal::ZERO, &[("Shopping", Decimal::ZERO)]);
        let expenses = vec![expense("Shopping", dec!(75), "2026-03-10")];

        let summary = compute_summary(&budget, &expenses, &[], month());

        assert_eq!(summary.percentage_used, Decimal::ZERO);
        assert_eq!(summary.remaining, dec!(-75));
        assert_eq!(summary.category_breakdown["Shopping"].percentage_used, Decimal::ZERO);
    }

    #[test]
    fn test_other_months_do_not_affect_the_summary() {
        let budget = budget(dec!(300), &[("Food & Dining", dec!(300))]);
        let expenses = vec![
            expense("Food & Dining", dec!(40), "2026-03-15"),
            expense("Food & Dining", dec!(999), "2026-02-28"),
            expense("Food & Dining", dec!(999), "2026-04-01"),
        ];

        let summary = compute_summary(&budget, &expenses, &[], month());

        assert_eq!(summary.total_spent, dec!(40));
        assert_eq!(summary.category_breakdown["Food & Dining"].spent, dec!(40));
    }

    #[test]
    fn test_month_filter_includes_first_and_last_day() {
        let budget = budget(dec!(100), &[]);
        let expenses = vec![
            expense("Other", dec!(1), "2026-03-01"),
            expense("Other", dec!(2), "2026-03-31"),
        ];

        let summary = compute_summary(&budget, &expenses, &[], month());
        assert_eq!(summary.total_spent, dec!(3));
    }

    #[test]
    fn test_unbudgeted_categories_are_excluded_from_breakdown() {
        let budget = budget(dec!(500), &[("Food & Dining", dec!(200))]);
        let expenses = vec![
            expense("Food & Dining", dec!(10), "2026-03-02"),
            expense("Entertainment", dec!(60), "2026-03-03"),
        ];

        let summary = compute_summary(&budget, &expenses, &[], month());

        // Counts toward the total, but never gets its own entry.
        assert_eq!(summary.total_spent, dec!(70));
        assert!(!summary.category_breakdown.contains_key("Entertainment"));
        assert_eq!(summary.category_breakdown.len(), 1);
    }

    #[test]
    fn test_budgeted_category_with_no_spend_is_present() {
        let budget = budget(dec!(500), &[("Healthcare", dec!(120))]);

        let summary = compute_summary(&budget, &[], &[], month());

        let health = &summary.category_breakdown["Healthcare"];
        assert_eq!(health.spent, Decimal::ZERO);
        assert_eq!(health.remaining, dec!(120));
        assert_eq!(health.percentage_used, Decimal::ZERO);
    }

    #[test]
    fn test_income_and_net_cover_the_same_month() {
        let budget = budget(dec!(1000), &[]);
        let expenses = vec![expense("Other", dec!(400), "2026-03-10")];
        let incomes = vec![
            income(dec!(2500), "2026-03-01"),
            income(dec!(999), "2026-04-01"),
        ];

        let summary = compute_summary(&budget, &expenses, &incomes, month());

        assert_eq!(summary.total_income, dec!(2500));
        assert_eq!(summary.net, dec!(2100));
    }

    #[test]
    fn test_overspending_goes_negative_without_rounding_drift() {
        let budget = budget(dec!(100), &[("Other", dec!(100))]);
        let expenses = vec![
            expense("Other", dec!(60.25), "2026-03-04"),
            expense("Other", dec!(60.25), "2026-03-05"),
        ];

        let summary = compute_summary(&budget, &expenses, &[], month());

        assert_eq!(summary.total_spent, dec!(120.50));
        assert_eq!(summary.remaining, dec!(-20.50));
        assert_eq!(summary.percentage_used, dec!(120.50));
    }

    #[test]
    fn test_percentages_round_to_two_places() {
        let budget = budget(dec!(3), &[("Other", dec!(3))]);
        let expenses = vec![expense("Other", dec!(1), "2026-03-04")];

        let summary = compute_summary(&budget, &expenses, &[], month());

        assert_eq!(summary.percentage_used, dec!(33.33));
        assert_eq!(summary.category_breakdown["Other"].percentage_used, dec!(33.33));
    }

    #[test]
    fn test_identical_inputs_give_identical_output() {
        let budget = budget(dec!(500), &[("Food & Dining", dec!(200))]);
        let expenses = vec![
            expense("Food & Dining", dec!(50), "2026-03-05"),
            expense("Other", dec!(20), "2026-03-20"),
        ];
        let incomes = vec![income(dec!(2500), "2026-03-01")];

        let first = compute_summary(&budget, &expenses, &incomes, month());
        let second = compute_summary(&budget, &expenses, &incomes, month());

        assert_eq!(first, second);
    }
}
