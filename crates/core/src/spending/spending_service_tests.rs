#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::expenses::{Expense, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};
    use crate::spending::{SpendingService, SpendingServiceTrait};
    use crate::utils::MonthKey;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockExpenseRepository {
        expenses: Arc<Mutex<Vec<Expense>>>,
    }

    impl MockExpenseRepository {
        fn new() -> Self {
            Self {
                expenses: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn add(&self, category: &str, amount: Decimal, date: &str) {
            let now = Utc::now().naive_utc();
            self.expenses.lock().unwrap().push(Expense {
                id: Uuid::new_v4().to_string(),
                user_id: "u-1".to_string(),
                category: category.to_string(),
                description: "entry".to_string(),
                amount,
                date: date.parse().unwrap(),
                created_at: now,
                updated_at: now,
            });
        }
    }

    #[async_trait]
    impl ExpenseRepositoryTrait for MockExpenseRepository {
        fn get_expense(&self, _user_id: &str, _expense_id: &str) -> Result<Expense> {
            unimplemented!()
        }

        fn list_for_user(&self, _user_id: &str) -> Result<Vec<Expense>> {
            unimplemented!()
        }

        fn list_by_category(&self, _user_id: &str, _category: &str) -> Result<Vec<Expense>> {
            unimplemented!()
        }

        fn list_by_date_range(
            &self,
            user_id: &str,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Vec<Expense>> {
            Ok(self
                .expenses
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.user_id == user_id && e.date >= start && e.date <= end)
                .cloned()
                .collect())
        }

        async fn insert_new_expense(
            &self,
            _user_id: &str,
            _new_expense: NewExpense,
        ) -> Result<Expense> {
            unimplemented!()
        }

        async fn update_expense(&self, _user_id: &str, _update: ExpenseUpdate) -> Result<Expense> {
            unimplemented!()
        }

        async fn delete_expense(&self, _user_id: &str, _expense_id: &str) -> Result<usize> {
            unimplemented!()
        }
    }

    fn month(key: &str) -> MonthKey {
        key.parse().unwrap()
    }

    #[test]
    fn test_overview_groups_all_categories_with_spend() {
        let repo = MockExpenseRepository::new();
        repo.add("Food & Dining", dec!(50), "2026-03-05");
        repo.add("Food & Dining", dec!(30), "2026-03-12");
        repo.add("Entertainment", dec!(20), "2026-03-20");
        repo.add("Shopping", dec!(999), "2026-02-20");

        let service = SpendingService::new(Arc::new(repo));
        let overview = service.get_overview("u-1", month("2026-03")).unwrap();

        assert_eq!(overview.total_spent, dec!(100));
        assert_eq!(overview.transaction_count, 3);
        assert_eq!(overview.by_category["Food & Dining"], dec!(80));
        assert_eq!(overview.by_category["Entertainment"], dec!(20));
        assert!(!overview.by_category.contains_key("Shopping"));
    }

    #[test]
    fn test_overview_of_an_empty_month_is_zeroed() {
        let service = SpendingService::new(Arc::new(MockExpenseRepository::new()));
        let overview = service.get_overview("u-1", month("2026-03")).unwrap();

        assert_eq!(overview.total_spent, Decimal::ZERO);
        assert_eq!(overview.transaction_count, 0);
        assert!(overview.by_category.is_empty());
    }

    #[test]
    fn test_overview_includes_unbudgeted_spend_unlike_the_budget_breakdown() {
        // The overview path deliberately differs from the budget summary:
        // every category with spend appears, budgeted or not.
        let repo = MockExpenseRepository::new();
        repo.add("Gym", dec!(35), "2026-03-08");

        let service = SpendingService::new(Arc::new(repo));
        let overview = service.get_overview("u-1", month("2026-03")).unwrap();

        assert_eq!(overview.by_category["Gym"], dec!(35));
    }
}
