use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use centime_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    incomes::{IncomeService, IncomeServiceTrait},
    spending::{SpendingService, SpendingServiceTrait},
    users::{AuthService, AuthServiceTrait, SessionContext},
};
use centime_storage_sqlite::{
    budgets::BudgetRepository,
    db::{self, write_actor},
    expenses::ExpenseRepository,
    incomes::IncomeRepository,
    users::UserRepository,
};

use crate::auth::{decode_secret_key, generate_secret_key, AuthManager};
use crate::config::Config;

pub struct AppState {
    pub auth_service: Arc<dyn AuthServiceTrait + Send + Sync>,
    pub expense_service: Arc<dyn ExpenseServiceTrait + Send + Sync>,
    pub income_service: Arc<dyn IncomeServiceTrait + Send + Sync>,
    pub budget_service: Arc<dyn BudgetServiceTrait + Send + Sync>,
    pub spending_service: Arc<dyn SpendingServiceTrait + Send + Sync>,
    pub session: SessionContext,
    pub auth: Arc<AuthManager>,
    pub db_path: String,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.data_dir)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let income_repository = Arc::new(IncomeRepository::new(pool.clone(), writer.clone()));
    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));

    let session = SessionContext::new();
    let auth_service: Arc<dyn AuthServiceTrait + Send + Sync> = Arc::new(AuthService::new(
        user_repository.clone(),
        session.clone(),
    ));

    let expense_service: Arc<dyn ExpenseServiceTrait + Send + Sync> =
        Arc::new(ExpenseService::new(expense_repository.clone()));
    let income_service: Arc<dyn IncomeServiceTrait + Send + Sync> =
        Arc::new(IncomeService::new(income_repository.clone()));
    let budget_service: Arc<dyn BudgetServiceTrait + Send + Sync> = Arc::new(BudgetService::new(
        budget_repository.clone(),
        expense_repository.clone(),
        income_repository.clone(),
    ));
    let spending_service: Arc<dyn SpendingServiceTrait + Send + Sync> =
        Arc::new(SpendingService::new(expense_repository.clone()));

    let jwt_secret = match config.secret_key.as_deref() {
        Some(raw) => decode_secret_key(raw)?,
        None => {
            let key = generate_secret_key();
            tracing::warn!(
                "CENTIME_SECRET_KEY is not set; using a generated key. Sessions will not \
                 survive a restart. Set CENTIME_SECRET_KEY={} to pin it.",
                BASE64.encode(&key)
            );
            key
        }
    };
    let auth = Arc::new(AuthManager::new(&jwt_secret, config.token_ttl));

    Ok(Arc::new(AppState {
        auth_service,
        expense_service,
        income_service,
        budget_service,
        spending_service,
        session,
        auth,
        db_path,
    }))
}
