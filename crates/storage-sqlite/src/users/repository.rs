use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use centime_core::users::{NewUser, User, UserRepositoryTrait};
use centime_core::Result;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use crate::schema::users::dsl::*;

pub struct UserRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn find_by_email(&self, user_email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users
            .filter(email.eq(user_email))
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user_db.map(User::from))
    }

    fn find_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(User::from(user_db))
    }

    async fn insert_new_user(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let now = Utc::now().naive_utc();
                let new_user_db = NewUserDB {
                    id: Uuid::new_v4().to_string(),
                    email: new_user.email,
                    display_name: new_user.display_name,
                    password_hash: new_user.password_hash,
                    created_at: now,
                    updated_at: now,
                };

                let result_db = diesel::insert_into(users::table)
                    .values(&new_user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, write_actor::spawn_writer};
    use centime_core::errors::{DatabaseError, Error};
    use tempfile::tempdir;

    async fn create_test_repository() -> (UserRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");

        let writer = spawn_writer((*pool).clone());
        let repo = UserRepository::new(Arc::clone(&pool), writer);
        (repo, temp_dir)
    }

    fn sample_user(user_email: &str) -> NewUser {
        NewUser {
            email: user_email.to_string(),
            display_name: "Sample".to_string(),
            password_hash: "$argon2id$fake-hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamps() {
        let (repo, _temp_dir) = create_test_repository().await;

        let inserted = repo
            .insert_new_user(sample_user("a@example.com"))
            .await
            .expect("insert failed");

        assert!(!inserted.id.is_empty());
        assert_eq!(inserted.email, "a@example.com");
        assert_eq!(inserted.created_at, inserted.updated_at);
    }

    #[tokio::test]
    async fn test_find_by_email_returns_none_for_unknown() {
        let (repo, _temp_dir) = create_test_repository().await;

        let found = repo
            .find_by_email("nobody@example.com")
            .expect("query failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_email_roundtrip() {
        let (repo, _temp_dir) = create_test_repository().await;

        let inserted = repo
            .insert_new_user(sample_user("b@example.com"))
            .await
            .expect("insert failed");

        let found = repo
            .find_by_email("b@example.com")
            .expect("query failed")
            .expect("user missing");
        assert_eq!(found, inserted);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let (repo, _temp_dir) = create_test_repository().await;

        repo.insert_new_user(sample_user("dup@example.com"))
            .await
            .expect("first insert failed");

        let err = repo
            .insert_new_user(sample_user("dup@example.com"))
            .await
            .expect_err("second insert should fail");
        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_not_found() {
        let (repo, _temp_dir) = create_test_repository().await;

        let err = repo.find_by_id("no-such-id").expect_err("should fail");
        assert!(err.is_not_found());
    }
}
