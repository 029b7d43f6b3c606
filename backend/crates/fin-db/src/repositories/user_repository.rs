use crate::{DbError, Result as DbErrorResult};

use fin_core::{NewUser, StoreError, StoreResult, UniqueField, UserRecord, UserStore};

use std::panic::Location;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use error_location::ErrorLocation;
use log::debug;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserRecord>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, external_subject_id, email, display_name, avatar_url, created_at
                FROM users
                WHERE id = ?
                "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::user_from_row).transpose()
    }

    pub async fn find_by_external_subject_id(
        &self,
        external_subject_id: &str,
    ) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, external_subject_id, email, display_name, avatar_url, created_at
                FROM users
                WHERE external_subject_id = ?
                "#,
        )
        .bind(external_subject_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::user_from_row).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, external_subject_id, email, display_name, avatar_url, created_at
                FROM users
                WHERE email = ?
                "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::user_from_row).transpose()
    }

    /// Single-statement insert. A duplicate subject id or email comes back as
    /// [`DbError::UniqueViolation`] and nothing is written.
    pub async fn create(&self, new_user: &NewUser) -> DbErrorResult<UserRecord> {
        let user = UserRecord::from_new_user(new_user);
        let id_str = user.id.to_string();
        let created_at = user.created_at.timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO users (id, external_subject_id, email, display_name, avatar_url, created_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(id_str)
        .bind(&user.external_subject_id)
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.avatar_url)
        .bind(created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!("Inserted user {}", user.id);
                Ok(user)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                match Self::violated_field(db_err.message()) {
                    Some(field) => Err(DbError::UniqueViolation {
                        field,
                        location: ErrorLocation::from(Location::caller()),
                    }),
                    None => Err(sqlx::Error::Database(db_err).into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Maps "UNIQUE constraint failed: users.<column>" onto the user-facing
    /// unique index. Anything else (the primary key included) is `None`.
    pub(crate) fn violated_field(message: &str) -> Option<UniqueField> {
        message
            .split_once("users.")
            .and_then(|(_, column)| UniqueField::from_str(column.trim()).ok())
    }

    fn user_from_row(row: &SqliteRow) -> DbErrorResult<UserRecord> {
        let id: String = Self::column(row, "id")?;
        let created_at: i64 = Self::column(row, "created_at")?;

        Ok(UserRecord {
            id: Uuid::parse_str(&id).map_err(|e| DbError::RowDecode {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            external_subject_id: Self::column(row, "external_subject_id")?,
            email: Self::column(row, "email")?,
            display_name: Self::column(row, "display_name")?,
            avatar_url: Self::column(row, "avatar_url")?,
            created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                DbError::RowDecode {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }

    #[track_caller]
    fn column<'r, T>(row: &'r SqliteRow, name: &str) -> DbErrorResult<T>
    where
        T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
    {
        row.try_get(name).map_err(|e| DbError::RowDecode {
            message: format!("users.{}: {}", name, e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_external_subject_id(
        &self,
        external_subject_id: &str,
    ) -> StoreResult<Option<UserRecord>> {
        Ok(UserRepository::find_by_external_subject_id(self, external_subject_id).await?)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>> {
        Ok(UserRepository::find_by_email(self, email).await?)
    }

    async fn insert(&self, new_user: &NewUser) -> StoreResult<UserRecord> {
        self.create(new_user).await.map_err(StoreError::from)
    }
}
