use sqlx::PgPool;

use crate::dto::auth_dto::NewUser;
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::crypto::{hash_password, verify_password};

pub const DUPLICATE_USER: &str = "Username or email already exists.";

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, new_user: NewUser) -> Result<User> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM users WHERE username = $1 OR email = $2)"#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .fetch_one(&self.pool)
        .await?;
        if exists {
            return Err(Error::Conflict(DUPLICATE_USER.to_string()));
        }

        let password_hash = hash_password(&new_user.password)?;
        let inserted = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password_hash, role, created_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&password_hash)
        .bind(new_user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::from);

        match inserted {
            Ok(user) => {
                tracing::info!(user = %user.username, role = %user.role, "user registered");
                Ok(user)
            }
            // lost a race with a concurrent registration
            Err(e) if e.is_unique_violation() => Err(Error::Conflict(DUPLICATE_USER.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Returns the user only when the password matches.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        match user {
            Some(user) if verify_password(password, &user.password_hash)? => Ok(Some(user)),
            _ => Ok(None),
        }
    }
}
