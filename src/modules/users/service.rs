use sqlx::{FromRow, PgPool};
use tracing::instrument;

use crate::modules::enums::UserRole;
use crate::modules::users::model::{
    ChangePasswordDto, CreateUserDto, LoginDto, LoginResponse, UpdateUserDto, User,
};
use crate::utils::errors::AppError;
use crate::utils::password::{hash_password, verify_password};

const USER_COLUMNS: &str = "id, username, role, active, first_name, last_name, email, phone, \
     last_login, created_at";

/// Internal row carrying the hash; never serialized.
#[derive(FromRow)]
struct Credentials {
    id: i64,
    password: String,
    active: bool,
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        let username_taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(&dto.username)
                .fetch_one(db)
                .await
                .map_err(|e| AppError::database(anyhow::Error::from(e)))?;
        if username_taken {
            return Err(AppError::conflict(anyhow::anyhow!(
                "A user with this username already exists"
            )));
        }

        let email_taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(&dto.email)
                .fetch_one(db)
                .await
                .map_err(|e| AppError::database(anyhow::Error::from(e)))?;
        if email_taken {
            return Err(AppError::conflict(anyhow::anyhow!(
                "A user with this email already exists"
            )));
        }

        let hashed = hash_password(&dto.password)?;

        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, password, role, first_name, last_name, email, phone) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.username)
        .bind(&hashed)
        .bind(dto.role)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "A user with this username or email already exists"))
    }

    /// Checks the credentials and, on success, stamps `last_login`. Wrong
    /// password and unknown user both come back as an unsuccessful response
    /// rather than an error.
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn authenticate(db: &PgPool, dto: LoginDto) -> Result<LoginResponse, AppError> {
        let credentials = sqlx::query_as::<_, Credentials>(
            "SELECT id, password, active FROM users WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        let Some(credentials) = credentials else {
            return Ok(LoginResponse {
                success: false,
                user: None,
                message: Some("User not found".to_string()),
            });
        };

        if !credentials.active {
            return Ok(LoginResponse {
                success: false,
                user: None,
                message: Some("Account is deactivated".to_string()),
            });
        }

        if !verify_password(&dto.password, &credentials.password)? {
            return Ok(LoginResponse {
                success: false,
                user: None,
                message: Some("Invalid password".to_string()),
            });
        }

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET last_login = NOW() WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(credentials.id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(LoginResponse {
            success: true,
            user: Some(user),
            message: None,
        })
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: i64) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))
    }

    #[instrument(skip(db))]
    pub async fn list_users_paginated(
        db: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<User>, i64), AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY username LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok((users, total))
    }

    #[instrument(skip(db))]
    pub async fn get_users_by_role(db: &PgPool, role: UserRole) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = $1 ORDER BY username"
        ))
        .bind(role)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_active_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE active = TRUE ORDER BY username"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_user(db: &PgPool, id: i64, dto: UpdateUserDto) -> Result<User, AppError> {
        let existing = Self::get_user(db, id).await?;

        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET username = $1, role = $2, first_name = $3, last_name = $4, \
             email = $5, phone = $6 WHERE id = $7 RETURNING {USER_COLUMNS}"
        ))
        .bind(dto.username.unwrap_or(existing.username))
        .bind(dto.role.unwrap_or(existing.role))
        .bind(dto.first_name.unwrap_or(existing.first_name))
        .bind(dto.last_name.unwrap_or(existing.last_name))
        .bind(dto.email.unwrap_or(existing.email))
        .bind(dto.phone.or(existing.phone))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "A user with this username or email already exists"))
    }

    /// With `old_password` this is a self-service change and the old hash
    /// must verify; without it, an administrative reset.
    #[instrument(skip(db, dto))]
    pub async fn change_password(
        db: &PgPool,
        id: i64,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        let current: String = sqlx::query_scalar("SELECT password FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        if let Some(old_password) = &dto.old_password {
            if !verify_password(old_password, &current)? {
                return Err(AppError::bad_request(anyhow::anyhow!(
                    "Old password does not match"
                )));
            }
        }

        let hashed = hash_password(&dto.new_password)?;
        sqlx::query("UPDATE users SET password = $1 WHERE id = $2")
            .bind(&hashed)
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn set_active(db: &PgPool, id: i64, active: bool) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET active = $1 WHERE id = $2 RETURNING {USER_COLUMNS}"
        ))
        .bind(active)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }
        Ok(())
    }
}
