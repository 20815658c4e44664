use sqlx::PgPool;
use tracing::instrument;

use crate::modules::enums::UserRole;
use crate::modules::staff::model::{CreateStaffDto, Staff, UpdateStaffDto};
use crate::utils::errors::AppError;

const STAFF_COLUMNS: &str = "id, first_name, last_name, email, phone, address, gender, role, \
     birth_date, hire_date, position, department, salary, user_id";

pub struct StaffService;

impl StaffService {
    #[instrument(skip(db, dto))]
    pub async fn create_staff(db: &PgPool, dto: CreateStaffDto) -> Result<Staff, AppError> {
        sqlx::query_as::<_, Staff>(&format!(
            "INSERT INTO staff (first_name, last_name, email, phone, address, gender, role, \
             birth_date, hire_date, position, department, salary) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {STAFF_COLUMNS}"
        ))
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.address)
        .bind(dto.gender)
        .bind(dto.role)
        .bind(dto.birth_date)
        .bind(dto.hire_date)
        .bind(&dto.position)
        .bind(&dto.department)
        .bind(dto.salary)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "A staff member with this email already exists"))
    }

    #[instrument(skip(db))]
    pub async fn get_staff(db: &PgPool, id: i64) -> Result<Staff, AppError> {
        sqlx::query_as::<_, Staff>(&format!("SELECT {STAFF_COLUMNS} FROM staff WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Staff member not found")))
    }

    #[instrument(skip(db))]
    pub async fn get_staff_by_email(db: &PgPool, email: &str) -> Result<Staff, AppError> {
        sqlx::query_as::<_, Staff>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staff WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No staff member with this email")))
    }

    #[instrument(skip(db))]
    pub async fn list_staff(db: &PgPool) -> Result<Vec<Staff>, AppError> {
        sqlx::query_as::<_, Staff>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staff ORDER BY last_name, first_name"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn list_staff_paginated(
        db: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Staff>, i64), AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staff")
            .fetch_one(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        let staff = sqlx::query_as::<_, Staff>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staff ORDER BY last_name, first_name \
             LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok((staff, total))
    }

    #[instrument(skip(db))]
    pub async fn get_staff_by_department(
        db: &PgPool,
        department: &str,
    ) -> Result<Vec<Staff>, AppError> {
        sqlx::query_as::<_, Staff>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staff WHERE department = $1 \
             ORDER BY last_name, first_name"
        ))
        .bind(department)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_staff_by_position(db: &PgPool, position: &str) -> Result<Vec<Staff>, AppError> {
        sqlx::query_as::<_, Staff>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staff WHERE position = $1 \
             ORDER BY last_name, first_name"
        ))
        .bind(position)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_staff_by_role(db: &PgPool, role: UserRole) -> Result<Vec<Staff>, AppError> {
        sqlx::query_as::<_, Staff>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staff WHERE role = $1 ORDER BY last_name, first_name"
        ))
        .bind(role)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn search_staff(db: &PgPool, query: &str) -> Result<Vec<Staff>, AppError> {
        let pattern = format!("%{}%", query);
        sqlx::query_as::<_, Staff>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staff \
             WHERE first_name ILIKE $1 OR last_name ILIKE $1 ORDER BY last_name, first_name"
        ))
        .bind(pattern)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_staff(db: &PgPool, id: i64, dto: UpdateStaffDto) -> Result<Staff, AppError> {
        let existing = Self::get_staff(db, id).await?;

        sqlx::query_as::<_, Staff>(&format!(
            "UPDATE staff SET first_name = $1, last_name = $2, email = $3, phone = $4, \
             address = $5, gender = $6, role = $7, birth_date = $8, hire_date = $9, \
             position = $10, department = $11, salary = $12 WHERE id = $13 \
             RETURNING {STAFF_COLUMNS}"
        ))
        .bind(dto.first_name.unwrap_or(existing.first_name))
        .bind(dto.last_name.unwrap_or(existing.last_name))
        .bind(dto.email.or(existing.email))
        .bind(dto.phone.or(existing.phone))
        .bind(dto.address.or(existing.address))
        .bind(dto.gender.or(existing.gender))
        .bind(dto.role.or(existing.role))
        .bind(dto.birth_date.or(existing.birth_date))
        .bind(dto.hire_date.or(existing.hire_date))
        .bind(dto.position.or(existing.position))
        .bind(dto.department.or(existing.department))
        .bind(dto.salary.or(existing.salary))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "A staff member with this email already exists"))
    }

    #[instrument(skip(db))]
    pub async fn delete_staff(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Staff member not found")));
        }
        Ok(())
    }
}
