use sqlx::PgPool;
use tracing::instrument;

use crate::modules::equipment::model::{CreateEquipmentDto, Equipment, UpdateEquipmentDto};
use crate::utils::errors::AppError;

const EQUIPMENT_COLUMNS: &str = "id, name, description, serial_number, category, brand, model, \
     purchase_price, purchase_date, warranty_expiry_date, maintenance_date, status, location, \
     assigned_to";

pub struct EquipmentService;

impl EquipmentService {
    #[instrument(skip(db, dto))]
    pub async fn create_equipment(
        db: &PgPool,
        dto: CreateEquipmentDto,
    ) -> Result<Equipment, AppError> {
        sqlx::query_as::<_, Equipment>(&format!(
            "INSERT INTO equipment (name, description, serial_number, category, brand, model, \
             purchase_price, purchase_date, warranty_expiry_date, maintenance_date, status, \
             location, assigned_to) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, \
             $13) RETURNING {EQUIPMENT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(&dto.serial_number)
        .bind(&dto.category)
        .bind(&dto.brand)
        .bind(&dto.model)
        .bind(dto.purchase_price)
        .bind(dto.purchase_date)
        .bind(dto.warranty_expiry_date)
        .bind(dto.maintenance_date)
        .bind(&dto.status)
        .bind(&dto.location)
        .bind(&dto.assigned_to)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Equipment with this serial number already exists"))
    }

    #[instrument(skip(db))]
    pub async fn get_equipment(db: &PgPool, id: i64) -> Result<Equipment, AppError> {
        sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {EQUIPMENT_COLUMNS} FROM equipment WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Equipment not found")))
    }

    #[instrument(skip(db))]
    pub async fn get_equipment_by_serial(
        db: &PgPool,
        serial_number: &str,
    ) -> Result<Equipment, AppError> {
        sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {EQUIPMENT_COLUMNS} FROM equipment WHERE serial_number = $1"
        ))
        .bind(serial_number)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No equipment with this serial number")))
    }

    #[instrument(skip(db))]
    pub async fn list_equipment(db: &PgPool) -> Result<Vec<Equipment>, AppError> {
        sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {EQUIPMENT_COLUMNS} FROM equipment ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_equipment_by_category(
        db: &PgPool,
        category: &str,
    ) -> Result<Vec<Equipment>, AppError> {
        Self::list_by_text_column(db, "category", category).await
    }

    #[instrument(skip(db))]
    pub async fn get_equipment_by_location(
        db: &PgPool,
        location: &str,
    ) -> Result<Vec<Equipment>, AppError> {
        Self::list_by_text_column(db, "location", location).await
    }

    #[instrument(skip(db))]
    pub async fn get_equipment_by_status(
        db: &PgPool,
        status: &str,
    ) -> Result<Vec<Equipment>, AppError> {
        Self::list_by_text_column(db, "status", status).await
    }

    #[instrument(skip(db))]
    pub async fn get_equipment_by_assignee(
        db: &PgPool,
        assigned_to: &str,
    ) -> Result<Vec<Equipment>, AppError> {
        Self::list_by_text_column(db, "assigned_to", assigned_to).await
    }

    /// Equipment whose maintenance date has already passed (strictly before
    /// today; items due today are not yet overdue).
    #[instrument(skip(db))]
    pub async fn get_maintenance_due(db: &PgPool) -> Result<Vec<Equipment>, AppError> {
        sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {EQUIPMENT_COLUMNS} FROM equipment \
             WHERE maintenance_date < CURRENT_DATE ORDER BY maintenance_date"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    /// Equipment still under warranty (expiry strictly after today).
    #[instrument(skip(db))]
    pub async fn get_under_warranty(db: &PgPool) -> Result<Vec<Equipment>, AppError> {
        sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {EQUIPMENT_COLUMNS} FROM equipment \
             WHERE warranty_expiry_date > CURRENT_DATE ORDER BY warranty_expiry_date"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_equipment(
        db: &PgPool,
        id: i64,
        dto: UpdateEquipmentDto,
    ) -> Result<Equipment, AppError> {
        let existing = Self::get_equipment(db, id).await?;

        sqlx::query_as::<_, Equipment>(&format!(
            "UPDATE equipment SET name = $1, description = $2, serial_number = $3, category = $4, \
             brand = $5, model = $6, purchase_price = $7, purchase_date = $8, \
             warranty_expiry_date = $9, maintenance_date = $10, status = $11, location = $12, \
             assigned_to = $13 WHERE id = $14 RETURNING {EQUIPMENT_COLUMNS}"
        ))
        .bind(dto.name.unwrap_or(existing.name))
        .bind(dto.description.or(existing.description))
        .bind(dto.serial_number.unwrap_or(existing.serial_number))
        .bind(dto.category.or(existing.category))
        .bind(dto.brand.or(existing.brand))
        .bind(dto.model.or(existing.model))
        .bind(dto.purchase_price.or(existing.purchase_price))
        .bind(dto.purchase_date.or(existing.purchase_date))
        .bind(dto.warranty_expiry_date.or(existing.warranty_expiry_date))
        .bind(dto.maintenance_date.or(existing.maintenance_date))
        .bind(dto.status.unwrap_or(existing.status))
        .bind(dto.location.or(existing.location))
        .bind(dto.assigned_to.or(existing.assigned_to))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Equipment with this serial number already exists"))
    }

    #[instrument(skip(db))]
    pub async fn delete_equipment(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Equipment not found")));
        }
        Ok(())
    }

    async fn list_by_text_column(
        db: &PgPool,
        column: &str,
        value: &str,
    ) -> Result<Vec<Equipment>, AppError> {
        // `column` is one of four hard-coded identifiers, never user input.
        sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {EQUIPMENT_COLUMNS} FROM equipment WHERE {column} = $1 ORDER BY name"
        ))
        .bind(value)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }
}
