use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::purchases::model::{
    CreatePurchaseDto, Purchase, SpendSummaryRow, UpdatePurchaseDto,
};
use crate::utils::errors::AppError;

const PURCHASE_COLUMNS: &str = "id, item_name, description, quantity, unit_price, total_amount, \
     purchase_date, supplier, category, invoice_number";

pub struct PurchaseService;

impl PurchaseService {
    #[instrument(skip(db, dto))]
    pub async fn create_purchase(db: &PgPool, dto: CreatePurchaseDto) -> Result<Purchase, AppError> {
        Self::check_business_rules(dto.quantity, dto.unit_price, dto.purchase_date)?;
        let total_amount = dto.unit_price * Decimal::from(dto.quantity);

        sqlx::query_as::<_, Purchase>(&format!(
            "INSERT INTO purchases (item_name, description, quantity, unit_price, total_amount, \
             purchase_date, supplier, category, invoice_number) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {PURCHASE_COLUMNS}"
        ))
        .bind(&dto.item_name)
        .bind(&dto.description)
        .bind(dto.quantity)
        .bind(dto.unit_price)
        .bind(total_amount)
        .bind(dto.purchase_date)
        .bind(&dto.supplier)
        .bind(&dto.category)
        .bind(&dto.invoice_number)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "A purchase with this invoice number already exists"))
    }

    #[instrument(skip(db))]
    pub async fn get_purchase(db: &PgPool, id: i64) -> Result<Purchase, AppError> {
        sqlx::query_as::<_, Purchase>(&format!(
            "SELECT {PURCHASE_COLUMNS} FROM purchases WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Purchase not found")))
    }

    #[instrument(skip(db))]
    pub async fn get_purchase_by_invoice(
        db: &PgPool,
        invoice_number: &str,
    ) -> Result<Purchase, AppError> {
        sqlx::query_as::<_, Purchase>(&format!(
            "SELECT {PURCHASE_COLUMNS} FROM purchases WHERE invoice_number = $1"
        ))
        .bind(invoice_number)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No purchase with this invoice number")))
    }

    #[instrument(skip(db))]
    pub async fn list_purchases(db: &PgPool) -> Result<Vec<Purchase>, AppError> {
        sqlx::query_as::<_, Purchase>(&format!(
            "SELECT {PURCHASE_COLUMNS} FROM purchases ORDER BY purchase_date DESC, id DESC"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_purchases_by_date_range(
        db: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Purchase>, AppError> {
        Self::check_date_range(start, end)?;

        sqlx::query_as::<_, Purchase>(&format!(
            "SELECT {PURCHASE_COLUMNS} FROM purchases \
             WHERE purchase_date BETWEEN $1 AND $2 ORDER BY purchase_date DESC, id DESC"
        ))
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_purchases_by_date_range_paginated(
        db: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Purchase>, i64), AppError> {
        Self::check_date_range(start, end)?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM purchases WHERE purchase_date BETWEEN $1 AND $2",
        )
        .bind(start)
        .bind(end)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        let purchases = sqlx::query_as::<_, Purchase>(&format!(
            "SELECT {PURCHASE_COLUMNS} FROM purchases WHERE purchase_date BETWEEN $1 AND $2 \
             ORDER BY purchase_date DESC, id DESC LIMIT $3 OFFSET $4"
        ))
        .bind(start)
        .bind(end)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok((purchases, total))
    }

    #[instrument(skip(db))]
    pub async fn get_purchases_by_supplier(
        db: &PgPool,
        supplier: &str,
    ) -> Result<Vec<Purchase>, AppError> {
        let pattern = format!("%{}%", supplier);
        sqlx::query_as::<_, Purchase>(&format!(
            "SELECT {PURCHASE_COLUMNS} FROM purchases WHERE supplier ILIKE $1 \
             ORDER BY purchase_date DESC, id DESC"
        ))
        .bind(pattern)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_purchases_by_category(
        db: &PgPool,
        category: &str,
    ) -> Result<Vec<Purchase>, AppError> {
        sqlx::query_as::<_, Purchase>(&format!(
            "SELECT {PURCHASE_COLUMNS} FROM purchases WHERE category = $1 \
             ORDER BY purchase_date DESC, id DESC"
        ))
        .bind(category)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_purchases_by_supplier_and_date_range(
        db: &PgPool,
        supplier: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Purchase>, AppError> {
        Self::check_date_range(start, end)?;

        let pattern = format!("%{}%", supplier);
        sqlx::query_as::<_, Purchase>(&format!(
            "SELECT {PURCHASE_COLUMNS} FROM purchases \
             WHERE supplier ILIKE $1 AND purchase_date BETWEEN $2 AND $3 \
             ORDER BY purchase_date DESC, id DESC"
        ))
        .bind(pattern)
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_purchases_by_category_and_date_range(
        db: &PgPool,
        category: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Purchase>, AppError> {
        Self::check_date_range(start, end)?;

        sqlx::query_as::<_, Purchase>(&format!(
            "SELECT {PURCHASE_COLUMNS} FROM purchases \
             WHERE category = $1 AND purchase_date BETWEEN $2 AND $3 \
             ORDER BY purchase_date DESC, id DESC"
        ))
        .bind(category)
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_total_by_date_range(
        db: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal, AppError> {
        Self::check_date_range(start, end)?;

        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(total_amount), 0) FROM purchases \
             WHERE purchase_date BETWEEN $1 AND $2",
        )
        .bind(start)
        .bind(end)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_total_by_supplier(db: &PgPool, supplier: &str) -> Result<Decimal, AppError> {
        let pattern = format!("%{}%", supplier);
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(total_amount), 0) FROM purchases WHERE supplier ILIKE $1",
        )
        .bind(pattern)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_total_by_category(db: &PgPool, category: &str) -> Result<Decimal, AppError> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(total_amount), 0) FROM purchases WHERE category = $1",
        )
        .bind(category)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_summary_by_category(
        db: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<SpendSummaryRow>, AppError> {
        Self::check_date_range(start, end)?;

        sqlx::query_as::<_, SpendSummaryRow>(
            "SELECT category AS \"group\", COALESCE(SUM(total_amount), 0) AS total \
             FROM purchases WHERE purchase_date BETWEEN $1 AND $2 \
             GROUP BY category ORDER BY total DESC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_summary_by_supplier(
        db: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<SpendSummaryRow>, AppError> {
        Self::check_date_range(start, end)?;

        sqlx::query_as::<_, SpendSummaryRow>(
            "SELECT supplier AS \"group\", COALESCE(SUM(total_amount), 0) AS total \
             FROM purchases WHERE purchase_date BETWEEN $1 AND $2 \
             GROUP BY supplier ORDER BY total DESC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    /// Partial update. The stored total is recomputed from the effective
    /// quantity and unit price so the two can never drift apart.
    #[instrument(skip(db, dto))]
    pub async fn update_purchase(
        db: &PgPool,
        id: i64,
        dto: UpdatePurchaseDto,
    ) -> Result<Purchase, AppError> {
        let existing = Self::get_purchase(db, id).await?;

        let quantity = dto.quantity.unwrap_or(existing.quantity);
        let unit_price = dto.unit_price.unwrap_or(existing.unit_price);
        let purchase_date = dto.purchase_date.unwrap_or(existing.purchase_date);
        Self::check_business_rules(quantity, unit_price, purchase_date)?;
        let total_amount = unit_price * Decimal::from(quantity);

        sqlx::query_as::<_, Purchase>(&format!(
            "UPDATE purchases SET item_name = $1, description = $2, quantity = $3, \
             unit_price = $4, total_amount = $5, purchase_date = $6, supplier = $7, \
             category = $8, invoice_number = $9 WHERE id = $10 RETURNING {PURCHASE_COLUMNS}"
        ))
        .bind(dto.item_name.unwrap_or(existing.item_name))
        .bind(dto.description.or(existing.description))
        .bind(quantity)
        .bind(unit_price)
        .bind(total_amount)
        .bind(purchase_date)
        .bind(dto.supplier.or(existing.supplier))
        .bind(dto.category.or(existing.category))
        .bind(dto.invoice_number.or(existing.invoice_number))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "A purchase with this invoice number already exists"))
    }

    #[instrument(skip(db))]
    pub async fn delete_purchase(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM purchases WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Purchase not found")));
        }
        Ok(())
    }

    fn check_business_rules(
        quantity: i32,
        unit_price: Decimal,
        purchase_date: NaiveDate,
    ) -> Result<(), AppError> {
        if quantity <= 0 {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Quantity must be greater than zero"
            )));
        }
        if unit_price <= Decimal::ZERO {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Unit price must be greater than zero"
            )));
        }
        if purchase_date > Utc::now().date_naive() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Purchase date cannot be in the future"
            )));
        }
        Ok(())
    }

    fn check_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
        if start > end {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Start date must not be after end date"
            )));
        }
        Ok(())
    }
}
