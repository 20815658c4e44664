use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::payments::model::{CreatePaymentDto, Payment};
use crate::utils::errors::AppError;

const PAYMENT_COLUMNS: &str = "id, student_id, amount, payment_date, payment_mode, \
     payment_type, academic_year, description, receipt_number";

pub struct PaymentService;

impl PaymentService {
    #[instrument(skip(db, dto))]
    pub async fn create_payment(db: &PgPool, dto: CreatePaymentDto) -> Result<Payment, AppError> {
        Self::ensure_student_exists(db, dto.student_id).await?;

        sqlx::query_as::<_, Payment>(&format!(
            "INSERT INTO payments (student_id, amount, payment_date, payment_mode, payment_type, \
             academic_year, description, receipt_number) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {PAYMENT_COLUMNS}"
        ))
        .bind(dto.student_id)
        .bind(dto.amount)
        .bind(dto.payment_date)
        .bind(dto.payment_mode)
        .bind(&dto.payment_type)
        .bind(&dto.academic_year)
        .bind(&dto.description)
        .bind(&dto.receipt_number)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn list_payments(db: &PgPool) -> Result<Vec<Payment>, AppError> {
        sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments ORDER BY payment_date DESC, id DESC"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_payments_by_student(
        db: &PgPool,
        student_id: i64,
    ) -> Result<Vec<Payment>, AppError> {
        sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE student_id = $1 \
             ORDER BY payment_date DESC, id DESC"
        ))
        .bind(student_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    /// Sum of a student's payments, optionally scoped to an academic year.
    /// A student with no payments totals zero.
    #[instrument(skip(db))]
    pub async fn get_total_paid(
        db: &PgPool,
        student_id: i64,
        academic_year: Option<&str>,
    ) -> Result<Decimal, AppError> {
        Self::ensure_student_exists(db, student_id).await?;

        let total = match academic_year {
            Some(year) => {
                sqlx::query_scalar::<_, Decimal>(
                    "SELECT COALESCE(SUM(amount), 0) FROM payments \
                     WHERE student_id = $1 AND academic_year = $2",
                )
                .bind(student_id)
                .bind(year)
                .fetch_one(db)
                .await
            }
            None => {
                sqlx::query_scalar::<_, Decimal>(
                    "SELECT COALESCE(SUM(amount), 0) FROM payments WHERE student_id = $1",
                )
                .bind(student_id)
                .fetch_one(db)
                .await
            }
        };

        total.map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    async fn ensure_student_exists(db: &PgPool, student_id: i64) -> Result<(), AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)")
                .bind(student_id)
                .fetch_one(db)
                .await
                .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if !exists {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }
        Ok(())
    }
}
