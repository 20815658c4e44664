use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A supply purchase. `total_amount` is always derived from quantity and
/// unit price server-side; clients cannot set it.
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: i64,
    pub item_name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
    pub purchase_date: NaiveDate,
    pub supplier: Option<String>,
    pub category: Option<String>,
    pub invoice_number: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseDto {
    #[validate(length(min = 1, max = 255))]
    pub item_name: String,
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub unit_price: Decimal,
    pub purchase_date: NaiveDate,
    #[validate(length(max = 255))]
    pub supplier: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 100))]
    pub invoice_number: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePurchaseDto {
    #[validate(length(min = 1, max = 255))]
    pub item_name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
    pub unit_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    #[validate(length(max = 255))]
    pub supplier: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 100))]
    pub invoice_number: Option<String>,
}

/// Inclusive date range; the service rejects start > end.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseTotal {
    pub total: Decimal,
}

/// One row of a grouped spend summary, keyed by category or supplier.
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpendSummaryRow {
    pub group: Option<String>,
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_rejects_zero_quantity() {
        let dto: CreatePurchaseDto = serde_json::from_value(serde_json::json!({
            "itemName": "Chalk",
            "quantity": 0,
            "unitPrice": "2.50",
            "purchaseDate": "2025-01-10"
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn total_amount_is_not_deserialized_from_input() {
        // A client-supplied totalAmount is silently ignored by the DTO.
        let value = serde_json::json!({
            "itemName": "Chalk",
            "quantity": 3,
            "unitPrice": "2.50",
            "purchaseDate": "2025-01-10",
            "totalAmount": "999.99"
        });
        let dto: CreatePurchaseDto = serde_json::from_value(value).unwrap();
        assert!(dto.validate().is_ok());
    }
}
