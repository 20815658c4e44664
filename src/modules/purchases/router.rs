use axum::{Router, routing::get, routing::post};

use crate::modules::purchases::controller::{
    create_purchase, delete_purchase, get_purchase, get_purchase_by_invoice, get_purchases,
    get_purchases_by_category, get_purchases_by_category_and_date_range,
    get_purchases_by_date_range, get_purchases_by_date_range_paginated,
    get_purchases_by_supplier, get_purchases_by_supplier_and_date_range, get_summary_by_category,
    get_summary_by_supplier, get_total_by_category, get_total_by_date_range,
    get_total_by_supplier, update_purchase,
};
use crate::state::AppState;

pub fn init_purchases_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_purchase).get(get_purchases))
        .route("/date-range", get(get_purchases_by_date_range))
        .route(
            "/date-range/paginated",
            get(get_purchases_by_date_range_paginated),
        )
        .route("/invoice/{invoice_number}", get(get_purchase_by_invoice))
        .route("/supplier/{supplier}", get(get_purchases_by_supplier))
        .route(
            "/supplier/{supplier}/date-range",
            get(get_purchases_by_supplier_and_date_range),
        )
        .route("/category/{category}", get(get_purchases_by_category))
        .route(
            "/category/{category}/date-range",
            get(get_purchases_by_category_and_date_range),
        )
        .route("/total", get(get_total_by_date_range))
        .route("/total/supplier/{supplier}", get(get_total_by_supplier))
        .route("/total/category/{category}", get(get_total_by_category))
        .route("/summary/category", get(get_summary_by_category))
        .route("/summary/supplier", get(get_summary_by_supplier))
        .route(
            "/{id}",
            get(get_purchase).put(update_purchase).delete(delete_purchase),
        )
}
