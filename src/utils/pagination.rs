use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters shared by every paginated listing endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Page number, defaulting to 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, defaulting to 10 and clamped between 1 and 100.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(params: &PaginationParams, total: i64) -> Self {
        let limit = params.limit();
        Self {
            page: params.page(),
            limit,
            total,
            total_pages: (total + limit - 1) / limit.max(1),
        }
    }
}

/// Envelope for paginated collections.
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn offset_follows_page_and_limit() {
        let params = PaginationParams {
            page: Some(3),
            limit: Some(25),
        };
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn clamps_out_of_range_values() {
        let params = PaginationParams {
            page: Some(-5),
            limit: Some(200),
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 100);
    }

    #[test]
    fn total_pages_rounds_up() {
        let params = PaginationParams {
            page: Some(1),
            limit: Some(10),
        };
        assert_eq!(PaginationMeta::new(&params, 0).total_pages, 0);
        assert_eq!(PaginationMeta::new(&params, 10).total_pages, 1);
        assert_eq!(PaginationMeta::new(&params, 11).total_pages, 2);
    }
}
