use serde::Serialize;
use utoipa::ToSchema;

/// Grouped revenue for one product, summed over its order items.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductRevenue {
    pub product_id: i32,
    pub product_name: String,
    pub total_revenue: f64,
}

/// The product with the highest summed quantity across all order items.
#[derive(Debug, Serialize, ToSchema)]
pub struct TopProduct {
    pub product_id: i32,
    pub product_name: String,
    pub total_quantity: i64,
    pub total_revenue: f64,
}
