use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::reports::{ProductRevenue, TopProduct},
    error::AppResult,
    services::report_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/totalrevenue", get(total_revenue))
        .route("/highest_selling", get(highest_selling))
}

#[utoipa::path(
    get,
    path = "/ecom/totalrevenue",
    responses(
        (status = 200, description = "Revenue summed per product", body = Vec<ProductRevenue>),
    ),
    tag = "Reports"
)]
pub async fn total_revenue(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductRevenue>>> {
    Ok(Json(
        report_service::total_revenue_per_product(&state).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/ecom/highest_selling",
    responses(
        (status = 200, description = "Product with the highest total quantity sold", body = TopProduct),
        (status = 404, description = "No sales data available"),
    ),
    tag = "Reports"
)]
pub async fn highest_selling(State(state): State<AppState>) -> AppResult<Json<TopProduct>> {
    Ok(Json(report_service::highest_selling_product(&state).await?))
}
