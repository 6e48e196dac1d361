use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult, models::PaymentOrder, services::order_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_sales))
}

#[utoipa::path(
    get,
    path = "/sales",
    responses(
        (status = 200, description = "List all payment orders", body = Vec<PaymentOrder>),
    ),
    tag = "Sales"
)]
pub async fn list_sales(State(state): State<AppState>) -> AppResult<Json<Vec<PaymentOrder>>> {
    Ok(Json(order_service::list_orders(&state).await?))
}
