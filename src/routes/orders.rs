use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, post, put},
};

use crate::{
    dto::orders::{OrderCreated, OrderDeleted, OrderIn, OrderUpdated, UpdateOrderIn},
    error::AppResult,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/{id}", put(update_order))
        .route("/{id}", delete(delete_order))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderIn,
    responses(
        (status = 200, description = "Order created", body = OrderCreated),
        (status = 422, description = "Validation failure"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderIn>,
) -> AppResult<Json<OrderCreated>> {
    Ok(Json(order_service::create_order(&state, payload).await?))
}

#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderIn,
    responses(
        (status = 200, description = "Order updated", body = OrderUpdated),
        (status = 404, description = "Order not found"),
        (status = 422, description = "Validation failure"),
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderIn>,
) -> AppResult<Json<OrderUpdated>> {
    Ok(Json(order_service::update_order(&state, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order deleted", body = OrderDeleted),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<OrderDeleted>> {
    Ok(Json(order_service::delete_order(&state, id).await?))
}
