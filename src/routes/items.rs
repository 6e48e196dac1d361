use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::AppResult, models::Product, services::product_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items))
        .route("/{id}", get(get_item))
}

#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "List all products", body = Vec<Product>),
    ),
    tag = "Items"
)]
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(product_service::list_products(&state).await?))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get a product", body = Product),
        (status = 404, description = "Item not found"),
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Product>> {
    Ok(Json(product_service::get_product(&state, id).await?))
}
