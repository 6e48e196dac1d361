use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod items;
pub mod orders;
pub mod reports;
pub mod sales;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .nest("/items", items::router())
        .nest("/ecom", reports::router())
        .nest("/sales", sales::router())
        .nest("/orders", orders::router())
}

#[derive(Serialize, ToSchema)]
pub struct RootData {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = RootData),
    ),
    tag = "Root"
)]
pub async fn root() -> Json<RootData> {
    Json(RootData {
        message: "Hello World".to_string(),
    })
}
