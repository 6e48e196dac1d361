use axum_sales_api::routes::{health::health_check, root};

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.status, "ok");
}

#[tokio::test]
async fn root_greets() {
    let response = root().await;
    assert_eq!(response.0.message, "Hello World");
}
