use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        orders::{OrderCreated, OrderDeleted, OrderIn, OrderItemIn, OrderUpdated, UpdateOrderIn, UpdateOrderItemIn},
        reports::{ProductRevenue, TopProduct},
    },
    models::{PaymentOrder, Product},
    routes::{self, health, items, orders, reports, sales},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        routes::root,
        items::list_items,
        items::get_item,
        reports::total_revenue,
        reports::highest_selling,
        sales::list_sales,
        orders::create_order,
        orders::update_order,
        orders::delete_order
    ),
    components(
        schemas(
            Product,
            PaymentOrder,
            OrderIn,
            OrderItemIn,
            UpdateOrderIn,
            UpdateOrderItemIn,
            OrderCreated,
            OrderUpdated,
            OrderDeleted,
            ProductRevenue,
            TopProduct,
            health::HealthData,
            routes::RootData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Root", description = "Greeting endpoint"),
        (name = "Items", description = "Product listing endpoints"),
        (name = "Reports", description = "Revenue and sales aggregation endpoints"),
        (name = "Sales", description = "Sales transaction listing"),
        (name = "Orders", description = "Order lifecycle endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
