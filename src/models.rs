use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentOrder {
    pub id: i32,
    pub user_id: Option<i32>,
    pub full_name: String,
    pub email: String,
    pub shipping_address: String,
    pub amount_paid: Decimal,
    pub shipped: bool,
    pub date_shipped: Option<DateTime<Utc>>,
}

impl From<entity::products::Model> for Product {
    fn from(model: entity::products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<entity::payment_orders::Model> for PaymentOrder {
    fn from(model: entity::payment_orders::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            full_name: model.full_name,
            email: model.email,
            shipping_address: model.shipping_address,
            amount_paid: model.amount_paid,
            shipped: model.shipped,
            date_shipped: model.date_shipped.map(|dt| dt.with_timezone(&Utc)),
        }
    }
}
