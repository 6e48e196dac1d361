use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::PaymentOrder;

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemIn {
    pub product_id: i32,
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderIn {
    pub user_id: Option<i32>,
    pub full_name: String,
    pub email: String,
    pub shipping_address: String,
    pub amount_paid: Decimal,
    #[serde(default)]
    pub items: Vec<OrderItemIn>,
}

impl OrderIn {
    pub fn validate(&self) -> AppResult<()> {
        require_non_empty("full_name", &self.full_name)?;
        require_non_empty("email", &self.email)?;
        require_non_empty("shipping_address", &self.shipping_address)?;
        if self.amount_paid < Decimal::ZERO {
            return Err(AppError::Validation(
                "amount_paid must not be negative".into(),
            ));
        }
        for item in &self.items {
            if item.quantity < 0 {
                return Err(AppError::Validation(format!(
                    "item {}: quantity must not be negative",
                    item.product_id
                )));
            }
            if item.price < Decimal::ZERO {
                return Err(AppError::Validation(format!(
                    "item {}: price must not be negative",
                    item.product_id
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderItemIn {
    pub product_id: i32,
    pub quantity: Option<i32>,
    pub price: Option<Decimal>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderIn {
    pub shipped: Option<bool>,
    pub date_shipped: Option<DateTime<Utc>>,
    pub items: Option<Vec<UpdateOrderItemIn>>,
}

impl UpdateOrderIn {
    pub fn validate(&self) -> AppResult<()> {
        for item in self.items.iter().flatten() {
            if item.quantity.is_some_and(|q| q < 0) {
                return Err(AppError::Validation(format!(
                    "item {}: quantity must not be negative",
                    item.product_id
                )));
            }
            if item.price.is_some_and(|p| p < Decimal::ZERO) {
                return Err(AppError::Validation(format!(
                    "item {}: price must not be negative",
                    item.product_id
                )));
            }
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderCreated {
    pub message: String,
    pub order_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderUpdated {
    pub message: String,
    pub order: PaymentOrder,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDeleted {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_order() -> OrderIn {
        OrderIn {
            user_id: Some(7),
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            shipping_address: "1 Main St".into(),
            amount_paid: Decimal::new(2500, 2),
            items: vec![OrderItemIn {
                product_id: 1,
                quantity: 2,
                price: Decimal::new(1250, 2),
            }],
        }
    }

    #[test]
    fn accepts_valid_order() {
        assert!(valid_order().validate().is_ok());
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut order = valid_order();
        order.full_name = "   ".into();
        let err = order.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("full_name")));
    }

    #[test]
    fn rejects_negative_amount_paid() {
        let mut order = valid_order();
        order.amount_paid = Decimal::new(-1, 0);
        assert!(matches!(
            order.validate(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_negative_item_quantity() {
        let mut order = valid_order();
        order.items[0].quantity = -3;
        assert!(matches!(
            order.validate(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn update_allows_missing_fields() {
        let update = UpdateOrderIn {
            shipped: None,
            date_shipped: None,
            items: None,
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn update_rejects_negative_price() {
        let update = UpdateOrderIn {
            shipped: None,
            date_shipped: None,
            items: Some(vec![UpdateOrderItemIn {
                product_id: 1,
                quantity: None,
                price: Some(Decimal::new(-100, 2)),
            }]),
        };
        assert!(matches!(
            update.validate(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn items_default_to_empty_on_deserialize() {
        let order: OrderIn = serde_json::from_value(serde_json::json!({
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "shipping_address": "1 Main St",
            "amount_paid": 10.0
        }))
        .unwrap();
        assert!(order.items.is_empty());
        assert_eq!(order.user_id, None);
    }
}
