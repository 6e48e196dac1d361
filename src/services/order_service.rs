use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

use crate::{
    dto::orders::{OrderCreated, OrderDeleted, OrderIn, OrderUpdated, UpdateOrderIn},
    entity::{
        order_items::{ActiveModel as OrderItemActive, Column as ItemCol, Entity as OrderItems},
        payment_orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as PaymentOrders},
    },
    error::{AppError, AppResult},
    models::PaymentOrder,
    state::AppState,
};

pub async fn list_orders(state: &AppState) -> AppResult<Vec<PaymentOrder>> {
    let orders = PaymentOrders::find()
        .order_by_asc(OrderCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(PaymentOrder::from)
        .collect();
    Ok(orders)
}

/// Insert the order and its items in one transaction, so a failure while
/// writing items never leaves an empty order behind.
pub async fn create_order(state: &AppState, payload: OrderIn) -> AppResult<OrderCreated> {
    payload.validate()?;

    let txn = state.orm.begin().await?;

    let order = OrderActive {
        id: NotSet,
        user_id: Set(payload.user_id),
        full_name: Set(payload.full_name),
        email: Set(payload.email),
        shipping_address: Set(payload.shipping_address),
        amount_paid: Set(payload.amount_paid),
        shipped: Set(false),
        date_shipped: Set(None),
    }
    .insert(&txn)
    .await?;

    for item in payload.items {
        OrderItemActive {
            id: NotSet,
            order_id: Set(order.id),
            product_id: Set(item.product_id),
            user_id: Set(order.user_id),
            quantity: Set(item.quantity),
            price: Set(item.price),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    tracing::info!(order_id = order.id, "order created");

    Ok(OrderCreated {
        message: "Order created".into(),
        order_id: order.id,
    })
}

pub async fn update_order(
    state: &AppState,
    id: i32,
    payload: UpdateOrderIn,
) -> AppResult<OrderUpdated> {
    payload.validate()?;

    let txn = state.orm.begin().await?;

    let order = PaymentOrders::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("Order not found"))?;

    let mut shipped = order.shipped;
    let mut date_shipped = order.date_shipped;
    if let Some(flag) = payload.shipped {
        shipped = flag;
    }
    if let Some(ts) = payload.date_shipped {
        date_shipped = Some(ts.into());
    }
    // First transition to shipped stamps the time; flipping back never clears it.
    if shipped && date_shipped.is_none() {
        date_shipped = Some(Utc::now().into());
    }

    let mut active: OrderActive = order.into();
    active.shipped = Set(shipped);
    active.date_shipped = Set(date_shipped);
    let order = active.update(&txn).await?;

    if let Some(items) = payload.items {
        for entry in items {
            let existing = OrderItems::find()
                .filter(
                    Condition::all()
                        .add(ItemCol::OrderId.eq(id))
                        .add(ItemCol::ProductId.eq(entry.product_id)),
                )
                .one(&txn)
                .await?;

            // Unknown product on this order: skip, never create a new item.
            let Some(item) = existing else {
                continue;
            };

            let mut active: OrderItemActive = item.into();
            if let Some(quantity) = entry.quantity {
                active.quantity = Set(quantity);
            }
            if let Some(price) = entry.price {
                active.price = Set(price);
            }
            if active.is_changed() {
                active.update(&txn).await?;
            }
        }
    }

    txn.commit().await?;

    Ok(OrderUpdated {
        message: "Order updated".into(),
        order: order.into(),
    })
}

pub async fn delete_order(state: &AppState, id: i32) -> AppResult<OrderDeleted> {
    let order = PaymentOrders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Order not found"))?;

    // Items go with it through the FK cascade.
    order.delete(&state.orm).await?;

    tracing::info!(order_id = id, "order deleted");

    Ok(OrderDeleted {
        message: "Order deleted successfully".into(),
    })
}
