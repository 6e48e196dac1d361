use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sea_orm::{EntityTrait, FromQueryResult, JoinType, QuerySelect, RelationTrait};

use crate::{
    dto::reports::{ProductRevenue, TopProduct},
    entity::{
        order_items::{self, Column as ItemCol},
        products::Column as ProdCol,
    },
    error::{AppError, AppResult},
    state::AppState,
};

#[derive(Debug, FromQueryResult)]
struct SoldItemRow {
    product_id: i32,
    product_name: String,
    quantity: i32,
    price: Decimal,
}

#[derive(Debug, Default)]
struct ProductTotals {
    name: String,
    revenue: Decimal,
    quantity: i64,
}

// Inner join, so products with no order items never appear in report output.
async fn sold_items(state: &AppState) -> AppResult<Vec<SoldItemRow>> {
    let rows = order_items::Entity::find()
        .select_only()
        .column_as(ItemCol::ProductId, "product_id")
        .column_as(ProdCol::Name, "product_name")
        .column_as(ItemCol::Quantity, "quantity")
        .column_as(ItemCol::Price, "price")
        .join(JoinType::InnerJoin, order_items::Relation::Products.def())
        .into_model::<SoldItemRow>()
        .all(&state.orm)
        .await?;
    Ok(rows)
}

fn totals_by_product(rows: Vec<SoldItemRow>) -> BTreeMap<i32, ProductTotals> {
    let mut totals: BTreeMap<i32, ProductTotals> = BTreeMap::new();
    for row in rows {
        let entry = totals.entry(row.product_id).or_default();
        entry.name = row.product_name;
        entry.revenue += row.price * Decimal::from(row.quantity);
        entry.quantity += i64::from(row.quantity);
    }
    totals
}

pub async fn total_revenue_per_product(state: &AppState) -> AppResult<Vec<ProductRevenue>> {
    let rows = sold_items(state).await?;

    Ok(totals_by_product(rows)
        .into_iter()
        .map(|(product_id, totals)| ProductRevenue {
            product_id,
            product_name: totals.name,
            total_revenue: totals.revenue.to_f64().unwrap_or(0.0),
        })
        .collect())
}

// Strictly-greater comparison over ascending product ids keeps the winner
// deterministic when totals tie: the lowest product id wins.
fn pick_top(totals: BTreeMap<i32, ProductTotals>) -> Option<(i32, ProductTotals)> {
    totals.into_iter().reduce(|best, candidate| {
        if candidate.1.quantity > best.1.quantity {
            candidate
        } else {
            best
        }
    })
}

pub async fn highest_selling_product(state: &AppState) -> AppResult<TopProduct> {
    let rows = sold_items(state).await?;

    let (product_id, totals) = pick_top(totals_by_product(rows))
        .ok_or(AppError::NotFound("No sales data available"))?;
    Ok(TopProduct {
        product_id,
        product_name: totals.name,
        total_quantity: totals.quantity,
        total_revenue: totals.revenue.to_f64().unwrap_or(0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(product_id: i32, name: &str, quantity: i32, price: i64) -> SoldItemRow {
        SoldItemRow {
            product_id,
            product_name: name.into(),
            quantity,
            price: Decimal::from(price),
        }
    }

    #[test]
    fn sums_revenue_per_product() {
        let totals = totals_by_product(vec![
            row(1, "Widget", 2, 10),
            row(1, "Widget", 1, 5),
            row(2, "Gadget", 10, 1),
        ]);
        assert_eq!(totals[&1].revenue, Decimal::from(25));
        assert_eq!(totals[&1].quantity, 3);
        assert_eq!(totals[&2].revenue, Decimal::from(10));
        assert_eq!(totals[&2].quantity, 10);
    }

    #[test]
    fn ties_resolve_to_lowest_product_id() {
        let totals = totals_by_product(vec![
            row(7, "Late", 5, 1),
            row(3, "Early", 5, 2),
        ]);
        let top = pick_top(totals).unwrap();
        assert_eq!(top.0, 3);
    }

    #[test]
    fn empty_rows_produce_no_top_seller() {
        assert!(pick_top(totals_by_product(Vec::new())).is_none());
    }
}
