pub mod order_items;
pub mod payment_orders;
pub mod products;

pub use order_items::Entity as OrderItems;
pub use payment_orders::Entity as PaymentOrders;
pub use products::Entity as Products;
