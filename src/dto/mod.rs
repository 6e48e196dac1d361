pub mod orders;
pub mod reports;
