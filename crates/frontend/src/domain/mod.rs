pub mod a001_sourced_product;
pub mod a002_order;
pub mod a003_tracking;
pub mod a004_supplier;
pub mod a005_user_account;
