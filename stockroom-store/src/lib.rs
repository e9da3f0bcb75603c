pub mod app_config;
pub mod inventory_repo;

pub use app_config::Config;
pub use inventory_repo::{InventoryRepo, StoreError};
