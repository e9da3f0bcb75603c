pub mod inventory;
pub mod product;

pub use inventory::{Inventory, InventoryError};
pub use product::{Clothing, Electronics, Grocery, Product, ProductCore, ProductError, ProductOps};
