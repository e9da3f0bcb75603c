use std::collections::HashMap;

use crate::product::{Product, ProductError, ProductOps};

/// In-memory product store keyed by product id
#[derive(Debug, Default)]
pub struct Inventory {
    products: HashMap<u32, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// Insert a product, rejecting an id that is already present.
    /// Either inserted or rejected, never partial.
    pub fn add_product(&mut self, product: Product) -> Result<(), InventoryError> {
        let id = product.product_id();
        if self.products.contains_key(&id) {
            return Err(InventoryError::DuplicateProduct(id));
        }
        self.products.insert(id, product);
        Ok(())
    }

    /// Sell against an existing product, propagating an insufficient-stock
    /// failure. An unknown id is a silent no-op returning `Ok(())` —
    /// long-standing behavior, kept as documented.
    pub fn sell_product(&mut self, product_id: u32, quantity: u32) -> Result<(), InventoryError> {
        if let Some(product) = self.products.get_mut(&product_id) {
            product.sell(quantity)?;
        }
        Ok(())
    }

    /// Restock an existing product. An unknown id is a no-op, matching
    /// `sell_product`.
    pub fn restock_product(&mut self, product_id: u32, amount: u32) {
        if let Some(product) = self.products.get_mut(&product_id) {
            product.restock(amount);
        }
    }

    /// Insert or replace, bypassing the duplicate check. This is the bulk
    /// load path: the last record wins for a duplicated id.
    pub fn upsert(&mut self, product: Product) {
        self.products.insert(product.product_id(), product);
    }

    pub fn get(&self, product_id: u32) -> Option<&Product> {
        self.products.get(&product_id)
    }

    /// All products, in map order (order is not part of the contract).
    pub fn list_all(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    /// Case-insensitive substring match on the product name.
    pub fn search_by_name(&self, needle: &str) -> Vec<&Product> {
        let needle = needle.to_lowercase();
        self.products
            .values()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Product ID already exists: {0}")]
    DuplicateProduct(u32),

    #[error(transparent)]
    Product(#[from] ProductError),
}
