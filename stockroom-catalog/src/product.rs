use std::fmt;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Fields shared by every product variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCore {
    pub product_id: u32,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

/// Shared operations over product variants.
///
/// `Display` is the rendering contract: a variant cannot exist without a
/// human-readable rendering, so there is no default to fall back on.
pub trait ProductOps: fmt::Display {
    fn core(&self) -> &ProductCore;
    fn core_mut(&mut self) -> &mut ProductCore;

    /// Add stock. No upper bound.
    fn restock(&mut self, amount: u32) {
        self.core_mut().stock += amount;
    }

    /// Remove stock. Fails when `quantity` exceeds the stock on hand,
    /// leaving the stock level untouched. No partial sells.
    fn sell(&mut self, quantity: u32) -> Result<(), ProductError> {
        let core = self.core_mut();
        if quantity > core.stock {
            return Err(ProductError::OutOfStock {
                requested: quantity,
                available: core.stock,
            });
        }
        core.stock -= quantity;
        Ok(())
    }

    /// Value of the stock on hand
    fn total_value(&self) -> f64 {
        let core = self.core();
        core.price * f64::from(core.stock)
    }
}

/// Electronics product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Electronics {
    #[serde(flatten)]
    pub core: ProductCore,
    pub warranty: u32,
    pub brand: String,
}

impl ProductOps for Electronics {
    fn core(&self) -> &ProductCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ProductCore {
        &mut self.core
    }
}

impl fmt::Display for Electronics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Electronics] {} (Brand: {}, Warranty: {} years, Price: ${}, Stock: {})",
            self.core.name, self.brand, self.warranty, self.core.price, self.core.stock
        )
    }
}

/// Grocery product with a calendar expiry date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grocery {
    #[serde(flatten)]
    pub core: ProductCore,
    pub expiry_date: NaiveDate, // Date only, serialized as YYYY-MM-DD
}

impl Grocery {
    /// Whether the product is expired as of `date` (strictly before it;
    /// a product expiring exactly on `date` is still fresh).
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        self.expiry_date < date
    }

    /// Whether the product is expired as of today, computed at call time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Utc::now().date_naive())
    }
}

impl ProductOps for Grocery {
    fn core(&self) -> &ProductCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ProductCore {
        &mut self.core
    }
}

impl fmt::Display for Grocery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_expired() { "Expired" } else { "Fresh" };
        write!(
            f,
            "[Grocery] {} (Expiry: {}, {}, Price: ${}, Stock: {})",
            self.core.name, self.expiry_date, status, self.core.price, self.core.stock
        )
    }
}

/// Clothing product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clothing {
    #[serde(flatten)]
    pub core: ProductCore,
    pub size: String,
    pub material: String,
}

impl ProductOps for Clothing {
    fn core(&self) -> &ProductCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ProductCore {
        &mut self.core
    }
}

impl fmt::Display for Clothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Clothing] {} (Size: {}, Material: {}, Price: ${}, Stock: {})",
            self.core.name, self.size, self.material, self.core.price, self.core.stock
        )
    }
}

/// A product of any variant. The `type` tag is the wire discriminator and
/// must round-trip exactly; variant fields are flattened alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Product {
    Electronics(Electronics),
    Grocery(Grocery),
    Clothing(Clothing),
}

impl Product {
    pub fn product_id(&self) -> u32 {
        self.core().product_id
    }

    pub fn name(&self) -> &str {
        &self.core().name
    }
}

impl ProductOps for Product {
    fn core(&self) -> &ProductCore {
        match self {
            Product::Electronics(p) => p.core(),
            Product::Grocery(p) => p.core(),
            Product::Clothing(p) => p.core(),
        }
    }

    fn core_mut(&mut self) -> &mut ProductCore {
        match self {
            Product::Electronics(p) => p.core_mut(),
            Product::Grocery(p) => p.core_mut(),
            Product::Clothing(p) => p.core_mut(),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Electronics(p) => p.fmt(f),
            Product::Grocery(p) => p.fmt(f),
            Product::Clothing(p) => p.fmt(f),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Out of stock: requested {requested}, available {available}")]
    OutOfStock { requested: u32, available: u32 },
}
