use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use stockroom_catalog::{Inventory, Product};

/// Whole-file JSON persistence for an inventory.
///
/// The target path is handed in at construction (it comes from
/// configuration, never hardcoded here). Saving writes the complete
/// inventory in one call; loading parses the complete file and merges it
/// into the given inventory, the last record winning for a duplicated id.
pub struct InventoryRepo {
    path: PathBuf,
}

impl InventoryRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize every product as a tagged record and write the file.
    pub fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let mut records = inventory.list_all();
        records.sort_by_key(|p| p.product_id()); // stable file ordering
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, json)?;
        info!("Inventory saved: {} products -> {}", records.len(), self.path.display());
        Ok(())
    }

    /// Parse the file and merge every record into `inventory`.
    /// Returns the number of records read.
    pub fn load_into(&self, inventory: &mut Inventory) -> Result<usize, StoreError> {
        let json = fs::read_to_string(&self.path)?;
        let records: Vec<Product> = serde_json::from_str(&json)?;
        let count = records.len();
        for product in records {
            inventory.upsert(product);
        }
        info!("Inventory loaded: {} products <- {}", count, self.path.display());
        Ok(count)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Inventory file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed inventory record: {0}")]
    Format(#[from] serde_json::Error),
}
