use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use stockroom_catalog::{Clothing, Electronics, Grocery, Inventory, Product, ProductCore};
use stockroom_store::InventoryRepo;

const MENU: &str = "\n===== Inventory Menu =====\n\
                    1. Add Product\n\
                    2. Sell Product\n\
                    3. List Products\n\
                    4. Search Product\n\
                    5. Save Inventory\n\
                    6. Load Inventory\n\
                    7. Exit";

/// Run the interactive menu until the user exits or input ends.
///
/// Domain errors are printed and the loop continues; only terminal I/O
/// failures propagate.
pub fn run(
    inventory: &mut Inventory,
    repo: &InventoryRepo,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        writeln!(out, "{}", MENU)?;
        let choice = match prompt(input, out, "Enter choice: ")? {
            Some(line) => line,
            None => break,
        };

        match choice.as_str() {
            "1" => add_product(inventory, input, out)?,
            "2" => sell_product(inventory, input, out)?,
            "3" => {
                for product in inventory.list_all() {
                    writeln!(out, "{}", product)?;
                }
            }
            "4" => search_products(inventory, input, out)?,
            "5" => match repo.save(inventory) {
                Ok(()) => writeln!(out, "Saved!")?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            "6" => match repo.load_into(inventory) {
                Ok(_) => writeln!(out, "Loaded!")?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            "7" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            _ => writeln!(out, "Invalid choice!")?,
        }
    }
    Ok(())
}

fn add_product(
    inventory: &mut Inventory,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "Type: 1. Electronics 2. Grocery 3. Clothing")?;
    let Some(kind) = prompt(input, out, "Type: ")? else {
        return Ok(());
    };
    let Some(product_id) = prompt_number::<u32>(input, out, "ID: ")? else {
        return Ok(());
    };
    let Some(name) = prompt(input, out, "Name: ")? else {
        return Ok(());
    };
    let Some(price) = prompt_number::<f64>(input, out, "Price: ")? else {
        return Ok(());
    };
    let Some(stock) = prompt_number::<u32>(input, out, "Stock: ")? else {
        return Ok(());
    };

    let core = ProductCore {
        product_id,
        name,
        price,
        stock,
    };

    let product = match kind.as_str() {
        "1" => {
            let Some(brand) = prompt(input, out, "Brand: ")? else {
                return Ok(());
            };
            let Some(warranty) = prompt_number::<u32>(input, out, "Warranty (years): ")? else {
                return Ok(());
            };
            Product::Electronics(Electronics {
                core,
                warranty,
                brand,
            })
        }
        "2" => {
            let Some(expiry_date) = prompt_date(input, out, "Expiry Date (YYYY-MM-DD): ")? else {
                return Ok(());
            };
            Product::Grocery(Grocery { core, expiry_date })
        }
        "3" => {
            let Some(size) = prompt(input, out, "Size: ")? else {
                return Ok(());
            };
            let Some(material) = prompt(input, out, "Material: ")? else {
                return Ok(());
            };
            Product::Clothing(Clothing {
                core,
                size,
                material,
            })
        }
        _ => {
            writeln!(out, "Invalid Type!")?;
            return Ok(());
        }
    };

    match inventory.add_product(product) {
        Ok(()) => writeln!(out, "Product Added!"),
        Err(e) => writeln!(out, "{}", e),
    }
}

fn sell_product(
    inventory: &mut Inventory,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let Some(product_id) = prompt_number::<u32>(input, out, "Enter Product ID: ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt_number::<u32>(input, out, "Enter quantity: ")? else {
        return Ok(());
    };

    match inventory.sell_product(product_id, quantity) {
        Ok(()) => writeln!(out, "Sold!"),
        Err(e) => writeln!(out, "{}", e),
    }
}

fn search_products(
    inventory: &Inventory,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let Some(needle) = prompt(input, out, "Enter name to search: ")? else {
        return Ok(());
    };
    for product in inventory.search_by_name(&needle) {
        writeln!(out, "{}", product)?;
    }
    Ok(())
}

/// Read one trimmed line after printing a label. `None` means end of input.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a number. `None` on end of input or a value that does not
/// parse; the latter prints a message so the current command aborts cleanly.
fn prompt_number<T: FromStr>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<T>> {
    let Some(line) = prompt(input, out, label)? else {
        return Ok(None);
    };
    match line.parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(out, "Invalid number!")?;
            Ok(None)
        }
    }
}

fn prompt_date(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<NaiveDate>> {
    let Some(line) = prompt(input, out, label)? else {
        return Ok(None);
    };
    match NaiveDate::parse_from_str(&line, "%Y-%m-%d") {
        Ok(date) => Ok(Some(date)),
        Err(_) => {
            writeln!(out, "Invalid date!")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stockroom_catalog::ProductOps;
    use tempfile::tempdir;

    fn run_session(inventory: &mut Inventory, repo: &InventoryRepo, script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        run(inventory, repo, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn temp_repo(dir: &tempfile::TempDir) -> InventoryRepo {
        InventoryRepo::new(dir.path().join("inventory.json"))
    }

    #[test]
    fn test_add_list_exit_session() {
        let dir = tempdir().unwrap();
        let repo = temp_repo(&dir);
        let mut inventory = Inventory::new();

        // Add an Electronics product, list it, exit
        let script = "1\n1\n1\nPhone\n500\n10\nX\n2\n3\n7\n";
        let out = run_session(&mut inventory, &repo, script);

        assert!(out.contains("Product Added!"));
        assert!(out.contains("[Electronics] Phone"));
        assert!(out.contains("Goodbye!"));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_duplicate_add_prints_error_and_loop_continues() {
        let dir = tempdir().unwrap();
        let repo = temp_repo(&dir);
        let mut inventory = Inventory::new();

        let script = "1\n3\n5\nShirt\n20\n5\nM\nCotton\n\
                      1\n3\n5\nShirt\n20\n5\nM\nCotton\n\
                      7\n";
        let out = run_session(&mut inventory, &repo, script);

        assert!(out.contains("Product Added!"));
        assert!(out.contains("Product ID already exists: 5"));
        assert!(out.contains("Goodbye!"));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_sell_too_many_prints_out_of_stock() {
        let dir = tempdir().unwrap();
        let repo = temp_repo(&dir);
        let mut inventory = Inventory::new();

        let script = "1\n1\n1\nPhone\n500\n10\nX\n2\n\
                      2\n1\n99\n\
                      7\n";
        let out = run_session(&mut inventory, &repo, script);

        assert!(out.contains("Out of stock: requested 99, available 10"));
        assert_eq!(inventory.get(1).unwrap().core().stock, 10);
    }

    #[test]
    fn test_invalid_number_aborts_command() {
        let dir = tempdir().unwrap();
        let repo = temp_repo(&dir);
        let mut inventory = Inventory::new();

        let script = "2\nabc\n7\n";
        let out = run_session(&mut inventory, &repo, script);

        assert!(out.contains("Invalid number!"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_choice() {
        let dir = tempdir().unwrap();
        let repo = temp_repo(&dir);
        let mut inventory = Inventory::new();

        let out = run_session(&mut inventory, &repo, "9\n7\n");
        assert!(out.contains("Invalid choice!"));
    }

    #[test]
    fn test_save_and_load_through_menu() {
        let dir = tempdir().unwrap();
        let repo = temp_repo(&dir);

        let mut inventory = Inventory::new();
        let script = "1\n2\n4\nMilk\n3.5\n20\n2026-03-01\n5\n7\n";
        let out = run_session(&mut inventory, &repo, script);
        assert!(out.contains("Saved!"));

        let mut fresh = Inventory::new();
        let out = run_session(&mut fresh, &repo, "6\n3\n7\n");
        assert!(out.contains("Loaded!"));
        assert!(out.contains("[Grocery] Milk"));
        assert_eq!(fresh.len(), 1);
    }

    #[test]
    fn test_search_through_menu() {
        let dir = tempdir().unwrap();
        let repo = temp_repo(&dir);
        let mut inventory = Inventory::new();

        let script = "1\n1\n1\nLaptop\n900\n4\nX\n1\n\
                      1\n1\n2\nDesktop\n700\n2\nY\n1\n\
                      4\ntop\n7\n";
        let out = run_session(&mut inventory, &repo, script);

        assert!(out.contains("[Electronics] Laptop"));
        assert!(out.contains("[Electronics] Desktop"));
    }
}
