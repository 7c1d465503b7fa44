//! # Seed Data Generator
//!
//! Populates the database with sample products for development, or walks a
//! single product through its whole lifecycle.
//!
//! ## Usage
//! ```bash
//! # Insert 25 sample products (default)
//! cargo run -p inventory-db --bin seed
//!
//! # Insert a custom amount into a specific file
//! cargo run -p inventory-db --bin seed -- --count 200 --db ./data/inventory.db
//!
//! # Create → update → delete → read a "Widget" and print each step
//! cargo run -p inventory-db --bin seed -- --demo
//! ```

use inventory_core::{NewProduct, Patch, ProductPatch};
use inventory_db::{Database, DbConfig, DbError, ProductStore};
use std::env;

/// Base names for generated products
const NAMES: &[&str] = &[
    "Widget",
    "Gadget",
    "Sprocket",
    "Bracket",
    "Hinge",
    "Bolt",
    "Washer",
    "Gasket",
    "Spring",
    "Pulley",
];

/// Size variants appended to base names
const SIZES: &[&str] = &["Small", "Medium", "Large"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 25;
    let mut db_path = String::from("./inventory.db");
    let mut demo = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(25);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--demo" => demo = true,
            "--help" | "-h" => {
                println!("Inventory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 25)");
                println!("  -d, --db <PATH>    Database file path (default: ./inventory.db)");
                println!("      --demo         Run the create/update/delete lifecycle instead");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Inventory Seed");
    println!("==============");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    if demo {
        run_demo(&db.products()).await?;
    } else {
        seed(&db.products(), count).await?;
    }

    db.close().await;
    Ok(())
}

/// Inserts `count` generated products unless the table already has rows.
async fn seed(store: &ProductStore, count: usize) -> Result<(), DbError> {
    let existing = store.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    println!();
    println!("Generating {} products...", count);

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let product = generate_product(seed);
        if let Err(e) = store.create(product.clone()).await {
            eprintln!("Failed to insert {}: {}", product.name, e);
            continue;
        }
        generated += 1;
    }

    println!("✓ Generated {} products in {:?}", generated, start.elapsed());
    Ok(())
}

/// Walks one product through create, update, delete, and a final read.
async fn run_demo(store: &ProductStore) -> Result<(), DbError> {
    println!();

    let widget = store.create(NewProduct::new("Widget", 100, 9.99)).await?;
    println!(
        "Created   id={} name={} quantity={} price={}",
        widget.id, widget.name, widget.quantity_in_stock, widget.price_per_unit
    );

    let patch = ProductPatch {
        price_per_unit: Patch::Set(22.99),
        ..ProductPatch::default()
    };
    let updated = store.update(widget.id, patch).await?;
    println!(
        "Updated   id={} name={} quantity={} price={}",
        updated.id, updated.name, updated.quantity_in_stock, updated.price_per_unit
    );

    let deleted = store.delete(widget.id).await?;
    println!("Deleted   id={} -> {}", widget.id, deleted);

    match store.find(widget.id).await? {
        Some(product) => println!("Read      unexpected row: {:?}", product),
        None => println!("Read      id={} -> not found", widget.id),
    }

    Ok(())
}

/// Generates a single product with deterministic sample data.
fn generate_product(seed: usize) -> NewProduct {
    let name = format!(
        "{} {} #{}",
        NAMES[seed % NAMES.len()],
        SIZES[(seed / NAMES.len()) % SIZES.len()],
        seed + 1
    );

    // Quantity 0-100, price $0.99-$19.99
    let quantity = (seed * 37 % 101) as i64;
    let price = 0.99 + ((seed * 17) % 1901) as f64 / 100.0;

    NewProduct::new(name, quantity, (price * 100.0).round() / 100.0)
}
