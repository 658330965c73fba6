//! # Seed Data Generator
//!
//! Populates a database with a small, recognizable catalog and opening
//! ledger for development and manual testing.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p stockledger-db --bin seed
//!
//! # Specify database path
//! cargo run -p stockledger-db --bin seed -- --db ./data/stockledger.db
//! ```
//!
//! ## Generated Data
//! - 4 categories (Electronics, Clothing, Books, Home & Garden)
//! - 4 suppliers with contact info
//! - 4 products, one per category
//! - Opening IN transactions per product plus a couple of sales, so every
//!   report has something to show immediately

use std::env;

use stockledger_core::{NewTransaction, TransactionKind};
use stockledger_db::{Database, DbConfig, DbResult};

const CATEGORIES: &[(&str, &str)] = &[
    ("Electronics", "Electronic devices and components"),
    ("Clothing", "Apparel and accessories"),
    ("Books", "Books and publications"),
    ("Home & Garden", "Home improvement and garden supplies"),
];

const SUPPLIERS: &[(&str, &str, &str)] = &[
    (
        "TechCorp Inc.",
        "contact@techcorp.com",
        "123 Tech Street, Silicon Valley, CA",
    ),
    (
        "Fashion Forward",
        "orders@fashionforward.com",
        "456 Fashion Ave, New York, NY",
    ),
    (
        "BookWorld",
        "sales@bookworld.com",
        "789 Library Lane, Boston, MA",
    ),
    (
        "Home Depot",
        "orders@homedepot.com",
        "321 Hardware Road, Atlanta, GA",
    ),
];

/// (name, description, category index, price, reorder level)
const PRODUCTS: &[(&str, &str, usize, f64, i64)] = &[
    ("Laptop", "High-performance laptop", 0, 999.99, 5),
    ("T-Shirt", "Cotton t-shirt", 1, 19.99, 20),
    (
        "Python Programming Book",
        "Learn Python programming",
        2,
        49.99,
        10,
    ),
    ("Garden Hose", "50ft garden hose", 3, 29.99, 15),
];

/// (product index, kind, quantity, supplier index, notes)
const TRANSACTIONS: &[(usize, TransactionKind, i64, Option<usize>, &str)] = &[
    (0, TransactionKind::In, 10, Some(0), "Initial stock"),
    (1, TransactionKind::In, 50, Some(1), "Initial stock"),
    (2, TransactionKind::In, 25, Some(2), "Initial stock"),
    (3, TransactionKind::In, 30, Some(3), "Initial stock"),
    (0, TransactionKind::Out, 2, None, "Customer sale"),
    (1, TransactionKind::Out, 5, None, "Customer sale"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./stockledger_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("StockLedger Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./stockledger_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("StockLedger Seed Data Generator");
    println!("===============================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing data
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    seed(&db).await?;

    // Show what the reports see
    println!();
    let levels = db.reports().inventory_levels().await?;
    println!("Current inventory:");
    for row in &levels {
        println!(
            "  {:<28} stock {:>4}  value {:>10.2}",
            row.product_name, row.current_stock, row.stock_value
        );
    }

    let valuation = db.reports().inventory_valuation().await?;
    println!();
    println!("Total inventory value: {:.2}", valuation.total_value);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Inserts the sample catalog and opening ledger.
async fn seed(db: &Database) -> DbResult<()> {
    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for (name, description) in CATEGORIES {
        let category = db.categories().create(name, Some(description)).await?;
        category_ids.push(category.id);
    }
    println!("✓ Created {} categories", category_ids.len());

    let mut supplier_ids = Vec::with_capacity(SUPPLIERS.len());
    for (name, contact_info, address) in SUPPLIERS {
        let supplier = db
            .suppliers()
            .create(name, Some(contact_info), Some(address))
            .await?;
        supplier_ids.push(supplier.id);
    }
    println!("✓ Created {} suppliers", supplier_ids.len());

    let mut product_ids = Vec::with_capacity(PRODUCTS.len());
    for (name, description, category_idx, price, reorder_level) in PRODUCTS {
        let product = db
            .products()
            .create(
                name,
                Some(description),
                Some(category_ids[*category_idx]),
                *price,
                *reorder_level,
            )
            .await?;
        product_ids.push(product.id);
    }
    println!("✓ Created {} products", product_ids.len());

    for (product_idx, kind, quantity, supplier_idx, notes) in TRANSACTIONS {
        let mut movement =
            NewTransaction::new(product_ids[*product_idx], *kind, *quantity).with_notes(*notes);
        if let Some(supplier_idx) = supplier_idx {
            movement = movement.from_supplier(supplier_ids[*supplier_idx]);
        }
        db.ledger().record(movement).await?;
    }
    println!("✓ Recorded {} transactions", TRANSACTIONS.len());

    Ok(())
}
