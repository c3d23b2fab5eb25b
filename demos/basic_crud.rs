//! Basic CRUD walkthrough
//!
//! Reads connection settings from `crudhaus.toml` (or the file named by
//! `CRUDHAUS_CONFIG`) and exercises every helper against a scratch table.
//!
//! Run with: cargo run --example basic_crud

use crudhaus::prelude::*;
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct NewUser {
    name: String,
    email: String,
    age: i32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::load()?;
    let mut db = DataAccess::connect(&config.database).await?;
    println!("Connected to {}", db.dsn());

    db.execute_query("DROP TABLE IF EXISTS demo_users", &StatementParams::new())
        .await?;
    db.execute_query(
        "CREATE TABLE demo_users (
            id INT AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(255) NOT NULL,
            age INT,
            deleted_at DATETIME NULL
        )",
        &StatementParams::new(),
    )
    .await?;

    // Create from a map and from a typed record
    let created = db
        .create(
            "demo_users",
            &params_from([
                ("name", json!("Ada")),
                ("email", json!("ada@example.com")),
                ("age", json!(36)),
            ]),
        )
        .await?;
    println!("Inserted Ada with id {}", created.last_insert_id());

    for i in 1..=25 {
        let user = NewUser {
            name: format!("user{}", i),
            email: format!("user{}@example.com", i),
            age: 20 + i,
        };
        db.create("demo_users", &serialize_to_params(&user)?).await?;
    }

    // Read everything, then through a cursor
    let everyone = db.read("demo_users", "", true).await?.into_rows();
    println!("{} users in total", everyone.len());

    if let Some(mut statement) = db.read("demo_users", "age > 40", false).await?.into_statement() {
        while let Some(row) = statement.fetch() {
            println!("  over 40: {} ({})", row["name"], row["age"]);
        }
    }

    // Update inside a transaction
    db.begin_transaction().await?;
    let updated = db
        .update("demo_users", &params_from([("name", json!("Ada Lovelace"))]), "id = 1")
        .await?;
    db.commit().await?;
    println!("Updated {} row(s)", updated.row_count());

    // Rolled back changes disappear
    db.begin_transaction().await?;
    db.delete("demo_users", "age < 30").await?;
    db.rollback().await?;
    println!("After rollback: {} users", db.count("demo_users", "").await?);

    // Soft delete hides rows from read_with_soft_delete only
    db.soft_delete("demo_users", "id = 2").await?;
    let active = db.read_with_soft_delete("demo_users", "", true).await?.into_rows();
    println!("{} active users", active.len());
    db.restore("demo_users", "id = 2").await?;

    // Pagination
    let page = db.read_with_pagination("demo_users", "", 2, 10).await?;
    for row in &page {
        println!("  page 2: {} {}", row["id"], row["name"]);
    }

    db.execute_query("DROP TABLE demo_users", &StatementParams::new())
        .await?;
    db.close().await?;

    Ok(())
}
