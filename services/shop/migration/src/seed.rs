//! Baseline rows for a fresh shop.
//!
//! Runs on every start after the migrations. Each table is seeded only when it
//! is empty, so restarts never duplicate rows.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, Statement};

/// Seed users: one admin, one customer. Passwords are plaintext on purpose.
const USERS: &[(&str, &str, bool)] = &[
    ("admin@shop.local", "admin123", true),
    ("alice@example.com", "alicepass", false),
];

/// Seed catalog: (name, description, price_cents, image_url).
const PRODUCTS: &[(&str, &str, i32, &str)] = &[
    (
        "Faded Jeans",
        "Classic Faded Jeans for everyday wear",
        6300,
        "http://localhost:8080/local-image?id=1",
    ),
    (
        "Black Jeans",
        "Classic Black Jeans for everyday wear",
        7200,
        "http://localhost:8080/local-image?id=2",
    ),
    (
        "CHOCOOLATE Shoulder Tee",
        "Shoulder Tee (NOT WHITE)",
        5999,
        "http://localhost:8080/local-image?id=3",
    ),
    (
        "CHOCOOLATE_T-shirt",
        "T-shirt (Chocoolate) with title",
        3690,
        "http://localhost:8080/local-image?id=4",
    ),
    (
        "Casual Solid Drop Shoulder Tee",
        "White and 100% Cotton",
        5500,
        "http://localhost:8080/local-image?id=5",
    ),
];

/// Insert the baseline users and products into whichever tables are empty.
pub async fn seed_baseline<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    if row_count(db, "users").await? == 0 {
        let mut insert = Query::insert();
        insert
            .into_table(Users::Table)
            .columns([Users::Email, Users::Password, Users::IsAdmin]);
        for &(email, password, is_admin) in USERS {
            insert.values_panic([email.into(), password.into(), is_admin.into()]);
        }
        db.execute(db.get_database_backend().build(&insert)).await?;
        tracing::info!(count = USERS.len(), "seeded users");
    }

    if row_count(db, "products").await? == 0 {
        let mut insert = Query::insert();
        insert.into_table(Products::Table).columns([
            Products::Name,
            Products::Description,
            Products::PriceCents,
            Products::ImageUrl,
        ]);
        for &(name, description, price_cents, image_url) in PRODUCTS {
            insert.values_panic([
                name.into(),
                description.into(),
                price_cents.into(),
                image_url.into(),
            ]);
        }
        db.execute(db.get_database_backend().build(&insert)).await?;
        tracing::info!(count = PRODUCTS.len(), "seeded products");
    }

    Ok(())
}

async fn row_count<C>(db: &C, table: &'static str) -> Result<i64, DbErr>
where
    C: ConnectionTrait,
{
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            format!("SELECT COUNT(*) AS count FROM {table}"),
        ))
        .await?;
    match row {
        Some(row) => row.try_get::<i64>("", "count"),
        None => Ok(0),
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Email,
    Password,
    IsAdmin,
}

#[derive(Iden)]
enum Products {
    Table,
    Name,
    Description,
    PriceCents,
    ImageUrl,
}
