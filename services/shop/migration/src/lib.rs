pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users;
mod m20250301_000002_create_products;
mod m20250301_000003_create_cart;
mod m20250301_000004_create_orders;
mod m20250301_000005_create_order_items;
pub mod seed;

pub use seed::seed_baseline;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_products::Migration),
            Box::new(m20250301_000003_create_cart::Migration),
            Box::new(m20250301_000004_create_orders::Migration),
            Box::new(m20250301_000005_create_order_items::Migration),
        ]
    }
}
