use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(shoplab_migration::Migrator).await;
}
