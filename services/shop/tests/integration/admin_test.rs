use shoplab::domain::repository::ProductRepository;
use shoplab::error::ShopError;
use shoplab::usecase::admin::{AddProductInput, AddProductUseCase, AdminPanelUseCase};
use shoplab_domain::id::UserId;

use crate::helpers::InMemoryShop;

fn input(price_cents: &str, image_url: &str) -> AddProductInput {
    AddProductInput {
        name: "Metadata Tee".to_owned(),
        description: "fetches whatever you point it at".to_owned(),
        price_cents: price_cents.to_owned(),
        image_url: image_url.to_owned(),
    }
}

#[tokio::test]
async fn should_show_secret_to_admin() {
    let shop = InMemoryShop::seeded();
    let admin = shop.user_id("admin@shop.local");

    let panel = AdminPanelUseCase {
        users: shop,
        secret: "TOP-SECRET",
    }
    .execute(admin)
    .await
    .unwrap();

    assert_eq!(
        panel.render(),
        "ADMIN PANEL\nWelcome admin@shop.local\nSECRET_KEY = TOP-SECRET\n"
    );
}

#[tokio::test]
async fn should_forbid_panel_for_non_admin() {
    let shop = InMemoryShop::seeded();
    let alice = shop.user_id("alice@example.com");

    let result = AdminPanelUseCase {
        users: shop,
        secret: "TOP-SECRET",
    }
    .execute(alice)
    .await;

    assert!(
        matches!(result, Err(ShopError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_panel_for_unknown_user() {
    let result = AdminPanelUseCase {
        users: InMemoryShop::seeded(),
        secret: "TOP-SECRET",
    }
    .execute(UserId(404))
    .await;

    assert!(matches!(result, Err(ShopError::UserNotFound)));
}

#[tokio::test]
async fn should_store_unvalidated_image_url() {
    let shop = InMemoryShop::seeded();
    let admin = shop.user_id("admin@shop.local");

    AddProductUseCase {
        users: shop.clone(),
        products: shop.clone(),
    }
    .execute(admin, input("1999", "http://169.254.169.254/latest/meta-data/"))
    .await
    .unwrap();

    let products = shop.list_all().await.unwrap();
    let added = products.last().unwrap();
    assert_eq!(added.name, "Metadata Tee");
    assert_eq!(added.price_cents, 1999);
    assert_eq!(
        added.image_url.as_deref(),
        Some("http://169.254.169.254/latest/meta-data/")
    );
}

#[tokio::test]
async fn should_forbid_add_product_for_unknown_user() {
    let shop = InMemoryShop::seeded();

    let result = AddProductUseCase {
        users: shop.clone(),
        products: shop,
    }
    .execute(UserId(404), input("1", ""))
    .await;

    assert!(matches!(result, Err(ShopError::Forbidden)));
}

#[tokio::test]
async fn should_check_admin_before_price() {
    let shop = InMemoryShop::seeded();
    let alice = shop.user_id("alice@example.com");
    let admin = shop.user_id("admin@shop.local");
    let uc = AddProductUseCase {
        users: shop.clone(),
        products: shop,
    };

    let result = uc.execute(alice, input("cheap", "")).await;
    assert!(matches!(result, Err(ShopError::Forbidden)));

    let result = uc.execute(admin, input("cheap", "")).await;
    assert!(
        matches!(result, Err(ShopError::Invalid("price_cents"))),
        "got {result:?}"
    );
}
