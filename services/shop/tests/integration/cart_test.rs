use shoplab::error::ShopError;
use shoplab::usecase::cart::{AddToCartUseCase, GetCartUseCase, RemoveFromCartUseCase};
use shoplab_domain::id::{CartItemId, ProductId};

use crate::helpers::InMemoryShop;

#[tokio::test]
async fn should_merge_repeat_adds_into_one_row() {
    let shop = InMemoryShop::seeded();
    let alice = shop.user_id("alice@example.com");
    let jeans = shop.product_id("Faded Jeans");
    let uc = AddToCartUseCase {
        cart: shop.clone(),
        products: shop.clone(),
    };

    uc.execute(alice, jeans).await.unwrap();
    uc.execute(alice, jeans).await.unwrap();

    let rows = shop.cart_rows(alice);
    assert_eq!(rows.len(), 1, "expected a single cart row, got {rows:?}");
    assert_eq!(rows[0].quantity, 2);

    let lines = GetCartUseCase { cart: shop }.execute(alice).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].name, "Faded Jeans");
    assert_eq!(lines[0].price_cents, 6300);
    assert_eq!(lines[0].quantity, 2);
}

#[tokio::test]
async fn should_reject_unknown_product() {
    let shop = InMemoryShop::seeded();
    let alice = shop.user_id("alice@example.com");

    // A non-numeric form value parses to product 0.
    let result = AddToCartUseCase {
        cart: shop.clone(),
        products: shop.clone(),
    }
    .execute(alice, ProductId::parse_lenient("abc"))
    .await;

    assert!(
        matches!(result, Err(ShopError::ProductNotFound)),
        "expected ProductNotFound, got {result:?}"
    );
    assert!(shop.cart_rows(alice).is_empty());
}

#[tokio::test]
async fn should_only_remove_own_rows() {
    let shop = InMemoryShop::seeded();
    let alice = shop.user_id("alice@example.com");
    let admin = shop.user_id("admin@shop.local");
    let jeans = shop.product_id("Faded Jeans");
    AddToCartUseCase {
        cart: shop.clone(),
        products: shop.clone(),
    }
    .execute(alice, jeans)
    .await
    .unwrap();
    let row = CartItemId(shop.cart_rows(alice)[0].id);

    let remove = RemoveFromCartUseCase { cart: shop.clone() };
    remove.execute(admin, row).await.unwrap();
    assert_eq!(shop.cart_rows(alice).len(), 1, "foreign row must survive");

    remove.execute(alice, row).await.unwrap();
    assert!(shop.cart_rows(alice).is_empty());

    // Removing again is a silent no-op.
    remove.execute(alice, row).await.unwrap();
}

#[tokio::test]
async fn should_return_empty_cart_as_empty_list() {
    let shop = InMemoryShop::seeded();
    let alice = shop.user_id("alice@example.com");

    let lines = GetCartUseCase { cart: shop }.execute(alice).await.unwrap();
    assert!(lines.is_empty());
}
