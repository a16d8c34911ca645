use shoplab::error::ShopError;
use shoplab::usecase::cart::AddToCartUseCase;
use shoplab::usecase::checkout::{CheckoutUseCase, ListOrdersUseCase};

use crate::helpers::{InMemoryShop, OrderItemRow};

#[tokio::test]
async fn should_reject_empty_cart_without_creating_order() {
    let shop = InMemoryShop::seeded();
    let alice = shop.user_id("alice@example.com");

    let result = CheckoutUseCase {
        cart: shop.clone(),
        orders: shop.clone(),
    }
    .execute(alice)
    .await;

    assert!(
        matches!(result, Err(ShopError::EmptyCart)),
        "expected EmptyCart, got {result:?}"
    );
    assert!(shop.orders().is_empty(), "no order may be created");
}

#[tokio::test]
async fn should_place_order_with_price_snapshot() {
    let shop = InMemoryShop::seeded();
    let alice = shop.user_id("alice@example.com");
    let faded = shop.product_id("Faded Jeans");
    let black = shop.product_id("Black Jeans");
    let add = AddToCartUseCase {
        cart: shop.clone(),
        products: shop.clone(),
    };
    add.execute(alice, faded).await.unwrap();
    add.execute(alice, faded).await.unwrap();
    add.execute(alice, black).await.unwrap();

    let placed = CheckoutUseCase {
        cart: shop.clone(),
        orders: shop.clone(),
    }
    .execute(alice)
    .await
    .unwrap();

    assert_eq!(placed.total_cents, 2 * 6300 + 7200);

    let orders = shop.orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order.id, placed.order_id);
    assert_eq!(orders[0].order.total_cents, placed.total_cents);
    assert_eq!(orders[0].user_id, alice);

    let mut items = shop.order_items();
    items.sort_by_key(|i| i.product_id.0);
    assert_eq!(
        items,
        vec![
            OrderItemRow {
                order_id: placed.order_id,
                product_id: faded,
                quantity: 2,
                price_cents: 6300,
            },
            OrderItemRow {
                order_id: placed.order_id,
                product_id: black,
                quantity: 1,
                price_cents: 7200,
            },
        ]
    );

    assert!(shop.cart_rows(alice).is_empty(), "cart must be cleared");
}

#[tokio::test]
async fn should_list_orders_newest_first() {
    let shop = InMemoryShop::seeded();
    let alice = shop.user_id("alice@example.com");
    let admin = shop.user_id("admin@shop.local");
    let faded = shop.product_id("Faded Jeans");
    let add = AddToCartUseCase {
        cart: shop.clone(),
        products: shop.clone(),
    };
    let checkout = CheckoutUseCase {
        cart: shop.clone(),
        orders: shop.clone(),
    };

    add.execute(alice, faded).await.unwrap();
    let first = checkout.execute(alice).await.unwrap();
    add.execute(alice, faded).await.unwrap();
    add.execute(alice, faded).await.unwrap();
    let second = checkout.execute(alice).await.unwrap();
    add.execute(admin, faded).await.unwrap();
    checkout.execute(admin).await.unwrap();

    let orders = ListOrdersUseCase { orders: shop }
        .execute(alice)
        .await
        .unwrap();
    let ids: Vec<_> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![second.order_id, first.order_id]);
    assert_eq!(orders[0].total_cents, 12600);
}
