use shoplab::usecase::catalog::ListCatalogUseCase;

use crate::helpers::InMemoryShop;

#[tokio::test]
async fn should_route_every_image_through_relay() {
    let shop = InMemoryShop::seeded();

    let products = ListCatalogUseCase { repo: shop }.execute().await.unwrap();

    assert_eq!(products.len(), 2);
    for product in &products {
        let url = product.image_url.as_deref().unwrap();
        assert!(
            url.starts_with("/image?url=http://localhost:8080/local-image?id="),
            "unexpected image url {url}"
        );
    }
    assert!(products[0].id.0 < products[1].id.0, "catalog is ordered by id");
}

#[tokio::test]
async fn should_return_empty_catalog() {
    let products = ListCatalogUseCase {
        repo: InMemoryShop::default(),
    }
    .execute()
    .await
    .unwrap();

    assert!(products.is_empty());
}
