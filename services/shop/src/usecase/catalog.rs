use crate::domain::repository::ProductRepository;
use crate::domain::types::{Product, relay_image_url};
use crate::error::ShopError;

pub struct ListCatalogUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> ListCatalogUseCase<R> {
    /// All products, with every image routed through the `/image` relay.
    pub async fn execute(&self) -> Result<Vec<Product>, ShopError> {
        let mut products = self.repo.list_all().await?;
        for product in &mut products {
            let original = product.image_url.as_deref().unwrap_or_default();
            product.image_url = Some(relay_image_url(original));
        }
        Ok(products)
    }
}
