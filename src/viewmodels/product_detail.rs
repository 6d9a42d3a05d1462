use crate::{models::Product, queries::product_queries, services::ApiClient};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Found(Product),
    NotFound,
}

/// A single product page. Missing products and failed fetches look the same.
pub struct ProductDetailViewModel {
    client: ApiClient,
    product_id: i32,
    state: DetailState,
}

impl ProductDetailViewModel {
    pub fn new(client: ApiClient, product_id: i32) -> Self {
        Self {
            client,
            product_id,
            state: DetailState::Loading,
        }
    }

    pub fn product_id(&self) -> i32 {
        self.product_id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn product(&self) -> Option<&Product> {
        match &self.state {
            DetailState::Found(product) => Some(product),
            _ => None,
        }
    }

    pub async fn load(&mut self) {
        self.state = DetailState::Loading;

        self.state = match product_queries::find_by_id(&self.client, self.product_id).await {
            Ok(product) => DetailState::Found(product),
            Err(e) => {
                tracing::error!("Error fetching product {}: {}", self.product_id, e);
                DetailState::NotFound
            }
        };
    }
}
