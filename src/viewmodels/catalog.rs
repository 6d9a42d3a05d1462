use crate::{
    error::Result,
    models::{Category, Product, Slide},
    queries::{category_queries, product_queries, slide_queries},
    routes::Route,
    services::ApiClient,
    viewmodels::carousel::Carousel,
};

/// The home page lists only the first few products as featured.
pub const FEATURED_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Loaded,
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub slides: Vec<Slide>,
    pub selected_category: Option<i32>,
    pub loading: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            slides: Vec::new(),
            selected_category: None,
            loading: true,
        }
    }
}

/// Product listing with a category filter. Backs both the catalog page and
/// the home page, which also shows the carousel.
///
/// Fetch failures are logged and shown as an empty listing.
pub struct CatalogViewModel {
    client: ApiClient,
    include_slides: bool,
    state: CatalogState,
}

impl CatalogViewModel {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            include_slides: false,
            state: CatalogState::default(),
        }
    }

    /// Home page: the first [`FEATURED_LIMIT`] products plus active carousel slides.
    pub fn home(client: ApiClient) -> Self {
        Self {
            include_slides: true,
            ..Self::new(client)
        }
    }

    /// Catalog page opened through `/products?category=N`.
    pub fn from_route(client: ApiClient, route: &Route) -> Self {
        let mut view_model = Self::new(client);
        if let Route::Products { category } = route {
            view_model.state.selected_category = *category;
        }
        view_model
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    pub fn selected_category(&self) -> Option<i32> {
        self.state.selected_category
    }

    pub fn status(&self) -> CatalogStatus {
        if self.state.loading {
            CatalogStatus::Loading
        } else if self.state.products.is_empty() {
            CatalogStatus::Empty
        } else {
            CatalogStatus::Loaded
        }
    }

    pub fn carousel(&self) -> Carousel {
        Carousel::new(self.state.slides.clone())
    }

    /// Fetches products, categories and (on the home page) slides together
    /// and replaces the collections once all of them settle.
    pub async fn load(&mut self) {
        self.state.loading = true;
        let category = self.state.selected_category;

        let (products, categories, slides) = tokio::join!(
            product_queries::search_products(&self.client, category),
            category_queries::get_all(&self.client),
            fetch_slides(&self.client, self.include_slides),
        );

        let mut products = settle(products, "products");
        if let Some(category) = category {
            products.retain(|product| product.category_id == category);
        }
        if self.include_slides {
            products.truncate(FEATURED_LIMIT);
        }

        self.state.products = products;
        self.state.categories = settle(categories, "categories");
        self.state.slides = settle(slides, "slides");
        self.state.loading = false;

        tracing::debug!(
            "Catalog loaded: {} products, {} categories, filter {:?}",
            self.state.products.len(),
            self.state.categories.len(),
            category
        );
    }

    /// Switches the filter and reloads. Selecting the active filter again is a no-op.
    pub async fn select_category(&mut self, category: Option<i32>) {
        if self.state.selected_category == category && !self.state.loading {
            return;
        }
        self.state.selected_category = category;
        self.load().await;
    }
}

async fn fetch_slides(client: &ApiClient, include: bool) -> Result<Vec<Slide>> {
    if !include {
        return Ok(Vec::new());
    }
    slide_queries::get_all(client, true).await
}

fn settle<T>(result: Result<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Error fetching {}: {}", what, e);
            Vec::new()
        }
    }
}
