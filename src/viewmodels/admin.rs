use crate::{
    error::{AppError, Result},
    models::{Category, Product, Slide},
    queries::{category_queries, product_queries, slide_queries},
    routes::Route,
    services::ApiClient,
    viewmodels::{
        forms::{CategoryForm, ProductForm, SlideForm},
        Interaction,
    },
};

const CONFIRM_DELETE_PRODUCT: &str = "Вы уверены, что хотите удалить этот товар?";
const CONFIRM_DELETE_CATEGORY: &str = "Вы уверены, что хотите удалить эту категорию?";
const CONFIRM_DELETE_SLIDE: &str = "Вы уверены, что хотите удалить этот слайд?";
const DELETE_PRODUCT_FAILED: &str = "Ошибка при удалении товара";
const DELETE_CATEGORY_FAILED: &str = "Ошибка при удалении категории";
const DELETE_SLIDE_FAILED: &str = "Ошибка при удалении слайда";
const SAVE_PRODUCT_FAILED: &str = "Ошибка при сохранении товара";
const SAVE_CATEGORY_FAILED: &str = "Ошибка при сохранении категории";
const SAVE_SLIDE_FAILED: &str = "Ошибка при сохранении слайда";

/// Result of an admin action, after alerts and redirects have been issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Cancelled,
    Invalid,
    Failed,
    LoggedOut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub slides: Vec<Slide>,
    pub loading: bool,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            slides: Vec::new(),
            loading: true,
        }
    }
}

/// Admin panel over products, categories and carousel slides.
///
/// Every action first checks the session for a token and sends the user to
/// the login page without touching the API when there is none. A 401 from
/// the API drops the token and redirects the same way. Successful writes
/// refetch all lists; the local lists are never patched in place.
pub struct AdminViewModel<I: Interaction> {
    client: ApiClient,
    ui: I,
    state: AdminState,
}

impl<I: Interaction> AdminViewModel<I> {
    pub fn new(client: ApiClient, ui: I) -> Self {
        Self {
            client,
            ui,
            state: AdminState::default(),
        }
    }

    pub fn state(&self) -> &AdminState {
        &self.state
    }

    pub fn interaction(&self) -> &I {
        &self.ui
    }

    pub fn interaction_mut(&mut self) -> &mut I {
        &mut self.ui
    }

    /// Opening the panel.
    pub async fn enter(&mut self) -> Outcome {
        if !self.guard() {
            return Outcome::LoggedOut;
        }
        self.refresh().await
    }

    /// Reloads every list. On failure the previous lists stay as they were.
    pub async fn refresh(&mut self) -> Outcome {
        let client = &self.client;
        let (products, categories, slides) = tokio::join!(
            product_queries::search_products(client, None),
            category_queries::get_all(client),
            slide_queries::get_all(client, false),
        );

        let outcome = match (products, categories, slides) {
            (Ok(products), Ok(categories), Ok(slides)) => {
                self.state.products = products;
                self.state.categories = categories;
                self.state.slides = slides;
                Outcome::Done
            }
            (products, categories, slides) => {
                let errors: Vec<AppError> = [products.err(), categories.err(), slides.err()]
                    .into_iter()
                    .flatten()
                    .collect();

                if errors.iter().any(AppError::is_unauthorized) {
                    self.expire_session();
                    Outcome::LoggedOut
                } else {
                    for e in &errors {
                        tracing::error!("Error fetching admin data: {}", e);
                    }
                    Outcome::Failed
                }
            }
        };

        self.state.loading = false;
        outcome
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.client.session().clear() {
            tracing::warn!("Failed to clear session: {}", e);
        }
        self.ui.navigate(Route::Home);
    }

    //PRODUCTS
    /// Creates (`editing = None`) or updates a product, then uploads the
    /// picked image against the saved id. A failed upload leaves the saved
    /// product without an image.
    pub async fn save_product(&mut self, editing: Option<i32>, form: ProductForm) -> Outcome {
        if !self.guard() {
            return Outcome::LoggedOut;
        }
        let payload = match form.to_request() {
            Ok(payload) => payload,
            Err(e) => return self.invalid(e),
        };

        let saved = match editing {
            Some(id) => product_queries::update_product(&self.client, id, &payload).await,
            None => product_queries::create_product(&self.client, &payload).await,
        };
        let saved = match saved {
            Ok(product) => product,
            Err(e) => return self.write_failed(e, SAVE_PRODUCT_FAILED),
        };

        if let Some(image) = form.image {
            if let Err(e) = product_queries::upload_image(&self.client, saved.id, image).await {
                return self.write_failed(e, SAVE_PRODUCT_FAILED);
            }
        }

        tracing::info!("Saved product {} ({})", saved.id, saved.name);
        self.after_write().await
    }

    pub async fn delete_product(&mut self, id: i32) -> Outcome {
        if !self.guard() {
            return Outcome::LoggedOut;
        }
        if !self.ui.confirm(CONFIRM_DELETE_PRODUCT) {
            return Outcome::Cancelled;
        }

        let result = product_queries::delete_product(&self.client, id).await;
        self.finish_write(result, DELETE_PRODUCT_FAILED).await
    }

    //CATEGORIES
    pub async fn save_category(&mut self, editing: Option<i32>, form: CategoryForm) -> Outcome {
        if !self.guard() {
            return Outcome::LoggedOut;
        }
        let payload = match form.to_request() {
            Ok(payload) => payload,
            Err(e) => return self.invalid(e),
        };

        let result = match editing {
            Some(id) => category_queries::update_category(&self.client, id, &payload).await,
            None => category_queries::create_category(&self.client, &payload).await,
        };
        self.finish_write(result.map(|_| ()), SAVE_CATEGORY_FAILED)
            .await
    }

    pub async fn delete_category(&mut self, id: i32) -> Outcome {
        if !self.guard() {
            return Outcome::LoggedOut;
        }
        if !self.ui.confirm(CONFIRM_DELETE_CATEGORY) {
            return Outcome::Cancelled;
        }

        let result = category_queries::delete_category(&self.client, id).await;
        self.finish_write(result, DELETE_CATEGORY_FAILED).await
    }

    //SLIDES
    pub async fn save_slide(&mut self, editing: Option<i32>, form: SlideForm) -> Outcome {
        if !self.guard() {
            return Outcome::LoggedOut;
        }
        let payload = match form.to_request() {
            Ok(payload) => payload,
            Err(e) => return self.invalid(e),
        };

        let saved = match editing {
            Some(id) => slide_queries::update_slide(&self.client, id, &payload).await,
            None => slide_queries::create_slide(&self.client, &payload).await,
        };
        let saved = match saved {
            Ok(slide) => slide,
            Err(e) => return self.write_failed(e, SAVE_SLIDE_FAILED),
        };

        if let Some(image) = form.image {
            if let Err(e) = slide_queries::upload_image(&self.client, saved.id, image).await {
                return self.write_failed(e, SAVE_SLIDE_FAILED);
            }
        }

        self.after_write().await
    }

    pub async fn delete_slide(&mut self, id: i32) -> Outcome {
        if !self.guard() {
            return Outcome::LoggedOut;
        }
        if !self.ui.confirm(CONFIRM_DELETE_SLIDE) {
            return Outcome::Cancelled;
        }

        let result = slide_queries::delete_slide(&self.client, id).await;
        self.finish_write(result, DELETE_SLIDE_FAILED).await
    }

    fn guard(&mut self) -> bool {
        if self.client.session().is_authenticated() {
            return true;
        }
        tracing::debug!("No session token, redirecting to login");
        self.ui.navigate(Route::Login);
        false
    }

    fn expire_session(&mut self) {
        tracing::warn!("Session expired, redirecting to login");
        if let Err(e) = self.client.session().clear() {
            tracing::warn!("Failed to clear session: {}", e);
        }
        self.ui.navigate(Route::Login);
    }

    fn invalid(&mut self, error: AppError) -> Outcome {
        self.ui.alert(&error.to_string());
        Outcome::Invalid
    }

    fn write_failed(&mut self, error: AppError, alert: &str) -> Outcome {
        if error.is_unauthorized() {
            self.expire_session();
            return Outcome::LoggedOut;
        }
        tracing::error!("{}: {}", alert, error);
        self.ui.alert(alert);
        Outcome::Failed
    }

    /// The write has landed; a failed refetch only leaves the lists stale.
    async fn after_write(&mut self) -> Outcome {
        match self.refresh().await {
            Outcome::LoggedOut => Outcome::LoggedOut,
            Outcome::Failed => {
                tracing::warn!("Saved, but the admin lists could not be refreshed");
                Outcome::Done
            }
            outcome => outcome,
        }
    }

    async fn finish_write(&mut self, result: Result<()>, alert: &str) -> Outcome {
        match result {
            Ok(()) => self.after_write().await,
            Err(e) => self.write_failed(e, alert),
        }
    }
}
