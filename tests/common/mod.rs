#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use eltuzer_storefront::{
    config::ApiConfig,
    models::{Category, CategoryRequest, Product, ProductRequest, Slide, SlideRequest},
    viewmodels::Interaction,
    ApiClient, Route, SessionStore,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "secret";
pub const ADMIN_TOKEN: &str = "valid-admin-token";

pub fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 16)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn category(id: i32, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: None,
        created_at: timestamp(),
    }
}

pub fn product(id: i32, category: &Category, price: i64) -> Product {
    Product {
        id,
        name: format!("Товар {}", id),
        description: None,
        price: Decimal::new(price, 0),
        image_url: None,
        category_id: category.id,
        category: category.clone(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn slide(id: i32, order: i32, is_active: bool) -> Slide {
    Slide {
        id,
        title: Some(format!("Слайд {}", id)),
        subtitle: None,
        link_url: None,
        image_url: None,
        order,
        is_active,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn client(base_url: &str, session: SessionStore) -> ApiClient {
    ApiClient::new(&ApiConfig::new(base_url), session).unwrap()
}

pub fn admin_session() -> SessionStore {
    let session = SessionStore::in_memory();
    session.set_token(ADMIN_TOKEN).unwrap();
    session
}

/// Base URL nobody listens on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub path: String,
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

#[derive(Debug, Default)]
pub struct Backend {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub slides: Vec<Slide>,
    pub calls: Vec<String>,
    pub uploads: Vec<Upload>,
    /// Every request carrying a bearer token is answered with 401.
    pub expired: bool,
    pub fail_deletes: bool,
    pub fail_uploads: bool,
    pub fail_categories: bool,
    /// Product listing ignores `category_id`.
    pub ignore_filter: bool,
    next_id: i32,
}

impl Backend {
    fn next_id(&mut self) -> i32 {
        let taken = self
            .products
            .iter()
            .map(|p| p.id)
            .chain(self.categories.iter().map(|c| c.id))
            .chain(self.slides.iter().map(|s| s.id))
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(taken) + 1;
        self.next_id
    }
}

/// In-process stand-in for the storefront REST API.
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<Backend>>,
}

type ApiError = (StatusCode, Json<Value>);
type ApiResult<T> = Result<Json<T>, ApiError>;

fn detail(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "detail": message })))
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

fn reject_expired(backend: &Backend, headers: &HeaderMap) -> Result<(), ApiError> {
    if backend.expired && bearer(headers).is_some() {
        return Err(detail(StatusCode::UNAUTHORIZED, "Could not validate credentials"));
    }
    Ok(())
}

fn authorize(backend: &Backend, headers: &HeaderMap) -> Result<(), ApiError> {
    reject_expired(backend, headers)?;
    if bearer(headers) != Some(ADMIN_TOKEN) {
        return Err(detail(StatusCode::UNAUTHORIZED, "Not authenticated"));
    }
    Ok(())
}

impl FakeApi {
    pub fn new(setup: impl FnOnce(&mut Backend)) -> Self {
        let api = Self::default();
        setup(&mut api.backend());
        api
    }

    pub fn backend(&self) -> MutexGuard<'_, Backend> {
        self.inner.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<String> {
        self.backend().calls.clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.backend()
            .calls
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(self.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn record(&self, call: String) -> MutexGuard<'_, Backend> {
        let mut backend = self.backend();
        backend.calls.push(call);
        backend
    }
}

fn router(api: FakeApi) -> Router {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/products/{id}/upload", post(upload_product_image))
        .route("/api/categories", get(list_categories).post(create_category))
        .route(
            "/api/categories/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/api/slides", get(list_slides).post(create_slide))
        .route("/api/slides/{id}", axum::routing::put(update_slide).delete(delete_slide))
        .route("/api/slides/{id}/upload", post(upload_slide_image))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .with_state(api)
}

async fn read_file(mut multipart: Multipart) -> Result<(String, String, Vec<u8>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| detail(StatusCode::BAD_REQUEST, "Malformed multipart body"))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| detail(StatusCode::BAD_REQUEST, "Malformed multipart body"))?;
        return Ok((file_name, content_type, bytes.to_vec()));
    }
    Err(detail(StatusCode::UNPROCESSABLE_ENTITY, "file is required"))
}

//PRODUCTS
#[derive(Deserialize)]
struct ProductFilter {
    category_id: Option<i32>,
}

async fn list_products(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Query(filter): Query<ProductFilter>,
) -> ApiResult<Vec<Product>> {
    let call = match filter.category_id {
        Some(id) => format!("GET /api/products?category_id={}", id),
        None => "GET /api/products".to_string(),
    };
    let backend = api.record(call);
    reject_expired(&backend, &headers)?;

    let products = backend
        .products
        .iter()
        .filter(|p| backend.ignore_filter || filter.category_id.map_or(true, |c| p.category_id == c))
        .cloned()
        .collect();
    Ok(Json(products))
}

async fn get_product(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> ApiResult<Product> {
    let backend = api.record(format!("GET /api/products/{}", id));
    reject_expired(&backend, &headers)?;

    backend
        .products
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Product not found"))
}

async fn create_product(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Json(payload): Json<ProductRequest>,
) -> ApiResult<Product> {
    let mut backend = api.record("POST /api/products".to_string());
    authorize(&backend, &headers)?;

    let category = backend
        .categories
        .iter()
        .find(|c| c.id == payload.category_id)
        .cloned()
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Category not found"))?;

    let id = backend.next_id();
    let product = Product {
        id,
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
        category_id: category.id,
        category,
        created_at: timestamp(),
        updated_at: timestamp(),
    };
    backend.products.push(product.clone());
    Ok(Json(product))
}

async fn update_product(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ProductRequest>,
) -> ApiResult<Product> {
    let mut backend = api.record(format!("PUT /api/products/{}", id));
    authorize(&backend, &headers)?;

    let category = backend
        .categories
        .iter()
        .find(|c| c.id == payload.category_id)
        .cloned()
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Category not found"))?;
    let product = backend
        .products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Product not found"))?;

    product.name = payload.name;
    product.description = payload.description;
    product.price = payload.price;
    product.category_id = category.id;
    product.category = category;
    if payload.image_url.is_some() {
        product.image_url = payload.image_url;
    }
    Ok(Json(product.clone()))
}

async fn delete_product(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    let mut backend = api.record(format!("DELETE /api/products/{}", id));
    authorize(&backend, &headers)?;
    if backend.fail_deletes {
        return Err(detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"));
    }

    let before = backend.products.len();
    backend.products.retain(|p| p.id != id);
    if backend.products.len() == before {
        return Err(detail(StatusCode::NOT_FOUND, "Product not found"));
    }
    Ok(Json(json!({ "message": "Product deleted" })))
}

async fn upload_product_image(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> ApiResult<Value> {
    let path = format!("/api/products/{}/upload", id);
    authorize(&api.record(format!("POST {}", path)), &headers)?;
    let (file_name, content_type, bytes) = read_file(multipart).await?;

    let mut backend = api.backend();
    if backend.fail_uploads {
        return Err(detail(StatusCode::INTERNAL_SERVER_ERROR, "Disk full"));
    }
    backend.uploads.push(Upload {
        path,
        file_name: file_name.clone(),
        content_type,
        size: bytes.len(),
    });

    let image_url = format!("uploads/product_{}_{}", id, file_name);
    let product = backend
        .products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Product not found"))?;
    product.image_url = Some(image_url.clone());

    Ok(Json(json!({
        "image_url": format!("/{}", image_url),
        "product": product.clone(),
    })))
}

//CATEGORIES
async fn list_categories(State(api): State<FakeApi>, headers: HeaderMap) -> ApiResult<Vec<Category>> {
    let backend = api.record("GET /api/categories".to_string());
    reject_expired(&backend, &headers)?;
    if backend.fail_categories {
        return Err(detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"));
    }
    Ok(Json(backend.categories.clone()))
}

async fn get_category(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> ApiResult<Category> {
    let backend = api.record(format!("GET /api/categories/{}", id));
    reject_expired(&backend, &headers)?;

    backend
        .categories
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Category not found"))
}

async fn create_category(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Json(payload): Json<CategoryRequest>,
) -> ApiResult<Category> {
    let mut backend = api.record("POST /api/categories".to_string());
    authorize(&backend, &headers)?;

    let category = Category {
        id: backend.next_id(),
        name: payload.name,
        description: payload.description,
        created_at: timestamp(),
    };
    backend.categories.push(category.clone());
    Ok(Json(category))
}

async fn update_category(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryRequest>,
) -> ApiResult<Category> {
    let mut backend = api.record(format!("PUT /api/categories/{}", id));
    authorize(&backend, &headers)?;

    let category = backend
        .categories
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Category not found"))?;
    category.name = payload.name;
    category.description = payload.description;
    Ok(Json(category.clone()))
}

async fn delete_category(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    let mut backend = api.record(format!("DELETE /api/categories/{}", id));
    authorize(&backend, &headers)?;
    if backend.fail_deletes {
        return Err(detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"));
    }

    let before = backend.categories.len();
    backend.categories.retain(|c| c.id != id);
    if backend.categories.len() == before {
        return Err(detail(StatusCode::NOT_FOUND, "Category not found"));
    }
    Ok(Json(json!({ "message": "Category deleted" })))
}

//SLIDES
#[derive(Deserialize)]
struct SlideFilter {
    active_only: Option<bool>,
}

async fn list_slides(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Query(filter): Query<SlideFilter>,
) -> ApiResult<Vec<Slide>> {
    let active_only = filter.active_only.unwrap_or(true);
    let backend = api.record(format!("GET /api/slides?active_only={}", active_only));
    reject_expired(&backend, &headers)?;

    let mut slides: Vec<Slide> = backend
        .slides
        .iter()
        .filter(|s| !active_only || s.is_active)
        .cloned()
        .collect();
    slides.sort_by_key(|s| (s.order, s.id));
    Ok(Json(slides))
}

async fn create_slide(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Json(payload): Json<SlideRequest>,
) -> ApiResult<Slide> {
    let mut backend = api.record("POST /api/slides".to_string());
    authorize(&backend, &headers)?;

    let slide = Slide {
        id: backend.next_id(),
        title: payload.title,
        subtitle: payload.subtitle,
        link_url: payload.link_url,
        image_url: payload.image_url,
        order: payload.order,
        is_active: payload.is_active,
        created_at: timestamp(),
        updated_at: timestamp(),
    };
    backend.slides.push(slide.clone());
    Ok(Json(slide))
}

async fn update_slide(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SlideRequest>,
) -> ApiResult<Slide> {
    let mut backend = api.record(format!("PUT /api/slides/{}", id));
    authorize(&backend, &headers)?;

    let slide = backend
        .slides
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Slide not found"))?;
    slide.title = payload.title;
    slide.subtitle = payload.subtitle;
    slide.link_url = payload.link_url;
    slide.order = payload.order;
    slide.is_active = payload.is_active;
    Ok(Json(slide.clone()))
}

async fn delete_slide(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    let mut backend = api.record(format!("DELETE /api/slides/{}", id));
    authorize(&backend, &headers)?;

    let before = backend.slides.len();
    backend.slides.retain(|s| s.id != id);
    if backend.slides.len() == before {
        return Err(detail(StatusCode::NOT_FOUND, "Slide not found"));
    }
    Ok(Json(json!({ "message": "Slide deleted" })))
}

async fn upload_slide_image(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> ApiResult<Slide> {
    let path = format!("/api/slides/{}/upload", id);
    authorize(&api.record(format!("POST {}", path)), &headers)?;
    let (file_name, content_type, bytes) = read_file(multipart).await?;

    let mut backend = api.backend();
    if backend.fail_uploads {
        return Err(detail(StatusCode::INTERNAL_SERVER_ERROR, "Disk full"));
    }
    backend.uploads.push(Upload {
        path,
        file_name: file_name.clone(),
        content_type,
        size: bytes.len(),
    });

    let slide = backend
        .slides
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Slide not found"))?;
    slide.image_url = Some(format!("uploads/slide_{}_{}", id, file_name));
    Ok(Json(slide.clone()))
}

//AUTH
#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(State(api): State<FakeApi>, Form(form): Form<LoginForm>) -> ApiResult<Value> {
    let _backend = api.record("POST /api/auth/login".to_string());
    if form.username != ADMIN_USER || form.password != ADMIN_PASSWORD {
        return Err(detail(
            StatusCode::UNAUTHORIZED,
            "Incorrect username or password",
        ));
    }
    Ok(Json(json!({ "access_token": ADMIN_TOKEN, "token_type": "bearer" })))
}

async fn me(State(api): State<FakeApi>, headers: HeaderMap) -> ApiResult<Value> {
    let backend = api.record("GET /api/auth/me".to_string());
    authorize(&backend, &headers)?;
    Ok(Json(json!({
        "id": 1,
        "username": ADMIN_USER,
        "email": "admin@eltuzer.kz",
        "created_at": "2026-01-16T12:00:00"
    })))
}

/// Records prompts and redirects; answers confirmations with `answer`.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    pub answer: bool,
    pub confirms: Vec<String>,
    pub alerts: Vec<String>,
    pub redirects: Vec<Route>,
}

impl ScriptedUi {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            ..Self::default()
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }
}

impl Interaction for ScriptedUi {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.answer
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, route: Route) {
        self.redirects.push(route);
    }
}
