use reqwest::Method;

use crate::{
    error::Result,
    models::{Category, CategoryRequest},
    services::ApiClient,
};

/// Get all categories (flat list)
pub async fn get_all(client: &ApiClient) -> Result<Vec<Category>> {
    let request = client.request(Method::GET, "/api/categories");
    client.send_json(request).await
}

/// Find category by ID
pub async fn find_by_id(client: &ApiClient, id: i32) -> Result<Category> {
    let request = client.request(Method::GET, &format!("/api/categories/{}", id));
    client.send_json(request).await
}

pub async fn create_category(client: &ApiClient, payload: &CategoryRequest) -> Result<Category> {
    let request = client.request(Method::POST, "/api/categories").json(payload);
    client.send_json(request).await
}

pub async fn update_category(
    client: &ApiClient,
    id: i32,
    payload: &CategoryRequest,
) -> Result<Category> {
    let request = client
        .request(Method::PUT, &format!("/api/categories/{}", id))
        .json(payload);
    client.send_json(request).await
}

pub async fn delete_category(client: &ApiClient, id: i32) -> Result<()> {
    let request = client.request(Method::DELETE, &format!("/api/categories/{}", id));
    client.send_empty(request).await
}
