use reqwest::{
    multipart::{Form, Part},
    Method,
};

use crate::{
    error::Result,
    models::{ImageFile, Product, ProductImageUpload, ProductRequest},
    services::ApiClient,
};

/// List products, optionally narrowed to one category
pub async fn search_products(client: &ApiClient, category_id: Option<i32>) -> Result<Vec<Product>> {
    let mut request = client.request(Method::GET, "/api/products");
    if let Some(category_id) = category_id {
        request = request.query(&[("category_id", category_id)]);
    }

    client.send_json(request).await
}

/// Find product by ID
pub async fn find_by_id(client: &ApiClient, id: i32) -> Result<Product> {
    let request = client.request(Method::GET, &format!("/api/products/{}", id));
    client.send_json(request).await
}

pub async fn create_product(client: &ApiClient, payload: &ProductRequest) -> Result<Product> {
    let request = client.request(Method::POST, "/api/products").json(payload);
    client.send_json(request).await
}

pub async fn update_product(
    client: &ApiClient,
    id: i32,
    payload: &ProductRequest,
) -> Result<Product> {
    let request = client
        .request(Method::PUT, &format!("/api/products/{}", id))
        .json(payload);
    client.send_json(request).await
}

pub async fn delete_product(client: &ApiClient, id: i32) -> Result<()> {
    let request = client.request(Method::DELETE, &format!("/api/products/{}", id));
    client.send_empty(request).await
}

/// Bind an image to an existing product
pub async fn upload_image(
    client: &ApiClient,
    id: i32,
    image: ImageFile,
) -> Result<ProductImageUpload> {
    let request = client
        .request(Method::POST, &format!("/api/products/{}/upload", id))
        .multipart(image_form(image)?);
    client.send_json(request).await
}

pub(crate) fn image_form(image: ImageFile) -> Result<Form> {
    let part = Part::bytes(image.bytes)
        .file_name(image.file_name)
        .mime_str(&image.content_type)?;

    Ok(Form::new().part("file", part))
}
