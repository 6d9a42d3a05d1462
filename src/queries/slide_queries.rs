use reqwest::Method;

use crate::{
    error::Result,
    models::{ImageFile, Slide, SlideRequest},
    queries::product_queries::image_form,
    services::ApiClient,
};

/// Carousel slides in the order the API returns them
pub async fn get_all(client: &ApiClient, active_only: bool) -> Result<Vec<Slide>> {
    let request = client
        .request(Method::GET, "/api/slides")
        .query(&[("active_only", active_only)]);
    client.send_json(request).await
}

pub async fn create_slide(client: &ApiClient, payload: &SlideRequest) -> Result<Slide> {
    let request = client.request(Method::POST, "/api/slides").json(payload);
    client.send_json(request).await
}

pub async fn update_slide(client: &ApiClient, id: i32, payload: &SlideRequest) -> Result<Slide> {
    let request = client
        .request(Method::PUT, &format!("/api/slides/{}", id))
        .json(payload);
    client.send_json(request).await
}

pub async fn delete_slide(client: &ApiClient, id: i32) -> Result<()> {
    let request = client.request(Method::DELETE, &format!("/api/slides/{}", id));
    client.send_empty(request).await
}

pub async fn upload_image(client: &ApiClient, id: i32, image: ImageFile) -> Result<Slide> {
    let request = client
        .request(Method::POST, &format!("/api/slides/{}/upload", id))
        .multipart(image_form(image)?);
    client.send_json(request).await
}
