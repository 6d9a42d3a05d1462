/// Resolves an `image_url` as stored by the API against the API base URL.
///
/// Uploads are saved as relative paths (`uploads/product_7_...jpg`); absolute
/// URLs pass through untouched.
pub fn normalize_image_url(base_url: &str, image_url: Option<&str>) -> Option<String> {
    let image_url = image_url.map(str::trim).filter(|url| !url.is_empty())?;

    if image_url.starts_with("http") {
        return Some(image_url.to_string());
    }

    Some(format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        image_url.trim_start_matches('/')
    ))
}
