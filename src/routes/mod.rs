use std::fmt;

use reqwest::Url;

/// Client-side pages. Every redirect a view-model issues targets one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Products { category: Option<i32> },
    ProductDetail(i32),
    Login,
    Admin,
    Landing,
}

impl Route {
    /// Resolves a path (with optional query string). Unknown paths land on home.
    pub fn parse(target: &str) -> Route {
        let url = match Url::parse("http://localhost/").and_then(|base| base.join(target)) {
            Ok(url) => url,
            Err(_) => return Route::Home,
        };

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Route::Home,
            ["products"] => Route::Products {
                category: url
                    .query_pairs()
                    .find(|(key, _)| key == "category")
                    .and_then(|(_, value)| value.parse().ok()),
            },
            ["products", id] => id.parse().map(Route::ProductDetail).unwrap_or(Route::Home),
            ["login"] | ["admin", "login"] => Route::Login,
            ["manage"] | ["admin"] => Route::Admin,
            ["landing"] | ["offer"] => Route::Landing,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products { category: None } => "/products".to_string(),
            Route::Products {
                category: Some(category),
            } => format!("/products?category={}", category),
            Route::ProductDetail(id) => format!("/products/{}", id),
            Route::Login => "/login".to_string(),
            Route::Admin => "/manage".to_string(),
            Route::Landing => "/landing".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
