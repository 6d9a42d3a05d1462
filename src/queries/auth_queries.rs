use reqwest::Method;

use crate::{
    error::Result,
    models::{LoginRequest, TokenResponse, User},
    services::ApiClient,
};

/// Exchange credentials for a bearer token
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<TokenResponse> {
    let form = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let request = client.request(Method::POST, "/api/auth/login").form(&form);
    client.send_json(request).await
}

/// The user the current session token belongs to
pub async fn current_user(client: &ApiClient) -> Result<User> {
    let request = client.request(Method::GET, "/api/auth/me");
    client.send_json(request).await
}
