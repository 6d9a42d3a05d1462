use crate::{
    queries::auth_queries, routes::Route, services::ApiClient, viewmodels::Interaction,
};

const WRONG_CREDENTIALS: &str = "Неверный логин или пароль";
const MISSING_TOKEN: &str = "Не получен токен доступа";

pub struct LoginViewModel {
    client: ApiClient,
    pub username: String,
    pub password: String,
    error: Option<String>,
    loading: bool,
}

impl LoginViewModel {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            username: String::new(),
            password: String::new(),
            error: None,
            loading: false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Logs in, stores the token and opens the admin panel.
    pub async fn submit<I: Interaction>(&mut self, ui: &mut I) -> bool {
        self.error = None;
        self.loading = true;

        let result = auth_queries::login(&self.client, &self.username, &self.password).await;
        self.loading = false;

        let token = match result {
            Ok(response) => response.access_token,
            Err(e) => {
                tracing::error!("Login error: {}", e);
                self.error = Some(
                    e.server_message()
                        .filter(|message| !message.is_empty())
                        .unwrap_or(WRONG_CREDENTIALS)
                        .to_string(),
                );
                return false;
            }
        };

        if token.is_empty() {
            self.error = Some(MISSING_TOKEN.to_string());
            return false;
        }

        if let Err(e) = self.client.session().set_token(&token) {
            tracing::error!("Failed to store session token: {}", e);
            self.error = Some(e.to_string());
            return false;
        }

        tracing::info!("Logged in as {}", self.username);
        ui.navigate(Route::Admin);
        true
    }
}
