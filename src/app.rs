use std::time::Duration;

use crate::{config::AppConfig, error::Result, services::ApiClient, session::SessionStore};

#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub session: SessionStore,
    pub autoplay: Duration,
}

pub fn build(config: &AppConfig) -> Result<AppState> {
    let session = SessionStore::load(&config.session.file)?;
    let client = ApiClient::new(&config.api, session.clone())?;

    tracing::debug!(
        "API client ready for {} (session {})",
        client.base_url(),
        if session.is_authenticated() { "present" } else { "absent" }
    );

    Ok(AppState {
        client,
        session,
        autoplay: Duration::from_millis(config.carousel.autoplay_ms),
    })
}
