pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod routes;
pub mod services;
pub mod session;
pub mod utils;
pub mod viewmodels;

pub use app::AppState;
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use routes::Route;
pub use services::ApiClient;
pub use session::SessionStore;
