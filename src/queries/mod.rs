pub mod auth_queries;
pub mod category_queries;
pub mod product_queries;
pub mod slide_queries;
