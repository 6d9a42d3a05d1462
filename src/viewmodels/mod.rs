pub mod admin;
pub mod carousel;
pub mod catalog;
pub mod forms;
pub mod interaction;
pub mod lead;
pub mod login;
pub mod product_detail;

pub use admin::{AdminState, AdminViewModel, Outcome};
pub use carousel::{start_autoplay, Carousel, CarouselTimer};
pub use catalog::{CatalogState, CatalogStatus, CatalogViewModel, FEATURED_LIMIT};
pub use forms::{CategoryForm, ProductForm, SlideForm};
pub use interaction::Interaction;
pub use lead::{Countdown, Lead, LeadForm};
pub use login::LoginViewModel;
pub use product_detail::{DetailState, ProductDetailViewModel};
