mod category;
mod image;
mod product;
mod slide;
mod user;

pub use category::*;
pub use image::*;
pub use product::*;
pub use slide::*;
pub use user::*;
