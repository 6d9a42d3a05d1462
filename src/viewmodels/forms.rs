use rust_decimal::Decimal;

use crate::{
    error::{AppError, Result},
    models::{Category, CategoryRequest, ImageFile, Product, ProductRequest, Slide, SlideRequest},
};

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn required(value: &str, message: &str) -> Result<String> {
    optional(value).ok_or_else(|| AppError::ValidationError(message.to_string()))
}

/// Product editor fields as typed into the admin form.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: String,
    pub image: Option<ImageFile>,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            category_id: product.category_id.to_string(),
            image: None,
        }
    }

    pub fn to_request(&self) -> Result<ProductRequest> {
        let name = required(&self.name, "Введите название товара")?;

        let price = self
            .price
            .trim()
            .replace(',', ".")
            .parse::<Decimal>()
            .ok()
            .filter(|price| price.is_sign_positive() && !price.is_zero())
            .ok_or_else(|| AppError::ValidationError("Укажите корректную цену".to_string()))?;

        let category_id = self
            .category_id
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::ValidationError("Выберите категорию".to_string()))?;

        Ok(ProductRequest {
            name,
            description: optional(&self.description),
            price,
            category_id,
            image_url: None,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }

    pub fn to_request(&self) -> Result<CategoryRequest> {
        Ok(CategoryRequest {
            name: required(&self.name, "Введите название категории")?,
            description: optional(&self.description),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SlideForm {
    pub title: String,
    pub subtitle: String,
    pub link_url: String,
    pub order: String,
    pub is_active: bool,
    pub image: Option<ImageFile>,
}

impl Default for SlideForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            link_url: String::new(),
            order: String::new(),
            is_active: true,
            image: None,
        }
    }
}

impl SlideForm {
    pub fn from_slide(slide: &Slide) -> Self {
        Self {
            title: slide.title.clone().unwrap_or_default(),
            subtitle: slide.subtitle.clone().unwrap_or_default(),
            link_url: slide.link_url.clone().unwrap_or_default(),
            order: slide.order.to_string(),
            is_active: slide.is_active,
            image: None,
        }
    }

    pub fn to_request(&self) -> Result<SlideRequest> {
        let order = match self.order.trim() {
            "" => 0,
            value => value
                .parse()
                .map_err(|_| AppError::ValidationError("Порядок должен быть числом".to_string()))?,
        };

        Ok(SlideRequest {
            title: optional(&self.title),
            subtitle: optional(&self.subtitle),
            link_url: optional(&self.link_url),
            image_url: None,
            order,
            is_active: self.is_active,
        })
    }
}
