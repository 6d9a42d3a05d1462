use std::fmt;

use crate::{
    error::{AppError, Result},
    utils::phone::{self, MIN_PHONE_DIGITS},
};

/// Contact request collected on the landing page and product pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    phone: String,
    pub message: String,
    submitted: bool,
}

/// A lead that passed validation, ready to hand off to the messenger.
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the phone as typed, reformatted to the mask.
    pub fn set_phone(&mut self, raw: &str) {
        self.phone = phone::format_phone(raw);
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn submit(&mut self) -> Result<Lead> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Пожалуйста, введите ваше имя".to_string(),
            ));
        }

        if phone::digits(&self.phone).len() < MIN_PHONE_DIGITS {
            return Err(AppError::ValidationError(
                "Пожалуйста, введите корректный номер телефона".to_string(),
            ));
        }

        let message = self.message.trim();
        let lead = Lead {
            name: name.to_string(),
            phone: self.phone.clone(),
            message: (!message.is_empty()).then(|| message.to_string()),
        };

        self.submitted = true;
        tracing::info!("Lead accepted for {}", lead.phone);
        Ok(lead)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Promo countdown on the landing page: starts at 23:59:59 and starts over after zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            hours: 23,
            minutes: 59,
            seconds: 59,
        }
    }
}

impl Countdown {
    /// One second elapsed.
    pub fn tick(&mut self) {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        } else {
            *self = Self::default();
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
