//! Field validation for record forms
//!
//! The store accepts any record shape; forms call [`Validate::validate`]
//! before submitting to reject incomplete or malformed input. All failing
//! fields are reported together.

use regex::Regex;
use std::sync::OnceLock;

use crate::core::error::{FieldValidationError, ValidationError};
use crate::resources::{
    Article, Email, Faq, Hotel, Inquiry, News, Package, Review, Settings, Tour, Yacht,
};

/// Records that can check their own fields
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Collects field failures for one record
#[derive(Debug, Default)]
pub struct FieldChecks {
    errors: Vec<FieldValidationError>,
}

impl FieldChecks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text must not be empty or blank
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.fail(field, "is required");
        }
        self
    }

    /// Number must be greater than zero
    pub fn positive(mut self, field: &str, value: f64) -> Self {
        if value <= 0.0 || value.is_nan() {
            self.fail(field, &format!("must be positive (value: {})", value));
        }
        self
    }

    /// Number must lie within `min..=max`
    pub fn within(mut self, field: &str, value: i64, min: i64, max: i64) -> Self {
        if !(min..=max).contains(&value) {
            self.fail(
                field,
                &format!("must be between {} and {} (value: {})", min, max, value),
            );
        }
        self
    }

    /// Text must look like an email address
    pub fn email(mut self, field: &str, value: &str) -> Self {
        if !is_valid_email(value) {
            self.fail(field, &format!("is not a valid email address: '{}'", value));
        }
        self
    }

    /// Text must be one of the allowed values
    pub fn one_of(mut self, field: &str, value: &str, allowed: &[&str]) -> Self {
        if !allowed.contains(&value) {
            self.fail(field, &format!("must be one of {:?} (value: '{}')", allowed, value));
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(self.errors))
        }
    }

    fn fail(&mut self, field: &str, message: &str) {
        self.errors.push(FieldValidationError::new(field, message));
    }
}

fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
                .expect("email pattern is valid")
        })
        .is_match(email)
}

impl Validate for Hotel {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("name", &self.name)
            .required("location", &self.location)
            .positive("pricePerNight", self.price_per_night)
            .finish()
    }
}

impl Validate for Yacht {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("name", &self.name)
            .required("type", &self.yacht_type)
            .positive("capacity", f64::from(self.capacity))
            .positive("pricePerHour", self.price_per_hour)
            .finish()
    }
}

impl Validate for Tour {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("title", &self.title)
            .required("duration", &self.duration)
            .positive("price", self.price)
            .finish()
    }
}

impl Validate for Article {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("title", &self.title)
            .required("author", &self.author)
            .required("content", &self.content)
            .finish()
    }
}

impl Validate for Review {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("userName", &self.user_name)
            .within("rating", i64::from(self.rating), 1, 5)
            .one_of("relatedTo", &self.related_to, &["hotel", "yacht", "tour"])
            .finish()
    }
}

impl Validate for Inquiry {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("name", &self.name)
            .email("email", &self.email)
            .required("message", &self.message)
            .finish()
    }
}

impl Validate for Package {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("title", &self.title)
            .required("duration", &self.duration)
            .positive("price", self.price)
            .finish()
    }
}

impl Validate for Faq {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("question", &self.question)
            .required("answer", &self.answer)
            .finish()
    }
}

impl Validate for News {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("title", &self.title)
            .required("content", &self.content)
            .finish()
    }
}

impl Validate for Email {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("subject", &self.subject)
            .email("to", &self.to)
            .finish()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("siteTitle", &self.site_title)
            .email("contactEmail", &self.contact_email)
            .finish()
    }
}
