//! Record types of every resource the dashboard manages

#[macro_use]
pub mod macros;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::field::FieldValue;
use crate::core::record::{RecordId, Resource};

impl_record!(
    /// A hotel property
    Hotel,
    Resource::Hotels,
    ["name", "location"],
    {
        name("name"): String,
        description("description"): String,
        location("location"): String,
        price_per_night("pricePerNight"): f64,
        images("images"): Vec<String>,
        availability("availability"): bool,
    }
);

impl_record!(
    /// A yacht available for hourly charter
    Yacht,
    Resource::Yachts,
    ["name", "type"],
    {
        name("name"): String,
        yacht_type("type"): String,
        capacity("capacity"): u32,
        price_per_hour("pricePerHour"): f64,
        images("images"): Vec<String>,
        available("available"): bool,
    }
);

impl_record!(
    /// A guided tour and its upcoming departure dates
    Tour,
    Resource::Tours,
    ["title", "duration"],
    {
        title("title"): String,
        description("description"): String,
        duration("duration"): String,
        price("price"): f64,
        available_dates("availableDates"): Vec<DateTime<Utc>>,
    }
);

impl_record!(
    Article,
    Resource::Articles,
    ["title", "author"],
    {
        title("title"): String,
        content("content"): String,
        author("author"): String,
        published_at("publishedAt"): DateTime<Utc>,
    }
);

impl_record!(
    /// A customer review of a hotel, yacht or tour
    ///
    /// `related_id` is not checked against the referenced collection.
    Review,
    Resource::Reviews,
    ["userName", "comment"],
    {
        user_name("userName"): String,
        rating("rating"): u32,
        comment("comment"): String,
        related_to("relatedTo"): String,
        related_id("relatedId"): RecordId,
    }
);

impl_record!(
    /// A customer inquiry received through the contact form
    Inquiry,
    Resource::Inquiries,
    ["name", "email", "message"],
    {
        name("name"): String,
        email("email"): String,
        message("message"): String,
        date_sent("dateSent"): DateTime<Utc>,
        status("status"): InquiryStatus,
    }
);

impl_record!(
    /// A bundled travel package
    Package,
    Resource::Packages,
    ["title", "duration"],
    {
        title("title"): String,
        description("description"): String,
        includes("includes"): Vec<String>,
        price("price"): f64,
        duration("duration"): String,
    }
);

impl_record!(
    Faq,
    Resource::Faqs,
    ["question", "answer"],
    {
        question("question"): String,
        answer("answer"): String,
    }
);

impl_record!(
    News,
    Resource::News,
    ["title", "content"],
    {
        title("title"): String,
        content("content"): String,
        published_at("publishedAt"): DateTime<Utc>,
    }
);

impl_record!(
    /// A newsletter or campaign email sent to subscribers
    Email,
    Resource::Emails,
    ["subject", "to"],
    {
        subject("subject"): String,
        content("content"): String,
        sent_at("sentAt"): DateTime<Utc>,
        to("to"): String,
    }
);

impl_record!(
    /// Site-wide settings, stored as a single record
    Settings,
    Resource::Settings,
    ["siteTitle"],
    {
        site_title("siteTitle"): String,
        contact_email("contactEmail"): String,
        phone_number("phoneNumber"): String,
    }
);

/// Handling state of an inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::Read => "read",
            InquiryStatus::Replied => "replied",
        }
    }
}

impl From<InquiryStatus> for FieldValue {
    fn from(status: InquiryStatus) -> Self {
        FieldValue::from(status.as_str())
    }
}

impl Inquiry {
    /// Mark a new inquiry as read; read and replied inquiries are unchanged
    ///
    /// Returns whether the status changed. The caller persists the change
    /// with `update`.
    pub fn mark_read(&mut self) -> bool {
        if self.status == InquiryStatus::New {
            self.status = InquiryStatus::Read;
            true
        } else {
            false
        }
    }
}
