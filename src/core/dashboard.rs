//! Summary figures for the dashboard stat cards

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::record::Resource;
use crate::resources::{Hotel, Inquiry, InquiryStatus, Review, Tour, Yacht};
use crate::storage::ResourceStore;

/// Figures shown on the dashboard, computed from the live store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_hotels: usize,
    pub available_hotels: usize,
    pub available_yachts: usize,
    pub total_tours: usize,
    pub new_inquiries: usize,
    /// `None` when there are no reviews
    pub average_rating: Option<f64>,
    /// Record count of every resource, in dashboard order
    pub counts: IndexMap<&'static str, usize>,
}

impl DashboardSummary {
    pub fn collect(store: &ResourceStore) -> Self {
        let hotels = store.records::<Hotel>();
        let reviews = store.records::<Review>();

        let average_rating = (!reviews.is_empty()).then(|| {
            let sum: u64 = reviews.iter().map(|review| u64::from(review.rating)).sum();
            sum as f64 / reviews.len() as f64
        });

        Self {
            total_hotels: hotels.len(),
            available_hotels: hotels.iter().filter(|hotel| hotel.availability).count(),
            available_yachts: store
                .records::<Yacht>()
                .iter()
                .filter(|yacht| yacht.available)
                .count(),
            total_tours: store.records::<Tour>().len(),
            new_inquiries: store
                .records::<Inquiry>()
                .iter()
                .filter(|inquiry| inquiry.status == InquiryStatus::New)
                .count(),
            average_rating,
            counts: Resource::ALL
                .into_iter()
                .map(|resource| (resource.as_str(), store.count(resource)))
                .collect(),
        }
    }
}
