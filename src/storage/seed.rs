//! Fixture generators for the initial store contents
//!
//! Each generator produces records with every field populated. Counters
//! give ids and numbered titles, categorical fields are drawn uniformly from
//! fixed vocabularies, numbers from fixed half-open ranges, past dates from
//! the last 365 days and future dates from the next 90 days.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SiteSettings;
use crate::core::record::RecordId;
use crate::resources::{
    Article, Email, Faq, Hotel, Inquiry, InquiryStatus, News, Package, Review, Settings, Tour,
    Yacht,
};

pub const HOTEL_LOCATIONS: [&str; 6] = [
    "Cairo",
    "Alexandria",
    "Luxor",
    "Aswan",
    "Hurghada",
    "Sharm El Sheikh",
];
pub const YACHT_TYPES: [&str; 5] = ["Luxury", "Sport", "Cruiser", "Sailboat", "Catamaran"];
pub const TOUR_DURATIONS: [&str; 5] = ["Half-day", "Full-day", "2 days", "3 days", "Week-long"];
pub const ARTICLE_AUTHORS: [&str; 4] = [
    "Mohamed Ahmed",
    "Sarah Hassan",
    "Ahmed Ali",
    "Nour Ibrahim",
];
pub const REVIEWER_NAMES: [&str; 5] = [
    "John Smith",
    "Maria Garcia",
    "Alex Johnson",
    "Emma Williams",
    "Mohammed Ali",
];
pub const REVIEW_TARGETS: [&str; 3] = ["hotel", "yacht", "tour"];
pub const INQUIRER_NAMES: [&str; 5] = [
    "Samuel Brown",
    "Jessica Lee",
    "Robert Chen",
    "Linda Kim",
    "David Lopez",
];
pub const PACKAGE_DURATIONS: [&str; 4] = ["3 days", "5 days", "7 days", "10 days"];
pub const EMAIL_SUBJECTS: [&str; 5] = [
    "Newsletter",
    "Special Offer",
    "Holiday Package",
    "Exclusive Deal",
    "New Tour",
];

const HOTEL_IMAGES: [&str; 3] = [
    "https://images.pexels.com/photos/258154/pexels-photo-258154.jpeg",
    "https://images.pexels.com/photos/2034335/pexels-photo-2034335.jpeg",
    "https://images.pexels.com/photos/2096983/pexels-photo-2096983.jpeg",
];
const YACHT_IMAGES: [&str; 3] = [
    "https://images.pexels.com/photos/163236/luxury-yacht-boat-speed-water-163236.jpeg",
    "https://images.pexels.com/photos/358332/pexels-photo-358332.jpeg",
    "https://images.pexels.com/photos/2402705/pexels-photo-2402705.jpeg",
];
const PACKAGE_INCLUDES: [&str; 5] = [
    "Hotel accommodation",
    "Daily breakfast",
    "Guided tours",
    "Airport transfers",
    "Nile cruise",
];

const HOTEL_DESCRIPTION: &str = "Luxury hotel with beautiful views and excellent service. \
    Located in the heart of the city, close to major attractions.";
const TOUR_DESCRIPTION: &str =
    "Explore the ancient wonders and beautiful landscapes with our expert guides.";
const ARTICLE_CONTENT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Sed euismod, nisl vel ultricies lacinia, nunc est ultricies nisl, \
    vel ultricies nisl est vel ultricies.";
const REVIEW_COMMENT: &str = "This was an amazing experience. \
    The service was excellent and I would definitely recommend it.";
const PACKAGE_DESCRIPTION: &str =
    "Complete travel package including accommodation, tours, and transportation.";
const NEWS_CONTENT: &str = "This is a news article about our latest offerings and updates. \
    Stay informed about what's happening.";
const INQUIRY_MESSAGE: &str = "I would like to inquire about your services. \
    Please provide more information about availability and pricing.";
const EMAIL_CONTENT: &str = "Email content with information about our services and special offers.";

/// Days back within which past dates fall
pub const PAST_WINDOW_DAYS: i64 = 365;
/// Days ahead within which future dates fall
pub const FUTURE_WINDOW_DAYS: i64 = 90;
/// Number of departure dates generated per tour
pub const TOUR_DATES: usize = 5;

/// Randomized fixture generator
pub struct Seeder {
    rng: StdRng,
    now: DateTime<Utc>,
}

impl Seeder {
    /// Create a generator, reproducible when a seed is given
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            now: Utc::now(),
        }
    }

    /// Use a fixed reference time for date fields
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn hotels(&mut self, count: usize) -> Vec<Hotel> {
        numbered(count)
            .map(|i| Hotel {
                id: i,
                name: format!("Hotel {}", i),
                description: HOTEL_DESCRIPTION.to_string(),
                location: self.pick(&HOTEL_LOCATIONS),
                price_per_night: self.rng.gen_range(100..400) as f64,
                images: strings(&HOTEL_IMAGES),
                availability: self.rng.gen_bool(0.8),
                ..Default::default()
            })
            .collect()
    }

    pub fn yachts(&mut self, count: usize) -> Vec<Yacht> {
        numbered(count)
            .map(|i| Yacht {
                id: i,
                name: format!("Yacht {}", i),
                yacht_type: self.pick(&YACHT_TYPES),
                capacity: self.rng.gen_range(5..25),
                price_per_hour: self.rng.gen_range(200..700) as f64,
                images: strings(&YACHT_IMAGES),
                available: self.rng.gen_bool(0.7),
                ..Default::default()
            })
            .collect()
    }

    pub fn tours(&mut self, count: usize) -> Vec<Tour> {
        numbered(count)
            .map(|i| Tour {
                id: i,
                title: format!("Tour {}", i),
                description: TOUR_DESCRIPTION.to_string(),
                duration: self.pick(&TOUR_DURATIONS),
                price: self.rng.gen_range(50..250) as f64,
                available_dates: (0..TOUR_DATES).map(|_| self.future_date()).collect(),
                ..Default::default()
            })
            .collect()
    }

    pub fn articles(&mut self, count: usize) -> Vec<Article> {
        numbered(count)
            .map(|i| Article {
                id: i,
                title: format!("Article {}", i),
                content: ARTICLE_CONTENT.to_string(),
                author: self.pick(&ARTICLE_AUTHORS),
                published_at: self.past_date(),
                ..Default::default()
            })
            .collect()
    }

    pub fn reviews(&mut self, count: usize) -> Vec<Review> {
        numbered(count)
            .map(|i| Review {
                id: i,
                user_name: self.pick(&REVIEWER_NAMES),
                rating: self.rng.gen_range(1..=5),
                comment: REVIEW_COMMENT.to_string(),
                related_to: self.pick(&REVIEW_TARGETS),
                related_id: self.rng.gen_range(1..=10),
                ..Default::default()
            })
            .collect()
    }

    pub fn inquiries(&mut self, count: usize) -> Vec<Inquiry> {
        numbered(count)
            .map(|i| Inquiry {
                id: i,
                name: self.pick(&INQUIRER_NAMES),
                email: format!("email{}@example.com", i),
                message: INQUIRY_MESSAGE.to_string(),
                date_sent: self.past_date(),
                status: self.inquiry_status(),
                ..Default::default()
            })
            .collect()
    }

    pub fn packages(&mut self, count: usize) -> Vec<Package> {
        numbered(count)
            .map(|i| Package {
                id: i,
                title: format!("Package {}", i),
                description: PACKAGE_DESCRIPTION.to_string(),
                includes: strings(&PACKAGE_INCLUDES),
                price: self.rng.gen_range(500..1500) as f64,
                duration: self.pick(&PACKAGE_DURATIONS),
                ..Default::default()
            })
            .collect()
    }

    pub fn faqs(&mut self, count: usize) -> Vec<Faq> {
        numbered(count)
            .map(|i| Faq {
                id: i,
                question: format!("Frequently Asked Question {}?", i),
                answer: format!(
                    "This is the answer to the frequently asked question number {}. \
                     We provide detailed information to help our customers.",
                    i
                ),
                ..Default::default()
            })
            .collect()
    }

    pub fn news(&mut self, count: usize) -> Vec<News> {
        numbered(count)
            .map(|i| News {
                id: i,
                title: format!("News Article {}", i),
                content: NEWS_CONTENT.to_string(),
                published_at: self.past_date(),
                ..Default::default()
            })
            .collect()
    }

    pub fn emails(&mut self, count: usize) -> Vec<Email> {
        numbered(count)
            .map(|i| Email {
                id: i,
                subject: format!("{} - {}", self.pick(&EMAIL_SUBJECTS), i),
                content: EMAIL_CONTENT.to_string(),
                sent_at: self.past_date(),
                to: "subscribers@list.com".to_string(),
                ..Default::default()
            })
            .collect()
    }

    pub fn settings(&mut self, site: &SiteSettings) -> Vec<Settings> {
        vec![Settings {
            id: 1,
            site_title: site.site_title.clone(),
            contact_email: site.contact_email.clone(),
            phone_number: site.phone_number.clone(),
            ..Default::default()
        }]
    }

    fn pick(&mut self, vocabulary: &[&str]) -> String {
        vocabulary[self.rng.gen_range(0..vocabulary.len())].to_string()
    }

    fn past_date(&mut self) -> DateTime<Utc> {
        let seconds = self.rng.gen_range(0..PAST_WINDOW_DAYS * 86_400);
        self.now - Duration::seconds(seconds)
    }

    fn future_date(&mut self) -> DateTime<Utc> {
        let days = self.rng.gen_range(0..FUTURE_WINDOW_DAYS);
        self.now + Duration::days(days)
    }

    fn inquiry_status(&mut self) -> InquiryStatus {
        if self.rng.gen_bool(0.3) {
            InquiryStatus::Replied
        } else if self.rng.gen_bool(0.5) {
            InquiryStatus::Read
        } else {
            InquiryStatus::New
        }
    }
}

fn numbered(count: usize) -> impl Iterator<Item = RecordId> {
    1..=count as RecordId
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn seeder() -> Seeder {
        Seeder::new(Some(7)).at(Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_hotels_shape_and_ranges() {
        let hotels = seeder().hotels(15);
        assert_eq!(hotels.len(), 15);

        for (index, hotel) in hotels.iter().enumerate() {
            assert_eq!(hotel.id, index as RecordId + 1);
            assert_eq!(hotel.name, format!("Hotel {}", hotel.id));
            assert!(HOTEL_LOCATIONS.contains(&hotel.location.as_str()));
            assert!((100.0..400.0).contains(&hotel.price_per_night));
            assert_eq!(hotel.images.len(), 3);
        }
    }

    #[test]
    fn test_yachts_ranges() {
        for yacht in seeder().yachts(50) {
            assert!(YACHT_TYPES.contains(&yacht.yacht_type.as_str()));
            assert!((5..25).contains(&yacht.capacity));
            assert!((200.0..700.0).contains(&yacht.price_per_hour));
        }
    }

    #[test]
    fn test_tour_dates_in_future_window() {
        let mut seeder = seeder();
        let now = seeder.now;
        for tour in seeder.tours(20) {
            assert_eq!(tour.available_dates.len(), TOUR_DATES);
            for date in tour.available_dates {
                assert!(date >= now);
                assert!(date < now + Duration::days(FUTURE_WINDOW_DAYS));
            }
        }
    }

    #[test]
    fn test_past_dates_in_window() {
        let mut seeder = seeder();
        let now = seeder.now;
        for inquiry in seeder.inquiries(25) {
            assert!(inquiry.date_sent <= now);
            assert!(inquiry.date_sent > now - Duration::days(PAST_WINDOW_DAYS));
            assert_eq!(inquiry.email, format!("email{}@example.com", inquiry.id));
        }
    }

    #[test]
    fn test_review_ratings_inclusive_range() {
        let reviews = seeder().reviews(200);
        assert!(reviews.iter().all(|r| (1..=5).contains(&r.rating)));
        assert!(reviews.iter().all(|r| (1..=10).contains(&r.related_id)));
        assert!(reviews.iter().any(|r| r.rating == 5));
        assert!(reviews.iter().any(|r| r.rating == 1));
    }

    #[test]
    fn test_same_seed_same_values() {
        let a = seeder().emails(10);
        let b = seeder().emails(10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_settings_from_site() {
        let settings = seeder().settings(&SiteSettings::default());
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].id, 1);
        assert_eq!(settings[0].site_title, "Egipto Viajeros");
    }
}
