//! In-memory storage of resource records

pub mod collection;
pub mod seed;
pub mod store;

pub use collection::Collection;
pub use seed::Seeder;
pub use store::{ResourceStore, Stored};
