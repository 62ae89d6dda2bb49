//! Shared fixtures for integration tests.
//!
//! - `store`: the built-in sample catalog
//! - `router`: a `PageRouter` over the sample catalog with default config
//! - `listing` / `post`: terse record builders for scoring scenarios

#![allow(dead_code)] // Not every test crate uses every helper

use chrono::NaiveDate;
use listing_router::models::{
    BlogCategory, BlogPost, ListingStatus, Location, Property, PropertyType, Specs,
};
use listing_router::{InMemoryStore, PageRouter, SiteConfig};
use rstest::fixture;

#[fixture]
pub fn store() -> InMemoryStore {
    InMemoryStore::sample()
}

#[fixture]
pub fn router(store: InMemoryStore) -> PageRouter<InMemoryStore> {
    PageRouter::new(store, SiteConfig::default())
}

pub fn listing(id: &str, kind: PropertyType, district: &str, price: u64) -> Property {
    Property {
        id: id.to_string(),
        title: format!("Listing {}", id),
        property_type: kind,
        status: ListingStatus::ForSale,
        price,
        location: Location {
            district: district.to_string(),
            city: "Erbil".to_string(),
        },
        specs: Specs {
            beds: 3,
            baths: 2,
            sqm: 200.0,
        },
        badges: vec![],
        is_featured: false,
    }
}

pub fn post(id: &str, category: BlogCategory, tags: &[&str]) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        slug: id.to_string(),
        title: format!("Post {}", id),
        category,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        excerpt: String::new(),
        published_at: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
    }
}

pub fn ids<T: listing_router::Identified>(records: &[&T]) -> Vec<String> {
    records.iter().map(|record| record.id().to_string()).collect()
}
