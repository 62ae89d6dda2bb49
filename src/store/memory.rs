use crate::models::{
    BlogCategory, BlogPost, ListingStatus, Location, PriceRange, Project, ProjectStatus, Property,
    PropertyType, Specs,
};
use crate::store::traits::ContentStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Content store backed by in-memory collections.
/// Also the on-disk fixture format: `{ "properties": [], "projects": [], "posts": [] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InMemoryStore {
    pub properties: Vec<Property>,
    pub projects: Vec<Project>,
    pub posts: Vec<BlogPost>,
}

impl InMemoryStore {
    pub fn new(properties: Vec<Property>, projects: Vec<Project>, posts: Vec<BlogPost>) -> Self {
        Self {
            properties,
            projects,
            posts,
        }
    }

    /// Load fixtures from a JSON file
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read fixtures from {}", path.display()))?;
        let store: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse fixtures in {}", path.display()))?;

        info!(
            "📂 Loaded {} properties, {} projects, {} posts from {}",
            store.properties.len(),
            store.projects.len(),
            store.posts.len(),
            path.display()
        );

        Ok(store)
    }

    /// Built-in Erbil catalog for demos and tests
    pub fn sample() -> Self {
        Self::new(sample_properties(), sample_projects(), sample_posts())
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn properties(&self) -> Result<Vec<Property>> {
        Ok(self.properties.clone())
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    async fn posts(&self) -> Result<Vec<BlogPost>> {
        Ok(self.posts.clone())
    }

    fn source_name(&self) -> &'static str {
        "in-memory"
    }
}

fn location(district: &str, city: &str) -> Location {
    Location {
        district: district.to_string(),
        city: city.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn property(
    id: &str,
    title: &str,
    property_type: PropertyType,
    status: ListingStatus,
    price: u64,
    district: &str,
    (beds, baths, sqm): (u32, u32, f64),
    badges: &[&str],
    is_featured: bool,
) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        property_type,
        status,
        price,
        location: location(district, "Erbil"),
        specs: Specs { beds, baths, sqm },
        badges: badges.iter().map(|badge| badge.to_string()).collect(),
        is_featured,
    }
}

fn sample_properties() -> Vec<Property> {
    use ListingStatus::*;
    use PropertyType::*;

    vec![
        property(
            "v-101",
            "Family Villa with Garden",
            Villa,
            ForSale,
            300_000,
            "Gulan",
            (4, 3, 320.0),
            &["Garden"],
            true,
        ),
        property(
            "a-201",
            "Gulan Park Apartment",
            Apartment,
            ForSale,
            150_000,
            "Gulan",
            (2, 2, 140.0),
            &[],
            false,
        ),
        property(
            "v-102",
            "Ankawa Pool Villa",
            Villa,
            ForSale,
            420_000,
            "Ankawa",
            (5, 4, 400.0),
            &["Luxury", "Pool"],
            true,
        ),
        property(
            "d-601",
            "Bakhtiari Duplex",
            Duplex,
            ForSale,
            280_000,
            "Bakhtiari",
            (3, 3, 260.0),
            &[],
            false,
        ),
        property(
            "t-401",
            "Ankawa Townhouse",
            Townhouse,
            ForRent,
            1_200,
            "Ankawa",
            (3, 2, 210.0),
            &[],
            false,
        ),
        property(
            "a-202",
            "Furnished Gulan Flat",
            Apartment,
            ForRent,
            900,
            "Gulan",
            (1, 1, 85.0),
            &["Furnished"],
            false,
        ),
        property(
            "ph-301",
            "Empire Sky Penthouse",
            Penthouse,
            OffPlan,
            650_000,
            "Empire",
            (4, 4, 380.0),
            &["Luxury"],
            true,
        ),
        property(
            "c-501",
            "Downtown Retail Unit",
            Commercial,
            ForSale,
            0,
            "Downtown",
            (0, 1, 120.0),
            &[],
            false,
        ),
    ]
}

fn sample_projects() -> Vec<Project> {
    let project = |id: &str,
                   name: &str,
                   status: ProjectStatus,
                   (district, city): (&str, &str),
                   (min, max): (u64, u64),
                   (total, available): (u32, u32)| Project {
        id: id.to_string(),
        name: name.to_string(),
        status,
        location: location(district, city),
        price_range: PriceRange { min, max },
        total_units: total,
        available_units: available,
    };

    vec![
        project(
            "prj-1",
            "Gulan Towers",
            ProjectStatus::UnderConstruction,
            ("Gulan", "Erbil"),
            (120_000, 450_000),
            (300, 120),
        ),
        project(
            "prj-2",
            "Ankawa Residences",
            ProjectStatus::Ready,
            ("Ankawa", "Erbil"),
            (90_000, 300_000),
            (150, 12),
        ),
        project(
            "prj-3",
            "Dream City Phase 3",
            ProjectStatus::ComingSoon,
            ("Dream City", "Erbil"),
            (200_000, 900_000),
            (500, 500),
        ),
        project(
            "prj-4",
            "Duhok Heights",
            ProjectStatus::UnderConstruction,
            ("Masike", "Duhok"),
            (70_000, 180_000),
            (220, 180),
        ),
    ]
}

fn sample_posts() -> Vec<BlogPost> {
    let post = |id: &str,
                slug: &str,
                title: &str,
                category: BlogCategory,
                tags: &[&str],
                (y, m, d): (i32, u32, u32)| BlogPost {
        id: id.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        category,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        excerpt: format!("{}.", title),
        published_at: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    };

    vec![
        post(
            "b-1",
            "erbil-property-market-2024",
            "Erbil Property Market Outlook 2024",
            BlogCategory::MarketTrends,
            &["Erbil", "Prices", "Investment"],
            (2024, 1, 15),
        ),
        post(
            "b-2",
            "buying-your-first-villa",
            "Buying Your First Villa",
            BlogCategory::BuyingGuide,
            &["Villa", "Mortgage", "Erbil"],
            (2024, 2, 3),
        ),
        post(
            "b-3",
            "off-plan-investing-guide",
            "A Guide to Off-Plan Investing",
            BlogCategory::Investment,
            &["Off Plan", "ROI"],
            (2024, 3, 9),
        ),
        post(
            "b-4",
            "living-in-gulan",
            "Living in Gulan",
            BlogCategory::NeighborhoodGuide,
            &["Gulan", "Schools", "Family"],
            (2024, 4, 21),
        ),
        post(
            "b-5",
            "luxury-homes-ankawa",
            "Luxury Homes of Ankawa",
            BlogCategory::Lifestyle,
            &["Luxury", "Ankawa", "Villa"],
            (2024, 5, 30),
        ),
        post(
            "b-6",
            "new-office-opening",
            "We Opened a New Office",
            BlogCategory::CompanyNews,
            &["Team"],
            (2024, 6, 12),
        ),
    ]
}
