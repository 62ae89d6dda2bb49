use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything with a stable, unique identifier
pub trait Identified {
    fn id(&self) -> &str;
}

/// Kind of property being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Apartment,
    Villa,
    Penthouse,
    Townhouse,
    Duplex,
    Commercial,
    Land,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::Villa => "Villa",
            Self::Penthouse => "Penthouse",
            Self::Townhouse => "Townhouse",
            Self::Duplex => "Duplex",
            Self::Commercial => "Commercial",
            Self::Land => "Land",
        }
    }
}

/// Market status of a property listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ListingStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
    #[serde(rename = "Off Plan")]
    OffPlan,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForSale => "For Sale",
            Self::ForRent => "For Rent",
            Self::OffPlan => "Off Plan",
        }
    }
}

/// Construction status of a development project
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    #[serde(rename = "Under Construction")]
    UnderConstruction,
    Ready,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnderConstruction => "Under Construction",
            Self::Ready => "Ready",
            Self::ComingSoon => "Coming Soon",
        }
    }
}

/// Editorial category of a blog post
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BlogCategory {
    #[serde(rename = "Market Trends")]
    MarketTrends,
    #[serde(rename = "Buying Guide")]
    BuyingGuide,
    Investment,
    Lifestyle,
    #[serde(rename = "Neighborhood Guide")]
    NeighborhoodGuide,
    #[serde(rename = "Company News")]
    CompanyNews,
}

impl BlogCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarketTrends => "Market Trends",
            Self::BuyingGuide => "Buying Guide",
            Self::Investment => "Investment",
            Self::Lifestyle => "Lifestyle",
            Self::NeighborhoodGuide => "Neighborhood Guide",
            Self::CompanyNews => "Company News",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(PropertyType, ListingStatus, ProjectStatus, BlogCategory);

/// Location information shared by properties and projects
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub district: String,
    pub city: String,
}

/// Physical specification of a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Specs {
    pub beds: u32,
    pub baths: u32,
    pub sqm: f64,
}

/// Core property listing record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: ListingStatus,
    /// Asking price; 0 means "contact for price"
    pub price: u64,
    pub location: Location,
    pub specs: Specs,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Price span of the units in a project (`min <= max`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

/// Development project record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    pub location: Location,
    pub price_range: PriceRange,
    pub total_units: u32,
    pub available_units: u32,
}

/// Blog post record. `slug` is stored already normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: BlogCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    pub excerpt: String,
    pub published_at: NaiveDate,
}

impl Identified for Property {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }
}
