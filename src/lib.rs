//! Content routing and relevance engine for a real-estate listings site:
//! SEO slugs, search-filter query strings, legacy redirects, breadcrumbs and
//! related-content scoring over an external content store.

pub mod config;
pub mod models;
pub mod pages;
pub mod relevance;
pub mod routing;
pub mod store;

pub use config::SiteConfig;
pub use models::{BlogPost, Identified, Project, Property};
pub use pages::{PageResolution, PageRouter};
pub use store::{ContentStore, InMemoryStore};
