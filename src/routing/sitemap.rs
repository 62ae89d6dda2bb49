//! Sitemap entries built from canonical URLs.

use crate::config::SiteConfig;
use crate::models::{BlogPost, Project, Property};
use crate::routing::canonical::{
    canonical_url, generate_blog_canonical_url, generate_project_canonical_url,
    generate_property_canonical_url,
};
use crate::routing::slug::{encode_blog_path, encode_project_path, encode_property_path};
use crate::routing::{locale, STATIC_PAGES};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
    pub priority: f32,
    pub alternates: Vec<locale::Alternate>,
}

/// Static pages, then properties, projects and posts in store order.
pub fn sitemap_entries(
    config: &SiteConfig,
    properties: &[Property],
    projects: &[Project],
    posts: &[BlogPost],
) -> Vec<SitemapEntry> {
    let origin = config.origin.as_str();
    let entry = |loc: String, path: &str, lastmod: Option<NaiveDate>, priority: f32| SitemapEntry {
        loc,
        lastmod,
        priority,
        alternates: locale::alternates(path, config),
    };

    let statics = STATIC_PAGES
        .iter()
        .map(|page| entry(canonical_url(origin, page.path), page.path, None, page.priority));

    let properties = properties.iter().map(|property| {
        let priority = if property.is_featured { 0.8 } else { 0.7 };
        entry(
            generate_property_canonical_url(origin, property),
            &encode_property_path(property),
            None,
            priority,
        )
    });

    let projects = projects.iter().map(|project| {
        entry(
            generate_project_canonical_url(origin, project),
            &encode_project_path(project),
            None,
            0.7,
        )
    });

    let posts = posts.iter().map(|post| {
        entry(
            generate_blog_canonical_url(origin, post),
            &encode_blog_path(post),
            Some(post.published_at),
            0.6,
        )
    });

    statics.chain(properties).chain(projects).chain(posts).collect()
}
