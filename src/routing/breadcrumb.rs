//! Breadcrumb trails and their schema.org `BreadcrumbList` markup.

use crate::routing::canonical::canonical_url;
use crate::routing::filter::title_case_word;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const HOME_LABEL: &str = "Home";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    /// Site-relative path or absolute URL
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Visual breadcrumb entry; the current page has no link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailEntry {
    pub position: usize,
    pub name: String,
    pub href: Option<String>,
    pub current: bool,
}

/// Ordered breadcrumb trail, root first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Breadcrumbs {
    items: Vec<BreadcrumbItem>,
}

impl Breadcrumbs {
    pub fn from_items(items: Vec<BreadcrumbItem>) -> Self {
        Self { items }
    }

    /// Derive a trail from a raw path: `Home` followed by one title-cased
    /// entry per non-empty segment, each linking to its accumulated prefix.
    /// Any query string is ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split('?').next().unwrap_or_default();
        let mut items = vec![BreadcrumbItem::new(HOME_LABEL, "/")];
        let mut prefix = String::new();

        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            prefix.push('/');
            prefix.push_str(segment);
            items.push(BreadcrumbItem::new(title_case_segment(segment), prefix.clone()));
        }

        Self { items }
    }

    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }

    pub fn trail(&self) -> Vec<TrailEntry> {
        let last = self.items.len().saturating_sub(1);

        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| TrailEntry {
                position: index + 1,
                name: item.name.clone(),
                href: (index != last).then(|| item.url.clone()),
                current: index == last,
            })
            .collect()
    }

    /// schema.org `BreadcrumbList` JSON-LD node with absolute item URLs
    pub fn to_json_ld(&self, origin: &str) -> Value {
        let elements: Vec<Value> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                json!({
                    "@type": "ListItem",
                    "position": index + 1,
                    "name": item.name,
                    "item": absolute(origin, &item.url),
                })
            })
            .collect();

        json!({
            "@context": "https://schema.org",
            "@type": "BreadcrumbList",
            "itemListElement": elements,
        })
    }
}

fn title_case_segment(segment: &str) -> String {
    segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn absolute(origin: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        canonical_url(origin, url)
    }
}
