//! Request resolution: redirect check, path decoding, record lookup and
//! related-content assembly for every page the site serves.

use crate::config::SiteConfig;
use crate::models::{BlogPost, Project, Property};
use crate::relevance::{
    get_posts_for_project, get_posts_for_property, get_related_projects, get_related_properties,
    get_you_may_also_like, project_for_property,
};
use crate::routing::breadcrumb::{BreadcrumbItem, Breadcrumbs, TrailEntry, HOME_LABEL};
use crate::routing::locale::{self, Alternate};
use crate::routing::{
    canonical_url, decode_blog_path, decode_project_path, decode_property_path, encode_blog_path,
    encode_project_path, encode_property_path, listing_path, parse_filter_params, resolve_redirect,
    PropertyFilter, BLOG_ROOT, PROJECTS_ROOT, PROPERTIES_ROOT, STATIC_PAGES,
};
use crate::store::ContentStore;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

/// SEO and navigation data shared by every rendered page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub locale: String,
    pub canonical_url: String,
    pub alternates: Vec<Alternate>,
    pub breadcrumbs: Vec<TrailEntry>,
    pub structured_data: Value,
}

/// Outcome of resolving one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageResolution {
    Redirect {
        target: String,
        rule: &'static str,
    },
    Static {
        title: String,
        meta: PageMeta,
    },
    PropertyList {
        filter: PropertyFilter,
        properties: Vec<Property>,
        meta: PageMeta,
    },
    PropertyDetail {
        property: Property,
        related: Vec<Property>,
        project: Option<Project>,
        posts: Vec<BlogPost>,
        meta: PageMeta,
    },
    ProjectList {
        projects: Vec<Project>,
        meta: PageMeta,
    },
    ProjectDetail {
        project: Project,
        related: Vec<Project>,
        posts: Vec<BlogPost>,
        meta: PageMeta,
    },
    BlogList {
        posts: Vec<BlogPost>,
        meta: PageMeta,
    },
    BlogDetail {
        post: BlogPost,
        related: Vec<BlogPost>,
        meta: PageMeta,
    },
    NotFound {
        path: String,
    },
}

/// Resolves raw request paths against a content store
pub struct PageRouter<S> {
    store: S,
    config: SiteConfig,
}

impl<S: ContentStore> PageRouter<S> {
    pub fn new(store: S, config: SiteConfig) -> Self {
        Self { store, config }
    }

    /// Resolve a raw request (`/ar/properties?type=villa`, `/blog/x`, ...)
    pub async fn resolve(&self, request: &str) -> Result<PageResolution> {
        let split = locale::split_locale(request, &self.config.locales);
        let locale = split
            .locale
            .unwrap_or_else(|| self.config.default_locale.clone());
        let (path, query) = match split.path.split_once('?') {
            Some((path, query)) => (path.to_string(), query.to_string()),
            None => (split.path.clone(), String::new()),
        };

        if let Some(redirect) = resolve_redirect(&path) {
            let target = append_query(&redirect.target, &query);
            let target = locale::localized_path(&target, &locale, &self.config.default_locale);
            info!(from = request, to = %target, rule = redirect.rule, "redirecting");
            return Ok(PageResolution::Redirect {
                target,
                rule: redirect.rule,
            });
        }

        let page = Page {
            path: &path,
            locale: &locale,
        };

        let resolution = match section(&path) {
            ("", _) => self.static_page("/", &page),
            (PROPERTIES_ROOT, None) => self.property_list(&query, &page).await?,
            (PROPERTIES_ROOT, Some(_)) => self.property_detail(&page).await?,
            (PROJECTS_ROOT, None) => self.project_list(&page).await?,
            (PROJECTS_ROOT, Some(_)) => self.project_detail(&page).await?,
            (BLOG_ROOT, None) => self.blog_list(&page).await?,
            (BLOG_ROOT, Some(_)) => self.blog_detail(&page).await?,
            (root, None) => self.static_page(root, &page),
            _ => not_found(&path),
        };

        if let PageResolution::NotFound { path } = &resolution {
            info!(path = %path, "page not found");
        } else {
            debug!(path = %path, locale = %locale, "page resolved");
        }

        Ok(resolution)
    }

    fn static_page(&self, path: &str, page: &Page<'_>) -> PageResolution {
        match STATIC_PAGES.iter().find(|candidate| candidate.path == path) {
            Some(found) => PageResolution::Static {
                title: found.title.to_string(),
                meta: self.meta(page, path, Breadcrumbs::from_path(path)),
            },
            None => not_found(path),
        }
    }

    async fn property_list(&self, query: &str, page: &Page<'_>) -> Result<PageResolution> {
        let filter = parse_filter_params(query);
        let properties: Vec<Property> = self
            .store
            .properties()
            .await?
            .into_iter()
            .filter(|property| filter.matches(property))
            .collect();

        let canonical_path = listing_path(&filter);
        let meta = self.meta(page, &canonical_path, Breadcrumbs::from_path(PROPERTIES_ROOT));

        Ok(PageResolution::PropertyList {
            filter,
            properties,
            meta,
        })
    }

    async fn property_detail(&self, page: &Page<'_>) -> Result<PageResolution> {
        let id = decode_property_path(page.path);
        let Some(property) = self.store.property(&id).await? else {
            return Ok(not_found(page.path));
        };

        let limit = self.config.related_limit;
        let pool = self.store.properties().await?;
        let projects = self.store.projects().await?;
        let posts = self.store.posts().await?;

        let related = get_related_properties(&property, &pool, limit)
            .into_iter()
            .cloned()
            .collect();
        let project = project_for_property(&property, &projects).cloned();
        let linked_posts = get_posts_for_property(&property, &posts, limit)
            .into_iter()
            .cloned()
            .collect();

        let crumbs = Breadcrumbs::from_items(vec![
            BreadcrumbItem::new(HOME_LABEL, "/"),
            BreadcrumbItem::new("Properties", PROPERTIES_ROOT),
            BreadcrumbItem::new(property.title.clone(), encode_property_path(&property)),
        ]);
        let meta = self.meta(page, &encode_property_path(&property), crumbs);

        Ok(PageResolution::PropertyDetail {
            property,
            related,
            project,
            posts: linked_posts,
            meta,
        })
    }

    async fn project_list(&self, page: &Page<'_>) -> Result<PageResolution> {
        let projects = self.store.projects().await?;
        let meta = self.meta(page, PROJECTS_ROOT, Breadcrumbs::from_path(PROJECTS_ROOT));

        Ok(PageResolution::ProjectList { projects, meta })
    }

    async fn project_detail(&self, page: &Page<'_>) -> Result<PageResolution> {
        let slug = decode_project_path(page.path, &self.config.known_cities);
        let Some(project) = self.store.project_by_slug(&slug).await? else {
            return Ok(not_found(page.path));
        };

        let limit = self.config.related_limit;
        let pool = self.store.projects().await?;
        let posts = self.store.posts().await?;

        let related = get_related_projects(&project, &pool, limit)
            .into_iter()
            .cloned()
            .collect();
        let linked_posts = get_posts_for_project(&project, &posts, limit)
            .into_iter()
            .cloned()
            .collect();

        let crumbs = Breadcrumbs::from_items(vec![
            BreadcrumbItem::new(HOME_LABEL, "/"),
            BreadcrumbItem::new("Projects", PROJECTS_ROOT),
            BreadcrumbItem::new(project.name.clone(), encode_project_path(&project)),
        ]);
        let meta = self.meta(page, &encode_project_path(&project), crumbs);

        Ok(PageResolution::ProjectDetail {
            project,
            related,
            posts: linked_posts,
            meta,
        })
    }

    async fn blog_list(&self, page: &Page<'_>) -> Result<PageResolution> {
        let posts = self.store.posts().await?;
        let meta = self.meta(page, BLOG_ROOT, Breadcrumbs::from_path(BLOG_ROOT));

        Ok(PageResolution::BlogList { posts, meta })
    }

    async fn blog_detail(&self, page: &Page<'_>) -> Result<PageResolution> {
        let slug = decode_blog_path(page.path);
        let Some(post) = self.store.post_by_slug(&slug).await? else {
            return Ok(not_found(page.path));
        };

        let pool = self.store.posts().await?;
        let related = get_you_may_also_like(&post, &pool, self.config.related_limit)
            .into_iter()
            .cloned()
            .collect();

        let crumbs = Breadcrumbs::from_items(vec![
            BreadcrumbItem::new(HOME_LABEL, "/"),
            BreadcrumbItem::new("Blog", BLOG_ROOT),
            BreadcrumbItem::new(post.title.clone(), encode_blog_path(&post)),
        ]);
        let meta = self.meta(page, &encode_blog_path(&post), crumbs);

        Ok(PageResolution::BlogDetail {
            post,
            related,
            meta,
        })
    }

    fn meta(&self, page: &Page<'_>, canonical_path: &str, crumbs: Breadcrumbs) -> PageMeta {
        let config = &self.config;
        let localized = locale::localized_path(canonical_path, page.locale, &config.default_locale);

        PageMeta {
            locale: page.locale.to_string(),
            canonical_url: canonical_url(&config.origin, &localized),
            alternates: locale::alternates(canonical_path, config),
            breadcrumbs: crumbs.trail(),
            structured_data: crumbs.to_json_ld(&config.origin),
        }
    }
}

/// The part of a request being resolved
struct Page<'a> {
    path: &'a str,
    locale: &'a str,
}

/// Split `/section/rest` into (`/section`, `Some(rest)`); root gives `("", None)`.
fn section(path: &str) -> (&str, Option<&str>) {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return ("", None);
    }

    match trimmed.find('/') {
        Some(index) => (&path[..path.len() - trimmed.len() + index], Some(&trimmed[index + 1..])),
        None => (path, None),
    }
}

fn append_query(target: &str, query: &str) -> String {
    if query.is_empty() {
        target.to_string()
    } else if target.contains('?') {
        format!("{}&{}", target, query)
    } else {
        format!("{}?{}", target, query)
    }
}

fn not_found(path: &str) -> PageResolution {
    PageResolution::NotFound {
        path: path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_split() {
        assert_eq!(section("/"), ("", None));
        assert_eq!(section("/blog"), ("/blog", None));
        assert_eq!(section("/blog/living-in-gulan"), ("/blog", Some("living-in-gulan")));
    }

    #[test]
    fn test_append_query() {
        assert_eq!(append_query("/properties", ""), "/properties");
        assert_eq!(append_query("/properties", "beds=2+"), "/properties?beds=2+");
        assert_eq!(
            append_query("/properties?type=villa", "beds=2+"),
            "/properties?type=villa&beds=2+"
        );
    }
}
