pub mod breadcrumb;
pub mod canonical;
pub mod filter;
pub mod locale;
pub mod redirect;
pub mod sitemap;
pub mod slug;

pub use breadcrumb::{BreadcrumbItem, Breadcrumbs, TrailEntry};
pub use canonical::{
    canonical_url, generate_blog_canonical_url, generate_project_canonical_url,
    generate_property_canonical_url,
};
pub use filter::{encode_filter, listing_path, parse_filter_params, PropertyFilter};
pub use redirect::{get_redirect_url, resolve_canonical_path, resolve_redirect, Redirect};
pub use slug::{
    decode_blog_path, decode_project_path, decode_property_path, encode_blog_path,
    encode_project_path, encode_property_path, normalize_path_segment, slugify,
};

pub const PROPERTIES_ROOT: &str = "/properties";
pub const PROJECTS_ROOT: &str = "/projects";
pub const BLOG_ROOT: &str = "/blog";

/// A page that exists independently of any content record
#[derive(Debug, Clone, Copy)]
pub struct StaticPage {
    pub path: &'static str,
    pub title: &'static str,
    pub priority: f32,
}

pub const STATIC_PAGES: &[StaticPage] = &[
    StaticPage {
        path: "/",
        title: "Home",
        priority: 1.0,
    },
    StaticPage {
        path: PROPERTIES_ROOT,
        title: "Properties",
        priority: 0.9,
    },
    StaticPage {
        path: PROJECTS_ROOT,
        title: "Projects",
        priority: 0.9,
    },
    StaticPage {
        path: BLOG_ROOT,
        title: "Blog",
        priority: 0.7,
    },
    StaticPage {
        path: "/about",
        title: "About Us",
        priority: 0.5,
    },
    StaticPage {
        path: "/contact",
        title: "Contact",
        priority: 0.5,
    },
];
