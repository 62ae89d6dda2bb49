//! Slug codec: record <-> URL path segment.
//!
//! Every function here is total. Degenerate input yields a syntactically
//! valid (possibly empty) string instead of an error, so routing can never
//! block page rendering.

use crate::models::{BlogPost, ListingStatus, Project, Property};
use crate::routing::{BLOG_ROOT, PROJECTS_ROOT, PROPERTIES_ROOT};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static PATH_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("valid separator pattern"));
static PATH_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-/]").expect("valid path charset pattern"));
static SLUG_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("valid slug charset pattern"));
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static HYPHEN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("valid hyphen pattern"));
static SLASH_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/{2,}").expect("valid slash pattern"));

/// Token separating the property type from its status in a property path
const FOR_TOKEN: &str = "for";

/// Tokens following `for` before the identifier starts: for, status, district, city
const TOKENS_AFTER_TYPE: usize = 4;

/// Normalize a raw path (or path segment) into canonical form.
///
/// Lowercases, turns whitespace/underscore runs into a hyphen, drops anything
/// outside `[a-z0-9-/]`, collapses hyphen and slash runs and strips a trailing
/// slash. The root path `/` is preserved. Idempotent.
pub fn normalize_path_segment(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = PATH_SEPARATORS.replace_all(&lowered, "-");
    let stripped = PATH_DISALLOWED.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUNS.replace_all(&stripped, "-");
    let mut normalized = SLASH_RUNS.replace_all(&collapsed, "/").into_owned();

    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}

/// Turn human-readable text into a slug.
///
/// Punctuation-only or empty input yields an empty string; callers decide
/// what to fall back to.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = SLUG_DISALLOWED.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUNS.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");

    collapsed.trim_matches('-').to_string()
}

/// Status token used inside property paths (`sale`, `rent`, `off-plan`)
pub fn status_token(status: ListingStatus) -> String {
    match status {
        ListingStatus::ForSale => "sale".to_string(),
        ListingStatus::ForRent => "rent".to_string(),
        other => slugify(other.as_str()),
    }
}

/// Build the SEO path of a property, e.g.
/// `/properties/villa-for-sale-gulan-erbil-v-101`.
///
/// The identifier is appended verbatim as the final token.
pub fn encode_property_path(property: &Property) -> String {
    let type_slug = slugify(property.property_type.as_str());
    let status = status_token(property.status);
    let location_slug = slugify(&format!(
        "{} {}",
        property.location.district, property.location.city
    ));

    let segment = [
        type_slug.as_str(),
        FOR_TOKEN,
        status.as_str(),
        location_slug.as_str(),
        property.id.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join("-");

    format!("{}/{}", PROPERTIES_ROOT, segment)
}

/// Recover a property identifier from its path.
///
/// Skips the fixed `{for, status, district, city}` tokens after the first
/// `for` token. Paths without a `for` token are pre-migration bare-ID links
/// and are returned unchanged. Multi-word districts or cities and `off-plan`
/// statuses shift the offset and decode to the wrong identifier.
pub fn decode_property_path(path: &str) -> String {
    let remainder = strip_section(path, PROPERTIES_ROOT);
    let tokens: Vec<&str> = remainder.split('-').collect();

    match tokens.iter().position(|token| *token == FOR_TOKEN) {
        Some(index) => tokens
            .get(index + TOKENS_AFTER_TYPE..)
            .map(|rest| rest.join("-"))
            .unwrap_or_default(),
        None => {
            debug!(segment = remainder, "bare property id path");
            remainder.to_string()
        }
    }
}

/// Build the SEO path of a project, e.g. `/projects/gulan-towers-erbil`.
///
/// Falls back to the identifier when the name slugifies to nothing.
pub fn encode_project_path(project: &Project) -> String {
    let name_slug = match slugify(&project.name) {
        slug if slug.is_empty() => project.id.clone(),
        slug => slug,
    };
    let city_slug = slugify(&project.location.city);

    if city_slug.is_empty() {
        format!("{}/{}", PROJECTS_ROOT, name_slug)
    } else {
        format!("{}/{}-{}", PROJECTS_ROOT, name_slug, city_slug)
    }
}

/// Recover a project's name slug from its path by stripping a trailing
/// `-<city>` for the first matching known city.
///
/// A project whose name itself ends in a city token loses that token.
pub fn decode_project_path(path: &str, known_cities: &[String]) -> String {
    let remainder = strip_section(path, PROJECTS_ROOT);

    for city in known_cities {
        let suffix = format!("-{}", slugify(city));
        if suffix.len() > 1 && remainder.len() > suffix.len() && remainder.ends_with(&suffix) {
            return remainder[..remainder.len() - suffix.len()].to_string();
        }
    }

    remainder.to_string()
}

/// Blog posts carry their own normalized slug, so this is a passthrough.
pub fn encode_blog_path(post: &BlogPost) -> String {
    format!("{}/{}", BLOG_ROOT, post.slug)
}

pub fn decode_blog_path(path: &str) -> String {
    strip_section(path, BLOG_ROOT).to_string()
}

fn strip_section<'a>(path: &'a str, root: &str) -> &'a str {
    path.strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path)
}
