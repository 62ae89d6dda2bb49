//! Redirect resolver: decides whether an inbound path needs a 301 to its
//! canonical form before any decoding happens.
//!
//! Rules live in an ordered table and are evaluated top to bottom; the first
//! rule that fires wins and the resolver is not re-applied within one call.

use serde::Serialize;
use tracing::debug;

/// Upper bound on chained redirects for any path the resolver can produce
pub const MAX_REDIRECT_HOPS: usize = 5;

/// Legacy path -> canonical path. Targets are already canonical and never
/// start with another key.
pub const LEGACY_PATHS: &[(&str, &str)] = &[
    ("/listings", "/properties"),
    ("/property", "/properties"),
    ("/villas", "/properties?type=villa"),
    ("/apartments", "/properties?type=apartment"),
    ("/penthouses", "/properties?type=penthouse"),
    ("/for-sale", "/properties?status=for-sale"),
    ("/for-rent", "/properties?status=for-rent"),
    ("/developments", "/projects"),
    ("/new-projects", "/projects"),
    ("/news", "/blog"),
    ("/articles", "/blog"),
    ("/about-us", "/about"),
    ("/contact-us", "/contact"),
];

/// One entry of the rule table: a pure predicate+rewrite
#[derive(Debug, Clone, Copy)]
pub struct RedirectRule {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<String>,
}

pub const REDIRECT_RULES: [RedirectRule; 4] = [
    RedirectRule {
        name: "legacy-exact",
        apply: legacy_exact,
    },
    RedirectRule {
        name: "legacy-prefix",
        apply: legacy_prefix,
    },
    RedirectRule {
        name: "trailing-slash",
        apply: trailing_slash,
    },
    RedirectRule {
        name: "lowercase",
        apply: lowercase,
    },
];

/// A rewrite decided by the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub target: String,
    pub rule: &'static str,
}

/// Run the rule table once. `None` means the path is already canonical.
pub fn resolve_redirect(path: &str) -> Option<Redirect> {
    // Rules match the raw path so they see the defects they correct
    debug!(path, "checking redirect rules");

    // A rewrite that leaves the path unchanged would redirect to itself
    REDIRECT_RULES.iter().find_map(|rule| {
        (rule.apply)(path)
            .filter(|target| target != path)
            .map(|target| Redirect {
                target,
                rule: rule.name,
            })
    })
}

/// Target of the first applicable rule, if any
pub fn get_redirect_url(path: &str) -> Option<String> {
    resolve_redirect(path).map(|redirect| redirect.target)
}

/// Follow redirects until the path stabilizes.
pub fn resolve_canonical_path(path: &str) -> String {
    let mut current = path.to_string();

    for _ in 0..MAX_REDIRECT_HOPS {
        match get_redirect_url(&current) {
            Some(next) => current = next,
            None => break,
        }
    }

    current
}

fn legacy_exact(path: &str) -> Option<String> {
    LEGACY_PATHS
        .iter()
        .find(|(legacy, _)| *legacy == path)
        .map(|(_, target)| target.to_string())
}

fn legacy_prefix(path: &str) -> Option<String> {
    LEGACY_PATHS.iter().find_map(|(legacy, target)| {
        let rest = path.strip_prefix(legacy)?;
        let target_has_query = target.contains('?');

        if let Some(query) = rest.strip_prefix('?') {
            let joiner = if target_has_query { '&' } else { '?' };
            Some(format!("{}{}{}", target, joiner, query))
        } else if rest.starts_with('/') && !target_has_query {
            Some(format!("{}{}", target, rest))
        } else {
            None
        }
    })
}

fn trailing_slash(path: &str) -> Option<String> {
    if path.len() <= 1 || !path.ends_with('/') {
        return None;
    }

    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    (trimmed != path).then(|| trimmed.to_string())
}

/// Capitals without a lowercase mapping (`ℂ`, mathematical letters) are
/// left alone, so such paths are already canonical.
fn lowercase(path: &str) -> Option<String> {
    let lowered = path.to_lowercase();
    (lowered != path).then_some(lowered)
}
