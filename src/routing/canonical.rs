//! Absolute canonical URLs for `<link rel="canonical">`, sitemaps and
//! outbound links.

use crate::models::{BlogPost, Project, Property};
use crate::routing::slug::{encode_blog_path, encode_project_path, encode_property_path};

/// Join a site origin and a path with exactly one slash at the seam.
pub fn canonical_url(origin: &str, path: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", origin)
    } else {
        format!("{}/{}", origin, path)
    }
}

pub fn generate_property_canonical_url(origin: &str, property: &Property) -> String {
    canonical_url(origin, &encode_property_path(property))
}

pub fn generate_project_canonical_url(origin: &str, project: &Project) -> String {
    canonical_url(origin, &encode_project_path(project))
}

pub fn generate_blog_canonical_url(origin: &str, post: &BlogPost) -> String {
    canonical_url(origin, &encode_blog_path(post))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_slash_at_seam() {
        assert_eq!(
            canonical_url("https://www.erbilhomes.com/", "/blog/x"),
            "https://www.erbilhomes.com/blog/x"
        );
        assert_eq!(
            canonical_url("https://www.erbilhomes.com", "blog/x"),
            "https://www.erbilhomes.com/blog/x"
        );
    }

    #[test]
    fn test_root_path() {
        assert_eq!(
            canonical_url("https://www.erbilhomes.com//", "/"),
            "https://www.erbilhomes.com/"
        );
    }
}
