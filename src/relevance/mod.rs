//! Related-content recommendations.
//!
//! All scoring is pure: a reference record, a candidate pool, and fixed
//! point weights. Ranking is a stable descending sort so ties keep pool order.

pub mod blog;
pub mod cross_link;
pub mod project;
pub mod property;
pub mod rank;

pub use blog::{get_related_posts, get_you_may_also_like, score_post};
pub use cross_link::{get_posts_for_project, get_posts_for_property, LinkSource};
pub use project::{get_related_projects, project_for_property};
pub use property::{get_related_properties, rank_related_properties, score_property};
pub use rank::{gate, rank, Scored};
