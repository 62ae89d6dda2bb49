//! Listing -> blog cross-linking: which articles to show next to a property
//! or project.

use crate::models::{BlogCategory, BlogPost, ListingStatus, Project, ProjectStatus, Property};
use crate::relevance::rank::{rank, records, Scored};

pub const TOPIC_POINTS: u32 = 3;
pub const DISTRICT_POINTS: u32 = 4;
pub const INVESTMENT_POINTS: u32 = 3;
pub const LUXURY_POINTS: u32 = 2;
pub const FEATURED_POINTS: u32 = 1;

/// Listings above this price count as luxury stock
pub const LUXURY_PRICE_THRESHOLD: u64 = 400_000;

const LUXURY_KEYWORD: &str = "luxury";

/// What a property or project contributes to cross-link scoring.
/// All keywords are lowercase.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSource {
    pub topics: Vec<String>,
    pub district: String,
    /// Off-plan or still being built
    pub off_plan: bool,
    pub price: u64,
    pub featured: bool,
}

impl From<&Property> for LinkSource {
    fn from(property: &Property) -> Self {
        let mut topics = vec![
            property.property_type.as_str().to_lowercase(),
            property.status.as_str().to_lowercase(),
        ];
        topics.extend(property.badges.iter().map(|badge| badge.to_lowercase()));

        Self {
            topics,
            district: property.location.district.to_lowercase(),
            off_plan: property.status == ListingStatus::OffPlan,
            price: property.price,
            featured: property.is_featured,
        }
    }
}

impl From<&Project> for LinkSource {
    fn from(project: &Project) -> Self {
        Self {
            topics: vec![
                "project".to_string(),
                "development".to_string(),
                project.status.as_str().to_lowercase(),
            ],
            district: project.location.district.to_lowercase(),
            off_plan: project.status != ProjectStatus::Ready,
            price: project.price_range.max,
            featured: false,
        }
    }
}

/// Score one post against a listing. Zero means "do not link".
///
/// - +3 when a post tag or its category overlaps a listing topic
/// - +4 when the listing's district shows up in the post's tags or title
/// - +3 for investment articles next to off-plan stock
/// - +2 for luxury articles next to luxury listings above the threshold
/// - +1 for featured listings, only on posts that already matched
pub fn score_post_for_source(source: &LinkSource, post: &BlogPost) -> u32 {
    let keywords = post_keywords(post);
    let title = post.title.to_lowercase();
    let mut score = 0;

    let topic_match = keywords.iter().any(|keyword| {
        source
            .topics
            .iter()
            .filter(|topic| !topic.is_empty())
            .any(|topic| keyword.contains(topic.as_str()) || topic.contains(keyword.as_str()))
    });
    if topic_match {
        score += TOPIC_POINTS;
    }

    if !source.district.is_empty()
        && (title.contains(&source.district)
            || keywords.iter().any(|keyword| keyword.contains(&source.district)))
    {
        score += DISTRICT_POINTS;
    }

    if source.off_plan && post.category == BlogCategory::Investment {
        score += INVESTMENT_POINTS;
    }

    let luxury_listing = source.topics.iter().any(|topic| topic.contains(LUXURY_KEYWORD))
        && source.price > LUXURY_PRICE_THRESHOLD;
    let luxury_post = title.contains(LUXURY_KEYWORD)
        || keywords.iter().any(|keyword| keyword.contains(LUXURY_KEYWORD));
    if luxury_listing && luxury_post {
        score += LUXURY_POINTS;
    }

    if source.featured && score > 0 {
        score += FEATURED_POINTS;
    }

    score
}

pub fn rank_posts_for_source<'a>(
    source: &LinkSource,
    posts: &'a [BlogPost],
    limit: usize,
) -> Vec<Scored<'a, BlogPost>> {
    rank(None, posts, limit, |post| {
        Some(score_post_for_source(source, post)).filter(|score| *score > 0)
    })
}

pub fn get_posts_for_property<'a>(
    property: &Property,
    posts: &'a [BlogPost],
    limit: usize,
) -> Vec<&'a BlogPost> {
    records(rank_posts_for_source(&LinkSource::from(property), posts, limit))
}

pub fn get_posts_for_project<'a>(
    project: &Project,
    posts: &'a [BlogPost],
    limit: usize,
) -> Vec<&'a BlogPost> {
    records(rank_posts_for_source(&LinkSource::from(project), posts, limit))
}

fn post_keywords(post: &BlogPost) -> Vec<String> {
    std::iter::once(post.category.as_str().to_lowercase())
        .chain(post.tags.iter().map(|tag| tag.to_lowercase()))
        .filter(|keyword| !keyword.is_empty())
        .collect()
}
