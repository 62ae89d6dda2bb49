//! Post-to-post recommendations.

use crate::models::BlogPost;
use crate::relevance::rank::{gate, rank, records, Scored};

pub const SAME_CATEGORY_POINTS: u32 = 3;
pub const SHARED_TAG_POINTS: u32 = 2;

/// +3 for the same category, +2 for every candidate tag that matches a
/// reference tag ignoring case.
pub fn score_post(reference: &BlogPost, candidate: &BlogPost) -> u32 {
    let mut score = 0;

    if candidate.category == reference.category {
        score += SAME_CATEGORY_POINTS;
    }

    let shared = candidate
        .tags
        .iter()
        .filter(|tag| reference.tags.iter().any(|own| same_tag(own, tag)))
        .count() as u32;

    score + shared * SHARED_TAG_POINTS
}

/// "You may also like": scored ranking, zero-score posts dropped.
pub fn rank_you_may_also_like<'a>(
    reference: &BlogPost,
    pool: &'a [BlogPost],
    limit: usize,
) -> Vec<Scored<'a, BlogPost>> {
    rank(Some(reference.id.as_str()), pool, limit, |candidate| {
        Some(score_post(reference, candidate)).filter(|score| *score > 0)
    })
}

pub fn get_you_may_also_like<'a>(
    reference: &BlogPost,
    pool: &'a [BlogPost],
    limit: usize,
) -> Vec<&'a BlogPost> {
    records(rank_you_may_also_like(reference, pool, limit))
}

/// "Related posts": same category or any shared tag, pool order.
pub fn get_related_posts<'a>(
    reference: &BlogPost,
    pool: &'a [BlogPost],
    limit: usize,
) -> Vec<&'a BlogPost> {
    gate(Some(reference.id.as_str()), pool, limit, |candidate| {
        candidate.category == reference.category
            || candidate
                .tags
                .iter()
                .any(|tag| reference.tags.iter().any(|own| same_tag(own, tag)))
    })
}

fn same_tag(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
