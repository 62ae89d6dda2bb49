mod common;

use assert2::check;
use common::{ids, listing, post, store};
use listing_router::models::{BlogCategory, PropertyType};
use listing_router::relevance::{
    get_posts_for_property, get_related_properties, get_you_may_also_like, project_for_property,
    rank_related_properties,
};
use listing_router::InMemoryStore;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn same_district_outranks_same_type() {
    let reference = listing("ref", PropertyType::Villa, "Gulan", 300_000);
    let pool = vec![
        listing("same-type", PropertyType::Villa, "Ankawa", 900_000),
        listing("same-district", PropertyType::Apartment, "Gulan", 900_000),
    ];

    let related = get_related_properties(&reference, &pool, 5);
    check!(ids(&related) == ["same-district", "same-type"]);
}

#[rstest]
fn ties_keep_pool_order() {
    let reference = listing("ref", PropertyType::Villa, "Gulan", 300_000);
    let pool = vec![
        listing("first", PropertyType::Duplex, "Gulan", 900_000),
        listing("better", PropertyType::Villa, "Gulan", 300_000),
        listing("second", PropertyType::Land, "Gulan", 50_000),
    ];

    let ranked = rank_related_properties(&reference, &pool, 5);
    let scores: Vec<_> = ranked.iter().map(|scored| scored.score).collect();
    check!(scores == [6, 3, 3]);
    check!(ranked[1].record.id == "first");
    check!(ranked[2].record.id == "second");
}

#[rstest]
fn limit_caps_output() {
    let reference = listing("ref", PropertyType::Villa, "Gulan", 300_000);
    let pool: Vec<_> = (0..10)
        .map(|n| listing(&format!("v-{}", n), PropertyType::Villa, "Gulan", 300_000))
        .collect();

    check!(get_related_properties(&reference, &pool, 3).len() == 3);
}

#[rstest]
fn sample_catalog_recommendations(store: InMemoryStore) {
    let villa = &store.properties[0];
    check!(villa.id == "v-101");

    let related = get_related_properties(villa, &store.properties, 3);
    // a-201 and a-202 share the district; v-102 shares the type
    check!(ids(&related) == ["a-201", "a-202", "v-102"]);

    let project = project_for_property(villa, &store.projects);
    check!(project.map(|project| project.id.as_str()) == Some("prj-1"));

    // b-4 names the district; b-2 and b-5 tie on the villa tag
    let posts = get_posts_for_property(villa, &store.posts, 3);
    check!(ids(&posts) == ["b-4", "b-2", "b-5"]);
}

#[rstest]
fn you_may_also_like_ranks_by_overlap() {
    let reference = post("ref", BlogCategory::Investment, &["ROI", "Erbil"]);
    let pool = vec![
        post("tag-only", BlogCategory::Lifestyle, &["erbil"]),
        post("nothing", BlogCategory::CompanyNews, &["team"]),
        post("both", BlogCategory::Investment, &["roi", "ERBIL"]),
        reference.clone(),
    ];

    let liked = get_you_may_also_like(&reference, &pool, 5);
    check!(ids(&liked) == ["both", "tag-only"]);
}

fn arb_pool() -> impl Strategy<Value = Vec<(u8, u8, u32)>> {
    prop::collection::vec((0u8..4, 0u8..3, 100_000u32..600_000), 0..12)
}

proptest! {
    #[test]
    fn reference_never_recommended(pool in arb_pool(), limit in 0usize..8) {
        let kinds = [
            PropertyType::Villa,
            PropertyType::Apartment,
            PropertyType::Duplex,
            PropertyType::Land,
        ];
        let districts = ["Gulan", "Ankawa", "Empire"];

        let reference = listing("ref", PropertyType::Villa, "Gulan", 300_000);
        let mut candidates: Vec<_> = pool
            .iter()
            .enumerate()
            .map(|(n, (kind, district, price))| {
                listing(
                    &format!("c-{}", n),
                    kinds[*kind as usize],
                    districts[*district as usize],
                    u64::from(*price),
                )
            })
            .collect();
        candidates.insert(candidates.len() / 2, reference.clone());

        let ranked = rank_related_properties(&reference, &candidates, limit);
        prop_assert!(ranked.len() <= limit);
        prop_assert!(ranked.iter().all(|scored| scored.record.id != "ref"));
        prop_assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));

        // Equal scores appear in pool order
        let position = |id: &str| candidates.iter().position(|c| c.id == id);
        let ties_in_pool_order = ranked.windows(2).all(|pair| {
            pair[0].score != pair[1].score
                || position(&pair[0].record.id) < position(&pair[1].record.id)
        });
        prop_assert!(ties_in_pool_order);
    }
}
