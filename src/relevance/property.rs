//! Related properties: gated pool, weighted score, stable ranking.

use crate::models::Property;
use crate::relevance::rank::{rank, records, Scored};

pub const SAME_DISTRICT_POINTS: u32 = 3;
pub const SAME_TYPE_POINTS: u32 = 2;
pub const CLOSE_PRICE_POINTS: u32 = 1;

/// Whether `candidate` may be suggested next to `reference` at all:
/// same type, same district, or priced within 30% of the reference.
pub fn is_related_candidate(reference: &Property, candidate: &Property) -> bool {
    candidate.property_type == reference.property_type
        || candidate.location.district == reference.location.district
        || within_percent(reference.price, candidate.price, reference.price, 30)
}

pub fn score_property(reference: &Property, candidate: &Property) -> u32 {
    let mut score = 0;

    if candidate.location.district == reference.location.district {
        score += SAME_DISTRICT_POINTS;
    }
    if candidate.property_type == reference.property_type {
        score += SAME_TYPE_POINTS;
    }
    if within_percent(reference.price, candidate.price, candidate.price, 20) {
        score += CLOSE_PRICE_POINTS;
    }

    score
}

pub fn rank_related_properties<'a>(
    reference: &Property,
    pool: &'a [Property],
    limit: usize,
) -> Vec<Scored<'a, Property>> {
    rank(Some(reference.id.as_str()), pool, limit, |candidate| {
        is_related_candidate(reference, candidate).then(|| score_property(reference, candidate))
    })
}

pub fn get_related_properties<'a>(
    reference: &Property,
    pool: &'a [Property],
    limit: usize,
) -> Vec<&'a Property> {
    records(rank_related_properties(reference, pool, limit))
}

/// `|a - b| < percent% of base`, in integer arithmetic
fn within_percent(a: u64, b: u64, base: u64, percent: u128) -> bool {
    u128::from(a.abs_diff(b)) * 100 < u128::from(base) * percent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingStatus, Location, PropertyType, Specs};

    fn listing(id: &str, kind: PropertyType, district: &str, price: u64) -> Property {
        Property {
            id: id.to_string(),
            title: id.to_string(),
            property_type: kind,
            status: ListingStatus::ForSale,
            price,
            location: Location {
                district: district.to_string(),
                city: "Erbil".to_string(),
            },
            specs: Specs {
                beds: 3,
                baths: 2,
                sqm: 180.0,
            },
            badges: vec![],
            is_featured: false,
        }
    }

    #[test]
    fn test_score_weights() {
        let reference = listing("r", PropertyType::Villa, "Gulan", 300_000);

        let twin = listing("a", PropertyType::Villa, "Gulan", 310_000);
        assert_eq!(score_property(&reference, &twin), 6);

        let far = listing("b", PropertyType::Apartment, "Ankawa", 900_000);
        assert_eq!(score_property(&reference, &far), 0);
    }

    #[test]
    fn test_gate_rejects_unrelated() {
        let reference = listing("r", PropertyType::Villa, "Gulan", 300_000);
        let unrelated = listing("x", PropertyType::Land, "Ankawa", 50_000);
        let close_price = listing("y", PropertyType::Land, "Ankawa", 350_000);

        assert!(!is_related_candidate(&reference, &unrelated));
        assert!(is_related_candidate(&reference, &close_price));
    }

    #[test]
    fn test_contact_for_price_reference_only_gates_on_attributes() {
        let reference = listing("r", PropertyType::Villa, "Gulan", 0);
        let free = listing("x", PropertyType::Land, "Ankawa", 0);
        assert!(!is_related_candidate(&reference, &free));
    }
}
