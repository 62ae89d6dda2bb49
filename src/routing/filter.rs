//! Filter parameter codec: structured property search filter <-> compact,
//! human-readable query string (`type=villa&price=under-450k&beds=3+`).
//!
//! Encoding is lossy (prices are truncated to thousands, `max_beds` is never
//! emitted) but stable: encode -> decode -> encode reproduces the first
//! query string exactly.

use crate::models::Property;
use crate::routing::slug::slugify;
use crate::routing::PROPERTIES_ROOT;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// Value the search form uses for "no constraint"
pub const ALL_SENTINEL: &str = "All";

/// Above this maximum a two-sided price range is emitted as `under-<max>k`
const PRICE_RANGE_CEILING: u64 = 1_000_000;

static PRICE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)k-(\d+)k$").expect("valid price range pattern"));
static PRICE_UNDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^under-(\d+)k$").expect("valid price ceiling pattern"));
static PRICE_ABOVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^above-(\d+)k$").expect("valid price floor pattern"));
static BEDS_MIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:\+|%2[bB])?$").expect("valid beds pattern"));
static AREA_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)-(\d+(?:\.\d+)?)sqm$").expect("valid area pattern")
});

/// Search filter for property listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    /// City-level location
    pub location: Option<String>,
    pub district: Option<String>,
    pub status: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_beds: Option<u32>,
    pub max_beds: Option<u32>,
    /// Minimum size in square meters
    pub min_area: Option<f64>,
    /// Maximum size in square meters
    pub max_area: Option<f64>,
}

impl PropertyFilter {
    /// Whether a property satisfies every active constraint
    pub fn matches(&self, property: &Property) -> bool {
        let location = &property.location;

        if let Some(wanted) = active(&self.property_type) {
            if slugify(wanted) != slugify(property.property_type.as_str()) {
                return false;
            }
        }
        if let Some(wanted) = active(&self.location) {
            let wanted = slugify(wanted);
            if wanted != slugify(&location.city) && wanted != slugify(&location.district) {
                return false;
            }
        }
        if let Some(wanted) = active(&self.district) {
            if slugify(wanted) != slugify(&location.district) {
                return false;
            }
        }
        if let Some(wanted) = active(&self.status) {
            if slugify(wanted) != slugify(property.status.as_str()) {
                return false;
            }
        }

        let beds = property.specs.beds;
        let sqm = property.specs.sqm;

        self.min_price.map_or(true, |min| property.price >= min)
            && self.max_price.map_or(true, |max| property.price <= max)
            && self.min_beds.map_or(true, |min| beds >= min)
            && self.max_beds.map_or(true, |max| beds <= max)
            && self.min_area.map_or(true, |min| sqm >= min)
            && self.max_area.map_or(true, |max| sqm <= max)
    }
}

/// Encode a filter into a query string (no leading `?`).
pub fn encode_filter(filter: &PropertyFilter) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();

    for (key, value) in [
        ("type", &filter.property_type),
        ("location", &filter.location),
        ("district", &filter.district),
        ("status", &filter.status),
    ] {
        if let Some(value) = active(value) {
            let slug = slugify(value);
            if !slug.is_empty() {
                params.push((key, slug));
            }
        }
    }

    if let Some(price) = encode_price(filter.min_price, filter.max_price) {
        params.push(("price", price));
    }

    if let Some(beds) = filter.min_beds.filter(|beds| *beds > 0) {
        params.push(("beds", format!("{}+", beds)));
    }

    if let (Some(min), Some(max)) = (filter.min_area, filter.max_area) {
        if is_plain_number(min) && is_plain_number(max) {
            params.push(("area", format!("{}-{}sqm", min, max)));
        }
    }

    params
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a query string into a filter. Unknown keys and malformed values
/// are dropped rather than reported.
pub fn parse_filter_params(query: &str) -> PropertyFilter {
    let mut filter = PropertyFilter::default();
    let query = query.strip_prefix('?').unwrap_or(query);

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match key {
            "type" => filter.property_type = Some(value.to_string()),
            "location" => filter.location = Some(value.to_string()),
            "district" => filter.district = Some(value.to_string()),
            "status" => filter.status = Some(status_display(value)),
            "price" => decode_price(value, &mut filter),
            "beds" => {
                filter.min_beds = BEDS_MIN
                    .captures(value)
                    .and_then(|caps| caps[1].parse().ok());
            }
            "area" => {
                if let Some(caps) = AREA_RANGE.captures(value) {
                    if let (Ok(min), Ok(max)) = (caps[1].parse(), caps[2].parse()) {
                        filter.min_area = Some(min);
                        filter.max_area = Some(max);
                    }
                }
            }
            other => debug!(key = other, "ignoring unknown filter parameter"),
        }
    }

    filter
}

/// Listing page path for a filter: `/properties` or `/properties?<query>`
pub fn listing_path(filter: &PropertyFilter) -> String {
    let query = encode_filter(filter);
    if query.is_empty() {
        PROPERTIES_ROOT.to_string()
    } else {
        format!("{}?{}", PROPERTIES_ROOT, query)
    }
}

/// Rebuild the display form of a status slug (`for-sale` -> `For Sale`).
pub fn status_display(slug: &str) -> String {
    match slug {
        "for-sale" => "For Sale".to_string(),
        "for-rent" => "For Rent".to_string(),
        "off-plan" => "Off Plan".to_string(),
        other => other
            .split('-')
            .filter(|word| !word.is_empty())
            .map(title_case_word)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

pub(crate) fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|value| !slugify(value).eq_ignore_ascii_case(ALL_SENTINEL))
}

fn encode_price(min: Option<u64>, max: Option<u64>) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) if max < PRICE_RANGE_CEILING => {
            Some(format!("{}k-{}k", min / 1000, max / 1000))
        }
        (_, Some(max)) => Some(format!("under-{}k", max / 1000)),
        (Some(min), None) => Some(format!("above-{}k", min / 1000)),
        (None, None) => None,
    }
}

fn decode_price(value: &str, filter: &mut PropertyFilter) {
    let thousands = |digits: &str| digits.parse::<u64>().ok().and_then(|k| k.checked_mul(1000));

    if let Some(caps) = PRICE_RANGE.captures(value) {
        if let (Some(min), Some(max)) = (thousands(&caps[1]), thousands(&caps[2])) {
            filter.min_price = Some(min);
            filter.max_price = Some(max);
        }
    } else if let Some(caps) = PRICE_UNDER.captures(value) {
        filter.max_price = thousands(&caps[1]);
    } else if let Some(caps) = PRICE_ABOVE.captures(value) {
        filter.min_price = thousands(&caps[1]);
    }
}

fn is_plain_number(value: f64) -> bool {
    value.is_finite() && value.is_sign_positive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_under_price() {
        let filter = PropertyFilter {
            max_price: Some(450_000),
            ..Default::default()
        };
        assert_eq!(encode_filter(&filter), "price=under-450k");
        assert_eq!(parse_filter_params("price=under-450k"), filter);
    }

    #[test]
    fn test_encode_price_range() {
        let filter = PropertyFilter {
            min_price: Some(100_000),
            max_price: Some(300_000),
            ..Default::default()
        };
        assert_eq!(encode_filter(&filter), "price=100k-300k");
    }

    #[test]
    fn test_wide_range_becomes_ceiling() {
        let filter = PropertyFilter {
            min_price: Some(200_000),
            max_price: Some(1_500_000),
            ..Default::default()
        };
        assert_eq!(encode_filter(&filter), "price=under-1500k");
    }

    #[test]
    fn test_above_price() {
        let filter = PropertyFilter {
            min_price: Some(250_999),
            ..Default::default()
        };
        assert_eq!(encode_filter(&filter), "price=above-250k");
        assert_eq!(parse_filter_params("price=above-250k").min_price, Some(250_000));
    }

    #[test]
    fn test_all_sentinel_omitted() {
        let filter = PropertyFilter {
            property_type: Some("All".to_string()),
            district: Some("Dream City".to_string()),
            ..Default::default()
        };
        assert_eq!(encode_filter(&filter), "district=dream-city");
    }

    #[test]
    fn test_full_filter_order() {
        let filter = PropertyFilter {
            property_type: Some("Villa".to_string()),
            location: Some("Erbil".to_string()),
            status: Some("For Sale".to_string()),
            min_beds: Some(3),
            min_area: Some(150.0),
            max_area: Some(400.5),
            ..Default::default()
        };
        assert_eq!(
            encode_filter(&filter),
            "type=villa&location=erbil&status=for-sale&beds=3+&area=150-400.5sqm"
        );
    }

    #[test]
    fn test_status_reconstruction() {
        assert_eq!(status_display("for-sale"), "For Sale");
        assert_eq!(status_display("off-plan"), "Off Plan");
        assert_eq!(status_display("under-construction"), "Under Construction");
    }

    #[test]
    fn test_malformed_values_are_dropped() {
        let filter = parse_filter_params("?price=cheap&beds=lots&area=big&colour=red&type=");
        assert_eq!(filter, PropertyFilter::default());
    }

    #[test]
    fn test_zero_beds_not_emitted() {
        let filter = PropertyFilter {
            min_beds: Some(0),
            ..Default::default()
        };
        assert_eq!(encode_filter(&filter), "");
        assert_eq!(listing_path(&filter), "/properties");
    }
}
