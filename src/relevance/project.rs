use crate::models::{Project, Property};
use crate::relevance::rank::gate;

/// Projects sharing status or district with `reference`, in pool order.
pub fn get_related_projects<'a>(
    reference: &Project,
    pool: &'a [Project],
    limit: usize,
) -> Vec<&'a Project> {
    gate(Some(reference.id.as_str()), pool, limit, |candidate| {
        candidate.status == reference.status
            || candidate.location.district == reference.location.district
    })
}

/// First project in the same district as the property
pub fn project_for_property<'a>(
    property: &Property,
    projects: &'a [Project],
) -> Option<&'a Project> {
    projects
        .iter()
        .find(|project| project.location.district == property.location.district)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, PriceRange, ProjectStatus};

    fn project(id: &str, status: ProjectStatus, district: &str) -> Project {
        Project {
            id: id.to_string(),
            name: id.to_string(),
            status,
            location: Location {
                district: district.to_string(),
                city: "Erbil".to_string(),
            },
            price_range: PriceRange {
                min: 90_000,
                max: 400_000,
            },
            total_units: 200,
            available_units: 40,
        }
    }

    #[test]
    fn test_gate_on_status_or_district() {
        let reference = project("r", ProjectStatus::Ready, "Gulan");
        let pool = vec![
            project("a", ProjectStatus::ComingSoon, "Ankawa"),
            project("b", ProjectStatus::ComingSoon, "Gulan"),
            reference.clone(),
            project("c", ProjectStatus::Ready, "Dream City"),
        ];

        let ids: Vec<_> = get_related_projects(&reference, &pool, 5)
            .iter()
            .map(|project| project.id.as_str())
            .collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn test_limit_slices_in_pool_order() {
        let reference = project("r", ProjectStatus::Ready, "Gulan");
        let pool = vec![
            project("a", ProjectStatus::Ready, "x"),
            project("b", ProjectStatus::Ready, "y"),
        ];
        assert_eq!(get_related_projects(&reference, &pool, 1)[0].id, "a");
    }
}
