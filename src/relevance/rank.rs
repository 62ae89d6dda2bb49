use crate::models::Identified;
use serde::Serialize;

/// A candidate together with the score it earned against a reference
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scored<'a, T> {
    pub record: &'a T,
    pub score: u32,
}

/// Score the pool and return the best `limit` candidates, highest first.
///
/// `score` returns `None` for candidates that are not eligible at all. The
/// record whose id equals `exclude_id` never appears in the output. Equal
/// scores keep their pool order (`sort_by` is stable).
pub fn rank<'a, T, F>(
    exclude_id: Option<&str>,
    pool: &'a [T],
    limit: usize,
    score: F,
) -> Vec<Scored<'a, T>>
where
    T: Identified,
    F: Fn(&T) -> Option<u32>,
{
    let mut scored: Vec<Scored<'a, T>> = pool
        .iter()
        .filter(|candidate| Some(candidate.id()) != exclude_id)
        .filter_map(|candidate| {
            score(candidate).map(|score| Scored {
                record: candidate,
                score,
            })
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// Eligible candidates in pool order, without numeric ranking.
pub fn gate<'a, T, F>(
    exclude_id: Option<&str>,
    pool: &'a [T],
    limit: usize,
    eligible: F,
) -> Vec<&'a T>
where
    T: Identified,
    F: Fn(&T) -> bool,
{
    pool.iter()
        .filter(|candidate| Some(candidate.id()) != exclude_id)
        .filter(|candidate| eligible(*candidate))
        .take(limit)
        .collect()
}

pub(crate) fn records<'a, T>(scored: Vec<Scored<'a, T>>) -> Vec<&'a T> {
    scored.into_iter().map(|scored| scored.record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, u32);

    impl Identified for Item {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let pool = [Item("a", 1), Item("b", 5), Item("c", 1), Item("d", 5)];
        let ids: Vec<_> = rank(None, &pool, 10, |item| Some(item.1))
            .iter()
            .map(|scored| scored.record.0)
            .collect();
        assert_eq!(ids, ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_excludes_reference_and_caps() {
        let pool = [Item("a", 9), Item("b", 5), Item("c", 4)];
        let ranked = rank(Some("a"), &pool, 1, |item| Some(item.1));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].record.0, "b");
    }

    #[test]
    fn test_gate_keeps_pool_order() {
        let pool = [Item("a", 0), Item("b", 1), Item("c", 1), Item("d", 1)];
        let ids: Vec<_> = gate(Some("c"), &pool, 5, |item| item.1 > 0)
            .iter()
            .map(|item| item.0)
            .collect();
        assert_eq!(ids, ["b", "d"]);
    }
}
