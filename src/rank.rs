// src/rank.rs
//
// Order the catalog by one statistic. All-or-nothing: one hero without a
// value fails the ranking. Equal values keep catalog order in both directions.

use std::{cmp::Ordering, fmt};

use crate::{
    catalog::Entity,
    error::{RankError, Unresolved},
    reconcile::Lookup,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Largest value first
    #[default]
    Descending,
    Ascending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Descending => f.write_str("descending"),
            SortDirection::Ascending => f.write_str("ascending"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ranked {
    pub hero: Entity,
    pub value: f64,
}

/// Catalog heroes in ranked order, each with the value it was sorted by.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankedList {
    entries: Vec<Ranked>,
}

impl RankedList {
    pub fn entries(&self) -> &[Ranked] {
        &self.entries
    }

    pub fn heroes(&self) -> impl Iterator<Item = &Entity> {
        self.entries.iter().map(|r| &r.hero)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Ranked> for RankedList {
    fn from_iter<I: IntoIterator<Item = Ranked>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Rank `catalog` by `value_of`. `key` only labels the error.
pub fn rank<F>(
    catalog: &[Entity],
    key: &str,
    value_of: F,
    direction: SortDirection,
) -> Result<RankedList, RankError>
where
    F: Fn(&Entity) -> Lookup,
{
    let mut entries = Vec::with_capacity(catalog.len());
    let mut unresolved = Vec::new();

    for hero in catalog {
        match value_of(hero) {
            Lookup::Found(value) => entries.push(Ranked { hero: hero.clone(), value }),
            Lookup::NotFound(missing) => unresolved.push(Unresolved {
                id: hero.id,
                display_name: hero.display_name.clone(),
                missing,
            }),
        }
    }

    if !unresolved.is_empty() {
        loge!("Rank: {} hero(es) without '{key}'", unresolved.len());
        return Err(RankError::UnresolvedValue { key: s!(key), unresolved });
    }

    // `sort_by` is stable; reversing the comparator (not the output) keeps ties in catalog order.
    entries.sort_by(|a, b| match direction {
        SortDirection::Descending => compare(b.value, a.value),
        SortDirection::Ascending => compare(a.value, b.value),
    });

    Ok(RankedList { entries })
}

// Numeric comparison; -0.0 and 0.0 tie.
fn compare(a: f64, b: f64) -> Ordering {
    let z = |v: f64| if v == 0.0 { 0.0 } else { v };
    z(a).total_cmp(&z(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Missing;
    use std::collections::HashMap;

    fn heroes(n: u32) -> Vec<Entity> {
        (1..=n).map(|i| Entity::new(i, &format!("npc_{i}"), &format!("Hero {i}"))).collect()
    }

    fn table(values: &[(u32, f64)]) -> HashMap<u32, f64> {
        values.iter().copied().collect()
    }

    fn ids(list: &RankedList) -> Vec<u32> {
        list.heroes().map(|h| h.id).collect()
    }

    fn by(values: &HashMap<u32, f64>) -> impl Fn(&Entity) -> Lookup + '_ {
        move |h| match values.get(&h.id) {
            Some(v) => Lookup::Found(*v),
            None => Lookup::NotFound(Missing::Entity),
        }
    }

    #[test]
    fn descending_puts_largest_first() {
        let cat = heroes(4);
        let v = table(&[(1, 400.0), (2, 650.5), (3, 120.0), (4, 500.0)]);
        let ranked = rank(&cat, "gpm", by(&v), SortDirection::Descending).unwrap();
        assert_eq!(ids(&ranked), vec![2, 4, 1, 3]);
        assert_eq!(ranked.entries()[0].value, 650.5);
    }

    #[test]
    fn ascending_puts_smallest_first() {
        let cat = heroes(4);
        let v = table(&[(1, 400.0), (2, 650.5), (3, 120.0), (4, 500.0)]);
        let ranked = rank(&cat, "gpm", by(&v), SortDirection::Ascending).unwrap();
        assert_eq!(ids(&ranked), vec![3, 1, 4, 2]);
    }

    #[test]
    fn ties_keep_catalog_order_in_both_directions() {
        let cat = heroes(5);
        let v = table(&[(1, 1.0), (2, 2.0), (3, 1.0), (4, 2.0), (5, 1.0)]);
        let desc = rank(&cat, "kda", by(&v), SortDirection::Descending).unwrap();
        assert_eq!(ids(&desc), vec![2, 4, 1, 3, 5]);
        let asc = rank(&cat, "kda", by(&v), SortDirection::Ascending).unwrap();
        assert_eq!(ids(&asc), vec![1, 3, 5, 2, 4]);
    }

    #[test]
    fn signed_zeros_tie() {
        let cat = heroes(2);
        let v = table(&[(1, -0.0), (2, 0.0)]);
        let desc = rank(&cat, "x", by(&v), SortDirection::Descending).unwrap();
        assert_eq!(ids(&desc), vec![1, 2]);
    }

    #[test]
    fn ranking_is_deterministic() {
        let cat = heroes(40);
        let v: HashMap<u32, f64> = cat.iter().map(|h| (h.id, (h.id % 7) as f64)).collect();
        let a = rank(&cat, "wr", by(&v), SortDirection::Descending).unwrap();
        let b = rank(&cat, "wr", by(&v), SortDirection::Descending).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
    }

    #[test]
    fn any_missing_value_fails_the_whole_ranking() {
        let cat = heroes(3);
        let v = table(&[(1, 1.0), (3, 3.0)]);
        let err = rank(&cat, "gpm", by(&v), SortDirection::Descending).unwrap_err();
        let RankError::UnresolvedValue { key, unresolved } = err;
        assert_eq!(key, "gpm");
        assert_eq!(
            unresolved,
            vec![Unresolved { id: 2, display_name: s!("Hero 2"), missing: Missing::Entity }]
        );
    }

    #[test]
    fn empty_catalog_ranks_empty() {
        let ranked = rank(&[], "gpm", |_| Lookup::Found(0.0), SortDirection::Ascending).unwrap();
        assert!(ranked.is_empty());
    }
}
