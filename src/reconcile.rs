// src/reconcile.rs
//
// Match catalog heroes to extracted rows by exact display name.

use crate::{
    catalog::Entity,
    error::Missing,
    scrape::TableExtraction,
};

/// Result of looking up one hero's statistic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lookup {
    Found(f64),
    NotFound(Missing),
}

impl Lookup {
    pub fn value(self) -> Option<f64> {
        match self {
            Lookup::Found(v) => Some(v),
            Lookup::NotFound(_) => None,
        }
    }
}

pub struct CatalogReconciler<'a> {
    extraction: &'a TableExtraction,
}

impl<'a> CatalogReconciler<'a> {
    pub fn new(extraction: &'a TableExtraction) -> Self {
        Self { extraction }
    }

    /// `key` for `hero`. No fuzzy matching: "Anti-Mage" ≠ "Anti Mage".
    pub fn stat(&self, hero: &Entity, key: &str) -> Lookup {
        match self.extraction.row(&hero.display_name) {
            None => Lookup::NotFound(Missing::Entity),
            Some(row) => match row.get(key) {
                Some(cell) => Lookup::Found(cell.value),
                None => Lookup::NotFound(Missing::Key),
            },
        }
    }

    /// Accessor for `rank::rank`.
    pub fn accessor<'k>(&'k self, key: &'k str) -> impl Fn(&Entity) -> Lookup + 'k {
        move |hero| self.stat(hero, key)
    }

    /// Table names no catalog hero claimed. Useful when a rename breaks matching.
    pub fn unclaimed(&self, catalog: &[Entity]) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = self
            .extraction
            .names()
            .filter(|n| !catalog.iter().any(|h| h.display_name == *n))
            .collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::table::{parse, StatRequest};

    fn extraction() -> TableExtraction {
        let doc = r#"<table><tbody>
            <tr><td></td><td>Anti-Mage</td><td data-value="640">640</td></tr>
            <tr><td></td><td>Axe</td><td data-value="410.5">410.5</td></tr>
            <tr><td></td><td>Outworld Destroyer</td><td data-value="500">500</td></tr>
        </tbody></table>"#;
        parse(doc, &[StatRequest::new("gpm", 2)]).unwrap()
    }

    #[test]
    fn found_by_display_name() {
        let ex = extraction();
        let r = CatalogReconciler::new(&ex);
        let axe = Entity::new(2, "npc_dota_hero_axe", "Axe");
        assert_eq!(r.stat(&axe, "gpm"), Lookup::Found(410.5));
    }

    #[test]
    fn absent_hero_and_absent_key_are_distinguished() {
        let ex = extraction();
        let r = CatalogReconciler::new(&ex);
        let lina = Entity::new(25, "npc_dota_hero_lina", "Lina");
        let axe = Entity::new(2, "npc_dota_hero_axe", "Axe");
        assert_eq!(r.stat(&lina, "gpm"), Lookup::NotFound(Missing::Entity));
        assert_eq!(r.stat(&axe, "xpm"), Lookup::NotFound(Missing::Key));
        assert_eq!(r.stat(&axe, "xpm").value(), None);
    }

    #[test]
    fn matching_is_exact() {
        let ex = extraction();
        let r = CatalogReconciler::new(&ex);
        let am = Entity::new(1, "npc_dota_hero_antimage", "Anti Mage");
        let axe = Entity::new(2, "npc_dota_hero_axe", "axe");
        assert_eq!(r.stat(&am, "gpm"), Lookup::NotFound(Missing::Entity));
        assert_eq!(r.stat(&axe, "gpm"), Lookup::NotFound(Missing::Entity));
    }

    #[test]
    fn unclaimed_lists_renamed_rows() {
        let ex = extraction();
        let r = CatalogReconciler::new(&ex);
        let catalog = vec![
            Entity::new(1, "npc_dota_hero_antimage", "Anti-Mage"),
            Entity::new(2, "npc_dota_hero_axe", "Axe"),
            Entity::new(76, "npc_dota_hero_obsidian_destroyer", "Outworld Devourer"),
        ];
        assert_eq!(r.unclaimed(&catalog), vec!["Outworld Destroyer"]);
    }
}
