// src/config/stats.rs
//
// Where each statistic lives: page URL + column index of the value cell.

use super::consts::DOTABUFF_HEROES;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatSource {
    pub key: String,
    pub label: String,
    pub url: String,
    pub column: usize,
}

impl StatSource {
    pub fn new(key: &str, label: &str, url: &str, column: usize) -> Self {
        Self { key: s!(key), label: s!(label), url: s!(url), column }
    }
}

/// Immutable table of statistic sources, passed into the runner explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatSources {
    entries: Vec<StatSource>,
}

impl StatSources {
    pub fn new(entries: Vec<StatSource>) -> Self {
        Self { entries }
    }

    /// The Dotabuff hero pages.
    pub fn dotabuff() -> Self {
        let page = |name: &str| join!(DOTABUFF_HEROES, "/", name);
        Self::new(vec![
            StatSource::new("cs@10", "Last hits @ 10 minutes", &page("farm"), 2),
            StatSource::new("cd@10", "Denies @ 10 minutes", &page("farm"), 3),
            StatSource::new("gpm", "Gold per minute", &page("economy"), 2),
            StatSource::new("xpm", "Experience per minute", &page("economy"), 3),
            StatSource::new("kda", "KDA ratio", &page("impact"), 2),
            StatSource::new("wr", "Win rate", &page("winning"), 2),
            StatSource::new("pr", "Pick rate", &page("winning"), 3),
            StatSource::new("hdpm", "Hero damage per minute", &page("damage"), 2),
            StatSource::new("tdpm", "Tower damage per minute", &page("damage"), 3),
            StatSource::new("hhpm", "Hero healing per minute", &page("damage"), 4),
        ])
    }

    pub fn get(&self, key: &str) -> Option<&StatSource> {
        self.entries.iter().find(|s| s.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatSource> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.key.as_str())
    }
}

impl Default for StatSources {
    fn default() -> Self {
        Self::dotabuff()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotabuff_table_covers_all_keys() {
        let t = StatSources::dotabuff();
        let keys: Vec<&str> = t.keys().collect();
        assert_eq!(
            keys,
            vec!["cs@10", "cd@10", "gpm", "xpm", "kda", "wr", "pr", "hdpm", "tdpm", "hhpm"]
        );
    }

    #[test]
    fn lookup_by_key() {
        let t = StatSources::dotabuff();
        let gpm = t.get("gpm").unwrap();
        assert_eq!(gpm.url, "https://www.dotabuff.com/heroes/economy");
        assert_eq!(gpm.column, 2);

        let hhpm = t.get("hhpm").unwrap();
        assert!(hhpm.url.ends_with("/damage"));
        assert_eq!(hhpm.column, 4);

        assert!(t.get("GPM").is_none());
        assert!(t.get("mmr").is_none());
    }
}
