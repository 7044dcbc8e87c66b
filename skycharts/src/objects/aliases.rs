//! Ordered alias bookkeeping for celestial objects
//!
//! One object is usually known by several names: the Orion Nebula is NGC1976,
//! M42, LBN974 and "The Orion Nebula". [`AliasMap`] keeps every alias together
//! with the catalog that assigned it (if any), in the order they were added.
//! The catalog, alias-key and combined views are all derived from that one
//! ordered list so they can never disagree.

/// One alias and the catalog that assigned it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub alias: String,
    pub catalog: Option<String>,
}

impl AliasEntry {
    /// `catalog + alias` when the alias is catalog-scoped, the bare alias otherwise
    pub fn combined(&self) -> String {
        match &self.catalog {
            Some(catalog) => format!("{catalog}{}", self.alias),
            None => self.alias.clone(),
        }
    }
}

/// Insertion-ordered mapping of alias to owning catalog.
///
/// Re-inserting an existing alias replaces its catalog but keeps the position
/// it was first inserted at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: Vec<AliasEntry>,
}

impl AliasMap {
    /// Create a map seeded with the primary identifier and its catalog
    pub fn with_primary(identifier: &str, catalog: &str) -> Self {
        let mut map = Self::default();
        map.insert(identifier, Some(catalog));
        map
    }

    /// Record `alias`, optionally scoped to `catalog`
    pub fn insert(&mut self, alias: &str, catalog: Option<&str>) {
        let catalog = catalog.map(str::to_string);
        match self.entries.iter_mut().find(|entry| entry.alias == alias) {
            Some(entry) => entry.catalog = catalog,
            None => self.entries.push(AliasEntry {
                alias: alias.to_string(),
                catalog,
            }),
        }
    }

    pub fn get(&self, alias: &str) -> Option<&AliasEntry> {
        self.entries.iter().find(|entry| entry.alias == alias)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.get(alias).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every catalog that has assigned an alias, in insertion order
    pub fn catalogs(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|entry| entry.catalog.clone())
            .collect()
    }

    /// Every alias string, in insertion order
    pub fn alias_keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.alias.clone()).collect()
    }

    /// Every alias in its combined `{catalog}{alias}` form, in insertion order
    pub fn combined_aliases(&self) -> Vec<String> {
        self.entries.iter().map(AliasEntry::combined).collect()
    }
}
