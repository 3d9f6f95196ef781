//! Per-file registry of taken identifiers.
//!
//! Seeded with the module's bound names, then grows with every name a fix
//! introduces, so two fixes from the same pass never pick the same name.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    names: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Take the first free name of `candidate`, `candidate1`, `candidate2`, ...
    pub fn reserve(&mut self, candidate: &str) -> String {
        let mut name = candidate.to_string();
        let mut suffix = 0u32;
        while self.names.contains(&name) {
            suffix += 1;
            name = format!("{candidate}{suffix}");
        }
        self.names.insert(name.clone());
        name
    }
}

/// Upper-case the first character, leave the rest alone.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a property key into an identifier fragment: quotes and other
/// non-identifier characters split words, each word is capitalized.
pub fn pascal_case(s: &str) -> String {
    s.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}
