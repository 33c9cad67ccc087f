//! Stats domain: additive stat totals.

use std::collections::BTreeMap;

use super::kinds::StatKind;

/// Per-stat sums keyed by canonical stat key.
///
/// Names that match the schema are stored under `StatKind::key`; anything
/// else is kept verbatim and remembered in `unrecognized` so callers can
/// report it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatTotals {
    values: BTreeMap<String, f32>,
    unrecognized: Vec<String>,
}

impl StatTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the stat called `name`. Duplicate keys accumulate.
    pub fn add(&mut self, name: &str, amount: f32) {
        let key = match StatKind::from_name(name) {
            Some(kind) => kind.key().to_string(),
            None => {
                if !self.unrecognized.iter().any(|n| n == name) {
                    self.unrecognized.push(name.to_string());
                }
                name.to_string()
            }
        };
        *self.values.entry(key).or_insert(0.0) += amount;
    }

    pub fn add_kind(&mut self, kind: StatKind, amount: f32) {
        *self.values.entry(kind.key().to_string()).or_insert(0.0) += amount;
    }

    /// Adds every entry of a node's stat map.
    pub fn add_all<'a, I>(&mut self, stats: I)
    where
        I: IntoIterator<Item = (&'a String, &'a f32)>,
    {
        for (name, amount) in stats {
            self.add(name, *amount);
        }
    }

    /// Folds another set of totals into this one.
    pub fn merge(&mut self, other: &StatTotals) {
        for (key, amount) in &other.values {
            *self.values.entry(key.clone()).or_insert(0.0) += amount;
        }
        for name in &other.unrecognized {
            if !self.unrecognized.contains(name) {
                self.unrecognized.push(name.clone());
            }
        }
    }

    pub fn get(&self, kind: StatKind) -> f32 {
        self.values.get(kind.key()).copied().unwrap_or(0.0)
    }

    /// Looks a stat up by any accepted spelling of its name.
    pub fn get_named(&self, name: &str) -> f32 {
        let key = StatKind::from_name(name)
            .map(|kind| kind.key().to_string())
            .unwrap_or_else(|| name.to_string());
        self.values.get(&key).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stat names seen that are not part of the schema.
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    /// Multi-line summary for logging, sorted by key.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "  (no stats)".to_string();
        }
        self.values
            .iter()
            .map(|(key, amount)| {
                let label = StatKind::from_name(key)
                    .map(StatKind::label)
                    .unwrap_or(key.as_str());
                format!("  - {}: {:+}", label, amount)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
