//! Shared data structures used throughout the application.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Raw rate specification exactly as it appears in the data source: either
/// a bare number (legacy format, treated as the mid rate) or an object
/// carrying some subset of `low`/`mid`/`high`, with `min`/`max` accepted as
/// synonyms for `low`/`high`.
pub type RateSpec = Value;

/// Normalized low/mid/high rate triple, in currency units per 1,000 views.
///
/// `low <= mid <= high` is expected but not enforced; a source may ship an
/// explicit `mid` outside the bounds and the normalizer preserves it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RateRange {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl RateRange {
    pub fn new(low: f64, mid: f64, high: f64) -> Self {
        Self { low, mid, high }
    }

    /// Scale all three points by a common factor (e.g. views / 1000).
    pub fn scale(self, factor: f64) -> Self {
        Self {
            low: self.low * factor,
            mid: self.mid * factor,
            high: self.high * factor,
        }
    }
}

/// Per-niche rate specifications, kept raw until normalization.
#[derive(Debug, Clone, Default)]
pub struct NicheEntry {
    pub cpm: Option<RateSpec>,
    pub rpm: Option<RateSpec>,
}

impl NicheEntry {
    pub fn new(cpm: RateSpec, rpm: RateSpec) -> Self {
        Self {
            cpm: Some(cpm),
            rpm: Some(rpm),
        }
    }

    /// Build an entry from an arbitrary JSON value. Anything that is not an
    /// object yields an empty entry; recognized fields stay raw so the
    /// normalizer can apply its own coercion later.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                cpm: fields.remove("cpm"),
                rpm: fields.remove("rpm"),
            },
            _ => Self::default(),
        }
    }
}

/// Mapping from niche key to rate entry, preserving document order.
///
/// Order matters for display and the first key doubles as the default
/// niche, so entries live in a vector rather than a hash map. A duplicate
/// key keeps its first position and last value.
#[derive(Debug, Clone, Default)]
pub struct NicheTable {
    entries: Vec<(String, NicheEntry)>,
}

impl NicheTable {
    pub fn insert(&mut self, key: impl Into<String>, entry: NicheEntry) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| k.as_str() == key) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((key, entry)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&NicheEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, entry)| entry)
    }

    /// Niche keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn first_key(&self) -> Option<&str> {
        self.entries.first().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for NicheTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = NicheTable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of niche keys to rate entries")
            }

            fn visit_map<A>(self, mut access: A) -> Result<NicheTable, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = NicheTable::default();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    table.insert(key, NicheEntry::from_value(value));
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
