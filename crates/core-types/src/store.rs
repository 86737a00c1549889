use crate::enums::ParameterKey;
use crate::parameter::ParameterGroups;
use crate::value::ParameterValue;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A derived record as exchanged with the configuration documents: label → value.
pub type DerivedRecord = IndexMap<String, ParameterValue>;

/// The flat label → value mapping the calculation engine consumes.
///
/// Seeded once from the grouped document; afterwards every edit replaces exactly one
/// entry. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterStore(IndexMap<String, ParameterValue>);

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens grouped parameters. A label repeated in a later group overwrites the earlier one.
    pub fn from_groups(groups: &ParameterGroups) -> Self {
        let mut store = Self::new();
        for (group, items) in groups.iter() {
            for item in items {
                if store.0.insert(item.label.clone(), item.value.clone()).is_some() {
                    tracing::warn!(label = %item.label, group = %group, "Duplicate parameter label; keeping the later value.");
                }
            }
        }
        store
    }

    pub fn get(&self, label: &str) -> Option<&ParameterValue> {
        self.0.get(label)
    }

    pub fn get_key(&self, key: ParameterKey) -> Option<&ParameterValue> {
        self.0.get(key.label())
    }

    /// The numeric value of a known parameter, if present and numeric.
    pub fn decimal(&self, key: ParameterKey) -> Option<Decimal> {
        self.get_key(key).and_then(ParameterValue::as_decimal)
    }

    /// Replaces (or inserts) a single entry, returning the previous value.
    pub fn set(&mut self, label: impl Into<String>, value: ParameterValue) -> Option<ParameterValue> {
        self.0.insert(label.into(), value)
    }

    pub fn set_key(&mut self, key: ParameterKey, value: impl Into<ParameterValue>) -> Option<ParameterValue> {
        self.set(key.label(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParameterValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, ParameterValue)> for ParameterStore {
    fn from_iter<I: IntoIterator<Item = (String, ParameterValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
