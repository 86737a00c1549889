use crate::error::CoreError;
use crate::value::ParameterValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single labelled input as it appears in the grouped configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub label: String,
    pub value: ParameterValue,
}

/// Named sections of parameters, kept in document order for display.
///
/// Grouping only affects presentation; the calculation reads the flattened store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterGroups(pub IndexMap<String, Vec<Parameter>>);

impl ParameterGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(group name, items)` in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Parameter>)> {
        self.0.iter()
    }

    /// Total number of parameters across all groups.
    pub fn parameter_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

/// A single user edit, written on the command line as `label=value`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterEdit {
    pub label: String,
    pub raw_value: String,
}

impl FromStr for ParameterEdit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Values never contain '='.
        let (label, raw_value) = s.rsplit_once('=').ok_or_else(|| {
            CoreError::InvalidInput(s.to_string(), "expected `label=value`".to_string())
        })?;
        let label = label.trim();
        if label.is_empty() {
            return Err(CoreError::InvalidInput(
                s.to_string(),
                "parameter label is empty".to_string(),
            ));
        }
        Ok(Self {
            label: label.to_string(),
            raw_value: raw_value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn groups_keep_document_order() {
        let groups: ParameterGroups = serde_json::from_value(json!({
            "Precios": [
                { "label": "Cuota mensual por cliente (pack base)", "value": 25 },
                { "label": "Precio hora VOZ (exceso) – a definir", "value": "a definir" }
            ],
            "Costes": [
                { "label": "Coste hora de operación HUMANO", "value": 8 }
            ]
        }))
        .unwrap();

        let names: Vec<_> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["Precios", "Costes"]);
        assert_eq!(groups.parameter_count(), 3);
        assert_eq!(groups.0["Precios"][0].value, ParameterValue::Number(dec!(25)));
    }

    #[test]
    fn edit_parses_label_and_value() {
        let edit: ParameterEdit = "Clientes (volumen)=2500".parse().unwrap();
        assert_eq!(edit.label, "Clientes (volumen)");
        assert_eq!(edit.raw_value, "2500");
    }

    #[test]
    fn edit_without_separator_is_rejected() {
        assert!("Clientes (volumen)".parse::<ParameterEdit>().is_err());
        assert!("=12".parse::<ParameterEdit>().is_err());
    }
}
