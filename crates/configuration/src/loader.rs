use crate::error::ConfigError;
use core_types::{DerivedRecord, ParameterGroups, ParameterStore};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// The grouped parameter document: `{"inputGroups": {"<group>": [{"label", "value"}]}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedParametersDocument {
    pub input_groups: ParameterGroups,
}

/// A previously computed result set, shown until the user first recomputes.
///
/// Every section is optional; a missing one reads as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedResults {
    /// The inputs the seed was computed from.
    #[serde(default)]
    pub inputs: ParameterStore,
    #[serde(default)]
    pub unit_economics: DerivedRecord,
    #[serde(default)]
    pub pl: DerivedRecord,
}

/// Reads the grouped parameter document.
pub fn load_parameter_groups(path: &Path) -> Result<ParameterGroups, ConfigError> {
    let document: GroupedParametersDocument = read_json(path)?;
    tracing::info!(
        path = %path.display(),
        groups = document.input_groups.0.len(),
        parameters = document.input_groups.parameter_count(),
        "Loaded parameter groups."
    );
    Ok(document.input_groups)
}

/// Reads the previously computed result document.
pub fn load_seed_results(path: &Path) -> Result<SeedResults, ConfigError> {
    let seed: SeedResults = read_json(path)?;
    tracing::info!(
        path = %path.display(),
        inputs = seed.inputs.len(),
        unit_economics = seed.unit_economics.len(),
        pl = seed.pl.len(),
        "Loaded seed results."
    );
    Ok(seed)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{ParameterKey, ParameterValue};
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_json(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_grouped_parameters_in_order() {
        let file = write_json(
            r#"{
                "inputGroups": {
                    "Precios": [
                        { "label": "Cuota mensual por cliente (pack base)", "value": 25 },
                        { "label": "Precio hora VOZ (exceso) – a definir", "value": 6 }
                    ],
                    "Volumen": [
                        { "label": "Clientes (volumen)", "value": "1000" }
                    ]
                }
            }"#,
        );
        let groups = load_parameter_groups(file.path()).unwrap();
        let names: Vec<_> = groups.iter().map(|(name, _)| name.clone()).collect();
        assert_eq!(names, ["Precios", "Volumen"]);

        let store = ParameterStore::from_groups(&groups);
        assert_eq!(store.decimal(ParameterKey::Customers), Some(dec!(1000)));
        assert_eq!(store.decimal(ParameterKey::VoiceExcessPrice), Some(dec!(6)));
    }

    #[test]
    fn seed_sections_are_optional() {
        let file = write_json(r#"{ "unitEconomics": { "Cuota base": 25 } }"#);
        let seed = load_seed_results(file.path()).unwrap();
        assert!(seed.inputs.is_empty());
        assert!(seed.pl.is_empty());
        assert_eq!(seed.unit_economics.get("Cuota base"), Some(&ParameterValue::Number(dec!(25))));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = load_seed_results(Path::new("no/such/data.json")).unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, Path::new("no/such/data.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let file = write_json(r#"{ "inputGroups": [1, 2, 3] }"#);
        assert!(matches!(
            load_parameter_groups(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
