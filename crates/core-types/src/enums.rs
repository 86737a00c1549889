use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the input parameters the calculation engine understands.
///
/// The configuration documents key parameters by their business label, so every
/// variant maps to exactly one label (see [`ParameterKey::label`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ParameterKey {
    BaseMonthlyFee,
    VoiceHoursConsumed,
    VoiceHoursIncluded,
    HumanHoursConsumed,
    HumanHoursIncluded,
    MessagesConsumed,
    MessagesIncluded,
    VoiceExcessPrice,
    HumanExcessPrice,
    PricePer100kMessages,
    VoiceOperatingCost,
    HumanOperatingCost,
    CostPer10kMessages,
    SupportCost,
    Customers,
    FixedOverhead,
}

impl ParameterKey {
    /// Every known parameter, in the order the calculation reads them.
    pub const ALL: [ParameterKey; 16] = [
        ParameterKey::BaseMonthlyFee,
        ParameterKey::VoiceHoursConsumed,
        ParameterKey::VoiceHoursIncluded,
        ParameterKey::HumanHoursConsumed,
        ParameterKey::HumanHoursIncluded,
        ParameterKey::MessagesConsumed,
        ParameterKey::MessagesIncluded,
        ParameterKey::VoiceExcessPrice,
        ParameterKey::HumanExcessPrice,
        ParameterKey::PricePer100kMessages,
        ParameterKey::VoiceOperatingCost,
        ParameterKey::HumanOperatingCost,
        ParameterKey::CostPer10kMessages,
        ParameterKey::SupportCost,
        ParameterKey::Customers,
        ParameterKey::FixedOverhead,
    ];

    /// The label under which this parameter appears in the configuration documents.
    pub fn label(&self) -> &'static str {
        match self {
            ParameterKey::BaseMonthlyFee => "Cuota mensual por cliente (pack base)",
            ParameterKey::VoiceHoursConsumed => "Horas VOZ consumidas/cliente",
            ParameterKey::VoiceHoursIncluded => "Horas VOZ incluidas por cliente",
            ParameterKey::HumanHoursConsumed => "Horas HUMANO consumidas/cliente",
            ParameterKey::HumanHoursIncluded => "Horas HUMANO incluidas por cliente",
            ParameterKey::MessagesConsumed => "Mensajes consumidos/cliente",
            ParameterKey::MessagesIncluded => "Mensajes incluidos por cliente",
            ParameterKey::VoiceExcessPrice => "Precio hora VOZ (exceso) – a definir",
            ParameterKey::HumanExcessPrice => "Precio hora HUMANO (exceso) – a definir",
            ParameterKey::PricePer100kMessages => "Precio por 100.000 mensajes (exceso)",
            ParameterKey::VoiceOperatingCost => "Coste hora de operación VOZ (IA)",
            ParameterKey::HumanOperatingCost => "Coste hora de operación HUMANO",
            ParameterKey::CostPer10kMessages => "Coste mensajes (pack 10.000)",
            ParameterKey::SupportCost => "Coste fijo mensual soporte por cliente",
            ParameterKey::Customers => "Clientes (volumen)",
            ParameterKey::FixedOverhead => "Overhead fijo mensual Telefónica",
        }
    }

    /// Looks up a parameter by its configuration label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.label() == label)
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ParameterKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::UnknownParameter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<_> = ParameterKey::ALL.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ParameterKey::ALL.len());
    }

    #[test]
    fn label_lookup_round_trips() {
        for key in ParameterKey::ALL {
            assert_eq!(ParameterKey::from_label(key.label()), Some(key));
        }
        assert!("Horas VOZ".parse::<ParameterKey>().is_err());
    }
}
