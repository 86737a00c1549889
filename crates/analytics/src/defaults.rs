use core_types::ParameterKey;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fallback values used when a parameter is absent, non-numeric or zero.
///
/// Every read of an input goes through this table so that the engine and the
/// presentation fallbacks can never disagree on a default.
pub const DEFAULTS: [(ParameterKey, Decimal); 16] = [
    (ParameterKey::BaseMonthlyFee, dec!(25)),
    (ParameterKey::VoiceHoursConsumed, dec!(1.2)),
    (ParameterKey::VoiceHoursIncluded, dec!(0.5)),
    (ParameterKey::HumanHoursConsumed, dec!(0.2)),
    (ParameterKey::HumanHoursIncluded, dec!(0)),
    (ParameterKey::MessagesConsumed, dec!(1200)),
    (ParameterKey::MessagesIncluded, dec!(200)),
    (ParameterKey::VoiceExcessPrice, dec!(6)),
    (ParameterKey::HumanExcessPrice, dec!(12)),
    (ParameterKey::PricePer100kMessages, dec!(120)),
    (ParameterKey::VoiceOperatingCost, dec!(4)),
    (ParameterKey::HumanOperatingCost, dec!(8)),
    (ParameterKey::CostPer10kMessages, dec!(70)),
    (ParameterKey::SupportCost, dec!(1)),
    (ParameterKey::Customers, dec!(1000)),
    (ParameterKey::FixedOverhead, dec!(10000)),
];

/// The default for a parameter.
pub fn default_for(key: ParameterKey) -> Decimal {
    DEFAULTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, value)| *value)
        .unwrap_or(Decimal::ZERO)
}

/// Applies the fallback rule: a missing or zero value is replaced by the default.
pub fn or_default(value: Option<Decimal>, key: ParameterKey) -> Decimal {
    match value {
        Some(v) if !v.is_zero() => v,
        _ => default_for(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_parameter_has_exactly_one_default() {
        for key in ParameterKey::ALL {
            let count = DEFAULTS.iter().filter(|(k, _)| *k == key).count();
            assert_eq!(count, 1, "{key:?}");
        }
    }

    #[test]
    fn zero_and_missing_fall_back() {
        assert_eq!(or_default(None, ParameterKey::BaseMonthlyFee), dec!(25));
        assert_eq!(or_default(Some(Decimal::ZERO), ParameterKey::Customers), dec!(1000));
        assert_eq!(or_default(Some(dec!(-3)), ParameterKey::Customers), dec!(-3));
    }
}
