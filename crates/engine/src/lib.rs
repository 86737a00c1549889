//! Application state for the business-case calculator.
//!
//! `AppState` holds everything a view needs: the grouped parameters, the flat
//! parameter store and the two derived records. Derived records change only on an
//! explicit [`AppState::recompute`]; edits leave them stale until then.

use analytics::{BreakEvenAnalysis, Calculation, CalculationEngine, ProfitAndLoss, UnitEconomics};
use configuration::{DataSources, SeedResults, load_parameter_groups, load_seed_results};
use core_types::{ParameterEdit, ParameterGroups, ParameterStore, ParameterValue, parse_decimal};

/// The single source of truth for one calculator session.
#[derive(Debug, Default)]
pub struct AppState {
    groups: ParameterGroups,
    parameters: ParameterStore,
    results: Calculation,
    /// True when the store was edited after the derived records were last produced.
    stale: bool,
    calculator: CalculationEngine,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads both data documents. Each load is independent: a failure is logged and
    /// leaves the corresponding state empty.
    pub fn load(sources: &DataSources) -> Self {
        let groups = load_parameter_groups(&sources.parameter_groups)
            .inspect_err(|e| tracing::error!(error = %e, "Error loading grouped parameters."))
            .ok();
        let seed = load_seed_results(&sources.seed_results)
            .inspect_err(|e| tracing::error!(error = %e, "Error loading seed results."))
            .ok();
        Self::from_parts(groups, seed)
    }

    /// Builds the state from already-loaded documents; `None` means the load failed.
    pub fn from_parts(groups: Option<ParameterGroups>, seed: Option<SeedResults>) -> Self {
        let groups = groups.unwrap_or_default();
        let parameters = ParameterStore::from_groups(&groups);

        let results = match &seed {
            Some(seed) => {
                warn_if_seed_differs(&seed.inputs, &parameters);
                Calculation {
                    unit_economics: UnitEconomics::from_record(&seed.unit_economics),
                    pl: ProfitAndLoss::from_record(&seed.pl),
                }
            }
            None => Calculation::default(),
        };

        Self {
            groups,
            parameters,
            results,
            stale: false,
            calculator: CalculationEngine::new(),
        }
    }

    pub fn groups(&self) -> &ParameterGroups {
        &self.groups
    }

    pub fn parameters(&self) -> &ParameterStore {
        &self.parameters
    }

    pub fn unit_economics(&self) -> &UnitEconomics {
        &self.results.unit_economics
    }

    pub fn pl(&self) -> &ProfitAndLoss {
        &self.results.pl
    }

    pub fn results(&self) -> &Calculation {
        &self.results
    }

    /// Whether parameters were edited since the derived records were produced.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Replaces exactly one entry of the store with the parsed text of an edit field.
    ///
    /// Text with trailing garbage keeps its numeric prefix; text without one is stored
    /// as zero. Derived records are not touched.
    pub fn edit(&mut self, label: &str, raw_value: &str) -> Option<ParameterValue> {
        let value = ParameterValue::from_edit(raw_value);
        if parse_decimal(raw_value).is_none() {
            tracing::warn!(label, raw_value, stored = %value, "Edit is not a plain number.");
        }
        if self.parameters.get(label).is_none() {
            tracing::warn!(label, "Editing a parameter that is not in the loaded groups.");
        }
        tracing::debug!(label, value = %value, "Parameter edited.");
        self.stale = true;
        self.parameters.set(label, value)
    }

    pub fn apply(&mut self, edit: &ParameterEdit) -> Option<ParameterValue> {
        self.edit(&edit.label, &edit.raw_value)
    }

    /// Runs the calculation over the current store and replaces both derived
    /// records wholesale. Returns the new pair.
    pub fn recompute(&mut self) -> Calculation {
        self.results = self.calculator.compute(&self.parameters);
        self.stale = false;
        tracing::info!(
            revenue_per_customer = %self.results.unit_economics.total_revenue,
            margin_per_customer = %self.results.unit_economics.margin,
            net_margin = %self.results.pl.net_margin,
            "Metrics recalculated."
        );
        self.results.clone()
    }

    /// Break-even figures for the records currently on display.
    pub fn break_even(&self) -> BreakEvenAnalysis {
        BreakEvenAnalysis::from_results(&self.results.unit_economics, &self.results.pl)
    }
}

/// Logs when the seed was computed from inputs other than the loaded ones.
fn warn_if_seed_differs(seed_inputs: &ParameterStore, parameters: &ParameterStore) {
    if seed_inputs.is_empty() || parameters.is_empty() {
        return;
    }
    let differing = seed_inputs
        .iter()
        .filter(|(label, seed_value)| {
            parameters.get(label).and_then(ParameterValue::as_decimal) != seed_value.as_decimal()
        })
        .count();
    if differing > 0 {
        tracing::warn!(
            differing,
            "Seed results were computed from different inputs; recompute to refresh them."
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Parameter, ParameterKey};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn groups() -> ParameterGroups {
        let mut groups = ParameterGroups::new();
        groups.0.insert(
            "Volumen".to_string(),
            vec![
                Parameter {
                    label: ParameterKey::Customers.label().to_string(),
                    value: ParameterValue::Number(dec!(1000)),
                },
                Parameter {
                    label: ParameterKey::FixedOverhead.label().to_string(),
                    value: ParameterValue::Number(dec!(10000)),
                },
            ],
        );
        groups
    }

    fn seed() -> SeedResults {
        let mut seed = SeedResults::default();
        seed.unit_economics
            .insert(UnitEconomics::MARGIN.to_string(), ParameterValue::Number(dec!(20)));
        seed.pl
            .insert(ProfitAndLoss::CUSTOMERS.to_string(), ParameterValue::Number(dec!(800)));
        seed
    }

    #[test]
    fn seed_is_displayed_until_first_recompute() {
        let state = AppState::from_parts(Some(groups()), Some(seed()));
        assert_eq!(state.unit_economics().margin, dec!(20));
        assert_eq!(state.pl().customers, dec!(800));
        assert_eq!(state.parameters().len(), 2);
        assert!(!state.is_stale());
    }

    #[test]
    fn edits_do_not_recompute() {
        let mut state = AppState::from_parts(Some(groups()), Some(seed()));
        state.edit(ParameterKey::Customers.label(), "2000");

        assert!(state.is_stale());
        assert_eq!(state.parameters().decimal(ParameterKey::Customers), Some(dec!(2000)));
        assert_eq!(state.pl().customers, dec!(800));

        let results = state.recompute();
        assert!(!state.is_stale());
        assert_eq!(results.pl.customers, dec!(2000));
        assert_eq!(state.pl().monthly_revenue, dec!(65600));
        assert_eq!(state.unit_economics().margin, dec!(17));
    }

    #[test]
    fn unparseable_edit_falls_back_to_default_on_recompute() {
        let mut state = AppState::from_parts(Some(groups()), None);
        let previous = state.edit(ParameterKey::Customers.label(), "lots");
        assert_eq!(previous, Some(ParameterValue::Number(dec!(1000))));
        assert_eq!(state.parameters().decimal(ParameterKey::Customers), Some(Decimal::ZERO));

        state.recompute();
        assert_eq!(state.pl().customers, dec!(1000));
    }

    #[test]
    fn edit_with_trailing_text_keeps_the_number() {
        let mut state = AppState::from_parts(Some(groups()), None);
        state.edit(ParameterKey::Customers.label(), "1500 clientes");
        assert_eq!(state.parameters().decimal(ParameterKey::Customers), Some(dec!(1500)));
    }

    #[test]
    fn failed_loads_leave_state_empty() {
        let state = AppState::from_parts(None, None);
        assert!(state.groups().is_empty());
        assert!(state.parameters().is_empty());
        assert_eq!(state.results(), &Calculation::default());
    }

    #[test]
    fn break_even_follows_displayed_records() {
        let mut state = AppState::from_parts(Some(groups()), Some(seed()));
        let seeded = state.break_even();
        assert_eq!(seeded.break_even_customers, dec!(500));
        assert_eq!(seeded.current_customers, dec!(800));
        assert_eq!(seeded.safety_margin, dec!(300));

        state.recompute();
        let computed = state.break_even();
        assert_eq!(computed.break_even_customers, dec!(589));
        assert_eq!(computed.safety_margin, dec!(411));
    }

    #[test]
    fn apply_uses_the_edit_label() {
        let mut state = AppState::new();
        let edit: ParameterEdit = "Coste fijo mensual soporte por cliente=3".parse().unwrap();
        state.apply(&edit);
        assert_eq!(state.parameters().decimal(ParameterKey::SupportCost), Some(dec!(3)));
    }
}
