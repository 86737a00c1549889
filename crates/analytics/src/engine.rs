use crate::defaults::or_default;
use crate::report::{Calculation, ProfitAndLoss, UnitEconomics};
use core_types::{ParameterKey, ParameterStore};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Excess messages are billed per block of this many messages.
const MESSAGES_PER_BILLING_BLOCK: Decimal = dec!(100000);
/// Message delivery is bought in packs of this many messages.
const MESSAGES_PER_COST_PACK: Decimal = dec!(10000);

/// A stateless calculator for deriving unit economics and the monthly P&L
/// from a parameter set.
#[derive(Debug, Default)]
pub struct CalculationEngine {}

impl CalculationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point: one synchronous pass from inputs to both derived records.
    ///
    /// Every input goes through the defaults table, so this never fails. Negative or
    /// otherwise nonsensical inputs are not rejected; they flow through the arithmetic.
    pub fn compute(&self, parameters: &ParameterStore) -> Calculation {
        let unit_economics = self.calculate_unit_economics(parameters);
        let pl = Self::calculate_pl(
            &unit_economics,
            input(parameters, ParameterKey::Customers),
            input(parameters, ParameterKey::FixedOverhead),
        );
        tracing::debug!(
            revenue_per_customer = %unit_economics.total_revenue,
            margin_per_customer = %unit_economics.margin,
            net_margin = %pl.net_margin,
            "Calculation pass complete."
        );
        Calculation { unit_economics, pl }
    }

    /// Calculates the per-customer revenue, cost and margin breakdown.
    ///
    /// Arithmetic saturates at the bounds of `Decimal` instead of overflowing.
    pub fn calculate_unit_economics(&self, parameters: &ParameterStore) -> UnitEconomics {
        let read = |key| input(parameters, key);

        // --- Revenue ---
        let base_fee = read(ParameterKey::BaseMonthlyFee);
        let voice_consumed = read(ParameterKey::VoiceHoursConsumed);
        let human_consumed = read(ParameterKey::HumanHoursConsumed);
        let messages_consumed = read(ParameterKey::MessagesConsumed);

        let excess_voice_hours = voice_consumed.saturating_sub(read(ParameterKey::VoiceHoursIncluded));
        let excess_human_hours = human_consumed.saturating_sub(read(ParameterKey::HumanHoursIncluded));
        let excess_message_blocks = messages_consumed
            .saturating_sub(read(ParameterKey::MessagesIncluded))
            / MESSAGES_PER_BILLING_BLOCK;

        let voice_excess_revenue = excess_voice_hours.saturating_mul(read(ParameterKey::VoiceExcessPrice));
        let human_excess_revenue = excess_human_hours.saturating_mul(read(ParameterKey::HumanExcessPrice));
        let messages_excess_revenue =
            excess_message_blocks.saturating_mul(read(ParameterKey::PricePer100kMessages));

        let total_revenue = sum(&[
            base_fee,
            voice_excess_revenue,
            human_excess_revenue,
            messages_excess_revenue,
        ]);

        // --- Cost ---
        let voice_cost = voice_consumed.saturating_mul(read(ParameterKey::VoiceOperatingCost));
        let human_cost = human_consumed.saturating_mul(read(ParameterKey::HumanOperatingCost));
        let messages_cost = (messages_consumed / MESSAGES_PER_COST_PACK)
            .saturating_mul(read(ParameterKey::CostPer10kMessages));
        let support_cost = read(ParameterKey::SupportCost);

        let total_cost = sum(&[voice_cost, human_cost, messages_cost, support_cost]);

        // --- Margin ---
        let margin = total_revenue.saturating_sub(total_cost);

        UnitEconomics {
            base_fee,
            voice_excess_revenue,
            human_excess_revenue,
            messages_excess_revenue,
            total_revenue,
            voice_cost,
            human_cost,
            messages_cost,
            support_cost,
            total_cost,
            margin,
            margin_pct: percentage(margin, total_revenue),
        }
    }

    /// Scales unit economics to a monthly P&L for the given customer volume and overhead.
    pub fn calculate_pl(
        unit_economics: &UnitEconomics,
        customers: Decimal,
        fixed_overhead: Decimal,
    ) -> ProfitAndLoss {
        let monthly_revenue = unit_economics.total_revenue.saturating_mul(customers);
        let monthly_cost = unit_economics.total_cost.saturating_mul(customers);
        let gross_margin = monthly_revenue.saturating_sub(monthly_cost);
        let net_margin = gross_margin.saturating_sub(fixed_overhead);

        ProfitAndLoss {
            customers,
            monthly_revenue,
            monthly_cost,
            gross_margin,
            fixed_overhead,
            net_margin,
            net_margin_pct: percentage(net_margin, monthly_revenue),
        }
    }
}

fn sum(terms: &[Decimal]) -> Decimal {
    terms.iter().fold(Decimal::ZERO, |acc, term| acc.saturating_add(*term))
}

/// Reads one input, falling back to its default.
fn input(parameters: &ParameterStore, key: ParameterKey) -> Decimal {
    or_default(parameters.decimal(key), key)
}

/// `part / whole × 100`, or `None` when undefined (zero `whole`) or out of range.
pub fn percentage(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}
