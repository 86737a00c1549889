use crate::defaults::or_default;
use crate::report::{ProfitAndLoss, UnitEconomics};
use core_types::ParameterKey;
use rust_decimal::Decimal;
use serde::Serialize;

/// Break-even figures derived at render time from the current derived records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenAnalysis {
    /// Customers needed for per-customer margin to cover the fixed overhead.
    #[serde(with = "rust_decimal::serde::float")]
    pub break_even_customers: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_customers: Decimal,
    /// Customers above break-even, never negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub safety_margin: Decimal,
}

impl BreakEvenAnalysis {
    /// Builds the analysis from whatever records are currently displayed.
    ///
    /// A zero overhead or customer count in the P&L is treated as missing and replaced
    /// by its default, matching how the records are read elsewhere.
    pub fn from_results(unit_economics: &UnitEconomics, pl: &ProfitAndLoss) -> Self {
        let overhead = or_default(Some(pl.fixed_overhead), ParameterKey::FixedOverhead);
        let current_customers = or_default(Some(pl.customers), ParameterKey::Customers);
        let break_even_customers = break_even_customers(overhead, unit_economics.margin);

        Self {
            break_even_customers,
            current_customers,
            safety_margin: current_customers
                .saturating_sub(break_even_customers)
                .max(Decimal::ZERO),
        }
    }
}

/// `ceil(overhead / margin)` for a positive margin, zero otherwise.
///
/// A quotient too large for `Decimal` saturates at `Decimal::MAX`.
pub fn break_even_customers(overhead: Decimal, margin_per_customer: Decimal) -> Decimal {
    if margin_per_customer <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    overhead
        .checked_div(margin_per_customer)
        .map(|customers| customers.ceil())
        .unwrap_or(Decimal::MAX)
}
