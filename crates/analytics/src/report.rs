use core_types::{DerivedRecord, ParameterValue};
use rust_decimal::Decimal;
use serde::Serialize;

/// Per-customer revenue, cost and margin breakdown.
///
/// Always produced wholesale by the engine; never partially updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnitEconomics {
    // I. Revenue per customer
    #[serde(rename = "Cuota base", with = "rust_decimal::serde::float")]
    pub base_fee: Decimal,
    #[serde(rename = "Ingresos exceso VOZ", with = "rust_decimal::serde::float")]
    pub voice_excess_revenue: Decimal,
    #[serde(rename = "Ingresos exceso HUMANO", with = "rust_decimal::serde::float")]
    pub human_excess_revenue: Decimal,
    #[serde(rename = "Ingresos exceso MENSAJES", with = "rust_decimal::serde::float")]
    pub messages_excess_revenue: Decimal,
    #[serde(rename = "Ingreso total/cliente", with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,

    // II. Cost per customer
    #[serde(rename = "Coste VOZ", with = "rust_decimal::serde::float")]
    pub voice_cost: Decimal,
    #[serde(rename = "Coste HUMANO", with = "rust_decimal::serde::float")]
    pub human_cost: Decimal,
    #[serde(rename = "Coste MENSAJES", with = "rust_decimal::serde::float")]
    pub messages_cost: Decimal,
    #[serde(rename = "Coste soporte/cliente", with = "rust_decimal::serde::float")]
    pub support_cost: Decimal,
    #[serde(rename = "Coste total/cliente", with = "rust_decimal::serde::float")]
    pub total_cost: Decimal,

    // III. Margin
    #[serde(rename = "Margen €/cliente", with = "rust_decimal::serde::float")]
    pub margin: Decimal,
    /// `None` when revenue is zero (the percentage is undefined).
    #[serde(rename = "Margen % sobre ingresos", with = "rust_decimal::serde::float_option")]
    pub margin_pct: Option<Decimal>,
}

impl UnitEconomics {
    pub const BASE_FEE: &'static str = "Cuota base";
    pub const VOICE_EXCESS_REVENUE: &'static str = "Ingresos exceso VOZ";
    pub const HUMAN_EXCESS_REVENUE: &'static str = "Ingresos exceso HUMANO";
    pub const MESSAGES_EXCESS_REVENUE: &'static str = "Ingresos exceso MENSAJES";
    pub const TOTAL_REVENUE: &'static str = "Ingreso total/cliente";
    pub const VOICE_COST: &'static str = "Coste VOZ";
    pub const HUMAN_COST: &'static str = "Coste HUMANO";
    pub const MESSAGES_COST: &'static str = "Coste MENSAJES";
    pub const SUPPORT_COST: &'static str = "Coste soporte/cliente";
    pub const TOTAL_COST: &'static str = "Coste total/cliente";
    pub const MARGIN: &'static str = "Margen €/cliente";
    pub const MARGIN_PCT: &'static str = "Margen % sobre ingresos";

    /// Reads a previously computed record. Missing or non-numeric entries read as zero;
    /// a missing percentage reads as undefined.
    pub fn from_record(record: &DerivedRecord) -> Self {
        let read = |key: &str| ParameterValue::or_zero(record.get(key));
        Self {
            base_fee: read(Self::BASE_FEE),
            voice_excess_revenue: read(Self::VOICE_EXCESS_REVENUE),
            human_excess_revenue: read(Self::HUMAN_EXCESS_REVENUE),
            messages_excess_revenue: read(Self::MESSAGES_EXCESS_REVENUE),
            total_revenue: read(Self::TOTAL_REVENUE),
            voice_cost: read(Self::VOICE_COST),
            human_cost: read(Self::HUMAN_COST),
            messages_cost: read(Self::MESSAGES_COST),
            support_cost: read(Self::SUPPORT_COST),
            total_cost: read(Self::TOTAL_COST),
            margin: read(Self::MARGIN),
            margin_pct: record.get(Self::MARGIN_PCT).and_then(ParameterValue::as_decimal),
        }
    }
}

/// Monthly profit-and-loss projection, scaled by customer volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfitAndLoss {
    #[serde(rename = "Clientes", with = "rust_decimal::serde::float")]
    pub customers: Decimal,
    #[serde(rename = "Ingreso total (mes)", with = "rust_decimal::serde::float")]
    pub monthly_revenue: Decimal,
    #[serde(rename = "Coste total (mes)", with = "rust_decimal::serde::float")]
    pub monthly_cost: Decimal,
    #[serde(rename = "Margen bruto (mes)", with = "rust_decimal::serde::float")]
    pub gross_margin: Decimal,
    #[serde(rename = "Overhead fijo mensual", with = "rust_decimal::serde::float")]
    pub fixed_overhead: Decimal,
    #[serde(rename = "Margen neto (mes)", with = "rust_decimal::serde::float")]
    pub net_margin: Decimal,
    /// `None` when monthly revenue is zero.
    #[serde(rename = "Margen neto % sobre ingresos", with = "rust_decimal::serde::float_option")]
    pub net_margin_pct: Option<Decimal>,
}

impl ProfitAndLoss {
    pub const CUSTOMERS: &'static str = "Clientes";
    pub const MONTHLY_REVENUE: &'static str = "Ingreso total (mes)";
    pub const MONTHLY_COST: &'static str = "Coste total (mes)";
    pub const GROSS_MARGIN: &'static str = "Margen bruto (mes)";
    pub const FIXED_OVERHEAD: &'static str = "Overhead fijo mensual";
    pub const NET_MARGIN: &'static str = "Margen neto (mes)";
    pub const NET_MARGIN_PCT: &'static str = "Margen neto % sobre ingresos";

    pub fn from_record(record: &DerivedRecord) -> Self {
        let read = |key: &str| ParameterValue::or_zero(record.get(key));
        Self {
            customers: read(Self::CUSTOMERS),
            monthly_revenue: read(Self::MONTHLY_REVENUE),
            monthly_cost: read(Self::MONTHLY_COST),
            gross_margin: read(Self::GROSS_MARGIN),
            fixed_overhead: read(Self::FIXED_OVERHEAD),
            net_margin: read(Self::NET_MARGIN),
            net_margin_pct: record.get(Self::NET_MARGIN_PCT).and_then(ParameterValue::as_decimal),
        }
    }
}

/// The pair of derived records produced by one calculation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub unit_economics: UnitEconomics,
    pub pl: ProfitAndLoss,
}
