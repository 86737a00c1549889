use analytics::{BreakEvenAnalysis, ProfitAndLoss, UnitEconomics};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Parts of a whole; rendered with each slice's share.
    Pie,
    Bar,
}

/// How the values of a chart are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueUnit {
    Currency,
    Count,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub name: &'static str,
    pub value: Decimal,
}

/// A single chart: a titled, ordered series of named values.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: &'static str,
    pub kind: ChartKind,
    pub unit: ValueUnit,
    pub points: Vec<ChartPoint>,
}

impl Chart {
    fn new(title: &'static str, kind: ChartKind, unit: ValueUnit) -> Self {
        Self { title, kind, unit, points: Vec::new() }
    }

    /// Adds a point, flooring negative values at zero.
    fn clamped(mut self, name: &'static str, value: Decimal) -> Self {
        self.points.push(ChartPoint { name, value: value.max(Decimal::ZERO) });
        self
    }

    fn raw(mut self, name: &'static str, value: Decimal) -> Self {
        self.points.push(ChartPoint { name, value });
        self
    }

    /// Sum of all point values, saturating at `Decimal::MAX`.
    pub fn total(&self) -> Decimal {
        self.points
            .iter()
            .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.value))
    }

    /// The largest point value, or zero for an empty chart.
    pub fn max(&self) -> Decimal {
        self.points.iter().map(|p| p.value).max().unwrap_or(Decimal::ZERO)
    }
}

/// Per-customer revenue split into base fee and excess usage.
pub fn revenue_breakdown(ue: &UnitEconomics) -> Chart {
    Chart::new("Desglose de Ingresos", ChartKind::Pie, ValueUnit::Currency)
        .clamped("Cuota base", ue.base_fee)
        .clamped("Exceso VOZ", ue.voice_excess_revenue)
        .clamped("Exceso HUMANO", ue.human_excess_revenue)
        .clamped("Exceso MENSAJES", ue.messages_excess_revenue)
}

/// Per-customer cost split by component.
pub fn cost_breakdown(ue: &UnitEconomics) -> Chart {
    Chart::new("Desglose de Costes", ChartKind::Pie, ValueUnit::Currency)
        .clamped("Coste VOZ", ue.voice_cost)
        .clamped("Coste HUMANO", ue.human_cost)
        .clamped("Coste MENSAJES", ue.messages_cost)
        .clamped("Coste Soporte", ue.support_cost)
}

pub fn revenue_vs_cost(ue: &UnitEconomics) -> Chart {
    Chart::new("Comparativa: Ingresos vs Costes", ChartKind::Bar, ValueUnit::Currency)
        .clamped("Ingresos", ue.total_revenue)
        .clamped("Costes", ue.total_cost)
        .clamped("Margen", ue.margin)
}

pub fn monthly_revenue_vs_cost(pl: &ProfitAndLoss) -> Chart {
    Chart::new("Ingresos vs Costes", ChartKind::Bar, ValueUnit::Currency)
        .clamped("Ingresos", pl.monthly_revenue)
        .clamped("Costes", pl.monthly_cost)
        .clamped("Margen Bruto", pl.gross_margin)
}

/// Gross margin, overhead and what is left of it.
pub fn margin_flow(pl: &ProfitAndLoss) -> Chart {
    Chart::new("Flujo de Márgenes", ChartKind::Bar, ValueUnit::Currency)
        .clamped("Margen Bruto", pl.gross_margin)
        .clamped("Overhead", pl.fixed_overhead)
        .clamped("Margen Neto", pl.net_margin)
}

pub fn break_even_vs_actual(analysis: &BreakEvenAnalysis) -> Chart {
    Chart::new("Break-Even vs Actual", ChartKind::Bar, ValueUnit::Count)
        .raw("Break-Even", analysis.break_even_customers)
        .raw("Actual", analysis.current_customers)
}

/// Every chart of the unit-economics view, in display order.
pub fn unit_economics_charts(ue: &UnitEconomics) -> Vec<Chart> {
    vec![revenue_breakdown(ue), cost_breakdown(ue), revenue_vs_cost(ue)]
}

/// Every chart of the P&L view, in display order.
pub fn pl_charts(pl: &ProfitAndLoss, analysis: &BreakEvenAnalysis) -> Vec<Chart> {
    vec![monthly_revenue_vs_cost(pl), margin_flow(pl), break_even_vs_actual(analysis)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn negative_components_are_floored() {
        let ue = UnitEconomics {
            base_fee: dec!(25),
            voice_excess_revenue: dec!(-4.2),
            human_excess_revenue: dec!(2.4),
            ..UnitEconomics::default()
        };
        let chart = revenue_breakdown(&ue);
        let values: Vec<_> = chart.points.iter().map(|p| p.value).collect();
        assert_eq!(values, [dec!(25), dec!(0), dec!(2.4), dec!(0)]);
        assert_eq!(chart.total(), dec!(27.4));
        assert_eq!(chart.max(), dec!(25));
    }

    #[test]
    fn total_of_huge_slices_saturates() {
        let ue = UnitEconomics {
            base_fee: Decimal::MAX,
            voice_excess_revenue: Decimal::MAX,
            ..UnitEconomics::default()
        };
        assert_eq!(revenue_breakdown(&ue).total(), Decimal::MAX);
    }

    #[test]
    fn margin_flow_hides_a_net_loss() {
        let pl = ProfitAndLoss {
            gross_margin: dec!(8000),
            fixed_overhead: dec!(10000),
            net_margin: dec!(-2000),
            ..ProfitAndLoss::default()
        };
        let chart = margin_flow(&pl);
        assert_eq!(chart.points[2].value, Decimal::ZERO);
    }

    #[test]
    fn break_even_chart_uses_counts() {
        let analysis = BreakEvenAnalysis {
            break_even_customers: dec!(589),
            current_customers: dec!(1000),
            safety_margin: dec!(411),
        };
        let chart = break_even_vs_actual(&analysis);
        assert_eq!(chart.unit, ValueUnit::Count);
        assert_eq!(chart.points[0].value, dec!(589));
        assert_eq!(chart.points[1].value, dec!(1000));
    }

    #[test]
    fn views_list_their_charts_in_order() {
        let titles: Vec<_> = unit_economics_charts(&UnitEconomics::default())
            .iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(
            titles,
            ["Desglose de Ingresos", "Desglose de Costes", "Comparativa: Ingresos vs Costes"]
        );
    }
}
