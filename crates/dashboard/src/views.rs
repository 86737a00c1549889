use crate::charts::{self, Chart, ChartKind, ValueUnit};
use crate::format::{format_currency, format_number, format_percent};
use analytics::{BreakEvenAnalysis, ProfitAndLoss, UnitEconomics, percentage};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use core_types::{ParameterGroups, ParameterStore};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt::Write;

const BAR: char = '█';

/// The three screens of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Parameters,
    UnitEconomics,
    ProfitAndLoss,
}

impl View {
    pub const ALL: [View; 3] = [View::Parameters, View::UnitEconomics, View::ProfitAndLoss];

    pub fn title(&self) -> &'static str {
        match self {
            View::Parameters => "Parámetros",
            View::UnitEconomics => "Unit Econ",
            View::ProfitAndLoss => "P&L",
        }
    }
}

/// One table per parameter group, showing the current value of every item.
pub fn render_parameters(groups: &ParameterGroups, store: &ParameterStore) -> String {
    if groups.is_empty() {
        return "No hay parámetros cargados.\n".to_string();
    }
    let mut out = String::new();
    for (group, items) in groups.iter() {
        let mut table = new_table();
        table.set_header(vec![
            Cell::new(group).add_attribute(Attribute::Bold),
            Cell::new("Valor").add_attribute(Attribute::Bold),
        ]);
        for item in items {
            let value = store.get(&item.label).map(ToString::to_string).unwrap_or_default();
            table.add_row(vec![
                Cell::new(&item.label),
                Cell::new(value).set_alignment(CellAlignment::Right),
            ]);
        }
        let _ = writeln!(out, "{table}");
    }
    out
}

/// Per-customer summary cards followed by the unit-economics charts.
pub fn render_unit_economics(ue: &UnitEconomics, chart_width: usize) -> String {
    let revenue = summary_table(
        "Ingresos por Cliente",
        &[
            ("Cuota base", format_currency(ue.base_fee)),
            ("Exceso VOZ", format_currency(ue.voice_excess_revenue)),
            ("Exceso HUMANO", format_currency(ue.human_excess_revenue)),
            ("Exceso MENSAJES", format_currency(ue.messages_excess_revenue)),
            ("Total Ingresos", format_currency(ue.total_revenue)),
        ],
        true,
    );
    let costs = summary_table(
        "Costes por Cliente",
        &[
            ("Coste VOZ", format_currency(ue.voice_cost)),
            ("Coste HUMANO", format_currency(ue.human_cost)),
            ("Coste MENSAJES", format_currency(ue.messages_cost)),
            ("Coste Soporte", format_currency(ue.support_cost)),
            ("Total Costes", format_currency(ue.total_cost)),
        ],
        true,
    );
    let margin = summary_table(
        "Margen por Cliente",
        &[
            ("Margen (€)", format_currency(ue.margin)),
            ("Margen (%)", format_percent(ue.margin_pct)),
        ],
        false,
    );

    let mut out = String::new();
    for table in [revenue, costs, margin] {
        let _ = writeln!(out, "{table}");
    }
    for chart in charts::unit_economics_charts(ue) {
        let _ = writeln!(out, "{}", render_chart(&chart, chart_width));
    }
    out
}

/// Monthly summary, margins, break-even analysis and the P&L charts.
pub fn render_pl(pl: &ProfitAndLoss, analysis: &BreakEvenAnalysis, chart_width: usize) -> String {
    let summary = summary_table(
        "P&L Mensual - Resumen",
        &[
            ("Clientes", format_number(pl.customers)),
            ("Ingresos (mes)", format_currency(pl.monthly_revenue)),
            ("Costes (mes)", format_currency(pl.monthly_cost)),
            ("Overhead", format_currency(pl.fixed_overhead)),
        ],
        false,
    );
    let gross = summary_table(
        "Margen Bruto",
        &[("Valor (€)", format_currency(pl.gross_margin))],
        false,
    );
    let net = summary_table(
        "Margen Neto",
        &[
            ("Valor (€)", format_currency(pl.net_margin)),
            ("Margen (%)", format_percent(pl.net_margin_pct)),
        ],
        false,
    );
    let break_even = summary_table(
        "Break-Even Analysis",
        &[
            ("Clientes Break-Even", analysis.break_even_customers.to_string()),
            ("Clientes Actuales", format_number(analysis.current_customers)),
            (
                "Margen de Seguridad",
                format!("{} clientes", format_number(analysis.safety_margin)),
            ),
        ],
        false,
    );

    let mut out = String::new();
    for table in [summary, gross, net, break_even] {
        let _ = writeln!(out, "{table}");
    }
    for chart in charts::pl_charts(pl, analysis) {
        let _ = writeln!(out, "{}", render_chart(&chart, chart_width));
    }
    out
}

/// Renders a chart as a table of horizontal bars scaled to `width` characters.
pub fn render_chart(chart: &Chart, width: usize) -> Table {
    let mut table = new_table();
    let mut header = vec![
        Cell::new(chart.title).add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new("Valor").add_attribute(Attribute::Bold),
    ];
    if chart.kind == ChartKind::Pie {
        header.push(Cell::new("%").add_attribute(Attribute::Bold));
    }
    table.set_header(header);

    let max = chart.max();
    let total = chart.total();
    for point in &chart.points {
        let value = match chart.unit {
            ValueUnit::Currency => format_currency(point.value),
            ValueUnit::Count => format_number(point.value),
        };
        let mut row = vec![
            Cell::new(point.name),
            Cell::new(bar(point.value, max, width)),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ];
        if chart.kind == ChartKind::Pie {
            row.push(
                Cell::new(format_percent(percentage(point.value, total)))
                    .set_alignment(CellAlignment::Right),
            );
        }
        table.add_row(row);
    }
    table
}

/// A bar proportional to `value / max`; empty for non-positive values.
pub fn bar(value: Decimal, max: Decimal, width: usize) -> String {
    if value <= Decimal::ZERO || max <= Decimal::ZERO {
        return String::new();
    }
    let len = value
        .checked_div(max)
        .and_then(|ratio| ratio.checked_mul(Decimal::from(width)))
        .and_then(|scaled| scaled.round().to_usize())
        .unwrap_or(0)
        .min(width);
    BAR.to_string().repeat(len)
}

fn summary_table(title: &str, rows: &[(&str, String)], emphasize_last: bool) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    for (i, (label, value)) in rows.iter().enumerate() {
        let mut label_cell = Cell::new(label);
        let mut value_cell = Cell::new(value).set_alignment(CellAlignment::Right);
        if emphasize_last && i + 1 == rows.len() {
            label_cell = label_cell.add_attribute(Attribute::Bold);
            value_cell = value_cell.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![label_cell, value_cell]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}
