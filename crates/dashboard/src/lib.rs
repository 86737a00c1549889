//! Terminal presentation of the business case: es-ES formatting, chart series and
//! the three views (parameters, unit economics, P&L).
//!
//! Nothing here computes business figures; views only read the records handed in.

pub mod charts;
pub mod format;
pub mod views;

pub use charts::{Chart, ChartKind, ChartPoint, ValueUnit};
pub use format::{format_currency, format_number, format_percent};
pub use views::{View, render_parameters, render_pl, render_unit_economics};
