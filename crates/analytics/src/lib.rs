//! # Business Case Analytics Engine
//!
//! This crate turns a parameter set into the two derived records of the business
//! case: per-customer unit economics and the monthly profit-and-loss projection,
//! plus the break-even analysis shown next to them.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   terminals or logging setup. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `CalculationEngine` takes a `ParameterStore` and
//!   returns a fresh `Calculation`. Identical inputs always give identical outputs.
//! - **No Error Path:** Missing or unusable inputs fall back to the `defaults` table;
//!   undefined percentages are `None`.
//!
//! ## Public API
//!
//! - `CalculationEngine`: the calculation logic.
//! - `UnitEconomics`, `ProfitAndLoss`, `Calculation`: the derived records.
//! - `BreakEvenAnalysis`: render-time break-even figures.

// Declare the modules that constitute this crate.
pub mod break_even;
pub mod defaults;
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use break_even::{BreakEvenAnalysis, break_even_customers};
pub use defaults::{DEFAULTS, default_for};
pub use engine::{CalculationEngine, percentage};
pub use report::{Calculation, ProfitAndLoss, UnitEconomics};
