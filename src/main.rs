use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use configuration::{Config, ConfigArgs, init_logging, load_config};
use core_types::ParameterEdit;
use dashboard::{View, render_parameters, render_pl, render_unit_economics};
use engine::AppState;

/// The main entry point for the business-case calculator.
fn main() {
    // BIZCASE__* overrides may live in a .env file; it is optional.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Unit economics and monthly P&L for a subscription service with usage-based excess pricing.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    session: SessionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SessionArgs {
    /// Edit a parameter before rendering, e.g. --set "Clientes (volumen)=1500".
    /// May be repeated; edits are applied in order.
    #[arg(long = "set", value_name = "LABEL=VALUE", global = true)]
    edits: Vec<ParameterEdit>,

    /// Recalculate the derived metrics after applying edits.
    /// Without it, the last calculated (or seeded) figures are shown.
    #[arg(long, global = true)]
    recompute: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every parameter group with its current values.
    Params,
    /// Show per-customer revenue, cost and margin with their charts.
    UnitEconomics,
    /// Show the monthly P&L, break-even analysis and charts.
    Pl,
    /// Show all three views in order.
    Report,
    /// Print the current inputs and derived records as JSON.
    Export,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.config.as_deref()).context("Failed to load configuration")?;
    // Keep the guard alive so the file writer flushes on exit.
    let _guard = init_logging(&config.logging).context("Failed to initialize logging")?;

    let mut state = AppState::load(&config.data);
    for edit in &cli.session.edits {
        state.apply(edit);
    }
    if cli.session.recompute {
        state.recompute();
    } else if state.is_stale() {
        tracing::warn!("Parameters were edited but not recalculated; showing previous figures.");
    }

    match cli.command {
        Commands::Params => print_view(View::Parameters, &state, &config),
        Commands::UnitEconomics => print_view(View::UnitEconomics, &state, &config),
        Commands::Pl => print_view(View::ProfitAndLoss, &state, &config),
        Commands::Report => {
            for view in View::ALL {
                print_view(view, &state, &config);
            }
        }
        Commands::Export => handle_export(&state)?,
    }
    Ok(())
}

fn print_view(view: View, state: &AppState, config: &Config) {
    let width = config.display.chart_width;
    let body = match view {
        View::Parameters => render_parameters(state.groups(), state.parameters()),
        View::UnitEconomics => render_unit_economics(state.unit_economics(), width),
        View::ProfitAndLoss => render_pl(state.pl(), &state.break_even(), width),
    };
    println!("== {} ==\n", view.title());
    print!("{body}");
}

fn handle_export(state: &AppState) -> anyhow::Result<()> {
    let document = serde_json::json!({
        "inputs": state.parameters(),
        "unitEconomics": state.unit_economics(),
        "pl": state.pl(),
        "breakEven": state.break_even(),
        "stale": state.is_stale(),
    });
    let rendered = serde_json::to_string_pretty(&document).context("Failed to serialize export")?;
    println!("{rendered}");
    Ok(())
}
