use configuration::DataSources;
use core_types::ParameterKey;
use engine::AppState;
use rust_decimal_macros::dec;
use std::path::PathBuf;

fn shipped_sources() -> DataSources {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    DataSources {
        parameter_groups: data_dir.join("data-grouped.json"),
        seed_results: data_dir.join("data.json"),
    }
}

#[test]
fn shipped_documents_load_completely() {
    let state = AppState::load(&shipped_sources());

    assert_eq!(state.groups().0.len(), 4);
    assert_eq!(state.parameters().len(), ParameterKey::ALL.len());
    for key in ParameterKey::ALL {
        assert!(state.parameters().get_key(key).is_some(), "missing {key:?}");
    }
}

#[test]
fn recompute_matches_the_shipped_seed() {
    let mut state = AppState::load(&shipped_sources());
    let seeded = state.results().clone();

    let computed = state.recompute();

    assert_eq!(computed.unit_economics.total_revenue, seeded.unit_economics.total_revenue);
    assert_eq!(computed.unit_economics.total_cost, seeded.unit_economics.total_cost);
    assert_eq!(computed.unit_economics.margin, seeded.unit_economics.margin);
    assert_eq!(computed.pl.monthly_revenue, seeded.pl.monthly_revenue);
    assert_eq!(computed.pl.monthly_cost, seeded.pl.monthly_cost);
    assert_eq!(computed.pl.net_margin, seeded.pl.net_margin);
    // The seed stores percentages at f64 precision.
    assert_eq!(
        computed.pl.net_margin_pct.map(|p| p.round_dp(10)),
        seeded.pl.net_margin_pct.map(|p| p.round_dp(10))
    );
}

#[test]
fn end_to_end_edit_and_recompute() {
    let mut state = AppState::load(&shipped_sources());

    state.edit(ParameterKey::Customers.label(), "1500");
    state.edit(ParameterKey::BaseMonthlyFee.label(), "30");
    assert_eq!(state.pl().customers, dec!(1000));

    let results = state.recompute();
    assert_eq!(results.unit_economics.total_revenue, dec!(37.8));
    assert_eq!(results.unit_economics.margin, dec!(22));
    assert_eq!(results.pl.monthly_revenue, dec!(56700));
    assert_eq!(results.pl.net_margin, dec!(23000));

    let break_even = state.break_even();
    assert_eq!(break_even.break_even_customers, dec!(455));
    assert_eq!(break_even.safety_margin, dec!(1045));
}

#[test]
fn missing_documents_degrade_to_empty_state() {
    let sources = DataSources {
        parameter_groups: PathBuf::from("does/not/exist.json"),
        seed_results: shipped_sources().seed_results,
    };
    let state = AppState::load(&sources);

    assert!(state.groups().is_empty());
    assert!(state.parameters().is_empty());
    // The other document still loads.
    assert_eq!(state.pl().customers, dec!(1000));
}
