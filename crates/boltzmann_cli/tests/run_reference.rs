//! End-to-end run against the checked-in reference network file.

use boltzmann_core::{analyze, SimulationOptions};

#[test]
fn test_reference_file_end_to_end() {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../demos/reference_network.txt"
    );
    let text = std::fs::read_to_string(path).expect("reference network file present");

    let config = boltzmann_cli::loader::parse_network(&text).expect("reference file parses");
    assert_eq!(config.units(), 3);

    let analysis = analyze(&config, &SimulationOptions::default()).expect("pipeline runs");
    assert!(analysis.stationary.converged);

    let total: f64 = analysis.stationary.distribution.iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
}
