//! Example: Grover's search over five qubits.
//! Runs the default configuration (targets 0, 3, 9, 11), prints the circuits,
//! the measurement report and the chart bars.
//!
//! Pass a JSON file to override the configuration, e.g.
//! `{ "num_qubits": 3, "search": [0, 3], "seed": 42, "combine_states": true }`.
//! Set `RUST_LOG=qsearch=debug` to follow the amplification steps.

use qsearch::{GroverConfig, GroverSimulator, chart_series};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str::<GroverConfig>(&std::fs::read_to_string(path)?)?,
        None => GroverConfig::default().with_print_circuits(true),
    };

    println!("--- {} ({} qubits, {} shots) ---", config.title, config.num_qubits, config.shots);

    let simulator = GroverSimulator::new(config);
    if simulator.config().print_circuits {
        for circuit in simulator.circuits()? {
            println!("{}", circuit);
        }
    }

    let result = simulator.run()?;
    println!("{}", result);

    let combine = simulator.config().combine_states;
    let series = chart_series(result.histogram(), &result.outcome().winners, combine);
    println!("Chart bars:");
    for bar in series.winners.iter() {
        println!("  * {:>8} {}", bar.label, bar.count);
    }
    for bar in series.others.iter() {
        println!("    {:>8} {}", bar.label, bar.count);
    }

    Ok(())
}
