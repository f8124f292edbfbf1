use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use health_counter::demo::{load_scenario, run_scenario, Scenario};
use tracing_subscriber::filter::LevelFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(LevelFilter::INFO)
        .with_target(false)
        .init();

    let scenario = match parse_scenario_path(env::args().collect()) {
        Some(path) => match load_scenario(&path) {
            Ok(scenario) => scenario,
            Err(err) => {
                eprintln!("Failed to load scenario: {}", err);
                std::process::exit(1);
            }
        },
        None => Scenario::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run_scenario(&scenario, &mut out) {
        eprintln!("Scenario failed: {}", err);
        std::process::exit(1);
    }
    let _ = out.flush();
}

fn parse_scenario_path(args: Vec<String>) -> Option<PathBuf> {
    let mut iter = args.iter();
    let mut scenario_path = None;
    while let Some(arg) = iter.next() {
        if arg == "--scenario" {
            if let Some(value) = iter.next() {
                scenario_path = Some(PathBuf::from(value));
            }
        }
    }
    scenario_path
}
