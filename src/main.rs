//! Binary entrypoint: trains on `CHAR_BPTT_INPUT_PATH` (or the alphabet) and prints progress.
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=char_bptt=debug`).

use char_bptt::config::from_env;
use char_bptt::run;
use char_bptt::train::ConsoleReporter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = from_env()
        .and_then(|config| config.validate().map(|()| config))
        .inspect_err(|e| tracing::error!(reason = e.message(), "invalid configuration"))?;
    tracing::info!(?config, "configuration");

    let out = run(&config, &mut ConsoleReporter)?;

    println!("\n--- final prediction ---");
    println!("input:            {}", out.final_prediction.seed);
    println!(
        "next predictions: {}",
        out.final_prediction.predicted_string()
    );
    Ok(())
}
