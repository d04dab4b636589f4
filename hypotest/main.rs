use anyhow::Result;
use clap::Parser;
use hypotest::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::parse().resolve()?;
    init_tracing(config.verbose);
    config.validate()?;

    let outcome = run(&config)?;

    let report = if config.json {
        to_json(&outcome)?
    } else {
        render_report(&outcome, &config)?
    };
    println!("{}", report);

    if let Some(path) = &config.output {
        write_report(path, &report, config.append)?;
    }

    Ok(())
}

// Logs go to stderr so stdout carries only the report. RUST_LOG overrides
// the level picked by --verbose.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
