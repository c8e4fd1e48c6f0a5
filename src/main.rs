mod band;
mod cli;
mod columns;
mod converter;
mod csv_in;
mod errors;
mod kml;
mod labels;
mod model;

use anyhow::Context;
use env_logger::Env;
use log::info;

fn setup_logging(level: &str) {
    let env = Env::default().filter_or("RUST_LOG", match level {
        "essential" => "info",
        "debug" => "debug",
        "trace" => "trace",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    });
    env_logger::Builder::from_env(env).init();
}

fn main() -> anyhow::Result<()> {
    let args = cli::parse_cli();
    setup_logging(&args.log_level);

    let summary = converter::run(&args.input, args.output.as_deref(), args.convert_options())
        .with_context(|| format!("converting {}", args.input))?;

    info!(
        "Done: {} repeaters written, {} skipped",
        summary.records, summary.skipped
    );
    Ok(())
}
