// crates/isolate_tests/src/main.rs

use std::env;
use std::process;

use isolate_common::ExtractError;
use isolate_tests::config::LOG_ENV;
use isolate_tests::{build_cli, run, AppConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Structural diagnostics are printed to stdout, not stderr.
fn report_structural(err: &ExtractError) {
    match err {
        ExtractError::Indentation { path, block } => {
            println!("Indentation error in {}:", path.display());
            println!("{}", block);
        }
        other => println!("{}", other),
    }
}

fn main() {
    let matches = build_cli().get_matches();
    let config = match AppConfig::from_matches(&matches, |key| env::var(key).ok()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    };
    init_logging(config.verbose);
    log::debug!("{:?}", config);

    match run(&config) {
        Ok(summary) => {
            log::info!(
                "{} snippet(s) from {} document(s) written to {}",
                summary.files.len(),
                summary.documents,
                config.output_dir.display()
            );
        }
        Err(err) => {
            match err.downcast_ref::<ExtractError>() {
                Some(extract_err) if extract_err.is_structural() => report_structural(extract_err),
                _ => eprintln!("Error: {:#}", err),
            }
            process::exit(1);
        }
    }
}
