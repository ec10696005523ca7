use std::env;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use yieldcalc::api::{self, RequestError};

const DEFAULT_PORT: u16 = 8080;

fn usage() -> ! {
    eprintln!("Usage: yieldcalc serve [port]");
    eprintln!("       yieldcalc analyze [--property-price N] [--unit-rent R ...] [--pretty] ...");
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let raw_args: Vec<String> = env::args().collect();
    match raw_args.get(1).map(|s| s.as_str()) {
        Some("serve") => {
            let port = raw_args
                .get(2)
                .cloned()
                .or_else(|| env::var("YIELDCALC_PORT").ok())
                .map(|raw| {
                    raw.parse::<u16>()
                        .with_context(|| format!("invalid port {raw:?}"))
                })
                .transpose()?
                .unwrap_or(DEFAULT_PORT);
            api::run_http_server(port)
                .await
                .context("HTTP server failed")?;
            Ok(())
        }
        Some("analyze") => {
            let args = std::iter::once("yieldcalc analyze".to_string())
                .chain(raw_args.into_iter().skip(2));
            match api::analyze_cli(args) {
                Ok(report) => {
                    println!("{report}");
                    Ok(())
                }
                Err(RequestError::Cli(err)) => err.exit(),
                Err(err) => Err(err.into()),
            }
        }
        _ => usage(),
    }
}
