//! Flashplay command-line entrypoint.
//!
//! `generate` and `score` are one-shot commands over stdin/stdout; `serve` runs the
//! line-delimited JSON adapter until stdin closes. Logs go to stderr.

use std::io::Read;

use anyhow::Result;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use flashplay::adapter::{serve_lines, Adapter, AdapterConfig};
use flashplay::cli::{parse_args, run_generate, run_score, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("flashplay=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args)? {
        Command::Generate {
            game_type,
            category,
            overrides,
        } => {
            let input = read_stdin()?;
            let config = overrides.apply(AdapterConfig::from_env());
            println!(
                "{}",
                run_generate(config, &game_type, category.as_deref(), &input)?
            );
        }
        Command::Score { game_type } => {
            let input = read_stdin()?;
            println!("{}", run_score(&game_type, &input)?);
        }
        Command::Serve { overrides } => {
            let mut adapter = Adapter::new(overrides.apply(AdapterConfig::from_env()));
            let reader = BufReader::new(tokio::io::stdin());
            serve_lines(reader, tokio::io::stdout(), &mut adapter).await?;
        }
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
